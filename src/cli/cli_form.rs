use super::cli_main::prompt;
use crate::Grader::chem_input_form::{ChemInputForm, FormReport};
use crate::Grader::element_config::ElementConfig;
use crate::Grader::grader_error::GraderError;
use crate::Grader::submission::encode_submission;
use prettytable::{Cell, Row, Table};
use std::collections::HashMap;
use std::path::Path;

pub fn form_menu() {
    println!("\n=== Grade inputs from a config file ===");
    let Some(path) = prompt("Path to JSON config: ") else {
        return;
    };
    match run_form(Path::new(&path)) {
        Ok(report) => {
            report_table(&report).printstd();
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn run_form(path: &Path) -> Result<FormReport, GraderError> {
    let configs = ElementConfig::from_json_file(path)?;
    let questions: Vec<String> = configs.iter().map(|c| c.question_name.clone()).collect();
    let form = ChemInputForm::from_configs(configs)?;
    let mut submitted = HashMap::new();
    let mut correct = HashMap::new();
    for question in questions {
        println!("\n--- {} ---", question);
        // an empty line is a blank submission
        if let Some(answer) = prompt("Submission (editor HTML or plain text): ") {
            if !answer.is_empty() {
                submitted.insert(question.clone(), encode_submission(&answer));
            }
        }
        if let Some(reference) = prompt("Reference answer: ") {
            correct.insert(question, reference);
        }
    }
    Ok(form.grade_all(&submitted, &correct))
}

pub(crate) fn report_table(report: &FormReport) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Question"),
        Cell::new("Score"),
        Cell::new("Weight"),
        Cell::new("Feedback / error"),
    ]));
    for (question, score) in report.scores.iter() {
        table.add_row(Row::new(vec![
            Cell::new(question),
            Cell::new(&score.score.to_string()),
            Cell::new(&score.weight.to_string()),
            Cell::new(score.feedback.as_deref().unwrap_or("")),
        ]));
    }
    for (question, error) in report.errors.iter() {
        let weight = report
            .error_weights
            .get(question)
            .map_or("-".to_string(), |w| w.to_string());
        table.add_row(Row::new(vec![
            Cell::new(question),
            Cell::new("-"),
            Cell::new(&weight),
            Cell::new(&error.to_string()),
        ]));
    }
    table.add_row(Row::new(vec![
        Cell::new("total"),
        Cell::new(&format!("{:.2}", report.total())),
        Cell::new(""),
        Cell::new(""),
    ]));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grader::chem_input_form::PartialScore;

    #[test]
    fn test_report_table_rows() {
        let mut report = FormReport::default();
        report.scores.insert(
            "q1".to_string(),
            PartialScore {
                score: 1,
                weight: 1,
                feedback: None,
            },
        );
        report.record_error(
            "q2",
            3,
            GraderError::MissingAnswer {
                question: "q2".to_string(),
            },
        );
        let table = report_table(&report);
        // header, one score, one error, total
        assert_eq!(table.len(), 4);
        assert_eq!(report.total(), 0.25);
    }
}
