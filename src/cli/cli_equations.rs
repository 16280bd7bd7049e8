use super::cli_main::{prompt, prompt_yes_no};
use crate::Equations::grading::{Grade, grade_equation, normalize_for_parsing, parse_normalized};
use crate::Equations::notation::{normalize_shorthand, to_compact_markup, to_inline_markup};

pub fn grade_menu() {
    println!("\n=== Grade an equation ===");
    println!("Write equations in compact form, e.g. 2H_2 + O_2 -> 2H_2O(l)");
    let Some(student) = prompt("Student answer: ") else {
        return;
    };
    let Some(reference) = prompt("Reference answer: ") else {
        return;
    };
    let check_states = prompt_yes_no("Grade states of matter? [y/N]: ", false);
    let include_feedback = prompt_yes_no("Include feedback? [Y/n]: ", true);

    let grade = grade_compact(&student, &reference, check_states, include_feedback);
    println!("{}", describe_grade(&grade));
}

pub fn parse_menu() {
    println!("\n=== Parse an equation ===");
    let Some(equation) = prompt("Equation: ") else {
        return;
    };
    let parsed = parse_normalized(&normalize_for_parsing(&equation, true));
    parsed.pretty_print();
}

pub fn convert_menu() {
    loop {
        println!("\n=== Convert markup ===");
        println!("1. Compact -> HTML (H_2O -> H<sub>2</sub>O)");
        println!("2. HTML -> compact (H<sub>2</sub>O -> H_{{2}}O)");
        println!("0. Back to main menu");
        let Some(choice) = prompt("Enter your choice: ") else {
            return;
        };
        let direction = match choice.as_str() {
            "1" => Direction::ToInline,
            "2" => Direction::ToCompact,
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };
        if let Some(text) = prompt("Text: ") {
            println!("{}", convert(&text, direction));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    ToInline,
    ToCompact,
}

pub(crate) fn convert(text: &str, direction: Direction) -> String {
    match direction {
        Direction::ToInline => to_inline_markup(&normalize_shorthand(text)),
        Direction::ToCompact => to_compact_markup(text).trim_end().to_string(),
    }
}

/// both sides typed by hand, so both are treated as compact sources
pub(crate) fn grade_compact(
    student: &str,
    reference: &str,
    check_states: bool,
    include_feedback: bool,
) -> Grade {
    let student = normalize_for_parsing(student, true);
    let reference = normalize_for_parsing(reference, true);
    grade_equation(&student, &reference, check_states, include_feedback)
}

pub(crate) fn describe_grade(grade: &Grade) -> String {
    match &grade.feedback {
        None if grade.passed() => "\x1b[32mCorrect (score 1)\x1b[0m".to_string(),
        None => "\x1b[31mIncorrect (score 0)\x1b[0m".to_string(),
        Some(feedback) => format!("\x1b[31mIncorrect (score 0)\x1b[0m\n{}", feedback),
    }
}
