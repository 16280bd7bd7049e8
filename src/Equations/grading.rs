use crate::Equations::comparator::{Comparison, compare};
use crate::Equations::equation_parser::{ParsedEquation, parse_equation};
use crate::Equations::normalizer::{SourceForm, normalize};
use crate::Equations::notation::CANONICAL_ARROW;
use log::info;
use serde::{Deserialize, Serialize};

/// binary outcome of grading one equation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Grade {
    pub fn from_comparison(comparison: &Comparison, include_feedback: bool) -> Self {
        Grade {
            score: u8::from(comparison.passed),
            feedback: comparison.feedback(include_feedback),
        }
    }

    pub fn passed(&self) -> bool {
        self.score == 1
    }
}

/// `is_compact_source` is true for hand-authored reference answers and false for editor HTML.
pub fn normalize_for_parsing(markup_text: &str, is_compact_source: bool) -> String {
    normalize(markup_text, SourceForm::from(is_compact_source))
}

/// Parses text that went through `normalize_for_parsing`, splitting on the canonical arrow.
pub fn parse_normalized(plain_text: &str) -> ParsedEquation {
    parse_equation(plain_text, CANONICAL_ARROW)
}

/// Grades normalized student text against normalized reference text.
/// Never fails: degenerate inputs such as empty strings still produce a verdict.
pub fn grade_equation(
    student_plain_text: &str,
    reference_plain_text: &str,
    check_states: bool,
    include_feedback: bool,
) -> Grade {
    let student = parse_normalized(student_plain_text);
    let reference = parse_normalized(reference_plain_text);
    let comparison = compare(&student, &reference, check_states);
    let grade = Grade::from_comparison(&comparison, include_feedback);
    info!(
        "graded {:?} against {:?}: score {}",
        student_plain_text.trim(),
        reference_plain_text.trim(),
        grade.score
    );
    grade
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_identical_equations() {
        let grade = grade_equation("2H_{2}+O_{2}-&gt;2H_{2}O", "2H_{2}+O_{2}-&gt;2H_{2}O", true, true);
        assert!(grade.passed());
        assert_eq!(grade.feedback, None);
    }

    #[test]
    fn test_grade_missing_coefficient() {
        let grade = grade_equation("H_{2}+O_{2}-&gt;H_{2}O", "2H_{2}+O_{2}-&gt;2H_{2}O", false, true);
        assert_eq!(grade.score, 0);
        assert_eq!(
            grade.feedback.as_deref(),
            Some("There are issues with your: coefficients.")
        );
    }

    #[test]
    fn test_grade_empty_inputs() {
        assert_eq!(grade_equation("", "", true, true).score, 1);
        let grade = grade_equation("", "A-&gt;B", true, false);
        assert_eq!(grade.score, 0);
        assert_eq!(
            grade.feedback.as_deref(),
            Some("Feedback has been disabled for this question.")
        );
    }

    #[test]
    fn test_grade_serializes_without_empty_feedback() {
        let grade = Grade {
            score: 1,
            feedback: None,
        };
        assert_eq!(serde_json::to_string(&grade).unwrap(), r#"{"score":1}"#);
    }
}
