use thiserror::Error;

/// Errors raised while setting up an element or reading a submission.
/// Comparing equations never fails, so there is no variant for it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraderError {
    #[error("Invalid HTML structure in {question}: {details}")]
    MalformedMarkup { question: String, details: String },
    #[error("No submitted answer for {question}")]
    MissingAnswer { question: String },
    #[error("There is more than one chemical equation input with the question name {question}")]
    AmbiguousConfiguration { question: String },
    #[error(
        "Existing text cannot be added inside element {question} when a source file name is used"
    )]
    ConflictingSource { question: String },
    #[error("Submission for {question} is not valid base64-encoded UTF-8: {details}")]
    InvalidEncoding { question: String, details: String },
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GraderError {
    /// question the error belongs to, `None` for configuration-wide errors
    pub fn question(&self) -> Option<&str> {
        match self {
            GraderError::MalformedMarkup { question, .. }
            | GraderError::MissingAnswer { question }
            | GraderError::AmbiguousConfiguration { question }
            | GraderError::ConflictingSource { question }
            | GraderError::InvalidEncoding { question, .. } => Some(question),
            GraderError::Config(_) => None,
        }
    }

    /// format errors are reported next to the field and do not stop other fields from grading
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            GraderError::MalformedMarkup { .. }
                | GraderError::MissingAnswer { .. }
                | GraderError::InvalidEncoding { .. }
        )
    }
}

impl From<serde_json::Error> for GraderError {
    fn from(e: serde_json::Error) -> Self {
        GraderError::Config(e.to_string())
    }
}

impl From<std::io::Error> for GraderError {
    fn from(e: std::io::Error) -> Self {
        GraderError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GraderError::MissingAnswer {
            question: "q1".to_string(),
        };
        assert_eq!(err.to_string(), "No submitted answer for q1");
        assert_eq!(err.question(), Some("q1"));
        assert!(err.is_format_error());

        let err = GraderError::Config("bad json".to_string());
        assert_eq!(err.question(), None);
        assert!(!err.is_format_error());
    }

    #[test]
    fn test_from_serde_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GraderError::from(parse_err);
        assert!(matches!(err, GraderError::Config(_)));
    }

    #[test]
    fn test_errors_are_cloned_into_reports() {
        let err = GraderError::MalformedMarkup {
            question: "q1".to_string(),
            details: "Unexpected open element".to_string(),
        };
        let copy = err.clone();
        assert_eq!(copy, err);
        assert_eq!(copy.question(), Some("q1"));
    }
}
