//! # Element Configuration Module
//!
//! ## Purpose
//! Holds every option of one chemical equation input as a single struct with
//! documented defaults, so the attribute lookups of the host are done once.
//!
//! ## Configuration Format
//! Keys are the attribute names of the element; only `question-name` is required.
//! ```json
//! {
//!   "question-name": "combustion",
//!   "grade-states": true,
//!   "weight": 2
//! }
//! ```
//! Unknown keys are rejected.

use crate::Grader::grader_error::GraderError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const PLACEHOLDER_DEFAULT: &str = "Your answer here";
pub const SIZE_DEFAULT: u32 = 100;
pub const WEIGHT_DEFAULT: u32 = 1;

pub const HELP_TEXT: &str = "The leftmost button is the subscript button, the middle button is the superscript button, and the rightmost button is the clear formatting button. Any value can be inputted in place of x or 2 for the superscript and subscript values. You can use -> (dash and greater than sign) to indicate an arrow. States of matter can be indicated using (l), (s), and (g).";

/// Options of one chemical equation input.
///
/// # Fields
/// * `question_name` - unique key of the input within a form, also the key of its reference answer
/// * `allow_blank` - accept an empty submission instead of reporting a format error
/// * `weight` - passed through to the score untouched
/// * `grade_states` - include states of matter in the verdict
/// * `include_feedback` - tell the student which aspects are wrong
/// * `show_score` - display the score badge
/// * `size` - editor width in percent, clamped to 0..=100
/// * `placeholder` - text shown in an empty editor
/// * `prefill` - initial editor contents, takes precedence over inline text
/// * `source_file_name` - file with the initial editor contents; excludes inline text
/// * `markdown_shortcuts` - enable markdown shortcuts in the editor
/// * `show_help_text` - display the help button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ElementConfig {
    pub question_name: String,
    #[serde(default)]
    pub allow_blank: bool,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub grade_states: bool,
    #[serde(default = "default_true")]
    pub include_feedback: bool,
    #[serde(default = "default_true")]
    pub show_score: bool,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub prefill: Option<String>,
    #[serde(default)]
    pub source_file_name: Option<String>,
    #[serde(default)]
    pub markdown_shortcuts: bool,
    #[serde(default = "default_true")]
    pub show_help_text: bool,
}

fn default_true() -> bool {
    true
}
fn default_weight() -> u32 {
    WEIGHT_DEFAULT
}
fn default_size() -> u32 {
    SIZE_DEFAULT
}
fn default_placeholder() -> String {
    PLACEHOLDER_DEFAULT.to_string()
}

impl ElementConfig {
    /// Config with every option at its default.
    pub fn new(question_name: &str) -> Self {
        Self {
            question_name: question_name.to_string(),
            allow_blank: false,
            weight: WEIGHT_DEFAULT,
            grade_states: false,
            include_feedback: true,
            show_score: true,
            size: SIZE_DEFAULT,
            placeholder: PLACEHOLDER_DEFAULT.to_string(),
            prefill: None,
            source_file_name: None,
            markdown_shortcuts: false,
            show_help_text: true,
        }
    }

    pub fn with_grade_states(mut self, grade_states: bool) -> Self {
        self.grade_states = grade_states;
        self
    }

    pub fn with_include_feedback(mut self, include_feedback: bool) -> Self {
        self.include_feedback = include_feedback;
        self
    }

    pub fn with_allow_blank(mut self, allow_blank: bool) -> Self {
        self.allow_blank = allow_blank;
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, GraderError> {
        let config: ElementConfig = serde_json::from_str(json)?;
        config.validate(None)
    }

    /// Loads one element config, or a list of them, from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Vec<Self>, GraderError> {
        let content = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        let configs: Vec<ElementConfig> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            vec![serde_json::from_value(value)?]
        };
        configs.into_iter().map(|c| c.validate(None)).collect()
    }

    /// Checks the options once, before any grading. `inline_text` is the text
    /// written inside the element, if any.
    pub fn validate(mut self, inline_text: Option<&str>) -> Result<Self, GraderError> {
        if self.question_name.trim().is_empty() {
            return Err(GraderError::Config(
                "question-name must not be empty".to_string(),
            ));
        }
        let has_inline_text = inline_text.is_some_and(|t| !t.trim().is_empty());
        if self.source_file_name.is_some() && has_inline_text {
            return Err(GraderError::ConflictingSource {
                question: self.question_name.clone(),
            });
        }
        if self.size > SIZE_DEFAULT {
            warn!(
                "size {} of {} is clamped to {}",
                self.size, self.question_name, SIZE_DEFAULT
            );
            self.size = SIZE_DEFAULT;
        }
        Ok(self)
    }
}
