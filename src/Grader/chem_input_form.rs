//! # Chemical Equation Form Module
//!
//! ## Purpose
//! Collects the chemical equation inputs of one question page and grades them.
//!
//! ## Main Data Structures and Logic
//! - `ChemInputForm`: registry of `ElementConfig`s keyed by question name; a name may
//!   appear once, a second registration is an `AmbiguousConfiguration` error
//! - `PartialScore`: score, weight and feedback of one input, what the host stores
//! - `FormReport`: scores of the inputs that could be graded plus the errors of those that could not;
//!   an input that errored still counts with its weight and a score of zero
//!
//! ## Grading of one input
//! 1. the base64 payload is decoded and cleaned (`submission` module); a missing payload is an
//!    error unless the input allows blanks
//! 2. the cleaned HTML and the reference answer are normalized independently
//! 3. both are parsed and compared (`Equations` module)
//!
//! An error in one input never stops the others from being graded.

use crate::Equations::grading::{Grade, grade_equation, normalize_for_parsing};
use crate::Equations::normalizer::{editor_contents, reference_to_markup};
use crate::Grader::element_config::ElementConfig;
use crate::Grader::grader_error::GraderError;
use crate::Grader::submission::{clean_submission, decode_submission};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// what the host stores for one graded input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialScore {
    pub score: u8,
    pub weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl PartialScore {
    pub fn new(grade: Grade, weight: u32) -> Self {
        PartialScore {
            score: grade.score,
            weight,
            feedback: grade.feedback,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    pub scores: BTreeMap<String, PartialScore>,
    pub errors: BTreeMap<String, GraderError>,
    /// weights of the inputs listed in `errors`
    pub error_weights: BTreeMap<String, u32>,
}

impl FormReport {
    pub fn record_error(&mut self, question: &str, weight: u32, error: GraderError) {
        self.errors.insert(question.to_string(), error);
        self.error_weights.insert(question.to_string(), weight);
    }

    /// weighted sum of scores over weighted sum of all inputs, errors count as zero
    pub fn total(&self) -> f64 {
        let earned: u32 = self.scores.values().map(|s| s.score as u32 * s.weight).sum();
        let possible: u32 = self.scores.values().map(|s| s.weight).sum::<u32>()
            + self.error_weights.values().sum::<u32>();
        if possible == 0 {
            0.0
        } else {
            earned as f64 / possible as f64
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChemInputForm {
    elements: Vec<ElementConfig>,
    index: HashMap<String, usize>,
}

impl ChemInputForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_configs(configs: Vec<ElementConfig>) -> Result<Self, GraderError> {
        let mut form = Self::new();
        for config in configs {
            form.register(config)?;
        }
        Ok(form)
    }

    /// Validates and adds an input; the question name must not be taken already.
    pub fn register(&mut self, config: ElementConfig) -> Result<(), GraderError> {
        let config = config.validate(None)?;
        if self.index.contains_key(&config.question_name) {
            return Err(GraderError::AmbiguousConfiguration {
                question: config.question_name,
            });
        }
        self.index
            .insert(config.question_name.clone(), self.elements.len());
        self.elements.push(config);
        Ok(())
    }

    /// Validates the config against the text written inside the element, then registers it.
    pub fn register_with_text(
        &mut self,
        config: ElementConfig,
        inline_text: &str,
    ) -> Result<(), GraderError> {
        let config = config.validate(Some(inline_text))?;
        self.register(config)
    }

    pub fn element(&self, question: &str) -> Option<&ElementConfig> {
        self.index.get(question).map(|&i| &self.elements[i])
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn element_or_err(&self, question: &str) -> Result<&ElementConfig, GraderError> {
        self.element(question)
            .ok_or_else(|| GraderError::Config(format!("unknown question {}", question)))
    }

    /// Decoded and cleaned HTML of a submission. A missing or empty payload is an
    /// empty answer when blanks are allowed and an error otherwise.
    pub fn parse_submission(
        &self,
        question: &str,
        encoded: Option<&str>,
    ) -> Result<String, GraderError> {
        let config = self.element_or_err(question)?;
        let encoded = encoded.filter(|e| !e.trim().is_empty());
        match encoded {
            None if config.allow_blank => Ok(String::new()),
            None => Err(GraderError::MissingAnswer {
                question: question.to_string(),
            }),
            Some(encoded) => {
                let markup = decode_submission(encoded, question)?;
                clean_submission(&markup, question)
            }
        }
    }

    /// Grades one input against its reference answer written in compact markup.
    pub fn grade_question(
        &self,
        question: &str,
        encoded: Option<&str>,
        reference: &str,
    ) -> Result<PartialScore, GraderError> {
        let config = self.element_or_err(question)?;
        let submission = self.parse_submission(question, encoded)?;
        let student = normalize_for_parsing(&submission, false);
        let reference = normalize_for_parsing(reference, true);
        let grade = grade_equation(
            &student,
            &reference,
            config.grade_states,
            config.include_feedback,
        );
        Ok(PartialScore::new(grade, config.weight))
    }

    /// Grades every registered input. `submitted` maps question names to base64 payloads,
    /// `correct` maps them to reference answers.
    pub fn grade_all(
        &self,
        submitted: &HashMap<String, String>,
        correct: &HashMap<String, String>,
    ) -> FormReport {
        let mut report = FormReport::default();
        for config in self.elements.iter() {
            let question = config.question_name.as_str();
            let Some(reference) = correct.get(question) else {
                warn!("no correct answer for {}", question);
                report.record_error(
                    question,
                    config.weight,
                    GraderError::Config(format!("no correct answer for {}", question)),
                );
                continue;
            };
            let encoded = submitted.get(question).map(|s| s.as_str());
            match self.grade_question(question, encoded, reference) {
                Ok(score) => {
                    report.scores.insert(question.to_string(), score);
                }
                Err(e) => {
                    warn!("{}", e);
                    report.record_error(question, config.weight, e);
                }
            }
        }
        info!(
            "graded {} inputs, {} errors",
            report.scores.len(),
            report.errors.len()
        );
        report
    }

    /// Reference answer as HTML for the answer panel.
    pub fn answer_markup(&self, question: &str, reference: &str) -> Result<String, GraderError> {
        self.element_or_err(question)?;
        Ok(reference_to_markup(reference))
    }

    /// What the editor shows before the student types: the prefill if set, otherwise the
    /// text written inside the element.
    pub fn initial_contents(
        &self,
        question: &str,
        inline_text: Option<&str>,
    ) -> Result<String, GraderError> {
        let config = self.element_or_err(question)?;
        let text = config.prefill.as_deref().or(inline_text).unwrap_or("");
        Ok(editor_contents(text))
    }
}
