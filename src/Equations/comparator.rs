use crate::Equations::equation_parser::ParsedEquation;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const FEEDBACK_PREFIX: &str = "There are issues with your: ";
pub const FEEDBACK_DISABLED: &str = "Feedback has been disabled for this question.";

/// Part of an equation that can be wrong. The declaration order is the order
/// in which the aspects are listed in feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Reactants,
    Products,
    StatesOfMatter,
    Coefficients,
}

impl Aspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Reactants => "reactants",
            Aspect::Products => "products",
            Aspect::StatesOfMatter => "states of matter",
            Aspect::Coefficients => "coefficients",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub passed: bool,
    pub failing_aspects: BTreeSet<Aspect>,
}

impl Comparison {
    /// "There are issues with your: reactants, products and coefficients."
    /// `None` for a passed comparison.
    pub fn feedback(&self, include_feedback: bool) -> Option<String> {
        if self.passed {
            return None;
        }
        if !include_feedback {
            return Some(FEEDBACK_DISABLED.to_string());
        }
        let names: Vec<&str> = self.failing_aspects.iter().map(Aspect::as_str).collect();
        let listed = match names.split_last() {
            Some((last, [])) => last.to_string(),
            Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
            None => String::new(),
        };
        Some(format!("{}{}.", FEEDBACK_PREFIX, listed))
    }
}

/// Compares two equations term by term.
/// Reactants and products are compared as sorted lists, so order does not matter
/// but the number of repetitions does. States of matter and coefficients are
/// compared as whole maps; states only when `check_states` is set.
pub fn compare(
    student: &ParsedEquation,
    reference: &ParsedEquation,
    check_states: bool,
) -> Comparison {
    let (student_reactants, student_products) = student.sorted_sides();
    let (reference_reactants, reference_products) = reference.sorted_sides();

    let mut failing_aspects = BTreeSet::new();
    if student_reactants != reference_reactants {
        failing_aspects.insert(Aspect::Reactants);
    }
    if student_products != reference_products {
        failing_aspects.insert(Aspect::Products);
    }
    if check_states && student.states_of_matter != reference.states_of_matter {
        failing_aspects.insert(Aspect::StatesOfMatter);
    }
    if student.coefficients != reference.coefficients {
        failing_aspects.insert(Aspect::Coefficients);
    }
    debug!("failing aspects: {:?}", failing_aspects);
    Comparison {
        passed: failing_aspects.is_empty(),
        failing_aspects,
    }
}
