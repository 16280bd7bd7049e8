use log::debug;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// structure of a chemical equation as written by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEquation {
    pub reactants: Vec<String>, // left side, in input order, duplicates kept
    pub products: Vec<String>,  // right side, empty if there was no arrow
    pub states_of_matter: BTreeMap<String, String>, // {"NaCl": "(aq)"} only for terms that have a state
    pub coefficients: BTreeMap<String, String>, // {"H_{2}": "2"} only for terms that have a coefficient
}

/// one `+`-separated piece of an equation split into its three parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term<'a> {
    pub coefficient: &'a str,
    pub species: &'a str,
    pub state: Option<&'a str>,
}

impl<'a> Term<'a> {
    /// Leading non-alphabetic run is the coefficient, the rest is the species.
    /// If the species contains both `(` and `)` it is cut at the first `(` and the tail is the state.
    pub fn lex(raw: &'a str) -> Self {
        let raw = raw.trim();
        let species_start = raw
            .find(|c: char| c.is_alphabetic())
            .unwrap_or(raw.len());
        let (coefficient, rest) = raw.split_at(species_start);
        let (species, state) = match rest.find('(') {
            Some(open) if rest.contains(')') => (&rest[..open], Some(&rest[open..])),
            _ => (rest, None),
        };
        Term {
            coefficient,
            species,
            state,
        }
    }
}

impl ParsedEquation {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, raw_term: &str, is_product: bool) {
        let term = Term::lex(raw_term);
        let species = term.species.to_string();
        if let Some(state) = term.state {
            self.states_of_matter
                .insert(species.clone(), state.to_string());
        }
        if !term.coefficient.is_empty() {
            self.coefficients
                .insert(species.clone(), term.coefficient.to_string());
        }
        if is_product {
            self.products.push(species);
        } else {
            self.reactants.push(species);
        }
    }

    /// reactants and products sorted, the form they are compared in
    pub fn sorted_sides(&self) -> (Vec<&str>, Vec<&str>) {
        let mut reactants: Vec<&str> = self.reactants.iter().map(|s| s.as_str()).collect();
        let mut products: Vec<&str> = self.products.iter().map(|s| s.as_str()).collect();
        reactants.sort_unstable();
        products.sort_unstable();
        (reactants, products)
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Side"),
            Cell::new("Coefficient"),
            Cell::new("Species"),
            Cell::new("State"),
        ]));
        let sides = [("reactant", &self.reactants), ("product", &self.products)];
        for (side, terms) in sides {
            for term in terms.iter() {
                let coefficient = self.coefficients.get(term).map_or("", |c| c.as_str());
                let state = self.states_of_matter.get(term).map_or("", |s| s.as_str());
                table.add_row(Row::new(vec![
                    Cell::new(side),
                    Cell::new(coefficient),
                    Cell::new(term),
                    Cell::new(state),
                ]));
            }
        }
        table
    }

    pub fn pretty_print(&self) {
        self.to_table().printstd();
    }
}

/// Splits `equation` at the first `arrow` and lexes every `+`-separated term.
/// An equation without the arrow has no products; this is not an error.
pub fn parse_equation(equation: &str, arrow: &str) -> ParsedEquation {
    let (left, right) = match equation.split_once(arrow) {
        Some((left, right)) if !arrow.is_empty() => (left, right),
        _ => (equation, ""),
    };
    let mut parsed = ParsedEquation::new();
    for raw_term in left.split('+') {
        parsed.record(raw_term, false);
    }
    if !right.is_empty() {
        for raw_term in right.split('+') {
            parsed.record(raw_term, true);
        }
    }
    debug!("parsed equation {:?} into {:?}", equation, parsed);
    parsed
}
