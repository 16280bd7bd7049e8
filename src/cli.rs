/// Main interactive menu and prompt helpers
pub mod cli_main;
/// Grading, parsing and markup conversion of single equations
pub mod cli_equations;
/// Grading of several inputs described in a JSON config file
pub mod cli_form;
