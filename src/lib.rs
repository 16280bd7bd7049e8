#[allow(non_snake_case)]
pub mod Equations;
#[allow(non_snake_case)]
pub mod Grader;
pub mod cli;
