use super::cli_equations::{convert_menu, grade_menu, parse_menu};
use super::cli_form::form_menu;
use crate::Grader::element_config::HELP_TEXT;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            break;
        };

        match choice.trim() {
            "1" => grade_menu(),
            "2" => parse_menu(),
            "3" => convert_menu(),
            "4" => form_menu(),
            "5" => println!("\n{}\n", HELP_TEXT),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!("\x1b[34m\n Welcome to ChemInput: grading of chemical equation answers \n \x1b[0m");
    println!("\x1b[33m1. Grade an equation against a reference answer\x1b[0m");
    println!("\x1b[33m2. Parse an equation\x1b[0m");
    println!("\x1b[33m3. Convert markup\x1b[0m");
    println!("\x1b[33m4. Grade inputs from a config file\x1b[0m");
    println!("\x1b[33m5. Help\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}

/// `None` on end of input or a read error
pub(crate) fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

pub(crate) fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    let _ = io::stdout().flush();
    get_user_input().map(|s| s.trim().to_string())
}

pub(crate) fn prompt_yes_no(message: &str, default: bool) -> bool {
    match prompt(message).as_deref().map(str::to_lowercase).as_deref() {
        Some("y") | Some("yes") => true,
        Some("n") | Some("no") => false,
        _ => default,
    }
}
