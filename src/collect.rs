//! Interactive collection of the certificate record.
//!
//! Prompting goes through the [`Console`] trait so the retry loop can be
//! exercised with a scripted double in tests while the binary talks to the
//! real terminal.

use std::io::{self, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::CertificateRecord;
use crate::validate;

/// Prompt strings, kept exactly as they appear on the terminal.
pub mod prompts {
    pub const NAME: &str = "Enter student's name: ";
    pub const ROLL_NUMBER: &str = "Enter student's roll number: ";
    pub const YEAR: &str = "Enter year (1-4): ";
    pub const SEMESTER: &str = "Enter semester (1 or 2): ";
    pub const DATE: &str = "Enter date (dd/mm/yyyy, e.g., 23/09/2023): ";
    pub const BRANCH: &str = "Enter branch (CSE-AIML / CSE / CSE-DS / CSE-CS): ";
    pub const FATHERS_NAME: &str = "Enter father's name: ";
    pub const ACADEMIC_YEAR: &str = "Enter academic year (yyyy-yy, e.g., 2022-23): ";
}

/// One line of terminal interaction.
pub trait Console {
    /// Print the prompt, read one line, and return it without its trailing
    /// newline. Running out of input is an error: the retry loop cannot
    /// recover once stdin is closed.
    fn prompt_line(&mut self, prompt: &str) -> Result<String>;

    /// Print a rejection message.
    fn warn(&mut self, message: &str);
}

/// Real console on stdin/stdout.
pub struct TerminalConsole;

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while waiting for input",
            )));
        }

        // Strip the line terminator only; predicates see every other
        // character exactly as typed.
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn warn(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Re-prompts until `is_valid` accepts the entered line.
///
/// There is no retry bound: a rejected line is always recoverable by typing
/// a new one, so failure never escapes this loop. Only losing the input
/// stream does.
pub fn prompt_validated<C, F>(console: &mut C, prompt: &str, is_valid: F) -> Result<String>
where
    C: Console,
    F: Fn(&str) -> bool,
{
    loop {
        let input = console.prompt_line(prompt)?;
        if is_valid(&input) {
            return Ok(input);
        }
        console.warn(&format!("Invalid input for {prompt}. Please try again."));
    }
}

/// Runs the eight prompts in order and returns the collected record.
///
/// The roll number is the one field accepted verbatim; every other field
/// loops until its predicate passes.
pub fn collect_record<C: Console>(console: &mut C) -> Result<CertificateRecord> {
    debug!("collecting certificate fields");

    let name = prompt_validated(console, prompts::NAME, validate::is_valid_name)?;
    let roll_number = console.prompt_line(prompts::ROLL_NUMBER)?;
    let year = prompt_validated(console, prompts::YEAR, validate::is_valid_year)?;
    let semester = prompt_validated(console, prompts::SEMESTER, validate::is_valid_semester)?;
    let date = prompt_validated(console, prompts::DATE, validate::is_valid_date)?;
    let branch = prompt_validated(console, prompts::BRANCH, validate::is_valid_branch)?;
    let fathers_name =
        prompt_validated(console, prompts::FATHERS_NAME, validate::is_valid_fathers_name)?;
    let academic_year =
        prompt_validated(console, prompts::ACADEMIC_YEAR, validate::is_valid_academic_year)?;

    debug!("all certificate fields accepted");
    Ok(CertificateRecord {
        name,
        roll_number,
        year,
        semester,
        date,
        branch,
        fathers_name,
        academic_year,
    })
}
