pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::{contact::Contact, select::IndexSource};
use crate::errors::AppError;
use crate::validation::Field;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Line-oriented terminal the menu talks through.
///
/// Reading returns `None` once the input is closed, which unwinds every
/// prompt back to the menu and ends the program.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // OUTPUT FUNCTIONS
    pub fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn show_menu(&mut self) -> Result<(), AppError> {
        let rule = "=".repeat(45);
        self.say(&format!("\n{}", rule))?;
        self.say("   ContactEase - Contact Management System")?;
        self.say(&rule)?;
        for (i, choice) in command::MenuChoice::ALL.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, choice.label()))?;
        }
        self.say(&rule)
    }

    pub fn display_contacts(&mut self, contacts: &[&Contact]) -> Result<(), AppError> {
        self.say(&format!(
            "{:>3}  {:<20} {:<20} {:<15} {:<30}",
            "#", "First Name", "Last Name", "Phone Number", "Email"
        ))?;
        for (mut i, c) in contacts.iter().enumerate() {
            i += 1;
            self.say(&format!(
                "{i:>3}. {:<20} {:<20} {:<15} {:<30}",
                c.first_name, c.last_name, c.phone_number, c.email
            ))?;
        }
        Ok(())
    }

    // INPUT FUNCTIONS
    pub fn get_input(&mut self) -> Result<Option<String>, AppError> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.get_input()
    }

    /// Ask a yes/no question. Only `y` (any case) counts as yes.
    pub fn confirm_action(&mut self, question: &str) -> Result<bool, AppError> {
        let answer = self.prompt(&format!("{} (y/n): ", question))?;
        Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("y")))
    }

    /// Like [`Console::confirm_action`], for callers that cannot propagate:
    /// a terminal failure counts as "no" and is logged.
    pub fn decide(&mut self, question: &str) -> bool {
        match self.confirm_action(question) {
            Ok(yes) => yes,
            Err(e) => {
                warn!(error = %e, "could not ask for confirmation, treating as no");
                false
            }
        }
    }

    /// Prompt until the answer satisfies `field`'s rule.
    ///
    /// With `blank_keeps` an empty answer is returned as is, meaning "keep
    /// the current value". `None` means the input closed.
    pub fn retry(
        &mut self,
        prompt: &str,
        field: Field,
        blank_keeps: bool,
    ) -> Result<Option<String>, AppError> {
        loop {
            let Some(value) = self.prompt(prompt)? else {
                return Ok(None);
            };

            if (blank_keeps && value.is_empty()) || field.is_valid(&value) {
                return Ok(Some(value));
            }

            debug!(field = field.label(), "invalid input");
            self.say(field.requirement())?;
        }
    }
}

impl<R: BufRead, W: Write> IndexSource for Console<R, W> {
    fn present(&mut self, candidates: &[&Contact]) {
        for (i, contact) in candidates.iter().enumerate() {
            if let Err(e) = self.say(&format!("{}: {}", i + 1, contact)) {
                warn!(error = %e, "could not list candidates");
                return;
            }
        }
    }

    fn next_choice(&mut self) -> Option<String> {
        match self.prompt("Enter the index number of the contact you want to modify or delete: ") {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "could not read selection");
                None
            }
        }
    }

    fn rejected(&mut self, err: &AppError) {
        if let Err(e) = self.say(&err.to_string()) {
            warn!(error = %e, "could not report rejected selection");
        }
    }
}
