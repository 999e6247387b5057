//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts behind the [Prompter] trait

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Mutex;

use console::Term;

use crate::error::{J2gError, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boards, display_error, display_issue, display_notice, display_status,
    display_success, format_boards,
};

/// Questions the config command asks the user
pub trait Prompter {
    /// Free-text answer; an empty answer yields `default` when one is given.
    fn input(&self, label: &str, default: Option<&str>) -> Result<String>;

    /// Answer that must not be echoed (tokens).
    fn secret(&self, label: &str) -> Result<String>;

    /// Yes/no question defaulting to "no".
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Pick one of `options`, returning its index.
    fn choose(&self, title: &str, options: &[String]) -> Result<usize>;
}

/// Prompts on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

fn read_line() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

impl Prompter for TerminalPrompter {
    fn input(&self, label: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) => print!("{} [{}]: ", label, default),
            None => print!("{}: ", label),
        }
        io::stdout().flush()?;

        let answer = read_line()?;
        match (answer.is_empty(), default) {
            (true, Some(default)) => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn secret(&self, label: &str) -> Result<String> {
        print!("{}: ", label);
        io::stdout().flush()?;
        let answer = Term::stdout().read_secure_line()?;
        Ok(answer.trim().to_string())
    }

    /// Displays the given prompt and accepts "y" or "yes" (case-insensitive) as confirmation.
    /// Default is "no" if user presses Enter.
    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("\n{} (y/N): ", prompt);
        io::stdout().flush()?;

        let response = read_line()?.to_lowercase();
        Ok(response == "y" || response == "yes")
    }

    /// Displays a numbered list and accepts a 1-based index.
    /// Default selection is the first option if user presses Enter.
    fn choose(&self, title: &str, options: &[String]) -> Result<usize> {
        if options.len() == 1 {
            return Ok(0);
        }

        println!("\n{}", console::style(title).bold());
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        print!("\nSelect (1-{}) [default: 1]: ", options.len());
        io::stdout().flush()?;

        let selection = read_line()?;
        let index = if selection.is_empty() {
            1
        } else {
            selection.parse::<usize>().unwrap_or(0)
        };

        if index > 0 && index <= options.len() {
            Ok(index - 1)
        } else {
            Err(J2gError::config(format!("invalid selection '{}'", selection)))
        }
    }
}

/// Prompter replaying pre-recorded answers, for tests
///
/// Answers are consumed in order regardless of the kind of question;
/// `confirm` accepts "y"/"yes", `choose` takes a 0-based index.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompter {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or(0)
    }

    fn next(&self, question: &str) -> Result<String> {
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .ok_or_else(|| J2gError::config(format!("no scripted answer for '{}'", question)))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, label: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next(label)?;
        match (answer.is_empty(), default) {
            (true, Some(default)) => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn secret(&self, label: &str) -> Result<String> {
        self.next(label)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = self.next(prompt)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    fn choose(&self, title: &str, options: &[String]) -> Result<usize> {
        let answer = self.next(title)?;
        answer
            .parse::<usize>()
            .ok()
            .filter(|i| *i < options.len())
            .ok_or_else(|| J2gError::config(format!("invalid selection '{}'", answer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_default() {
        let prompter = ScriptedPrompter::new(["", "typed"]);
        assert_eq!(prompter.input("Email", Some("a@b.c")).unwrap(), "a@b.c");
        assert_eq!(prompter.input("Email", Some("a@b.c")).unwrap(), "typed");
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_scripted_confirm() {
        let prompter = ScriptedPrompter::new(["Y", "no", ""]);
        assert!(prompter.confirm("Reset?").unwrap());
        assert!(!prompter.confirm("Reset?").unwrap());
        assert!(!prompter.confirm("Reset?").unwrap());
    }

    #[test]
    fn test_scripted_choose_out_of_range() {
        let prompter = ScriptedPrompter::new(["5"]);
        let options = vec!["a".to_string(), "b".to_string()];
        assert!(prompter.choose("Pick", &options).is_err());
    }

    #[test]
    fn test_scripted_runs_out() {
        let prompter = ScriptedPrompter::new(Vec::<String>::new());
        assert!(prompter.secret("Token").is_err());
    }
}
