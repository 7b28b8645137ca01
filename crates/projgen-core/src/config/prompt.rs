//! Line-oriented prompting
//!
//! The question flow only needs three primitives, so they live behind a
//! small trait; tests drive the flow with scripted input instead of a real
//! terminal.

use crate::error::FatalError;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Prints an informational message.
pub fn message(msg: &str) {
    println!("{} {}", "##".cyan(), msg);
}

/// Prints a warning.
pub fn warning(msg: &str) {
    println!("{} {}", "##!".yellow(), msg.yellow());
}

/// The three kinds of answers the question flow needs.
pub trait Prompter {
    /// Ask for a free-form string. Empty answers are rejected and asked
    /// again; end-of-input is fatal.
    fn read_text(&mut self, msg: &str) -> Result<String, FatalError>;

    /// Ask a yes/no question.
    ///
    /// Policy: only `y` (case-insensitive) counts as yes. Any other
    /// non-empty answer is a no, without a retry, so unsure users fall
    /// through to the safe default. Empty answers are asked again.
    fn read_bool(&mut self, msg: &str) -> Result<bool, FatalError>;

    /// Ask the user to pick one of `options` by its 1-based number.
    /// Retries until the answer is a valid index; returns the 0-based one.
    fn read_choice(&mut self, msg: &str, options: &[&str]) -> Result<usize, FatalError>;
}

/// [`Prompter`] over any buffered reader; production code wraps stdin,
/// tests wrap an `io::Cursor` of scripted answers.
pub struct LinePrompter<R> {
    input: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, FatalError> {
        print!("{} {}", ">>".bold(), prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(FatalError::EndOfInput),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }

    fn ask_non_empty(&mut self, prompt: &str) -> Result<String, FatalError> {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() {
                warning("Input cannot be empty, please try again.");
            } else {
                return Ok(answer);
            }
        }
    }
}

impl LinePrompter<io::StdinLock<'static>> {
    /// Prompter reading from the process stdin.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn read_text(&mut self, msg: &str) -> Result<String, FatalError> {
        self.ask_non_empty(&format!("{msg}: "))
    }

    fn read_bool(&mut self, msg: &str) -> Result<bool, FatalError> {
        let answer = self.ask_non_empty(&format!("{msg} (y/n): "))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    fn read_choice(&mut self, msg: &str, options: &[&str]) -> Result<usize, FatalError> {
        let listed: Vec<String> = options
            .iter()
            .enumerate()
            .map(|(idx, opt)| format!("{opt} = {}", idx + 1))
            .collect();
        let prompt = format!("{msg} ({}): ", listed.join(", "));

        loop {
            let answer = self.ask_non_empty(&prompt)?;
            if let Ok(number) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&number) {
                    return Ok(number - 1);
                }
            }
            warning("Invalid choice, please try again.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> LinePrompter<Cursor<Vec<u8>>> {
        LinePrompter::new(Cursor::new(script.as_bytes().to_vec()))
    }

    #[test]
    fn test_read_text_retries_until_non_empty() {
        let mut p = prompter("\n\n  \nmy project\n");
        assert_eq!(p.read_text("Project name").unwrap(), "my project");
    }

    #[test]
    fn test_read_text_eof_is_fatal() {
        let mut p = prompter("");
        assert!(matches!(
            p.read_text("Project name"),
            Err(FatalError::EndOfInput)
        ));
    }

    #[test]
    fn test_read_bool_only_y_is_yes() {
        let mut p = prompter("y\nY\nn\nyes\nwhatever\n");
        assert!(p.read_bool("q").unwrap());
        assert!(p.read_bool("q").unwrap());
        assert!(!p.read_bool("q").unwrap());
        // "yes" is not "y": the policy takes anything else as a no.
        assert!(!p.read_bool("q").unwrap());
        assert!(!p.read_bool("q").unwrap());
    }

    #[test]
    fn test_read_bool_skips_empty_lines() {
        let mut p = prompter("\ny\n");
        assert!(p.read_bool("q").unwrap());
    }

    #[test]
    fn test_read_choice_retries_until_valid() {
        let mut p = prompter("abc\n0\n7\n2\n");
        let idx = p.read_choice("Pick", &["a", "b", "c"]).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_read_choice_eof_mid_retry_is_fatal() {
        let mut p = prompter("nope\n");
        assert!(matches!(
            p.read_choice("Pick", &["a", "b"]),
            Err(FatalError::EndOfInput)
        ));
    }
}
