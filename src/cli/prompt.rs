//! Operator prompts.
//!
//! Generic over the input/output streams so the interactive flow can be
//! driven from tests. End of input counts as declining.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::error::MetaError;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompts on stderr, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line to the prompt stream.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Ask for a value; a required value is asked again until non-empty.
    pub fn ask(&mut self, prompt: &str, required: bool) -> Result<String> {
        loop {
            let value = self.read_answer(prompt)?;
            if !value.is_empty() || !required {
                return Ok(value);
            }
            self.say("✗ This field is required!")?;
        }
    }

    /// Ask a yes/no question until the answer is one of `y`, `yes`, `n`, `no`.
    pub fn yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            match self.read_answer(prompt)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("✗ Please answer 'yes' or 'no'")?,
            }
        }
    }

    /// Ask a yes/no question; `no` becomes [`MetaError::Cancelled`].
    pub fn confirm(&mut self, prompt: &str) -> Result<()> {
        if self.yes_no(prompt)? {
            Ok(())
        } else {
            Err(MetaError::Cancelled.into())
        }
    }

    /// Print `prompt` and read one trimmed line.
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MetaError::Cancelled.into());
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    /// Prompter reading scripted answers and capturing prompts.
    pub(crate) fn scripted(answers: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    fn is_cancelled(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<MetaError>(), Some(MetaError::Cancelled))
    }

    #[test]
    fn test_ask_trims() {
        let mut p = scripted("  Sweet Treats  \n");
        assert_eq!(p.ask("Name: ", true).unwrap(), "Sweet Treats");
    }

    #[test]
    fn test_ask_required_repeats() {
        let mut p = scripted("\n   \nDelhi\n");
        assert_eq!(p.ask("Location: ", true).unwrap(), "Delhi");
        let output = String::from_utf8(p.output).unwrap();
        assert_eq!(output.matches("Location: ").count(), 3);
        assert_eq!(output.matches("required").count(), 2);
    }

    #[test]
    fn test_ask_optional_accepts_empty() {
        let mut p = scripted("\n");
        assert_eq!(p.ask("Optional: ", false).unwrap(), "");
    }

    #[test]
    fn test_yes_no() {
        let mut p = scripted("maybe\nY\nno\n");
        assert!(p.yes_no("? ").unwrap());
        assert!(!p.yes_no("? ").unwrap());
        let output = String::from_utf8(p.output).unwrap();
        assert!(output.contains("Please answer 'yes' or 'no'"));
    }

    #[test]
    fn test_confirm_declined_is_cancelled() {
        let mut p = scripted("n\n");
        assert!(is_cancelled(&p.confirm("Proceed? ").unwrap_err()));
    }

    #[test]
    fn test_end_of_input_is_cancelled() {
        let mut p = scripted("");
        assert!(is_cancelled(&p.ask("Name: ", true).unwrap_err()));
        let mut p = scripted("\n");
        assert!(is_cancelled(&p.ask("Name: ", true).unwrap_err()));
    }
}
