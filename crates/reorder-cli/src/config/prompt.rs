use crate::error::{CliError, Result};
use std::io::{BufRead, Write};

/// Line-based questions on an input/output pair, used when the tool runs without arguments.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn announce(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Asks once and returns the trimmed answer, or `None` for an empty answer or end of input.
    pub fn ask_optional(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.writer, "{:<24}: ", label)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    pub fn ask_required(&mut self, label: &str) -> Result<String> {
        self.ask_optional(label)?
            .ok_or_else(|| CliError::Config(format!("No value given for '{}'.", label.trim())))
    }

    /// `y`/`yes` (any case) is true; anything else, including no answer, is false.
    pub fn ask_yes_no(&mut self, label: &str) -> Result<bool> {
        Ok(self
            .ask_optional(label)?
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")))
    }
}
