//! Terminal prompt plumbing for the data collector.
//!
//! Generic over the reader and writer so every collection step runs against
//! scripted input in tests exactly as it runs against the controlling
//! terminal. Input is stored verbatim; only the line terminator is stripped,
//! and no field is ever validated or re-prompted.

use std::io::{BufRead, Write};

use crate::errors::AppError;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints a `--- Section ---` banner.
    pub fn banner(&mut self, title: &str) -> Result<(), AppError> {
        writeln!(self.output, "\n--- {title} ---")?;
        Ok(())
    }

    /// Prints one line of instructions.
    pub fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prompts `Enter your <label>: ` and reads a single line.
    ///
    /// End-of-input here is a terminal error: outside the free-text summary,
    /// the program has no way to continue without an answer.
    pub fn field(&mut self, label: &str) -> Result<String, AppError> {
        write!(self.output, "Enter your {label}: ")?;
        self.output.flush()?;
        self.read_line()?.ok_or(AppError::InputClosed)
    }

    /// Reads `> `-prompted lines until the first empty line. The terminator
    /// is not stored; an immediately empty line yields an empty list.
    pub fn bullet_list(&mut self, label: &str) -> Result<Vec<String>, AppError> {
        writeln!(
            self.output,
            "Enter {label} (one item per line). Press Enter on an empty line to finish:"
        )?;
        let mut items = Vec::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            match self.read_line()? {
                None => return Err(AppError::InputClosed),
                Some(line) if line.is_empty() => break,
                Some(line) => items.push(line),
            }
        }
        Ok(items)
    }

    /// Reads lines until end-of-input. Unlike every other prompt, EOF is the
    /// designated terminator here, not an error.
    pub fn free_text(&mut self) -> Result<Vec<String>, AppError> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Hands back the output sink so tests can assert on prompt wording.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// One raw line with the `\n` / `\r\n` terminator stripped.
    /// Returns `None` at end-of-input.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}
