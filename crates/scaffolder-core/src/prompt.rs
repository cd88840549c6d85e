//! Asking the user for a project name
//!
//! The orchestrating front-ends only depend on [`NamePrompt`], so tests and
//! scripted callers can substitute a non-interactive implementation.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Capability to obtain a project name when none was supplied
pub trait NamePrompt {
    /// Ask `question` and return the raw answer
    fn ask(&mut self, question: &str) -> Result<String>;
}

impl<F> NamePrompt for F
where
    F: FnMut(&str) -> Result<String>,
{
    fn ask(&mut self, question: &str) -> Result<String> {
        self(question)
    }
}

/// Line-oriented prompt over any reader/writer pair
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process' standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> NamePrompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{} ", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .context("Failed to read project name")?;
        Ok(line)
    }
}

/// Cliclack text input (interactive terminals only)
#[cfg(feature = "tui")]
pub struct CliclackPrompt {
    pub placeholder: String,
}

#[cfg(feature = "tui")]
impl NamePrompt for CliclackPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        let input: String = cliclack::input(question)
            .placeholder(&self.placeholder)
            .interact()?;
        Ok(input)
    }
}

/// Use the name given on the command line, or ask for one.
///
/// Prompted answers are trimmed; an explicit argument is passed through as-is
/// and left to the name validator.
pub fn resolve_project_name<P: NamePrompt + ?Sized>(
    arg: Option<String>,
    prompt: &mut P,
    question: &str,
) -> Result<String> {
    match arg {
        Some(name) => Ok(name),
        None => Ok(prompt.ask(question)?.trim().to_string()),
    }
}
