//! Line-oriented console the table talks through.
//!
//! `StdConsole` wraps any reader/writer pair (stdin/stdout in the binary).
//! `ScriptedConsole` replays canned input and keeps a transcript, so whole
//! games can be driven from tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Write};

use crate::core::error::TableResult;

pub trait Console {
    /// Show `prompt` and read one line without its trailing newline.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> TableResult<Option<String>>;

    /// Print one line.
    fn write_line(&mut self, line: &str) -> TableResult<()>;
}

pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole<Box<dyn BufRead>, Box<dyn Write>> {
    /// Console over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(Box::new(BufReader::new(io::stdin())), Box::new(io::stdout()))
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> TableResult<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> TableResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

/// Console fed from a list of input lines.
///
/// Every prompt and printed line lands in the transcript; prompts are
/// followed by the answer given, as a terminal would echo it.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Input lines not yet consumed.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// Whether any transcript line contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> TableResult<Option<String>> {
        let answer = self.input.pop_front();
        match &answer {
            Some(line) => self.transcript.push(format!("{}{}", prompt, line)),
            None => self.transcript.push(prompt.to_string()),
        }
        Ok(answer)
    }

    fn write_line(&mut self, line: &str) -> TableResult<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}
