//! Line-oriented terminal the session talks through.

use crate::error::{FlashcardError, Result};
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

pub trait Terminal {
    /// Reads the next line without its line terminator.
    /// Returns [`FlashcardError::InputClosed`] once input is exhausted.
    fn read_line(&mut self) -> Result<String>;

    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// A [`Terminal`] over any buffered reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl Console<StdinLock<'static>, StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(FlashcardError::Terminal)?;
        if read == 0 {
            return Err(FlashcardError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")
            .and_then(|()| self.writer.flush())
            .map_err(FlashcardError::Terminal)
    }
}
