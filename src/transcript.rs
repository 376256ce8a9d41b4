//! Chronological record of everything printed to and typed into the session.

use crate::error::{FlashcardError, Result};
use std::fs;
use std::path::Path;

/// Marks lines the user typed, as opposed to lines the program printed.
pub const INPUT_MARKER: &str = "> ";

#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_output(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn record_input(&mut self, line: &str) {
        self.lines.push(format!("{INPUT_MARKER}{line}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contents(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Overwrites `path` with the transcript so far. The transcript itself is kept.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.contents()).map_err(|e| FlashcardError::file(path, e))
    }
}
