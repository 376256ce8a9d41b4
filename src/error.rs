//! Error type shared by the card file codec, the terminal and the session loop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlashcardError {
    /// A card file line did not split into term, definition and error count.
    #[error("line {line_number} is not a valid card entry: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    /// The error-count field of a card file line is not a number.
    #[error("line {line_number} has an invalid error count: {value:?}")]
    InvalidErrorCount { line_number: usize, value: String },

    /// The number of questions typed for `ask` is not a non-negative integer.
    #[error("{0:?} is not a valid number of questions")]
    InvalidCount(String),

    #[error("cannot access file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal I/O failed: {0}")]
    Terminal(#[source] io::Error),

    #[error("input ended unexpectedly")]
    InputClosed,
}

impl FlashcardError {
    /// Returns `true` if the session can report this error and keep going.
    /// Terminal failures leave nothing to talk to, so they end the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            FlashcardError::Terminal(_) | FlashcardError::InputClosed
        )
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FlashcardError::File {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
