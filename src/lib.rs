pub mod action;
pub mod error;
pub mod export;
pub mod models;
pub mod random;
pub mod session;
pub mod terminal;
pub mod transcript;

pub use action::Action;
pub use error::{FlashcardError, Result};
pub use models::{Deck, ErrorTally, Flashcard, Hardest};
pub use session::Session;
