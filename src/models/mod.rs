pub mod deck;
pub mod error_tally;
pub mod flashcard;

pub use deck::Deck;
pub use error_tally::{ErrorTally, Hardest};
pub use flashcard::Flashcard;
