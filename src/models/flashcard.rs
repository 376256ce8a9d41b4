//! Flashcard is a pair <term, definition>. Only text is used in terms and definitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

impl Flashcard {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }

    /// Answers are compared verbatim: no trimming, no case folding.
    pub fn is_answered_by(&self, guess: &str) -> bool {
        self.definition == guess
    }
}
