//! Deck is the set of flashcards the session works on.
//! Terms are unique; cards keep the order they were first added in.
use super::Flashcard;

#[derive(Clone, Debug, Default)]
pub struct Deck {
    flashcards: Vec<Flashcard>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flashcard> {
        self.flashcards.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.flashcards.get(index)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.position(term).is_some()
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.flashcards.iter().any(|card| card.definition == definition)
    }

    pub fn definition_of(&self, term: &str) -> Option<&str> {
        self.position(term)
            .map(|idx| self.flashcards[idx].definition.as_str())
    }

    /// All terms whose definition is exactly `definition`, in deck order.
    pub fn terms_with_definition<'a>(
        &'a self,
        definition: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.flashcards
            .iter()
            .filter(move |card| card.definition == definition)
            .map(|card| card.term.as_str())
    }

    /// Appends a card. The caller has already checked that neither the term
    /// nor the definition is taken.
    pub fn insert(&mut self, card: Flashcard) {
        debug_assert!(!self.contains_term(&card.term));
        self.flashcards.push(card);
    }

    /// Inserts a card or replaces the definition of an existing term in place.
    pub fn upsert(&mut self, card: Flashcard) {
        match self.position(&card.term) {
            Some(idx) => self.flashcards[idx].definition = card.definition,
            None => self.flashcards.push(card),
        }
    }

    pub fn remove(&mut self, term: &str) -> Option<Flashcard> {
        self.position(term).map(|idx| self.flashcards.remove(idx))
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.flashcards.iter().position(|card| card.term == term)
    }
}
