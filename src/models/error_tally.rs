//! Per-term count of wrong answers since the last reset.
//!
//! Only terms answered incorrectly at least once have an entry. Entries keep
//! the order in which they were first recorded, which is also the order the
//! hardest cards are listed in.

#[derive(Clone, Debug, Default)]
pub struct ErrorTally {
    entries: Vec<(String, u32)>,
}

/// The terms sharing the highest error count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hardest {
    pub terms: Vec<String>,
    pub errors: u32,
}

impl ErrorTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, term: &str) -> Option<u32> {
        self.position(term).map(|idx| self.entries[idx].1)
    }

    /// Overwrites the count for `term`. A count of zero drops the entry.
    pub fn set(&mut self, term: &str, errors: u32) {
        match (self.position(term), errors) {
            (Some(idx), 0) => {
                self.entries.remove(idx);
            }
            (Some(idx), n) => self.entries[idx].1 = n,
            (None, 0) => {}
            (None, n) => self.entries.push((term.to_string(), n)),
        }
    }

    /// Counts one more wrong answer for `term` and returns the new total.
    pub fn record_miss(&mut self, term: &str) -> u32 {
        match self.position(term) {
            Some(idx) => {
                let count = &mut self.entries[idx].1;
                *count = count.saturating_add(1);
                *count
            }
            None => {
                self.entries.push((term.to_string(), 1));
                1
            }
        }
    }

    pub fn remove(&mut self, term: &str) -> Option<u32> {
        self.position(term)
            .map(|idx| self.entries.remove(idx).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn hardest(&self) -> Option<Hardest> {
        let errors = self.entries.iter().map(|(_, count)| *count).max()?;
        let terms = self
            .entries
            .iter()
            .filter(|(_, count)| *count == errors)
            .map(|(term, _)| term.clone())
            .collect();
        Some(Hardest { terms, errors })
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.entries.iter().position(|(t, _)| t == term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_miss_creates_then_increments() {
        let mut tally = ErrorTally::new();

        assert_eq!(tally.record_miss("a"), 1);
        assert_eq!(tally.record_miss("a"), 2);
        assert_eq!(tally.get("a"), Some(2));
        assert_eq!(tally.get("b"), None);
    }

    #[test]
    fn test_set_zero_drops_entry() {
        let mut tally = ErrorTally::new();
        tally.set("a", 4);
        assert_eq!(tally.get("a"), Some(4));

        tally.set("a", 0);
        tally.set("b", 0);
        assert!(tally.is_empty());
    }

    #[test]
    fn test_hardest_with_tie() {
        let mut tally = ErrorTally::new();
        tally.set("a", 3);
        tally.set("b", 3);
        tally.set("c", 1);

        let hardest = tally.hardest().unwrap();
        assert_eq!(hardest.terms, ["a", "b"]);
        assert_eq!(hardest.errors, 3);
    }

    #[test]
    fn test_hardest_single_and_empty() {
        let mut tally = ErrorTally::new();
        assert_eq!(tally.hardest(), None);

        tally.record_miss("x");
        tally.record_miss("y");
        tally.record_miss("y");
        let hardest = tally.hardest().unwrap();
        assert_eq!(hardest.terms, ["y"]);
        assert_eq!(hardest.errors, 2);

        tally.clear();
        assert_eq!(tally.hardest(), None);
    }

    #[test]
    fn test_remove() {
        let mut tally = ErrorTally::new();
        tally.record_miss("x");

        assert_eq!(tally.remove("x"), Some(1));
        assert_eq!(tally.remove("x"), None);
        assert_eq!(tally.len(), 0);
    }
}
