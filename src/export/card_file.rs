//! Plain-text card file import/export.
//! One card per line: `term   definition   errors`, fields separated by three spaces.
//! There is no escaping, so a field containing the delimiter cannot be read back.

use crate::error::{FlashcardError, Result};
use crate::models::{Deck, ErrorTally, Flashcard};
use std::fs;
use std::path::Path;

pub const DELIMITER: &str = "   ";

/// A card read from a file together with its recorded error count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRecord {
    pub flashcard: Flashcard,
    pub errors: u32,
}

pub fn format_line(card: &Flashcard, errors: u32) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        card.term, card.definition, errors
    )
}

/// Parses one line. `line_number` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> Result<CardRecord> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [term, definition, errors] = fields.as_slice() else {
        return Err(FlashcardError::MalformedLine {
            line_number,
            line: line.to_string(),
        });
    };

    let errors = errors
        .parse::<u32>()
        .map_err(|_| FlashcardError::InvalidErrorCount {
            line_number,
            value: errors.to_string(),
        })?;

    Ok(CardRecord {
        flashcard: Flashcard::new(*term, *definition),
        errors,
    })
}

/// Reads and parses a whole card file. Nothing is returned unless every line parses.
pub fn read_card_file(path: &Path) -> Result<Vec<CardRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| FlashcardError::file(path, e))?;

    contents
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Writes every card of the deck, overwriting the file. Returns the number of cards written.
pub fn write_card_file(path: &Path, deck: &Deck, tally: &ErrorTally) -> Result<usize> {
    let mut contents = String::new();
    for card in deck.iter() {
        contents.push_str(&format_line(card, tally.get(&card.term).unwrap_or(0)));
        contents.push('\n');
    }

    fs::write(path, contents).map_err(|e| FlashcardError::file(path, e))?;
    Ok(deck.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_deck() -> (Deck, ErrorTally) {
        let mut deck = Deck::new();
        deck.insert(Flashcard::new("hello", "cześć"));
        deck.insert(Flashcard::new("thank you", "dziękuję"));
        let mut tally = ErrorTally::new();
        tally.set("thank you", 2);
        (deck, tally)
    }

    #[test]
    fn test_parse_line() {
        let record = parse_line("capital   Paris   3", 1).unwrap();
        assert_eq!(record.flashcard, Flashcard::new("capital", "Paris"));
        assert_eq!(record.errors, 3);
    }

    #[test]
    fn test_parse_line_keeps_inner_spaces() {
        let record = parse_line("thank you  please   do widzenia   0", 1).unwrap();
        assert_eq!(record.flashcard.term, "thank you  please");
        assert_eq!(record.flashcard.definition, "do widzenia");
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        for line in ["capital   Paris", "a   b   0   extra", ""] {
            let err = parse_line(line, 7).unwrap_err();
            assert!(
                matches!(err, FlashcardError::MalformedLine { line_number: 7, .. }),
                "unexpected error for {line:?}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_line_bad_error_count() {
        let err = parse_line("capital   Paris   lots", 2).unwrap_err();
        assert!(matches!(
            err,
            FlashcardError::InvalidErrorCount { line_number: 2, ref value } if value == "lots"
        ));

        assert!(parse_line("capital   Paris   -1", 1).is_err());
    }

    #[test]
    fn test_write_card_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.txt");
        let (deck, tally) = create_test_deck();

        let written = write_card_file(&path, &deck, &tally).unwrap();
        assert_eq!(written, 2);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "hello   cześć   0\nthank you   dziękuję   2\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.txt");
        fs::write(&path, "stale   content   9\nmore   stale   1\n").unwrap();

        write_card_file(&path, &Deck::new(), &ErrorTally::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_export_and_import_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.txt");
        let (deck, tally) = create_test_deck();

        write_card_file(&path, &deck, &tally).unwrap();
        let records = read_card_file(&path).unwrap();

        assert_eq!(records.len(), deck.len());
        for (orig, imp) in deck.iter().zip(records.iter()) {
            assert_eq!(orig, &imp.flashcard);
            assert_eq!(tally.get(&orig.term).unwrap_or(0), imp.errors);
        }
    }

    #[test]
    fn test_import_nonexistent_file() {
        let dir = tempdir().unwrap();
        let result = read_card_file(&dir.path().join("nonexistent_file_xyz123.txt"));
        assert!(matches!(result, Err(FlashcardError::File { .. })));
    }

    #[test]
    fn test_import_stops_at_first_bad_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.txt");
        fs::write(&path, "a   b   0\nthis is not a card\nc   d   1\n").unwrap();

        let err = read_card_file(&path).unwrap_err();
        assert!(matches!(err, FlashcardError::MalformedLine { line_number: 2, .. }));
    }
}
