//! Interactive flashcard session.
//! Owns the deck, the error tally and the transcript, and runs the command loop.

use crate::action::Action;
use crate::error::{FlashcardError, Result};
use crate::export::card_file;
use crate::models::{Deck, ErrorTally, Flashcard, Hardest};
use crate::random::RandomSource;
use crate::terminal::Terminal;
use crate::transcript::Transcript;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Whether the command loop keeps going after an action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<T, R> {
    deck: Deck,
    tally: ErrorTally,
    transcript: Transcript,
    terminal: T,
    random: R,
}

impl<T: Terminal, R: RandomSource> Session<T, R> {
    /// Creates a session with an empty deck
    pub fn new(terminal: T, random: R) -> Self {
        Self::with_state(terminal, random, Deck::new(), ErrorTally::new())
    }

    pub fn with_state(terminal: T, random: R, deck: Deck, tally: ErrorTally) -> Self {
        Self {
            deck,
            tally,
            transcript: Transcript::new(),
            terminal,
            random,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn tally(&self) -> &ErrorTally {
        &self.tally
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Runs the command loop until `exit` or end of input.
    ///
    /// Bad card files, bad numbers and file system failures are reported and the
    /// loop carries on. Only a broken terminal ends the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.say(&Action::menu_prompt())?;
            let input = match self.read() {
                Ok(line) => line,
                Err(FlashcardError::InputClosed) => {
                    debug!("input closed at the prompt, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            // Anything that is not a command is ignored
            let Some(action) = Action::parse(&input) else {
                continue;
            };

            match self.execute(action) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is_recoverable() => {
                    warn!(action = action.name(), error = %e, "action failed");
                    self.say_and_break(&format!("Error: {e}"))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn execute(&mut self, action: Action) -> Result<Flow> {
        match action {
            Action::Add => self.add()?,
            Action::Remove => self.remove()?,
            Action::Import => self.import()?,
            Action::Export => self.export()?,
            Action::Ask => self.ask()?,
            Action::Log => self.save_log()?,
            Action::HardestCard => self.show_hardest()?,
            Action::ResetStats => self.reset_stats()?,
            Action::Exit => {
                // The farewell is not part of the transcript
                self.terminal.write_line("Bye bye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Adds a card, rejecting a taken term before asking for the definition.
    pub fn add(&mut self) -> Result<()> {
        let term = self.prompt("The card:")?;
        if self.deck.contains_term(&term) {
            return self.say_and_break(&format!("The card \"{term}\" already exists."));
        }

        let definition = self.prompt("The definition of the card:")?;
        if self.deck.contains_definition(&definition) {
            return self.say_and_break(&format!("The definition \"{definition}\" already exists."));
        }

        debug!(%term, "card added");
        let message = format!("The pair (\"{term}\":\"{definition}\") has been added.");
        self.deck.insert(Flashcard::new(term, definition));
        self.say_and_break(&message)
    }

    pub fn remove(&mut self) -> Result<()> {
        let term = self.prompt("Which card?")?;
        self.tally.remove(&term);

        match self.deck.remove(&term) {
            Some(_) => {
                debug!(%term, "card removed");
                self.say_and_break("The card has been removed.")
            }
            None => self.say_and_break(&format!("Can't remove \"{term}\": there is no such card.")),
        }
    }

    /// Loads cards from a file, overwriting cards with the same term.
    /// The whole file is parsed before anything changes.
    pub fn import(&mut self) -> Result<()> {
        let path = PathBuf::from(self.prompt("File name:")?);
        if !path.exists() {
            return self.say_and_break("File not found.");
        }

        let records = card_file::read_card_file(&path)?;
        for record in &records {
            // A zero count leaves any existing tally alone
            if record.errors != 0 {
                self.tally.set(&record.flashcard.term, record.errors);
            }
            self.deck.upsert(record.flashcard.clone());
        }

        info!(path = %path.display(), cards = records.len(), "cards imported");
        self.say_and_break(&format!("{} cards have been loaded.", records.len()))
    }

    pub fn export(&mut self) -> Result<()> {
        let path = PathBuf::from(self.prompt("File name:")?);
        let saved = card_file::write_card_file(&path, &self.deck, &self.tally)?;

        info!(path = %path.display(), cards = saved, "cards exported");
        self.say_and_break(&format!("{saved} cards have been saved."))
    }

    /// Quizzes the user on randomly drawn cards. Each draw is independent,
    /// so a card may come up several times or not at all.
    pub fn ask(&mut self) -> Result<()> {
        let answer = self.prompt("How many times to ask?")?;
        let times = answer
            .parse::<usize>()
            .map_err(|_| FlashcardError::InvalidCount(answer.clone()))?;

        if times > 0 && self.deck.is_empty() {
            return self.say_and_break("There are no cards to ask about.");
        }

        for _ in 0..times {
            let index = self.random.pick_index(self.deck.len());
            // An out-of-range draw ends the quiz
            let Some(card) = self.deck.get(index).cloned() else {
                warn!(index, cards = self.deck.len(), "random draw out of range");
                break;
            };

            let guess = self.prompt(&format!("Print the definition of \"{}\":", card.term))?;
            if card.is_answered_by(&guess) {
                self.say("Correct!")?;
                continue;
            }

            let errors = self.tally.record_miss(&card.term);
            debug!(term = %card.term, errors, "wrong answer");

            let other = {
                let mut owners = self.deck.terms_with_definition(&guess);
                match (owners.next(), owners.next()) {
                    (Some(owner), None) => Some(owner.to_string()),
                    _ => None,
                }
            };
            let message = match other {
                Some(other) => format!(
                    "Wrong. The right answer is \"{}\", but your definition is correct for \"{other}\".",
                    card.definition
                ),
                None => format!("Wrong. The right answer is \"{}\".", card.definition),
            };
            self.say_and_break(&message)?;
        }
        Ok(())
    }

    /// Writes the transcript up to and including the typed file name.
    /// The confirmation is printed but not recorded.
    pub fn save_log(&mut self) -> Result<()> {
        let path = PathBuf::from(self.prompt("File name:")?);
        self.transcript.save(&path)?;

        info!(path = %path.display(), lines = self.transcript.len(), "transcript saved");
        self.terminal.write_line("The log has been saved.")?;
        self.terminal.write_line("")
    }

    pub fn show_hardest(&mut self) -> Result<()> {
        let message = match self.tally.hardest() {
            Some(Hardest { terms, errors }) => {
                let quoted = terms
                    .iter()
                    .map(|term| format!("\"{term}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                if terms.len() == 1 {
                    format!("The hardest card is {quoted}. You have {errors} errors answering it.")
                } else {
                    format!("The hardest cards are {quoted}. You have {errors} errors answering them.")
                }
            }
            None => "There are no cards with errors.".to_string(),
        };
        self.say(&message)
    }

    pub fn reset_stats(&mut self) -> Result<()> {
        self.tally.clear();
        self.say("Card statistics have been reset.")
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.transcript.record_output(line);
        self.terminal.write_line(line)
    }

    /// Says `line` followed by an empty line.
    fn say_and_break(&mut self, line: &str) -> Result<()> {
        self.say(line)?;
        self.say("")
    }

    fn read(&mut self) -> Result<String> {
        let line = self.terminal.read_line()?;
        self.transcript.record_input(&line);
        Ok(line)
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        self.say(question)?;
        self.read()
    }
}
