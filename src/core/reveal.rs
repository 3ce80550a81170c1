//! What a renderer shows for a round
//!
//! Figure parts, letter blanks and keyboard key states are all pure functions
//! of the word, the guesses and the derived status.

use super::{GameStatus, GuessedLetters, Word};

/// A piece of the stick figure, in the order pieces are revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    Body,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

impl BodyPart {
    pub const ALL: [Self; 6] = [
        Self::Head,
        Self::Body,
        Self::RightArm,
        Self::LeftArm,
        Self::RightLeg,
        Self::LeftLeg,
    ];

    /// Parts to draw after `incorrect_count` wrong guesses
    #[must_use]
    pub fn visible(incorrect_count: usize) -> &'static [Self] {
        let all: &'static [Self] = &Self::ALL;
        &all[..incorrect_count.min(all.len())]
    }
}

/// One position of the letter-blank display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealedLetter {
    Guessed(char),
    Hidden,
    /// Never guessed, shown because the round was lost
    Missed(char),
}

/// Reveal `word` position by position
///
/// With `show_missed` set, unguessed letters come back as `Missed` instead
/// of `Hidden`.
#[must_use]
pub fn reveal(word: &Word, guessed: &GuessedLetters, show_missed: bool) -> Vec<RevealedLetter> {
    word.bytes()
        .iter()
        .map(|&letter| {
            if guessed.contains(letter) {
                RevealedLetter::Guessed(letter as char)
            } else if show_missed {
                RevealedLetter::Missed(letter as char)
            } else {
                RevealedLetter::Hidden
            }
        })
        .collect()
}

/// Render the word as blanks, e.g. `C _ T`
///
/// # Examples
/// ```
/// use hangman::core::{masked, GuessedLetters, Word};
///
/// let word = Word::new("cat").unwrap();
/// assert_eq!(masked(&word, &GuessedLetters::from_letters(['c', 't'])), "C _ T");
/// ```
#[must_use]
pub fn masked(word: &Word, guessed: &GuessedLetters) -> String {
    blanks(&reveal(word, guessed, false))
}

/// Render revealed slots as text, hidden ones as `_`
#[must_use]
pub fn blanks(slots: &[RevealedLetter]) -> String {
    slots
        .iter()
        .map(|slot| match slot {
            RevealedLetter::Guessed(c) | RevealedLetter::Missed(c) => c.to_string(),
            RevealedLetter::Hidden => "_".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// State of one on-screen keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Available,
    /// Guessed and in the word
    Correct,
    /// Guessed and not in the word
    Incorrect,
    /// Not guessed, but the round is over
    Locked,
}

/// Key state for `letter`; a missing word means no active round
#[must_use]
pub fn key_state(
    word: Option<&Word>,
    guessed: &GuessedLetters,
    status: GameStatus,
    letter: u8,
) -> KeyState {
    if guessed.contains(letter) {
        if word.is_some_and(|w| w.has_letter(letter)) {
            KeyState::Correct
        } else {
            KeyState::Incorrect
        }
    } else if word.is_none() || status.is_terminal() {
        KeyState::Locked
    } else {
        KeyState::Available
    }
}
