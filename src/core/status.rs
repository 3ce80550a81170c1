//! Derived game status
//!
//! Win/loss bookkeeping is never stored. It is recomputed from the target
//! word and the guessed letters each time it is needed.

use super::{GuessedLetters, Word};
use std::fmt;

/// Number of incorrect guesses that loses a round (head, body, two arms, two legs)
pub const MAX_INCORRECT_GUESSES: usize = 6;

/// Outcome of a round as seen from its current guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Winner,
    Loser,
}

impl GameStatus {
    /// True for `Winner` and `Loser`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "Playing",
            Self::Winner => "Winner",
            Self::Loser => "Loser",
        })
    }
}

/// Status derived from a target word and a set of guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStatus {
    /// Guessed letters absent from the word, in guess order
    pub incorrect_letters: Vec<u8>,
    pub incorrect_count: usize,
    pub is_winner: bool,
    pub is_loser: bool,
    pub status: GameStatus,
}

impl DerivedStatus {
    /// Incorrect guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        MAX_INCORRECT_GUESSES.saturating_sub(self.incorrect_count)
    }
}

/// Derive the status of a round
///
/// `target` is `None` before a word has been chosen; such a round is never
/// reported as won. Comparison is case-insensitive since both `Word` and
/// `GuessedLetters` store uppercase.
///
/// # Examples
/// ```
/// use hangman::core::{evaluate, GameStatus, GuessedLetters, Word};
///
/// let word = Word::new("cat").unwrap();
/// let guessed = GuessedLetters::from_letters("cxa".chars());
///
/// let status = evaluate(Some(&word), &guessed);
/// assert_eq!(status.status, GameStatus::Playing);
/// assert_eq!(status.incorrect_count, 1);
/// ```
#[must_use]
pub fn evaluate(target: Option<&Word>, guessed: &GuessedLetters) -> DerivedStatus {
    let incorrect_letters: Vec<u8> = guessed
        .iter()
        .filter(|&letter| !target.is_some_and(|word| word.has_letter(letter)))
        .collect();
    let incorrect_count = incorrect_letters.len();

    let is_loser = incorrect_count >= MAX_INCORRECT_GUESSES;
    let is_winner = target.is_some_and(|word| {
        !word.is_empty() && word.bytes().iter().all(|&letter| guessed.contains(letter))
    });

    let status = if is_winner {
        GameStatus::Winner
    } else if is_loser {
        GameStatus::Loser
    } else {
        GameStatus::Playing
    };

    DerivedStatus {
        incorrect_letters,
        incorrect_count,
        is_winner,
        is_loser,
        status,
    }
}
