//! Core domain types for Hangman
//!
//! This module contains the pure game rules with no I/O and no randomness.
//! Everything a renderer shows can be derived from a `Word` and a
//! `GuessedLetters` set.

mod difficulty;
mod guesses;
mod reveal;
mod status;
mod word;

pub use difficulty::{Difficulty, DifficultyError};
pub use guesses::GuessedLetters;
pub use reveal::{BodyPart, KeyState, RevealedLetter, blanks, key_state, masked, reveal};
pub use status::{DerivedStatus, GameStatus, MAX_INCORRECT_GUESSES, evaluate};
pub use word::{Word, WordError};
