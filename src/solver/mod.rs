//! Automated Hangman player
//!
//! Used by the `simulate` command to measure how hard each tier is.

mod guesser;

pub use guesser::{ENGLISH_FREQUENCY, LetterGuesser};
