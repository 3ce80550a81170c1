//! Word lists for Hangman
//!
//! Provides the embedded corpus compiled into the binary and the validated
//! `Corpus` type that word selection draws from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Difficulty, Word};
use std::fmt;

/// Error raised when a corpus cannot be used for play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    Empty,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word corpus contains no valid words"),
        }
    }
}

impl std::error::Error for CorpusError {}

/// A non-empty, read-only list of words
///
/// Emptiness is checked once here so that word selection never has to
/// handle it.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Wrap a word list
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, CorpusError> {
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { words })
    }

    /// The corpus embedded at build time
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if the embedded list has no valid words.
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false once constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words eligible for a difficulty tier
    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|w| difficulty.accepts_length(w.len()))
            .collect()
    }

    /// Number of eligible words per tier, in `Difficulty::ALL` order
    #[must_use]
    pub fn tier_sizes(&self) -> [(Difficulty, usize); 3] {
        Difficulty::ALL.map(|d| (d, self.tier(d).len()))
    }
}
