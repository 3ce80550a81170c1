//! Guessed letter bookkeeping

use rustc_hash::FxHashSet;

/// The set of letters guessed in the current round
///
/// Letters are stored in uppercase and kept in the order they were first
/// guessed. The order is for display only; game logic treats this as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    order: Vec<u8>,
    seen: FxHashSet<u8>,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence of guesses, ignoring non-letters and repeats
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessedLetters;
    ///
    /// let guessed = GuessedLetters::from_letters("cXa1c".chars());
    /// assert_eq!(guessed.to_string(), "CXA");
    /// ```
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Self {
        let mut guessed = Self::new();
        for letter in letters {
            guessed.insert(letter);
        }
        guessed
    }

    /// Normalize a character to a canonical guess letter
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[inline]
    #[must_use]
    pub fn normalize(letter: char) -> Option<u8> {
        if letter.is_ascii_alphabetic() {
            Some(letter.to_ascii_uppercase() as u8)
        } else {
            None
        }
    }

    /// Add a letter; returns `false` if it was not a letter or already present
    pub fn insert(&mut self, letter: char) -> bool {
        let Some(letter) = Self::normalize(letter) else {
            return false;
        };
        if !self.seen.insert(letter) {
            return false;
        }
        self.order.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.seen.contains(&letter.to_ascii_uppercase())
    }

    /// Letters in first-guess order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.order.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}

impl std::fmt::Display for GuessedLetters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &letter in &self.order {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
