//! Candidate-frequency letter guesser
//!
//! Given the revealed pattern of a round, keeps the corpus words that could
//! still be the answer and guesses the letter found in the most of them.

use crate::core::{GuessedLetters, RevealedLetter, Word};
use crate::wordlists::Corpus;
use rustc_hash::FxHashMap;

/// English letters from most to least frequent, used when no candidate remains
pub const ENGLISH_FREQUENCY: &[u8; 26] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Automated player for a single round
pub struct LetterGuesser<'a> {
    words: &'a [Word],
}

impl<'a> LetterGuesser<'a> {
    #[must_use]
    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            words: corpus.words(),
        }
    }

    /// Corpus words consistent with the revealed pattern and the guesses so far
    ///
    /// A candidate must match every revealed letter, and none of its hidden
    /// positions may hold a letter that was already guessed.
    #[must_use]
    pub fn candidates(
        &self,
        pattern: &[RevealedLetter],
        guessed: &GuessedLetters,
    ) -> Vec<&'a Word> {
        self.words
            .iter()
            .filter(|word| word.len() == pattern.len())
            .filter(|word| {
                word.bytes()
                    .iter()
                    .zip(pattern)
                    .all(|(&letter, slot)| match slot {
                        RevealedLetter::Guessed(c) => letter == *c as u8,
                        RevealedLetter::Hidden | RevealedLetter::Missed(_) => {
                            !guessed.contains(letter)
                        }
                    })
            })
            .collect()
    }

    /// Pick the next letter to guess, or `None` once all 26 are used
    ///
    /// Ties go to the alphabetically first letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{reveal, GuessedLetters, Word};
    /// use hangman::solver::LetterGuesser;
    /// use hangman::wordlists::{Corpus, loader::words_from_slice};
    ///
    /// let corpus = Corpus::new(words_from_slice(&["cat", "cot", "cut"])).unwrap();
    /// let guesser = LetterGuesser::new(&corpus);
    /// let word = Word::new("cut").unwrap();
    /// let guessed = GuessedLetters::new();
    ///
    /// // C and T appear in every candidate
    /// assert_eq!(guesser.next_letter(&reveal(&word, &guessed, false), &guessed), Some('C'));
    /// ```
    #[must_use]
    pub fn next_letter(
        &self,
        pattern: &[RevealedLetter],
        guessed: &GuessedLetters,
    ) -> Option<char> {
        let candidates = self.candidates(pattern, guessed);
        let counts = letter_counts(&candidates, guessed);

        counts
            .into_iter()
            .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then(b.cmp(a)))
            .map(|(letter, _)| letter)
            .or_else(|| {
                ENGLISH_FREQUENCY
                    .iter()
                    .copied()
                    .find(|&letter| !guessed.contains(letter))
            })
            .map(char::from)
    }
}

/// Number of candidates containing each unguessed letter
fn letter_counts(candidates: &[&Word], guessed: &GuessedLetters) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        for letter in candidate.distinct_letters() {
            if !guessed.contains(letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reveal;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Corpus {
        Corpus::new(words_from_slice(&[
            "cat", "cot", "cut", "dog", "frog", "tree", "garden",
        ]))
        .unwrap()
    }

    #[test]
    fn candidates_match_length_and_revealed_letters() {
        let corpus = corpus();
        let guesser = LetterGuesser::new(&corpus);
        let word = Word::new("cot").unwrap();
        let guessed = GuessedLetters::from_letters(['c']);

        let found: Vec<&str> = guesser
            .candidates(&reveal(&word, &guessed, false), &guessed)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(found, vec!["CAT", "COT", "CUT"]);
    }

    #[test]
    fn candidates_exclude_incorrect_letters() {
        let corpus = corpus();
        let guesser = LetterGuesser::new(&corpus);
        let word = Word::new("cot").unwrap();
        let guessed = GuessedLetters::from_letters(['c', 'a']);

        let found: Vec<&str> = guesser
            .candidates(&reveal(&word, &guessed, false), &guessed)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(found, vec!["COT", "CUT"]);
    }

    #[test]
    fn next_letter_prefers_most_common_then_alphabetical() {
        let corpus = corpus();
        let guesser = LetterGuesser::new(&corpus);
        let word = Word::new("cot").unwrap();
        let guessed = GuessedLetters::from_letters(['c', 't']);

        // A, O and U each appear in one candidate; A wins the tie
        assert_eq!(
            guesser.next_letter(&reveal(&word, &guessed, false), &guessed),
            Some('A')
        );
    }

    #[test]
    fn next_letter_falls_back_to_english_frequency() {
        let corpus = corpus();
        let guesser = LetterGuesser::new(&corpus);
        let word = Word::new("zzzzzzzzzz").unwrap();
        let guessed = GuessedLetters::from_letters(['e']);

        assert_eq!(
            guesser.next_letter(&reveal(&word, &guessed, false), &guessed),
            Some('T')
        );
    }

    #[test]
    fn next_letter_none_when_alphabet_used() {
        let corpus = corpus();
        let guesser = LetterGuesser::new(&corpus);
        let word = Word::new("cat").unwrap();
        let guessed = GuessedLetters::from_letters('a'..='z');

        assert_eq!(
            guesser.next_letter(&reveal(&word, &guessed, false), &guessed),
            None
        );
    }
}
