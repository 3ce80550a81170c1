//! Difficulty-based word selection

use crate::core::{Difficulty, Word};
use crate::wordlists::Corpus;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick a random word for a difficulty tier
///
/// Draws uniformly from the words whose length fits the tier. If the tier is
/// empty in this corpus, draws uniformly from the whole corpus instead.
///
/// # Examples
/// ```
/// use hangman::core::Difficulty;
/// use hangman::session::select_word;
/// use hangman::wordlists::{Corpus, loader::words_from_slice};
///
/// let corpus = Corpus::new(words_from_slice(&["cat", "garden"])).unwrap();
/// let word = select_word(Difficulty::Hard, &corpus, &mut rand::rng());
/// assert_eq!(word.text(), "CAT");
/// ```
pub fn select_word<'a, R: Rng>(
    difficulty: Difficulty,
    corpus: &'a Corpus,
    rng: &mut R,
) -> &'a Word {
    let eligible = corpus.tier(difficulty);

    if let Some(&word) = eligible.choose(&mut *rng) {
        return word;
    }

    log::debug!("No {difficulty} words in corpus, falling back to full corpus");
    let words = corpus.words();
    // Corpus::new guarantees at least one word
    &words[rng.random_range(0..words.len())]
}
