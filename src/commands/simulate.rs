//! Simulate command
//!
//! Plays many automated rounds per difficulty tier to measure how hard each
//! tier is for the candidate-frequency guesser.

use crate::core::Difficulty;
use crate::session::{GameSession, MachineState, SessionError};
use crate::solver::LetterGuesser;
use crate::wordlists::Corpus;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of one automated round
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub word: String,
    pub won: bool,
    pub incorrect: usize,
    pub guesses: usize,
}

/// Aggregated results for one tier
#[derive(Debug, Clone)]
pub struct TierStatistics {
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub average_incorrect: f64,
    /// Count of rounds by number of incorrect guesses (0..=6)
    pub incorrect_distribution: [usize; 7],
    /// Words the guesser lost on most often
    pub hardest_words: Vec<(String, usize)>,
}

impl TierStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.rounds as f64 * 100.0
        }
    }
}

/// Result of a full simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub tiers: Vec<TierStatistics>,
    pub total_rounds: usize,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play one round to completion with the letter guesser
///
/// # Errors
///
/// Returns a `SessionError` if the round cannot be started.
pub fn simulate_round<R: Rng>(
    corpus: &Corpus,
    difficulty: Difficulty,
    rng: R,
) -> Result<RoundResult, SessionError> {
    let mut session = GameSession::with_rng(corpus, rng);
    session.start_game(difficulty)?;
    let guesser = LetterGuesser::new(corpus);

    loop {
        let snapshot = session.snapshot();
        if snapshot.machine_state != MachineState::Playing {
            break;
        }
        let Some(letter) = guesser.next_letter(&snapshot.reveal(), &snapshot.guessed_letters)
        else {
            break;
        };
        session.guess(letter);
    }

    let snapshot = session.snapshot();
    Ok(RoundResult {
        word: snapshot
            .target_word
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        won: snapshot.derived.is_winner,
        incorrect: snapshot.derived.incorrect_count,
        guesses: snapshot.guessed_letters.len(),
    })
}

/// Simulate `rounds` rounds for every tier in `difficulties`
///
/// Rounds run in parallel. Each round gets its own RNG derived from `seed`,
/// so a fixed seed gives the same results regardless of thread count.
///
/// # Errors
///
/// Returns a `SessionError` if any round cannot be started.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation(
    corpus: &Corpus,
    difficulties: &[Difficulty],
    rounds: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<SimulationResult, SessionError> {
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("Simulating {rounds} rounds per tier with seed {seed}");

    let total = rounds * difficulties.len();
    let pb = if show_progress {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut tiers = Vec::with_capacity(difficulties.len());

    for (tier_index, &difficulty) in difficulties.iter().enumerate() {
        pb.set_message(difficulty.name());
        let results: Vec<RoundResult> = (0..rounds)
            .into_par_iter()
            .map(|round| {
                let round_seed = seed
                    .wrapping_add((tier_index * rounds + round) as u64)
                    .wrapping_mul(0x9E37_79B9_7F4A_7C15);
                let result =
                    simulate_round(corpus, difficulty, StdRng::seed_from_u64(round_seed));
                pb.inc(1);
                result
            })
            .collect::<Result<Vec<_>, SessionError>>()?;
        tiers.push(summarize(difficulty, &results));
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(SimulationResult {
        tiers,
        total_rounds: total,
        duration,
        rounds_per_second: total as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn summarize(difficulty: Difficulty, results: &[RoundResult]) -> TierStatistics {
    let rounds = results.len();
    let won = results.iter().filter(|r| r.won).count();

    let mut incorrect_distribution = [0; 7];
    for result in results {
        incorrect_distribution[result.incorrect.min(6)] += 1;
    }

    let total_incorrect: usize = results.iter().map(|r| r.incorrect).sum();
    let average_incorrect = if rounds > 0 {
        total_incorrect as f64 / rounds as f64
    } else {
        0.0
    };

    let mut losses: FxHashMap<&str, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| !r.won) {
        *losses.entry(result.word.as_str()).or_insert(0) += 1;
    }
    let mut hardest_words: Vec<(String, usize)> = losses
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    hardest_words.sort_by(|(a, count_a), (b, count_b)| count_b.cmp(count_a).then(a.cmp(b)));
    hardest_words.truncate(5);

    TierStatistics {
        difficulty,
        rounds,
        won,
        lost: rounds - won,
        average_incorrect,
        incorrect_distribution,
        hardest_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Corpus {
        Corpus::builtin().unwrap()
    }

    #[test]
    fn simulated_round_finishes() {
        let corpus = corpus();
        let result =
            simulate_round(&corpus, Difficulty::Medium, StdRng::seed_from_u64(5)).unwrap();
        assert!(Difficulty::Medium.accepts_length(result.word.len()));
        assert!(result.won || result.incorrect == 6);
        assert!(result.guesses >= result.incorrect);
    }

    #[test]
    fn single_word_corpus_is_always_won() {
        let corpus = Corpus::new(words_from_slice(&["rocket"])).unwrap();
        let result =
            simulate_round(&corpus, Difficulty::Medium, StdRng::seed_from_u64(0)).unwrap();
        assert!(result.won);
        assert_eq!(result.incorrect, 0);
        assert_eq!(result.word, "ROCKET");
    }

    #[test]
    fn simulation_covers_every_tier() {
        let corpus = corpus();
        let result = run_simulation(&corpus, &Difficulty::ALL, 20, Some(11), false).unwrap();

        assert_eq!(result.total_rounds, 60);
        assert_eq!(result.tiers.len(), 3);
        for tier in &result.tiers {
            assert_eq!(tier.rounds, 20);
            assert_eq!(tier.won + tier.lost, 20);
            assert_eq!(tier.incorrect_distribution.iter().sum::<usize>(), 20);
            assert!(tier.average_incorrect <= 6.0);
        }
    }

    #[test]
    fn simulation_is_reproducible_with_seed() {
        let corpus = corpus();
        let first = run_simulation(&corpus, &[Difficulty::Hard], 30, Some(99), false).unwrap();
        let second = run_simulation(&corpus, &[Difficulty::Hard], 30, Some(99), false).unwrap();

        assert_eq!(first.tiers[0].won, second.tiers[0].won);
        assert_eq!(
            first.tiers[0].incorrect_distribution,
            second.tiers[0].incorrect_distribution
        );
    }

    #[test]
    fn summarize_ranks_hardest_words() {
        let results = vec![
            RoundResult {
                word: "JAZZ".to_string(),
                won: false,
                incorrect: 6,
                guesses: 8,
            },
            RoundResult {
                word: "JAZZ".to_string(),
                won: false,
                incorrect: 6,
                guesses: 9,
            },
            RoundResult {
                word: "FOX".to_string(),
                won: false,
                incorrect: 6,
                guesses: 7,
            },
            RoundResult {
                word: "CAT".to_string(),
                won: true,
                incorrect: 1,
                guesses: 4,
            },
        ];
        let stats = summarize(Difficulty::Hard, &results);

        assert_eq!(stats.won, 1);
        assert_eq!(stats.lost, 3);
        assert!((stats.win_rate() - 25.0).abs() < f64::EPSILON);
        assert_eq!(
            stats.hardest_words,
            vec![("JAZZ".to_string(), 2), ("FOX".to_string(), 1)]
        );
        assert_eq!(stats.incorrect_distribution[6], 3);
        assert_eq!(stats.incorrect_distribution[1], 1);
    }
}
