//! Game session orchestrator
//!
//! Owns the current round and applies the four player commands to it.

use super::selector::select_word;
use super::snapshot::{MachineState, SessionSnapshot};
use crate::core::{Difficulty, GameStatus, GuessedLetters, Word, evaluate};
use crate::wordlists::Corpus;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fmt;

/// Result of a `guess` command
///
/// Only `Correct` and `Incorrect` change the round; every other outcome is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { letter: char, occurrences: usize },
    Incorrect { letter: char, remaining: usize },
    AlreadyGuessed(char),
    NotALetter(char),
    /// The round is already won or lost
    RoundOver,
    NoActiveRound,
}

impl GuessOutcome {
    /// True if the letter was added to the round
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Correct { .. } | Self::Incorrect { .. })
    }
}

/// A command that is not valid in the current machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A round is being played; finish it or return to start first
    RoundInProgress,
    /// There is no round to restart
    NoActiveRound,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundInProgress => write!(f, "A round is still in progress"),
            Self::NoActiveRound => write!(f, "No round has been started"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Win/loss tally across rounds of one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
}

impl Statistics {
    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

struct GameRound<'a> {
    target: &'a Word,
    guessed: GuessedLetters,
    difficulty: Difficulty,
}

type Listener<'a> = Box<dyn FnMut(&SessionSnapshot) + 'a>;

/// A single player's Hangman session
///
/// The session is either at the start screen (no round) or holds one
/// `GameRound`. Win/loss status is derived from the round on demand.
pub struct GameSession<'a, R: Rng = ThreadRng> {
    corpus: &'a Corpus,
    rng: R,
    round: Option<GameRound<'a>>,
    stats: Statistics,
    listeners: Vec<Listener<'a>>,
}

impl<'a> GameSession<'a, ThreadRng> {
    /// Create a session at the start screen using the thread-local RNG
    #[must_use]
    pub fn new(corpus: &'a Corpus) -> Self {
        Self::with_rng(corpus, rand::rng())
    }
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Create a session at the start screen with an explicit RNG
    pub fn with_rng(corpus: &'a Corpus, rng: R) -> Self {
        Self {
            corpus,
            rng,
            round: None,
            stats: Statistics::default(),
            listeners: Vec::new(),
        }
    }

    /// Register a callback invoked with a fresh snapshot after every state change
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionSnapshot) + 'a) {
        self.listeners.push(Box::new(listener));
    }

    /// Begin a round at `difficulty`
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RoundInProgress` unless the session is at the
    /// start screen.
    pub fn start_game(&mut self, difficulty: Difficulty) -> Result<SessionSnapshot, SessionError> {
        if self.round.is_some() {
            return Err(SessionError::RoundInProgress);
        }
        self.begin_round(difficulty);
        Ok(self.publish())
    }

    /// Guess a letter
    ///
    /// Repeated letters, non-letters and guesses outside a live round are
    /// ignored and reported through the returned outcome.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let Some(round) = self.round.as_mut() else {
            return GuessOutcome::NoActiveRound;
        };
        let before = evaluate(Some(round.target), &round.guessed);
        if before.status.is_terminal() {
            return GuessOutcome::RoundOver;
        }
        let Some(normalized) = GuessedLetters::normalize(letter) else {
            return GuessOutcome::NotALetter(letter);
        };
        let upper = normalized as char;
        if !round.guessed.insert(upper) {
            return GuessOutcome::AlreadyGuessed(upper);
        }

        let after = evaluate(Some(round.target), &round.guessed);
        let occurrences = round.target.positions_of(normalized).len();
        let outcome = if occurrences > 0 {
            GuessOutcome::Correct {
                letter: upper,
                occurrences,
            }
        } else {
            GuessOutcome::Incorrect {
                letter: upper,
                remaining: after.remaining_guesses(),
            }
        };
        log::debug!("Guess {upper}: {outcome:?}, status {}", after.status);

        match after.status {
            GameStatus::Winner => {
                self.stats.played += 1;
                self.stats.won += 1;
                log::info!("Round won: {}", round.target);
            }
            GameStatus::Loser => {
                self.stats.played += 1;
                self.stats.lost += 1;
                log::info!("Round lost: {}", round.target);
            }
            GameStatus::Playing => {}
        }

        self.publish();
        outcome
    }

    /// Start a new round at the same difficulty once the current one is over
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveRound` at the start screen and
    /// `SessionError::RoundInProgress` while the round is still being played.
    pub fn restart(&mut self) -> Result<SessionSnapshot, SessionError> {
        let round = self.round.as_ref().ok_or(SessionError::NoActiveRound)?;
        if !evaluate(Some(round.target), &round.guessed)
            .status
            .is_terminal()
        {
            return Err(SessionError::RoundInProgress);
        }
        let difficulty = round.difficulty;
        self.begin_round(difficulty);
        Ok(self.publish())
    }

    /// Abandon any round and go back to the start screen
    pub fn return_to_start(&mut self) -> SessionSnapshot {
        if let Some(round) = self.round.take() {
            log::debug!("Left {} round ({} guesses)", round.difficulty, round.guessed.len());
        }
        self.publish()
    }

    /// Current state of the session
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        match &self.round {
            None => SessionSnapshot {
                target_word: None,
                guessed_letters: GuessedLetters::new(),
                derived: evaluate(None, &GuessedLetters::new()),
                difficulty: None,
                machine_state: MachineState::Start,
            },
            Some(round) => {
                let derived = evaluate(Some(round.target), &round.guessed);
                SessionSnapshot {
                    target_word: Some(round.target.clone()),
                    guessed_letters: round.guessed.clone(),
                    machine_state: MachineState::from_status(derived.status),
                    derived,
                    difficulty: Some(round.difficulty),
                }
            }
        }
    }

    #[must_use]
    pub fn machine_state(&self) -> MachineState {
        self.round.as_ref().map_or(MachineState::Start, |round| {
            MachineState::from_status(evaluate(Some(round.target), &round.guessed).status)
        })
    }

    #[inline]
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.stats
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    fn begin_round(&mut self, difficulty: Difficulty) {
        let target = select_word(difficulty, self.corpus, &mut self.rng);
        log::debug!("New {difficulty} round, {} letters", target.len());
        self.round = Some(GameRound {
            target,
            guessed: GuessedLetters::new(),
            difficulty,
        });
    }

    fn publish(&mut self) -> SessionSnapshot {
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn cat_corpus() -> Corpus {
        Corpus::new(words_from_slice(&["cat"])).unwrap()
    }

    fn mixed_corpus() -> Corpus {
        Corpus::new(words_from_slice(&[
            "cat", "dog", "frog", "garden", "rocket", "adventure", "astronaut",
        ]))
        .unwrap()
    }

    fn session(corpus: &Corpus) -> GameSession<'_, StdRng> {
        GameSession::with_rng(corpus, StdRng::seed_from_u64(3))
    }

    fn guess_all(session: &mut GameSession<'_, StdRng>, letters: &str) {
        for letter in letters.chars() {
            session.guess(letter);
        }
    }

    #[test]
    fn new_session_is_at_start() {
        let corpus = cat_corpus();
        let session = session(&corpus);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.machine_state, MachineState::Start);
        assert!(snapshot.target_word.is_none());
        assert!(!snapshot.derived.is_winner);
        assert_eq!(snapshot.difficulty, None);
    }

    #[test]
    fn start_game_begins_round() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        let snapshot = session.start_game(Difficulty::Hard).unwrap();
        assert_eq!(snapshot.machine_state, MachineState::Playing);
        assert_eq!(snapshot.target_word.unwrap().text(), "CAT");
        assert!(snapshot.guessed_letters.is_empty());
        assert_eq!(snapshot.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn start_game_rejected_mid_round() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        session.start_game(Difficulty::Hard).unwrap();
        assert_eq!(
            session.start_game(Difficulty::Easy),
            Err(SessionError::RoundInProgress)
        );
    }

    #[test]
    fn winning_round() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        session.start_game(Difficulty::Hard).unwrap();
        guess_all(&mut session, "CAT");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status(), GameStatus::Winner);
        assert_eq!(snapshot.machine_state, MachineState::Won);
        assert_eq!(snapshot.incorrect_count(), 0);
    }

    #[test]
    fn losing_round() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        session.start_game(Difficulty::Hard).unwrap();
        guess_all(&mut session, "XYZQWE");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status(), GameStatus::Loser);
        assert_eq!(snapshot.machine_state, MachineState::Lost);
        assert_eq!(snapshot.incorrect_count(), 6);
    }

    #[test]
    fn partial_round_keeps_playing() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        session.start_game(Difficulty::Hard).unwrap();
        guess_all(&mut session, "CXA");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status(), GameStatus::Playing);
        assert_eq!(snapshot.incorrect_count(), 1);
        assert!(!snapshot.derived.is_winner);
    }

    #[test]
    fn guess_outcomes() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        assert_eq!(session.guess('c'), GuessOutcome::NoActiveRound);

        session.start_game(Difficulty::Hard).unwrap();
        assert_eq!(
            session.guess('c'),
            GuessOutcome::Correct {
                letter: 'C',
                occurrences: 1
            }
        );
        assert_eq!(session.guess('C'), GuessOutcome::AlreadyGuessed('C'));
        assert_eq!(session.guess('7'), GuessOutcome::NotALetter('7'));
        assert_eq!(
            session.guess('z'),
            GuessOutcome::Incorrect {
                letter: 'Z',
                remaining: 5
            }
        );
        assert_eq!(session.snapshot().guessed_letters.to_string(), "CZ");
    }

    #[test]
    fn finished_round_ignores_guesses() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        session.start_game(Difficulty::Hard).unwrap();
        guess_all(&mut session, "CAT");
        let before = session.snapshot();

        assert_eq!(session.guess('Q'), GuessOutcome::RoundOver);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn restart_after_loss_draws_from_same_tier() {
        let corpus = mixed_corpus();
        let mut session = session(&corpus);
        session.start_game(Difficulty::Hard).unwrap();
        guess_all(&mut session, "QWXYZJKV");
        assert_eq!(session.machine_state(), MachineState::Lost);

        let snapshot = session.restart().unwrap();
        assert!(snapshot.guessed_letters.is_empty());
        assert_eq!(snapshot.status(), GameStatus::Playing);
        assert_eq!(snapshot.difficulty, Some(Difficulty::Hard));
        let word = snapshot.target_word.unwrap();
        assert!(Difficulty::Hard.accepts_length(word.len()));
    }

    #[test]
    fn restart_rejected_mid_round_and_at_start() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        assert_eq!(session.restart(), Err(SessionError::NoActiveRound));

        session.start_game(Difficulty::Hard).unwrap();
        session.guess('c');
        assert_eq!(session.restart(), Err(SessionError::RoundInProgress));
        assert_eq!(session.snapshot().guessed_letters.len(), 1);
    }

    #[test]
    fn return_to_start_clears_round() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        session.start_game(Difficulty::Hard).unwrap();
        session.guess('c');

        let snapshot = session.return_to_start();
        assert_eq!(snapshot.machine_state, MachineState::Start);
        assert!(snapshot.target_word.is_none());
        assert!(snapshot.guessed_letters.is_empty());

        assert!(session.start_game(Difficulty::Medium).is_ok());
    }

    #[test]
    fn statistics_count_finished_rounds_once() {
        let corpus = cat_corpus();
        let mut session = session(&corpus);
        session.start_game(Difficulty::Hard).unwrap();
        guess_all(&mut session, "CATQ");
        session.restart().unwrap();
        guess_all(&mut session, "QWERYU");
        session.return_to_start();
        session.start_game(Difficulty::Hard).unwrap();
        session.guess('c');

        let stats = session.statistics();
        assert_eq!(stats.played, 2);
        assert_eq!(stats.won, 1);
        assert_eq!(stats.lost, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn listeners_receive_every_state_change() {
        let corpus = cat_corpus();
        let seen: Rc<RefCell<Vec<MachineState>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let mut session = session(&corpus);
        session.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.machine_state));

        session.start_game(Difficulty::Hard).unwrap();
        session.guess('c');
        session.guess('c');
        session.guess('a');
        session.guess('t');
        session.guess('x');
        session.restart().unwrap();
        session.return_to_start();

        assert_eq!(
            *seen.borrow(),
            vec![
                MachineState::Playing,
                MachineState::Playing,
                MachineState::Playing,
                MachineState::Won,
                MachineState::Playing,
                MachineState::Start,
            ]
        );
    }

    proptest! {
        #[test]
        fn guessed_letters_grow_monotonically(
            letters in "[a-zA-Z0-9]{0,40}",
            seed in any::<u64>(),
        ) {
            let corpus = mixed_corpus();
            let mut session = GameSession::with_rng(&corpus, StdRng::seed_from_u64(seed));
            session.start_game(Difficulty::Medium).unwrap();
            let mut previous = 0;
            for letter in letters.chars() {
                let was_finished = session.machine_state().is_finished();
                let before = session.snapshot();
                session.guess(letter);
                let after = session.snapshot();
                prop_assert!(after.guessed_letters.len() >= previous);
                if was_finished {
                    prop_assert_eq!(&after, &before);
                }
                prop_assert!(!(after.derived.is_winner && after.derived.is_loser));
                previous = after.guessed_letters.len();
            }
        }

        #[test]
        fn repeated_guess_is_idempotent(letter in "[a-zA-Z]") {
            let corpus = mixed_corpus();
            let mut session = GameSession::with_rng(&corpus, StdRng::seed_from_u64(9));
            session.start_game(Difficulty::Easy).unwrap();
            let letter = letter.chars().next().unwrap();
            session.guess(letter);
            let once = session.snapshot().guessed_letters;
            session.guess(letter);
            prop_assert_eq!(session.snapshot().guessed_letters, once);
        }
    }
}
