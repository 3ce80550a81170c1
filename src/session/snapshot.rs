//! Read-only view of a session for renderers

use crate::core::{
    BodyPart, DerivedStatus, Difficulty, GameStatus, GuessedLetters, KeyState, RevealedLetter,
    Word, key_state, reveal,
};
use std::fmt;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineState {
    /// No active round; waiting for a difficulty
    Start,
    Playing,
    Won,
    Lost,
}

impl MachineState {
    #[must_use]
    pub const fn from_status(status: GameStatus) -> Self {
        match status {
            GameStatus::Playing => Self::Playing,
            GameStatus::Winner => Self::Won,
            GameStatus::Loser => Self::Lost,
        }
    }

    /// True once a round has been won or lost
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "Start",
            Self::Playing => "Playing",
            Self::Won => "Won",
            Self::Lost => "Lost",
        })
    }
}

/// Everything a renderer needs after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub target_word: Option<Word>,
    pub guessed_letters: GuessedLetters,
    pub derived: DerivedStatus,
    pub difficulty: Option<Difficulty>,
    pub machine_state: MachineState,
}

impl SessionSnapshot {
    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.derived.status
    }

    #[inline]
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.derived.incorrect_count
    }

    /// Keyboard state for one letter
    #[must_use]
    pub fn key_state(&self, letter: u8) -> KeyState {
        key_state(
            self.target_word.as_ref(),
            &self.guessed_letters,
            self.derived.status,
            letter,
        )
    }

    /// Letter blanks; missed letters are shown once the round is lost
    #[must_use]
    pub fn reveal(&self) -> Vec<RevealedLetter> {
        self.target_word.as_ref().map_or_else(Vec::new, |word| {
            reveal(word, &self.guessed_letters, self.derived.is_loser)
        })
    }

    /// Figure parts to draw
    #[must_use]
    pub fn visible_parts(&self) -> &'static [BodyPart] {
        BodyPart::visible(self.derived.incorrect_count)
    }
}
