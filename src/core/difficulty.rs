//! Difficulty tiers
//!
//! Each tier constrains the length of the target word. Longer words reveal
//! more letters per correct guess, so they are the easy tier.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A named difficulty bucket constraining word length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 9+ letters
    Easy,
    /// 6-8 letters
    Medium,
    /// 3-5 letters
    Hard,
}

/// Error returned when parsing an unknown difficulty name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyError(String);

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown difficulty '{}' (expected easy, medium or hard)",
            self.0
        )
    }
}

impl std::error::Error for DifficultyError {}

impl Difficulty {
    /// All tiers in start-screen order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Inclusive range of word lengths eligible for this tier
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Difficulty;
    ///
    /// assert!(Difficulty::Medium.length_range().contains(&6));
    /// assert!(!Difficulty::Hard.length_range().contains(&6));
    /// ```
    #[must_use]
    pub const fn length_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Easy => 9..=usize::MAX,
            Self::Medium => 6..=8,
            Self::Hard => 3..=5,
        }
    }

    /// Whether a word of `len` letters belongs to this tier
    #[inline]
    #[must_use]
    pub fn accepts_length(self, len: usize) -> bool {
        self.length_range().contains(&len)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Easy => "9+ letters",
            Self::Medium => "6-8 letters",
            Self::Hard => "3-5 letters",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(DifficultyError(s.to_string())),
        }
    }
}
