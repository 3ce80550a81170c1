//! Hangman
//!
//! A Hangman word-guessing game: pure game rules, a difficulty-tiered word
//! corpus, a session state machine, and terminal front-ends that render it.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Difficulty, GameStatus};
//! use hangman::session::GameSession;
//! use hangman::wordlists::Corpus;
//!
//! let corpus = Corpus::builtin().unwrap();
//! let mut session = GameSession::new(&corpus);
//!
//! let snapshot = session.start_game(Difficulty::Hard).unwrap();
//! assert_eq!(snapshot.status(), GameStatus::Playing);
//!
//! session.guess('e');
//! println!("{} misses", session.snapshot().incorrect_count());
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod session;

// Word lists
pub mod wordlists;

// Automated player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
