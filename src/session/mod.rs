//! Game session: word selection and the round state machine
//!
//! `GameSession` is the only stateful piece of the game. Renderers send it
//! commands and draw the `SessionSnapshot` it publishes.

mod engine;
pub mod selector;
mod snapshot;

pub use engine::{GameSession, GuessOutcome, SessionError, Statistics};
pub use selector::select_word;
pub use snapshot::{MachineState, SessionSnapshot};
