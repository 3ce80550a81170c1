//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{run_simple, run_simple_with};
pub use simulate::{RoundResult, SimulationResult, TierStatistics, run_simulation, simulate_round};
