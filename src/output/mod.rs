//! Terminal output formatting
//!
//! Display utilities for the line-mode game and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_guess_outcome, print_round_result, print_simulation_result, print_snapshot,
    print_tier_menu,
};
