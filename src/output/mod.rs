//! Terminal output formatting
//!
//! Display utilities for rounds, sessions and evaluations.

pub mod display;
pub mod formatters;

pub use display::{print_evaluation, print_round, print_summary};
pub use formatters::{format_indicators, history_table, summary_table};
