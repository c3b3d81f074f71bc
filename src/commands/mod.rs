//! Command implementations

pub mod evaluate;
pub mod run;
pub mod simple;

pub use evaluate::{EvaluationResult, run_evaluation};
pub use run::{append_report, run_session};
pub use simple::run_simple;
