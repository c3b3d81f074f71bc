//! Nine-Board Wordle
//!
//! Nine concurrent Wordle boards share one guess per round. Each board keeps
//! its own target, history and won/lost status; a session ends when every
//! board is finished, the guess budget is spent or the player gives up.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_nine::agent::ScriptedAgent;
//! use wordle_nine::session::{Session, SessionConfig};
//! use wordle_nine::wordlists::Vocabulary;
//! use rand::SeedableRng;
//!
//! let vocabulary = Vocabulary::embedded();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut session = Session::new(&vocabulary, SessionConfig::default(), &mut rng).unwrap();
//!
//! let summary = session
//!     .run(ScriptedAgent::new(["crane", "ghost"]), |round, _| {
//!         println!("round {}: {}", round.round, round.guess);
//!     })
//!     .unwrap();
//! assert_eq!(summary.rounds_played, 2);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Guess-producing agents
pub mod agent;

// Round driver
pub mod session;

// Word lists
pub mod wordlists;

// JSON Lines reports
pub mod report;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
