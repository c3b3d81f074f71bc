//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: the player types one guess per round and
//! sees the feedback for all nine boards.

use crate::agent::HumanAgent;
use crate::error::GameError;
use crate::output::{print_round, print_summary};
use crate::session::{Session, SessionConfig, SessionSummary};
use crate::wordlists::Vocabulary;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
/// Returns `GameError::InsufficientVocabulary` for a vocabulary under nine
/// words, or `GameError::Agent` if reading input fails or stdin closes.
pub fn run_simple<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    config: SessionConfig,
    rng: &mut R,
) -> Result<SessionSummary, GameError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Nine-Board Wordle - Simple Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Nine hidden words, one shared guess per round.");
    println!(
        "You have {} guesses; every unsolved board receives each one.",
        config.max_guesses
    );
    println!("Type a five-letter word, or 'quit' to give up.\n");

    let stdin = io::stdin();
    let summary = play_lines(vocabulary, config, rng, stdin.lock(), io::stdout())?;

    print_summary(&summary);

    Ok(summary)
}

/// Play one session reading guesses from `input`
///
/// Typos are re-prompted without limit; only `quit` or end of input stops
/// the session early.
fn play_lines<R, I, W>(
    vocabulary: &Vocabulary,
    config: SessionConfig,
    rng: &mut R,
    input: I,
    output: W,
) -> Result<SessionSummary, GameError>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut session = Session::new(vocabulary, config.for_human(), rng)?;
    session.run(HumanAgent::new(input, output), |result, boards| {
        print_round(result, boards);
    })
}
