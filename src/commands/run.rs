//! Single automatic session

use crate::agent::Agent;
use crate::core::{BoardSet, RoundResult};
use crate::error::GameError;
use crate::report::JsonlReporter;
use crate::session::{Session, SessionConfig, SessionSummary};
use crate::wordlists::Vocabulary;
use rand::Rng;
use std::fs::OpenOptions;
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::info;

/// Draw nine targets and let `agent` play until the session completes
///
/// `on_round` sees every accepted round, e.g. for printing.
///
/// # Errors
/// Returns `GameError::InsufficientVocabulary` if fewer than nine words are
/// available, or `GameError::Agent` if the agent fails.
pub fn run_session<R, A, F>(
    vocabulary: &Vocabulary,
    config: SessionConfig,
    rng: &mut R,
    agent: A,
    on_round: F,
) -> Result<SessionSummary, GameError>
where
    R: Rng + ?Sized,
    A: Agent,
    F: FnMut(&RoundResult, &BoardSet),
{
    let name = agent.name();
    let mut session = Session::new(vocabulary, config, rng)?;
    let summary = session.run(agent, on_round)?;

    info!(
        agent = name,
        won = summary.boards_won,
        score = summary.score,
        rounds = summary.rounds_played,
        "session finished"
    );

    Ok(summary)
}

/// Append summaries to a JSON Lines file, creating it if needed
///
/// # Errors
/// Returns an I/O error if the file cannot be opened or written.
pub fn append_report<'s>(
    path: &Path,
    agent: &str,
    seed: Option<u64>,
    summaries: impl IntoIterator<Item = &'s SessionSummary>,
) -> io::Result<usize> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut reporter = JsonlReporter::new(BufWriter::new(file));

    for summary in summaries {
        reporter.record(agent, seed, summary)?;
    }

    Ok(reporter.written())
}
