//! Rollout evaluation
//!
//! Plays many independent sessions with one agent and aggregates scores.

use super::run::run_session;
use crate::agent::AgentType;
use crate::core::BOARD_COUNT;
use crate::error::GameError;
use crate::session::{SessionConfig, SessionSummary};
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Aggregate over a batch of sessions
#[derive(Debug)]
pub struct EvaluationResult {
    pub agent: &'static str,
    pub sessions: usize,
    pub average_score: f64,
    pub average_wins: f64,
    pub best_score: usize,
    pub worst_score: usize,
    pub perfect_sessions: usize,
    /// Index is boards won in a session, value is how many sessions did that
    pub wins_distribution: [usize; BOARD_COUNT + 1],
    pub duration: Duration,
    pub summaries: Vec<SessionSummary>,
}

impl EvaluationResult {
    fn from_summaries(
        agent: &'static str,
        summaries: Vec<SessionSummary>,
        duration: Duration,
    ) -> Self {
        let sessions = summaries.len();
        let mut wins_distribution = [0; BOARD_COUNT + 1];
        for summary in &summaries {
            wins_distribution[summary.boards_won.min(BOARD_COUNT)] += 1;
        }

        let total_score: usize = summaries.iter().map(|s| s.score).sum();
        let total_wins: usize = summaries.iter().map(|s| s.boards_won).sum();
        let mean = |total: usize| {
            if sessions == 0 {
                0.0
            } else {
                total as f64 / sessions as f64
            }
        };

        Self {
            agent,
            sessions,
            average_score: mean(total_score),
            average_wins: mean(total_wins),
            best_score: summaries.iter().map(|s| s.score).max().unwrap_or(0),
            worst_score: summaries.iter().map(|s| s.score).min().unwrap_or(0),
            perfect_sessions: summaries.iter().filter(|s| s.is_perfect()).count(),
            wins_distribution,
            duration,
            summaries,
        }
    }
}

/// Play `sessions` rollouts with the named agent
///
/// Every session gets its own target draw and agent generator, both derived
/// from `rng`, so a seeded `rng` reproduces the whole batch.
///
/// # Errors
/// Returns the first `GameError` raised by a session.
///
/// # Panics
/// Panics if the hard-coded progress bar template is rejected by indicatif.
pub fn run_evaluation(
    vocabulary: &Vocabulary,
    config: SessionConfig,
    agent_name: &str,
    sessions: usize,
    rng: &mut StdRng,
    show_progress: bool,
) -> Result<EvaluationResult, GameError> {
    let pb = if show_progress {
        ProgressBar::new(sessions as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut summaries = Vec::with_capacity(sessions);
    for _ in 0..sessions {
        let agent_rng = StdRng::seed_from_u64(rng.random());
        let agent = AgentType::from_name(agent_name, vocabulary, agent_rng);
        let summary = run_session(vocabulary, config, rng, agent, |_, _| {})?;
        pb.set_message(format!("last: {} won, score {}", summary.boards_won, summary.score));
        pb.inc(1);
        summaries.push(summary);
    }

    pb.finish_and_clear();

    Ok(EvaluationResult::from_summaries(
        AgentType::resolve_name(agent_name),
        summaries,
        start.elapsed(),
    ))
}
