//! Agent that replays a fixed list of guesses

use super::{Agent, AgentReply, Observation};
use crate::error::AgentError;
use std::collections::VecDeque;

/// Replays guesses in order, then forfeits
///
/// Entries are passed through untouched, so a script can contain invalid
/// guesses to exercise the driver's rejection handling.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgent {
    guesses: VecDeque<String>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new<I, S>(guesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            guesses: guesses.into_iter().map(Into::into).collect(),
        }
    }

    /// Guesses not yet played
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl Agent for ScriptedAgent {
    fn next_guess(&mut self, _observation: &Observation<'_>) -> Result<AgentReply, AgentError> {
        Ok(self
            .guesses
            .pop_front()
            .map_or(AgentReply::Forfeit, AgentReply::Guess))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
