//! Guess-producing agents
//!
//! An agent is anything that looks at the nine boards and answers with one
//! five-letter guess: a person at a keyboard, a scripted list, or a solver.
//! The round driver only sees the [`Agent`] trait.

mod entropy;
mod heuristic;
mod human;
pub mod knowledge;
mod random;
mod scripted;

pub use entropy::{EntropyAgent, calculate_entropy, shannon_entropy};
pub use heuristic::{CandidateScore, HeuristicAgent};
pub use human::HumanAgent;
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;

use crate::core::{Board, BoardStatus, Word};
use crate::error::AgentError;
use crate::wordlists::Vocabulary;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;

/// What an agent answers each round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentReply {
    /// Raw guess text; validated by the driver
    Guess(String),
    /// Give up; the session completes early
    Forfeit,
}

/// Read-only view of the session handed to an agent before each round
#[derive(Debug, Clone)]
pub struct Observation<'a> {
    /// 1-based number of the round being requested
    pub round: usize,
    pub max_guesses: usize,
    /// All nine boards in id order
    pub boards: &'a [Board],
    /// Why the previous guess for this round was rejected, if it was
    pub rejection: Option<String>,
}

impl<'a> Observation<'a> {
    /// Boards still accepting guesses
    pub fn active_boards(&self) -> impl Iterator<Item = &'a Board> + use<'a> {
        self.boards
            .iter()
            .filter(|board| board.status() == BoardStatus::Active)
    }

    /// Every word guessed so far this session
    ///
    /// All boards receive the same guesses until they finish, so the longest
    /// history holds the full sequence.
    #[must_use]
    pub fn guessed_words(&self) -> Vec<&'a Word> {
        self.boards
            .iter()
            .max_by_key(|board| board.guesses_used())
            .map(|board| board.history().iter().map(|r| &r.guess).collect())
            .unwrap_or_default()
    }

    /// Texts of the words guessed so far
    #[must_use]
    pub fn guessed_set(&self) -> FxHashSet<&'a str> {
        self.guessed_words().into_iter().map(Word::text).collect()
    }
}

/// Capability to produce the next guess from an observation
pub trait Agent {
    /// Produce a guess (or forfeit) for the upcoming round
    ///
    /// # Errors
    /// Returns `AgentError` if the agent cannot produce anything, e.g. its
    /// input closed.
    fn next_guess(&mut self, observation: &Observation<'_>) -> Result<AgentReply, AgentError>;

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}

impl<A: Agent + ?Sized> Agent for &mut A {
    fn next_guess(&mut self, observation: &Observation<'_>) -> Result<AgentReply, AgentError> {
        (**self).next_guess(observation)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Enum wrapper for the automatic agents
///
/// Allows runtime selection of an agent while keeping static dispatch.
pub enum AgentType<'v> {
    /// Maximises summed information gain across active boards (default)
    Entropy(EntropyAgent<'v>),
    /// Letter-knowledge scoring over a random sample of words
    Heuristic(HeuristicAgent<'v>),
    /// Uniformly random unguessed word
    Random(RandomAgent<'v>),
    /// Fixed guess list
    Scripted(ScriptedAgent),
}

impl<'v> AgentType<'v> {
    /// Create an agent from its name
    ///
    /// Supported names: "entropy", "heuristic", "random". Defaults to entropy
    /// if the name is unrecognised.
    #[must_use]
    pub fn from_name(name: &str, vocabulary: &'v Vocabulary, rng: StdRng) -> Self {
        match Self::resolve_name(name) {
            "heuristic" => Self::Heuristic(HeuristicAgent::new(vocabulary, rng)),
            "random" => Self::Random(RandomAgent::new(vocabulary, rng)),
            _ => Self::Entropy(EntropyAgent::new(vocabulary)),
        }
    }

    /// The agent name [`AgentType::from_name`] will actually build
    #[must_use]
    pub fn resolve_name(name: &str) -> &'static str {
        match name {
            "heuristic" => "heuristic",
            "random" => "random",
            _ => "entropy",
        }
    }
}

impl Agent for AgentType<'_> {
    fn next_guess(&mut self, observation: &Observation<'_>) -> Result<AgentReply, AgentError> {
        match self {
            Self::Entropy(a) => a.next_guess(observation),
            Self::Heuristic(a) => a.next_guess(observation),
            Self::Random(a) => a.next_guess(observation),
            Self::Scripted(a) => a.next_guess(observation),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Entropy(a) => a.name(),
            Self::Heuristic(a) => a.name(),
            Self::Random(a) => a.name(),
            Self::Scripted(a) => a.name(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::{BOARD_COUNT, BoardSet, DEFAULT_MAX_GUESSES, Word};

    pub const TARGETS: [&str; BOARD_COUNT] = [
        "crane", "allow", "ghost", "brick", "power", "flame", "quiet", "jumbo", "sassy",
    ];

    pub fn board_set() -> BoardSet {
        BoardSet::from_targets(TARGETS.map(|t| Word::new(t).unwrap()), DEFAULT_MAX_GUESSES)
            .unwrap()
    }
}
