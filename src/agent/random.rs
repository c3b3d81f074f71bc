//! Uniformly random agent

use super::{Agent, AgentReply, Observation};
use crate::core::Word;
use crate::error::AgentError;
use crate::wordlists::Vocabulary;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Picks any vocabulary word that has not been guessed yet
pub struct RandomAgent<'v> {
    vocabulary: &'v Vocabulary,
    rng: StdRng,
}

impl<'v> RandomAgent<'v> {
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary, rng: StdRng) -> Self {
        Self { vocabulary, rng }
    }
}

impl Agent for RandomAgent<'_> {
    fn next_guess(&mut self, observation: &Observation<'_>) -> Result<AgentReply, AgentError> {
        let guessed = observation.guessed_set();
        let fresh: Vec<&Word> = self
            .vocabulary
            .words()
            .iter()
            .filter(|word| !guessed.contains(word.text()))
            .collect();

        fresh
            .choose(&mut self.rng)
            .map(|word| AgentReply::Guess(word.text().to_string()))
            .ok_or_else(|| AgentError::NoGuess("every vocabulary word was already guessed".into()))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::test_support::board_set;
    use crate::core::DEFAULT_MAX_GUESSES;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    #[test]
    fn never_repeats_a_guess() {
        let vocabulary = Vocabulary::new(words_from_slice(&["audio", "crane"]));
        let mut agent = RandomAgent::new(&vocabulary, StdRng::seed_from_u64(9));
        let mut set = board_set();
        set.apply_guess_to_all("audio").unwrap();

        let observation = Observation {
            round: 2,
            max_guesses: DEFAULT_MAX_GUESSES,
            boards: set.boards(),
            rejection: None,
        };

        assert_eq!(
            agent.next_guess(&observation).unwrap(),
            AgentReply::Guess("crane".to_string())
        );
    }
}
