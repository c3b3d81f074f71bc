//! Letter-knowledge heuristic agent
//!
//! Samples a batch of vocabulary words and ranks them by how well they fit the
//! unsolved boards (exploitation) and how many unseen letters they try
//! (exploration), with a heavy penalty for reusing letters known to be grey.

use super::knowledge::LetterKnowledge;
use super::{Agent, AgentReply, Observation};
use crate::core::{ALPHABET_SIZE, BoardStatus, Word};
use crate::error::AgentError;
use crate::wordlists::Vocabulary;
use rand::rngs::StdRng;
use tracing::debug;

/// Words sampled per round
pub const SAMPLE_SIZE: usize = 100;

const WEIGHT_VALID: f64 = 10.0;
const WEIGHT_NEW_LETTER: f64 = 1.5;
const PENALTY_GREY: f64 = 5.0;

/// Per-word breakdown behind a heuristic score
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore<'v> {
    pub word: &'v Word,
    pub score: f64,
    /// Boards on which the word breaks no known constraint
    pub valid_for_boards: usize,
    pub new_letters: usize,
    pub reused_grey: usize,
    pub reused_yellow: usize,
    pub reused_green: usize,
}

/// Exploration/exploitation scorer over a random sample
pub struct HeuristicAgent<'v> {
    vocabulary: &'v Vocabulary,
    rng: StdRng,
}

impl<'v> HeuristicAgent<'v> {
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary, rng: StdRng) -> Self {
        Self {
            vocabulary,
            rng,
        }
    }

    /// Score the given words against every board that is not won, best first
    ///
    /// Already guessed words are left out. Lost boards still count, matching
    /// how the boards read to a player.
    #[must_use]
    pub fn rank(words: &[&'v Word], observation: &Observation<'_>) -> Vec<CandidateScore<'v>> {
        let guessed = observation.guessed_set();
        let knowledge: Vec<LetterKnowledge> = observation
            .boards
            .iter()
            .filter(|board| board.status() != BoardStatus::Won)
            .map(|board| LetterKnowledge::from_history(board.history()))
            .collect();

        let mut ranked: Vec<CandidateScore<'v>> = words
            .iter()
            .filter(|word| !guessed.contains(word.text()))
            .map(|&word| score_word(word, &knowledge))
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

fn score_word<'v>(word: &'v Word, boards: &[LetterKnowledge]) -> CandidateScore<'v> {
    let letters: Vec<u8> = (0..ALPHABET_SIZE as u8)
        .map(|i| b'a' + i)
        .filter(|&letter| word.has_letter(letter))
        .collect();

    let mut valid_for_boards = 0;
    let mut new_letters = 0;
    let mut reused_grey = 0;
    let mut reused_yellow = 0;
    let mut reused_green = 0;

    for knowledge in boards {
        if knowledge.allows(word) {
            valid_for_boards += 1;
        }
        for &letter in &letters {
            if !knowledge.is_known(letter) {
                new_letters += 1;
            }
            if knowledge.is_grey(letter) {
                reused_grey += 1;
            }
            if knowledge.is_yellow(letter) {
                reused_yellow += 1;
            }
            if knowledge.is_green(letter) {
                reused_green += 1;
            }
        }
    }

    let score = valid_for_boards as f64 * WEIGHT_VALID + new_letters as f64 * WEIGHT_NEW_LETTER
        - reused_grey as f64 * PENALTY_GREY;

    CandidateScore {
        word,
        score,
        valid_for_boards,
        new_letters,
        reused_grey,
        reused_yellow,
        reused_green,
    }
}

impl Agent for HeuristicAgent<'_> {
    fn next_guess(&mut self, observation: &Observation<'_>) -> Result<AgentReply, AgentError> {
        let pool = self.vocabulary.words();
        let amount = SAMPLE_SIZE.min(pool.len());
        let sample: Vec<&Word> = rand::seq::index::sample(&mut self.rng, pool.len(), amount)
            .into_iter()
            .map(|i| &pool[i])
            .collect();

        let ranked = Self::rank(&sample, observation);
        let best = ranked
            .first()
            .ok_or_else(|| AgentError::NoGuess("sampled words were all guessed".into()))?;

        debug!(
            guess = %best.word,
            score = best.score,
            valid = best.valid_for_boards,
            new = best.new_letters,
            grey = best.reused_grey,
            yellow = best.reused_yellow,
            green = best.reused_green,
            "heuristic pick"
        );

        Ok(AgentReply::Guess(best.word.text().to_string()))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::test_support::board_set;
    use crate::core::{BOARD_COUNT, DEFAULT_MAX_GUESSES};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn observe(set: &crate::core::BoardSet) -> Observation<'_> {
        Observation {
            round: set.rounds_played() + 1,
            max_guesses: DEFAULT_MAX_GUESSES,
            boards: set.boards(),
            rejection: None,
        }
    }

    #[test]
    fn fresh_boards_reward_new_letters_only() {
        let set = board_set();
        let words = words_from_slice(&["audio", "sassy"]);
        let refs: Vec<&Word> = words.iter().collect();

        let ranked = HeuristicAgent::rank(&refs, &observe(&set));

        assert_eq!(ranked[0].word.text(), "audio");
        // Nothing is known yet, so every board allows every word
        assert_eq!(ranked[0].valid_for_boards, BOARD_COUNT);
        assert_eq!(ranked[0].new_letters, 5 * BOARD_COUNT);
        // sassy has only three distinct letters
        assert_eq!(ranked[1].new_letters, 3 * BOARD_COUNT);
        assert!((ranked[0].score - (90.0 + 67.5)).abs() < 1e-9);
    }

    #[test]
    fn grey_letters_are_penalised() {
        let mut set = board_set();
        set.apply_guess_to_all("audio").unwrap();

        let words = words_from_slice(&["audio", "draft", "nymph"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranked = HeuristicAgent::rank(&refs, &observe(&set));

        assert!(ranked.iter().all(|c| c.word.text() != "audio"), "guessed words are skipped");
        let draft = ranked.iter().find(|c| c.word.text() == "draft").unwrap();
        assert!(draft.reused_grey > 0);
        let nymph = ranked.iter().find(|c| c.word.text() == "nymph").unwrap();
        assert_eq!(nymph.reused_grey, 0);
    }

    #[test]
    fn scored_letters_are_counted_per_board() {
        let mut set = board_set();
        // Solves jumbo; o is yellow on ghost, power and allow, u is green on quiet
        set.apply_guess_to_all("jumbo").unwrap();

        let words = words_from_slice(&["ouzel"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranked = HeuristicAgent::rank(&refs, &observe(&set));

        assert_eq!(ranked[0].reused_yellow, 3);
        assert_eq!(ranked[0].reused_green, 1);
    }

    #[test]
    fn won_boards_are_ignored() {
        let mut set = board_set();
        set.apply_guess_to_all("crane").unwrap();

        let words = words_from_slice(&["ghost"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranked = HeuristicAgent::rank(&refs, &observe(&set));

        // Eight unsolved boards, none of which has seen g, h, o, s or t
        assert_eq!(ranked[0].new_letters, 5 * (BOARD_COUNT - 1));
    }

    #[test]
    fn agent_guesses_from_vocabulary() {
        let vocabulary = Vocabulary::embedded();
        let mut agent = HeuristicAgent::new(&vocabulary, StdRng::seed_from_u64(3));
        let set = board_set();

        let AgentReply::Guess(guess) = agent.next_guess(&observe(&set)).unwrap() else {
            panic!("heuristic agent never forfeits");
        };
        assert!(vocabulary.contains(&Word::new(&guess).unwrap()));
    }

    #[test]
    fn agent_errors_when_sample_exhausted() {
        let vocabulary = Vocabulary::new(words_from_slice(&["audio"]));
        let mut agent = HeuristicAgent::new(&vocabulary, StdRng::seed_from_u64(3));
        let mut set = board_set();
        set.apply_guess_to_all("audio").unwrap();

        assert!(matches!(
            agent.next_guess(&observe(&set)),
            Err(AgentError::NoGuess(_))
        ));
    }
}
