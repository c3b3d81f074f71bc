//! Running → Complete state machine over one board set

use super::SessionConfig;
use super::summary::SessionSummary;
use crate::agent::{Agent, AgentReply, Observation};
use crate::core::{BOARD_COUNT, BoardSet, RoundResult, Word};
use crate::error::GameError;
use crate::wordlists::Vocabulary;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    /// Every board is won or lost, or the round budget is spent
    BoardsFinished,
    /// The agent gave up
    Forfeit,
    /// Too many rejected guesses in a single round
    InvalidGuessLimit,
}

/// Lifecycle of a session; `Complete` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Complete(CompletionReason),
}

/// One game of nine boards driven round by round
#[derive(Debug, Clone)]
pub struct Session<'v> {
    vocabulary: &'v Vocabulary,
    config: SessionConfig,
    boards: BoardSet,
    state: SessionState,
    rounds: Vec<RoundResult>,
    invalid_guesses: usize,
    /// Rejections since the last accepted guess
    round_rejections: usize,
}

impl<'v> Session<'v> {
    /// Start a session with nine distinct targets drawn from `vocabulary`
    ///
    /// # Errors
    /// Returns `GameError::InsufficientVocabulary` if the vocabulary has fewer
    /// than nine words.
    pub fn new<R: Rng + ?Sized>(
        vocabulary: &'v Vocabulary,
        config: SessionConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let targets: [Word; BOARD_COUNT] = vocabulary
            .draw_targets(BOARD_COUNT, rng)?
            .try_into()
            .expect("draw_targets returns exactly the requested count");

        Self::with_targets(vocabulary, config, targets)
    }

    /// Start a session with known targets, in board order
    ///
    /// # Errors
    /// Returns `GameError::DuplicateTarget` if a target repeats.
    pub fn with_targets(
        vocabulary: &'v Vocabulary,
        config: SessionConfig,
        targets: [Word; BOARD_COUNT],
    ) -> Result<Self, GameError> {
        let boards = BoardSet::from_targets(targets, config.max_guesses)?;

        info!(
            max_guesses = config.max_guesses,
            strict = config.require_vocabulary,
            vocabulary = vocabulary.len(),
            "session started"
        );

        Ok(Self {
            vocabulary,
            config,
            boards,
            state: SessionState::Running,
            rounds: Vec::with_capacity(config.max_guesses),
            invalid_guesses: 0,
            round_rejections: 0,
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Complete(_))
    }

    #[must_use]
    pub const fn completion(&self) -> Option<CompletionReason> {
        match self.state {
            SessionState::Running => None,
            SessionState::Complete(reason) => Some(reason),
        }
    }

    #[inline]
    #[must_use]
    pub const fn boards(&self) -> &BoardSet {
        &self.boards
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Accepted rounds in order
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    #[inline]
    #[must_use]
    pub const fn invalid_guesses(&self) -> usize {
        self.invalid_guesses
    }

    /// What the agent sees before the next round
    #[must_use]
    pub fn observation(&self, rejection: Option<String>) -> Observation<'_> {
        Observation {
            round: self.boards.rounds_played() + 1,
            max_guesses: self.config.max_guesses,
            boards: self.boards.boards(),
            rejection,
        }
    }

    /// Apply a raw guess as the next round
    ///
    /// Rejected guesses leave every board untouched and are counted in
    /// [`Session::invalid_guesses`]. Once a round has seen more rejections
    /// than `max_invalid_attempts` allows, the session completes with
    /// [`CompletionReason::InvalidGuessLimit`] and the rejection is still
    /// returned.
    ///
    /// # Errors
    /// - `GameError::SessionComplete` once the session is over
    /// - `GameError::InvalidGuessLength` for anything but five ASCII letters
    /// - `GameError::UnknownWord` in strict mode for words outside the vocabulary
    pub fn submit_guess(&mut self, raw: &str) -> Result<RoundResult, GameError> {
        if self.is_complete() {
            return Err(GameError::SessionComplete);
        }

        let word = match self.validate(raw) {
            Ok(word) => word,
            Err(err) => {
                self.reject();
                return Err(err);
            }
        };

        self.round_rejections = 0;
        let result = self.boards.apply_word(&word);
        self.rounds.push(result.clone());

        if self.boards.all_terminal() || self.boards.rounds_played() >= self.config.max_guesses {
            self.finish(CompletionReason::BoardsFinished);
        }

        Ok(result)
    }

    fn reject(&mut self) {
        self.invalid_guesses += 1;
        self.round_rejections += 1;

        if let Some(limit) = self.config.max_invalid_attempts
            && self.round_rejections > limit
        {
            warn!(
                round = self.boards.rounds_played() + 1,
                attempts = self.round_rejections,
                "too many rejected guesses"
            );
            self.finish(CompletionReason::InvalidGuessLimit);
        }
    }

    fn validate(&self, raw: &str) -> Result<Word, GameError> {
        let word = Word::new(raw)?;
        if self.config.require_vocabulary && !self.vocabulary.contains(&word) {
            return Err(GameError::UnknownWord(word.text().to_string()));
        }
        Ok(word)
    }

    /// End the session early; no-op once complete
    pub fn forfeit(&mut self) {
        if !self.is_complete() {
            warn!(round = self.boards.rounds_played() + 1, "session forfeited");
            self.finish(CompletionReason::Forfeit);
        }
    }

    fn finish(&mut self, reason: CompletionReason) {
        self.state = SessionState::Complete(reason);
        info!(
            ?reason,
            rounds = self.boards.rounds_played(),
            active = self.boards.active_boards().count(),
            "session complete"
        );
    }

    /// Ask the agent for one round's guess and apply it
    ///
    /// A rejected guess is handed back to the agent as the observation's
    /// rejection reason and the agent is asked again, until a guess is
    /// accepted or [`Session::submit_guess`] ends the session over the
    /// rejection cap. Returns `None` when the round ended the session without
    /// a guess being applied.
    ///
    /// # Errors
    /// Returns `GameError::SessionComplete` if called after completion, or
    /// `GameError::Agent` if the agent fails.
    pub fn play_round<A: Agent + ?Sized>(
        &mut self,
        agent: &mut A,
    ) -> Result<Option<RoundResult>, GameError> {
        if self.is_complete() {
            return Err(GameError::SessionComplete);
        }

        let mut rejection = None;
        loop {
            let reply = agent.next_guess(&self.observation(rejection.take()))?;
            let AgentReply::Guess(raw) = reply else {
                self.forfeit();
                return Ok(None);
            };

            match self.submit_guess(&raw) {
                Ok(result) => return Ok(Some(result)),
                Err(err) if err.is_rejected_guess() => {
                    warn!(agent = agent.name(), guess = %raw, %err, "guess rejected");
                    if self.is_complete() {
                        return Ok(None);
                    }
                    rejection = Some(err.to_string());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Play rounds until complete, calling `on_round` after each accepted guess
    ///
    /// # Errors
    /// Returns `GameError::Agent` if the agent fails; the session stays
    /// `Running` and can be resumed.
    pub fn run<A, F>(&mut self, mut agent: A, mut on_round: F) -> Result<SessionSummary, GameError>
    where
        A: Agent,
        F: FnMut(&RoundResult, &BoardSet),
    {
        loop {
            if let SessionState::Complete(reason) = self.state {
                return Ok(SessionSummary::from_boards(
                    &self.boards,
                    reason,
                    self.invalid_guesses,
                ));
            }

            if let Some(result) = self.play_round(&mut agent)? {
                on_round(&result, &self.boards);
            }
        }
    }

    /// Per-board results, available once the session is complete
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.completion()
            .map(|reason| SessionSummary::from_boards(&self.boards, reason, self.invalid_guesses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{HumanAgent, ScriptedAgent};
    use crate::agent::test_support::TARGETS;
    use crate::core::BoardStatus;
    use crate::error::AgentError;
    use crate::wordlists::loader::words_from_slice;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn vocabulary() -> Vocabulary {
        let mut words = TARGETS.to_vec();
        words.extend(["audio", "lolly"]);
        Vocabulary::new(words_from_slice(&words))
    }

    fn session(vocabulary: &Vocabulary, config: SessionConfig) -> Session<'_> {
        Session::with_targets(
            vocabulary,
            config,
            TARGETS.map(|t| Word::new(t).unwrap()),
        )
        .unwrap()
    }

    struct FailingAgent;

    impl Agent for FailingAgent {
        fn next_guess(&mut self, _: &Observation<'_>) -> Result<AgentReply, AgentError> {
            Err(AgentError::InputClosed)
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn new_draws_distinct_targets() {
        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(42);
        let session = Session::new(&vocabulary, SessionConfig::default(), &mut rng).unwrap();

        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.boards().boards().len(), BOARD_COUNT);
        assert!(session.summary().is_none());
    }

    #[test]
    fn new_fails_on_small_vocabulary() {
        let vocabulary = Vocabulary::new(words_from_slice(&["crane", "audio"]));
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            Session::new(&vocabulary, SessionConfig::default(), &mut rng),
            Err(GameError::InsufficientVocabulary {
                needed: BOARD_COUNT,
                available: 2
            })
        ));
    }

    #[test]
    fn solving_every_board_completes_early() {
        let vocabulary = vocabulary();
        let config = SessionConfig {
            max_guesses: 12,
            ..SessionConfig::default()
        };
        let mut session = session(&vocabulary, config);

        let mut seen = Vec::new();
        let summary = session
            .run(ScriptedAgent::new(TARGETS), |result, _| seen.push(result.round))
            .unwrap();

        assert_eq!(seen, (1..=BOARD_COUNT).collect::<Vec<_>>());
        assert_eq!(summary.completion, CompletionReason::BoardsFinished);
        assert_eq!(summary.boards_won, BOARD_COUNT);
        assert!(summary.is_perfect());
        // Board i was solved by guess i + 1
        for board in &summary.boards {
            assert_eq!(board.guesses_used, board.board_id + 1);
        }
    }

    #[test]
    fn guess_budget_ends_session() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default());

        let summary = session
            .run(ScriptedAgent::new(["audio"; 10]), |_, _| {})
            .unwrap();

        assert_eq!(summary.rounds_played, 6);
        assert_eq!(summary.completion, CompletionReason::BoardsFinished);
        assert!(summary.boards.iter().all(|b| b.status == BoardStatus::Lost));
    }

    #[test]
    fn invalid_guess_is_rejected_without_consuming_round() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default());
        let mut agent = ScriptedAgent::new(["abc", "crane"]);

        let result = session.play_round(&mut agent).unwrap().unwrap();

        assert_eq!(result.round, 1);
        assert_eq!(result.guess.text(), "crane");
        assert_eq!(session.invalid_guesses(), 1);
        assert_eq!(session.rounds().len(), 1);
    }

    #[test]
    fn too_many_rejections_end_the_session() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default());
        let mut agent = ScriptedAgent::new(["x", "xx", "xxx", "xxxx", "crane"]);

        assert!(session.play_round(&mut agent).unwrap().is_none());
        assert_eq!(
            session.state(),
            SessionState::Complete(CompletionReason::InvalidGuessLimit)
        );
        assert_eq!(session.invalid_guesses(), 4);
        assert_eq!(agent.remaining(), 1);
        assert_eq!(session.boards().rounds_played(), 0);
    }

    #[test]
    fn submit_guess_caps_rejections_per_round() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default());

        for bad in ["x", "xx", "xxx"] {
            assert!(session.submit_guess(bad).is_err());
            assert_eq!(session.state(), SessionState::Running);
        }
        assert!(matches!(
            session.submit_guess("xxxx"),
            Err(GameError::InvalidGuessLength(_))
        ));
        assert_eq!(
            session.state(),
            SessionState::Complete(CompletionReason::InvalidGuessLimit)
        );
        assert!(matches!(
            session.submit_guess("crane"),
            Err(GameError::SessionComplete)
        ));
    }

    #[test]
    fn accepted_guess_resets_rejection_count() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default());

        for _ in 0..3 {
            assert!(session.submit_guess("no").is_err());
        }
        session.submit_guess("audio").unwrap();
        for _ in 0..3 {
            assert!(session.submit_guess("no").is_err());
        }

        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.invalid_guesses(), 6);
    }

    #[test]
    fn human_typos_never_end_the_session() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default().for_human());
        let input = Cursor::new("crn\ncrnae1\nabcd\nxy\ncrane\nquit\n");
        let agent = HumanAgent::new(input, Vec::new());

        let summary = session.run(agent, |_, _| {}).unwrap();

        assert_eq!(summary.completion, CompletionReason::Forfeit);
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.invalid_guesses, 4);
        assert_eq!(summary.boards[0].status, BoardStatus::Won);
    }

    #[test]
    fn uncapped_session_keeps_asking() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default().for_human());
        let mut script = vec!["no"; 10];
        script.push("crane");

        let result = session.play_round(&mut ScriptedAgent::new(script)).unwrap();

        assert_eq!(result.map(|r| r.round), Some(1));
        assert_eq!(session.invalid_guesses(), 10);
    }

    #[test]
    fn forfeit_completes_and_blocks_further_guesses() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default());

        let summary = session
            .run(ScriptedAgent::new(["ghost"]), |_, _| {})
            .unwrap();

        assert_eq!(summary.completion, CompletionReason::Forfeit);
        assert_eq!(summary.boards_won, 1);
        assert_eq!(summary.boards_unsolved, BOARD_COUNT - 1);
        assert!(matches!(
            session.submit_guess("crane"),
            Err(GameError::SessionComplete)
        ));
        assert!(matches!(
            session.play_round(&mut ScriptedAgent::default()),
            Err(GameError::SessionComplete)
        ));
    }

    #[test]
    fn strict_mode_rejects_unknown_words() {
        let vocabulary = vocabulary();
        let config = SessionConfig {
            require_vocabulary: true,
            ..SessionConfig::default()
        };
        let mut session = session(&vocabulary, config);

        assert!(matches!(
            session.submit_guess("zzzzz"),
            Err(GameError::UnknownWord(word)) if word == "zzzzz"
        ));
        assert_eq!(session.boards().rounds_played(), 0);
        assert!(session.submit_guess("lolly").is_ok());
    }

    #[test]
    fn lenient_mode_accepts_any_five_letters() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default());
        assert!(session.submit_guess("zzzzz").is_ok());
    }

    #[test]
    fn agent_failure_propagates_and_keeps_running() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default());

        let err = session.run(FailingAgent, |_, _| {}).unwrap_err();

        assert!(matches!(err, GameError::Agent(AgentError::InputClosed)));
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn rejection_reason_reaches_agent() {
        struct Recorder(Vec<Option<String>>);

        impl Agent for Recorder {
            fn next_guess(&mut self, obs: &Observation<'_>) -> Result<AgentReply, AgentError> {
                self.0.push(obs.rejection.clone());
                Ok(AgentReply::Guess(if self.0.len() == 1 { "no" } else { "crane" }.into()))
            }

            fn name(&self) -> &'static str {
                "recorder"
            }
        }

        let vocabulary = vocabulary();
        let mut session = session(&vocabulary, SessionConfig::default());
        let mut agent = Recorder(Vec::new());
        session.play_round(&mut agent).unwrap();

        assert_eq!(agent.0.len(), 2);
        assert!(agent.0[0].is_none());
        assert!(agent.0[1].as_deref().is_some_and(|r| r.contains("invalid")));
    }

    proptest! {
        #[test]
        fn always_completes_within_budget(
            script in prop::collection::vec("[a-z]{0,7}", 0..40),
            max_guesses in 1usize..8,
        ) {
            let vocabulary = vocabulary();
            let config = SessionConfig { max_guesses, ..SessionConfig::default() };
            let mut session = session(&vocabulary, config);

            let summary = session.run(ScriptedAgent::new(script), |_, _| {}).unwrap();

            prop_assert!(session.is_complete());
            prop_assert!(summary.rounds_played <= max_guesses);
            for board in &summary.boards {
                prop_assert!(board.guesses_used <= max_guesses);
            }
        }
    }
}
