//! Line-based human agent

use super::{Agent, AgentReply, Observation};
use crate::error::AgentError;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Reads one guess per line from `input`, prompting on `output`
///
/// `quit`, `q` and `exit` forfeit the session.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, observation: &Observation<'_>) -> Result<String, AgentError> {
        if let Some(reason) = &observation.rejection {
            writeln!(self.output, "{} {reason}", "❌".red())?;
        }
        write!(
            self.output,
            "Guess {}/{}: ",
            observation.round, observation.max_guesses
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AgentError::InputClosed);
        }

        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn next_guess(&mut self, observation: &Observation<'_>) -> Result<AgentReply, AgentError> {
        let line = self.prompt(observation)?;

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Ok(AgentReply::Forfeit),
            _ => Ok(AgentReply::Guess(line)),
        }
    }

    fn name(&self) -> &'static str {
        "human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::test_support::board_set;
    use crate::core::DEFAULT_MAX_GUESSES;
    use std::io::Cursor;

    fn observation(set: &crate::core::BoardSet, rejection: Option<String>) -> Observation<'_> {
        Observation {
            round: 1,
            max_guesses: DEFAULT_MAX_GUESSES,
            boards: set.boards(),
            rejection,
        }
    }

    #[test]
    fn reads_guess_and_prompts() {
        let set = board_set();
        let mut output = Vec::new();
        let mut agent = HumanAgent::new(Cursor::new("  Crane \n"), &mut output);

        let reply = agent.next_guess(&observation(&set, None)).unwrap();
        assert_eq!(reply, AgentReply::Guess("Crane".into()));

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Guess 1/6"));
    }

    #[test]
    fn quit_forfeits() {
        let set = board_set();
        let mut agent = HumanAgent::new(Cursor::new("QUIT\n"), Vec::new());
        assert_eq!(
            agent.next_guess(&observation(&set, None)).unwrap(),
            AgentReply::Forfeit
        );
    }

    #[test]
    fn shows_rejection_reason() {
        let set = board_set();
        let mut output = Vec::new();
        let mut agent = HumanAgent::new(Cursor::new("crane\n"), &mut output);

        agent
            .next_guess(&observation(&set, Some("too short".into())))
            .unwrap();

        assert!(String::from_utf8(output).unwrap().contains("too short"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let set = board_set();
        let mut agent = HumanAgent::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            agent.next_guess(&observation(&set, None)),
            Err(AgentError::InputClosed)
        ));
    }
}
