//! Nine-Board Wordle - CLI
//!
//! Play nine Wordle boards at once in a TUI or on the command line, or let an
//! automatic agent play and score it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_nine::{
    agent::{Agent, AgentType, ScriptedAgent},
    commands::{append_report, run_evaluation, run_session, run_simple},
    logging::init_tracing,
    output::{print_evaluation, print_round, print_summary},
    session::{SessionConfig, make_rng},
    wordlists::{Vocabulary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_nine",
    about = "Nine concurrent Wordle boards, one shared guess per round",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Agent for automatic play: entropy (default), heuristic, random
    #[arg(short, long, global = true, default_value = "entropy")]
    agent: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target draws and agent randomness
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Guesses per board
    #[arg(short = 'm', long, global = true, default_value_t = SessionConfig::default().max_guesses)]
    max_guesses: usize,

    /// Reject guesses that are not in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Let an agent play one session and print every round
    Run {
        /// Comma-separated guesses to replay instead of an automatic agent
        #[arg(short, long, value_delimiter = ',')]
        guesses: Option<Vec<String>>,

        /// Append the session summary to this JSON Lines file
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Play many sessions with an agent and report aggregate scores
    Evaluate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "10")]
        rollouts: usize,

        /// Append every session summary to this JSON Lines file
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vocabulary> {
    match wordlist {
        "embedded" => Ok(Vocabulary::embedded()),
        path => load_from_file(path).with_context(|| format!("failed to load word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it gets no log output
    if !matches!(command, Commands::Play) {
        init_tracing(&cli.log_level);
    }

    let vocabulary = load_vocabulary(&cli.wordlist)?;
    let config = SessionConfig {
        max_guesses: cli.max_guesses,
        require_vocabulary: cli.strict,
        ..SessionConfig::default()
    };
    anyhow::ensure!(config.max_guesses > 0, "--max-guesses must be at least 1");

    match command {
        Commands::Play => run_play_command(&vocabulary, config, cli.seed),
        Commands::Simple => {
            let mut rng = make_rng(cli.seed);
            run_simple(&vocabulary, config, &mut rng)?;
            Ok(())
        }
        Commands::Run { guesses, report } => run_run_command(
            &vocabulary,
            config,
            &cli.agent,
            cli.seed,
            guesses,
            report.as_deref(),
        ),
        Commands::Evaluate { rollouts, report } => run_evaluate_command(
            &vocabulary,
            config,
            &cli.agent,
            cli.seed,
            rollouts,
            report.as_deref(),
        ),
    }
}

fn run_play_command(
    vocabulary: &Vocabulary,
    config: SessionConfig,
    seed: Option<u64>,
) -> Result<()> {
    use wordle_nine::interactive::{App, run_tui};

    let app = App::new(vocabulary, config, make_rng(seed))?;
    run_tui(app)
}

fn run_run_command(
    vocabulary: &Vocabulary,
    config: SessionConfig,
    agent_name: &str,
    seed: Option<u64>,
    guesses: Option<Vec<String>>,
    report: Option<&std::path::Path>,
) -> Result<()> {
    let mut rng = make_rng(seed);

    let agent = match guesses {
        Some(guesses) => {
            AgentType::Scripted(ScriptedAgent::new(guesses.iter().map(|g| g.trim())))
        }
        None => {
            let agent_rng = make_rng(seed.map(|s| s.wrapping_add(1)));
            AgentType::from_name(agent_name, vocabulary, agent_rng)
        }
    };
    let name = agent.name();
    let summary = run_session(vocabulary, config, &mut rng, agent, print_round)?;

    print_summary(&summary);

    if let Some(path) = report {
        append_report(path, name, seed, [&summary])
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("\nReport appended to {}", path.display());
    }

    Ok(())
}

fn run_evaluate_command(
    vocabulary: &Vocabulary,
    config: SessionConfig,
    agent_name: &str,
    seed: Option<u64>,
    rollouts: usize,
    report: Option<&std::path::Path>,
) -> Result<()> {
    println!(
        "Evaluating '{}' over {rollouts} sessions...",
        AgentType::resolve_name(agent_name)
    );

    let mut rng = make_rng(seed);
    let result = run_evaluation(vocabulary, config, agent_name, rollouts, &mut rng, true)?;
    print_evaluation(&result);

    if let Some(path) = report {
        let written = append_report(path, result.agent, seed, &result.summaries)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("\n{written} sessions appended to {}", path.display());
    }

    Ok(())
}
