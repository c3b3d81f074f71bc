//! Display functions for command results

use super::formatters::{create_progress_bar, summary_table};
use crate::commands::EvaluationResult;
use crate::core::{BOARD_COUNT, BoardOutcome, BoardSet, BoardStatus, RoundResult};
use crate::session::{CompletionReason, SessionSummary};
use colored::Colorize;

/// Print one round: the guess, then each board's feedback or frozen status
pub fn print_round(result: &RoundResult, boards: &BoardSet) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Round {}: {}",
        result.round,
        result.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for outcome in &result.outcomes {
        let label = format!("Board {}", outcome.board_id() + 1);
        match outcome {
            BoardOutcome::Scored { record, status, .. } => {
                let tag = match status {
                    BoardStatus::Won => "solved".green().bold(),
                    BoardStatus::Lost => "lost".red().bold(),
                    BoardStatus::Active => "".normal(),
                };
                println!("  {label}  {}  {tag}", record.feedback.to_emoji());
            }
            BoardOutcome::Frozen { status, .. } => {
                println!("  {}  {}", label.bright_black(), status_text(*status).bright_black());
            }
        }
    }

    println!(
        "\n  {} of {BOARD_COUNT} boards still active",
        boards.active_boards().count()
    );
}

fn status_text(status: BoardStatus) -> &'static str {
    match status {
        BoardStatus::Active => "active",
        BoardStatus::Won => "won",
        BoardStatus::Lost => "lost",
    }
}

/// Print the final state of a session
pub fn print_summary(summary: &SessionSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SESSION COMPLETE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}\n", summary_table(summary).trim_end());

    for board in &summary.boards {
        let target = board.target.text().to_uppercase();
        let line = match board.status {
            BoardStatus::Won => format!(
                "✅ Board {}: {target} in {}",
                board.board_id + 1,
                board.guesses_used
            )
            .green(),
            BoardStatus::Lost => format!("❌ Board {}: {target}", board.board_id + 1).red(),
            BoardStatus::Active => {
                format!("⏸  Board {}: {target}", board.board_id + 1).bright_black()
            }
        };
        println!("  {line}");
    }

    let reason = match summary.completion {
        CompletionReason::BoardsFinished => "all boards finished",
        CompletionReason::Forfeit => "forfeited",
        CompletionReason::InvalidGuessLimit => "too many rejected guesses",
    };

    println!("\n📊 {}", "Result:".bright_cyan().bold());
    println!("   Rounds played:   {} ({reason})", summary.rounds_played);
    println!(
        "   Boards won:      {}",
        format!("{}/{}", summary.boards_won, summary.boards.len())
            .bright_yellow()
            .bold()
    );
    println!(
        "   Tiles:           {} green, {} yellow",
        summary.greens.to_string().green(),
        summary.yellows.to_string().yellow()
    );
    if summary.invalid_guesses > 0 {
        println!("   Rejected:        {}", summary.invalid_guesses);
    }
    println!(
        "   Score:           {}",
        summary.score.to_string().bright_yellow().bold()
    );
}

/// Print aggregate results of many sessions
pub fn print_evaluation(result: &EvaluationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Agent:            {}", result.agent);
    println!("   Sessions:         {}", result.sessions);
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score).bright_yellow().bold()
    );
    println!(
        "   Average wins:     {}",
        format!("{:.2}/{BOARD_COUNT}", result.average_wins).bright_yellow()
    );
    println!(
        "   Best / worst:     {} / {}",
        result.best_score.to_string().green(),
        result.worst_score.to_string().yellow()
    );
    println!("   Perfect sessions: {}", result.perfect_sessions);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Boards won per session:".bright_cyan().bold());
    for (wins, &count) in result.wins_distribution.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let pct = (count as f64 / result.sessions as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {wins}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
