//! Formatting utilities for terminal output

use crate::core::{GuessRecord, Tile};
use crate::session::SessionSummary;

/// Render one scored guess in indicator notation
///
/// Green letters read `=T=`, yellow `-S-` and grey `_r_`.
#[must_use]
pub fn format_indicators(record: &GuessRecord) -> String {
    let mut out = String::with_capacity(15);
    for (&letter, &tile) in record.guess.chars().iter().zip(record.feedback.tiles()) {
        let (mark, letter) = match tile {
            Tile::Correct => ('=', letter.to_ascii_uppercase()),
            Tile::Present => ('-', letter.to_ascii_uppercase()),
            Tile::Absent => ('_', letter),
        };
        out.push(mark);
        out.push(char::from(letter));
        out.push(mark);
    }
    out
}

/// Comma-separated board state: a `Game1..GameN` header, then one row per
/// guess index with one cell per board
///
/// Boards that finished early leave their later cells empty.
#[must_use]
pub fn history_table(histories: &[&[GuessRecord]]) -> String {
    let header: Vec<String> = (1..=histories.len()).map(|i| format!("Game{i}")).collect();
    let depth = histories.iter().map(|h| h.len()).max().unwrap_or(0);

    let mut out = header.join(",");
    out.push('\n');
    for row in 0..depth {
        let cells: Vec<String> = histories
            .iter()
            .map(|history| history.get(row).map(format_indicators).unwrap_or_default())
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// [`history_table`] for a finished session
#[must_use]
pub fn summary_table(summary: &SessionSummary) -> String {
    let histories: Vec<&[GuessRecord]> = summary
        .boards
        .iter()
        .map(|board| board.guesses.as_slice())
        .collect();
    history_table(&histories)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
