//! JSON Lines session reports

use crate::session::SessionSummary;
use serde::Serialize;
use std::io::{self, Write};

/// One report line
#[derive(Debug, Serialize)]
struct ReportLine<'a> {
    agent: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(flatten)]
    summary: &'a SessionSummary,
}

/// Appends one JSON object per finished session to a writer
pub struct JsonlReporter<W> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonlReporter<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write a summary as a single line and flush
    ///
    /// # Errors
    /// Returns an I/O error if serialisation or the write fails.
    pub fn record(
        &mut self,
        agent: &str,
        seed: Option<u64>,
        summary: &SessionSummary,
    ) -> io::Result<()> {
        let line = ReportLine {
            agent,
            seed,
            summary,
        };
        serde_json::to_writer(&mut self.writer, &line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }

    /// Lines written so far
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
