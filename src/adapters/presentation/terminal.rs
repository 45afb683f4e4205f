//! Terminal publisher - Renders summaries and rankings as aligned text.

use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ranking::{LoadSummary, RankingSnapshot};
use crate::ports::RankingPublisher;

/// Spaces between columns.
const COLUMN_GAP: usize = 2;

/// Writes plain-text tables to any `Write` sink (stdout in the binary,
/// a byte buffer in tests).
pub struct TerminalPublisher<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalPublisher<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the sink, e.g. to inspect a buffer.
    pub fn into_inner(self) -> Result<W, DomainError> {
        self.out
            .into_inner()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Terminal lock poisoned"))
    }

    fn write(&self, text: &str) -> Result<(), DomainError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Terminal lock poisoned"))?;
        out.write_all(text.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| DomainError::new(ErrorCode::PublishFailed, e.to_string()))
    }
}

/// Renders rows with every column padded to its widest cell.
pub fn render_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut text = String::new();
    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(&" ".repeat(COLUMN_GAP));
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

#[async_trait]
impl<W: Write + Send> RankingPublisher for TerminalPublisher<W> {
    async fn publish_summary(&self, summary: &LoadSummary) -> Result<(), DomainError> {
        let mut text = format!("{}\n\n", summary.text);
        text.push_str(&render_table(&summary.criteria_overview));
        text.push('\n');
        self.write(&text)
    }

    async fn publish_ranking(&self, snapshot: &RankingSnapshot) -> Result<(), DomainError> {
        let weights = snapshot
            .weights
            .iter()
            .map(|w| format!("{:.1}", w))
            .collect::<Vec<_>>()
            .join(" ");
        let mut text = format!("Weights: {}\n", weights);
        text.push_str(&render_table(&snapshot.table.to_rows()));
        text.push('\n');
        self.write(&text)
    }

    async fn publish_alert(&self, message: &str) -> Result<(), DomainError> {
        self.write(&format!("! {}\n", message))
    }
}
