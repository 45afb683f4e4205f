//! Tables - Immutable data loaded once per session.

use serde::{Deserialize, Serialize};

/// One raw row of string cells, as handed over by the data source.
pub type RawRow = Vec<String>;

/// An ordered sequence of raw rows. Row 0 is conventionally a header.
pub type RawTable = Vec<RawRow>;

/// Validated alternatives: every row is `[identifier, value_1, .., value_k]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativesTable {
    rows: Vec<Vec<f64>>,
}

impl AlternativesTable {
    /// Wraps rows that have already been filtered and checked for uniform width.
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// All retained rows, identifier column included.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns one row, identifier column included.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of retained alternatives.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no alternative was retained.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of criteria, i.e. row width minus the identifier column.
    pub fn criterion_count(&self) -> usize {
        self.rows.first().map(|r| r.len().saturating_sub(1)).unwrap_or(0)
    }
}

/// Criteria metadata. Row 0 is the header, each further row describes one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaTable {
    rows: RawTable,
}

impl CriteriaTable {
    pub fn new(rows: RawTable) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// The header row, if the table has one.
    pub fn header(&self) -> Option<&RawRow> {
        self.rows.first()
    }

    /// Number of described criteria (header excluded).
    pub fn criterion_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// The table without its leading index column, for display.
    pub fn without_index_column(&self) -> RawTable {
        self.rows
            .iter()
            .map(|row| row.iter().skip(1).cloned().collect())
            .collect()
    }
}

/// Human-readable column labels derived from the alternatives header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayColumns {
    identifier: String,
    criteria: Vec<String>,
}

impl DisplayColumns {
    /// Builds labels from a raw header row; cell 0 labels the identifier column.
    pub fn from_header(header: &[String]) -> Self {
        let mut labels = header.iter().map(|cell| normalize_label(cell));
        let identifier = labels.next().unwrap_or_default();
        Self {
            identifier,
            criteria: labels.collect(),
        }
    }

    /// Label of the identifier column.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Criterion labels, identifier column skipped.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Label for one criterion, if present.
    pub fn criterion(&self, index: usize) -> Option<&str> {
        self.criteria.get(index).map(String::as_str)
    }

    /// Identifier label followed by every criterion label.
    pub fn all(&self) -> Vec<String> {
        std::iter::once(self.identifier.clone())
            .chain(self.criteria.iter().cloned())
            .collect()
    }
}

/// Trims, turns underscores into spaces and upper-cases the first letter of each word.
pub fn normalize_label(raw: &str) -> String {
    raw.trim()
        .replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
