//! ResultPresenter - Display-ready tables and summary text.

use serde::{Deserialize, Serialize};

use super::tables::{AlternativesTable, CriteriaTable, DisplayColumns, RawTable};

/// Header label of the appended score column.
pub const SCORE_COLUMN: &str = "Score";

/// Maximum fraction digits shown for criterion values and scores.
const MAX_FRACTION_DIGITS: usize = 2;

/// A ranked table: header row plus one formatted row per selected alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RankingTable {
    /// Number of ranked rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header followed by the ranked rows, ready for a renderer.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().cloned())
            .collect()
    }
}

/// Shown once per load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub record_count: usize,
    pub criterion_count: usize,
    /// Ordered alternative pairs compared on every criterion.
    pub comparison_count: usize,
    /// The criteria table without its index column.
    pub criteria_overview: RawTable,
    pub text: String,
}

/// Pure formatting functions; inputs are never mutated.
pub struct ResultPresenter;

impl ResultPresenter {
    /// Formats selected alternatives with their scores.
    ///
    /// Row 0 is the identifier label, the criterion labels and `Score`.
    /// Identifiers render as integers, everything else with at most two
    /// fraction digits. Indices without a row or score are skipped.
    pub fn present(
        selected: &[usize],
        alternatives: &AlternativesTable,
        scores: &[f64],
        columns: &DisplayColumns,
    ) -> RankingTable {
        let mut header = columns.all();
        header.push(SCORE_COLUMN.to_string());

        let rows = selected
            .iter()
            .filter_map(|&index| {
                let row = alternatives.row(index)?;
                let score = scores.get(index)?;
                let (identifier, values) = row.split_first()?;

                let mut cells = Vec::with_capacity(row.len() + 1);
                cells.push(format_identifier(*identifier));
                cells.extend(values.iter().map(|v| format_number(*v)));
                cells.push(format_number(*score));
                Some(cells)
            })
            .collect();

        RankingTable { header, rows }
    }

    /// Builds the load summary: record count and pairwise comparison count.
    pub fn summarize(alternatives: &AlternativesTable, criteria: &CriteriaTable) -> LoadSummary {
        let record_count = alternatives.len();
        let criterion_count = alternatives.criterion_count();
        let comparison_count = criterion_count * record_count * record_count;

        let text = format!(
            "{} records loaded. Computing {} pairwise comparisons.",
            group_thousands(&record_count.to_string()),
            group_thousands(&comparison_count.to_string()),
        );

        LoadSummary {
            record_count,
            criterion_count,
            comparison_count,
            criteria_overview: criteria.without_index_column(),
            text,
        }
    }
}

/// Renders an identifier as an integer, truncating toward zero.
pub fn format_identifier(value: f64) -> String {
    (value.trunc() as i64).to_string()
}

/// Renders a number with at most two fraction digits and `,` thousands grouping.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Halves round away from zero.
    let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let rounded = if rounded.is_finite() { rounded } else { value.abs() };
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, rounded);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
