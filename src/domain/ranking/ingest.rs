//! DataIngestor - Loads raw tables, drops unusable rows and derives labels.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::LoadError;
use super::tables::{AlternativesTable, CriteriaTable, DisplayColumns, RawRow, RawTable};

/// Everything produced by a successful load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedData {
    pub alternatives: AlternativesTable,
    pub criteria: CriteriaTable,
    pub display_columns: DisplayColumns,
}

/// Data ingestion functions.
pub struct DataIngestor;

impl DataIngestor {
    /// Loads alternatives and criteria metadata.
    ///
    /// # Algorithm
    /// 1. Keep the first `max_alternatives + 1` raw rows (header included)
    /// 2. Retain rows with more than one cell where every cell is a finite number
    /// 3. Require at least one retained row and a uniform row width
    ///
    /// Rows failing step 2 are dropped silently; the header row is always
    /// dropped by it. Display labels come from the unfiltered header row.
    ///
    /// # Errors
    /// - `LoadError::EmptyCriteria` when the criteria table has no rows
    /// - `LoadError::NoValidRows` when filtering leaves nothing
    /// - `LoadError::RaggedRows` when retained rows differ in width
    pub fn load(
        raw_alternatives: &[RawRow],
        raw_criteria: &[RawRow],
        max_alternatives: usize,
    ) -> Result<LoadedData, LoadError> {
        if raw_criteria.is_empty() {
            return Err(LoadError::EmptyCriteria);
        }

        let display_columns = raw_alternatives
            .first()
            .map(|header| DisplayColumns::from_header(header))
            .unwrap_or_default();

        let window = raw_alternatives
            .iter()
            .take(max_alternatives.saturating_add(1))
            .enumerate();

        let mut retained: Vec<(usize, Vec<f64>)> = Vec::new();
        let mut scanned = 0;
        for (row_index, row) in window {
            scanned += 1;
            if let Some(values) = Self::parse_row(row) {
                retained.push((row_index, values));
            }
        }

        debug!(
            scanned,
            retained = retained.len(),
            "Filtered raw alternatives"
        );

        let expected = match retained.first() {
            Some((_, values)) => values.len(),
            None => return Err(LoadError::NoValidRows { scanned }),
        };

        if let Some((row, values)) = retained.iter().find(|(_, v)| v.len() != expected) {
            return Err(LoadError::RaggedRows {
                row: *row,
                expected,
                found: values.len(),
            });
        }

        Ok(LoadedData {
            alternatives: AlternativesTable::from_rows(
                retained.into_iter().map(|(_, values)| values).collect(),
            ),
            criteria: CriteriaTable::new(raw_criteria.to_vec()),
            display_columns,
        })
    }

    /// Parses a row when it has more than one cell and every cell is numeric.
    fn parse_row(row: &[String]) -> Option<Vec<f64>> {
        if row.len() <= 1 {
            return None;
        }
        row.iter().map(|cell| parse_cell(cell)).collect()
    }
}

/// Parses a cell as a finite number.
pub fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convenience for tests and adapters building tables from literals.
pub fn raw_table<R, C>(rows: R) -> RawTable
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<String>,
{
    rows.into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> RawTable {
        raw_table(vec![
            vec!["index", "name", "weight", "direction", "preference_function", "q", "p"],
            vec!["0", "cost", "1", "-1", "usual", "0", "0"],
            vec!["1", "quality", "1", "1", "usual", "0", "0"],
        ])
    }

    fn alternatives() -> RawTable {
        raw_table(vec![
            vec!["id", "unit_cost", "quality"],
            vec!["1", "10.5", "3"],
            vec!["2", "n/a", "4"],
            vec!["3", "8", "2"],
            vec!["4", "12", "5"],
        ])
    }

    #[test]
    fn load_drops_non_numeric_rows_without_error() {
        let loaded = DataIngestor::load(&alternatives(), &criteria(), 10).unwrap();

        assert_eq!(loaded.alternatives.len(), 3);
        assert_eq!(loaded.alternatives.rows()[0], vec![1.0, 10.5, 3.0]);
        assert_eq!(loaded.alternatives.rows()[1], vec![3.0, 8.0, 2.0]);
        assert_eq!(loaded.alternatives.criterion_count(), 2);
    }

    #[test]
    fn load_truncates_before_filtering() {
        // header + 2 rows: rows "1" and "2"; "2" is then dropped
        let loaded = DataIngestor::load(&alternatives(), &criteria(), 2).unwrap();

        assert_eq!(loaded.alternatives.len(), 1);
        assert_eq!(loaded.alternatives.rows()[0][0], 1.0);
    }

    #[test]
    fn load_derives_display_columns_from_header() {
        let loaded = DataIngestor::load(&alternatives(), &criteria(), 10).unwrap();

        assert_eq!(loaded.display_columns.identifier(), "Id");
        assert_eq!(loaded.display_columns.criteria(), &["Unit Cost", "Quality"]);
    }

    #[test]
    fn load_fails_when_every_row_is_non_numeric() {
        let raw = raw_table(vec![vec!["id", "cost"], vec!["a", "b"], vec!["c", "d"]]);

        let err = DataIngestor::load(&raw, &criteria(), 10).unwrap_err();
        assert_eq!(err, LoadError::NoValidRows { scanned: 3 });
    }

    #[test]
    fn load_fails_on_empty_input() {
        let err = DataIngestor::load(&[], &criteria(), 10).unwrap_err();
        assert_eq!(err, LoadError::NoValidRows { scanned: 0 });
    }

    #[test]
    fn load_drops_single_cell_rows() {
        let raw = raw_table(vec![vec!["id", "cost"], vec!["7"], vec!["1", "2"]]);

        let loaded = DataIngestor::load(&raw, &criteria(), 10).unwrap();
        assert_eq!(loaded.alternatives.rows(), &[vec![1.0, 2.0]]);
    }

    #[test]
    fn load_rejects_ragged_rows() {
        let raw = raw_table(vec![
            vec!["id", "a", "b"],
            vec!["1", "2", "3"],
            vec!["2", "4"],
        ]);

        let err = DataIngestor::load(&raw, &criteria(), 10).unwrap_err();
        assert_eq!(
            err,
            LoadError::RaggedRows {
                row: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn load_rejects_missing_criteria() {
        let err = DataIngestor::load(&alternatives(), &[], 10).unwrap_err();
        assert_eq!(err, LoadError::EmptyCriteria);
    }

    #[test]
    fn parse_cell_rejects_non_finite_values() {
        assert_eq!(parse_cell(" 4.25 "), Some(4.25));
        assert_eq!(parse_cell("1e3"), Some(1000.0));
        assert_eq!(parse_cell("NaN"), None);
        assert_eq!(parse_cell("inf"), None);
        assert_eq!(parse_cell(""), None);
    }
}
