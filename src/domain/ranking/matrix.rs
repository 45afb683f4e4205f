//! MatrixBuilder - Column-major score matrix and engine parameters.

use serde::{Deserialize, Serialize};

use super::errors::ShapeError;
use super::tables::{AlternativesTable, CriteriaTable};

/// Column-major scores: one column per criterion, one value per alternative.
///
/// Every column has the same length, the alternative count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMatrix {
    columns: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    pub fn column(&self, criterion: usize) -> Option<&[f64]> {
        self.columns.get(criterion).map(Vec::as_slice)
    }

    pub fn criterion_count(&self) -> usize {
        self.columns.len()
    }

    pub fn alternative_count(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    /// Concatenates the columns, criterion by criterion.
    ///
    /// # Errors
    /// `ShapeError::FlattenMismatch` if the result is not criteria × alternatives long.
    pub fn flatten(&self) -> Result<Vec<f64>, ShapeError> {
        let flat: Vec<f64> = self.columns.iter().flatten().copied().collect();
        let expected = self.criterion_count() * self.alternative_count();
        if flat.len() != expected {
            return Err(ShapeError::FlattenMismatch {
                expected,
                actual: flat.len(),
            });
        }
        Ok(flat)
    }
}

/// One engine parameter (e.g. `q`) with one opaque value per criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRow {
    pub label: String,
    pub values: Vec<String>,
}

/// Per-criterion engine configuration, in criteria-table column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaParameters {
    rows: Vec<ParameterRow>,
}

impl CriteriaParameters {
    pub fn new(rows: Vec<ParameterRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ParameterRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Matrix shaping functions.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Drops the identifier column and transposes alternatives into criterion columns.
    pub fn transpose(table: &AlternativesTable) -> Result<ScoreMatrix, ShapeError> {
        let values: Vec<Vec<f64>> = table
            .rows()
            .iter()
            .map(|row| row.iter().skip(1).copied().collect())
            .collect();

        Ok(ScoreMatrix {
            columns: transpose(&values)?,
        })
    }

    /// Derives per-criterion parameters from the criteria table.
    ///
    /// The table is transposed; its first two rows (index and name columns)
    /// and the first cell of each remaining row (the header label) are
    /// dropped from the values.
    pub fn criteria_parameters(table: &CriteriaTable) -> Result<CriteriaParameters, ShapeError> {
        let transposed = transpose(table.rows())?;

        let rows = transposed
            .into_iter()
            .skip(2)
            .map(|mut row| {
                let label = if row.is_empty() {
                    String::new()
                } else {
                    row.remove(0)
                };
                ParameterRow { label, values: row }
            })
            .collect();

        Ok(CriteriaParameters::new(rows))
    }
}

/// Strict row/column swap.
///
/// # Errors
/// `ShapeError::NonUniformRows` if any row differs in width from row 0.
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> Result<Vec<Vec<T>>, ShapeError> {
    let width = match rows.first() {
        Some(first) => first.len(),
        None => return Ok(Vec::new()),
    };

    if let Some((row, found)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != width)
        .map(|(i, r)| (i, r.len()))
    {
        return Err(ShapeError::NonUniformRows {
            row,
            expected: width,
            found,
        });
    }

    Ok((0..width)
        .map(|col| rows.iter().map(|row| row[col].clone()).collect())
        .collect())
}
