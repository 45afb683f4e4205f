//! Error types for loading, shaping and weighting ranking data.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that abort a dataset load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("No valid alternatives remain after filtering {scanned} rows")]
    NoValidRows { scanned: usize },

    #[error("Alternative row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Criteria table is empty")]
    EmptyCriteria,
}

/// Errors raised when a table cannot be transposed or flattened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Row {row} has {found} columns, expected {expected}")]
    NonUniformRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Flattened matrix has {actual} values, expected {expected}")]
    FlattenMismatch { expected: usize, actual: usize },
}

/// Errors from a rejected weight edit. The last ranking stays in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("Criterion index {index} is out of range for {len} criteria")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Weight {value} is outside [{min}, {max}]")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Weight must be a finite number")]
    NotFinite,
}

impl From<LoadError> for DomainError {
    fn from(err: LoadError) -> Self {
        let code = match err {
            LoadError::RaggedRows { .. } => ErrorCode::RaggedRows,
            LoadError::NoValidRows { .. } | LoadError::EmptyCriteria => ErrorCode::NoValidRows,
        };
        DomainError::new(code, err.to_string())
    }
}

impl From<ShapeError> for DomainError {
    fn from(err: ShapeError) -> Self {
        DomainError::new(ErrorCode::ShapeMismatch, err.to_string())
    }
}

impl From<WeightError> for DomainError {
    fn from(err: WeightError) -> Self {
        let code = match err {
            WeightError::NotFinite => ErrorCode::ValidationFailed,
            _ => ErrorCode::OutOfRange,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_messages_name_the_row() {
        let err = LoadError::RaggedRows {
            row: 3,
            expected: 4,
            found: 2,
        };
        assert_eq!(err.to_string(), "Alternative row 3 has 2 cells, expected 4");
    }

    #[test]
    fn weight_error_maps_to_out_of_range_code() {
        let err: DomainError = WeightError::ValueOutOfRange {
            value: 6.0,
            min: 0.1,
            max: 5.0,
        }
        .into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.message, "Weight 6 is outside [0.1, 5]");
    }

    #[test]
    fn shape_error_maps_to_shape_mismatch() {
        let err: DomainError = ShapeError::FlattenMismatch {
            expected: 6,
            actual: 5,
        }
        .into();
        assert_eq!(err.code, ErrorCode::ShapeMismatch);
    }
}
