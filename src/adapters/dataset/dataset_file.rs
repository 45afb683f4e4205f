//! Dataset file adapter - Reads raw alternatives and criteria tables.
//!
//! Accepted layout (JSON or YAML):
//!
//! ```text
//! {
//!   "alternatives": [["id", "price", ...], [1, 120.5, ...], ...],
//!   "criteria":     [["index", "name", "weight", "direction", "preference_function", "q", "p"], ...]
//! }
//! ```
//!
//! Cells may be strings or numbers; numbers become their shortest decimal text.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::domain::ranking::{RawRow, RawTable};

/// Errors reading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read dataset file: {0}")]
    Io(String),

    #[error("Unsupported dataset format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Failed to parse dataset: {0}")]
    Parse(String),
}

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(DatasetFormat::Json),
            "yaml" | "yml" => Ok(DatasetFormat::Yaml),
            other => Err(DatasetError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum RawCell {
    Number(f64),
    Text(String),
}

impl RawCell {
    fn into_text(self) -> String {
        match self {
            RawCell::Number(n) => n.to_string(),
            RawCell::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DatasetDocument {
    alternatives: Vec<Vec<RawCell>>,
    criteria: Vec<Vec<RawCell>>,
}

/// The two raw tables of a dataset, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetFile {
    pub alternatives: RawTable,
    pub criteria: RawTable,
}

impl DatasetFile {
    /// Reads and parses a dataset file.
    pub async fn read(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let format = DatasetFormat::from_path(path)?;

        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DatasetError::Io(format!("{}: {}", path.display(), e)))?;

        Self::parse(&content, format)
    }

    /// Parses dataset text in the given format.
    pub fn parse(content: &str, format: DatasetFormat) -> Result<Self, DatasetError> {
        let document: DatasetDocument = match format {
            DatasetFormat::Json => {
                serde_json::from_str(content).map_err(|e| DatasetError::Parse(e.to_string()))?
            }
            DatasetFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| DatasetError::Parse(e.to_string()))?
            }
        };

        Ok(Self {
            alternatives: to_table(document.alternatives),
            criteria: to_table(document.criteria),
        })
    }
}

fn to_table(rows: Vec<Vec<RawCell>>) -> RawTable {
    rows.into_iter()
        .map(|row| row.into_iter().map(RawCell::into_text).collect::<RawRow>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const JSON: &str = r#"{
        "alternatives": [["id", "price"], [1, 2.5], ["2", "n/a"]],
        "criteria": [["index", "name", "weight", "direction", "preference_function", "q", "p"],
                     [0, "price", 1, -1, "usual", 0, 0]]
    }"#;

    const YAML: &str = "
alternatives:
  - [id, price]
  - [1, 2.5]
criteria:
  - [index, name, weight, direction, preference_function, q, p]
  - [0, price, 1, -1, usual, 0, 0]
";

    #[test]
    fn parses_mixed_cells_from_json() {
        let dataset = DatasetFile::parse(JSON, DatasetFormat::Json).unwrap();
        assert_eq!(dataset.alternatives[1], vec!["1".to_string(), "2.5".to_string()]);
        assert_eq!(dataset.alternatives[2][1], "n/a");
        assert_eq!(dataset.criteria[1][3], "-1");
    }

    #[test]
    fn parses_yaml() {
        let dataset = DatasetFile::parse(YAML, DatasetFormat::Yaml).unwrap();
        assert_eq!(dataset.alternatives.len(), 2);
        assert_eq!(dataset.criteria[1][4], "usual");
    }

    #[test]
    fn missing_table_is_a_parse_error() {
        let result = DatasetFile::parse(r#"{"alternatives": []}"#, DatasetFormat::Json);
        assert!(matches!(result, Err(DatasetError::Parse(_))));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("data.YML")).unwrap(),
            DatasetFormat::Yaml
        );
        assert!(matches!(
            DatasetFormat::from_path(Path::new("data.csv")),
            Err(DatasetError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn reads_file_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, JSON).unwrap();

        let dataset = DatasetFile::read(&path).await.unwrap();
        assert_eq!(dataset.criteria.len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = DatasetFile::read(dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(DatasetError::NotFound(_))));
    }
}
