//! Session configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ranking::TiePolicy;

/// Ranking session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Data rows kept from the alternatives table (header excluded)
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// Ranked rows shown per cycle
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// How ties at the cutoff are handled
    #[serde(default)]
    pub tie_policy: TiePolicy,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_alternatives == 0 {
            return Err(ValidationError::InvalidMaxAlternatives);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_alternatives: default_max_alternatives(),
            top_n: default_top_n(),
            tie_policy: TiePolicy::default(),
        }
    }
}

fn default_max_alternatives() -> usize {
    10
}

fn default_top_n() -> usize {
    10
}
