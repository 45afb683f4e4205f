//! Weight control configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ranking::WeightBounds;

/// Bounds and step of the per-criterion weight controls
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_min")]
    pub min: f64,

    #[serde(default = "default_max")]
    pub max: f64,

    #[serde(default = "default_step")]
    pub step: f64,

    /// Initial weight of every criterion
    #[serde(default = "default_initial")]
    pub default: f64,
}

impl WeightsConfig {
    /// Builds validated weight bounds
    pub fn bounds(&self) -> Result<WeightBounds, ValidationError> {
        WeightBounds::new(self.min, self.max, self.step, self.default)
            .map_err(|e| ValidationError::InvalidWeightBounds(e.to_string()))
    }

    /// Validate weight configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bounds().map(|_| ())
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            step: default_step(),
            default: default_initial(),
        }
    }
}

fn default_min() -> f64 {
    0.1
}

fn default_max() -> f64 {
    5.0
}

fn default_step() -> f64 {
    0.1
}

fn default_initial() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_weight_bounds() {
        let bounds = WeightsConfig::default().bounds().unwrap();
        assert_eq!(bounds, WeightBounds::default());
    }

    #[test]
    fn test_inverted_bounds_are_invalid() {
        let config = WeightsConfig {
            min: 5.0,
            max: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWeightBounds(_))
        ));
    }
}
