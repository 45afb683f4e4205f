//! Weights - Per-criterion weight state and its edit rules.

use serde::{Deserialize, Serialize};

use super::errors::WeightError;
use crate::domain::foundation::ValidationError;

/// Decimal places kept after snapping, to keep step arithmetic free of float noise.
const SNAP_PRECISION: f64 = 1e9;

/// Allowed weight range and granularity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBounds {
    min: f64,
    max: f64,
    step: f64,
    default: f64,
}

impl WeightBounds {
    /// Creates bounds, checking `0 < min < max`, `step > 0` and `min <= default <= max`.
    pub fn new(min: f64, max: f64, step: f64, default: f64) -> Result<Self, ValidationError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite() && default.is_finite()) {
            return Err(ValidationError::invalid_format("weights", "bounds must be finite"));
        }
        if min <= 0.0 {
            return Err(ValidationError::invalid_format("weights.min", "must be positive"));
        }
        if max <= min {
            return Err(ValidationError::invalid_format(
                "weights.max",
                "must be greater than weights.min",
            ));
        }
        if step <= 0.0 {
            return Err(ValidationError::invalid_format("weights.step", "must be positive"));
        }
        if default < min || default > max {
            return Err(ValidationError::out_of_range("weights.default", min, max, default));
        }
        Ok(Self {
            min,
            max,
            step,
            default,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn default_weight(&self) -> f64 {
        self.default
    }

    /// Rounds onto the step grid anchored at `min`, then clamps to `[min, max]`.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        let snapped = (snapped * SNAP_PRECISION).round() / SNAP_PRECISION;
        snapped.clamp(self.min, self.max)
    }

    fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for WeightBounds {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 5.0,
            step: 0.1,
            default: 1.0,
        }
    }
}

/// One-step adjustment from non-pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NudgeDirection {
    Up,
    Down,
}

impl NudgeDirection {
    /// Maps a vertical wheel delta: scrolling up (negative delta) raises the weight.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            NudgeDirection::Up
        } else {
            NudgeDirection::Down
        }
    }
}

/// Ordered weights, one per criterion. Length never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    values: Vec<f64>,
    bounds: WeightBounds,
}

impl WeightVector {
    /// Creates a vector with every criterion at the default weight.
    pub fn uniform(criterion_count: usize, bounds: WeightBounds) -> Self {
        Self {
            values: vec![bounds.default_weight(); criterion_count],
            bounds,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bounds(&self) -> &WeightBounds {
        &self.bounds
    }

    /// Sets one weight. Values outside the bounds are rejected, accepted
    /// values are snapped to the step grid. Returns the stored value.
    pub fn set(&mut self, index: usize, value: f64) -> Result<f64, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NotFinite);
        }
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(WeightError::IndexOutOfRange { index, len })?;

        if !self.bounds.contains(value) {
            return Err(WeightError::ValueOutOfRange {
                value,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }

        *slot = self.bounds.snap(value);
        Ok(*slot)
    }

    /// Moves one weight a single step, clamped to the bounds. Returns the stored value.
    pub fn nudge(&mut self, index: usize, direction: NudgeDirection) -> Result<f64, WeightError> {
        let len = self.values.len();
        let current = self
            .get(index)
            .ok_or(WeightError::IndexOutOfRange { index, len })?;

        let target = match direction {
            NudgeDirection::Up => current + self.bounds.step,
            NudgeDirection::Down => current - self.bounds.step,
        };
        let target = target.clamp(self.bounds.min, self.bounds.max);
        self.set(index, target)
    }
}
