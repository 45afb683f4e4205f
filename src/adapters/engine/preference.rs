//! Preference functions mapping a score difference to a preference degree in `[0, 1]`.

use std::str::FromStr;

use crate::ports::EngineError;

/// Relative tolerance for float comparisons.
const REL_TOL: f64 = 1e-7;

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= REL_TOL * a.abs().max(b.abs())
}

fn gt(a: f64, b: f64) -> bool {
    !is_close(a, b) && a > b
}

fn lt(a: f64, b: f64) -> bool {
    !is_close(a, b) && a < b
}

fn le(a: f64, b: f64) -> bool {
    is_close(a, b) || a < b
}

/// Generalised criteria of the PROMETHEE family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceFunction {
    /// Any positive difference is a full preference.
    Usual,
    /// Full preference once the difference exceeds `q`.
    UShape,
    /// Linear up to `p`, full beyond.
    VShape,
    /// Zero up to `q`, linear between `q` and `p`, full beyond.
    VShape2,
    /// Half preference between `q` and `p`, full beyond.
    Level,
}

impl PreferenceFunction {
    /// Preference degree for difference `d` with indifference `q` and preference `p`.
    pub fn degree(&self, d: f64, q: f64, p: f64) -> f64 {
        match self {
            PreferenceFunction::Usual => {
                if gt(d, 0.0) {
                    1.0
                } else {
                    0.0
                }
            }
            PreferenceFunction::UShape => {
                if gt(d, q) {
                    1.0
                } else {
                    0.0
                }
            }
            PreferenceFunction::VShape => {
                if gt(d, p) {
                    1.0
                } else if gt(d, 0.0) && le(d, p) {
                    d / p
                } else {
                    0.0
                }
            }
            PreferenceFunction::VShape2 => {
                if gt(d, p) {
                    1.0
                } else if lt(q, d) && le(d, p) {
                    (d - q) / (p - q)
                } else {
                    0.0
                }
            }
            PreferenceFunction::Level => {
                if gt(d, p) {
                    1.0
                } else if lt(q, d) && le(d, p) {
                    0.5
                } else {
                    0.0
                }
            }
        }
    }
}

impl FromStr for PreferenceFunction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usual" => Ok(PreferenceFunction::Usual),
            "ushape" => Ok(PreferenceFunction::UShape),
            "vshape" => Ok(PreferenceFunction::VShape),
            "vshape2" | "vshape_2" | "linear" => Ok(PreferenceFunction::VShape2),
            "level" => Ok(PreferenceFunction::Level),
            other => Err(EngineError::invalid_parameters(format!(
                "unknown preference function '{}'",
                other
            ))),
        }
    }
}
