//! PROMETHEE II engine - In-process implementation of the ScoringEngine port.
//!
//! Criteria parameters are read positionally from the criteria table:
//! `weight`, `direction`, `preference_function`, `q`, `p`.
//!
//! Pairwise flows are computed per criterion on a shared rayon pool, sized
//! once when the factory is built.

use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use super::preference::PreferenceFunction;
use crate::config::EngineConfig;
use crate::domain::ranking::{parse_cell, CriteriaParameters};
use crate::ports::{EngineError, EngineFactory, EngineInput, ScoringEngine};

/// Parameter rows the engine understands, in order.
const PARAMETER_LABELS: [&str; 5] = ["weight", "direction", "preference_function", "q", "p"];

/// Per-criterion settings parsed from the parameter rows.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CriterionSettings {
    direction: f64,
    function: PreferenceFunction,
    q: f64,
    p: f64,
}

/// Positive and negative unicriterion flows for every alternative.
#[derive(Debug, Clone, Default, PartialEq)]
struct UnicriterionFlow {
    plus: Vec<f64>,
    minus: Vec<f64>,
}

/// A constructed PROMETHEE II engine bound to one dataset.
pub struct PrometheeEngine {
    /// Criterion-major values with direction already applied.
    columns: Vec<Vec<f64>>,
    settings: Vec<CriterionSettings>,
    weights: Vec<f64>,
    flows: Option<Vec<UnicriterionFlow>>,
    scores: Option<Vec<f64>>,
    alternative_count: usize,
    pool: Arc<ThreadPool>,
}

impl PrometheeEngine {
    fn new(input: EngineInput, pool: Arc<ThreadPool>) -> Result<Self, EngineError> {
        input.check_shape()?;
        let (weights, settings) = parse_parameters(&input.parameters, input.criterion_count)?;

        let columns = if input.alternative_count == 0 {
            vec![Vec::new(); input.criterion_count]
        } else {
            input
                .matrix
                .chunks(input.alternative_count)
                .zip(&settings)
                .map(|(column, criterion)| column.iter().map(|v| v * criterion.direction).collect())
                .collect()
        };

        Ok(Self {
            columns,
            settings,
            weights,
            flows: None,
            scores: None,
            alternative_count: input.alternative_count,
            pool,
        })
    }

    /// Weighted sum of net unicriterion flows.
    fn aggregate(&mut self) -> Result<(), EngineError> {
        let flows = self.flows.as_ref().ok_or(EngineError::NotComputed)?;

        let total: f64 = self.weights.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(EngineError::Internal(format!(
                "weights must sum to a positive number, got {}",
                total
            )));
        }

        let mut scores = vec![0.0; self.alternative_count];
        for (flow, weight) in flows.iter().zip(&self.weights) {
            let share = weight / total;
            for (score, (plus, minus)) in scores.iter_mut().zip(flow.plus.iter().zip(&flow.minus)) {
                *score += share * (plus - minus);
            }
        }

        self.scores = Some(scores);
        Ok(())
    }
}

impl ScoringEngine for PrometheeEngine {
    fn recompute(&mut self) -> Result<(), EngineError> {
        let columns = &self.columns;
        let settings = &self.settings;
        let flows: Vec<UnicriterionFlow> = self.pool.install(|| {
            columns
                .par_iter()
                .zip(settings.par_iter())
                .map(|(column, criterion)| unicriterion_flow(column, criterion))
                .collect()
        });

        debug!(criteria = flows.len(), "Recomputed pairwise preference flows");
        self.flows = Some(flows);
        self.aggregate()
    }

    fn apply_weights(&mut self, weights: &[f64]) -> Result<(), EngineError> {
        if weights.len() != self.settings.len() {
            return Err(EngineError::WeightCount {
                expected: self.settings.len(),
                actual: weights.len(),
            });
        }
        if self.flows.is_none() {
            return Err(EngineError::NotComputed);
        }
        self.weights = weights.to_vec();
        self.aggregate()
    }

    fn scores(&self) -> Vec<f64> {
        self.scores
            .clone()
            .unwrap_or_else(|| vec![0.0; self.alternative_count])
    }
}

/// Flows of one criterion. Each alternative is compared with every other one;
/// degrees are averaged over the `n - 1` opponents.
fn unicriterion_flow(values: &[f64], criterion: &CriterionSettings) -> UnicriterionFlow {
    let n = values.len();
    if n < 2 {
        return UnicriterionFlow {
            plus: vec![0.0; n],
            minus: vec![0.0; n],
        };
    }
    let opponents = (n - 1) as f64;

    let (plus, minus): (Vec<f64>, Vec<f64>) = (0..n)
        .into_par_iter()
        .map(|a| {
            let mut plus = 0.0;
            let mut minus = 0.0;
            for (b, other) in values.iter().enumerate() {
                if a == b {
                    continue;
                }
                let diff = values[a] - other;
                plus += criterion.function.degree(diff, criterion.q, criterion.p);
                minus += criterion.function.degree(-diff, criterion.q, criterion.p);
            }
            (plus / opponents, minus / opponents)
        })
        .unzip();

    UnicriterionFlow { plus, minus }
}

fn parse_parameters(
    parameters: &CriteriaParameters,
    criterion_count: usize,
) -> Result<(Vec<f64>, Vec<CriterionSettings>), EngineError> {
    let rows = parameters.rows();
    if rows.len() < PARAMETER_LABELS.len() {
        return Err(EngineError::invalid_parameters(format!(
            "expected {} parameter rows ({}), got {}",
            PARAMETER_LABELS.len(),
            PARAMETER_LABELS.join(", "),
            rows.len()
        )));
    }

    for (row, name) in rows.iter().zip(PARAMETER_LABELS) {
        if row.values.len() != criterion_count {
            return Err(EngineError::invalid_parameters(format!(
                "'{}' has {} values for {} criteria",
                name,
                row.values.len(),
                criterion_count
            )));
        }
    }

    let numbers = |index: usize| -> Result<Vec<f64>, EngineError> {
        rows[index]
            .values
            .iter()
            .map(|cell| {
                parse_cell(cell).ok_or_else(|| {
                    EngineError::invalid_parameters(format!(
                        "'{}' value '{}' is not a number",
                        PARAMETER_LABELS[index], cell
                    ))
                })
            })
            .collect()
    };

    let weights = numbers(0)?;
    let directions = numbers(1)?;
    let functions = rows[2]
        .values
        .iter()
        .map(|name| name.parse::<PreferenceFunction>())
        .collect::<Result<Vec<_>, _>>()?;
    let qs = numbers(3)?;
    let ps = numbers(4)?;

    let settings = (0..criterion_count)
        .map(|i| CriterionSettings {
            direction: directions[i],
            function: functions[i],
            q: qs[i],
            p: ps[i],
        })
        .collect();

    Ok((weights, settings))
}

/// Builds PROMETHEE engines that share one worker pool.
#[derive(Clone)]
pub struct PrometheeEngineFactory {
    pool: Arc<ThreadPool>,
}

impl PrometheeEngineFactory {
    /// Creates a factory with a pool of `worker_threads` threads.
    pub fn new(worker_threads: usize) -> Result<Self, EngineError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_threads.max(1))
            .thread_name(|i| format!("promethee-{}", i))
            .build()
            .map_err(|e| EngineError::Internal(e.to_string()))?;

        debug!(worker_threads, "Built engine worker pool");
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Creates a factory sized from configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        Self::new(config.worker_threads())
    }

    pub fn worker_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl EngineFactory for PrometheeEngineFactory {
    fn construct(&self, input: EngineInput) -> Result<Box<dyn ScoringEngine>, EngineError> {
        Ok(Box::new(PrometheeEngine::new(input, Arc::clone(&self.pool))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::ParameterRow;

    fn params(rows: Vec<(&str, Vec<&str>)>) -> CriteriaParameters {
        CriteriaParameters::new(
            rows.into_iter()
                .map(|(label, values)| ParameterRow {
                    label: label.to_string(),
                    values: values.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        )
    }

    fn usual_params(directions: &[&str]) -> CriteriaParameters {
        let n = directions.len();
        params(vec![
            ("weight", vec!["1"; n]),
            ("direction", directions.to_vec()),
            ("preference_function", vec!["usual"; n]),
            ("q", vec!["0"; n]),
            ("p", vec!["0"; n]),
        ])
    }

    fn factory() -> PrometheeEngineFactory {
        PrometheeEngineFactory::new(2).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    fn two_criteria_engine() -> Box<dyn ScoringEngine> {
        factory()
            .construct(EngineInput {
                matrix: vec![0.8, 0.2, 0.05, 0.1, 0.6, 0.4],
                criterion_count: 2,
                alternative_count: 3,
                parameters: usual_params(&["-1", "1"]),
            })
            .unwrap()
    }

    #[test]
    fn unicriterion_flow_usual() {
        let criterion = CriterionSettings {
            direction: 1.0,
            function: PreferenceFunction::Usual,
            q: 0.0,
            p: 0.0,
        };
        let flow = unicriterion_flow(&[0.8, 0.2, 0.5], &criterion);
        assert_close(&flow.plus, &[1.0, 0.0, 0.5]);
        assert_close(&flow.minus, &[0.0, 1.0, 0.5]);
    }

    #[test]
    fn unicriterion_flow_of_identical_values_is_zero() {
        let criterion = CriterionSettings {
            direction: 1.0,
            function: PreferenceFunction::Usual,
            q: 0.0,
            p: 0.0,
        };
        let flow = unicriterion_flow(&[1.0, 1.0, 1.0], &criterion);
        assert_close(&flow.plus, &[0.0, 0.0, 0.0]);
        assert_close(&flow.minus, &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn unicriterion_flow_single_alternative() {
        let criterion = CriterionSettings {
            direction: 1.0,
            function: PreferenceFunction::Usual,
            q: 0.0,
            p: 0.0,
        };
        assert_eq!(unicriterion_flow(&[3.0], &criterion).plus, vec![0.0]);
    }

    #[test]
    fn recompute_produces_net_flows() {
        let mut engine = two_criteria_engine();
        engine.recompute().unwrap();
        engine.apply_weights(&[1.0, 1.0]).unwrap();

        assert_close(&engine.scores(), &[-1.0, 0.5, 0.5]);
    }

    #[test]
    fn reweighting_changes_scores() {
        let mut engine = two_criteria_engine();
        engine.recompute().unwrap();
        engine.apply_weights(&[0.75, 0.25]).unwrap();

        assert_close(&engine.scores(), &[-1.0, 0.25, 0.75]);
    }

    #[test]
    fn apply_weights_twice_is_idempotent() {
        let mut engine = two_criteria_engine();
        engine.recompute().unwrap();
        engine.apply_weights(&[2.0, 1.0]).unwrap();
        let first = engine.scores();
        engine.apply_weights(&[2.0, 1.0]).unwrap();

        assert_eq!(engine.scores(), first);
    }

    #[test]
    fn apply_weights_before_recompute_fails() {
        let mut engine = two_criteria_engine();
        assert_eq!(engine.apply_weights(&[1.0, 1.0]), Err(EngineError::NotComputed));
        assert_eq!(engine.scores(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn apply_weights_rejects_wrong_length() {
        let mut engine = two_criteria_engine();
        engine.recompute().unwrap();
        assert_eq!(
            engine.apply_weights(&[1.0]),
            Err(EngineError::WeightCount {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn construct_rejects_shape_mismatch() {
        let result = factory().construct(EngineInput {
            matrix: vec![0.0; 5],
            criterion_count: 2,
            alternative_count: 3,
            parameters: usual_params(&["1", "1"]),
        });
        assert!(matches!(result, Err(EngineError::InvalidShape { .. })));
    }

    #[test]
    fn construct_rejects_unknown_function() {
        let parameters = params(vec![
            ("weight", vec!["1"]),
            ("direction", vec!["1"]),
            ("preference_function", vec!["gaussian"]),
            ("q", vec!["0"]),
            ("p", vec!["0"]),
        ]);
        let result = factory().construct(EngineInput {
            matrix: vec![1.0, 2.0],
            criterion_count: 1,
            alternative_count: 2,
            parameters,
        });
        assert!(matches!(result, Err(EngineError::InvalidParameters(_))));
    }

    #[test]
    fn construct_rejects_missing_parameter_rows() {
        let parameters = params(vec![("weight", vec!["1"]), ("direction", vec!["1"])]);
        let result = factory().construct(EngineInput {
            matrix: vec![1.0, 2.0],
            criterion_count: 1,
            alternative_count: 2,
            parameters,
        });
        assert!(matches!(result, Err(EngineError::InvalidParameters(_))));
    }

    #[test]
    fn construct_rejects_non_numeric_threshold() {
        let parameters = params(vec![
            ("weight", vec!["1"]),
            ("direction", vec!["1"]),
            ("preference_function", vec!["usual"]),
            ("q", vec!["small"]),
            ("p", vec!["0"]),
        ]);
        let result = factory().construct(EngineInput {
            matrix: vec![1.0, 2.0],
            criterion_count: 1,
            alternative_count: 2,
            parameters,
        });
        assert!(matches!(result, Err(EngineError::InvalidParameters(_))));
    }

    #[test]
    fn factory_uses_requested_pool_size() {
        assert_eq!(PrometheeEngineFactory::new(3).unwrap().worker_threads(), 3);
    }
}
