//! Ranking snapshot - Result of one completed recompute cycle.

use serde::{Deserialize, Serialize};

use super::presenter::RankingTable;
use crate::domain::foundation::{CycleId, SessionId, Timestamp};

/// What the presentation layer receives after every completed cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSnapshot {
    pub cycle_id: CycleId,
    pub session_id: SessionId,
    /// Weights the engine aggregated with.
    pub weights: Vec<f64>,
    /// Selected alternative indices, best first.
    pub selected: Vec<usize>,
    /// Scores of the selected alternatives, same order as `selected`.
    pub selected_scores: Vec<f64>,
    pub table: RankingTable,
    pub computed_at: Timestamp,
}

impl RankingSnapshot {
    /// Index of the best-ranked alternative, if any was selected.
    pub fn leader(&self) -> Option<usize> {
        self.selected.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = RankingSnapshot {
            cycle_id: CycleId::new(),
            session_id: SessionId::new(),
            weights: vec![1.0, 2.0],
            selected: vec![2, 0],
            selected_scores: vec![0.5, 0.25],
            table: RankingTable::default(),
            computed_at: Timestamp::now(),
        };

        assert_eq!(snapshot.leader(), Some(2));
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"selected\":[2,0]"));
        assert!(json.contains("computed_at"));
    }
}
