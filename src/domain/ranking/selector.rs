//! RankSelector - Top-N selection over engine scores.

use serde::{Deserialize, Serialize};

/// How ties at the n-th rank are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Every alternative whose score equals one of the n largest values is
    /// selected, so the result can hold more than n entries.
    #[default]
    IncludeTies,
    /// Exactly `min(n, len)` entries; equal scores keep ascending index order.
    CapAtN,
}

/// Top-N selection functions.
pub struct RankSelector;

impl RankSelector {
    /// Returns alternative indices in descending score order.
    ///
    /// # Algorithm (`IncludeTies`)
    /// 1. Take the n largest score values (duplicates kept)
    /// 2. Select every index whose score is among those values
    /// 3. Sort the selection by score, descending; equal scores stay in index order
    ///
    /// # Edge Cases
    /// - `n = 0`: empty selection
    /// - `n >= len`: every index
    /// - `[5, 5, 5, 1]`, n = 2: `[0, 1, 2]` under `IncludeTies`, `[0, 1]` under `CapAtN`
    pub fn select_top(scores: &[f64], n: usize, policy: TiePolicy) -> Vec<usize> {
        if n == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<usize> = (0..scores.len()).collect();
        ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        match policy {
            TiePolicy::CapAtN => {
                ranked.truncate(n);
                ranked
            }
            TiePolicy::IncludeTies => {
                let cutoff: Vec<f64> = ranked.iter().take(n).map(|&i| scores[i]).collect();
                ranked.retain(|&i| cutoff.contains(&scores[i]));
                ranked
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_within_top_set_returns_n_entries() {
        let scores = [5.0, 3.0, 5.0, 1.0, 4.0];
        assert_eq!(
            RankSelector::select_top(&scores, 2, TiePolicy::IncludeTies),
            vec![0, 2]
        );
    }

    #[test]
    fn tie_across_cutoff_over_selects_when_including_ties() {
        let scores = [5.0, 5.0, 5.0, 1.0];
        assert_eq!(
            RankSelector::select_top(&scores, 2, TiePolicy::IncludeTies),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn tie_across_cutoff_capped_by_index_order() {
        let scores = [5.0, 5.0, 5.0, 1.0];
        assert_eq!(
            RankSelector::select_top(&scores, 2, TiePolicy::CapAtN),
            vec![0, 1]
        );
    }

    #[test]
    fn results_are_in_descending_score_order() {
        let scores = [0.1, 0.9, -0.4, 0.5, 0.3];
        assert_eq!(
            RankSelector::select_top(&scores, 3, TiePolicy::IncludeTies),
            vec![1, 3, 4]
        );
    }

    #[test]
    fn equal_scores_keep_index_order() {
        let scores = [1.0, 2.0, 1.0, 2.0];
        assert_eq!(
            RankSelector::select_top(&scores, 4, TiePolicy::CapAtN),
            vec![1, 3, 0, 2]
        );
    }

    #[test]
    fn n_larger_than_input_returns_everything() {
        let scores = [2.0, 1.0];
        assert_eq!(
            RankSelector::select_top(&scores, 10, TiePolicy::IncludeTies),
            vec![0, 1]
        );
        assert_eq!(
            RankSelector::select_top(&scores, 10, TiePolicy::CapAtN),
            vec![0, 1]
        );
    }

    #[test]
    fn zero_n_or_empty_scores_select_nothing() {
        assert!(RankSelector::select_top(&[1.0], 0, TiePolicy::IncludeTies).is_empty());
        assert!(RankSelector::select_top(&[], 3, TiePolicy::CapAtN).is_empty());
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        // total_cmp orders -0.0 below 0.0, but membership uses numeric equality
        let scores = [0.0, 1.0, -0.0];
        assert_eq!(
            RankSelector::select_top(&scores, 2, TiePolicy::IncludeTies),
            vec![1, 0, 2]
        );
    }
}
