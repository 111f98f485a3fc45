//! Site Scoring & Ranking Engine.

use serde::{Deserialize, Serialize};

use super::{normalize_column, SiteTable, WeightVector};

/// Reference cap on ranked records handed to presentation.
pub const DEFAULT_TOP_N: usize = 500;

/// One ranked site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedSite {
    pub lat: f64,
    pub lon: f64,
    /// 1-based; 1 is the most favorable site.
    pub rank: usize,
    pub final_score: f64,
}

/// Scores and ranks site tables.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores every site and ranks the full table.
    ///
    /// Each column is normalized independently, weights are re-normalized
    /// to sum to 1, and `final_score` is the weighted sum of normalized
    /// values. Sites are sorted ascending by score; ties keep input order.
    /// Columns without a weight contribute nothing.
    pub fn rank(weights: &WeightVector, table: &SiteTable) -> Vec<RankedSite> {
        let weights = weights.renormalized();
        let mut scores = vec![0.0; table.len()];

        for (index, column) in table.columns().iter().enumerate() {
            let weight = weights.get(column);
            if weight == 0.0 {
                continue;
            }
            let normalized = normalize_column(&table.column_values(index));
            for (score, value) in scores.iter_mut().zip(normalized) {
                *score += weight * value;
            }
        }

        let mut order: Vec<usize> = (0..table.len()).collect();
        // sort_by is stable
        order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

        order
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let site = &table.sites()[index];
                RankedSite {
                    lat: site.position.lat,
                    lon: site.position.lon,
                    rank: position + 1,
                    final_score: scores[index],
                }
            })
            .collect()
    }

    /// Ranks the full table, then keeps the best `top_n` records.
    pub fn rank_top(weights: &WeightVector, table: &SiteTable, top_n: usize) -> Vec<RankedSite> {
        let mut ranked = Self::rank(weights, table);
        ranked.truncate(top_n);
        ranked
    }
}
