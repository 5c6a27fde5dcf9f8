//! Cross-weight ranking comparison
//!
//! Glyphs are ranked per weight by one side bearing, and every pair of
//! weights is compared with Kendall's tau. Comparing all pairs rather than
//! neighbours keeps a single odd weight from showing up only once.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use super::side_bearings::SideBearingTable;
use crate::geometry::Direction;

/// Rank agreement between two weights
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankingDistance {
    pub first: String,
    pub second: String,
    /// Number of glyphs ranked (drawn in every weight)
    pub common: usize,
    /// Kendall's tau, `None` when fewer than two glyphs can be ranked
    pub tau: Option<f64>,
}

/// Order `glyphs` by descending side bearing in `weight`.
///
/// The sort is stable, so equal values keep their order in `glyphs`.
pub fn rank<'a>(
    table: &SideBearingTable,
    weight: &str,
    glyphs: &[&'a str],
    direction: Direction,
) -> Vec<&'a str> {
    let value = |string: &str| {
        table
            .get(weight, string)
            .map(|sb| sb.get(direction))
            .unwrap_or(f64::NAN)
    };
    let mut ranking = glyphs.to_vec();
    ranking.sort_by(|a, b| value(b).partial_cmp(&value(a)).unwrap_or(Ordering::Equal));
    ranking
}

/// Kendall's tau-b between two paired samples.
///
/// Returns `None` for fewer than two pairs or when either sample is
/// constant, where the statistic is undefined.
pub fn kendall_tau<T: PartialOrd>(x: &[T], y: &[T]) -> Option<f64> {
    let n = x.len().min(y.len());
    if n < 2 {
        return None;
    }

    let (mut concordant, mut discordant) = (0u64, 0u64);
    let (mut ties_x, mut ties_y) = (0u64, 0u64);
    for i in 0..n {
        for j in i + 1..n {
            let dx = x[i].partial_cmp(&x[j]).unwrap_or(Ordering::Equal);
            let dy = y[i].partial_cmp(&y[j]).unwrap_or(Ordering::Equal);
            match (dx, dy) {
                (Ordering::Equal, Ordering::Equal) => {}
                (Ordering::Equal, _) => ties_x += 1,
                (_, Ordering::Equal) => ties_y += 1,
                _ if dx == dy => concordant += 1,
                _ => discordant += 1,
            }
        }
    }

    let paired = (concordant + discordant) as f64;
    let denominator = ((paired + ties_x as f64) * (paired + ties_y as f64)).sqrt();
    if denominator == 0.0 {
        return None;
    }
    Some((concordant as f64 - discordant as f64) / denominator)
}

/// Kendall's tau for every unordered pair of weights, in combination
/// order over the table's declared weights.
pub fn dist_between_rankings(table: &SideBearingTable, direction: Direction) -> Vec<RankingDistance> {
    let common = table.common_glyphs();
    let weights = table.weights();
    debug!(
        "Ranking {} common glyphs by {} across {} weights",
        common.len(),
        direction,
        weights.len()
    );

    let mut scores = Vec::new();
    for (i, first) in weights.iter().enumerate() {
        for second in &weights[i + 1..] {
            let positions_first = positions(&rank(table, first, &common, direction));
            let positions_second = positions(&rank(table, second, &common, direction));
            let x: Vec<usize> = common.iter().map(|g| positions_first[g]).collect();
            let y: Vec<usize> = common.iter().map(|g| positions_second[g]).collect();
            scores.push(RankingDistance {
                first: first.clone(),
                second: second.clone(),
                common: common.len(),
                tau: kendall_tau(&x, &y),
            });
        }
    }
    scores
}

fn positions<'a>(ranking: &[&'a str]) -> HashMap<&'a str, usize> {
    ranking.iter().enumerate().map(|(i, g)| (*g, i)).collect()
}
