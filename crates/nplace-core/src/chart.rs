//! Chart data derivation for rank history.
//!
//! The plotted series is the snapshots with a known rank, ascending by
//! collection time. The rank axis is inverted: the best (lowest) rank sits on
//! the top row.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::RankingSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub snapshot_id: Uuid,
    pub collected_at: DateTime<Utc>,
    pub rank: i64,
}

/// Builds the chart series from snapshots in any order.
///
/// Snapshots with `rank_position == None` are excluded. Ties on
/// `collected_at` are broken by snapshot id so the output does not depend on
/// input order.
#[must_use]
pub fn chart_series(snapshots: &[RankingSnapshot]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = snapshots
        .iter()
        .filter_map(|s| {
            s.rank_position.map(|rank| ChartPoint {
                snapshot_id: s.id,
                collected_at: s.collected_at,
                rank,
            })
        })
        .collect();
    points.sort_by(|a, b| {
        a.collected_at
            .cmp(&b.collected_at)
            .then_with(|| a.snapshot_id.cmp(&b.snapshot_id))
    });
    points
}

/// Vertical extent of the rank axis. `best <= worst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankAxis {
    pub best: i64,
    pub worst: i64,
}

impl RankAxis {
    /// Number of distinct rank values spanned by the axis.
    #[must_use]
    pub fn span(&self) -> u64 {
        self.worst.abs_diff(self.best) + 1
    }

    /// Row for `rank` on a plot `height` rows tall, where row 0 is the top
    /// (best rank) and `height - 1` the bottom (worst rank).
    #[must_use]
    pub fn row_of(&self, rank: i64, height: usize) -> usize {
        if height <= 1 || self.best == self.worst {
            return 0;
        }
        let clamped = rank.clamp(self.best, self.worst);
        let offset = u128::from(clamped.abs_diff(self.best));
        let range = u128::from(self.worst.abs_diff(self.best));
        let rows = (height - 1) as u128;
        // Round to the nearest row.
        let row = (offset * rows * 2 + range) / (range * 2);
        usize::try_from(row).unwrap_or(height - 1)
    }

    /// Rank value shown at `row` of a plot `height` rows tall (inverse of
    /// [`RankAxis::row_of`], rounded).
    #[must_use]
    pub fn rank_at(&self, row: usize, height: usize) -> i64 {
        if height <= 1 || self.best == self.worst {
            return self.best;
        }
        let range = i128::from(self.worst) - i128::from(self.best);
        let rows = (height - 1) as i128;
        let row = row.min(height - 1) as i128;
        let value = i128::from(self.best) + (row * range * 2 + rows) / (rows * 2);
        i64::try_from(value).unwrap_or(self.worst)
    }
}

/// Axis covering every point of the series, or `None` for an empty series.
#[must_use]
pub fn rank_axis(points: &[ChartPoint]) -> Option<RankAxis> {
    let best = points.iter().map(|p| p.rank).min()?;
    let worst = points.iter().map(|p| p.rank).max()?;
    Some(RankAxis { best, worst })
}
