use chrono::{DateTime, NaiveDate, Utc};

use crate::error::CoreError;

/// Inclusive date bounds for a ranking history query. Either side may be
/// open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl RankingRange {
    /// Unbounded on both sides.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvertedRange`] if both bounds are set and
    /// `from` is later than `to`.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, CoreError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(CoreError::InvertedRange { from, to });
            }
        }
        Ok(Self { from, to })
    }

    #[must_use]
    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether `ts` falls within the range, comparing UTC calendar dates.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        let day = ts.date_naive();
        self.from.is_none_or(|from| day >= from) && self.to.is_none_or(|to| day <= to)
    }

    /// `(name, YYYY-MM-DD)` pairs for the set bounds, in `from`, `to` order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(from) = self.from {
            pairs.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}
