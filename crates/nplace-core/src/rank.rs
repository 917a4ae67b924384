//! Rank presentation policy.
//!
//! Lower rank numbers are better. Ranks are grouped into six visual tiers and
//! a missing rank is its own "unavailable" state, never a tier.

/// Visual weight of a known rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankTier {
    First,
    Second,
    Third,
    /// 4 through 10.
    TopTen,
    /// 11 through 30.
    TopThirty,
    /// 31 and beyond.
    Beyond,
}

impl RankTier {
    /// Tier for a 1-based rank. Returns `None` for a missing rank or a
    /// non-positive value, which is not a valid result position.
    #[must_use]
    pub fn of(rank: Option<i64>) -> Option<Self> {
        match rank? {
            i64::MIN..=0 => None,
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4..=10 => Some(Self::TopTen),
            11..=30 => Some(Self::TopThirty),
            _ => Some(Self::Beyond),
        }
    }
}

/// Direction of a rank change. `rank_change` is latest minus previous, so a
/// negative value is an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankChange {
    Improved(u64),
    Declined(u64),
    /// No previous rank, or the rank did not move. Renders nothing.
    Unchanged,
}

impl RankChange {
    #[must_use]
    pub fn of(change: Option<i64>) -> Self {
        match change {
            Some(c) if c < 0 => Self::Improved(c.unsigned_abs()),
            Some(c) if c > 0 => Self::Declined(c.unsigned_abs()),
            _ => Self::Unchanged,
        }
    }

    #[must_use]
    pub fn magnitude(self) -> Option<u64> {
        match self {
            Self::Improved(n) | Self::Declined(n) => Some(n),
            Self::Unchanged => None,
        }
    }
}
