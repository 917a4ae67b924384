//! Rank badge and rank-change indicator.

use console::Style;
use nplace_core::{RankChange, RankTier};

const UNAVAILABLE: &str = "-";

/// Unstyled badge text: `#<n>` or `-` when the rank is unavailable.
#[must_use]
pub fn rank_label(rank: Option<i64>) -> String {
    match (RankTier::of(rank), rank) {
        (Some(_), Some(n)) => format!("#{n}"),
        _ => UNAVAILABLE.to_string(),
    }
}

/// Terminal style for a rank; `None` is the unavailable state.
#[must_use]
pub fn tier_style(tier: Option<RankTier>) -> Style {
    match tier {
        Some(RankTier::First) => Style::new().color256(220).bold(),
        Some(RankTier::Second) => Style::new().yellow().bold(),
        Some(RankTier::Third) => Style::new().cyan().bold(),
        Some(RankTier::TopTen) => Style::new().green(),
        Some(RankTier::TopThirty) => Style::new(),
        Some(RankTier::Beyond) | None => Style::new().dim(),
    }
}

#[must_use]
pub fn styled_rank(rank: Option<i64>) -> String {
    tier_style(RankTier::of(rank))
        .apply_to(rank_label(rank))
        .to_string()
}

/// `▲<n>` for an improvement, `▼<n>` for a decline, `None` otherwise.
#[must_use]
pub fn change_label(change: Option<i64>) -> Option<String> {
    match RankChange::of(change) {
        RankChange::Improved(n) => Some(format!("\u{25b2}{n}")),
        RankChange::Declined(n) => Some(format!("\u{25bc}{n}")),
        RankChange::Unchanged => None,
    }
}

/// Styled change indicator, or an empty string when there is nothing to show.
#[must_use]
pub fn styled_change(change: Option<i64>) -> String {
    let Some(label) = change_label(change) else {
        return String::new();
    };
    let style = match RankChange::of(change) {
        RankChange::Improved(_) => Style::new().green(),
        RankChange::Declined(_) => Style::new().red(),
        RankChange::Unchanged => Style::new(),
    };
    style.apply_to(label).to_string()
}
