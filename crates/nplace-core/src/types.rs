//! Wire types for the rank-tracking API.
//!
//! Field names match the backend's JSON exactly (`snake_case`). Nullable
//! columns are `Option`s; composites returned by the dashboard endpoints
//! carry looser optionality because the backend builds them by hand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection_time::CollectionTime;
use crate::error::CoreError;

/// A place/business registered for rank tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,
    pub naver_place_id: String,
    pub name: String,
    pub category: Option<String>,
    pub address: Option<String>,
    pub naver_place_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A search term whose rank is monitored for one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedKeyword {
    pub id: Uuid,
    pub store_id: Uuid,
    pub keyword: String,
    pub is_active: bool,
    #[serde(default)]
    pub collection_time: Option<CollectionTime>,
    pub alert_enabled: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TrackedKeyword {
    /// Current local value of `flag`.
    #[must_use]
    pub fn flag(&self, flag: KeywordFlag) -> bool {
        match flag {
            KeywordFlag::Active => self.is_active,
            KeywordFlag::Alert => self.alert_enabled,
        }
    }
}

/// One point-in-time rank measurement. `rank_position == None` means the
/// store was not found within the observed result window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSnapshot {
    pub id: Uuid,
    pub tracked_keyword_id: Uuid,
    pub rank_position: Option<i64>,
    pub total_results: Option<i64>,
    pub visitor_count: Option<i64>,
    pub blog_review_count: Option<i64>,
    pub collected_at: DateTime<Utc>,
}

/// A tracked keyword with its latest and previous rank, as computed by the
/// backend for the aggregate dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardKeyword {
    pub id: Uuid,
    #[serde(default)]
    pub store_id: Option<Uuid>,
    pub keyword: String,
    pub is_active: bool,
    #[serde(default)]
    pub collection_time: Option<CollectionTime>,
    #[serde(default)]
    pub alert_enabled: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub latest_rank: Option<i64>,
    #[serde(default)]
    pub prev_rank: Option<i64>,
    /// Negative means the rank improved since the previous snapshot.
    #[serde(default)]
    pub rank_change: Option<i64>,
    #[serde(default)]
    pub latest_visitor_count: Option<i64>,
    #[serde(default)]
    pub latest_blog_review_count: Option<i64>,
    #[serde(default)]
    pub latest_collected_at: Option<DateTime<Utc>>,
}

/// A store plus the rank summary of each of its keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStore {
    pub id: Uuid,
    pub naver_place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub naver_place_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<DashboardKeyword>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DashboardStore {
    /// Display name, falling back to the place id when the backend could not
    /// resolve one.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.naver_place_id)
    }

    /// Keywords that take part in collection.
    pub fn active_keywords(&self) -> impl Iterator<Item = &DashboardKeyword> {
        self.keywords.iter().filter(|k| k.is_active)
    }
}

/// Keyword entry of the per-store summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordWithRank {
    pub id: Uuid,
    pub keyword: String,
    pub is_active: bool,
    #[serde(default)]
    pub latest_rank: Option<RankingSnapshot>,
}

/// Response of `GET /api/stores/{id}/dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub store_id: Uuid,
    pub naver_place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub naver_place_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<KeywordWithRank>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/stores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStore {
    pub naver_place_id: String,
}

/// Body of `POST /api/stores/{id}/keywords`. Unset fields are omitted so the
/// backend applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NewKeyword {
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_time: Option<CollectionTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_enabled: Option<bool>,
}

impl NewKeyword {
    /// Keyword text only; cadence and alerting default server-side.
    #[must_use]
    pub fn text(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }
}

/// The two user-toggleable keyword flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordFlag {
    Active,
    Alert,
}

/// Body of `PATCH /api/keywords/{id}`. Restricted to the two boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KeywordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_enabled: Option<bool>,
}

impl KeywordUpdate {
    /// Update that sets a single flag.
    #[must_use]
    pub fn set(flag: KeywordFlag, value: bool) -> Self {
        match flag {
            KeywordFlag::Active => Self {
                is_active: Some(value),
                alert_enabled: None,
            },
            KeywordFlag::Alert => Self {
                is_active: None,
                alert_enabled: Some(value),
            },
        }
    }

    /// Update that flips `flag` relative to the keyword's current value.
    #[must_use]
    pub fn toggle(keyword: &TrackedKeyword, flag: KeywordFlag) -> Self {
        Self::set(flag, !keyword.flag(flag))
    }

    /// Rejects an update that would send an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyUpdate`] when neither flag is set.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_active.is_none() && self.alert_enabled.is_none() {
            return Err(CoreError::EmptyUpdate);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
