//! Ranking history for one keyword over a date range.

use nplace_client::NplaceClient;
use nplace_core::{chart_series, ChartPoint, RankingRange, RankingSnapshot, TrackedKeyword};
use uuid::Uuid;

pub(crate) const LOAD_FAILED: &str = "failed to load ranking history";

pub struct RankingHistory {
    client: NplaceClient,
    keyword_id: Uuid,
    pub keyword: Option<TrackedKeyword>,
    pub snapshots: Vec<RankingSnapshot>,
    pub range: RankingRange,
    pub loading: bool,
    pub error: Option<String>,
}

impl RankingHistory {
    #[must_use]
    pub fn new(client: NplaceClient, keyword_id: Uuid) -> Self {
        Self {
            client,
            keyword_id,
            keyword: None,
            snapshots: Vec::new(),
            range: RankingRange::all(),
            loading: false,
            error: None,
        }
    }

    /// Fetches the keyword header and the snapshots within `range`. A
    /// failing header lookup only loses the header.
    pub async fn load(&mut self, range: RankingRange) {
        self.loading = true;
        self.error = None;
        self.range = range;

        if self.keyword.is_none() {
            match self.client.get_keyword(self.keyword_id).await {
                Ok(keyword) => self.keyword = Some(keyword),
                Err(e) => tracing::debug!(
                    keyword_id = %self.keyword_id,
                    error = %e,
                    "keyword header unavailable"
                ),
            }
        }

        match self.client.list_rankings(self.keyword_id, &range).await {
            Ok(snapshots) => {
                let fetched = snapshots.len();
                self.snapshots = snapshots
                    .into_iter()
                    .filter(|s| range.contains(s.collected_at))
                    .collect();
                if self.snapshots.len() < fetched {
                    tracing::debug!(
                        dropped = fetched - self.snapshots.len(),
                        "snapshots outside the requested range ignored"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    keyword_id = %self.keyword_id,
                    error = %e,
                    "ranking history fetch failed"
                );
                self.error = Some(e.user_message(LOAD_FAILED));
            }
        }
        self.loading = false;
    }

    /// Plottable series: known ranks only, oldest first.
    #[must_use]
    pub fn chart(&self) -> Vec<ChartPoint> {
        chart_series(&self.snapshots)
    }

    /// Table rows, newest first, including snapshots without a rank.
    #[must_use]
    pub fn rows(&self) -> Vec<&RankingSnapshot> {
        let mut rows: Vec<&RankingSnapshot> = self.snapshots.iter().collect();
        rows.sort_by(|a, b| {
            b.collected_at
                .cmp(&a.collected_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        rows
    }
}
