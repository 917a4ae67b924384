//! Aggregate dashboard and the best-effort "collect all" batch.

use std::fmt;

use futures::stream::{self, StreamExt};
use nplace_client::{ClientError, NplaceClient};
use nplace_core::{DashboardStore, RankingSnapshot};
use uuid::Uuid;

pub(crate) const LOAD_FAILED: &str = "failed to load dashboard";
pub(crate) const COLLECT_FAILED: &str = "collection request failed";

/// Result of collecting one keyword inside a batch.
#[derive(Debug)]
pub struct KeywordOutcome {
    pub keyword_id: Uuid,
    pub keyword: String,
    pub result: Result<RankingSnapshot, String>,
}

/// Per-keyword results of a batch, in the order keywords were listed.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub outcomes: Vec<KeywordOutcome>,
}

impl CollectReport {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &KeywordOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

impl fmt::Display for CollectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.succeeded(), self.total())
    }
}

/// Issues one independent collection per target. A failing keyword never
/// stops the rest, and nothing is retried. With `concurrency == 1` requests
/// go out strictly one after another.
pub async fn collect_keywords(
    client: &NplaceClient,
    targets: Vec<(Uuid, String)>,
    concurrency: usize,
) -> CollectReport {
    let outcomes = stream::iter(targets)
        .map(|(keyword_id, keyword)| async move {
            let result = client.collect_keyword(keyword_id).await.map_err(|e| {
                tracing::warn!(
                    %keyword_id,
                    keyword = %keyword,
                    error = %e,
                    "keyword collection failed"
                );
                e.user_message(COLLECT_FAILED)
            });
            KeywordOutcome {
                keyword_id,
                keyword,
                result,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;
    CollectReport { outcomes }
}

/// Locally held copy of `GET /api/dashboard`.
pub struct DashboardView {
    client: NplaceClient,
    concurrency: usize,
    pub stores: Vec<DashboardStore>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardView {
    #[must_use]
    pub fn new(client: NplaceClient, concurrency: usize) -> Self {
        Self {
            client,
            concurrency,
            stores: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.client.list_dashboard().await {
            Ok(stores) => self.stores = stores,
            Err(e) => {
                tracing::warn!(error = %e, "dashboard fetch failed");
                self.error = Some(e.user_message(LOAD_FAILED));
            }
        }
        self.loading = false;
    }

    #[must_use]
    pub fn store(&self, store_id: Uuid) -> Option<&DashboardStore> {
        self.stores.iter().find(|s| s.id == store_id)
    }

    /// Collects every active keyword of `store_id`, then re-fetches the
    /// aggregate whatever the individual outcomes were.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if the store is not in the loaded
    /// dashboard. Per-keyword failures are reported in the
    /// [`CollectReport`], never as an error.
    pub async fn collect_all(&mut self, store_id: Uuid) -> Result<CollectReport, ClientError> {
        let targets: Vec<(Uuid, String)> = self
            .store(store_id)
            .ok_or_else(|| {
                ClientError::Validation(format!("store {store_id} is not on the dashboard"))
            })?
            .active_keywords()
            .map(|k| (k.id, k.keyword.clone()))
            .collect();

        let report = collect_keywords(&self.client, targets, self.concurrency).await;
        tracing::info!(
            %store_id,
            succeeded = report.succeeded(),
            total = report.total(),
            "collect-all finished"
        );

        self.refresh().await;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::views::test_support::{
        client, dashboard_keyword_json, keyword_uuid, snapshot_json, store_id, STORE_ID,
    };

    fn dashboard_body() -> serde_json::Value {
        json!([{
            "id": STORE_ID,
            "naver_place_id": "1234567890",
            "name": "Cafe Onion",
            "keywords": [
                dashboard_keyword_json(1, "seongsu cafe", true),
                dashboard_keyword_json(2, "seongsu bakery", true),
                dashboard_keyword_json(3, "seongsu dessert", true),
                dashboard_keyword_json(4, "paused keyword", false)
            ]
        }])
    }

    async fn mount_collect(server: &MockServer, n: u128, status: u16) {
        let template = if status < 300 {
            ResponseTemplate::new(status).set_body_json(snapshot_json(
                100 + n,
                n,
                Some(3),
                "2024-03-05T06:00:00+00:00",
            ))
        } else {
            ResponseTemplate::new(status).set_body_json(json!({"detail": "search blocked"}))
        };
        Mock::given(method("POST"))
            .and(path(format!("/api/keywords/{}/collect", keyword_uuid(n))))
            .respond_with(template)
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn collect_all_reports_ratio_and_refreshes_after_partial_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_body()))
            .expect(2)
            .mount(&server)
            .await;
        mount_collect(&server, 1, 201).await;
        mount_collect(&server, 2, 500).await;
        mount_collect(&server, 3, 201).await;
        // The inactive keyword must not be collected.
        Mock::given(method("POST"))
            .and(path(format!("/api/keywords/{}/collect", keyword_uuid(4))))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut view = DashboardView::new(client(&server.uri()), 1);
        view.refresh().await;
        let report = view.collect_all(store_id()).await.expect("store is loaded");

        assert_eq!(report.to_string(), "2/3");
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.total(), 3);

        let failed: Vec<&KeywordOutcome> = report.failures().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].keyword, "seongsu bakery");
        assert_eq!(failed[0].result.as_ref().unwrap_err(), "search blocked");

        let order: Vec<Uuid> = report.outcomes.iter().map(|o| o.keyword_id).collect();
        assert_eq!(order, vec![keyword_uuid(1), keyword_uuid(2), keyword_uuid(3)]);
        // `expect(2)` on the dashboard mock verifies the post-batch refresh.
    }

    #[tokio::test]
    async fn concurrent_fan_out_keeps_order_and_counts() {
        let server = MockServer::start().await;
        mount_collect(&server, 1, 500).await;
        mount_collect(&server, 2, 201).await;
        mount_collect(&server, 3, 201).await;

        let targets = (1..=3)
            .map(|n| (keyword_uuid(n), format!("kw{n}")))
            .collect();
        let report = collect_keywords(&client(&server.uri()), targets, 3).await;

        assert_eq!(report.to_string(), "2/3");
        let order: Vec<&str> = report.outcomes.iter().map(|o| o.keyword.as_str()).collect();
        assert_eq!(order, vec!["kw1", "kw2", "kw3"]);
    }

    #[tokio::test]
    async fn collect_all_on_unknown_store_is_an_error() {
        let server = MockServer::start().await;
        let mut view = DashboardView::new(client(&server.uri()), 1);
        let err = view.collect_all(store_id()).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_batch_reports_zero_of_zero() {
        let server = MockServer::start().await;
        let report = collect_keywords(&client(&server.uri()), Vec::new(), 1).await;
        assert_eq!(report.to_string(), "0/0");
    }

    #[tokio::test]
    async fn refresh_failure_keeps_previous_stores() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_body()))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/dashboard"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let mut view = DashboardView::new(client(&server.uri()), 1);
        view.refresh().await;
        view.refresh().await;

        assert_eq!(view.stores.len(), 1);
        assert_eq!(view.error.as_deref(), Some(LOAD_FAILED));
    }
}
