//! Keyword management for a single store.

use nplace_client::{ClientError, NplaceClient};
use nplace_core::{KeywordFlag, KeywordUpdate, NewKeyword, RankingSnapshot, Store, TrackedKeyword};
use uuid::Uuid;

pub(crate) const LOAD_FAILED: &str = "failed to load keywords";
pub(crate) const ADD_FAILED: &str = "failed to add keyword";
pub(crate) const UPDATE_FAILED: &str = "failed to update keyword";
pub(crate) const DELETE_FAILED: &str = "failed to delete keyword";
pub(crate) const COLLECT_FAILED: &str = "failed to collect ranking";

pub struct KeywordManager {
    client: NplaceClient,
    store_id: Uuid,
    pub store: Option<Store>,
    pub keywords: Vec<TrackedKeyword>,
    pub loading: bool,
    /// Load failure of the keyword list.
    pub error: Option<String>,
    /// Failure of the last per-row action (toggle, delete, collect).
    pub action_error: Option<String>,
    collecting: Option<Uuid>,
}

impl KeywordManager {
    #[must_use]
    pub fn new(client: NplaceClient, store_id: Uuid) -> Self {
        Self {
            client,
            store_id,
            store: None,
            keywords: Vec::new(),
            loading: false,
            error: None,
            action_error: None,
            collecting: None,
        }
    }

    /// Reloads the keyword list and the store header. A failing store lookup
    /// only loses the header.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.client.get_store(self.store_id).await {
            Ok(store) => self.store = Some(store),
            Err(e) => tracing::debug!(
                store_id = %self.store_id,
                error = %e,
                "store header unavailable"
            ),
        }
        match self.client.list_keywords(self.store_id).await {
            Ok(keywords) => self.keywords = keywords,
            Err(e) => {
                tracing::warn!(store_id = %self.store_id, error = %e, "keyword list fetch failed");
                self.error = Some(e.user_message(LOAD_FAILED));
            }
        }
        self.loading = false;
    }

    #[must_use]
    pub fn keyword(&self, keyword_id: Uuid) -> Option<&TrackedKeyword> {
        self.keywords.iter().find(|k| k.id == keyword_id)
    }

    /// Adds a keyword with server-side defaults for cadence and alerting.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`]; the list is left unchanged.
    pub async fn add(&mut self, keyword: &str) -> Result<TrackedKeyword, ClientError> {
        self.add_with(&NewKeyword::text(keyword)).await
    }

    /// Adds a keyword with explicit settings and appends the created row.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`]; the list is left unchanged.
    pub async fn add_with(&mut self, request: &NewKeyword) -> Result<TrackedKeyword, ClientError> {
        let created = self.client.create_keyword(self.store_id, request).await?;
        tracing::info!(keyword_id = %created.id, keyword = %created.keyword, "keyword added");
        self.keywords.push(created.clone());
        Ok(created)
    }

    /// Flips `flag` on the row with `keyword_id` and replaces the local row
    /// with the backend's copy.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] for an id not in the list; otherwise the
    /// backend's error. The message is also kept in
    /// [`KeywordManager::action_error`].
    pub async fn toggle(
        &mut self,
        keyword_id: Uuid,
        flag: KeywordFlag,
    ) -> Result<TrackedKeyword, ClientError> {
        self.action_error = None;
        let result = match self.keyword(keyword_id) {
            Some(current) => {
                let update = KeywordUpdate::toggle(current, flag);
                self.client.update_keyword(keyword_id, &update).await
            }
            None => Err(unknown_keyword(keyword_id)),
        };
        match result {
            Ok(updated) => {
                if let Some(row) = self.keywords.iter_mut().find(|k| k.id == keyword_id) {
                    *row = updated.clone();
                }
                tracing::info!(
                    %keyword_id,
                    ?flag,
                    value = updated.flag(flag),
                    "keyword flag toggled"
                );
                Ok(updated)
            }
            Err(e) => {
                self.action_error = Some(e.user_message(UPDATE_FAILED));
                Err(e)
            }
        }
    }

    /// Deletes the keyword, dropping the local row only after success.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`]; the list is left unchanged.
    pub async fn remove(&mut self, keyword_id: Uuid) -> Result<(), ClientError> {
        self.action_error = None;
        if let Err(e) = self.client.delete_keyword(keyword_id).await {
            self.action_error = Some(e.user_message(DELETE_FAILED));
            return Err(e);
        }
        self.keywords.retain(|k| k.id != keyword_id);
        tracing::info!(%keyword_id, "keyword deleted");
        Ok(())
    }

    /// Runs an immediate collection for one keyword. The busy marker is
    /// cleared whatever the outcome.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] if another collection is still running on
    /// this view; otherwise the backend's error.
    pub async fn collect(&mut self, keyword_id: Uuid) -> Result<RankingSnapshot, ClientError> {
        if let Some(running) = self.collecting {
            return Err(ClientError::Validation(format!(
                "collection already running for keyword {running}"
            )));
        }
        self.action_error = None;
        self.collecting = Some(keyword_id);
        let result = self.client.collect_keyword(keyword_id).await;
        self.collecting = None;
        match &result {
            Ok(snapshot) => {
                tracing::info!(%keyword_id, rank = ?snapshot.rank_position, "collection finished");
            }
            Err(e) => {
                tracing::warn!(%keyword_id, error = %e, "collection failed");
                self.action_error = Some(e.user_message(COLLECT_FAILED));
            }
        }
        result
    }

    #[must_use]
    pub fn is_collecting(&self, keyword_id: Uuid) -> bool {
        self.collecting == Some(keyword_id)
    }
}

fn unknown_keyword(keyword_id: Uuid) -> ClientError {
    ClientError::Validation(format!("keyword {keyword_id} is not tracked for this store"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::views::test_support::{
        client, keyword_json, keyword_uuid, snapshot_json, store_id, store_json, STORE_ID,
    };

    async fn loaded(server: &MockServer, keywords: serde_json::Value) -> KeywordManager {
        Mock::given(method("GET"))
            .and(path(format!("/api/stores/{STORE_ID}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(store_json(STORE_ID, "1234567890")),
            )
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/api/stores/{STORE_ID}/keywords")))
            .respond_with(ResponseTemplate::new(200).set_body_json(keywords))
            .mount(server)
            .await;
        let mut manager = KeywordManager::new(client(&server.uri()), store_id());
        manager.refresh().await;
        manager
    }

    #[tokio::test]
    async fn refresh_loads_store_header_and_keywords() {
        let server = MockServer::start().await;
        let manager = loaded(&server, json!([keyword_json(1, "seongsu cafe", true, false)])).await;

        assert_eq!(manager.keywords.len(), 1);
        assert_eq!(manager.store.as_ref().map(|s| s.naver_place_id.as_str()), Some("1234567890"));
        assert!(manager.error.is_none());
        assert!(!manager.loading);
    }

    #[tokio::test]
    async fn store_header_failure_does_not_fail_keyword_load() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/stores/{STORE_ID}")))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/api/stores/{STORE_ID}/keywords")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let mut manager = KeywordManager::new(client(&server.uri()), store_id());
        manager.refresh().await;
        assert!(manager.store.is_none());
        assert!(manager.error.is_none());
    }

    #[tokio::test]
    async fn add_appends_created_keyword() {
        let server = MockServer::start().await;
        let mut manager = loaded(&server, json!([])).await;
        Mock::given(method("POST"))
            .and(path(format!("/api/stores/{STORE_ID}/keywords")))
            .and(body_json(json!({"keyword": "seongsu cafe"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(keyword_json(1, "seongsu cafe", true, false)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let created = manager.add("  seongsu cafe ").await.expect("add should succeed");
        assert_eq!(created.id, keyword_uuid(1));
        assert_eq!(manager.keywords.len(), 1);
    }

    #[tokio::test]
    async fn add_failure_leaves_list_unchanged() {
        let server = MockServer::start().await;
        let mut manager = loaded(&server, json!([keyword_json(1, "a", true, false)])).await;
        Mock::given(method("POST"))
            .and(path(format!("/api/stores/{STORE_ID}/keywords")))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({"detail": "keyword already tracked"})),
            )
            .mount(&server)
            .await;

        let err = manager.add("a").await.unwrap_err();
        assert_eq!(err.user_message(ADD_FAILED), "keyword already tracked");
        assert_eq!(manager.keywords.len(), 1);
    }

    #[tokio::test]
    async fn toggle_sends_negation_and_replaces_row() {
        let server = MockServer::start().await;
        let mut manager = loaded(&server, json!([keyword_json(1, "a", true, false)])).await;
        Mock::given(method("PATCH"))
            .and(path(format!("/api/keywords/{}", keyword_uuid(1))))
            .and(body_json(json!({"is_active": false})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(keyword_json(1, "a", false, false)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let updated = manager
            .toggle(keyword_uuid(1), KeywordFlag::Active)
            .await
            .expect("toggle should succeed");
        assert!(!updated.is_active);
        assert!(!manager.keywords[0].is_active);
    }

    #[tokio::test]
    async fn toggling_twice_restores_original_flag() {
        let server = MockServer::start().await;
        let mut manager = loaded(&server, json!([keyword_json(1, "a", true, false)])).await;
        Mock::given(method("PATCH"))
            .and(path(format!("/api/keywords/{}", keyword_uuid(1))))
            .and(body_json(json!({"alert_enabled": true})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(keyword_json(1, "a", true, true)),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path(format!("/api/keywords/{}", keyword_uuid(1))))
            .and(body_json(json!({"alert_enabled": false})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(keyword_json(1, "a", true, false)),
            )
            .expect(1)
            .mount(&server)
            .await;

        manager.toggle(keyword_uuid(1), KeywordFlag::Alert).await.unwrap();
        assert!(manager.keywords[0].alert_enabled);
        manager.toggle(keyword_uuid(1), KeywordFlag::Alert).await.unwrap();
        assert!(!manager.keywords[0].alert_enabled);
    }

    #[tokio::test]
    async fn toggle_failure_keeps_local_value_and_reports() {
        let server = MockServer::start().await;
        let mut manager = loaded(&server, json!([keyword_json(1, "a", true, false)])).await;
        Mock::given(method("PATCH"))
            .and(path(format!("/api/keywords/{}", keyword_uuid(1))))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(manager.toggle(keyword_uuid(1), KeywordFlag::Active).await.is_err());
        assert!(manager.keywords[0].is_active);
        assert_eq!(manager.action_error.as_deref(), Some(UPDATE_FAILED));
    }

    #[tokio::test]
    async fn toggle_unknown_keyword_sends_nothing() {
        let server = MockServer::start().await;
        let mut manager = loaded(&server, json!([])).await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = manager.toggle(keyword_uuid(9), KeywordFlag::Active).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn remove_drops_row_only_on_success() {
        let server = MockServer::start().await;
        let mut manager = loaded(
            &server,
            json!([keyword_json(1, "a", true, false), keyword_json(2, "b", true, false)]),
        )
        .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/api/keywords/{}", keyword_uuid(1))))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/api/keywords/{}", keyword_uuid(2))))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
            .mount(&server)
            .await;

        manager.remove(keyword_uuid(1)).await.expect("delete should succeed");
        assert!(manager.remove(keyword_uuid(2)).await.is_err());

        let ids: Vec<Uuid> = manager.keywords.iter().map(|k| k.id).collect();
        assert_eq!(ids, vec![keyword_uuid(2)]);
        assert_eq!(manager.action_error.as_deref(), Some("not found"));
    }

    #[tokio::test]
    async fn collect_clears_busy_marker_on_success_and_failure() {
        let server = MockServer::start().await;
        let mut manager = loaded(&server, json!([keyword_json(1, "a", true, false)])).await;
        Mock::given(method("POST"))
            .and(path(format!("/api/keywords/{}/collect", keyword_uuid(1))))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(snapshot_json(50, 1, Some(4), "2024-03-05T06:00:00+00:00")),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(format!("/api/keywords/{}/collect", keyword_uuid(1))))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let snapshot = manager.collect(keyword_uuid(1)).await.expect("first collect succeeds");
        assert_eq!(snapshot.rank_position, Some(4));
        assert!(!manager.is_collecting(keyword_uuid(1)));

        assert!(manager.collect(keyword_uuid(1)).await.is_err());
        assert!(!manager.is_collecting(keyword_uuid(1)));
        assert_eq!(manager.action_error.as_deref(), Some(COLLECT_FAILED));
    }
}
