//! Add-keyword dialog: keyword text, daily collection slot and alert flag.

use nplace_core::{CollectionTime, NewKeyword, TrackedKeyword};

use super::keywords::{KeywordManager, ADD_FAILED};
use super::SubmitState;

#[derive(Debug, Default)]
pub struct AddKeywordDialog {
    pub keyword: String,
    pub collection_time: CollectionTime,
    pub alert_enabled: bool,
    pub state: SubmitState,
}

impl AddKeywordDialog {
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// The dialog always sends its slot and alert flag, even at their
    /// defaults.
    #[must_use]
    pub fn to_request(&self) -> NewKeyword {
        NewKeyword {
            keyword: self.keyword.trim().to_string(),
            collection_time: Some(self.collection_time),
            alert_enabled: Some(self.alert_enabled),
        }
    }

    /// Blank text or a submit in flight is a no-op. On success the fields go
    /// back to their defaults; on failure they are kept for another attempt.
    pub async fn submit(&mut self, manager: &mut KeywordManager) -> Option<TrackedKeyword> {
        if self.keyword.trim().is_empty() || !self.state.begin() {
            return None;
        }
        let result = manager.add_with(&self.to_request()).await;
        self.state.finish(&result, ADD_FAILED);
        match result {
            Ok(created) => {
                self.keyword.clear();
                self.collection_time = CollectionTime::DEFAULT;
                self.alert_enabled = false;
                Some(created)
            }
            Err(e) => {
                tracing::warn!(error = %e, "keyword creation failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::views::test_support::{client, keyword_json, store_id, STORE_ID};

    #[test]
    fn defaults_to_three_pm_without_alerts() {
        let dialog = AddKeywordDialog::new("seongsu cafe");
        let request = dialog.to_request();
        assert_eq!(request.collection_time, Some(CollectionTime::DEFAULT));
        assert_eq!(request.collection_time.map(|t| t.to_string()).as_deref(), Some("15:00"));
        assert_eq!(request.alert_enabled, Some(false));
    }

    #[tokio::test]
    async fn submit_sends_all_fields_and_resets_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/api/stores/{STORE_ID}/keywords")))
            .and(body_json(json!({
                "keyword": "seongsu cafe",
                "collection_time": "09:00",
                "alert_enabled": true
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(keyword_json(1, "seongsu cafe", true, true)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut manager = KeywordManager::new(client(&server.uri()), store_id());
        let mut dialog = AddKeywordDialog::new(" seongsu cafe ");
        dialog.collection_time = CollectionTime::at_hour(9).unwrap();
        dialog.alert_enabled = true;

        let created = dialog.submit(&mut manager).await;
        assert!(created.is_some());
        assert_eq!(manager.keywords.len(), 1);
        assert!(dialog.keyword.is_empty());
        assert_eq!(dialog.collection_time, CollectionTime::DEFAULT);
        assert!(!dialog.alert_enabled);
        assert_eq!(dialog.state, SubmitState::Succeeded);
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/api/stores/{STORE_ID}/keywords")))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut manager = KeywordManager::new(client(&server.uri()), store_id());
        let mut dialog = AddKeywordDialog::new("seongsu cafe");
        dialog.alert_enabled = true;

        assert!(dialog.submit(&mut manager).await.is_none());
        assert_eq!(dialog.keyword, "seongsu cafe");
        assert!(dialog.alert_enabled);
        assert_eq!(dialog.state.error(), Some(ADD_FAILED));
        assert!(manager.keywords.is_empty());
    }

    #[tokio::test]
    async fn blank_keyword_is_not_submitted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut manager = KeywordManager::new(client(&server.uri()), store_id());
        let mut dialog = AddKeywordDialog::new("   ");
        assert!(dialog.submit(&mut manager).await.is_none());
        assert_eq!(dialog.state, SubmitState::Idle);
    }
}
