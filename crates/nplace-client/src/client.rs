//! HTTP client for the rank-tracking REST API.
//!
//! Wraps `reqwest` with typed request/response bodies for every endpoint the
//! dashboard uses. Any non-2xx status becomes [`ClientError::Status`] carrying
//! the backend's `detail` message when present; a 2xx body that does not
//! match the endpoint's schema becomes [`ClientError::Malformed`]. Nothing is
//! retried.

use std::time::Duration;

use nplace_core::{
    AppConfig, DashboardStore, KeywordUpdate, NewKeyword, NewStore, RankingRange,
    RankingSnapshot, Store, StoreSummary, TrackedKeyword,
};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{extract_detail, ClientError};

/// Client for the rank-tracking API.
///
/// Use [`NplaceClient::from_config`] in the binary or
/// [`NplaceClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct NplaceClient {
    client: Client,
    base_url: Url,
}

impl NplaceClient {
    /// Builds a client from application config (base URL, timeouts, UA).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if the
    /// configured base URL cannot be parsed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::build(
            config.resolved_api_url(),
            config.request_timeout_secs,
            config.connect_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client against `base_url` with a fixed request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not a valid absolute URL.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        Self::build(base_url, timeout_secs, 10, "nplace/0.1 (rank-dashboard)")
    }

    fn build(
        base_url: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        // Ensure exactly one trailing slash so a path prefix such as
        // `https://host/rank` is kept when segments are appended.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -- dashboard ---------------------------------------------------------

    /// `GET /api/dashboard`: every store with its keyword rank summaries.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::Status`] on a non-2xx response.
    /// - [`ClientError::Malformed`] if the body is not a `DashboardStore` array.
    pub async fn list_dashboard(&self) -> Result<Vec<DashboardStore>, ClientError> {
        let url = self.endpoint(&["api", "dashboard"]);
        Self::send_json(self.client.get(url.clone()), Method::GET, &url).await
    }

    // -- stores ------------------------------------------------------------

    /// `GET /api/stores`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NplaceClient::list_dashboard`].
    pub async fn list_stores(&self) -> Result<Vec<Store>, ClientError> {
        let url = self.endpoint(&["api", "stores"]);
        Self::send_json(self.client.get(url.clone()), Method::GET, &url).await
    }

    /// `POST /api/stores`: registers a store by its external place id.
    ///
    /// The id is trimmed; an empty id is rejected locally.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if `naver_place_id` is blank.
    /// - [`ClientError::Status`] if the backend rejects it (duplicate,
    ///   malformed id); `detail` carries the backend's reason.
    /// - [`ClientError::Http`] / [`ClientError::Malformed`] as usual.
    pub async fn create_store(&self, naver_place_id: &str) -> Result<Store, ClientError> {
        let naver_place_id = naver_place_id.trim();
        if naver_place_id.is_empty() {
            return Err(ClientError::Validation("place id must not be empty".to_string()));
        }
        let body = NewStore {
            naver_place_id: naver_place_id.to_string(),
        };
        let url = self.endpoint(&["api", "stores"]);
        Self::send_json(self.client.post(url.clone()).json(&body), Method::POST, &url).await
    }

    /// `GET /api/stores/{id}`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NplaceClient::list_dashboard`].
    pub async fn get_store(&self, store_id: Uuid) -> Result<Store, ClientError> {
        let id = store_id.to_string();
        let url = self.endpoint(&["api", "stores", &id]);
        Self::send_json(self.client.get(url.clone()), Method::GET, &url).await
    }

    /// `DELETE /api/stores/{id}`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Status`] if the backend refuses; [`ClientError::Http`]
    /// on network failure.
    pub async fn delete_store(&self, store_id: Uuid) -> Result<(), ClientError> {
        let id = store_id.to_string();
        let url = self.endpoint(&["api", "stores", &id]);
        Self::send_empty(self.client.delete(url.clone()), Method::DELETE, &url).await
    }

    /// `GET /api/stores/{id}/dashboard`: one store with the full latest
    /// snapshot of each keyword.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NplaceClient::list_dashboard`].
    pub async fn store_summary(&self, store_id: Uuid) -> Result<StoreSummary, ClientError> {
        let id = store_id.to_string();
        let url = self.endpoint(&["api", "stores", &id, "dashboard"]);
        Self::send_json(self.client.get(url.clone()), Method::GET, &url).await
    }

    // -- keywords ----------------------------------------------------------

    /// `GET /api/stores/{id}/keywords`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NplaceClient::list_dashboard`].
    pub async fn list_keywords(&self, store_id: Uuid) -> Result<Vec<TrackedKeyword>, ClientError> {
        let id = store_id.to_string();
        let url = self.endpoint(&["api", "stores", &id, "keywords"]);
        Self::send_json(self.client.get(url.clone()), Method::GET, &url).await
    }

    /// `POST /api/stores/{id}/keywords`.
    ///
    /// The keyword text is trimmed; blank text is rejected locally.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if the keyword text is blank.
    /// - [`ClientError::Status`] with the backend's `detail` on rejection.
    /// - [`ClientError::Http`] / [`ClientError::Malformed`] as usual.
    pub async fn create_keyword(
        &self,
        store_id: Uuid,
        keyword: &NewKeyword,
    ) -> Result<TrackedKeyword, ClientError> {
        let text = keyword.keyword.trim();
        if text.is_empty() {
            return Err(ClientError::Validation("keyword must not be empty".to_string()));
        }
        let body = NewKeyword {
            keyword: text.to_string(),
            ..keyword.clone()
        };
        let id = store_id.to_string();
        let url = self.endpoint(&["api", "stores", &id, "keywords"]);
        Self::send_json(self.client.post(url.clone()).json(&body), Method::POST, &url).await
    }

    /// `GET /api/keywords/{id}`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NplaceClient::list_dashboard`].
    pub async fn get_keyword(&self, keyword_id: Uuid) -> Result<TrackedKeyword, ClientError> {
        let id = keyword_id.to_string();
        let url = self.endpoint(&["api", "keywords", &id]);
        Self::send_json(self.client.get(url.clone()), Method::GET, &url).await
    }

    /// `PATCH /api/keywords/{id}` with the `is_active` / `alert_enabled` flags.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Core`] if the update sets neither flag.
    /// - [`ClientError::Status`] / [`ClientError::Http`] /
    ///   [`ClientError::Malformed`] as usual.
    pub async fn update_keyword(
        &self,
        keyword_id: Uuid,
        update: &KeywordUpdate,
    ) -> Result<TrackedKeyword, ClientError> {
        update.validate()?;
        let id = keyword_id.to_string();
        let url = self.endpoint(&["api", "keywords", &id]);
        Self::send_json(self.client.patch(url.clone()).json(update), Method::PATCH, &url).await
    }

    /// `DELETE /api/keywords/{id}`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Status`] if the backend refuses; [`ClientError::Http`]
    /// on network failure.
    pub async fn delete_keyword(&self, keyword_id: Uuid) -> Result<(), ClientError> {
        let id = keyword_id.to_string();
        let url = self.endpoint(&["api", "keywords", &id]);
        Self::send_empty(self.client.delete(url.clone()), Method::DELETE, &url).await
    }

    /// `POST /api/keywords/{id}/collect`: runs one collection synchronously
    /// and returns the snapshot it produced.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NplaceClient::list_dashboard`].
    pub async fn collect_keyword(&self, keyword_id: Uuid) -> Result<RankingSnapshot, ClientError> {
        let id = keyword_id.to_string();
        let url = self.endpoint(&["api", "keywords", &id, "collect"]);
        Self::send_json(self.client.post(url.clone()), Method::POST, &url).await
    }

    // -- rankings ----------------------------------------------------------

    /// `GET /api/keywords/{id}/rankings?from=&to=`. Unset bounds are left out
    /// of the query string entirely.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NplaceClient::list_dashboard`].
    pub async fn list_rankings(
        &self,
        keyword_id: Uuid,
        range: &RankingRange,
    ) -> Result<Vec<RankingSnapshot>, ClientError> {
        let url = self.rankings_url(keyword_id, range);
        Self::send_json(self.client.get(url.clone()), Method::GET, &url).await
    }

    fn rankings_url(&self, keyword_id: Uuid, range: &RankingRange) -> Url {
        let id = keyword_id.to_string();
        let mut url = self.endpoint(&["api", "keywords", &id, "rankings"]);
        let pairs = range.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (k, v) in &pairs {
                query.append_pair(k, v);
            }
        }
        url
    }

    // -- plumbing ----------------------------------------------------------

    /// Appends `segments` to the base URL's path.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends the request, fails on non-2xx, and parses a 2xx body into `T`.
    async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
        method: Method,
        url: &Url,
    ) -> Result<T, ClientError> {
        let response = Self::dispatch(request, &method, url).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "response did not match schema");
            ClientError::Malformed {
                context: format!("{method} {}", url.path()),
                source: e,
            }
        })
    }

    /// Sends the request and discards any 2xx body.
    async fn send_empty(
        request: RequestBuilder,
        method: Method,
        url: &Url,
    ) -> Result<(), ClientError> {
        Self::dispatch(request, &method, url).await?;
        Ok(())
    }

    async fn dispatch(
        request: RequestBuilder,
        method: &Method,
        url: &Url,
    ) -> Result<reqwest::Response, ClientError> {
        tracing::debug!(%method, %url, "sending request");
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "request failed");
            ClientError::Http(e)
        })?;

        let status = response.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "response received");
        if status.is_success() {
            return Ok(response);
        }

        // Best effort: an unreadable body just means no detail.
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            detail: extract_detail(&body),
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
