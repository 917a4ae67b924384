use nplace_core::CoreError;
use thiserror::Error;

/// Errors returned by [`crate::NplaceClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `detail` is the backend's
    /// human-readable message when the body carried one.
    #[error("unexpected HTTP status {status} from {url}{}", detail_suffix(.detail))]
    Status {
        status: u16,
        url: String,
        detail: Option<String>,
    },

    /// The response body did not match the endpoint's schema.
    #[error("malformed response for {context}: {source}")]
    Malformed {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl ClientError {
    /// Single user-facing message for any failure.
    ///
    /// Prefers the backend's `detail`; local validation errors speak for
    /// themselves; everything else collapses to `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Validation(msg) => msg.clone(),
            Self::Core(e) => e.to_string(),
            Self::Http(_)
            | Self::Status { detail: None, .. }
            | Self::Malformed { .. }
            | Self::InvalidBaseUrl { .. } => fallback.to_string(),
        }
    }

    /// HTTP status of a non-2xx response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

/// Pulls a readable message out of an error body's `detail` field.
///
/// Handles the plain-string form and the validation-error array form
/// (`[{"loc": [...], "msg": "..."}]`), joining messages with `"; "`. Returns
/// `None` for unparsable bodies, a missing field, or an empty message.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;

    let message = match detail {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s.trim().to_string()),
                other => other
                    .get("msg")
                    .and_then(serde_json::Value::as_str)
                    .map(|s| s.trim().to_string()),
            })
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}
