#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Base URL used when `NPLACE_API_URL` is empty. The browser build resolves
/// an empty prefix against its own origin; a terminal has no origin, so it
/// targets the backend's local default instead.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub env: Environment,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub collect_concurrency: usize,
}

impl AppConfig {
    /// Base URL with the empty-means-default rule applied.
    #[must_use]
    pub fn resolved_api_url(&self) -> &str {
        let trimmed = self.api_base_url.trim();
        if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        }
    }
}
