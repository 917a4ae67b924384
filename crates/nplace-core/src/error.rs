use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid collection time \"{value}\": {reason}")]
    InvalidCollectionTime { value: String, reason: String },

    #[error("invalid date range: from {from} is after to {to}")]
    InvertedRange {
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    },

    #[error("keyword update must change at least one flag")]
    EmptyUpdate,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
