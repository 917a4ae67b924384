use nplace_client::ClientError;

/// Lifecycle of an async submit control:
/// `Idle -> Submitting -> (Succeeded | Failed) -> Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    /// Enters `Submitting`. Returns `false`, leaving the state untouched,
    /// while a previous submit is still in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Records the outcome of the in-flight submit.
    pub fn finish<T>(&mut self, result: &Result<T, ClientError>, fallback: &str) {
        *self = match result {
            Ok(_) => Self::Succeeded,
            Err(e) => Self::Failed(e.user_message(fallback)),
        };
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
