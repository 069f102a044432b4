//! Backend error types

use thiserror::Error;

/// Backend error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub message: String,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Timeout, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Rejected, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Server, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::InvalidResponse, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::InvalidInput, message)
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::timeout(format!("Backend request timed out: {e}"))
        } else if e.is_decode() {
            Self::invalid_response(format!("Could not decode backend reply: {e}"))
        } else {
            Self::network(format!("Failed to reach backend: {e}"))
        }
    }
}

/// Error classification
///
/// Nothing is retried automatically; the kind only decides how the failure
/// is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// Connection refused, DNS, reset
    Network,
    /// No reply within the configured timeout
    Timeout,
    /// Backend answered `success: false` with a client-error status
    Rejected,
    /// Backend answered `success: false` with a 5xx status
    Server,
    /// Reply was not the expected envelope
    InvalidResponse,
    /// Request failed validation before it was sent
    InvalidInput,
}

impl BackendErrorKind {
    /// Whether the fault lies with what the user submitted
    pub fn is_user_error(self) -> bool {
        matches!(self, Self::Rejected | Self::InvalidInput)
    }
}
