use serde::Deserialize;
use thiserror::Error;

use crate::constants::{ACTION_FAILED_ERROR, GENERIC_SPIN_ERROR};

/// Failure of a backend call. Variants stay distinguishable even though the
/// spin UI renders every one of them with the same message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpinError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request not authorized")]
    Unauthorized,
    #[error("insufficient balance")]
    InsufficientFunds,
    #[error("backend error {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The backend answered but the local session refused to animate it.
    #[error("spin not started: {0}")]
    Rejected(#[from] SpinRejected),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid gift id: {0:?}")]
    InvalidGiftId(String),
    #[error("multiplier {0} outside 2..=10")]
    MultiplierOutOfRange(u8),
    #[error("missing auth token")]
    MissingToken,
}

/// Local refusal to start a spin. Leaves the session untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpinRejected {
    #[error("a spin is already animating")]
    AlreadyAnimating,
    #[error("no candidate items to spin over")]
    NoCandidates,
    #[error("winning index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("landing does not match the session variant")]
    LandingMismatch,
}

#[derive(Debug, Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl SpinError {
    /// Maps a non-success HTTP response into a typed error.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .error
            .or(parsed.message)
            .unwrap_or_else(|| body.trim().to_string());

        let insufficient = parsed.code.as_deref() == Some("insufficient_funds")
            || message.to_ascii_lowercase().contains("insufficient");

        match status {
            401 | 403 => SpinError::Unauthorized,
            402 => SpinError::InsufficientFunds,
            400 | 409 | 422 if insufficient => SpinError::InsufficientFunds,
            _ => SpinError::Backend { status, message },
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            SpinError::Network(_) => "network",
            SpinError::Unauthorized => "unauthorized",
            SpinError::InsufficientFunds => "insufficient_funds",
            SpinError::Backend { .. } => "backend",
            SpinError::Malformed(_) => "malformed",
            SpinError::Invalid(_) => "invalid_request",
            SpinError::Rejected(_) => "spin_rejected",
        }
    }

    /// Text shown in the toast when a spin cannot be started.
    pub fn user_message(&self) -> &'static str {
        GENERIC_SPIN_ERROR
    }

    /// Text shown when a result action (sell/withdraw) fails.
    pub fn action_message(&self) -> &'static str {
        ACTION_FAILED_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(SpinError::from_response(401, ""), SpinError::Unauthorized);
        assert_eq!(SpinError::from_response(402, "{}"), SpinError::InsufficientFunds);
        assert_eq!(
            SpinError::from_response(400, r#"{"error":"Insufficient balance"}"#),
            SpinError::InsufficientFunds
        );
        assert_eq!(
            SpinError::from_response(400, r#"{"code":"insufficient_funds"}"#),
            SpinError::InsufficientFunds
        );
        assert_eq!(
            SpinError::from_response(500, "upstream down"),
            SpinError::Backend { status: 500, message: "upstream down".into() }
        );
    }

    #[test]
    fn test_causes_distinct_but_message_generic() {
        let errors = [
            SpinError::Network("timeout".into()),
            SpinError::Unauthorized,
            SpinError::InsufficientFunds,
            SpinError::Malformed("gifts".into()),
        ];
        let codes: Vec<_> = errors.iter().map(SpinError::code).collect();
        assert_eq!(codes, vec!["network", "unauthorized", "insufficient_funds", "malformed"]);
        assert!(errors.iter().all(|e| e.user_message() == GENERIC_SPIN_ERROR));
    }

    #[test]
    fn test_validation_converts() {
        let err: SpinError = ValidationError::MissingToken.into();
        assert_eq!(err.code(), "invalid_request");
        let err: SpinError = SpinRejected::LandingMismatch.into();
        assert_eq!(err.code(), "spin_rejected");
        assert_eq!(err.user_message(), GENERIC_SPIN_ERROR);
    }
}
