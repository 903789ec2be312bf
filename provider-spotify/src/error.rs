//! Error types for the Spotify provider

use serde::Deserialize;
use thiserror::Error;

use crate::types::StatusMessage;

/// Spotify provider errors
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// Arguments rejected locally; no request was sent
    #[error("{message}")]
    Validation { message: String },

    /// The API answered with a status the operation does not accept
    #[error("Spotify API error (status {status}): {body}")]
    Remote { status: u16, body: String },

    /// A successful response body could not be decoded
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Transport failure (DNS, TLS, timeout, refused connection)
    #[error(transparent)]
    Transport(#[from] bridge_traits::error::BridgeError),
}

/// Result type for Spotify operations
pub type Result<T> = std::result::Result<T, SpotifyError>;

/// Error envelope returned by the Web API: `{"error": {"status", "message"}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorObject,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    message: String,
}

impl SpotifyError {
    pub fn validation(message: impl Into<String>) -> Self {
        SpotifyError::Validation {
            message: message.into(),
        }
    }

    /// HTTP status associated with the failure.
    ///
    /// Validation failures report `400`; transport and parse failures have
    /// no status.
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::Validation { .. } => Some(400),
            SpotifyError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` if the failure happened before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, SpotifyError::Validation { .. })
    }

    /// Message from the API error envelope, when the body carries one.
    pub fn api_message(&self) -> Option<String> {
        match self {
            SpotifyError::Remote { body, .. } => serde_json::from_str::<ErrorEnvelope>(body)
                .ok()
                .map(|envelope| envelope.error.message),
            _ => None,
        }
    }

    /// Renders validation and remote failures as a `{status, message}` record.
    ///
    /// Remote failures use the envelope message when present and the raw
    /// body otherwise.
    pub fn status_message(&self) -> Option<StatusMessage> {
        match self {
            SpotifyError::Validation { message } => Some(StatusMessage::new(400, message.clone())),
            SpotifyError::Remote { status, body } => Some(StatusMessage::new(
                *status,
                self.api_message().unwrap_or_else(|| body.clone()),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::BridgeError;

    #[test]
    fn test_validation_reports_400() {
        let err = SpotifyError::validation("You passed in no album IDs in the array.");

        assert_eq!(err.status(), Some(400));
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "You passed in no album IDs in the array.");
        assert_eq!(
            err.status_message(),
            Some(StatusMessage::new(
                400,
                "You passed in no album IDs in the array."
            ))
        );
    }

    #[test]
    fn test_remote_api_message() {
        let err = SpotifyError::Remote {
            status: 401,
            body: r#"{"error":{"status":401,"message":"The access token expired"}}"#.to_string(),
        };

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.api_message().as_deref(), Some("The access token expired"));
        assert_eq!(
            err.status_message(),
            Some(StatusMessage::new(401, "The access token expired"))
        );
    }

    #[test]
    fn test_remote_without_envelope_keeps_body() {
        let err = SpotifyError::Remote {
            status: 502,
            body: "Bad Gateway".to_string(),
        };

        assert_eq!(err.api_message(), None);
        assert_eq!(
            err.status_message(),
            Some(StatusMessage::new(502, "Bad Gateway"))
        );
    }

    #[test]
    fn test_transport_has_no_status() {
        let err: SpotifyError = BridgeError::OperationFailed("timed out".to_string()).into();

        assert_eq!(err.status(), None);
        assert!(!err.is_validation());
        assert!(err.status_message().is_none());
        assert!(err.to_string().contains("timed out"));
    }
}
