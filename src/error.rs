use crate::protocol::ErrorResponse;
use thiserror::Error;

/// Errors surfaced by [`BrowserClient`](crate::BrowserClient) and its collaborators
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The control process could not be reached on any attempt
    #[error("browser control process is unreachable after {attempts} attempt(s): {reason}")]
    DeadClient { attempts: u32, reason: String },

    /// The browser answered with an error envelope
    #[error("{0}")]
    Browser(ErrorResponse),

    /// The final response could not be understood
    #[error("unexpected response after {attempts} attempt(s): {reason}")]
    ProtocolDecode { attempts: u32, reason: String },

    /// The final request failed for a reason other than connecting
    #[error("request failed after {attempts} attempt(s): {reason}")]
    RequestFailed { attempts: u32, reason: String },

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("failed to encode command: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// A recovery hook (reload, script execution) failed
    #[error("recovery action failed: {0}")]
    Recovery(String),
}

impl BrowserError {
    /// The classified browser error, if the server provided one
    pub fn as_browser_error(&self) -> Option<&ErrorResponse> {
        match self {
            BrowserError::Browser(response) => Some(response),
            _ => None,
        }
    }

    /// Whether the control process is presumed gone
    pub fn is_dead_client(&self) -> bool {
        matches!(self, BrowserError::DeadClient { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BrowserError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_dead_client_display_mentions_attempts() {
        let err = BrowserError::DeadClient { attempts: 3, reason: "connection refused".to_string() };

        assert!(err.is_dead_client());
        assert_eq!(err.to_string(), "browser control process is unreachable after 3 attempt(s): connection refused");
    }

    #[test]
    fn test_browser_error_exposes_payload() {
        let response =
            ErrorResponse::classify(json!({"error": {"name": "Poltergeist.FrameNotFound", "message": "no frame"}}));
        let err = BrowserError::Browser(response);

        let inner = err.as_browser_error().expect("typed error");
        assert_eq!(inner.kind(), ErrorKind::FrameNotFound);
        assert_eq!(inner.message(), Some("no frame"));
        assert!(!err.is_dead_client());
    }
}
