//! Transport layer for the control endpoint
//!
//! The dispatcher only needs one capability from the network: POST a JSON body to a path
//! and get back the status and body, whatever the status is. [`Transport`] captures that
//! capability; [`HttpTransport`] implements it over HTTP.

pub mod http;

pub use http::HttpTransport;

use thiserror::Error;

/// Raw answer from the control endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body bytes
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Body as text, lossy, for logging
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Failure to obtain any HTTP response
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The endpoint could not be reached (refused, timed out before answering)
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other failure while sending the request or reading the answer
    #[error("request failed: {0}")]
    Request(String),
}

/// Capability to POST JSON to the control endpoint
pub trait Transport: Send + Sync {
    /// POST `body` to `path`. Non-2xx statuses are returned as `Ok`.
    fn post_json(&self, path: &str, body: &[u8]) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_response_helpers() {
        let response = TransportResponse::new(200, r#"{"response":true}"#);
        assert!(response.is_ok());
        assert_eq!(response.body_text(), r#"{"response":true}"#);

        let response = TransportResponse::new(500, Vec::new());
        assert!(!response.is_ok());
        assert_eq!(response.body_text(), "");
    }

    #[test]
    fn test_transport_error_display() {
        assert_eq!(TransportError::Connect("refused".to_string()).to_string(), "connection failed: refused");
        assert_eq!(TransportError::Request("reset".to_string()).to_string(), "request failed: reset");
    }
}
