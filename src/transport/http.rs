use crate::error::{BrowserError, Result};
use crate::transport::{Transport, TransportError, TransportResponse};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Blocking HTTP transport bound to one host and timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    host: String,
}

impl HttpTransport {
    /// Build a transport for `host` (e.g. `http://127.0.0.1:8510`)
    pub fn new(host: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BrowserError::ClientBuild(e.to_string()))?;

        Ok(Self { client, host: host.into() })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Join the host and a path with exactly one slash
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.host.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, body: &[u8]) -> std::result::Result<TransportResponse, TransportError> {
        let url = self.url_for(path);
        log::trace!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()
            .map_err(classify_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

/// Connect failures and timeouts before a response mean the control process did not answer
fn classify_error(error: reqwest::Error) -> TransportError {
    if error.is_connect() || error.is_timeout() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Request(error.to_string())
    }
}
