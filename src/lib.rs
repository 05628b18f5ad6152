//! # poltergeist-client
//!
//! A Rust client for driving a headless browser through the Poltergeist JSON-over-HTTP control protocol.
//!
//! ## Features
//!
//! - **Command Dispatch**: Send named commands with positional JSON arguments to the control endpoint
//! - **Retry Policy**: Fixed-delay retries for unreachable endpoints, unusable bodies and error envelopes
//! - **Typed Errors**: Browser error envelopes classified into a closed set of kinds, payload preserved
//! - **Recovery Hooks**: Page reload on obsolete nodes, input re-enabling before retried clicks
//!
//! ## Wire Protocol
//!
//! Every command is a `POST <host>/api` with body `{"name": "<command>", "args": [...]}`. The browser
//! answers `200 {"response": ...}` on success, or a 4xx/5xx `{"error": {"name": "Poltergeist.*", ...}}`.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use poltergeist_client::{BrowserClient, ClientOptions};
//! use serde_json::json;
//!
//! # fn main() -> poltergeist_client::Result<()> {
//! let client = BrowserClient::new(ClientOptions::new().host("http://127.0.0.1:8510"))?;
//!
//! // Navigate, then read the title
//! client.command("visit", &[json!("https://example.com")])?;
//! // `None` means a reload interrupted the command
//! if let Some(title) = client.command_value("title", &[])? {
//!     println!("Title: {}", title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Handling Browser Errors
//!
//! ```rust,no_run
//! # use poltergeist_client::{BrowserClient, BrowserError, ClientOptions, ErrorKind};
//! # use serde_json::json;
//! # fn main() -> poltergeist_client::Result<()> {
//! # let client = BrowserClient::new(ClientOptions::default())?;
//! match client.command("find", &[json!("css"), json!("#missing[")]) {
//!     Err(BrowserError::Browser(error)) if error.kind() == ErrorKind::InvalidSelector => {
//!         println!("Bad selector: {:?}", error.message());
//!     }
//!     other => println!("{:?}", other),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Client, options, recovery hooks and diagnostics
//! - [`protocol`]: Request/response envelopes and error classification
//! - [`transport`]: The POST capability and its HTTP implementation
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod error;
pub mod protocol;
pub mod transport;

pub use browser::{BrowserClient, ClientOptions, CommandObserver, CommandOutcome, LogObserver, PageController, ScriptRunner};
pub use error::{BrowserError, Result};
pub use protocol::{ErrorKind, ErrorResponse};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
