//! Command dispatch against the control process
//!
//! - BrowserClient: sends commands, retries transient failures, classifies errors
//! - ClientOptions: host, timeout and retry policy
//! - PageController / ScriptRunner: recovery hooks used inside the retry loop
//! - CommandObserver: diagnostics sink, logging through `log` by default

pub mod client;
pub mod config;
pub mod hooks;
pub mod observer;

pub use client::{BrowserClient, CommandOutcome};
pub use config::{ClientOptions, DEFAULT_HOST};
pub use hooks::{ENABLE_INPUTS_SCRIPT, NoRecovery, PageController, ScriptRunner, TransportRecovery};
pub use observer::{AttemptReport, CommandObserver, LogObserver, RecoveryAction};
