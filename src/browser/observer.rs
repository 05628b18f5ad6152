use crate::error::BrowserError;
use std::time::Duration;

/// Details of an attempt that did not succeed
#[derive(Debug, Clone, Copy)]
pub struct AttemptReport<'a> {
    pub command: &'a str,
    pub request: &'a str,
    pub attempt: u32,
    pub max_attempts: u32,
    pub status: Option<u16>,
    pub response: Option<&'a str>,
    pub error: &'a str,
}

/// Side actions the dispatcher takes while retrying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Page reload after an obsolete node
    Reload,
    /// Re-enable disabled inputs before retrying a click
    EnableInputs,
}

/// Receives the dispatcher's diagnostic events
pub trait CommandObserver: Send + Sync {
    fn attempt_failed(&self, _report: &AttemptReport<'_>) {}

    fn waiting(&self, _command: &str, _wait: Duration) {}

    fn recovery(&self, _action: RecoveryAction, _error: Option<&BrowserError>) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl CommandObserver for LogObserver {
    fn attempt_failed(&self, report: &AttemptReport<'_>) {
        log::warn!(
            "Poltergeist request retry #{}/{} for '{}': {}",
            report.attempt,
            report.max_attempts,
            report.command,
            report.error
        );
        log::debug!("Request: {}", report.request);
        if let Some(status) = report.status {
            log::debug!("Status: {}", status);
        }
        if let Some(response) = report.response {
            log::debug!("Response: {}", response);
        }
    }

    fn waiting(&self, command: &str, wait: Duration) {
        log::info!("Waiting {:?} before retrying '{}'", wait, command);
    }

    fn recovery(&self, action: RecoveryAction, error: Option<&BrowserError>) {
        match (action, error) {
            (RecoveryAction::Reload, None) => log::info!("Obsolete node reported, page reloaded"),
            (RecoveryAction::Reload, Some(e)) => log::warn!("Obsolete node reported, reload failed: {}", e),
            (RecoveryAction::EnableInputs, None) => log::debug!("Executed script to enable disabled input elements"),
            (RecoveryAction::EnableInputs, Some(e)) => log::debug!("Failed to enable disabled input elements: {}", e),
        }
    }
}
