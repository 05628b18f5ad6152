use crate::browser::config::ClientOptions;
use crate::browser::hooks::{ENABLE_INPUTS_SCRIPT, NoRecovery, PageController, ScriptRunner, TransportRecovery};
use crate::browser::observer::{AttemptReport, CommandObserver, LogObserver, RecoveryAction};
use crate::error::{BrowserError, Result};
use crate::protocol::{API_PATH, CommandEnvelope, ErrorKind, ErrorResponse, Reply};
use crate::transport::{HttpTransport, Transport, TransportError, TransportResponse};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

/// What a command produced when it did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The `response` payload returned by the browser
    Completed(Value),

    /// The browser reported an obsolete node and the page was reloaded.
    /// The command's effect is unknown; navigation happened mid-command.
    Interrupted,
}

impl CommandOutcome {
    /// The response payload, `None` when interrupted
    pub fn into_response(self) -> Option<Value> {
        match self {
            CommandOutcome::Completed(value) => Some(value),
            CommandOutcome::Interrupted => None,
        }
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, CommandOutcome::Interrupted)
    }
}

/// Why a single attempt did not produce a response
#[derive(Debug, Error)]
enum Failure {
    #[error("{0}")]
    Transport(TransportError),

    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Browser(ErrorResponse),
}

impl Failure {
    /// Terminal form of the failure once no attempts remain
    fn into_error(self, attempts: u32) -> BrowserError {
        match self {
            Failure::Transport(TransportError::Connect(reason)) => BrowserError::DeadClient { attempts, reason },
            Failure::Transport(TransportError::Request(reason)) => BrowserError::RequestFailed { attempts, reason },
            Failure::Decode(reason) => BrowserError::ProtocolDecode { attempts, reason },
            Failure::Browser(response) => BrowserError::Browser(response),
        }
    }
}

/// Outcome of one round trip
#[derive(Debug)]
enum Attempt {
    Success(Value),
    Retry(Failure),
    Interrupt,
}

impl Attempt {
    fn from_response(response: &TransportResponse) -> Self {
        let reply = match Reply::decode(&response.body) {
            Ok(reply) => reply,
            Err(e) => {
                return Attempt::Retry(Failure::Decode(format!("status {}: invalid JSON body: {}", response.status, e)));
            }
        };

        match reply {
            Reply::Response(value) if response.is_ok() => Attempt::Success(value),
            Reply::Response(_) => {
                Attempt::Retry(Failure::Decode(format!("unexpected status {} for a response body", response.status)))
            }
            Reply::Error(envelope) => {
                let error = ErrorResponse::classify(envelope);
                // A stale node on a failed request means the page moved on, possibly because
                // an earlier attempt of this very command succeeded.
                if !response.is_ok() && error.kind() == ErrorKind::ObsoleteNode {
                    Attempt::Interrupt
                } else {
                    Attempt::Retry(Failure::Browser(error))
                }
            }
            Reply::Unrecognized(_) => Attempt::Retry(Failure::Decode(format!(
                "status {}: body has neither 'response' nor 'error'",
                response.status
            ))),
        }
    }
}

/// Client for a Poltergeist control process
pub struct BrowserClient {
    options: ClientOptions,
    transport: Arc<dyn Transport>,
    page: Arc<dyn PageController>,
    scripts: Arc<dyn ScriptRunner>,
    observer: Arc<dyn CommandObserver>,
}

impl BrowserClient {
    /// Create a client talking HTTP to `options.host`
    pub fn new(options: ClientOptions) -> Result<Self> {
        let transport = HttpTransport::new(options.host.clone(), options.timeout)?;
        Ok(Self::with_transport(options, Arc::new(transport)))
    }

    /// Create a client over any transport. Recovery hooks default to [`TransportRecovery`]
    /// and diagnostics to [`LogObserver`].
    pub fn with_transport(options: ClientOptions, transport: Arc<dyn Transport>) -> Self {
        let recovery = Arc::new(TransportRecovery::new(transport.clone()));

        Self { options, transport, page: recovery.clone(), scripts: recovery, observer: Arc::new(LogObserver) }
    }

    /// Replace the hook used after an obsolete node
    pub fn with_page_controller(mut self, page: Arc<dyn PageController>) -> Self {
        self.page = page;
        self
    }

    /// Replace the hook used before retrying a click
    pub fn with_script_runner(mut self, scripts: Arc<dyn ScriptRunner>) -> Self {
        self.scripts = scripts;
        self
    }

    /// Replace the diagnostics sink
    pub fn with_observer(mut self, observer: Arc<dyn CommandObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Disable both recovery hooks
    pub fn without_recovery(self) -> Self {
        let none = Arc::new(NoRecovery);
        self.with_page_controller(none.clone()).with_script_runner(none)
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn host(&self) -> &str {
        &self.options.host
    }

    pub fn timeout(&self) -> Duration {
        self.options.timeout
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// The browser process is managed elsewhere; nothing to restart from the client side
    pub fn restart(&self) -> Result<()> {
        Ok(())
    }

    /// Send a command and wait for its response.
    ///
    /// Transient failures (unreachable endpoint, unusable body, error envelopes) are retried
    /// up to `max_attempts` times with a fixed `wait` in between; the final attempt's
    /// failure is returned. An obsolete node reported by a failed request triggers a page
    /// reload and ends the command with [`CommandOutcome::Interrupted`].
    pub fn command(&self, name: &str, args: &[Value]) -> Result<CommandOutcome> {
        if name.is_empty() {
            return Err(BrowserError::InvalidCommand("command name must not be empty".to_string()));
        }

        let request = CommandEnvelope::new(name, args).to_bytes()?;
        let max_attempts = self.options.attempts();
        let mut attempt = 1;

        loop {
            let (outcome, response) = match self.transport.post_json(API_PATH, &request) {
                Ok(response) => (Attempt::from_response(&response), Some(response)),
                Err(e) => (Attempt::Retry(Failure::Transport(e)), None),
            };

            let failure = match outcome {
                Attempt::Success(value) => return Ok(CommandOutcome::Completed(value)),
                Attempt::Interrupt => {
                    self.reload_page();
                    return Ok(CommandOutcome::Interrupted);
                }
                Attempt::Retry(failure) => failure,
            };

            let request_text = String::from_utf8_lossy(&request);
            let response_text = response.as_ref().map(TransportResponse::body_text);
            self.observer.attempt_failed(&AttemptReport {
                command: name,
                request: &request_text,
                attempt,
                max_attempts,
                status: response.as_ref().map(|r| r.status),
                response: response_text.as_deref(),
                error: &failure.to_string(),
            });

            if attempt >= max_attempts {
                return Err(failure.into_error(attempt));
            }

            if name == "click" {
                self.enable_inputs();
            }

            self.observer.waiting(name, self.options.wait);
            if !self.options.wait.is_zero() {
                std::thread::sleep(self.options.wait);
            }

            attempt += 1;
        }
    }

    /// Like [`command`](Self::command), returning the response payload directly.
    /// `None` means the command was interrupted by a reload, not that it answered `null`.
    pub fn command_value(&self, name: &str, args: &[Value]) -> Result<Option<Value>> {
        Ok(self.command(name, args)?.into_response())
    }

    fn reload_page(&self) {
        let result = self.page.reload();
        self.observer.recovery(RecoveryAction::Reload, result.as_ref().err());
    }

    fn enable_inputs(&self) {
        let result = self.scripts.execute(ENABLE_INPUTS_SCRIPT);
        self.observer.recovery(RecoveryAction::EnableInputs, result.as_ref().err());
    }
}
