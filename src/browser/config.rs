use std::time::Duration;

/// Default control endpoint of a locally running Poltergeist server
pub const DEFAULT_HOST: &str = "http://127.0.0.1:8510";

/// Options for connecting to the control process and retrying commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Base URL of the control endpoint
    pub host: String,

    /// Per-request HTTP timeout
    pub timeout: Duration,

    /// Maximum attempts per command (values below 1 behave as 1)
    pub max_attempts: u32,

    /// Fixed delay between attempts
    pub wait: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout: Duration::from_secs(10),
            max_attempts: 3,
            wait: Duration::from_secs(2),
        }
    }
}

impl ClientOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the control endpoint base URL
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Builder method: set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method: set the retry ceiling
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Builder method: set the delay between attempts
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Retry ceiling actually used by the dispatcher
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ClientOptions::default();

        assert_eq!(opts.host, "http://127.0.0.1:8510");
        assert_eq!(opts.timeout, Duration::from_secs(10));
        assert_eq!(opts.max_attempts, 3);
        assert_eq!(opts.wait, Duration::from_secs(2));
    }

    #[test]
    fn test_builder() {
        let opts = ClientOptions::new()
            .host("http://localhost:9000")
            .timeout(Duration::from_secs(30))
            .max_attempts(5)
            .wait(Duration::from_millis(250));

        assert_eq!(opts.host, "http://localhost:9000");
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert_eq!(opts.attempts(), 5);
        assert_eq!(opts.wait, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        assert_eq!(ClientOptions::new().max_attempts(0).attempts(), 1);
    }
}
