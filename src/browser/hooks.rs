//! Recovery hooks invoked from inside the retry loop
//!
//! Both hooks are best-effort: the dispatcher logs their failures and carries on.

use crate::error::{BrowserError, Result};
use crate::protocol::{API_PATH, CommandEnvelope};
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;

/// Script re-enabling every disabled `<input>` so a retried click can land
pub const ENABLE_INPUTS_SCRIPT: &str = "var inputs = document.getElementsByTagName('input');
for (var i = 0; i < inputs.length; i++) { inputs[i].disabled = false; }";

/// Reloads the current page after a stale node reference
pub trait PageController: Send + Sync {
    fn reload(&self) -> Result<()>;
}

/// Runs JavaScript in the controlled page
pub trait ScriptRunner: Send + Sync {
    fn execute(&self, script: &str) -> Result<()>;
}

/// Default hooks: send `reload` / `execute` once over the client's transport.
///
/// A single attempt, bypassing the retry loop, so recovery never recurses.
#[derive(Clone)]
pub struct TransportRecovery {
    transport: Arc<dyn Transport>,
}

impl TransportRecovery {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn send(&self, name: &str, args: &[Value]) -> Result<()> {
        let body = CommandEnvelope::new(name, args).to_bytes()?;
        let response = self
            .transport
            .post_json(API_PATH, &body)
            .map_err(|e| BrowserError::Recovery(format!("{}: {}", name, e)))?;

        if !response.is_ok() {
            return Err(BrowserError::Recovery(format!(
                "{}: status {}: {}",
                name,
                response.status,
                response.body_text()
            )));
        }

        Ok(())
    }
}

impl PageController for TransportRecovery {
    fn reload(&self) -> Result<()> {
        self.send("reload", &[])
    }
}

impl ScriptRunner for TransportRecovery {
    fn execute(&self, script: &str) -> Result<()> {
        self.send("execute", &[Value::String(script.to_string())])
    }
}

/// Hooks that do nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecovery;

impl PageController for NoRecovery {
    fn reload(&self) -> Result<()> {
        Ok(())
    }
}

impl ScriptRunner for NoRecovery {
    fn execute(&self, _script: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{TransportError, TransportResponse};
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingTransport {
        status: u16,
        bodies: Mutex<Vec<Value>>,
    }

    impl Transport for RecordingTransport {
        fn post_json(&self, path: &str, body: &[u8]) -> std::result::Result<TransportResponse, TransportError> {
            assert_eq!(path, API_PATH);
            self.bodies.lock().unwrap().push(serde_json::from_slice(body).unwrap());
            Ok(TransportResponse::new(self.status, r#"{"response":true}"#))
        }
    }

    #[test]
    fn test_reload_sends_reload_command() {
        let transport = Arc::new(RecordingTransport { status: 200, bodies: Mutex::new(Vec::new()) });
        let recovery = TransportRecovery::new(transport.clone());

        recovery.reload().unwrap();

        assert_eq!(*transport.bodies.lock().unwrap(), vec![json!({"name": "reload", "args": []})]);
    }

    #[test]
    fn test_execute_sends_script() {
        let transport = Arc::new(RecordingTransport { status: 200, bodies: Mutex::new(Vec::new()) });
        let recovery = TransportRecovery::new(transport.clone());

        recovery.execute(ENABLE_INPUTS_SCRIPT).unwrap();

        let bodies = transport.bodies.lock().unwrap();
        assert_eq!(bodies[0]["name"], "execute");
        assert_eq!(bodies[0]["args"][0], ENABLE_INPUTS_SCRIPT);
    }

    #[test]
    fn test_non_200_is_recovery_error() {
        let transport = Arc::new(RecordingTransport { status: 500, bodies: Mutex::new(Vec::new()) });
        let recovery = TransportRecovery::new(transport);

        let err = recovery.reload().unwrap_err();
        assert!(matches!(err, BrowserError::Recovery(_)));
    }

    #[test]
    fn test_no_recovery_is_silent() {
        assert!(NoRecovery.reload().is_ok());
        assert!(NoRecovery.execute("alert(1)").is_ok());
    }
}
