use serde_json::Value;
use std::fmt;

/// Closed set of error kinds reported by the Poltergeist control process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    JavascriptError,
    FrameNotFound,
    InvalidSelector,
    StatusFailError,
    NoSuchWindowError,
    ObsoleteNode,
    /// Any error name without a dedicated kind
    Browser,
}

impl ErrorKind {
    /// Every kind with a dedicated wire name
    pub const NAMED: [ErrorKind; 6] = [
        ErrorKind::JavascriptError,
        ErrorKind::FrameNotFound,
        ErrorKind::InvalidSelector,
        ErrorKind::StatusFailError,
        ErrorKind::NoSuchWindowError,
        ErrorKind::ObsoleteNode,
    ];

    /// Map a wire error name to its kind. Unknown names fall back to [`ErrorKind::Browser`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Poltergeist.JavascriptError" => ErrorKind::JavascriptError,
            "Poltergeist.FrameNotFound" => ErrorKind::FrameNotFound,
            "Poltergeist.InvalidSelector" => ErrorKind::InvalidSelector,
            "Poltergeist.StatusFailError" => ErrorKind::StatusFailError,
            "Poltergeist.NoSuchWindowError" => ErrorKind::NoSuchWindowError,
            "Poltergeist.ObsoleteNode" => ErrorKind::ObsoleteNode,
            _ => ErrorKind::Browser,
        }
    }

    /// Wire name for the kind, `None` for the generic fallback
    pub fn wire_name(self) -> Option<&'static str> {
        match self {
            ErrorKind::JavascriptError => Some("Poltergeist.JavascriptError"),
            ErrorKind::FrameNotFound => Some("Poltergeist.FrameNotFound"),
            ErrorKind::InvalidSelector => Some("Poltergeist.InvalidSelector"),
            ErrorKind::StatusFailError => Some("Poltergeist.StatusFailError"),
            ErrorKind::NoSuchWindowError => Some("Poltergeist.NoSuchWindowError"),
            ErrorKind::ObsoleteNode => Some("Poltergeist.ObsoleteNode"),
            ErrorKind::Browser => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::JavascriptError => "JavaScript error",
            ErrorKind::FrameNotFound => "frame not found",
            ErrorKind::InvalidSelector => "invalid selector",
            ErrorKind::StatusFailError => "status fail error",
            ErrorKind::NoSuchWindowError => "no such window",
            ErrorKind::ObsoleteNode => "obsolete node",
            ErrorKind::Browser => "browser error",
        };
        f.write_str(label)
    }
}

/// A classified error envelope.
///
/// Keeps the complete response envelope (`{"error": {...}}`) so callers can inspect
/// fields beyond the name, such as a JavaScript stack trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    kind: ErrorKind,
    payload: Value,
}

impl ErrorResponse {
    /// Classify a decoded response envelope. Never fails.
    pub fn classify(payload: Value) -> Self {
        let kind = payload
            .get("error")
            .and_then(|error| error.get("name"))
            .and_then(Value::as_str)
            .map(ErrorKind::from_name)
            .unwrap_or(ErrorKind::Browser);

        Self { kind, payload }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The full envelope as received
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn into_payload(self) -> Value {
        self.payload
    }

    /// The `error.name` reported by the server
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// The `error.message` reported by the server
    pub fn message(&self) -> Option<&str> {
        self.field("message").and_then(Value::as_str)
    }

    /// Any field of the inner `error` object
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get("error").and_then(|error| error.get(key))
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(name) = self.name() {
            write!(f, " ({})", name)?;
        }
        match self.message() {
            Some(message) => write!(f, ": {}", message),
            None => write!(f, ": {}", self.payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_names_round_trip_through_wire_name() {
        for kind in ErrorKind::NAMED {
            let name = kind.wire_name().expect("named kind");
            assert_eq!(ErrorKind::from_name(name), kind);
        }
        assert_eq!(ErrorKind::Browser.wire_name(), None);
    }

    #[test]
    fn test_unknown_name_is_generic() {
        assert_eq!(ErrorKind::from_name("Something.Unmapped"), ErrorKind::Browser);
        assert_eq!(ErrorKind::from_name("poltergeist.invalidselector"), ErrorKind::Browser);
        assert_eq!(ErrorKind::from_name(""), ErrorKind::Browser);
    }

    #[test]
    fn test_classify_keeps_full_payload() {
        let envelope = json!({
            "error": {
                "name": "Poltergeist.JavascriptError",
                "args": [{"message": "boom", "stack": "at foo.js:1"}]
            }
        });

        let response = ErrorResponse::classify(envelope.clone());
        assert_eq!(response.kind(), ErrorKind::JavascriptError);
        assert_eq!(response.payload(), &envelope);
        assert_eq!(response.field("args").and_then(|a| a[0]["stack"].as_str()), Some("at foo.js:1"));
    }

    #[test]
    fn test_classify_unmapped_preserves_payload() {
        let envelope = json!({"error": {"name": "Something.Unmapped", "detail": 42}});

        let response = ErrorResponse::classify(envelope.clone());
        assert_eq!(response.kind(), ErrorKind::Browser);
        assert_eq!(response.name(), Some("Something.Unmapped"));
        assert_eq!(response.into_payload(), envelope);
    }

    #[test]
    fn test_classify_without_name() {
        let response = ErrorResponse::classify(json!({"error": "plain string"}));
        assert_eq!(response.kind(), ErrorKind::Browser);
        assert_eq!(response.name(), None);
    }

    #[test]
    fn test_display_uses_message() {
        let response =
            ErrorResponse::classify(json!({"error": {"name": "Poltergeist.InvalidSelector", "message": "bad selector"}}));
        assert_eq!(response.to_string(), "invalid selector (Poltergeist.InvalidSelector): bad selector");
    }
}
