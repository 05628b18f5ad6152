use serde::Serialize;
use serde_json::Value;

/// Request envelope sent to the control endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CommandEnvelope<'a> {
    pub name: &'a str,
    pub args: &'a [Value],
}

impl<'a> CommandEnvelope<'a> {
    pub fn new(name: &'a str, args: &'a [Value]) -> Self {
        Self { name, args }
    }

    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// A decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Body carried a `response` key; holds its value
    Response(Value),
    /// Body carried an `error` key; holds the whole envelope
    Error(Value),
    /// Valid JSON of neither shape
    Unrecognized(Value),
}

impl Reply {
    /// Decode a raw response body. `response` wins over `error` when both are present.
    pub fn decode(body: &[u8]) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(mut value: Value) -> Self {
        if let Some(response) = value.as_object_mut().and_then(|object| object.remove("response")) {
            return Reply::Response(response);
        }
        if value.get("error").is_some() {
            return Reply::Error(value);
        }
        Reply::Unrecognized(value)
    }
}
