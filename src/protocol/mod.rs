//! Poltergeist wire protocol
//!
//! This module describes what travels over the control connection:
//! - CommandEnvelope: the `{"name", "args"}` request body
//! - Reply: a decoded response body (`response`, `error` or neither)
//! - ErrorKind / ErrorResponse: classification of error envelopes

pub mod envelope;
pub mod kind;

pub use envelope::{CommandEnvelope, Reply};
pub use kind::{ErrorKind, ErrorResponse};

/// Path of the control endpoint, relative to the host
pub const API_PATH: &str = "/api";

/// Error name signalling a stale DOM reference after navigation
pub const OBSOLETE_NODE: &str = "Poltergeist.ObsoleteNode";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obsolete_node_constant_matches_kind() {
        assert_eq!(ErrorKind::from_name(OBSOLETE_NODE), ErrorKind::ObsoleteNode);
        assert_eq!(ErrorKind::ObsoleteNode.wire_name(), Some(OBSOLETE_NODE));
    }
}
