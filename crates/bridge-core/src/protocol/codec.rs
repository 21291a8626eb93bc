//! Line codec for the newline-delimited JSON protocol.
//!
//! Decoding is two-staged so the relay loop can tell "not JSON at all"
//! (dropped silently, per the wire contract) apart from "JSON that is not a
//! valid command" (reported as an error status line):
//!
//! 1. Parse the line as a `serde_json::Value`. Failure is a
//!    [`RelayError::Parse`].
//! 2. Probe the `"type"` tag, then decode the typed [`Command`]. An absent
//!    tag or payload problem is a [`RelayError::MissingField`]; a tag outside
//!    the closed command set is a [`RelayError::UnknownType`].

use serde_json::Value;
use thiserror::Error;

use crate::protocol::messages::{Command, Outcome};

/// Closed failure taxonomy for the relay.
///
/// The loop branches on the kind: `Parse` never reaches the protocol stream,
/// everything else becomes an `{"status":"error"}` line.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The input line was not valid JSON.
    #[error("malformed JSON: {0}")]
    Parse(String),

    /// Valid JSON that is missing the `type` tag or a required payload field,
    /// carries a field of the wrong kind, or is not an object at all.
    #[error("missing or invalid field: {0}")]
    MissingField(String),

    /// The `type` tag named none of the known commands.
    #[error("unknown command type: {0:?}")]
    UnknownType(String),

    /// The injection layer failed to perform a decoded command.
    #[error("injection failed: {0}")]
    Injection(String),
}

/// Decodes one input line into a [`Command`].
///
/// # Errors
///
/// Returns the [`RelayError`] kind describing why the line is not a valid
/// command; see the module docs for the two-stage classification.
pub fn decode_command(line: &str) -> Result<Command, RelayError> {
    let value: Value = serde_json::from_str(line).map_err(|e| RelayError::Parse(e.to_string()))?;

    // Own the tag before handing `value` to the typed decoder.
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_owned);

    match tag.as_deref() {
        None => Err(RelayError::MissingField("type".to_string())),
        Some(tag) if !Command::TYPE_TAGS.contains(&tag) => {
            Err(RelayError::UnknownType(tag.to_string()))
        }
        Some(_) => {
            serde_json::from_value(value).map_err(|e| RelayError::MissingField(e.to_string()))
        }
    }
}

/// Serializes an [`Outcome`] to its single-line JSON form.
///
/// `Outcome` contains only strings and unit data, so serialization cannot
/// fail; the fallback line keeps the stream well-formed regardless.
pub fn encode_outcome(outcome: &Outcome) -> String {
    serde_json::to_string(outcome).unwrap_or_else(|_| {
        r#"{"status":"error","message":"response serialization failure"}"#.to_string()
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
