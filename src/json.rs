//! Typed JSON entry points
//!
//! [`Urn`] already implements serde's traits, but serde funnels every
//! failure into the format's own error type. These helpers keep a malformed
//! document apart from a well-formed string that is not a URN.

use crate::error::JsonError;
use crate::urn::Urn;

/// Decode a URN from a JSON document holding a single string
pub fn from_json_str(json: &str) -> Result<Urn, JsonError> {
    let text: String = serde_json::from_str(json)?;
    Ok(Urn::parse(&text)?)
}

/// Decode a URN from JSON bytes holding a single string
pub fn from_json_slice(json: &[u8]) -> Result<Urn, JsonError> {
    let text: String = serde_json::from_slice(json)?;
    Ok(Urn::parse(&text)?)
}

/// Encode a URN as a JSON string in canonical form
pub fn to_json_string(urn: &Urn) -> String {
    serde_json::Value::String(urn.to_string()).to_string()
}
