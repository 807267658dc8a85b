//! Rule value encoding.
//!
//! Rule documents store each descriptor as a JSON *string* whose content is
//! the descriptor's own JSON (`{"home": "{\"target\":\"home\"}"}`). This is
//! the only place that knows about the double encoding.

use serde_json::Value;

use super::RequestDescriptor;
use crate::error::RewriteError;

/// Encodes `descriptor` into the value stored under its slug in the rule document.
pub fn encode_rule(descriptor: &RequestDescriptor) -> Result<Value, RewriteError> {
    let text = serde_json::to_string(descriptor).map_err(RewriteError::Encode)?;
    Ok(Value::String(text))
}

/// Decodes the document value stored under `slug`.
///
/// An empty JSON array is accepted as an empty descriptor; older writers
/// encoded "no parameters" that way.
pub fn decode_rule(slug: &str, raw: &Value) -> Result<RequestDescriptor, RewriteError> {
    let malformed = |reason: String| RewriteError::Rule {
        slug: slug.to_string(),
        reason,
    };

    let text = match raw {
        Value::String(s) => s,
        other => return Err(malformed(format!("expected a JSON string, found {other}"))),
    };
    let inner: Value = serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?;
    match inner {
        Value::Object(map) => Ok(RequestDescriptor::from(map)),
        Value::Array(items) if items.is_empty() => Ok(RequestDescriptor::new()),
        other => Err(malformed(format!("expected a JSON object, found {other}"))),
    }
}
