use serde::de::{Error as _, Unexpected};
use serde_json::Value;
use tracing::debug;

use crate::error::ProbeError;
use crate::types::StatusRecord;

/// Decodes the status document. Only a JSON object is accepted; when a key
/// repeats, the last occurrence wins.
pub fn decode_status(body: &[u8]) -> Result<StatusRecord, ProbeError> {
    let document: Value = serde_json::from_slice(body)?;
    let fields = match document {
        Value::Object(fields) => fields,
        other => {
            let found = match &other {
                Value::Array(_) => Unexpected::Seq,
                Value::String(s) => Unexpected::Str(s),
                Value::Bool(b) => Unexpected::Bool(*b),
                Value::Null => Unexpected::Unit,
                _ => Unexpected::Other("number"),
            };
            return Err(serde_json::Error::invalid_type(found, &"a JSON object").into());
        }
    };

    let record: StatusRecord = serde_json::from_value(Value::Object(fields))?;
    debug!(
        status = %record.status,
        wp_version = %record.wp_version,
        php_version = %record.php_version,
        "decoded status document"
    );
    Ok(record)
}
