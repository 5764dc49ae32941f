//! Field mappings used to create items and compare them against responses.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TestError;

/// Field name to value mapping.
pub type Payload = serde_json::Map<String, Value>;

/// Convert a JSON object into a [`Payload`].
///
/// # Returns
/// - `Ok(Payload)` - `value` was an object
/// - `Err(TestError::InvalidPayload)` - `value` was any other JSON type
pub fn into_payload(value: Value) -> Result<Payload, TestError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(TestError::InvalidPayload {
            field: String::new(),
            reason: format!("expected a JSON object, got {other}"),
        }),
    }
}

/// Read and deserialize a payload field.
pub fn field<T: DeserializeOwned>(payload: &Payload, key: &str) -> Result<T, TestError> {
    let value = payload
        .get(key)
        .ok_or_else(|| TestError::MissingField(key.to_string()))?;

    serde_json::from_value(value.clone()).map_err(|err| TestError::InvalidPayload {
        field: key.to_string(),
        reason: err.to_string(),
    })
}

/// Read a string payload field.
pub fn str_field<'a>(payload: &'a Payload, key: &str) -> Result<&'a str, TestError> {
    payload
        .get(key)
        .ok_or_else(|| TestError::MissingField(key.to_string()))?
        .as_str()
        .ok_or_else(|| TestError::InvalidPayload {
            field: key.to_string(),
            reason: "expected a string".to_string(),
        })
}
