//! Assertions shared by every case.
//!
//! Items and payloads are compared loosely: both sides are reduced to a string form before
//! comparison, which absorbs the difference between typed model values and their wire form
//! (integer ids vs. path strings, uuids vs. text columns, timestamps vs. ISO strings).
//! The reduction does not keep `""`, `null` and the literal text `"None"` apart in every
//! direction, so a loose match is not proof that the types agree.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::{client::ApiResponse, error::TestError, payload::Payload};

/// Reduce a JSON value to its loose string form.
///
/// Strings yield their contents, `null` yields `None`, booleans `True`/`False`, numbers
/// their decimal text; arrays and objects their compact JSON.
pub fn loose_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Serialize an item and return its attributes.
///
/// # Returns
/// - `Ok(Payload)` - Attribute name to value mapping
/// - `Err(TestError::InvalidPayload)` - The item does not serialize to a JSON object
pub fn item_fields<T: Serialize + ?Sized>(item: &T) -> Result<Payload, TestError> {
    match serde_json::to_value(item)? {
        Value::Object(fields) => Ok(fields),
        other => Err(TestError::InvalidPayload {
            field: String::new(),
            reason: format!("item does not serialize to an object: {other}"),
        }),
    }
}

/// Assert that every key of `data` loosely equals the item's attribute of the same name.
///
/// Keys of the item that are absent from `data` are not checked.
pub fn assert_equal_item<T: Serialize + ?Sized>(item: &T, data: &Payload) -> Result<(), TestError> {
    let fields = item_fields(item)?;

    for (key, expected) in data {
        let actual = fields
            .get(key)
            .ok_or_else(|| TestError::MissingField(key.clone()))?;

        let expected = loose_string(expected);
        let actual = loose_string(actual);
        if expected != actual {
            return Err(TestError::FieldMismatch {
                field: key.clone(),
                expected,
                actual,
            });
        }
    }

    Ok(())
}

/// Assert that none of `fields` on the item took the value `payload` tried to write.
///
/// # Arguments
/// - `item` - Item re-fetched after the update
/// - `payload` - Update payload that attempted to change every field in `fields`
/// - `fields` - Read-only field names
///
/// # Returns
/// - `Ok(())` - Every read-only field kept a value other than the attempted one
/// - `Err(TestError::ReadonlyFieldChanged)` - The update was applied to a read-only field
/// - `Err(TestError::MissingField)` - The item has no attribute of that name
/// - `Err(TestError::InvalidPayload)` - The update payload does not attempt to change the field
pub fn assert_readonly_unchanged<T, S>(
    item: &T,
    payload: &Payload,
    fields: &[S],
) -> Result<(), TestError>
where
    T: Serialize + ?Sized,
    S: AsRef<str>,
{
    let item = item_fields(item)?;

    for field in fields {
        let field = field.as_ref();
        let attempted = payload
            .get(field)
            .ok_or_else(|| TestError::InvalidPayload {
                field: field.to_string(),
                reason: "read-only field absent from the update payload".to_string(),
            })?;
        let stored = item
            .get(field)
            .ok_or_else(|| TestError::MissingField(field.to_string()))?;

        let attempted = loose_string(attempted);
        if loose_string(stored) == attempted {
            return Err(TestError::ReadonlyFieldChanged {
                field: field.to_string(),
                value: attempted,
            });
        }
    }

    Ok(())
}

/// Assert the response carries `expected` status.
///
/// # Returns
/// - `Ok(())` - Status matches
/// - `Err(TestError::UnexpectedStatus)` - Status differs; carries method, url and body
pub fn expect_status(response: &ApiResponse, expected: StatusCode) -> Result<(), TestError> {
    if response.status != expected {
        return Err(TestError::UnexpectedStatus {
            method: response.method.clone(),
            url: response.url.clone(),
            expected,
            actual: response.status,
            body: response.text(),
        });
    }

    Ok(())
}

/// Assert the number of stored items.
///
/// # Arguments
/// - `expected` - Number of items the case expects to exist
/// - `actual` - Number of items actually found, usually `ModelStore::all().len()`
pub fn expect_count(expected: usize, actual: usize) -> Result<(), TestError> {
    if expected != actual {
        return Err(TestError::UnexpectedCount { expected, actual });
    }

    Ok(())
}
