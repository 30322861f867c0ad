use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

/// Parses a raw request body as JSON.
///
/// An empty body or a literal `null` is reported as `missing`; anything that is
/// not valid JSON is a validation error carrying the parser message.
pub fn json_value(body: &Bytes, missing: &str) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(missing.to_string()));
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;
    if value.is_null() {
        return Err(AppError::Validation(missing.to_string()));
    }
    Ok(value)
}

/// Like [`json_value`], then deserializes into `T`.
pub fn json_body<T: DeserializeOwned>(body: &Bytes, missing: &str) -> Result<T, AppError> {
    let value = json_value(body, missing)?;
    serde_json::from_value(value).map_err(|e| AppError::Validation(format!("Invalid user data: {e}")))
}
