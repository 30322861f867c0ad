use anyhow::{Context, Result};
use axum::http::HeaderValue;

use crate::models::UserData;

/// `{first_name}_{last_name}_resume.pdf`
pub fn pdf_filename(user: &UserData) -> String {
    format!("{}_{}_resume.pdf", user.first_name, user.last_name)
}

/// Builds an `attachment` Content-Disposition for `filename`.
///
/// The quoted `filename` is restricted to printable ASCII without `"` or `\`;
/// other characters become `_`. Non-ASCII names also get an RFC 5987
/// `filename*` parameter with the exact UTF-8 name.
pub fn content_disposition(filename: &str) -> Result<HeaderValue> {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let value = if filename.is_ascii() {
        format!("attachment; filename=\"{fallback}\"")
    } else {
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            urlencoding::encode(filename)
        )
    };

    HeaderValue::from_str(&value).context("Content-Disposition header is not valid")
}
