//! Axum route handlers for the form proxy endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::extract::json_value;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FetchQuery {
    pub email: Option<String>,
    /// Shared-secret token checked by the script itself. Never logged.
    pub auth: Option<String>,
}

/// POST /api/proxy
pub async fn handle_api_proxy(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let payload = json_value(&body, "Missing request body")?;
    info!("Forwarding form submission to API upstream");
    let response = state
        .upstream
        .post_json(state.config.api_url.clone(), &payload)
        .await?;
    Ok(Json(response))
}

/// POST /api/script
pub async fn handle_script_submit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let payload = json_value(&body, "Missing request body")?;
    info!("Forwarding form submission to script upstream");
    let response = state
        .upstream
        .post_json(state.config.script_url.clone(), &payload)
        .await?;
    Ok(Json(response))
}

/// GET /api/script?email=...&auth=...
///
/// Read-style variant: wraps the query in a `fetch` action envelope.
pub async fn handle_script_fetch(
    State(state): State<AppState>,
    Query(query): Query<FetchQuery>,
) -> Result<Json<Value>, AppError> {
    let email = query
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing email".to_string()))?;

    let mut url = state.config.script_url.clone();
    url.query_pairs_mut().append_pair("email", &email);

    let envelope = json!({
        "auth": query.auth,
        "action": "fetch",
        "data": { "email": email }
    });

    info!("Fetching saved resume data from script upstream");
    let response = state.upstream.post_json(url, &envelope).await?;
    Ok(Json(response))
}
