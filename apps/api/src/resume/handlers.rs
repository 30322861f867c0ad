//! Axum route handlers for resume rendering.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{json_body, json_value};
use crate::models::UserData;
use crate::render::ResumeTemplate;
use crate::resume::attachment::{content_disposition, pdf_filename};
use crate::state::AppState;

const TEMPLATE_FIELD: &str = "resume_template";

/// POST /api/resume
///
/// Body: `{"resume_template": "skyline", ...UserData}`.
pub async fn handle_render_resume(body: Bytes) -> Result<Html<String>, AppError> {
    let value = json_value(&body, "Missing template or userData")?;
    let Value::Object(mut fields) = value else {
        return Err(AppError::Validation("Invalid user data".to_string()));
    };

    let selector = match fields.remove(TEMPLATE_FIELD) {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => return Err(AppError::Validation("Missing template or userData".to_string())),
    };
    let template = ResumeTemplate::from_selector(&selector)
        .ok_or_else(|| AppError::Validation("Unsupported template".to_string()))?;

    let user: UserData = serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::Validation(format!("Invalid user data: {e}")))?;

    info!(template = %selector, "Rendering resume HTML");
    Ok(Html(template.render(&user)))
}

/// POST /api/download-resume
///
/// Body: `UserData`. Responds with the Skyline resume as an A4 PDF attachment.
pub async fn handle_download_resume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let user: UserData = json_body(&body, "Missing user data")?;

    let html = ResumeTemplate::Skyline.render(&user);
    let pdf = state.pdf.render_pdf(html).await?;
    info!(pdf_bytes = pdf.len(), "Resume PDF generated");

    let disposition = content_disposition(&pdf_filename(&user))?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::http::{header, Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::test_support::{
        ada_payload, call, fake_upstream, json_of, request, test_state, FakePdf,
    };

    async fn state_with(pdf: FakePdf) -> crate::state::AppState {
        let upstream = fake_upstream().await;
        test_state(upstream.url.clone(), upstream.url, pdf)
    }

    #[tokio::test]
    async fn test_render_resume_returns_html() {
        let mut body = ada_payload();
        body["resume_template"] = json!("skyline");

        let response = call(
            state_with(FakePdf::ok()).await,
            request(Method::POST, "/api/resume", Some(&body)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<title>Ada Lovelace - Resume</title>"));
        assert!(!html.contains("resume_template"));
    }

    #[tokio::test]
    async fn test_render_resume_missing_selector() {
        let response = call(
            state_with(FakePdf::ok()).await,
            request(Method::POST, "/api/resume", Some(&ada_payload())),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_of(response).await["error"]["message"],
            "Missing template or userData"
        );
    }

    #[tokio::test]
    async fn test_render_resume_unsupported_template() {
        let mut body = ada_payload();
        body["resume_template"] = json!("modern");

        let response = call(
            state_with(FakePdf::ok()).await,
            request(Method::POST, "/api/resume", Some(&body)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_of(response).await["error"]["message"], "Unsupported template");
    }

    #[tokio::test]
    async fn test_render_resume_missing_body() {
        let response = call(
            state_with(FakePdf::ok()).await,
            request(Method::POST, "/api/resume", None),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_render_resume_without_theme_is_client_error() {
        let mut body = ada_payload();
        body["resume_template"] = json!("skyline");
        body.as_object_mut().unwrap().remove("themeColor");

        let response = call(
            state_with(FakePdf::ok()).await,
            request(Method::POST, "/api/resume", Some(&body)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let message = json_of(response).await["error"]["message"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(message.contains("themeColor"));
    }

    #[tokio::test]
    async fn test_render_resume_accepts_null_contact_fields() {
        let mut body = ada_payload();
        body["resume_template"] = json!("skyline");
        body["phone_number"] = json!(null);
        body["experiences"] = json!([{"title": "Engineer", "startDate": "2020", "isPresent": null}]);

        let response = call(
            state_with(FakePdf::ok()).await,
            request(Method::POST, "/api/resume", Some(&body)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<strong>Phone:</strong> </li>"));
        assert!(html.contains("2020 – </span>"));
    }

    #[tokio::test]
    async fn test_render_resume_put_is_method_not_allowed() {
        let response = call(
            state_with(FakePdf::ok()).await,
            request(Method::PUT, "/api/resume", Some(&ada_payload())),
        )
        .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json_of(response).await["error"]["code"], "METHOD_NOT_ALLOWED");
    }

    #[tokio::test]
    async fn test_download_returns_pdf_attachment() {
        let pdf = FakePdf::ok();
        let calls = pdf.calls.clone();
        let last_html = pdf.last_html.clone();

        let response = call(
            state_with(pdf).await,
            request(Method::POST, "/api/download-resume", Some(&ada_payload())),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Ada_Lovelace_resume.pdf\""
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(last_html
            .lock()
            .unwrap()
            .as_deref()
            .unwrap()
            .contains("<title>Ada Lovelace - Resume</title>"));
    }

    #[tokio::test]
    async fn test_download_missing_body_never_renders() {
        let pdf = FakePdf::ok();
        let calls = pdf.calls.clone();

        let response = call(
            state_with(pdf).await,
            request(Method::POST, "/api/download-resume", None),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_of(response).await["error"]["message"], "Missing user data");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_download_render_failure_is_generic_server_error() {
        let response = call(
            state_with(FakePdf::failing()).await,
            request(Method::POST, "/api/download-resume", Some(&ada_payload())),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let value = json_of(response).await;
        assert_eq!(value["error"]["message"], "Failed to generate PDF");
        assert!(value["error"].get("details").is_none());
    }
}
