//! Fixtures shared by the handler tests: a fake PDF renderer, an in-process
//! upstream server, and helpers for driving the router.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::Query,
    http::{header, Method, Request},
    response::Response,
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::Url;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::Config;
use crate::pdf::{PdfError, PdfRenderer};
use crate::proxy::UpstreamClient;
use crate::routes::build_router;
use crate::state::AppState;

pub struct FakePdf {
    pub calls: Arc<AtomicUsize>,
    pub last_html: Arc<Mutex<Option<String>>>,
    fail: bool,
}

impl FakePdf {
    pub fn ok() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            last_html: Arc::new(Mutex::new(None)),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }
}

#[async_trait]
impl PdfRenderer for FakePdf {
    async fn render_pdf(&self, html: String) -> Result<Vec<u8>, PdfError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_html.lock().unwrap() = Some(html);
        if self.fail {
            return Err(PdfError::Browser("page crashed".into()));
        }
        Ok(b"%PDF-1.4\n%fake\n".to_vec())
    }

    async fn shutdown(&self) {}
}

pub fn test_state(script_url: Url, api_url: Url, pdf: FakePdf) -> AppState {
    AppState {
        config: Config {
            script_url,
            api_url,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allowed_domain: "onlinefreecv.com".to_string(),
            pdf_pool_size: 1,
            pdf_timeout_secs: 5,
            chrome_executable: None,
            port: 0,
            rust_log: "debug".to_string(),
        },
        upstream: UpstreamClient::new(reqwest::Client::new()),
        pdf: Arc::new(pdf),
    }
}

pub struct FakeUpstream {
    /// POST endpoint echoing `{"received": <body>, "query": <query params>}`.
    pub url: Url,
    pub hits: Arc<AtomicUsize>,
}

/// Starts an upstream on 127.0.0.1 with `/exec` (JSON echo) and `/html` (non-JSON) routes.
pub async fn fake_upstream() -> FakeUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let exec_hits = hits.clone();
    let html_hits = hits.clone();

    let app = Router::new()
        .route(
            "/exec",
            post(
                move |Query(query): Query<HashMap<String, String>>, body: Bytes| {
                    let hits = exec_hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        let received: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
                        Json(json!({ "received": received, "query": query }))
                    }
                },
            ),
        )
        .route(
            "/html",
            post(move || {
                let hits = html_hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    "<html>maintenance</html>"
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstream {
        url: Url::parse(&format!("http://{addr}/exec")).unwrap(),
        hits,
    }
}

/// A URL on a port nothing listens on.
pub async fn closed_upstream_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/exec")).unwrap()
}

pub fn request(method: Method, uri: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn call(state: AppState, request: Request<Body>) -> Response {
    build_router(state).oneshot(request).await.unwrap()
}

pub async fn json_of(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn ada_payload() -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "phone_number": "+44 20 0000 0000",
        "location": "London",
        "current_position": "Analyst",
        "about_me": "First programmer.",
        "themeColor": {
            "name": "Navy",
            "base": "#123",
            "gradient": "linear-gradient(90deg, #123, #456)",
            "blob": "#789"
        },
        "skills": [],
        "experiences": [{
            "title": "Collaborator",
            "company": "Analytical Engine",
            "startDate": "1842",
            "endDate": "1843"
        }],
        "educations": [],
        "references": []
    })
}
