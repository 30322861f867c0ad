use std::sync::Arc;

use crate::config::Config;
use crate::pdf::PdfRenderer;
use crate::proxy::UpstreamClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every request is handled independently.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
    /// Chromium-backed `BrowserPool` in production; swapped for a fake in tests.
    pub pdf: Arc<dyn PdfRenderer>,
}
