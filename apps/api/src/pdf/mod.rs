// HTML → PDF rasterization.
// Handlers depend on the PdfRenderer trait only; BrowserPool is the Chromium-backed implementation.

pub mod pool;

use async_trait::async_trait;
use thiserror::Error;

pub use pool::BrowserPool;

/// A4 paper size in inches, as expected by the DevTools print API.
pub const A4_WIDTH_IN: f64 = 8.27;
pub const A4_HEIGHT_IN: f64 = 11.69;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("browser error: {0}")]
    Browser(String),

    #[error("PDF rendering timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("renderer is shut down")]
    ShutDown,
}

impl From<chromiumoxide::error::CdpError> for PdfError {
    fn from(e: chromiumoxide::error::CdpError) -> Self {
        PdfError::Browser(e.to_string())
    }
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Renders a complete HTML document to A4 PDF bytes.
    async fn render_pdf(&self, html: String) -> Result<Vec<u8>, PdfError>;

    /// Releases any browser processes. Further renders fail with `PdfError::ShutDown`.
    async fn shutdown(&self);
}
