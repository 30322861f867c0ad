//! Chromium-backed PDF rendering.
//!
//! One headless Chromium process is shared by all requests. Each render gets its
//! own page, and at most `max_pages` pages are open at a time; further requests
//! wait for a permit. Every render (including the wait for a permit) runs under a
//! deadline.
//!
//! ```text
//! ┌──────────────────────── BrowserPool ────────────────────────┐
//! │  Semaphore(max_pages)                                       │
//! │  ┌──────────────────── BrowserWorker ─────────────────────┐ │
//! │  │ Chromium (lazy, relaunched if its handler dies)        │ │
//! │  │   ┌────────┐ ┌────────┐                                │ │
//! │  │   │ Page 1 │ │ Page 2 │ ...  closed on every exit path │ │
//! │  │   └────────┘ └────────┘                                │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tempfile::TempDir;
use tokio::sync::{oneshot, Mutex, Semaphore};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use super::{PdfError, PdfRenderer, A4_HEIGHT_IN, A4_WIDTH_IN};

/// Resolves once web fonts and every pending `<img>` have finished (or failed) loading.
const WAIT_FOR_ASSETS_JS: &str = r#"
Promise.all([
  document.fonts ? document.fonts.ready : Promise.resolve(),
  ...Array.from(document.images)
    .filter((img) => !img.complete)
    .map((img) => new Promise((resolve) => { img.onload = img.onerror = resolve; })),
]).then(() => true)
"#;

/// A running Chromium process plus the task draining its CDP event stream.
struct BrowserWorker {
    browser: Browser,
    handler: JoinHandle<()>,
    _profile_dir: TempDir,
}

impl BrowserWorker {
    async fn launch(chrome_executable: Option<&Path>) -> Result<Self, PdfError> {
        info!("Launching headless browser for PDF rendering");

        let profile_dir = tempfile::Builder::new()
            .prefix("resume-api-chromium-")
            .tempdir()
            .map_err(|e| PdfError::Launch(format!("failed to create profile dir: {e}")))?;

        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-setuid-sandbox")
            .arg("--disable-dev-shm-usage")
            .user_data_dir(profile_dir.path());
        if let Some(path) = chrome_executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(PdfError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| PdfError::Launch(e.to_string()))?;

        // The browser only makes progress while its handler is polled
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("Browser handler stopped: {e}");
                    break;
                }
            }
        });

        info!("Browser launched successfully");
        Ok(Self {
            browser,
            handler,
            _profile_dir: profile_dir,
        })
    }

    fn is_alive(&self) -> bool {
        !self.handler.is_finished()
    }

    async fn close(mut self) {
        info!("Closing browser");
        if let Err(e) = self.browser.close().await {
            warn!("Browser close failed: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Waiting for browser exit failed: {e}");
        }
        self.handler.abort();
    }
}

/// Closes its page when dropped, so a cancelled or timed-out render never leaks a tab.
struct PageGuard {
    page: Option<Page>,
}

impl PageGuard {
    fn new(page: Page) -> Self {
        Self { page: Some(page) }
    }

    async fn close(mut self) {
        if let Some(page) = self.page.take() {
            if let Err(e) = page.close().await {
                warn!("Failed to close page: {e}");
            }
        }
    }
}

impl Drop for PageGuard {
    fn drop(&mut self) {
        if let Some(page) = self.page.take() {
            if let Ok(runtime) = tokio::runtime::Handle::try_current() {
                runtime.spawn(async move {
                    if let Err(e) = page.close().await {
                        debug!("Deferred page close failed: {e}");
                    }
                });
            }
        }
    }
}

pub struct BrowserPool {
    worker: Mutex<Option<Arc<BrowserWorker>>>,
    permits: Semaphore,
    max_pages: usize,
    timeout: Duration,
    chrome_executable: Option<PathBuf>,
}

impl BrowserPool {
    /// Creates the pool. Chromium is not started until the first render.
    pub fn new(max_pages: usize, timeout: Duration, chrome_executable: Option<PathBuf>) -> Self {
        let max_pages = max_pages.max(1);
        Self {
            worker: Mutex::new(None),
            permits: Semaphore::new(max_pages),
            max_pages,
            timeout,
            chrome_executable,
        }
    }

    async fn worker(&self) -> Result<Arc<BrowserWorker>, PdfError> {
        let mut slot = self.worker.lock().await;
        if let Some(worker) = slot.as_ref() {
            if worker.is_alive() {
                return Ok(Arc::clone(worker));
            }
            warn!("Browser process is gone, relaunching");
        }

        let worker = Arc::new(BrowserWorker::launch(self.chrome_executable.as_deref()).await?);
        *slot = Some(Arc::clone(&worker));
        Ok(worker)
    }

    async fn render_with_permit(&self, html: String) -> Result<Vec<u8>, PdfError> {
        let _permit = self.permits.acquire().await.map_err(|_| PdfError::ShutDown)?;
        let worker = self.worker().await?;

        let guard = open_page(worker).await?;
        let result = match guard.page.as_ref() {
            Some(page) => print_page(page, &html).await,
            None => Err(PdfError::Browser("page handle missing".to_string())),
        };
        guard.close().await;
        result
    }
}

/// Opens a blank page in its own task. If the caller is cancelled while the target
/// is being created, the task closes the orphaned page itself.
async fn open_page(worker: Arc<BrowserWorker>) -> Result<PageGuard, PdfError> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let created = worker.browser.new_page("about:blank").await;
        if let Err(Ok(page)) = tx.send(created) {
            debug!("Render abandoned during page creation, closing page");
            if let Err(e) = page.close().await {
                warn!("Failed to close abandoned page: {e}");
            }
        }
    });

    let page = rx
        .await
        .map_err(|_| PdfError::Browser("page creation task stopped".to_string()))??;
    Ok(PageGuard::new(page))
}

async fn print_page(page: &Page, html: &str) -> Result<Vec<u8>, PdfError> {
    page.set_content(html).await?;
    page.evaluate(WAIT_FOR_ASSETS_JS).await?;

    let params = PrintToPdfParams {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(0.0),
        margin_bottom: Some(0.0),
        margin_left: Some(0.0),
        margin_right: Some(0.0),
        prefer_css_page_size: Some(true),
        ..Default::default()
    };
    Ok(page.pdf(params).await?)
}

#[async_trait]
impl PdfRenderer for BrowserPool {
    #[instrument(skip(self, html), fields(html_bytes = html.len()))]
    async fn render_pdf(&self, html: String) -> Result<Vec<u8>, PdfError> {
        match tokio::time::timeout(self.timeout, self.render_with_permit(html)).await {
            Ok(Ok(pdf)) => {
                debug!(pdf_bytes = pdf.len(), "PDF rendered");
                Ok(pdf)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(PdfError::Timeout {
                secs: self.timeout.as_secs(),
            }),
        }
    }

    async fn shutdown(&self) {
        // Let in-flight renders finish, then refuse new ones
        let drained = tokio::time::timeout(
            self.timeout,
            self.permits.acquire_many(self.max_pages as u32),
        )
        .await;
        if drained.is_err() {
            warn!("PDF renders still running at shutdown");
        }
        self.permits.close();

        let worker = self.worker.lock().await.take();
        if let Some(worker) = worker {
            match Arc::try_unwrap(worker) {
                Ok(worker) => worker.close().await,
                Err(_) => warn!("Browser still referenced at shutdown; it is killed when released"),
            }
        }
    }
}
