use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use reqwest::Url;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_ALLOWED_DOMAIN: &str = "onlinefreecv.com";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spreadsheet-backed script endpoint (`/api/script`).
    pub script_url: Url,
    /// Generic proxy upstream (`/api/proxy`).
    pub api_url: Url,
    pub allowed_origins: Vec<String>,
    pub allowed_domain: String,
    /// Maximum number of PDFs rendered concurrently.
    pub pdf_pool_size: usize,
    pub pdf_timeout_secs: u64,
    pub chrome_executable: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            script_url: parse_upstream_url("GOOGLE_SCRIPT_URL", &require_env("GOOGLE_SCRIPT_URL")?)?,
            api_url: parse_upstream_url("API_URL", &require_env("API_URL")?)?,
            allowed_origins: parse_origin_list(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            allowed_domain: std::env::var("ALLOWED_DOMAIN")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_DOMAIN.to_string())
                .trim()
                .to_ascii_lowercase(),
            pdf_pool_size: parse_positive("PDF_POOL_SIZE", 2)?,
            pdf_timeout_secs: parse_positive("PDF_TIMEOUT_SECS", 30)? as u64,
            chrome_executable: std::env::var_os("CHROME_EXECUTABLE").map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_upstream_url(key: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("'{key}' is not a valid URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("'{key}' must be an http or https URL, got scheme '{}'", url.scheme());
    }
    Ok(url)
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive(key: &str, default: usize) -> Result<usize> {
    let value = match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("'{key}' must be a positive integer"))?,
        Err(_) => default,
    };
    if value == 0 {
        bail!("'{key}' must be at least 1");
    }
    Ok(value)
}
