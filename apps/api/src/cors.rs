use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Which browser origins may call the API.
///
/// An origin is allowed when it is in the explicit list, or when it is
/// `https://<domain>` or `https://<label>.<domain>` for a single subdomain label.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed_origins: Vec<String>,
    domain: String,
}

impl OriginPolicy {
    pub fn new(allowed_origins: Vec<String>, domain: impl Into<String>) -> Self {
        Self {
            allowed_origins,
            domain: domain.into(),
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        if self.allowed_origins.iter().any(|o| o == origin) {
            return true;
        }
        if self.domain.is_empty() {
            return false;
        }

        let Some(host) = origin.strip_prefix("https://") else {
            return false;
        };
        let host = host.to_ascii_lowercase();
        if host == self.domain {
            return true;
        }
        match host.strip_suffix(self.domain.as_str()) {
            Some(prefix) => prefix
                .strip_suffix('.')
                .is_some_and(|label| {
                    !label.is_empty()
                        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                }),
            None => false,
        }
    }

    /// A CORS layer for routes serving `methods`. Matching origins are echoed back;
    /// others get no `Access-Control-Allow-Origin` header.
    pub fn layer(self, methods: &[Method]) -> CorsLayer {
        let policy = Arc::new(self);
        let mut allowed = methods.to_vec();
        allowed.push(Method::OPTIONS);

        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _parts| {
                    origin.to_str().map(|o| policy.allows(o)).unwrap_or(false)
                },
            ))
            .allow_methods(allowed)
            .allow_headers([header::CONTENT_TYPE])
    }
}
