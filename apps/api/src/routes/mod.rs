pub mod health;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};

use crate::cors::OriginPolicy;
use crate::errors::AppError;
use crate::proxy::handlers as proxy;
use crate::resume::handlers as resume;
use crate::state::AppState;

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let policy = OriginPolicy::new(
        state.config.allowed_origins.clone(),
        state.config.allowed_domain.clone(),
    );

    // The CORS layers answer every OPTIONS request on these routes with an empty 200.
    let post_only = Router::new()
        .route(
            "/api/resume",
            post(resume::handle_render_resume).fallback(method_not_allowed),
        )
        .route(
            "/api/download-resume",
            post(resume::handle_download_resume).fallback(method_not_allowed),
        )
        .route(
            "/api/proxy",
            post(proxy::handle_api_proxy).fallback(method_not_allowed),
        )
        .layer(policy.clone().layer(&[Method::POST]));

    let script = Router::new()
        .route(
            "/api/script",
            post(proxy::handle_script_submit)
                .get(proxy::handle_script_fetch)
                .fallback(method_not_allowed),
        )
        .layer(policy.layer(&[Method::GET, Method::POST]));

    Router::new()
        .route("/health", get(health::health_handler))
        .merge(post_only)
        .merge(script)
        .fallback(not_found)
        .with_state(state)
}
