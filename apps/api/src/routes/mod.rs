pub mod health;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::analysis::handlers::handle_analyze;
use crate::generation::handlers::{handle_generate_ats_resume, handle_generate_resume};
use crate::resume::handlers::{handle_upload, MAX_UPLOAD_BODY_BYTES};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/resume/resume",
            post(handle_upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES)),
        )
        .route("/api/resume/analyze", post(handle_analyze))
        .route("/api/resume/generate-resume", post(handle_generate_resume))
        .route(
            "/api/resume/generate-ats-resume",
            post(handle_generate_ats_resume),
        )
        .with_state(state)
}

/// CORS for the browser client. With no configured origin every origin is
/// allowed, which is what local development wants.
pub fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer> {
    let Some(origin) = allowed_origin else {
        return Ok(CorsLayer::permissive());
    };

    Ok(CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
