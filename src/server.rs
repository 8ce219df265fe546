//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api;
use crate::models::{self, AppConfig};
use crate::services::AuditService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub audit: Arc<AuditService>,
}

impl FromRef<AppState> for Arc<AuditService> {
    fn from_ref(state: &AppState) -> Self {
        state.audit.clone()
    }
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState {
        audit: Arc::new(AuditService::new(config.clustering)),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/cluster", post(api::handle_cluster))
        .route("/api/nearest", post(api::handle_nearest))
        .route("/api/lab/:hex", get(api::handle_lab))
        .route("/api/contrast", post(api::handle_contrast))
        .route("/api/analyze", post(api::handle_analyze))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Colorcop API",
        description = "Perceptual color clustering for design-system audits",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_cluster,
        api::handle_nearest,
        api::handle_lab,
        api::handle_contrast,
        api::handle_analyze,
    ),
    components(schemas(
        models::ClusterRequest,
        models::ClusterReport,
        models::ClusterView,
        models::SkippedColor,
        models::NearestRequest,
        models::NearestReport,
        models::LabReport,
        models::ContrastRequest,
        models::ContrastReport,
        models::AnalyzeRequest,
        models::AnalyzeReport,
        models::HueGroupView,
    )),
    tags(
        (name = "Clustering", description = "Grouping and matching similar colors"),
        (name = "Inspection", description = "Single-color and palette diagnostics")
    )
)]
pub struct ApiDoc;
