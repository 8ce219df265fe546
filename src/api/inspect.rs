use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{
    AnalyzeReport, AnalyzeRequest, ContrastReport, ContrastRequest, LabReport,
};
use crate::services::AuditService;

/// CIE LAB descriptor of a color
#[utoipa::path(
    get,
    path = "/api/lab/{hex}",
    responses(
        (status = 200, description = "LAB values", body = LabReport),
        (status = 400, description = "Invalid color"),
    ),
    params(
        ("hex" = String, Path, description = "Six hex digits without '#', e.g. 'FF8800'"),
    ),
    tag = "Inspection"
)]
pub async fn handle_lab(
    State(audit): State<Arc<AuditService>>,
    Path(hex): Path<String>,
) -> Result<Json<LabReport>, ApiError> {
    Ok(Json(audit.lab(&hex)?))
}

/// WCAG contrast between a foreground and a background color
#[utoipa::path(
    post,
    path = "/api/contrast",
    request_body = ContrastRequest,
    responses(
        (status = 200, description = "Contrast ratio and WCAG flags", body = ContrastReport),
        (status = 400, description = "Invalid color"),
    ),
    tag = "Inspection"
)]
pub async fn handle_contrast(
    State(audit): State<Arc<AuditService>>,
    payload: Result<Json<ContrastRequest>, JsonRejection>,
) -> Result<Json<ContrastReport>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(audit.contrast(&request)?))
}

/// Describe a palette
///
/// Groups colors into hue families, guesses the color scheme, names the
/// palette by size and orders it by luminance.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Palette summary", body = AnalyzeReport),
        (status = 400, description = "Invalid color"),
        (status = 413, description = "Too many colors"),
    ),
    tag = "Inspection"
)]
pub async fn handle_analyze(
    State(audit): State<Arc<AuditService>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeReport>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(audit.analyze(&request)?))
}
