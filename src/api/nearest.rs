use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{NearestReport, NearestRequest};
use crate::services::AuditService;

/// Find the closest candidate color
///
/// Distances are CIEDE2000 measured from the target to each candidate. On a
/// tie the earliest candidate wins. With no candidates both `color` and
/// `distance` are `null`.
#[utoipa::path(
    post,
    path = "/api/nearest",
    request_body = NearestRequest,
    responses(
        (status = 200, description = "Closest candidate", body = NearestReport),
        (status = 400, description = "Invalid color"),
        (status = 413, description = "Too many candidates"),
    ),
    tag = "Clustering"
)]
pub async fn handle_nearest(
    State(audit): State<Arc<AuditService>>,
    payload: Result<Json<NearestRequest>, JsonRejection>,
) -> Result<Json<NearestReport>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(audit.nearest(&request)?))
}
