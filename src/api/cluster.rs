use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{ClusterReport, ClusterRequest};
use crate::services::AuditService;

/// Group perceptually similar colors
///
/// Colors are clustered greedily in request order: the first unassigned color
/// seeds a cluster and absorbs every later unassigned color within the
/// CIEDE2000 threshold. Clusters are returned largest first unless the
/// server is configured with `order: input`.
#[utoipa::path(
    post,
    path = "/api/cluster",
    request_body = ClusterRequest,
    responses(
        (status = 200, description = "Colors clustered", body = ClusterReport),
        (status = 400, description = "Invalid color or threshold"),
        (status = 413, description = "Too many colors"),
    ),
    tag = "Clustering"
)]
pub async fn handle_cluster(
    State(audit): State<Arc<AuditService>>,
    payload: Result<Json<ClusterRequest>, JsonRejection>,
) -> Result<Json<ClusterReport>, ApiError> {
    let Json(request) = payload?;

    tracing::debug!(
        colors = request.colors.len(),
        threshold = ?request.threshold,
        "Cluster request received"
    );

    // O(n²) distance evaluations, keep them off the async workers
    let report = tokio::task::spawn_blocking(move || audit.cluster(&request))
        .await
        .map_err(|e| ApiError::Internal(format!("Clustering task failed: {e}")))??;

    Ok(Json(report))
}
