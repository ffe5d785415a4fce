use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use sightline::{LogSink, TriangulationParams, TriangulationRequest, TriangulationResult};

/// Reply to a triangulation call. Failures carry the `{-1, -1}` sentinel as the target.
#[derive(Debug, Serialize, Deserialize)]
pub struct TriangulationResponse {
    pub target: TriangulationResult,
}

pub fn router(params: TriangulationParams) -> Router {
    Router::new()
        .route("/", get(|| async { "Welcome to Sightline!" }))
        .route("/api/v0/triangulate", post(triangulate))
        .with_state(Arc::new(params))
}

pub async fn triangulate(
    State(params): State<Arc<TriangulationParams>>,
    Json(req): Json<TriangulationRequest>,
) -> Json<TriangulationResponse> {
    let target = sightline::triangulate(&req, &params, &LogSink);
    Json(TriangulationResponse { target })
}
