//! Root liveness handler.

use axum::Json;
use serde::Serialize;

/// Static liveness payload.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET / -- static payload confirming the API is up.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Degree Planner API",
        status: "running",
    })
}
