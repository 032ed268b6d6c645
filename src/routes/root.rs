//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

use crate::config::ROOT_MESSAGE;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Returns the fixed greeting for `GET /`.
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}
