use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn ready(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>> {
    state.store.ping().await.map_err(|e| match e {
        AppError::Database(e) => AppError::StoreUnavailable(e),
        other => other,
    })?;

    Ok(Json(HealthResponse { status: "ready" }))
}
