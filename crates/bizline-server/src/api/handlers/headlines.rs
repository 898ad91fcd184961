use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::domain::{generate_headline, required_pair, HeadlineQuery};
use crate::error::{AppError, Result};
use crate::AppState;

const MISSING_PARAMS: &str = "Business name and location are required as query parameters";

#[derive(Serialize)]
pub struct HeadlineResponse {
    headline: String,
}

/// Produces a fresh headline without reading or writing the store.
pub async fn regenerate(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<HeadlineQuery>, QueryRejection>,
) -> Result<Json<HeadlineResponse>> {
    let Query(query) = query.map_err(|_| AppError::Validation(MISSING_PARAMS.into()))?;
    let (name, location) = required_pair(query.name, query.location)
        .ok_or_else(|| AppError::Validation(MISSING_PARAMS.into()))?;

    Ok(Json(HeadlineResponse {
        headline: generate_headline(state.random.as_ref(), &name, &location),
    }))
}
