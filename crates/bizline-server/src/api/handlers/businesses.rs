use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{
    generate_headline, random_rating, random_review_count, required_pair, Business,
    CreateBusinessRequest, NewBusiness,
};
use crate::error::{AppError, Result};
use crate::AppState;

const MISSING_FIELDS: &str = "Business name and location are required";

#[derive(Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateBusinessRequest>, JsonRejection>,
) -> Result<Json<Business>> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "rejected business payload");
            return Err(AppError::Validation(MISSING_FIELDS.into()));
        }
    };

    let (name, location) = required_pair(req.name, req.location)
        .ok_or_else(|| AppError::Validation(MISSING_FIELDS.into()))?;

    let random = state.random.as_ref();
    let new = NewBusiness {
        rating: random_rating(random),
        reviews: random_review_count(random),
        headline: generate_headline(random, &name, &location),
        name,
        location,
    };

    let business = state.store.insert(&new).await?;
    info!(id = business.id, "business created");

    Ok(Json(business))
}

pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Business>>> {
    let businesses = state.store.list_all().await?;
    Ok(Json(businesses))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    // A non-integer id cannot match any row.
    let id: i64 = raw_id.parse().map_err(|_| AppError::BusinessNotFound)?;

    if state.store.delete_by_id(id).await? == 0 {
        return Err(AppError::BusinessNotFound);
    }
    info!(id, "business deleted");

    Ok(Json(MessageResponse {
        message: "Business deleted successfully",
    }))
}
