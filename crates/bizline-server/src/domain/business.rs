use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: i64,
    pub headline: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Fields of a record before the store assigns `id` and `createdAt`.
#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: i64,
    pub headline: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateBusinessRequest {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HeadlineQuery {
    pub name: Option<String>,
    pub location: Option<String>,
}

/// Returns both fields only when each is present and non-empty.
pub fn required_pair(name: Option<String>, location: Option<String>) -> Option<(String, String)> {
    match (name, location) {
        (Some(name), Some(location)) if !name.is_empty() && !location.is_empty() => {
            Some((name, location))
        }
        _ => None,
    }
}
