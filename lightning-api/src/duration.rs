use axum::{extract::Query, routing::get, Json, Router};
use lightning_core::airports::extract_airport_code;
use lightning_core::estimate_duration;
use lightning_shared::DurationLookup;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DurationQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/flight-duration", get(flight_duration))
}

/// GET /api/flight-duration?from=JFK&to=LAX
pub async fn flight_duration(
    Query(query): Query<DurationQuery>,
) -> Result<Json<DurationLookup>, AppError> {
    let origin = query.from.as_deref().map(extract_airport_code).unwrap_or_default();
    let destination = query.to.as_deref().map(extract_airport_code).unwrap_or_default();

    if origin.is_empty() || destination.is_empty() {
        return Err(AppError::ValidationError("Missing from or to airport".to_string()));
    }

    Ok(Json(estimate_duration(&origin, &destination)))
}
