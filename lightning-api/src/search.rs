use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use lightning_catalog::CabinClass;
use lightning_core::airports::extract_airport_code;
use lightning_core::estimate_duration;
use lightning_offer::FlightRequest;
use lightning_shared::Flight;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Query string of the flight search page. Every field is optional and kept
/// as text so a malformed value degrades to its default instead of a 400.
/// With `returnDate` set the listing is for the return leg: `to` back to
/// `from` on that date.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
    pub return_date: Option<String>,
    pub passengers: Option<String>,
    pub cabin_class: Option<String>,
    pub refresh_key: Option<String>,
    pub connections: Option<String>,
}

impl FlightsQuery {
    /// Builds the generator request, resolving the route's duration estimate
    /// along the way. `None` when either airport is missing.
    pub fn to_request(&self) -> Option<FlightRequest> {
        let mut origin = extract_airport_code(self.from.as_deref().unwrap_or_default());
        let mut destination = extract_airport_code(self.to.as_deref().unwrap_or_default());
        if origin.is_empty() || destination.is_empty() {
            return None;
        }

        let date = match &self.return_date {
            Some(return_date) => {
                std::mem::swap(&mut origin, &mut destination);
                return_date.clone()
            }
            None => self.date.clone().unwrap_or_default(),
        };

        let estimate = estimate_duration(&origin, &destination).estimate();
        let passengers = parse_or(self.passengers.as_deref(), 1);
        let refresh_key = parse_or(self.refresh_key.as_deref(), 0);
        let cabin_class = self
            .cabin_class
            .as_deref()
            .and_then(|label| label.parse::<CabinClass>().ok())
            .unwrap_or(CabinClass::Economy);

        Some(
            FlightRequest::new(origin, destination, date)
                .passengers(passengers)
                .cabin_class(cabin_class)
                .refresh_key(refresh_key)
                .duration_estimate(estimate),
        )
    }

    pub fn include_connections(&self, default: bool) -> bool {
        match self.connections.as_deref().map(str::trim) {
            Some(flag) => flag.eq_ignore_ascii_case("true") || flag == "1",
            None => default,
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/flights", get(search_flights))
}

/// GET /api/flights?from=JFK&to=LAX&date=2025-06-01
pub async fn search_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightsQuery>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let Some(request) = query.to_request() else {
        tracing::debug!("Flight search without a route");
        return Ok(Json(Vec::new()));
    };

    let include_connections = query.include_connections(state.config.search.include_connections);
    let generator = state.generator.clone();
    let listing_request = request.clone();
    let flights = tokio::task::spawn_blocking(move || {
        generator.search(&listing_request, include_connections)
    })
    .await?;

    tracing::info!(
        origin = %request.origin,
        destination = %request.destination,
        date = %request.date,
        results = flights.len(),
        "Flight search"
    );

    Ok(Json(flights))
}
