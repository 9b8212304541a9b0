use chrono::NaiveDate;
use lightning_catalog::CabinClass;
use lightning_core::airports::{extract_airport_code, is_transatlantic};
use lightning_core::dates::parse_travel_date;
use lightning_shared::DurationEstimate;
use serde::{Deserialize, Serialize};

use crate::draw::route_seed;

fn default_passengers() -> u32 {
    1
}

/// A flight search as the booking site submits it. Airports may be display
/// labels (`New York (JFK)`) or bare codes; the date is `yyyy-MM-dd`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRequest {
    pub origin: String,
    pub destination: String,
    pub date: String,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    #[serde(default)]
    pub cabin_class: CabinClass,
    /// Bumped by the "refresh flights" action to re-roll the listing.
    #[serde(default)]
    pub refresh_key: i64,
    #[serde(default)]
    pub duration_estimate: Option<DurationEstimate>,
}

impl FlightRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
            passengers: default_passengers(),
            cabin_class: CabinClass::default(),
            refresh_key: 0,
            duration_estimate: None,
        }
    }

    pub fn passengers(mut self, passengers: u32) -> Self {
        self.passengers = passengers;
        self
    }

    pub fn cabin_class(mut self, cabin_class: CabinClass) -> Self {
        self.cabin_class = cabin_class;
        self
    }

    pub fn refresh_key(mut self, refresh_key: i64) -> Self {
        self.refresh_key = refresh_key;
        self
    }

    pub fn duration_estimate(mut self, estimate: DurationEstimate) -> Self {
        self.duration_estimate = Some(estimate);
        self
    }

    /// Normalises the request. `None` means there is no route to generate for:
    /// a blank airport, a label without a usable code, or an unparseable date.
    pub fn resolve(&self) -> Option<ResolvedSearch> {
        let origin = extract_airport_code(&self.origin);
        let destination = extract_airport_code(&self.destination);
        if origin.is_empty() || destination.is_empty() {
            tracing::debug!(
                origin = %self.origin,
                destination = %self.destination,
                "Missing airport, no flights generated"
            );
            return None;
        }

        let date = match parse_travel_date(&self.date) {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!("{}, no flights generated", e);
                return None;
            }
        };

        Some(ResolvedSearch {
            origin,
            destination,
            date,
            passengers: self.passengers.max(1),
            cabin_class: self.cabin_class,
            refresh_key: self.refresh_key,
            duration_estimate: self.duration_estimate,
        })
    }
}

/// A validated search with bare airport codes and a calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSearch {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub passengers: u32,
    pub cabin_class: CabinClass,
    pub refresh_key: i64,
    pub duration_estimate: Option<DurationEstimate>,
}

impl ResolvedSearch {
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `ORIGIN-DEST-yyyy-MM-dd-refreshKey`
    pub fn seed_key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.origin,
            self.destination,
            self.date_label(),
            self.refresh_key
        )
    }

    pub fn seed(&self) -> i32 {
        route_seed(&self.seed_key())
    }

    pub fn is_long_haul(&self) -> bool {
        is_transatlantic(&self.origin, &self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_extracts_codes() {
        let search = FlightRequest::new("New York (JFK)", "los angeles (lax)", "2025-03-14")
            .refresh_key(3)
            .resolve()
            .unwrap();
        assert_eq!(search.origin, "JFK");
        assert_eq!(search.destination, "LAX");
        assert_eq!(search.seed_key(), "JFK-LAX-2025-03-14-3");
        assert!(!search.is_long_haul());
    }

    #[test]
    fn test_resolve_rejects_missing_inputs() {
        assert!(FlightRequest::new("", "LAX", "2025-03-14").resolve().is_none());
        assert!(FlightRequest::new("JFK", "  ", "2025-03-14").resolve().is_none());
        assert!(FlightRequest::new("JFK", "LAX", "someday").resolve().is_none());
    }

    #[test]
    fn test_zero_passengers_priced_as_one() {
        let search = FlightRequest::new("JFK", "LAX", "2025-03-14")
            .passengers(0)
            .resolve()
            .unwrap();
        assert_eq!(search.passengers, 1);
    }

    #[test]
    fn test_request_deserialization_defaults() {
        let json = r#"{ "origin": "BOS", "destination": "LHR", "date": "2025-12-25" }"#;
        let request: FlightRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(request.passengers, 1);
        assert_eq!(request.cabin_class, CabinClass::Economy);
        assert_eq!(request.refresh_key, 0);
        assert!(request.duration_estimate.is_none());
        assert!(request.resolve().unwrap().is_long_haul());
    }
}
