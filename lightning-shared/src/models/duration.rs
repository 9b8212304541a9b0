use serde::{Deserialize, Serialize};

/// Inclusive block-time range for a route, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationEstimate {
    pub min_minutes: u32,
    pub max_minutes: u32,
}

impl DurationEstimate {
    pub fn new(min_minutes: u32, max_minutes: u32) -> Self {
        Self { min_minutes, max_minutes }
    }

    /// Width of the range; zero when the bounds are inverted.
    pub fn spread(&self) -> u32 {
        self.max_minutes.saturating_sub(self.min_minutes)
    }

    pub fn midpoint(&self) -> f64 {
        (self.min_minutes as f64 + self.max_minutes as f64) / 2.0
    }
}

/// Where a duration answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationSource {
    /// Exact hit in the published schedule table.
    Database,
    /// Great-circle distance at cruise speed plus ground time.
    Calculated,
    /// Nothing known about one of the airports.
    Fallback,
}

/// Answer of the duration lookup, as served by `GET /api/flight-duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationLookup {
    pub route: String,
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub source: DurationSource,
}

impl DurationLookup {
    pub fn estimate(&self) -> DurationEstimate {
        DurationEstimate::new(self.min_minutes, self.max_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_wire_format() {
        let lookup = DurationLookup {
            route: "JFK-LAX".to_string(),
            min_minutes: 330,
            max_minutes: 360,
            source: DurationSource::Database,
        };
        let json = serde_json::to_value(&lookup).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "route": "JFK-LAX",
                "minMinutes": 330,
                "maxMinutes": 360,
                "source": "database"
            })
        );
    }

    #[test]
    fn test_spread_of_inverted_range_is_zero() {
        assert_eq!(DurationEstimate::new(200, 150).spread(), 0);
        assert_eq!(DurationEstimate::new(150, 200).spread(), 50);
    }
}
