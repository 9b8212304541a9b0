//! Route duration estimation.
//!
//! The endpoint answer resolves in three steps: the published schedule table,
//! then a great-circle estimate between known airports, then a fixed fallback
//! range. It never fails; an unknown airport only degrades the answer.

use std::collections::HashMap;
use std::sync::OnceLock;

use lightning_shared::{DurationEstimate, DurationLookup, DurationSource};

use crate::airports::great_circle_miles;
use crate::round_half_up;
use crate::route::RouteKey;
use crate::tables::{RouteRange, BLOCK_TIMES, SCHEDULE};

/// Range served when either airport is unknown.
pub const FALLBACK_ESTIMATE: DurationEstimate = DurationEstimate {
    min_minutes: 120,
    max_minutes: 180,
};

/// Cruise speed behind the endpoint's distance estimate.
const ESTIMATE_CRUISE_MPH: f64 = 500.0;
/// Taxi, climb and descent allowance added to the distance estimate.
const GROUND_PAD_MINUTES: f64 = 30.0;

/// Cruise speed behind the generator's distance estimate.
const GENERATOR_CRUISE_MPH: f64 = 460.0;
/// Distance the generator assumes when an airport has no coordinates.
const GENERATOR_DEFAULT_MILES: f64 = 2000.0;

fn build_index(table: &[RouteRange]) -> HashMap<String, DurationEstimate> {
    table
        .iter()
        .map(|(origin, destination, min, max)| {
            (format!("{origin}-{destination}"), DurationEstimate::new(*min, *max))
        })
        .collect()
}

fn schedule_index() -> &'static HashMap<String, DurationEstimate> {
    static INDEX: OnceLock<HashMap<String, DurationEstimate>> = OnceLock::new();
    INDEX.get_or_init(|| build_index(SCHEDULE))
}

fn block_time_index() -> &'static HashMap<String, DurationEstimate> {
    static INDEX: OnceLock<HashMap<String, DurationEstimate>> = OnceLock::new();
    INDEX.get_or_init(|| build_index(BLOCK_TIMES))
}

/// Exact hit in the published schedule table.
pub fn scheduled_duration(route: &RouteKey) -> Option<DurationEstimate> {
    schedule_index().get(route.to_string().as_str()).copied()
}

/// Exact hit in the generator's block-time table.
pub fn generator_block_time(origin: &str, destination: &str) -> Option<DurationEstimate> {
    block_time_index()
        .get(format!("{origin}-{destination}").as_str())
        .copied()
}

/// Resolves the duration range for an ordered airport pair.
pub fn estimate_duration(origin: &str, destination: &str) -> DurationLookup {
    let route = RouteKey::new(origin, destination);

    let (estimate, source) = if let Some(estimate) = scheduled_duration(&route) {
        (estimate, DurationSource::Database)
    } else if let Some(miles) =
        great_circle_miles(&route.origin, &route.destination).filter(|m| *m > 0.0)
    {
        (distance_estimate(miles), DurationSource::Calculated)
    } else {
        (FALLBACK_ESTIMATE, DurationSource::Fallback)
    };

    tracing::debug!(
        route = %route,
        min = estimate.min_minutes,
        max = estimate.max_minutes,
        ?source,
        "Resolved route duration"
    );

    DurationLookup {
        route: route.to_string(),
        min_minutes: estimate.min_minutes,
        max_minutes: estimate.max_minutes,
        source,
    }
}

fn distance_estimate(miles: f64) -> DurationEstimate {
    let base = round_half_up(miles / ESTIMATE_CRUISE_MPH * 60.0) + GROUND_PAD_MINUTES;
    DurationEstimate::new(
        round_half_up(base * 0.95) as u32,
        round_half_up(base * 1.10) as u32,
    )
}

/// Distance-derived `(min, max)` block time the generator uses for routes
/// missing from its table. The lower bound may be small or negative for very
/// short hops; callers apply their own floor.
pub fn calculated_block_time(origin: &str, destination: &str) -> (i64, i64) {
    let miles = great_circle_miles(origin, destination).unwrap_or(GENERATOR_DEFAULT_MILES);
    let base = miles / GENERATOR_CRUISE_MPH * 60.0;
    let variance = (base * 0.05).max(15.0);
    (
        round_half_up(base - variance) as i64,
        round_half_up(base + variance) as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_hit() {
        let lookup = estimate_duration("JFK", "LAX");
        assert_eq!(lookup.route, "JFK-LAX");
        assert_eq!((lookup.min_minutes, lookup.max_minutes), (330, 360));
        assert_eq!(lookup.source, DurationSource::Database);
    }

    #[test]
    fn test_schedule_is_asymmetric() {
        let west = estimate_duration("JFK", "LAX");
        let east = estimate_duration("LAX", "JFK");
        assert_eq!((east.min_minutes, east.max_minutes), (280, 310));
        assert_ne!(west.min_minutes, east.min_minutes);
    }

    #[test]
    fn test_lowercase_codes_are_normalised() {
        let lookup = estimate_duration("jfk", "lhr");
        assert_eq!(lookup.route, "JFK-LHR");
        assert_eq!((lookup.min_minutes, lookup.max_minutes), (420, 450));
    }

    #[test]
    fn test_calculated_for_untabled_pair() {
        let lookup = estimate_duration("ABQ", "JFK");
        assert_eq!(lookup.source, DurationSource::Calculated);
        assert!(lookup.min_minutes > 0);
        assert!(lookup.min_minutes <= lookup.max_minutes);
    }

    #[test]
    fn test_distance_estimate_arithmetic() {
        // 1000 mi -> 120 min cruise + 30 pad = 150; [142.5, 165] rounded half up.
        let estimate = distance_estimate(1000.0);
        assert_eq!(estimate, DurationEstimate::new(143, 165));
    }

    #[test]
    fn test_fallback_for_unknown_airport() {
        let lookup = estimate_duration("ABQ", "XYZ");
        assert_eq!(lookup.source, DurationSource::Fallback);
        assert_eq!((lookup.min_minutes, lookup.max_minutes), (120, 180));
    }

    #[test]
    fn test_same_airport_falls_back() {
        let lookup = estimate_duration("DEN", "DEN");
        assert_eq!(lookup.source, DurationSource::Fallback);
    }

    #[test]
    fn test_generator_table_differs_from_schedule() {
        assert_eq!(
            generator_block_time("JFK", "LAX"),
            Some(DurationEstimate::new(370, 400))
        );
        assert!(generator_block_time("JFK", "LHR").is_none());
    }

    #[test]
    fn test_calculated_block_time() {
        let (min, max) = calculated_block_time("JFK", "LAX");
        assert!(min < max);
        assert!((280..340).contains(&min), "got {min}");

        // No coordinates: 2000 mi assumed.
        let (min, max) = calculated_block_time("XXX", "YYY");
        assert_eq!((min, max), (246, 276));
    }
}
