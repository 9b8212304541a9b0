//! RedBird: the discount brand's two early-morning departures on routes that
//! cross the east/west US partition.

use lightning_catalog::Fleet;
use lightning_core::airports::is_east_west_usa;
use lightning_shared::Flight;

use crate::clock::{at_clock, duration_label, endpoint, local_arrival};
use crate::draw::{route_seed, scaled, DrawStream};
use crate::generator::FlightGenerator;
use crate::models::ResolvedSearch;

pub const REDBIRD_CODE: &str = "RB";

/// `(hour, minute)` of each RedBird departure.
const DEPARTURES: [(u32, u32); 2] = [(7, 30), (8, 0)];
const MAX_BOOKED_SHARE: f64 = 0.6;

impl FlightGenerator {
    /// RedBird flights for the search. Empty off the east/west routes, and
    /// empty when the caller supplied no duration estimate.
    pub fn redbird_flights(&self, search: &ResolvedSearch) -> Vec<Flight> {
        if !is_east_west_usa(&search.origin, &search.destination) {
            return Vec::new();
        }
        let Some(estimate) = search.duration_estimate else {
            return Vec::new();
        };

        let date_label = search.date_label();
        let mut draws = DrawStream::new(route_seed(&format!(
            "{REDBIRD_CODE}-{}",
            search.seed_key()
        )));

        DEPARTURES
            .iter()
            .zip(0u32..)
            .filter_map(|(&(hour, minute), i)| {
                let block_minutes =
                    i64::from(estimate.min_minutes) + scaled(draws.next_draw(), estimate.spread());
                let fare_draw = draws.next_draw();
                let seat_draw = draws.next_draw();

                let departure = at_clock(search.date, hour, minute);
                let arrival =
                    local_arrival(departure, block_minutes, &search.origin, &search.destination)?;

                let base = self.pricing().redbird_base_fare(fare_draw);
                let price = self
                    .pricing()
                    .final_fare(base, search.passengers, search.cabin_class);

                let [aircraft, _] = Fleet::narrow_bodies();
                let capacity = aircraft.capacity();
                let booked = (seat_draw * capacity as f64 * MAX_BOOKED_SHARE).floor() as u32;

                let flight_number = format!("{REDBIRD_CODE}{}", 100 + i);
                Some(Flight {
                    id: format!("{flight_number}-{date_label}-redbird"),
                    flight_number,
                    departure: endpoint(departure, &search.origin),
                    arrival: endpoint(arrival, &search.destination),
                    duration: duration_label(block_minutes),
                    aircraft,
                    price,
                    stops: 0,
                    available_seats: capacity - booked.min(capacity),
                    connecting_flights: None,
                    total_duration: None,
                    layover_airport: None,
                    layover_duration: None,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlightRequest;
    use lightning_shared::DurationEstimate;

    fn search(origin: &str, destination: &str, estimate: Option<DurationEstimate>) -> ResolvedSearch {
        let mut request = FlightRequest::new(origin, destination, "2025-06-01");
        request.duration_estimate = estimate;
        request.resolve().unwrap()
    }

    #[test]
    fn test_redbird_pair_on_cross_country_route() {
        let generator = FlightGenerator::default();
        let flights =
            generator.redbird_flights(&search("JFK", "LAX", Some(DurationEstimate::new(330, 360))));

        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].flight_number, "RB100");
        assert_eq!(flights[0].departure.time, "7:30 AM");
        assert_eq!(flights[0].id, "RB100-2025-06-01-redbird");
        assert_eq!(flights[1].flight_number, "RB101");
        assert_eq!(flights[1].departure.time, "8:00 AM");
        for flight in &flights {
            assert_eq!(flight.aircraft.name, "Airbus A321-211");
            // Economy: 0.9 x $199..$448
            assert!((179..=403).contains(&flight.price), "got {}", flight.price);
            assert!(flight.available_seats <= 192);
            assert!(flight.available_seats >= 192 - 115);
        }
    }

    #[test]
    fn test_redbird_requires_estimate() {
        let generator = FlightGenerator::default();
        assert!(generator.redbird_flights(&search("JFK", "LAX", None)).is_empty());
    }

    #[test]
    fn test_no_redbird_on_same_coast() {
        let generator = FlightGenerator::default();
        let estimate = Some(DurationEstimate::new(60, 80));
        assert!(generator.redbird_flights(&search("JFK", "BOS", estimate)).is_empty());
        assert!(generator.redbird_flights(&search("LAX", "SFO", estimate)).is_empty());
    }

    #[test]
    fn test_redbird_is_reproducible() {
        let generator = FlightGenerator::default();
        let s = search("SEA", "ATL", Some(DurationEstimate::new(260, 290)));
        assert_eq!(generator.redbird_flights(&s), generator.redbird_flights(&s));
    }
}
