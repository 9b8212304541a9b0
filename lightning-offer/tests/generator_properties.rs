use lightning_catalog::CabinClass;
use lightning_offer::clock::clock_minutes;
use lightning_offer::{get_flights, FlightGenerator, FlightRequest};
use lightning_shared::DurationEstimate;
use proptest::prelude::*;

const DOMESTIC: &[&str] = &["JFK", "BOS", "ATL", "ORD", "DFW", "DEN", "LAX", "SFO", "SEA", "MIA"];
const EUROPE: &[&str] = &["LHR", "CDG", "FCO", "MAD", "BCN", "MXP"];

fn minutes(label: &str) -> i64 {
    let (hours, rest) = label.split_once("h ").unwrap();
    hours.parse::<i64>().unwrap() * 60 + rest.trim_end_matches('m').parse::<i64>().unwrap()
}

fn date() -> impl Strategy<Value = String> {
    (2024i32..=2026, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

fn domestic_route() -> impl Strategy<Value = (&'static str, &'static str)> {
    (prop::sample::select(DOMESTIC), prop::sample::select(DOMESTIC))
        .prop_filter("distinct airports", |(o, d)| o != d)
}

fn cabin() -> impl Strategy<Value = CabinClass> {
    prop_oneof![
        Just(CabinClass::Economy),
        Just(CabinClass::Business),
        Just(CabinClass::First),
    ]
}

#[test]
fn test_refresh_key_rerolls_listing() {
    let base = FlightRequest::new("JFK", "LAX", "2025-07-04");
    let first = get_flights(&base);
    let rerolled = (1..6).any(|key| get_flights(&base.clone().refresh_key(key)) != first);
    assert!(rerolled);
}

#[test]
fn test_redbird_joins_cross_country_listing() {
    let request = FlightRequest::new("Los Angeles (LAX)", "New York (JFK)", "2025-07-04")
        .duration_estimate(DurationEstimate::new(280, 310));
    let flights = get_flights(&request);

    let redbird: Vec<_> = flights
        .iter()
        .filter(|f| f.flight_number.starts_with("RB"))
        .collect();
    assert_eq!(redbird.len(), 2);
    assert!(redbird.iter().all(|f| f.id.ends_with("-redbird")));

    let without = get_flights(&FlightRequest::new("LAX", "JFK", "2025-07-04"));
    assert!(without.iter().all(|f| !f.flight_number.starts_with("RB")));
}

#[test]
fn test_connections_follow_direct_results() {
    let generator = FlightGenerator::default();
    let request = FlightRequest::new("SEA", "MIA", "2025-02-11");
    let direct = generator.get_flights(&request);

    let mut found_connection = false;
    for key in 0..10 {
        let request = request.clone().refresh_key(key);
        let direct = generator.get_flights(&request);
        let full = generator.search(&request, true);
        assert_eq!(&full[..direct.len()], &direct[..]);
        found_connection |= full.len() > direct.len();
    }
    assert!(found_connection);
    assert_eq!(generator.search(&request, false), direct);
}

proptest! {
    #[test]
    fn prop_listing_is_reproducible(
        (origin, destination) in domestic_route(),
        date in date(),
        refresh_key in 0i64..1000,
        passengers in 1u32..6,
        cabin in cabin(),
    ) {
        let request = FlightRequest::new(origin, destination, date)
            .refresh_key(refresh_key)
            .passengers(passengers)
            .cabin_class(cabin);
        prop_assert_eq!(get_flights(&request), get_flights(&request));
    }

    #[test]
    fn prop_domestic_volume(
        (origin, destination) in domestic_route(),
        date in date(),
        refresh_key in 0i64..1000,
    ) {
        let request = FlightRequest::new(origin, destination, date).refresh_key(refresh_key);
        let flights = get_flights(&request);
        prop_assert!((5..=7).contains(&flights.len()));
    }

    #[test]
    fn prop_transatlantic_volume(
        origin in prop::sample::select(DOMESTIC),
        destination in prop::sample::select(EUROPE),
        date in date(),
        refresh_key in 0i64..1000,
    ) {
        let flights = get_flights(&FlightRequest::new(origin, destination, date).refresh_key(refresh_key));
        prop_assert!((2..=4).contains(&flights.len()));
        for flight in &flights {
            prop_assert_eq!(flight.aircraft.name.as_str(), "Airbus A350-900");
            let block = minutes(&flight.duration);
            prop_assert!((420..600).contains(&block));
        }
    }

    #[test]
    fn prop_seats_within_cabin(
        (origin, destination) in domestic_route(),
        date in date(),
        refresh_key in 0i64..1000,
    ) {
        let generator = FlightGenerator::default();
        let request = FlightRequest::new(origin, destination, date)
            .refresh_key(refresh_key)
            .duration_estimate(DurationEstimate::new(120, 150));
        for flight in generator.search(&request, true) {
            prop_assert!(flight.available_seats <= flight.aircraft.capacity());
        }
    }

    #[test]
    fn prop_listing_sorted_by_departure(
        (origin, destination) in domestic_route(),
        date in date(),
        refresh_key in 0i64..1000,
    ) {
        let request = FlightRequest::new(origin, destination, date)
            .refresh_key(refresh_key)
            .duration_estimate(DurationEstimate::new(200, 240));
        let times: Vec<u32> = get_flights(&request)
            .iter()
            .map(|f| clock_minutes(&f.departure.time).unwrap())
            .collect();
        prop_assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_connecting_legs_are_plausible(
        (origin, destination) in domestic_route(),
        date in date(),
        refresh_key in 0i64..1000,
    ) {
        let generator = FlightGenerator::default();
        let request = FlightRequest::new(origin, destination, date).refresh_key(refresh_key);
        for flight in generator.search(&request, true).iter().filter(|f| f.stops == 1) {
            let legs = flight.connecting_flights.as_ref().unwrap();
            prop_assert_eq!(legs.len(), 2);
            for leg in legs {
                prop_assert!(minutes(&leg.duration) >= 30);
            }
            let layover = minutes(flight.layover_duration.as_deref().unwrap());
            prop_assert!((60..180).contains(&layover));
        }
    }
}
