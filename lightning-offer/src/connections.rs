//! One-stop itineraries through the hub network.

use lightning_catalog::Fleet;
use lightning_core::airports::{is_transatlantic, HUB_AIRPORTS};
use lightning_core::{calculated_block_time, generator_block_time};
use lightning_shared::{ConnectingLeg, Flight};

use crate::clock::{at_clock, duration_label, endpoint, local_arrival};
use crate::draw::{pick, route_seed, scaled, DrawStream};
use crate::generator::{FlightGenerator, AIRLINE_CODE};
use crate::models::ResolvedSearch;

/// Prefix of the key that seeds the connection draws.
const CONNECTION_STREAM: &str = "CX";

/// Legs shorter than this are not worth a connection.
const MIN_LEG_MINUTES: i64 = 30;
/// Seats held back from the smaller leg's cabin, at most.
const MAX_HELD_SEATS: u32 = 50;

impl FlightGenerator {
    /// One or two one-stop itineraries via a hub other than either endpoint.
    /// Draws start at `seed`; implausible itineraries are dropped, so the
    /// result may be shorter than the number attempted.
    pub fn connecting_flights(&self, search: &ResolvedSearch, seed: i32) -> Vec<Flight> {
        let origin = search.origin.as_str();
        let destination = search.destination.as_str();
        let hubs: Vec<&str> = HUB_AIRPORTS
            .iter()
            .copied()
            .filter(|hub| *hub != origin && *hub != destination)
            .collect();

        let date_label = search.date_label();
        let direct_average = generator_block_time(origin, destination).map(|r| r.midpoint());

        let mut draws = DrawStream::new(seed);
        let attempts = 1 + scaled(draws.current(), 2);

        let mut itineraries = Vec::new();
        for i in 0..attempts {
            let Some(&hub) = pick(draws.next_draw(), &hubs) else {
                break;
            };
            let r1 = draws.next_draw();
            let r2 = draws.next_draw();
            let r3 = draws.next_draw();
            let r4 = draws.next_draw();

            let first_minutes = leg_block_minutes(origin, hub, r1);
            let second_minutes = leg_block_minutes(hub, destination, r2);
            if first_minutes < MIN_LEG_MINUTES || second_minutes < MIN_LEG_MINUTES {
                tracing::debug!(hub, first_minutes, second_minutes, "Dropped connection");
                continue;
            }

            let layover_minutes = 60 + scaled(r3, 120);
            let total_minutes = first_minutes + layover_minutes + second_minutes;

            let hour = 6 + scaled(r4, 14) as u32;
            let minute = scaled(r1, 12) as u32 * 5;
            let first_departure = at_clock(search.date, hour, minute);
            let Some((first_arrival, second_departure, second_arrival)) =
                local_arrival(first_departure, first_minutes, origin, hub).and_then(|arrival| {
                    let departure =
                        arrival.checked_add_signed(chrono::Duration::minutes(layover_minutes))?;
                    let final_arrival =
                        local_arrival(departure, second_minutes, hub, destination)?;
                    Some((arrival, departure, final_arrival))
                })
            else {
                continue;
            };

            let first_number = format!("{AIRLINE_CODE}{}", 100 + scaled(r1, 900));
            let second_number = format!("{AIRLINE_CODE}{}", 100 + scaled(r2, 900));

            let first_aircraft = Fleet::for_route(is_transatlantic(origin, hub), r3);
            let second_aircraft = Fleet::for_route(is_transatlantic(hub, destination), r4);

            let base = self.pricing().connecting_base_fare(r1, direct_average);
            let price = self
                .pricing()
                .final_fare(base, search.passengers, search.cabin_class);

            let capacity = first_aircraft.capacity().min(second_aircraft.capacity());
            let held = (scaled(r4, MAX_HELD_SEATS) as u32).min(capacity);

            let layover = duration_label(layover_minutes);
            let total = duration_label(total_minutes);

            let legs = vec![
                ConnectingLeg {
                    flight_number: first_number.clone(),
                    departure: endpoint(first_departure, origin),
                    arrival: endpoint(first_arrival, hub),
                    duration: duration_label(first_minutes),
                    aircraft: first_aircraft.clone(),
                    layover_duration: None,
                },
                ConnectingLeg {
                    flight_number: second_number.clone(),
                    departure: endpoint(second_departure, hub),
                    arrival: endpoint(second_arrival, destination),
                    duration: duration_label(second_minutes),
                    aircraft: second_aircraft,
                    layover_duration: Some(layover.clone()),
                },
            ];

            itineraries.push(Flight {
                id: format!("{first_number}-{second_number}-{date_label}-{i}"),
                flight_number: format!("{first_number}/{second_number}"),
                departure: endpoint(first_departure, origin),
                arrival: endpoint(second_arrival, destination),
                duration: total.clone(),
                aircraft: first_aircraft,
                price,
                stops: 1,
                available_seats: capacity - held,
                connecting_flights: Some(legs),
                total_duration: Some(total),
                layover_airport: Some(hub.to_string()),
                layover_duration: Some(layover),
            });
        }

        itineraries
    }
}

/// Seed of a search's connection draws, apart from its nonstop draws.
pub fn connection_seed(search: &ResolvedSearch) -> i32 {
    route_seed(&format!("{CONNECTION_STREAM}-{}", search.seed_key()))
}

/// Tabled block time for a leg, else the lower distance-derived bound.
fn leg_block_minutes(origin: &str, destination: &str, draw: f64) -> i64 {
    match generator_block_time(origin, destination) {
        Some(range) => i64::from(range.min_minutes) + scaled(draw, range.spread()),
        None => calculated_block_time(origin, destination).0,
    }
}
