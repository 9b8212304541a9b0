use lightning_catalog::pricing::FareRoute;
use lightning_catalog::{Fleet, PricingEngine};
use lightning_core::airports::touches_europe_regional;
use lightning_core::{calculated_block_time, generator_block_time};
use lightning_shared::Flight;

use crate::clock::{at_clock, duration_label, endpoint, local_arrival, sort_by_departure};
use crate::connections::connection_seed;
use crate::draw::{pick, scaled, DrawStream};
use crate::models::{FlightRequest, ResolvedSearch};

/// Marketing carrier code on every generated nonstop.
pub const AIRLINE_CODE: &str = "LA";

/// Long-haul departures are kept to banks that land at sensible hours.
const LONG_HAUL_SLOTS: &[u32] = &[6, 8, 10, 14, 17, 20, 22, 23];
const DOMESTIC_SLOTS: &[u32] = &[
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
];

/// Share of the cabin that may already be sold on a generated nonstop.
const MAX_BOOKED_SHARE: f64 = 0.7;
/// Shortest block time the distance estimate may produce.
const MIN_BLOCK_MINUTES: i64 = 60;

/// Deterministic flight listing generator.
///
/// Every flight is derived from the search's seed, so the same search always
/// yields the same listing and a new refresh key yields a new one.
pub struct FlightGenerator {
    pricing: PricingEngine,
}

impl Default for FlightGenerator {
    fn default() -> Self {
        Self::new(PricingEngine::default())
    }
}

impl FlightGenerator {
    pub fn new(pricing: PricingEngine) -> Self {
        Self { pricing }
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Nonstops plus any RedBird departures, ordered by departure time.
    /// An empty list means the request named no usable route.
    pub fn get_flights(&self, request: &FlightRequest) -> Vec<Flight> {
        let Some(search) = request.resolve() else {
            return Vec::new();
        };

        let mut flights = self.redbird_flights(&search);
        flights.extend(self.direct_flights(&search));
        sort_by_departure(&mut flights);

        tracing::debug!(
            seed_key = %search.seed_key(),
            count = flights.len(),
            "Generated flight listing"
        );
        flights
    }

    /// Full listing: [`get_flights`](Self::get_flights), then the one-stop
    /// itineraries when asked for.
    pub fn search(&self, request: &FlightRequest, include_connections: bool) -> Vec<Flight> {
        let mut flights = self.get_flights(request);
        if include_connections {
            if let Some(search) = request.resolve() {
                flights.extend(self.connecting_flights(&search, connection_seed(&search)));
            }
        }
        flights
    }

    /// The seeded nonstops for a route, ordered by departure time.
    pub fn direct_flights(&self, search: &ResolvedSearch) -> Vec<Flight> {
        let long_haul = search.is_long_haul();
        let fare_route = FareRoute {
            transatlantic: long_haul,
            europe_regional: !long_haul
                && touches_europe_regional(&search.origin, &search.destination),
        };
        let slots = if long_haul { LONG_HAUL_SLOTS } else { DOMESTIC_SLOTS };
        let date_label = search.date_label();

        let mut draws = DrawStream::new(search.seed());
        let minimum = if long_haul { 2 } else { 5 };
        let count = minimum + scaled(draws.current(), 3) as usize;

        let mut flights = Vec::with_capacity(count);
        for i in 0..count {
            let r1 = draws.next_draw();
            let r2 = draws.next_draw();
            let r3 = draws.next_draw();
            let r4 = draws.next_draw();
            let r5 = draws.next_draw();

            let block_minutes = self.direct_block_minutes(search, long_haul, r3);

            let hour = pick(draws.current(), slots).copied().unwrap_or(slots[0]);
            draws.advance();
            let minute = scaled(r2, 12) as u32 * 5;

            let departure = at_clock(search.date, hour, minute);
            let Some(arrival) =
                local_arrival(departure, block_minutes, &search.origin, &search.destination)
            else {
                tracing::debug!(date = %date_label, "Arrival past end of calendar, flight skipped");
                continue;
            };

            let aircraft = Fleet::for_route(long_haul, r5);
            let capacity = aircraft.capacity();
            let booked = (r4 * capacity as f64 * MAX_BOOKED_SHARE).floor() as u32;

            let flight_number = format!("{AIRLINE_CODE}{}", 100 + scaled(r2, 900));
            let base = self.pricing.direct_base_fare(r1, fare_route, block_minutes);
            let price = self
                .pricing
                .final_fare(base, search.passengers, search.cabin_class);

            flights.push(Flight {
                id: format!("{flight_number}-{date_label}-{i}"),
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
            });
        }

        sort_by_departure(&mut flights);
        flights
    }

    /// Block time for one nonstop. A caller estimate wins, then the long-haul
    /// band, then the generator's table, then the distance estimate.
    fn direct_block_minutes(&self, search: &ResolvedSearch, long_haul: bool, draw: f64) -> i64 {
        if let Some(estimate) = search.duration_estimate {
            return i64::from(estimate.min_minutes) + scaled(draw, estimate.spread());
        }
        if long_haul {
            return 420 + scaled(draw, 180);
        }
        if let Some(range) = generator_block_time(&search.origin, &search.destination) {
            return i64::from(range.min_minutes) + scaled(draw, range.spread());
        }
        let (calculated_min, _) = calculated_block_time(&search.origin, &search.destination);
        (calculated_min - 30 + scaled(draw, 60)).max(MIN_BLOCK_MINUTES)
    }
}

/// Generates the listing with the default fare rules.
pub fn get_flights(request: &FlightRequest) -> Vec<Flight> {
    FlightGenerator::default().get_flights(request)
}
