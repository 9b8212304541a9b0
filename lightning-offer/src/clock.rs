use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use lightning_core::airports::{offset_difference_hours, time_zone};
use lightning_shared::{Flight, FlightEndpoint};

/// Local wall-clock time on `date`. Minutes past the end of the day wrap
/// within it.
pub fn at_clock(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    let (time, _) = NaiveTime::MIN
        .overflowing_add_signed(Duration::minutes(i64::from(hour * 60 + minute)));
    date.and_time(time)
}

/// Arrival on the destination's clock: departure plus block time, shifted by
/// the zone difference between the two airports. `None` past the end of the
/// calendar.
pub fn local_arrival(
    departure: NaiveDateTime,
    block_minutes: i64,
    origin: &str,
    destination: &str,
) -> Option<NaiveDateTime> {
    departure.checked_add_signed(
        Duration::minutes(block_minutes) + Duration::hours(offset_difference_hours(origin, destination)),
    )
}

/// `h:mm AM` style label.
pub fn clock_label(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Minutes since midnight of a `h:mm AM` label.
pub fn clock_minutes(label: &str) -> Option<u32> {
    let (time, period) = label.trim().split_once(' ')?;
    let (hours, minutes) = time.split_once(':')?;
    let mut hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;

    match period {
        "PM" if hours != 12 => hours += 12,
        "AM" if hours == 12 => hours = 0,
        _ => {}
    }
    Some(hours * 60 + minutes)
}

/// `5h 30m`
pub fn duration_label(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn endpoint(time: NaiveDateTime, airport: &str) -> FlightEndpoint {
    FlightEndpoint {
        time: clock_label(time),
        time_zone: time_zone(airport).to_string(),
        airport: airport.to_string(),
        date: time.date(),
    }
}

/// Stable sort by departure time of day. Flights departing in different zones
/// are compared on their own local clocks.
pub fn sort_by_departure(flights: &mut [Flight]) {
    flights.sort_by_key(|flight| clock_minutes(&flight.departure.time).unwrap_or(u32::MAX));
}
