//! Airport reference data: zone labels, coordinates and the region sets used
//! to classify routes.
//!
//! Codes are IATA three-letter codes, except a handful of ICAO four-letter
//! codes (`OMDW`, `LIRF`, ...) that the booking site has always accepted.

/// Zone label used when an airport has none on file.
pub const DEFAULT_TIME_ZONE: &str = "EST";

/// UTC offset used when a zone label is unknown.
pub const DEFAULT_UTC_OFFSET_HOURS: i64 = -5;

const US_AIRPORTS: &[&str] = &[
    "JFK", "LGA", "EWR", "BOS", "ATL", "MIA", "DTW", "PHL", "CLT", "BNA", "ORD", "DFW", "IAH",
    "AUS", "MSP", "DEN", "PHX", "SLC", "LAX", "SFO", "SEA", "LAS", "SAN", "PDX", "JAX", "MCO",
    "BDL", "PBI", "RDU", "STL", "MKE", "CLE", "CMH", "PIT",
];

const EUROPE_AIRPORTS: &[&str] = &[
    "CDG", "ORY", "FCO", "CIA", "MXP", "LIN", "MAD", "AGP", "BCN", "IBZ", "VCE", "BIO", "NAP",
    "FLR", "SUF", "LHR",
];

const MIDDLE_EAST_AIRPORTS: &[&str] = &["OMDW"];

// PHX, DEN and SLC sit on both sides of the partition.
const EAST_PARTITION: &[&str] = &[
    "JFK", "LGA", "EWR", "BOS", "ATL", "MIA", "DTW", "PHL", "CLT", "BNA", "ORD", "DFW", "IAH",
    "AUS", "MSP", "DEN", "PHX", "SLC", "FAR", "PIT", "MCO", "JAX",
];

const WEST_PARTITION: &[&str] = &["LAX", "SFO", "SEA", "LAS", "SAN", "PDX", "PHX", "DEN", "SLC"];

/// Airports whose non-long-haul routes are priced in the Europe regional band.
const EUROPE_REGIONAL_FARE_AIRPORTS: &[&str] = &["CDG", "FCO", "MAD", "BCN", "MXP", "SUF", "OMDW"];

/// Hubs one-stop itineraries are routed through.
pub const HUB_AIRPORTS: &[&str] = &["JFK", "ATL", "ORD", "DFW", "LAX", "MIA", "BOS"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Pulls the airport code out of a display label such as `New York (JFK)`.
///
/// Labels without a parenthesised code are trimmed and upper-cased as-is.
/// Blank input yields an empty string, which callers treat as "no airport".
pub fn extract_airport_code(location: &str) -> String {
    if location.trim().is_empty() {
        return String::new();
    }

    if let (Some(open), Some(close)) = (location.find('('), location.find(')')) {
        if close > open {
            return location[open + 1..close].to_uppercase();
        }
    }

    location.trim().to_uppercase()
}

/// Zone label for an airport, falling back to [`DEFAULT_TIME_ZONE`].
pub fn time_zone(code: &str) -> &'static str {
    match code {
        "JFK" | "LGA" | "EWR" | "BOS" | "ATL" | "MIA" | "DTW" | "PHL" | "CLT" | "JAX" | "MCO"
        | "BDL" | "PBI" | "RDU" | "CLE" | "CMH" | "PIT" => "EST",
        "BNA" | "ORD" | "DFW" | "IAH" | "AUS" | "MSP" | "STL" | "MKE" | "TUL" | "OKC" | "ICT"
        | "MCI" | "OMA" | "DSM" | "FSD" | "FAR" | "RAP" => "CST",
        "DEN" | "PHX" | "SLC" | "ABQ" => "MST",
        "LAX" | "SFO" | "SEA" | "LAS" | "SAN" | "PDX" => "PST",
        "CDG" | "ORY" | "FCO" | "CIA" | "MXP" | "LIN" | "MAD" | "AGP" | "BCN" | "IBZ" | "VCE"
        | "BIO" | "NAP" | "FLR" | "SUF" | "LIRF" | "LICS" => "CET",
        "OMDW" => "GST",
        "TNCA" | "TVSA" => "AST",
        "LHR" => "GMT",
        _ => DEFAULT_TIME_ZONE,
    }
}

/// Fixed UTC offset of a zone label. No daylight saving.
pub fn utc_offset_hours(zone: &str) -> i64 {
    match zone {
        "EST" => -5,
        "CST" => -6,
        "MST" => -7,
        "PST" => -8,
        "CET" => 1,
        "GST" => 4,
        "AST" => -4,
        "GMT" => 0,
        _ => DEFAULT_UTC_OFFSET_HOURS,
    }
}

/// Hours to add to an origin clock time to read it on the destination clock.
pub fn offset_difference_hours(origin: &str, destination: &str) -> i64 {
    utc_offset_hours(time_zone(destination)) - utc_offset_hours(time_zone(origin))
}

pub fn coordinates(code: &str) -> Option<Coordinates> {
    let (lat, lon) = match code {
        // US east
        "JFK" => (40.6413, -73.7781),
        "BOS" => (42.3656, -71.0096),
        "BDL" => (41.9383, -72.6839),
        "ATL" => (33.6407, -84.4277),
        "MIA" => (25.7959, -80.287),
        "FLL" => (26.0726, -80.1527),
        "PBI" => (26.6832, -80.0956),
        "JAX" => (30.4941, -81.6879),
        // US central
        "ORD" => (41.9742, -87.9073),
        "DFW" => (32.8975, -97.0382),
        "IAH" => (29.6575, -95.2808),
        "MSP" => (44.882, -93.2169),
        "FAR" => (46.9245, -96.8256),
        "CLE" => (41.4117, -81.8498),
        "STL" => (38.7469, -90.37),
        // US west
        "DEN" => (39.8561, -104.6737),
        "PHX" => (33.7298, -112.1581),
        "ABQ" => (35.0402, -106.6090),
        "LAX" => (33.9425, -118.4081),
        "SFO" => (37.6213, -122.379),
        "SEA" => (47.4502, -122.3088),
        "LAS" => (36.0801, -115.1537),
        "PDX" => (45.5887, -122.5975),
        "SAN" => (32.7336, -117.1897),
        // Europe
        "LHR" => (51.47, -0.4543),
        "CDG" => (49.0097, 2.5479),
        "FCO" => (41.8003, 12.2389),
        "BCN" => (41.2971, 2.0787),
        "MAD" => (40.4719, -3.5603),
        // Middle East
        "OMDW" => (25.2528, 55.3644),
        _ => return None,
    };
    Some(Coordinates { lat, lon })
}

/// Great-circle distance in statute miles between two known airports.
pub fn great_circle_miles(origin: &str, destination: &str) -> Option<f64> {
    const EARTH_RADIUS_MILES: f64 = 3959.0;

    let from = coordinates(origin)?;
    let to = coordinates(destination)?;

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Some(EARTH_RADIUS_MILES * c)
}

pub fn is_us(code: &str) -> bool {
    US_AIRPORTS.contains(&code)
}

pub fn is_europe(code: &str) -> bool {
    EUROPE_AIRPORTS.contains(&code)
}

pub fn is_middle_east(code: &str) -> bool {
    MIDDLE_EAST_AIRPORTS.contains(&code)
}

/// Long-haul classification: any pair spanning two of the US, Europe and
/// Middle East sets, in either direction.
pub fn is_transatlantic(origin: &str, destination: &str) -> bool {
    let spans = |a: fn(&str) -> bool, b: fn(&str) -> bool| {
        (a(origin) && b(destination)) || (b(origin) && a(destination))
    };
    spans(is_us, is_europe) || spans(is_middle_east, is_europe) || spans(is_us, is_middle_east)
}

/// True when the route crosses the east/west US partition.
pub fn is_east_west_usa(origin: &str, destination: &str) -> bool {
    let east = |c: &str| EAST_PARTITION.contains(&c);
    let west = |c: &str| WEST_PARTITION.contains(&c);
    (east(origin) && west(destination)) || (west(origin) && east(destination))
}

/// True when either end is priced in the Europe regional band. Long-haul
/// routes are excluded by the caller.
pub fn touches_europe_regional(origin: &str, destination: &str) -> bool {
    EUROPE_REGIONAL_FARE_AIRPORTS.contains(&origin)
        || EUROPE_REGIONAL_FARE_AIRPORTS.contains(&destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_airport_code() {
        assert_eq!(extract_airport_code("New York (jfk)"), "JFK");
        assert_eq!(extract_airport_code("  lax "), "LAX");
        assert_eq!(extract_airport_code(""), "");
        assert_eq!(extract_airport_code("   "), "");
        // Closing paren before the opening one is not a code.
        assert_eq!(extract_airport_code(")odd( sfo"), ")ODD( SFO");
    }

    #[test]
    fn test_zone_offsets() {
        assert_eq!(time_zone("SEA"), "PST");
        assert_eq!(time_zone("ZZZ"), DEFAULT_TIME_ZONE);
        assert_eq!(utc_offset_hours("GMT"), 0);
        assert_eq!(utc_offset_hours("???"), DEFAULT_UTC_OFFSET_HOURS);
        assert_eq!(offset_difference_hours("JFK", "LAX"), -3);
        assert_eq!(offset_difference_hours("JFK", "LHR"), 5);
        assert_eq!(offset_difference_hours("LHR", "CDG"), 1);
    }

    #[test]
    fn test_great_circle_distance() {
        let miles = great_circle_miles("JFK", "LAX").unwrap();
        assert!((2460.0..2490.0).contains(&miles), "got {miles}");
        assert_eq!(great_circle_miles("JFK", "JFK"), Some(0.0));
        assert!(great_circle_miles("JFK", "XXX").is_none());
    }

    #[test]
    fn test_route_classification() {
        assert!(is_transatlantic("JFK", "LHR"));
        assert!(is_transatlantic("CDG", "BOS"));
        assert!(is_transatlantic("OMDW", "FCO"));
        assert!(is_transatlantic("ATL", "OMDW"));
        assert!(!is_transatlantic("JFK", "LAX"));
        assert!(!is_transatlantic("CDG", "FCO"));

        assert!(is_east_west_usa("JFK", "LAX"));
        assert!(is_east_west_usa("SEA", "BOS"));
        assert!(is_east_west_usa("DEN", "PHX"));
        assert!(!is_east_west_usa("JFK", "BOS"));
        assert!(!is_east_west_usa("LAX", "SFO"));

        assert!(touches_europe_regional("CDG", "FCO"));
        assert!(touches_europe_regional("LHR", "MAD"));
        assert!(!touches_europe_regional("LHR", "JFK"));
    }
}
