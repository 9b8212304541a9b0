use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BodyType {
    NarrowBody,
    WideBody,
}

/// An aircraft type with its seat-map dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    pub name: String,
    #[serde(rename = "type")]
    pub body: BodyType,
    pub rows: u32,
    pub seats_per_row: u32,
}

impl Aircraft {
    pub fn capacity(&self) -> u32 {
        self.rows * self.seats_per_row
    }
}

/// One end of a flight: local clock label, zone label and airport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    /// 12-hour clock, e.g. `7:05 AM`.
    pub time: String,
    pub time_zone: String,
    pub airport: String,
    /// Local calendar date of `time`.
    pub date: NaiveDate,
}

/// A single leg inside a one-stop itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectingLeg {
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration: String,
    pub aircraft: Aircraft,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layover_duration: Option<String>,
}

/// A generated flight offer. Nothing here is persisted; the same search
/// always derives the same values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration: String,
    pub aircraft: Aircraft,
    pub price: u32,
    pub stops: u32,
    pub available_seats: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connecting_flights: Option<Vec<ConnectingLeg>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layover_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layover_duration: Option<String>,
}
