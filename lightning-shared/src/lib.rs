pub mod models;

pub use models::duration::{DurationEstimate, DurationLookup, DurationSource};
pub use models::flight::{Aircraft, BodyType, ConnectingLeg, Flight, FlightEndpoint};
