pub mod clock;
pub mod connections;
pub mod draw;
pub mod generator;
pub mod models;
pub mod redbird;

pub use draw::{route_seed, DrawStream};
pub use generator::{get_flights, FlightGenerator};
pub use models::{FlightRequest, ResolvedSearch};
