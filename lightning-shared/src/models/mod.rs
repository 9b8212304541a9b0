pub mod duration;
pub mod flight;
