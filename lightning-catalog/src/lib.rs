pub mod fleet;
pub mod pricing;

pub use fleet::Fleet;
pub use pricing::{CabinClass, FareBand, FareRoute, PricingConfig, PricingEngine};
