pub mod airports;
pub mod dates;
pub mod duration;
pub mod route;
mod tables;

pub use duration::{calculated_block_time, estimate_duration, generator_block_time, scheduled_duration};
pub use route::RouteKey;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid route key: {0}")]
    InvalidRoute(String),
    #[error("Invalid travel date: {0}")]
    InvalidDate(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Rounds half-way cases towards positive infinity, the way the fare and
/// duration arithmetic has always been rounded.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
    }
}
