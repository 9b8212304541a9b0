//! Seeded draws.
//!
//! A search is reduced to a 32-bit seed by hashing its key string. Draws are
//! then addressed by an integer index that starts at the seed and is bumped
//! by one per draw, so the `n`th draw of a search is always the fraction at
//! index `seed + n`. The fraction at an index is the first `f64` produced by
//! [`StdRng`] seeded with that index, which keeps the mapping portable and
//! independent of any platform maths library.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Java-style string hash (`h = h * 31 + unit`) over UTF-16 code units,
/// wrapping at 32 bits.
pub fn route_seed(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// The fraction in `[0, 1)` at a draw index.
pub fn fraction_at(index: i64) -> f64 {
    StdRng::seed_from_u64(index as u64).gen::<f64>()
}

/// `floor(draw * span)`
pub fn scaled(draw: f64, span: u32) -> i64 {
    (draw * f64::from(span)).floor() as i64
}

/// Picks an element uniformly; `None` only for an empty slice.
pub fn pick<T>(draw: f64, items: &[T]) -> Option<&T> {
    let index = (draw * items.len() as f64).floor() as usize;
    items.get(index.min(items.len().saturating_sub(1)))
}

/// Cursor over the draw indices of one search.
#[derive(Debug, Clone)]
pub struct DrawStream {
    index: i64,
}

impl DrawStream {
    pub fn new(seed: i32) -> Self {
        Self {
            index: i64::from(seed),
        }
    }

    /// Fraction at the current index, without moving.
    pub fn current(&self) -> f64 {
        fraction_at(self.index)
    }

    /// Moves to the next index and returns its fraction.
    pub fn next_draw(&mut self) -> f64 {
        self.advance();
        self.current()
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }
}
