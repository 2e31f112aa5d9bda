//! Random tablet colours.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest 24-bit RGB value.
const MAX_RGB: u32 = 0x00FF_FFFF;

/// Pick a uniformly random `#RRGGBB` colour from `rng`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06X}", rng.random_range(0..=MAX_RGB))
}

/// Source of colours for newly drawn tablets.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    rng: StdRng,
}

impl ColorPicker {
    /// A picker seeded from the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// A picker that yields the same colour sequence for the same seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn next_color(&mut self) -> String {
        random_color(&mut self.rng)
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}
