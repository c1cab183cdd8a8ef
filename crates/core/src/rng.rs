//! RNG module - randomness for tile spawning
//!
//! The engine never reaches for a global random source. Every operation that
//! spawns takes a [`SpawnRng`], so games are reproducible from a seed and
//! tests can script exact spawn positions and values.
//!
//! Two sources are provided:
//!
//! - [`SimpleRng`]: a tiny LCG, identical on every platform (good for replays)
//! - [`RandRng`]: wraps any [`rand::Rng`] (e.g. `StdRng`, `thread_rng()`)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws for the spawner
pub trait SpawnRng {
    /// Uniform value in `[0, bound)`. Callers never pass `bound == 0`.
    fn below(&mut self, bound: u32) -> u32;
}

impl<R: SpawnRng + ?Sized> SpawnRng for &mut R {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with a short
    /// period (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Current internal state (feed back into [`SimpleRng::new`] to resume)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SpawnRng for SimpleRng {
    fn below(&mut self, bound: u32) -> u32 {
        self.next_range(bound)
    }
}

/// Adapter from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandRng<R>(pub R);

impl RandRng<StdRng> {
    /// Seeded `StdRng`
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// `StdRng` seeded from the operating system
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> SpawnRng for RandRng<R> {
    fn below(&mut self, bound: u32) -> u32 {
        self.0.gen_range(0..bound)
    }
}
