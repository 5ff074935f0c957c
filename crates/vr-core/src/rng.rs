//! Deterministic simulation-level RNG wrapper.
//!
//! Only scenario generation draws random numbers; dispatch itself is fully
//! deterministic.  A fixed seed therefore reproduces an entire run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Point;

/// Simulation-level RNG used for scattering nodes.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A point drawn uniformly from `[0, extent) × [0, extent)`.
    pub fn point_in_square(&mut self, extent: f64) -> Point {
        let x = self.0.gen_range(0.0..extent);
        let y = self.0.gen_range(0.0..extent);
        Point::new(x, y)
    }
}
