//! Seedable randomness shared by a whole simulation run.
//!
//! A run owns exactly one [`SimRng`].  Every agent draws its jitter and noise
//! from it in a fixed order (ascending `AgentId` during the stage phase), so a
//! fixed seed reproduces a run bit-for-bit.
//!
//! Behavior code only sees the [`RandomSource`] trait, which lets tests
//! substitute a scripted or zero-valued source.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// The two distributions the flocking rules draw from.
pub trait RandomSource {
    /// One sample from `N(mean, std_dev²)`.
    ///
    /// A `std_dev` of zero returns `mean` exactly.
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64;

    /// One sample from `U[min, max)`.  Returns `min` if the range is empty.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).gaussian(mean, std_dev)
    }

    #[inline]
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        (**self).uniform(min, max)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// `Clone` so tests can fork the exact generator state and replay a stage.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        if std_dev == 0.0 {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(normal) => normal.sample(&mut self.0),
            // Negative or non-finite spread; validated params never get here.
            Err(_) => mean,
        }
    }

    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if min < max { self.0.gen_range(min..max) } else { min }
    }
}
