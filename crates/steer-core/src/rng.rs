//! Deterministic per-vehicle and simulation-level RNG wrappers, plus the
//! `RandomVar` distributions used by behaviors.
//!
//! # Determinism strategy
//!
//! Each vehicle gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (vehicle_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive vehicle IDs uniformly across the seed space.
//! Spawning or removing a vehicle therefore never disturbs the random
//! stream of any other vehicle, and a run is reproducible from its seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::VehicleId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── VehicleRng ────────────────────────────────────────────────────────────────

/// Per-vehicle deterministic RNG.
///
/// Handed to behaviors through the steering context so wander sampling and
/// bounce jitter are reproducible in tests.
#[derive(Clone, Debug)]
pub struct VehicleRng(SmallRng);

impl VehicleRng {
    /// Seed deterministically from the run's global seed and a vehicle ID.
    pub fn new(global_seed: u64, vehicle: VehicleId) -> Self {
        let seed = global_seed ^ (vehicle.0 as u64).wrapping_mul(MIXING_CONSTANT);
        VehicleRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Draw one sample from `var`.
    #[inline]
    pub fn sample(&mut self, var: &RandomVar) -> f64 {
        var.sample(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for scenario set-up (initial positions, speeds, …).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn sample(&mut self, var: &RandomVar) -> f64 {
        var.sample(&mut self.0)
    }
}

// ── RandomVar ─────────────────────────────────────────────────────────────────

/// A scalar random variable.
///
/// Degenerate parameters never panic: an empty or inverted uniform range
/// yields `min`, and a non-positive exponential mean yields `0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RandomVar {
    /// Always the same value.
    Constant { value: f64 },

    /// Uniform on `[min, max)`.
    Uniform { min: f64, max: f64 },

    /// Exponential with the given mean.
    Exponential { mean: f64 },
}

impl RandomVar {
    #[inline]
    pub fn constant(value: f64) -> Self {
        RandomVar::Constant { value }
    }

    #[inline]
    pub fn uniform(min: f64, max: f64) -> Self {
        RandomVar::Uniform { min, max }
    }

    #[inline]
    pub fn exponential(mean: f64) -> Self {
        RandomVar::Exponential { mean }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            RandomVar::Constant { value } => value,
            RandomVar::Uniform { min, max } => {
                if max > min {
                    min + rng.r#gen::<f64>() * (max - min)
                } else {
                    min
                }
            }
            RandomVar::Exponential { mean } => {
                if mean > 0.0 {
                    // `gen` is in [0, 1), so 1 - u is in (0, 1] and ln is finite.
                    -mean * (1.0 - rng.r#gen::<f64>()).ln()
                } else {
                    0.0
                }
            }
        }
    }

    /// Expected value of the distribution.
    pub fn mean(&self) -> f64 {
        match *self {
            RandomVar::Constant { value } => value,
            RandomVar::Uniform { min, max } => {
                if max > min { (min + max) * 0.5 } else { min }
            }
            RandomVar::Exponential { mean } => mean.max(0.0),
        }
    }
}
