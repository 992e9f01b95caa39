//! Simulation time model.
//!
//! # Design
//!
//! The scheduler advances in fixed steps counted by an integer `Tick`.  The
//! mapping to simulated time is held in `SimClock`:
//!
//!   time = tick * step
//!
//! Counting steps as integers keeps the step sequence free of accumulated
//! floating-point drift; only the conversion to `f64` time is inexact.
//! Vehicles themselves integrate with whatever `dt` they are handed, so the
//! kinematics stay correct under a variable step as well.

use std::fmt;

use crate::{Bounds, SteerError, SteerResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated time.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Simulated time units per tick.
    pub step: f64,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(step: f64) -> Self {
        Self { step, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated time at `tick`.
    #[inline]
    pub fn time_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.step
    }

    /// Simulated time at the current tick.
    #[inline]
    pub fn now(&self) -> f64 {
        self.time_at(self.current_tick)
    }

    /// How many ticks span `duration` time units (rounds up).
    pub fn ticks_for(&self, duration: f64) -> u64 {
        if duration <= 0.0 {
            return 0;
        }
        (duration / self.step).ceil() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {:.3})", self.current_tick, self.now())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level scheduler configuration.
///
/// Loaded from JSON by the demo application (with the `serde` feature) and
/// passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulated time between two scheduler steps.  Default: 0.01.
    pub step: f64,

    /// Total steps to simulate.
    pub total_steps: u64,

    /// The simulation surface used by Wrap, Bounce and Seek.
    pub bounds: Bounds,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit a vehicle snapshot every N steps.  0 disables snapshots.
    pub output_interval_steps: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            step:                  0.01,
            total_steps:           10_000,
            bounds:                Bounds::default(),
            seed:                  42,
            output_interval_steps: 100,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_steps)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.step)
    }

    /// Reject configurations the scheduler cannot run.
    pub fn validate(&self) -> SteerResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SteerError::InvalidStep(self.step));
        }
        if !self.bounds.is_valid() {
            return Err(SteerError::InvalidBounds(self.bounds));
        }
        Ok(())
    }
}
