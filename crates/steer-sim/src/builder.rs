//! Fluent builder for constructing a [`Sim`].

use steer_behavior::VehicleOptions;
use steer_core::SimConfig;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// Vehicles are spawned in the order they were added, so the first one gets
/// `VehicleId(0)`.  Each gets an RNG seeded from `(config.seed, id)` and
/// starts at simulated time 0.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .vehicle(VehicleOptions { speed: 10.0, ..VehicleOptions::default() })
///     .vehicles(more_options)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    vehicles: Vec<VehicleOptions>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, vehicles: Vec::new() }
    }

    /// Add one vehicle.
    pub fn vehicle(mut self, opts: VehicleOptions) -> Self {
        self.vehicles.push(opts);
        self
    }

    /// Add several vehicles.
    pub fn vehicles(mut self, opts: impl IntoIterator<Item = VehicleOptions>) -> Self {
        self.vehicles.extend(opts);
        self
    }

    /// Validate the configuration and spawn every vehicle.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut sim = Sim::new(self.config);
        for opts in self.vehicles {
            sim.spawn(opts)?;
        }
        Ok(sim)
    }
}
