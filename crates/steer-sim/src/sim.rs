//! The `Sim` struct and its step loop.

use log::{debug, info};
use steer_behavior::{Obstacle, SteerContext, Vehicle, VehicleOptions};
use steer_core::{SimClock, SimConfig, VehicleId, VehicleRng};

use crate::{SimError, SimObserver, SimResult, StepStats};

// ── TrackedVehicle ────────────────────────────────────────────────────────────

/// A vehicle owned by the scheduler, with its identity and private RNG.
#[derive(Debug)]
pub struct TrackedVehicle {
    pub id:      VehicleId,
    pub vehicle: Vehicle,
    rng:         VehicleRng,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The fixed-step simulation runner.
///
/// Step `t` advances every live vehicle to simulated time `(t + 1) * step`:
///
/// 1. **Snapshot** every live vehicle as a non-bounce [`Obstacle`].  Avoid
///    behaviors with `avoid_vehicles` set read this snapshot, so positions
///    seen by a vehicle are those at the start of the step.
/// 2. **Update** each live vehicle in ascending [`VehicleId`] order with
///    [`Vehicle::advance_to`].  Arrivals are reported as they happen.
/// 3. **Remove** every vehicle that finished during the pass.  Removal is
///    deferred until the pass is over.
/// 4. **Report** the step summary and, on the output interval, a snapshot.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or
/// [`Scenario::build`][crate::Scenario::build].
pub struct Sim {
    /// Global configuration (step, total steps, bounds, seed, …).
    pub config: SimConfig,

    /// Simulation clock: tracks the current tick and maps it to time.
    pub clock: SimClock,

    /// Live vehicles, sorted by id.
    vehicles: Vec<TrackedVehicle>,

    /// Id handed to the next spawned vehicle.
    next_id: VehicleId,

    /// Per-step obstacle snapshot, reused between steps.
    neighbors: Vec<Obstacle>,
}

impl Sim {
    pub(crate) fn new(config: SimConfig) -> Self {
        Self {
            clock:     config.make_clock(),
            config,
            vehicles:  Vec::new(),
            next_id:   VehicleId(0),
            neighbors: Vec::new(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.config.validate()?;
        info!(
            "starting run at {}: {} vehicles, {} steps of {}",
            self.clock,
            self.vehicles.len(),
            self.config.total_steps,
            self.config.step,
        );

        let mut arrivals = 0;
        let mut finished = 0;
        while self.clock.current_tick < self.config.end_tick() {
            let stats = self.step(observer);
            arrivals += stats.arrivals;
            finished += stats.finished;
        }
        observer.on_sim_end(self.clock.current_tick);

        info!(
            "run finished at {}: {} live, {} finished, {} arrival reports",
            self.clock,
            self.vehicles.len(),
            finished,
            arrivals,
        );
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.config.validate()?;
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// Add a vehicle at the current simulated time.  It moves from the next
    /// step on.
    pub fn spawn(&mut self, opts: VehicleOptions) -> SimResult<VehicleId> {
        let id = self.next_id;
        if id == VehicleId::INVALID {
            return Err(SimError::IdsExhausted(id.0));
        }
        self.next_id = id.next();

        let mut vehicle = Vehicle::new(opts);
        vehicle.mark_updated(self.clock.now());
        self.vehicles.push(TrackedVehicle {
            id,
            vehicle,
            rng: VehicleRng::new(self.config.seed, id),
        });
        Ok(id)
    }

    /// The live vehicle with `id`, if it has not finished.
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.position_of(id).map(|i| &self.vehicles[i].vehicle)
    }

    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.position_of(id).map(move |i| &mut self.vehicles[i].vehicle)
    }

    /// All live vehicles, in id order.
    #[inline]
    pub fn vehicles(&self) -> &[TrackedVehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Simulated time the vehicles have been advanced to.
    #[inline]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn position_of(&self, id: VehicleId) -> Option<usize> {
        self.vehicles.binary_search_by_key(&id, |t| t.id).ok()
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> StepStats {
        let tick = self.clock.current_tick;
        let now = self.clock.time_at(tick + 1);
        let bounds = self.config.bounds;
        let mut stats = StepStats::default();

        observer.on_step_start(tick);

        // ── Phase 1: snapshot vehicles as obstacles ───────────────────────
        self.neighbors.clear();
        self.neighbors.extend(
            self.vehicles
                .iter()
                .filter(|t| !t.vehicle.is_done())
                .map(|t| Obstacle::from_vehicle(t.id, &t.vehicle)),
        );

        // ── Phase 2: update in id order ───────────────────────────────────
        for TrackedVehicle { id, vehicle, rng } in self.vehicles.iter_mut() {
            if vehicle.is_done() {
                continue;
            }
            let mut ctx = SteerContext::new(now, bounds, *id, &self.neighbors, rng);
            let report = vehicle.advance_to(now, &mut ctx);
            if report.arrived {
                stats.arrivals += 1;
                observer.on_arrival(tick, *id, vehicle);
            }
        }

        // ── Phase 3: deferred removal ─────────────────────────────────────
        self.vehicles.retain(|t| {
            if !t.vehicle.is_done() {
                return true;
            }
            debug!("{} finished at {tick}", t.id);
            observer.on_vehicle_done(tick, t.id, &t.vehicle);
            stats.finished += 1;
            false
        });
        stats.live = self.vehicles.len();

        // ── Phase 4: report ───────────────────────────────────────────────
        self.clock.advance();
        observer.on_step_end(tick, &stats);
        let interval = self.config.output_interval_steps;
        if interval > 0 && tick.0.is_multiple_of(interval) {
            observer.on_snapshot(tick, now, &self.vehicles);
        }
        stats
    }
}
