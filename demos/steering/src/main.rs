//! steering — runs one of the sample steering scenarios and writes its
//! trajectories to CSV.
//!
//! ```text
//! steering [config.json]
//! ```
//!
//! Without a config file the seek-avoid scenario runs with 8 vehicles for
//! 60 units of simulated time.  `RUST_LOG` controls log verbosity.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

use steer_behavior::Vehicle;
use steer_core::{SimConfig, Tick, VehicleId};
use steer_output::{CsvWriter, OutputWriter, SimOutputObserver};
use steer_sim::{Scenario, SimObserver, StepStats, TrackedVehicle};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DemoConfig {
    scenario:     Scenario,
    entity_count: usize,
    sim:          SimConfig,
    output_dir:   PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            scenario:     Scenario::SeekAvoid,
            entity_count: Scenario::DEFAULT_ENTITY_COUNT,
            sim:          SimConfig { total_steps: 6_000, output_interval_steps: 50, ..SimConfig::default() },
            output_dir:   PathBuf::from("output/steering"),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer wrapper to count events ──────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    arrivals:      usize,
    finished:      usize,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, arrivals: 0, finished: 0, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_arrival(&mut self, _tick: Tick, _id: VehicleId, _vehicle: &Vehicle) {
        self.arrivals += 1;
    }

    fn on_vehicle_done(&mut self, tick: Tick, id: VehicleId, vehicle: &Vehicle) {
        self.finished += 1;
        info!("{id} left at {tick} from {}", vehicle.position());
    }

    fn on_step_end(&mut self, tick: Tick, stats: &StepStats) {
        self.summary_rows += 1;
        self.inner.on_step_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, now: f64, vehicles: &[TrackedVehicle]) {
        self.snapshot_rows += vehicles.len();
        self.inner.on_snapshot(tick, now, vehicles);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    info!(
        "scenario {}: {} vehicles, {} steps of {}, seed {}",
        config.scenario,
        config.entity_count,
        config.sim.total_steps,
        config.sim.step,
        config.sim.seed,
    );

    let mut sim = config.scenario.build(config.sim.clone(), config.entity_count)?;

    let writer = CsvWriter::new(&config.output_dir)
        .with_context(|| format!("opening output in {}", config.output_dir.display()))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &sim.config));

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!("output error: {e}");
    }

    info!("simulation complete in {:.3} s", elapsed.as_secs_f64());
    info!("  vehicle_snapshots.csv : {} rows", obs.snapshot_rows);
    info!("  step_summaries.csv    : {} rows", obs.summary_rows);
    info!("  arrival reports       : {}", obs.arrivals);
    info!("  vehicles finished     : {}", obs.finished);

    println!("{:<12} {:>9} {:>9} {:>8} {:>7}", "Vehicle", "x", "y", "heading", "speed");
    println!("{}", "-".repeat(49));
    for t in sim.vehicles() {
        let p = t.vehicle.position();
        println!(
            "{:<12} {:>9.2} {:>9.2} {:>8.1} {:>7.2}",
            t.id.0,
            p.x,
            p.y,
            t.vehicle.heading(),
            t.vehicle.speed(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: DemoConfig =
            serde_json::from_str(r#"{ "scenario": "avoid-vehicles", "sim": { "seed": 9 } }"#).unwrap();
        assert_eq!(config.scenario, Scenario::AvoidVehicles);
        assert_eq!(config.entity_count, Scenario::DEFAULT_ENTITY_COUNT);
        assert_eq!(config.sim.seed, 9);
        assert_eq!(config.sim.step, 0.01);
    }

    #[test]
    fn sample_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.json");
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.scenario, Scenario::SeekAvoid);
        assert_eq!(config.entity_count, 20);
        assert_eq!(config.sim.output_interval_steps, 50);
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(serde_json::from_str::<DemoConfig>(r#"{ "scenrio": "seek" }"#).is_err());
    }
}
