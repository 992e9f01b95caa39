//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use steer_core::{SimConfig, Tick};
use steer_sim::{SimObserver, StepStats, TrackedVehicle};

use crate::OutputError;
use crate::row::{StepSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes vehicle snapshots and step summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    step:       f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert steps
    /// to simulated time.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            step:       config.step,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, tick: Tick, stats: &StepStats) {
        let row = StepSummaryRow {
            tick:          tick.0,
            time:          (tick.0 + 1) as f64 * self.step,
            live_vehicles: stats.live as u64,
            arrivals:      stats.arrivals as u64,
            finished:      stats.finished as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, now: f64, vehicles: &[TrackedVehicle]) {
        let rows: Vec<VehicleSnapshotRow> = vehicles
            .iter()
            .map(|t| VehicleSnapshotRow::new(t.id, tick, now, &t.vehicle))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
