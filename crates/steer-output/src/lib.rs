//! `steer-output` — simulation output writers for the steering workspace.
//!
//! | Backend | Files created                                      |
//! |---------|----------------------------------------------------|
//! | CSV     | `vehicle_snapshots.csv`, `step_summaries.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `steer_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use steer_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &sim.config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     log::error!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{StepSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;
