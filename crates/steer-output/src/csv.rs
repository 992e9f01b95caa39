//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepSummaryRow, VehicleSnapshotRow};

pub const SNAPSHOT_FILE: &str = "vehicle_snapshots.csv";
pub const SUMMARY_FILE: &str = "step_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["vehicle_id", "tick", "time", "x", "y", "heading", "speed", "color"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record(["tick", "time", "live_vehicles", "arrivals", "finished"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.vehicle_id.to_string(),
                row.tick.to_string(),
                format!("{:.3}", row.time),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                format!("{:.3}", row.heading),
                format!("{:.3}", row.speed),
                row.color.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.time),
            row.live_vehicles.to_string(),
            row.arrivals.to_string(),
            row.finished.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
