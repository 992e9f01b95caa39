//! Integration tests for steer-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, SUMMARY_FILE};
    use crate::row::{StepSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(vehicle_id: u32, tick: u64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            vehicle_id,
            tick,
            time:    tick as f64 * 0.01,
            x:       vehicle_id as f64 * 10.0,
            y:       2.5,
            heading: -90.0,
            speed:   12.25,
            color:   "orange".to_owned(),
        }
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SNAPSHOT_FILE).exists());
        assert!(dir.path().join(SUMMARY_FILE).exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let mut w = CsvWriter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join(SNAPSHOT_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, SNAPSHOT_FILE);
        assert_eq!(headers, ["vehicle_id", "tick", "time", "x", "y", "heading", "speed", "color"]);
        assert!(rows.is_empty());

        let (headers, _) = read(&dir, SUMMARY_FILE);
        assert_eq!(headers, ["tick", "time", "live_vehicles", "arrivals", "finished"]);
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, SNAPSHOT_FILE);
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "1");       // vehicle_id
        assert_eq!(&rows[1][1], "5");       // tick
        assert_eq!(&rows[1][2], "0.050");   // time
        assert_eq!(&rows[1][3], "10.000");  // x
        assert_eq!(&rows[1][5], "-90.000"); // heading
        assert_eq!(&rows[1][6], "12.250");  // speed
        assert_eq!(&rows[1][7], "orange");
    }

    #[test]
    fn step_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = StepSummaryRow { tick: 3, time: 0.04, live_vehicles: 7, arrivals: 2, finished: 1 };
        w.write_step_summary(&row).unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, SUMMARY_FILE);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "0.040", "7", "2", "1"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use steer_behavior::{ArrivalAction, Seek, VehicleOptions};
    use steer_core::{Point, SimConfig};
    use steer_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, SUMMARY_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::{StepSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn config() -> SimConfig {
        SimConfig {
            step:                  0.5,
            total_steps:           6,
            seed:                  1,
            output_interval_steps: 2,
            ..SimConfig::default()
        }
    }

    fn cruiser(y: f64) -> VehicleOptions {
        VehicleOptions { position: Point::new(0.0, y), speed: 4.0, ..VehicleOptions::default() }
    }

    /// Parked on its own target; leaves on the first step.
    fn leaver() -> VehicleOptions {
        VehicleOptions {
            position:  Point::new(50.0, 50.0),
            behaviors: vec![Seek::new(Point::new(50.0, 50.0)).on_arrival(ArrivalAction::Finish).into()],
            ..VehicleOptions::default()
        }
    }

    #[test]
    fn run_writes_csv() {
        let dir = TempDir::new().unwrap();
        let mut sim = SimBuilder::new(config())
            .vehicles([cruiser(10.0), cruiser(20.0), leaver()])
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &sim.config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        // Snapshots at ticks 0, 2, 4, two live vehicles each.
        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][2], "0.500");
        assert_eq!(&rows[0][3], "2.000");
        assert_eq!(&rows[5][1], "4");
        assert_eq!(&rows[5][3], "10.000");

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["0", "0.500", "2", "1", "1"]);
        assert_eq!(rows[5].iter().collect::<Vec<_>>(), ["5", "3.000", "2", "0", "0"]);
    }

    /// Fails every write after the first `ok` ones.
    struct Flaky {
        ok:    usize,
        calls: usize,
    }

    impl OutputWriter for Flaky {
        fn write_snapshots(&mut self, _rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            self.tick()
        }
        fn write_step_summary(&mut self, _row: &StepSummaryRow) -> OutputResult<()> {
            self.tick()
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    impl Flaky {
        fn tick(&mut self) -> OutputResult<()> {
            self.calls += 1;
            if self.calls > self.ok {
                let msg = format!("write {} refused", self.calls);
                return Err(OutputError::Io(std::io::Error::other(msg)));
            }
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(config()).vehicle(cruiser(0.0)).build().unwrap();
        let mut obs = SimOutputObserver::new(Flaky { ok: 2, calls: 0 }, &sim.config);
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("an error");
        assert!(err.to_string().contains("write 3 refused"), "{err}");
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().calls > 3, "writes continue after a failure");
    }
}
