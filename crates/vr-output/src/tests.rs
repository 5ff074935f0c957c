//! Integration tests for vr-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PathRow, ServiceEvent, ServiceRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn service_row(seq: u64, event: ServiceEvent) -> ServiceRow {
        ServiceRow {
            seq,
            event,
            node_id:        3,
            is_priority:    true,
            x:              1.5,
            y:              2.0,
            leg_distance:   2.5,
            leg_time:       0.25,
            total_distance: 12.5,
            time_elapsed:   1.25,
            passengers:     1,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("service_log.csv").exists());
        assert!(dir.path().join("path_history.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("service_log.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "seq", "event", "node_id", "is_priority", "x", "y", "leg_distance", "leg_time",
                "total_distance", "time_elapsed", "passengers",
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("path_history.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["step", "x", "y"]);
    }

    #[test]
    fn csv_service_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_service(&service_row(0, ServiceEvent::Pickup)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("service_log.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "pickup");
        assert_eq!(&rows[0][2], "3");    // node_id
        assert_eq!(&rows[0][3], "1");    // is_priority
        assert_eq!(&rows[0][7], "0.25"); // leg_time
    }

    #[test]
    fn csv_path_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_path(&[
            PathRow { step: 0, x: 0.0, y: 0.0 },
            PathRow { step: 1, x: 10.0, y: 0.5 },
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("path_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "10");
        assert_eq!(&rows[1][2], "0.5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use vr_core::Point;
    use vr_dispatch::GreedyPriorityPolicy;
    use vr_registry::RegistryBuilder;
    use vr_sim::SimBuilder;

    use crate::{CsvWriter, OutputResult, OutputWriter, PathRow, ServiceEvent, ServiceRow, SimOutputObserver};

    /// In-memory writer for inspecting exactly what the observer emits.
    #[derive(Default)]
    struct MemWriter {
        services: Vec<ServiceRow>,
        path:     Vec<PathRow>,
        flushes:  usize,
        finished: bool,
    }

    impl OutputWriter for MemWriter {
        fn write_service(&mut self, row: &ServiceRow) -> OutputResult<()> {
            self.services.push(*row);
            Ok(())
        }
        fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()> {
            self.path.extend_from_slice(rows);
            Ok(())
        }
        fn flush(&mut self) -> OutputResult<()> {
            self.flushes += 1;
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    /// Writer whose every call fails.
    struct BrokenWriter;

    impl OutputWriter for BrokenWriter {
        fn write_service(&mut self, _row: &ServiceRow) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn write_path(&mut self, _rows: &[PathRow]) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn flush(&mut self) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn scenario_sim() -> vr_sim::Sim<GreedyPriorityPolicy> {
        let mut b = RegistryBuilder::new();
        b.add_node(Point::new(0.0, 0.0), false);
        b.add_node(Point::new(10.0, 0.0), true);
        b.add_node(Point::new(1.0, 0.0), false);
        SimBuilder::new(b.build(), GreedyPriorityPolicy).speed(10.0).build().unwrap()
    }

    #[test]
    fn auto_run_logs_pickup_drop_pairs() {
        let mut sim = scenario_sim();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run_auto(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 6);

        let w = obs.into_writer();
        let events: Vec<(ServiceEvent, u32)> = w.services.iter().map(|r| (r.event, r.node_id)).collect();
        assert_eq!(
            events,
            vec![
                (ServiceEvent::Pickup, 2),
                (ServiceEvent::Drop, 2),
                (ServiceEvent::Pickup, 3),
                (ServiceEvent::Drop, 3),
                (ServiceEvent::Pickup, 1),
                (ServiceEvent::Drop, 1),
            ]
        );
        assert_eq!(w.services[0].leg_distance, 10.0);
        assert_eq!(w.services[0].passengers, 1);
        assert_eq!(w.services[1].leg_distance, 0.0);
        assert_eq!(w.services[1].passengers, 0);
        assert!(w.services.windows(2).all(|p| p[1].seq == p[0].seq + 1));

        // Start position plus one entry per pickup.
        let steps: Vec<u64> = w.path.iter().map(|r| r.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3]);
        assert_eq!((w.path[1].x, w.path[1].y), (10.0, 0.0));
        assert_eq!(w.flushes, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = scenario_sim();
        let mut obs = SimOutputObserver::new(BrokenWriter);
        sim.run_auto(&mut obs).unwrap();
        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn finish_closes_writer() {
        let mut obs = SimOutputObserver::new(MemWriter::default());
        obs.finish();
        assert!(obs.into_writer().finished);
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = scenario_sim();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_auto(&mut obs).unwrap();
        obs.finish();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("service_log.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);
        let mut rdr = csv::Reader::from_path(dir.path().join("path_history.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4);
    }
}
