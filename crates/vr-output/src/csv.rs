//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `service_log.csv`
//! - `path_history.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, PathRow, ServiceRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    services: Writer<File>,
    path:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut services = Writer::from_path(dir.join("service_log.csv"))?;
        services.write_record([
            "seq",
            "event",
            "node_id",
            "is_priority",
            "x",
            "y",
            "leg_distance",
            "leg_time",
            "total_distance",
            "time_elapsed",
            "passengers",
        ])?;

        let mut path = Writer::from_path(dir.join("path_history.csv"))?;
        path.write_record(["step", "x", "y"])?;

        Ok(Self {
            services,
            path,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_service(&mut self, row: &ServiceRow) -> OutputResult<()> {
        self.services.write_record(&[
            row.seq.to_string(),
            row.event.as_str().to_string(),
            row.node_id.to_string(),
            (row.is_priority as u8).to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.leg_distance.to_string(),
            row.leg_time.to_string(),
            row.total_distance.to_string(),
            row.time_elapsed.to_string(),
            row.passengers.to_string(),
        ])?;
        Ok(())
    }

    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        for row in rows {
            self.path.write_record(&[
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.services.flush()?;
        self.path.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
