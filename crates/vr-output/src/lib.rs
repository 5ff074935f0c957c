//! `vr-output`: simulation output writers for the rust_vr simulator.
//!
//! | Backend | Files created                               |
//! |---------|---------------------------------------------|
//! | CSV     | `service_log.csv`, `path_history.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `vr_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vr_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_auto(&mut obs)?;
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PathRow, ServiceEvent, ServiceRow};
pub use writer::OutputWriter;
