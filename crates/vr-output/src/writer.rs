//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PathRow, ServiceRow};

/// Sink for service events and vehicle positions.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`, since observer callbacks cannot fail.
pub trait OutputWriter {
    /// Write one pickup or drop.
    fn write_service(&mut self, row: &ServiceRow) -> OutputResult<()>;

    /// Write a batch of path-history positions.
    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()>;

    /// Push buffered rows to disk without closing.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
