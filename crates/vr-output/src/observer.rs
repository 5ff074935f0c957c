//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use vr_registry::{Node, NodeRegistry};
use vr_sim::{RunSummary, SimObserver};
use vr_vehicle::{Leg, Vehicle};

use crate::row::{PathRow, ServiceEvent, ServiceRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that logs every pickup and drop, and every new path
/// position, to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  Check with
/// [`take_error`][Self::take_error] once the session ends.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    seq:          u64,
    /// Number of path entries already written.
    path_written: usize,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            seq:          0,
            path_written: 0,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of service rows emitted so far.
    pub fn rows_written(&self) -> u64 {
        self.seq
    }

    /// Close the writer.  Further callbacks are still accepted but may be
    /// lost by backends that do not reopen.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the session).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn record(&mut self, event: ServiceEvent, node: &Node, leg: Option<&Leg>, vehicle: &Vehicle) {
        let row = ServiceRow {
            seq:            self.seq,
            event,
            node_id:        node.id.0,
            is_priority:    node.is_priority,
            x:              node.pos.x,
            y:              node.pos.y,
            leg_distance:   leg.map_or(0.0, |l| l.distance),
            leg_time:       leg.map_or(0.0, |l| l.time),
            total_distance: vehicle.total_distance(),
            time_elapsed:   vehicle.time_elapsed(),
            passengers:     vehicle.passengers().len() as u32,
        };
        self.seq += 1;
        let result = self.writer.write_service(&row);
        self.store_err(result);
        self.sync_path(vehicle);
    }

    /// Write any path entries not yet written, including the start position
    /// on first call.
    fn sync_path(&mut self, vehicle: &Vehicle) {
        let path = vehicle.path();
        if self.path_written >= path.len() {
            return;
        }
        let rows: Vec<PathRow> = path[self.path_written..]
            .iter()
            .enumerate()
            .map(|(i, p)| PathRow {
                step: (self.path_written + i) as u64,
                x:    p.x,
                y:    p.y,
            })
            .collect();
        self.path_written = path.len();
        let result = self.writer.write_path(&rows);
        self.store_err(result);
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_pickup(&mut self, node: &Node, leg: &Leg, vehicle: &Vehicle) {
        self.record(ServiceEvent::Pickup, node, Some(leg), vehicle);
    }

    fn on_drop(&mut self, node: &Node, vehicle: &Vehicle) {
        self.record(ServiceEvent::Drop, node, None, vehicle);
    }

    fn on_run_end(&mut self, _summary: &RunSummary, _registry: &NodeRegistry, vehicle: &Vehicle) {
        self.sync_path(vehicle);
        let result = self.writer.flush();
        self.store_err(result);
    }
}
