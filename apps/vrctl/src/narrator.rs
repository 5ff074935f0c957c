//! Console narration of simulation events, with optional CSV recording.

use vr_core::{NodeId, Point};
use vr_output::{CsvWriter, OutputError, SimOutputObserver};
use vr_registry::{Node, NodeRegistry};
use vr_sim::{RunSummary, SimObserver};
use vr_vehicle::{Leg, Vehicle};

use crate::report::priority_marker;

/// Buffers one line of operator text per event and forwards every callback
/// to the CSV observer when `--output` was given.
///
/// Lines are buffered rather than printed so the session decides where they
/// go (stdout in the binary, a byte buffer in tests).
pub struct Narrator {
    lines:  Vec<String>,
    output: Option<SimOutputObserver<CsvWriter>>,
}

impl Narrator {
    pub fn new(output: Option<SimOutputObserver<CsvWriter>>) -> Self {
        Self { lines: Vec::new(), output }
    }

    /// Narration produced since the last call.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// The first CSV write error, if any.  Recording stops after an error.
    pub fn take_output_error(&mut self) -> Option<OutputError> {
        let err = self.output.as_mut()?.take_error();
        if err.is_some() {
            self.output = None;
        }
        err
    }

    /// Close the CSV files.  Returns the service rows written and the first
    /// write error, if any.
    pub fn finish(&mut self) -> Option<(u64, Option<OutputError>)> {
        let mut output = self.output.take()?;
        output.finish();
        Some((output.rows_written(), output.take_error()))
    }
}

impl SimObserver for Narrator {
    fn on_dispatch(&mut self, from: Point, next: NodeId) {
        self.lines.push(format!("Moving to next optimal node: {next}"));
        if let Some(out) = self.output.as_mut() {
            out.on_dispatch(from, next);
        }
    }

    fn on_pickup(&mut self, node: &Node, leg: &Leg, vehicle: &Vehicle) {
        self.lines.push(format!(
            "Picked up passenger at node {}{}",
            node.id,
            priority_marker(node)
        ));
        self.lines.push(format!(
            "Distance traveled: {:.2} km | Time taken: {:.2} hours",
            leg.distance, leg.time
        ));
        if let Some(out) = self.output.as_mut() {
            out.on_pickup(node, leg, vehicle);
        }
    }

    fn on_drop(&mut self, node: &Node, vehicle: &Vehicle) {
        self.lines.push(format!("Dropped passenger from node {}", node.id));
        if let Some(out) = self.output.as_mut() {
            out.on_drop(node, vehicle);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary, registry: &NodeRegistry, vehicle: &Vehicle) {
        self.lines.push("All nodes serviced!".to_string());
        self.lines.push(format!("Total distance: {:.2} km", summary.total_distance));
        self.lines.push(format!("Total time: {:.2} hours", summary.time_elapsed));
        if let Some(out) = self.output.as_mut() {
            out.on_run_end(summary, registry, vehicle);
        }
    }
}
