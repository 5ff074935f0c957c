//! Scenario configuration.

use crate::{NodeId, Point, VrError, VrResult};

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the scenario generator and sim builder.
/// Missing fields fall back to [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of service nodes to scatter.  Ids run `1..=node_count`.
    pub node_count: usize,

    /// Master RNG seed.  The same seed always produces the same layout.
    pub seed: u64,

    /// Nodes are scattered uniformly over `[0, extent) × [0, extent)`.
    pub extent: f64,

    /// Vehicle speed in distance units per time unit.  Must be > 0.
    pub speed: f64,

    /// Where the vehicle starts.
    pub start: Point,

    /// Nodes that must be serviced before any regular node.
    pub priority_ids: Vec<NodeId>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            node_count:   15,
            seed:         42,
            extent:       50.0,
            speed:        35.0,
            start:        Point::ORIGIN,
            priority_ids: vec![NodeId(5), NodeId(7)],
        }
    }
}

impl SimConfig {
    /// Reject configurations the simulator cannot run.
    pub fn validate(&self) -> VrResult<()> {
        if self.node_count == 0 {
            return Err(VrError::Config("node_count must be at least 1".into()));
        }
        if u32::try_from(self.node_count).is_err() {
            return Err(VrError::Config(format!("node_count {} is too large", self.node_count)));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(VrError::Config(format!("speed must be positive, got {}", self.speed)));
        }
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(VrError::Config(format!("extent must be positive, got {}", self.extent)));
        }
        if !(self.start.x.is_finite() && self.start.y.is_finite()) {
            return Err(VrError::Config(format!("start position {} is not finite", self.start)));
        }
        if let Some(bad) = self
            .priority_ids
            .iter()
            .find(|id| !id.is_valid() || id.0 as usize > self.node_count)
        {
            return Err(VrError::NodeNotFound(*bad));
        }
        Ok(())
    }

    #[inline]
    pub fn is_priority(&self, id: NodeId) -> bool {
        self.priority_ids.contains(&id)
    }
}
