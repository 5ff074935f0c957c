//! Node lifecycle status.

/// Where a node is in its service lifecycle.
///
/// The only legal moves are `Waiting → Picked` and `Picked → Dropped`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeStatus {
    /// Waiting for the vehicle (default state).
    #[default]
    Waiting,
    /// Aboard the vehicle.
    Picked,
    /// Serviced.  Terminal.
    Dropped,
}

impl NodeStatus {
    /// The status this one may advance to, or `None` if terminal.
    #[inline]
    pub fn next(self) -> Option<NodeStatus> {
        match self {
            NodeStatus::Waiting => Some(NodeStatus::Picked),
            NodeStatus::Picked  => Some(NodeStatus::Dropped),
            NodeStatus::Dropped => None,
        }
    }

    /// `true` if `to` is exactly one step forward from `self`.
    #[inline]
    pub fn can_advance_to(self, to: NodeStatus) -> bool {
        self.next() == Some(to)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Human-readable label used in status reports and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeStatus::Waiting => "waiting",
            NodeStatus::Picked  => "picked",
            NodeStatus::Dropped => "dropped",
        }
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
