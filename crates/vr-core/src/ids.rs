//! Strongly typed node identifier.
//!
//! Node ids are 1-based: the registry hands out `NodeId(1) ..= NodeId(N)` in
//! creation order.  `NodeId(0)` is never assigned and doubles as the
//! "no node" sentinel.

use std::fmt;
use std::str::FromStr;

/// Identifier of a service node.  Unique within a registry, assigned at
/// creation, never reused.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel meaning "no valid node".
    pub const INVALID: NodeId = NodeId(0);

    /// Zero-based slot of this id in a densely packed `Vec`.
    ///
    /// Returns `None` for `INVALID`.
    #[inline(always)]
    pub fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// The id stored at zero-based `slot`.
    #[inline(always)]
    pub fn from_slot(slot: usize) -> NodeId {
        NodeId(slot as u32 + 1)
    }

    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for NodeId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<NodeId, Self::Err> {
        s.parse::<u32>().map(NodeId)
    }
}
