use thiserror::Error;

use vr_core::NodeId;
use vr_registry::{NodeStatus, RegistryError};
use vr_vehicle::VehicleError;

/// Everything a simulation operation can reject.
///
/// The first three variants are the operator-facing failures: they are
/// recoverable and guarantee that no state was modified.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("node {id} is not waiting for pickup (status: {status})")]
    NotWaiting { id: NodeId, status: NodeStatus },

    #[error("passenger {0} is not in the vehicle")]
    NotCarried(NodeId),

    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("vehicle error: {0}")]
    Vehicle(#[from] VehicleError),
}

impl SimError {
    /// `true` for unknown node ids.
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, SimError::UnknownNode(_))
    }

    /// `true` for operations that are illegal in the node's current state.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, SimError::NotWaiting { .. } | SimError::NotCarried(_))
    }
}

pub type SimResult<T> = Result<T, SimError>;
