//! Registry error type.

use thiserror::Error;

use vr_core::NodeId;

use crate::NodeStatus;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("node {id} cannot go from {from} to {to}")]
    IllegalTransition {
        id:   NodeId,
        from: NodeStatus,
        to:   NodeStatus,
    },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
