//! Configuration error type.
//!
//! Sub-crates define their own error enums for their own failure modes.

use thiserror::Error;

use crate::NodeId;

/// Why a [`SimConfig`][crate::SimConfig] was rejected.
#[derive(Debug, Error)]
pub enum VrError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vr-core`.
pub type VrResult<T> = Result<T, VrError>;
