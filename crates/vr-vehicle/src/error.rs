use thiserror::Error;
use vr_core::NodeId;

#[derive(Debug, Error, PartialEq)]
pub enum VehicleError {
    #[error("speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),

    #[error("passenger {0} is not in the vehicle")]
    NotAboard(NodeId),

    #[error("passenger {0} is already in the vehicle")]
    AlreadyAboard(NodeId),
}

pub type VehicleResult<T> = Result<T, VehicleError>;
