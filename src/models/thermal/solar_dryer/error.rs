use thiserror::Error;

use super::{InvalidInputError, InvalidParameterError};

/// Errors that can occur while calling the [`SolarDryer`](super::SolarDryer) model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolarDryerError {
    /// The inputs violate a physical constraint.
    #[error("invalid dryer input")]
    InvalidInput(#[from] InvalidInputError),

    /// The curve sampling configuration is out of range.
    #[error("invalid curve parameter")]
    InvalidParameter(#[from] InvalidParameterError),
}
