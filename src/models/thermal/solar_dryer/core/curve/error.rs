use thiserror::Error;

/// Errors that can occur while configuring a drying curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidParameterError {
    /// The step count was zero or negative.
    #[error("step count must be at least 1, got {steps}")]
    TooFewSteps {
        /// Requested step count.
        steps: i64,
    },

    /// The step count leaves no room for the final sample index.
    #[error("step count {steps} is too large")]
    TooManySteps {
        /// Requested step count.
        steps: usize,
    },
}
