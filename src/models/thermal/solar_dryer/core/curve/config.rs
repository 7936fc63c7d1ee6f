use super::InvalidParameterError;

/// Number of intervals used when no step count is given.
pub const DEFAULT_CURVE_STEPS: usize = 100;

/// Sampling configuration for a drying curve.
///
/// A curve with `steps` intervals has `steps + 1` samples, including both
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConfig {
    /// Number of equal time intervals between the first and last sample.
    pub steps: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_CURVE_STEPS,
        }
    }
}

impl CurveConfig {
    /// Checks the step count, returning the number of samples it produces.
    pub(super) fn sample_count(self) -> Result<usize, InvalidParameterError> {
        if self.steps == 0 {
            return Err(InvalidParameterError::TooFewSteps { steps: 0 });
        }
        self.steps
            .checked_add(1)
            .ok_or(InvalidParameterError::TooManySteps { steps: self.steps })
    }
}

/// Builds a config from a signed step count, as a front end might collect it.
impl TryFrom<i64> for CurveConfig {
    type Error = InvalidParameterError;

    fn try_from(steps: i64) -> Result<Self, Self::Error> {
        match usize::try_from(steps) {
            Ok(steps) if steps >= 1 => Ok(Self { steps }),
            _ => Err(InvalidParameterError::TooFewSteps { steps }),
        }
    }
}
