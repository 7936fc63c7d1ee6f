use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while checking solar dryer inputs.
///
/// Each variant names the violated constraint. Checks stop at the first
/// violation, so only one is reported per call.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInputError {
    /// Collector efficiency is not in (0, 1].
    #[error("collector efficiency out of (0, 1]")]
    CollectorEfficiency(#[source] ConstraintError),

    /// Initial moisture content is not in (0, 1).
    #[error("initial moisture content out of (0, 1)")]
    InitialMoisture(#[source] ConstraintError),

    /// Final moisture content is not in (0, 1).
    #[error("final moisture content out of (0, 1)")]
    FinalMoisture(#[source] ConstraintError),

    /// Final moisture content is not strictly below the initial one.
    #[error("final moisture {final_moisture} ≥ initial moisture {initial_moisture}")]
    MoistureNotDecreasing {
        /// Initial wet-basis moisture fraction.
        initial_moisture: f64,

        /// Final wet-basis moisture fraction.
        final_moisture: f64,
    },

    /// Initial batch mass is not strictly positive and finite.
    #[error("initial mass must be positive and finite")]
    InitialMass(#[source] ConstraintError),

    /// Collector area is not strictly positive and finite.
    #[error("collector area must be positive and finite")]
    CollectorArea(#[source] ConstraintError),

    /// Solar irradiance is not strictly positive and finite.
    #[error("solar irradiance must be positive and finite")]
    Irradiance(#[source] ConstraintError),

    /// The product `G · A · η` underflowed to zero or overflowed.
    #[error("useful energy {watts} W is not a positive finite value")]
    UsefulEnergy {
        /// Useful energy as computed, in watts.
        watts: f64,
    },

    /// The removal rate is too small to give a finite drying time.
    #[error("minimum drying time {seconds} s is not finite")]
    DryingTime {
        /// Drying time as computed, in seconds.
        seconds: f64,
    },
}
