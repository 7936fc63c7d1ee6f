use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitIntervalLowerOpen};
use uom::si::{
    f64::{Area, Ratio},
    ratio::ratio,
};

/// Solar collector feeding heat to the drying chamber.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collector {
    /// Aperture area facing the sun.
    pub area: Area,

    /// Fraction of incident radiation delivered as useful heat.
    pub efficiency: Ratio,
}

/// Collector efficiency, constrained to the interval (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectorEfficiency(Constrained<Ratio, UnitIntervalLowerOpen>);

impl CollectorEfficiency {
    /// Create a [`CollectorEfficiency`] from a scalar fraction.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval (0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`CollectorEfficiency`] from a quantity with ratio units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval (0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitIntervalLowerOpen::new(quantity)?))
    }
}

impl Deref for CollectorEfficiency {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
