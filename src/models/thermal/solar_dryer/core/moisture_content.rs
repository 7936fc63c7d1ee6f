use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitIntervalOpen};
use uom::si::{f64::Ratio, ratio::ratio};

/// Wet-basis moisture content of a drying batch.
///
/// This is the mass of water divided by the total (wet) mass of the product,
/// and must fall in the open interval (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MoistureContent(Constrained<Ratio, UnitIntervalOpen>);

impl MoistureContent {
    /// Create a [`MoistureContent`] from a scalar fraction.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval (0, 1).
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`MoistureContent`] from a quantity with ratio units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval (0, 1).
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitIntervalOpen::new(quantity)?))
    }

    /// Fraction of the wet mass that is dry solid, `1 - mc`.
    #[must_use]
    pub fn solid_fraction(&self) -> Ratio {
        Ratio::new::<ratio>(1.0) - **self
    }

    /// Moisture content on a dry basis: water mass per unit dry solid mass.
    #[must_use]
    pub fn dry_basis(&self) -> Ratio {
        **self / self.solid_fraction()
    }
}

impl Deref for MoistureContent {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
