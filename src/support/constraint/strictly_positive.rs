use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Masses, areas and irradiance in the dryer model all carry this bound,
/// since a zero value would make the balance degenerate (e.g. a zero useful
/// energy makes the drying time infinite).
///
/// # Examples
///
/// ```
/// use twine_solar_dryer::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Mass, mass::kilogram};
///
/// // Generic constructor:
/// let x = Constrained::<_, StrictlyPositive>::new(1.0).unwrap();
/// assert_eq!(x.into_inner(), 1.0);
///
/// // Associated constructor with a quantity:
/// let m = StrictlyPositive::new(Mass::new::<kilogram>(0.5)).unwrap();
/// assert_eq!(m.as_ref().get::<kilogram>(), 0.5);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter,
        f64::{Area, HeatFluxDensity, Mass},
        heat_flux_density::watt_per_square_meter,
        mass::kilogram,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert!(matches!(
            StrictlyPositive::new(0.0),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            StrictlyPositive::new(-5.0),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn dryer_quantities() {
        let area = Area::new::<square_meter>(2.0);
        assert!(StrictlyPositive::new(area).is_ok());
        assert!(StrictlyPositive::new(-area).is_err());

        let irradiance = HeatFluxDensity::new::<watt_per_square_meter>(0.0);
        assert!(matches!(
            StrictlyPositive::new(irradiance),
            Err(ConstraintError::Zero)
        ));

        let mass = Mass::new::<kilogram>(f64::NAN);
        assert!(matches!(
            StrictlyPositive::new(mass),
            Err(ConstraintError::NotANumber)
        ));
    }
}
