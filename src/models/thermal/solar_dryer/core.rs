//! Energy and mass balance for a basic solar dehydrator.
//!
//! The collector turns incident irradiance into useful heat, and all of that
//! heat is assumed to evaporate water at the product's surface. This gives a
//! maximum water removal rate and, from the mass balance on the batch, a
//! minimum theoretical drying time.
//!
//! The drying curve follows the same idealization: water leaves at the
//! maximum rate until the batch reaches its final moisture content.
//! There is no falling-rate period.

mod balance;
mod curve;
mod input;
mod moisture_content;
mod results;

#[cfg(test)]
pub(crate) mod test_support;

pub use balance::{InvalidInputError, compute_balance};
pub use curve::{
    CurveConfig, CurveSample, DEFAULT_CURVE_STEPS, DryingCurve, InvalidParameterError, Samples,
    generate_curve,
};
pub use input::{Batch, Collector, CollectorEfficiency, Inputs};
pub use moisture_content::MoistureContent;
pub use results::Results;

use uom::si::available_energy::joule_per_kilogram;

use crate::support::units::SpecificLatentHeat;

/// Latent heat of vaporization of water used by the balance, in J/kg.
pub const LATENT_HEAT_OF_VAPORIZATION: f64 = 2.4e6;

/// Returns [`LATENT_HEAT_OF_VAPORIZATION`] as a typed quantity.
#[must_use]
pub fn latent_heat_of_vaporization() -> SpecificLatentHeat {
    SpecificLatentHeat::new::<joule_per_kilogram>(LATENT_HEAT_OF_VAPORIZATION)
}
