//! Solar dehydrator model.
//!
//! [`SolarDryer`] is the [`twine_core::Model`] adapter. It delegates to two
//! pure operations that are also exported for direct use:
//!
//! - [`compute_balance`]: inputs → energy and mass balance
//! - [`generate_curve`]: balance → constant-rate drying curve
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_solar_dryer::models::thermal::solar_dryer::{
//!     Batch, Collector, CurveConfig, Inputs, SolarDryer,
//! };
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, HeatFluxDensity, Mass, Ratio, ThermodynamicTemperature},
//!     heat_flux_density::watt_per_square_meter,
//!     mass::kilogram,
//!     power::watt,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let dryer = SolarDryer::new(CurveConfig { steps: 24 });
//!
//! let output = dryer
//!     .call(&Inputs {
//!         ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!         irradiance: HeatFluxDensity::new::<watt_per_square_meter>(800.0),
//!         collector: Collector {
//!             area: Area::new::<square_meter>(2.0),
//!             efficiency: Ratio::new::<ratio>(0.5),
//!         },
//!         batch: Batch {
//!             initial_mass: Mass::new::<kilogram>(1.0),
//!             initial_moisture: Ratio::new::<ratio>(0.87),
//!             final_moisture: Ratio::new::<ratio>(0.25),
//!         },
//!     })
//!     .unwrap();
//!
//! assert_eq!(output.balance.useful_energy.get::<watt>(), 800.0);
//! assert_eq!(output.curve.len(), 25);
//! ```

mod core;
mod error;

pub use self::core::{
    Batch, Collector, CollectorEfficiency, CurveConfig, CurveSample, DEFAULT_CURVE_STEPS,
    DryingCurve, Inputs, InvalidInputError, InvalidParameterError, LATENT_HEAT_OF_VAPORIZATION,
    MoistureContent, Results, Samples, compute_balance, generate_curve,
    latent_heat_of_vaporization,
};
pub use error::SolarDryerError;

use twine_core::Model;

/// A solar dehydrator with a fixed curve sampling configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolarDryer {
    curve: CurveConfig,
}

impl SolarDryer {
    /// Creates a dryer model that samples curves with `curve`.
    #[must_use]
    pub fn new(curve: CurveConfig) -> Self {
        Self { curve }
    }

    /// Returns the curve sampling configuration.
    #[must_use]
    pub fn curve_config(&self) -> CurveConfig {
        self.curve
    }
}

/// Balance and drying curve from one [`SolarDryer`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDryerOutput {
    /// Energy and mass balance.
    pub balance: Results,

    /// Drying curve derived from the balance.
    pub curve: DryingCurve,
}

impl Model for SolarDryer {
    type Input = Inputs;
    type Output = SolarDryerOutput;
    type Error = SolarDryerError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let balance = compute_balance(input)?;
        let curve = generate_curve(&balance, self.curve)?;
        Ok(SolarDryerOutput { balance, curve })
    }
}
