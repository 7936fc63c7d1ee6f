use uom::si::{
    area::square_meter,
    f64::{Area, HeatFluxDensity, Mass, Ratio, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    mass::kilogram,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use super::{Batch, Collector, Inputs};

/// A small tray of fruit under a 2 m² collector at midday.
pub(crate) fn reference_inputs() -> Inputs {
    Inputs {
        ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
        irradiance: HeatFluxDensity::new::<watt_per_square_meter>(800.0),
        collector: Collector {
            area: Area::new::<square_meter>(2.0),
            efficiency: Ratio::new::<ratio>(0.5),
        },
        batch: Batch {
            initial_mass: Mass::new::<kilogram>(1.0),
            initial_moisture: Ratio::new::<ratio>(0.87),
            final_moisture: Ratio::new::<ratio>(0.25),
        },
    }
}

/// Returns the reference inputs with a different moisture pair.
pub(crate) fn with_moisture(initial: f64, target: f64) -> Inputs {
    let mut inputs = reference_inputs();
    inputs.batch.initial_moisture = Ratio::new::<ratio>(initial);
    inputs.batch.final_moisture = Ratio::new::<ratio>(target);
    inputs
}
