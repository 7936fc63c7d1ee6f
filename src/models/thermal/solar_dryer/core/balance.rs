//! Closed-form energy and mass balance.

mod error;

pub use error::InvalidInputError;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};
use num_traits::Zero;
use uom::{
    ConstZero,
    si::{
        f64::{Area, HeatFluxDensity, Mass, MassRate, Power, ThermodynamicTemperature, Time},
        power::watt,
        ratio::ratio,
        time::second,
    },
};

use super::{CollectorEfficiency, Inputs, MoistureContent, Results, latent_heat_of_vaporization};

/// Computes the energy and mass balance for one dryer run.
///
/// The useful heat is `G · A · η`. Dividing it by the latent heat of
/// vaporization gives the maximum evaporation rate, and the water that must
/// leave the batch divided by that rate gives the minimum drying time.
///
/// # Errors
///
/// Returns an [`InvalidInputError`] naming the first violated constraint.
/// Constraints are checked in this order: collector efficiency, initial
/// moisture, final moisture, moisture ordering, initial mass, collector
/// area, irradiance. Masses, area and irradiance must also be finite.
/// Finally, the useful energy must be positive and finite and the drying
/// time finite, which catches products that underflow or overflow.
pub fn compute_balance(inputs: &Inputs) -> Result<Results, InvalidInputError> {
    Checked::from_inputs(inputs)?.balance()
}

/// Checks that a quantity is strictly positive and finite.
fn finite_positive<T: PartialOrd + Zero>(
    value: T,
    is_finite: bool,
) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
    let value = StrictlyPositive::new(value)?;
    if is_finite {
        Ok(value)
    } else {
        Err(ConstraintError::NotFinite)
    }
}

/// Inputs that have passed every constraint.
#[derive(Debug, Clone, Copy)]
struct Checked {
    ambient_temperature: ThermodynamicTemperature,
    irradiance: Constrained<HeatFluxDensity, StrictlyPositive>,
    area: Constrained<Area, StrictlyPositive>,
    efficiency: CollectorEfficiency,
    initial_mass: Constrained<Mass, StrictlyPositive>,
    initial_moisture: MoistureContent,
    final_moisture: MoistureContent,
}

impl Checked {
    fn from_inputs(inputs: &Inputs) -> Result<Self, InvalidInputError> {
        let Inputs {
            ambient_temperature,
            irradiance,
            collector,
            batch,
        } = *inputs;

        let efficiency = CollectorEfficiency::from_quantity(collector.efficiency)
            .map_err(InvalidInputError::CollectorEfficiency)?;
        let initial_moisture = MoistureContent::from_quantity(batch.initial_moisture)
            .map_err(InvalidInputError::InitialMoisture)?;
        let final_moisture = MoistureContent::from_quantity(batch.final_moisture)
            .map_err(InvalidInputError::FinalMoisture)?;

        if final_moisture >= initial_moisture {
            return Err(InvalidInputError::MoistureNotDecreasing {
                initial_moisture: initial_moisture.get::<ratio>(),
                final_moisture: final_moisture.get::<ratio>(),
            });
        }

        let initial_mass = finite_positive(batch.initial_mass, batch.initial_mass.is_finite())
            .map_err(InvalidInputError::InitialMass)?;
        let area = finite_positive(collector.area, collector.area.is_finite())
            .map_err(InvalidInputError::CollectorArea)?;
        let irradiance = finite_positive(irradiance, irradiance.is_finite())
            .map_err(InvalidInputError::Irradiance)?;

        Ok(Self {
            ambient_temperature,
            irradiance,
            area,
            efficiency,
            initial_mass,
            initial_moisture,
            final_moisture,
        })
    }

    fn balance(self) -> Result<Results, InvalidInputError> {
        let initial_mass = self.initial_mass.into_inner();

        // Finite positive factors can still underflow or overflow.
        let useful_energy: Power =
            self.irradiance.into_inner() * self.area.into_inner() * *self.efficiency;
        if !(useful_energy.is_finite() && useful_energy > Power::ZERO) {
            return Err(InvalidInputError::UsefulEnergy {
                watts: useful_energy.get::<watt>(),
            });
        }

        let dry_solid_mass: Mass = initial_mass * self.initial_moisture.solid_fraction();
        let initial_water_mass: Mass = initial_mass * *self.initial_moisture;
        let final_total_mass: Mass = dry_solid_mass / self.final_moisture.solid_fraction();
        let final_water_mass = final_total_mass - dry_solid_mass;
        let water_to_remove = initial_water_mass - final_water_mass;

        let max_water_removal_rate: MassRate = useful_energy / latent_heat_of_vaporization();
        let minimum_drying_time: Time = water_to_remove / max_water_removal_rate;
        if !minimum_drying_time.is_finite() {
            return Err(InvalidInputError::DryingTime {
                seconds: minimum_drying_time.get::<second>(),
            });
        }

        Ok(Results {
            ambient_temperature: self.ambient_temperature,
            initial_moisture: self.initial_moisture,
            final_moisture: self.final_moisture,
            useful_energy,
            dry_solid_mass,
            initial_water_mass,
            final_total_mass,
            final_water_mass,
            water_to_remove,
            max_water_removal_rate,
            minimum_drying_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::Ratio,
        heat_flux_density::watt_per_square_meter,
        mass::kilogram,
        mass_rate::kilogram_per_second,
        thermodynamic_temperature::degree_celsius,
        time::hour,
    };

    use crate::models::thermal::solar_dryer::core::test_support::{
        reference_inputs, with_moisture,
    };

    fn round_to(value: f64, places: i32) -> f64 {
        let scale = 10f64.powi(places);
        (value * scale).round() / scale
    }

    #[test]
    fn reference_tray() {
        let results = compute_balance(&reference_inputs()).expect("inputs are valid");

        assert_relative_eq!(results.useful_energy.get::<watt>(), 800.0);
        assert_relative_eq!(
            results.dry_solid_mass.get::<kilogram>(),
            0.13,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            results.initial_water_mass.get::<kilogram>(),
            0.87,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            results.final_total_mass.get::<kilogram>(),
            0.13 / 0.75,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            results.max_water_removal_rate.get::<kilogram_per_second>(),
            800.0 / 2.4e6,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            results.minimum_drying_time.get::<second>(),
            2480.0,
            epsilon = 1e-9
        );

        // Values as a report would show them.
        assert_relative_eq!(round_to(results.dry_solid_mass.get::<kilogram>(), 3), 0.130);
        assert_relative_eq!(round_to(results.water_to_remove.get::<kilogram>(), 3), 0.827);
        assert_relative_eq!(round_to(results.minimum_drying_time.get::<hour>(), 2), 0.69);
    }

    #[test]
    fn mass_balance_closes() {
        let results = compute_balance(&reference_inputs()).unwrap();
        let final_moisture = *results.final_moisture;

        let recovered: Mass =
            results.dry_solid_mass / (Ratio::new::<ratio>(1.0) - final_moisture);
        assert_relative_eq!(
            recovered.get::<kilogram>(),
            results.final_total_mass.get::<kilogram>(),
            epsilon = 1e-12
        );

        let removed = results.initial_water_mass - results.final_water_mass;
        assert_relative_eq!(
            removed.get::<kilogram>(),
            results.water_to_remove.get::<kilogram>()
        );

        let final_mc: Ratio = results.final_water_mass / results.final_total_mass;
        assert_relative_eq!(final_mc.get::<ratio>(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn ambient_temperature_does_not_affect_balance() {
        let mut hot = reference_inputs();
        hot.ambient_temperature = ThermodynamicTemperature::new::<degree_celsius>(45.0);

        let baseline = compute_balance(&reference_inputs()).unwrap();
        let results = compute_balance(&hot).unwrap();

        assert_relative_eq!(results.ambient_temperature.get::<degree_celsius>(), 45.0);
        assert_eq!(results.water_to_remove, baseline.water_to_remove);
        assert_eq!(results.minimum_drying_time, baseline.minimum_drying_time);
    }

    #[test]
    fn nearly_equal_moisture_gives_small_finite_time() {
        let results = compute_balance(&with_moisture(0.87, 0.869_999)).unwrap();

        assert!(results.water_to_remove.get::<kilogram>() >= 0.0);
        assert!(results.water_to_remove.get::<kilogram>() < 1e-4);
        assert!(results.minimum_drying_time.get::<second>().is_finite());
        assert!(results.minimum_drying_time.get::<second>() >= 0.0);
    }

    #[test]
    fn doubling_collector_area_halves_drying_time() {
        let mut large = reference_inputs();
        large.collector.area = Area::new::<square_meter>(4.0);

        let baseline = compute_balance(&reference_inputs()).unwrap();
        let results = compute_balance(&large).unwrap();

        assert_relative_eq!(
            results.minimum_drying_time.get::<second>() * 2.0,
            baseline.minimum_drying_time.get::<second>(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn rejects_efficiency_out_of_range() {
        for efficiency in [0.0, 1.5] {
            let mut inputs = reference_inputs();
            inputs.collector.efficiency = Ratio::new::<ratio>(efficiency);
            assert!(matches!(
                compute_balance(&inputs),
                Err(InvalidInputError::CollectorEfficiency(_))
            ));
        }
    }

    #[test]
    fn rejects_moisture_out_of_range() {
        assert_eq!(
            compute_balance(&with_moisture(1.0, 0.25)),
            Err(InvalidInputError::InitialMoisture(
                ConstraintError::AboveMaximum
            ))
        );
        assert_eq!(
            compute_balance(&with_moisture(0.87, 0.0)),
            Err(InvalidInputError::FinalMoisture(
                ConstraintError::BelowMinimum
            ))
        );
    }

    #[test]
    fn rejects_final_moisture_not_below_initial() {
        for target in [0.87, 0.9] {
            assert!(matches!(
                compute_balance(&with_moisture(0.87, target)),
                Err(InvalidInputError::MoistureNotDecreasing { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_positive_quantities() {
        let mut inputs = reference_inputs();
        inputs.batch.initial_mass = Mass::new::<kilogram>(0.0);
        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::InitialMass(ConstraintError::Zero))
        );

        let mut inputs = reference_inputs();
        inputs.collector.area = Area::new::<square_meter>(-1.0);
        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::CollectorArea(ConstraintError::Negative))
        );

        let mut inputs = reference_inputs();
        inputs.irradiance = HeatFluxDensity::new::<watt_per_square_meter>(0.0);
        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::Irradiance(ConstraintError::Zero))
        );
    }

    #[test]
    fn reports_first_violation_only() {
        let mut inputs = with_moisture(0.87, 0.9);
        inputs.irradiance = HeatFluxDensity::new::<watt_per_square_meter>(-5.0);
        inputs.collector.efficiency = Ratio::new::<ratio>(2.0);

        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::CollectorEfficiency(
                ConstraintError::AboveMaximum
            ))
        );
    }

    #[test]
    fn rejects_infinite_quantities() {
        let mut inputs = reference_inputs();
        inputs.irradiance = HeatFluxDensity::new::<watt_per_square_meter>(f64::INFINITY);
        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::Irradiance(ConstraintError::NotFinite))
        );

        let mut inputs = reference_inputs();
        inputs.collector.area = Area::new::<square_meter>(f64::INFINITY);
        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::CollectorArea(ConstraintError::NotFinite))
        );

        let mut inputs = reference_inputs();
        inputs.batch.initial_mass = Mass::new::<kilogram>(f64::INFINITY);
        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::InitialMass(ConstraintError::NotFinite))
        );
    }

    #[test]
    fn rejects_useful_energy_that_underflows() {
        let mut inputs = reference_inputs();
        inputs.irradiance = HeatFluxDensity::new::<watt_per_square_meter>(1e-200);
        inputs.collector.area = Area::new::<square_meter>(1e-200);

        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::UsefulEnergy { watts: 0.0 })
        );
    }

    #[test]
    fn rejects_useful_energy_that_overflows() {
        let mut inputs = reference_inputs();
        inputs.irradiance = HeatFluxDensity::new::<watt_per_square_meter>(1e200);
        inputs.collector.area = Area::new::<square_meter>(1e200);

        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::UsefulEnergy {
                watts: f64::INFINITY
            })
        );
    }

    #[test]
    fn rejects_removal_rate_too_small_for_finite_time() {
        // Useful energy is a positive subnormal; the drying time overflows.
        let mut inputs = reference_inputs();
        inputs.irradiance = HeatFluxDensity::new::<watt_per_square_meter>(1e-160);
        inputs.collector.area = Area::new::<square_meter>(1e-150);

        assert_eq!(
            compute_balance(&inputs),
            Err(InvalidInputError::DryingTime {
                seconds: f64::INFINITY
            })
        );
    }

    #[test]
    fn extreme_but_representable_inputs_give_finite_time() {
        let mut inputs = reference_inputs();
        inputs.irradiance = HeatFluxDensity::new::<watt_per_square_meter>(1e150);
        inputs.collector.area = Area::new::<square_meter>(1e-150);

        let results = compute_balance(&inputs).unwrap();
        assert!(results.minimum_drying_time.get::<second>().is_finite());
        assert!(results.minimum_drying_time.get::<second>() > 0.0);
    }
}
