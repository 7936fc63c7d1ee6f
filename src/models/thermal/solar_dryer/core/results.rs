//! Results of a solar dryer energy and mass balance.

use uom::si::f64::{Mass, MassRate, Power, ThermodynamicTemperature, Time};

use super::MoistureContent;

/// Energy and mass balance for one dryer run.
///
/// Masses describe the batch before and after drying. The dry solid mass
/// is the same in both states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Ambient temperature, passed through from the inputs.
    pub ambient_temperature: ThermodynamicTemperature,

    /// Moisture content when loaded.
    pub initial_moisture: MoistureContent,

    /// Target moisture content.
    pub final_moisture: MoistureContent,

    /// Heat delivered by the collector.
    pub useful_energy: Power,

    /// Mass of the product excluding all water.
    pub dry_solid_mass: Mass,

    /// Water mass when loaded.
    pub initial_water_mass: Mass,

    /// Total batch mass at the target moisture content.
    pub final_total_mass: Mass,

    /// Water mass at the target moisture content.
    pub final_water_mass: Mass,

    /// Water that must be evaporated to reach the target moisture content.
    pub water_to_remove: Mass,

    /// Evaporation rate if all useful heat goes into latent heat.
    pub max_water_removal_rate: MassRate,

    /// Time to remove [`water_to_remove`](Self::water_to_remove) at
    /// [`max_water_removal_rate`](Self::max_water_removal_rate).
    pub minimum_drying_time: Time,
}
