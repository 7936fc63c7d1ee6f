mod batch;
mod collector;

pub use batch::Batch;
pub use collector::{Collector, CollectorEfficiency};

use uom::si::f64::{HeatFluxDensity, ThermodynamicTemperature};

/// Raw inputs for one solar dryer run.
///
/// Values are checked by [`compute_balance`](super::compute_balance), not
/// at construction, so any scalar a front end collects can be placed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    /// Ambient air temperature.
    ///
    /// Accepted and carried into the results, but the balance does not use it.
    pub ambient_temperature: ThermodynamicTemperature,

    /// Solar irradiance on the collector plane.
    pub irradiance: HeatFluxDensity,

    /// Collector geometry and efficiency.
    pub collector: Collector,

    /// Product being dried.
    pub batch: Batch,
}
