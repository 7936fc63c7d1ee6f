use uom::si::f64::{Mass, Ratio};

/// The batch of product loaded into the dryer.
///
/// Moisture contents are wet-basis fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Batch {
    /// Wet mass of the product when loaded.
    pub initial_mass: Mass,

    /// Moisture content when loaded.
    pub initial_moisture: Ratio,

    /// Target moisture content at the end of drying.
    pub final_moisture: Ratio,
}
