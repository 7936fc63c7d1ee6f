//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., mass, power, irradiance).
//! This module names quantities that are useful for modeling but aren't
//! provided under a descriptive name by [`uom`].
//!
//! ## Specific latent heat
//!
//! [`SpecificLatentHeat`] has the same dimension as specific energy (J/kg),
//! so it shares units with [`uom::si::available_energy`]:
//!
//! ```
//! use twine_solar_dryer::support::units::SpecificLatentHeat;
//! use uom::si::{
//!     available_energy::{joule_per_kilogram, kilojoule_per_kilogram},
//!     f64::{MassRate, Power},
//!     mass_rate::kilogram_per_second,
//!     power::kilowatt,
//! };
//!
//! let h_fg = SpecificLatentHeat::new::<kilojoule_per_kilogram>(2400.0);
//! assert_eq!(h_fg.get::<joule_per_kilogram>(), 2.4e6);
//!
//! // Dividing a heat rate by a latent heat yields an evaporation rate.
//! let m_dot: MassRate = Power::new::<kilowatt>(2.4) / h_fg;
//! assert!((m_dot.get::<kilogram_per_second>() - 1e-3).abs() < 1e-15);
//! ```

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P2, Z0},
};

/// Specific latent heat, J/kg in SI.
pub type SpecificLatentHeat = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
