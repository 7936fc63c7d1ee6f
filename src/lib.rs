//! # Twine Solar Dryer
//!
//! Energy and mass balance model of a basic solar dehydrator for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given ambient conditions, collector geometry and efficiency, and the
//! initial and target moisture content of a batch, the model computes the
//! useful heat collected, the water that must be removed, a minimum
//! theoretical drying time, and a constant-rate drying curve.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! The `solar-dryer` binary is a command-line front end over
//! [`models::thermal::solar_dryer`].
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
