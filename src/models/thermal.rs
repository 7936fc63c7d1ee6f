//! Thermal systems models.
//!
//! This module contains models for solar thermal systems, starting with a
//! collector-driven product dehydrator.

pub mod solar_dryer;
