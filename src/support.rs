//! Supporting utilities used by models.
//!
//! - [`constraint`]: Construction-time numeric bounds for model inputs.
//! - [`units`]: Named [`uom`] quantities not provided by [`uom`] itself.

pub mod constraint;
pub mod units;
