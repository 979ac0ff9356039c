//! # Field Module
//!
//! Provides the [`PrimeField`] struct for arithmetic in the multiplicative group of Z_p,
//! together with the integer helpers shared by the rest of the crate.

pub mod helper;
pub mod math;

pub use helper::{ceil_sqrt, random_in_range, to_exponent};
pub use math::PrimeField;
