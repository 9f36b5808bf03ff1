//! Emission models for the decoder.
//!
//! Each module implements [`EmissionModel`](crate::traits::EmissionModel)
//! for one observation family:
//! - [`poisson`]  : non-negative counts, one Poisson rate per state.
//! - [`discrete`] : symbols from a small alphabet, looked up in a table.
//! - [`presets`]  : ready-made models (the dishonest casino, the two-rate
//!   Poisson reference).

pub mod discrete;
pub mod poisson;
pub mod presets;
