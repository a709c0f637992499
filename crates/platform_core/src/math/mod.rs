//! Numerical building blocks.
//!
//! - [`interpolators`]: 1D and 2D interpolation
//! - [`broadcast`]: length broadcasting for one-dimensional batches

pub mod broadcast;
pub mod interpolators;
