//! Shared traits for the accelerate-compat crates.
//!
//! The vendor API ships every routine twice (a single-precision name and a
//! `D`-suffixed double-precision name). Here both collapse into one generic
//! function bounded by [`Real`].

pub mod scalar;

pub use scalar::{Precision, Real};
