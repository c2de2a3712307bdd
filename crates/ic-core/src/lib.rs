//! ic-core: stable foundation for intercomp.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - field (per-cell scalar fields backed by nalgebra)
//! - error (shared error types)

pub mod error;
pub mod field;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{IcError, IcResult};
pub use field::*;
pub use numeric::*;
pub use units::*;
