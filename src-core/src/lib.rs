//! Daily compound growth projection.
//!
//! Parses a loosely typed projection request, validates it and compounds the
//! initial amount day by day in decimal arithmetic.

pub mod errors;
pub mod projection;

pub use errors::{Error, Result};
