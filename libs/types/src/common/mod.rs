//! Types shared by every routing parameter: errors and geographic primitives

pub mod errors;
pub mod geo;

pub use errors::{Field, Result, ValidationError};
pub use geo::{BoundingBox, Coordinate};
