//! Per-field request validators
//!
//! Each validator takes the optional raw field, plus the request's
//! `flexible` capability where the field is gated on it. An absent or empty
//! field is always accepted, whatever the capability. Validators are
//! independent of each other and keep no state.

pub mod approaches;
pub mod avoid;
pub mod scalar;

pub use approaches::validate_approaches;
pub use avoid::validate_avoid;
pub use scalar::{
    validate_hazmat_type, validate_mode, validate_truck_axle_load, validate_truck_size,
    validate_truck_weight,
};

use argos_types::{Field, Result, ValidationError};

/// Reject a present flex-only field on a base request
#[inline]
pub(crate) fn require_flexible(field: Field, flexible: bool) -> Result<()> {
    if flexible {
        Ok(())
    } else {
        Err(ValidationError::FlexOnly { field })
    }
}
