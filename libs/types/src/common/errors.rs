//! Error types for routing request validation
//!
//! Every validator and parser in the workspace reports failures through
//! [`ValidationError`]. Variants follow the failure taxonomy of the request
//! layer (capability gating, unsupported tokens, numeric ranges, malformed
//! structured values, count mismatches) and carry the offending [`Field`] and
//! token so callers can re-render messages. The `Display` output is the stable
//! public message returned to API clients.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Request field a validation failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Mode,
    HazmatType,
    TruckWeight,
    TruckSize,
    TruckAxleLoad,
    Avoid,
    MaxSpeed,
    Approaches,
    Locations,
}

impl Field {
    /// Wire name of the field as it appears in requests
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Mode => "mode",
            Field::HazmatType => "hazmat_type",
            Field::TruckWeight => "truck_weight",
            Field::TruckSize => "truck_size",
            Field::TruckAxleLoad => "truck_axle_load",
            Field::Avoid => "avoid",
            Field::MaxSpeed => "max_speed",
            Field::Approaches => "approaches",
            Field::Locations => "locations",
        }
    }

    /// Human readable label used inside error messages
    pub const fn label(&self) -> &'static str {
        match self {
            Field::Mode => "mode",
            Field::HazmatType => "hazmat type",
            Field::TruckWeight => "truck weight",
            Field::TruckSize => "truck size",
            Field::TruckAxleLoad => "truck axle load",
            Field::Avoid => "avoid type",
            Field::MaxSpeed => "max speed",
            Field::Approaches => "approach",
            Field::Locations => "location",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while validating routing request parameters
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is only accepted on flexible requests
    #[error("only flex can support {}", .field.label())]
    FlexOnly { field: Field },

    /// Token is not part of the field's accepted vocabulary
    #[error("{}", unsupported_message(*.field, .token))]
    Unsupported { field: Field, token: String },

    /// Flexible avoid grammar saw a token or prefix it does not know
    #[error("unsupported avoid object")]
    UnsupportedAvoidObject { token: String },

    /// Numeric value outside the field's accepted range
    #[error("{}", out_of_range_message(*.field))]
    OutOfRange { field: Field, value: f64 },

    /// Wrong number of comma separated components
    #[error("{} should be {expected} items", .field.label())]
    WrongArity {
        field: Field,
        expected: usize,
        found: usize,
    },

    /// Component could not be parsed as a number
    #[error("invalid {field}: `{token}` is not a number")]
    InvalidNumber { field: Field, token: String },

    /// Any failure inside a `bbox:` avoid object
    #[error("avoid bbox format should be `avoid=bbox:min_lat,min_lon,max_lat,max_lon`")]
    BBoxFormat,

    /// Latitude outside [-90, 90]
    #[error("invalid coordinate, latitude: {0}")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180]
    #[error("invalid coordinate, longitude: {0}")]
    InvalidLongitude(f64),

    /// Approaches do not line up with the request's waypoints
    #[error("the number of approaches should be {expected}")]
    CountMismatch { expected: usize, found: usize },
}

impl ValidationError {
    /// Field the failure is attributed to, when there is one
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::FlexOnly { field }
            | ValidationError::Unsupported { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::WrongArity { field, .. }
            | ValidationError::InvalidNumber { field, .. } => Some(*field),
            ValidationError::UnsupportedAvoidObject { .. } | ValidationError::BBoxFormat => {
                Some(Field::Avoid)
            }
            ValidationError::CountMismatch { .. } => Some(Field::Approaches),
            ValidationError::InvalidLatitude(_) | ValidationError::InvalidLongitude(_) => None,
        }
    }

    /// True for failures caused by sending a flex-only field on a base request
    pub fn is_capability_error(&self) -> bool {
        matches!(self, ValidationError::FlexOnly { .. })
    }
}

fn unsupported_message(field: Field, token: &str) -> String {
    match field {
        // Mode keeps its historical bare message
        Field::Mode => "invalid mode".to_string(),
        _ => format!("invalid {}: {}", field.label(), token),
    }
}

fn out_of_range_message(field: Field) -> String {
    match field {
        Field::TruckWeight => "invalid truck_weight, should in range [0, 100] tons".to_string(),
        Field::TruckSize => "invalid truck_size, should be in range [0, 50] meters for length and width, [0, 10] meters for height".to_string(),
        Field::TruckAxleLoad => "invalid truck_axle_load, should be greater than 0".to_string(),
        Field::MaxSpeed => "invalid max_speed, should be greater than 0".to_string(),
        other => format!("invalid {}, value out of range", other.as_str()),
    }
}

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_only_messages() {
        let err = ValidationError::FlexOnly {
            field: Field::HazmatType,
        };
        assert_eq!(err.to_string(), "only flex can support hazmat type");

        let err = ValidationError::FlexOnly {
            field: Field::TruckAxleLoad,
        };
        assert_eq!(err.to_string(), "only flex can support truck axle load");
    }

    #[test]
    fn test_unsupported_messages() {
        let mode = ValidationError::Unsupported {
            field: Field::Mode,
            token: "bike".to_string(),
        };
        assert_eq!(mode.to_string(), "invalid mode");

        let hazmat = ValidationError::Unsupported {
            field: Field::HazmatType,
            token: "unknown".to_string(),
        };
        assert_eq!(hazmat.to_string(), "invalid hazmat type: unknown");

        let avoid = ValidationError::Unsupported {
            field: Field::Avoid,
            token: "bbox:1,2,3,4".to_string(),
        };
        assert_eq!(avoid.to_string(), "invalid avoid type: bbox:1,2,3,4");
    }

    #[test]
    fn test_range_and_count_messages() {
        let err = ValidationError::OutOfRange {
            field: Field::TruckWeight,
            value: 150.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid truck_weight, should in range [0, 100] tons"
        );

        let err = ValidationError::WrongArity {
            field: Field::TruckSize,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "truck size should be 3 items");

        let err = ValidationError::CountMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "the number of approaches should be 3");
    }

    #[test]
    fn test_error_field_attribution() {
        assert_eq!(ValidationError::BBoxFormat.field(), Some(Field::Avoid));
        assert_eq!(
            ValidationError::CountMismatch {
                expected: 1,
                found: 2
            }
            .field(),
            Some(Field::Approaches)
        );
        assert_eq!(ValidationError::InvalidLatitude(91.0).field(), None);
        assert!(ValidationError::FlexOnly {
            field: Field::TruckSize
        }
        .is_capability_error());
    }

    #[test]
    fn test_field_serde_names() {
        let json = serde_json::to_string(&Field::TruckAxleLoad).unwrap();
        assert_eq!(json, "\"truck_axle_load\"");
        assert_eq!(Field::HazmatType.to_string(), "hazmat_type");
    }
}
