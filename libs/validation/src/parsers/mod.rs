//! Parsers for structured routing request fields
//!
//! Pure functions turning raw request strings into typed values. The
//! validators build on these; request handlers that need the parsed values
//! (rather than a yes/no answer) call them directly.

pub mod approaches;
pub mod avoid;
pub mod bbox;
pub mod hazmat;
pub mod truck;

pub use approaches::parse_approaches;
pub use avoid::parse_avoid;
pub use bbox::{parse_avoid_bbox, parse_bounding_box};
pub use hazmat::parse_hazmat_types;
pub use truck::{parse_truck_size, TruckDimensions};

/// Normalize a delimited token: surrounding whitespace trimmed, lowercased
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parse a float, rejecting NaN
///
/// Surrounding whitespace is trimmed. Infinities parse; range checks are
/// left to the caller.
pub(crate) fn parse_float_no_nan(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}
