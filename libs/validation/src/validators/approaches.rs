//! Approaches count validation

use argos_types::{Result, ValidationError};

use crate::parsers::parse_approaches;

/// Validate approaches against the number of request waypoints
///
/// `expected_points` counts every waypoint including start and end, i.e.
/// route legs + 1. Absent or empty input skips the count check.
pub fn validate_approaches(approaches: Option<&str>, expected_points: usize) -> Result<()> {
    if matches!(approaches, None | Some("")) {
        return Ok(());
    }

    let sides = parse_approaches(approaches)?;
    if sides.len() != expected_points {
        return Err(ValidationError::CountMismatch {
            expected: expected_points,
            found: sides.len(),
        });
    }
    Ok(())
}
