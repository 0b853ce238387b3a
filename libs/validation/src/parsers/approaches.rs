//! Per-waypoint approach parsing

use argos_config::limits::delimiters;
use argos_types::{Field, PreferredSide, Result, ValidationError};

use super::normalize_token;

/// Parse a `;` separated approaches list, one token per waypoint
///
/// Absent or empty input yields an empty list. Tokens are trimmed and
/// lowercased: `curb` maps to [`PreferredSide::Same`], `unrestricted` and the
/// empty token to [`PreferredSide::Either`].
pub fn parse_approaches(value: Option<&str>) -> Result<Vec<PreferredSide>> {
    let value = match value {
        None | Some("") => return Ok(Vec::new()),
        Some(value) => value,
    };

    value
        .split(delimiters::WAYPOINT)
        .map(|raw| {
            let token = normalize_token(raw);
            PreferredSide::from_approach(&token).ok_or(ValidationError::Unsupported {
                field: Field::Approaches,
                token,
            })
        })
        .collect()
}
