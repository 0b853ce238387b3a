//! Avoid directive parsing
//!
//! Two grammars share the `|` separated token list:
//!
//! - **Base**: `highway(s)`, `motorway(s)`, `toll(s)`, `ferry|ferries`
//! - **Flexible**: every [`AvoidFeature`], plus `bbox:min_lat,min_lon,max_lat,max_lon`
//!   and `max_speed:<number>`
//!
//! Tokens are trimmed and lowercased; the delimiter itself is not, so an
//! empty segment is an unknown token. The exact value `none` means no
//! avoidance.

use argos_config::limits::{delimiters, MIN_MAX_SPEED};
use argos_types::{AvoidDirective, AvoidFeature, Field, Result, ValidationError};

use super::{bbox::parse_bounding_box, normalize_token, parse_float_no_nan};

/// Literal meaning "avoid nothing"; compared case-sensitively
pub const AVOID_NONE: &str = "none";

/// Parse an avoid parameter into its directives
pub fn parse_avoid(value: &str, flexible: bool) -> Result<Vec<AvoidDirective>> {
    if value.is_empty() || value == AVOID_NONE {
        return Ok(Vec::new());
    }

    value
        .split(delimiters::TOKEN)
        .map(|raw| {
            let token = normalize_token(raw);
            if flexible {
                parse_flexible_token(token)
            } else {
                parse_base_token(token)
            }
        })
        .collect()
}

fn parse_base_token(token: String) -> Result<AvoidDirective> {
    match AvoidFeature::from_token(&token) {
        Some(feature) if !feature.is_flex_only() => Ok(AvoidDirective::Feature(feature)),
        _ => Err(ValidationError::Unsupported {
            field: Field::Avoid,
            token,
        }),
    }
}

fn parse_flexible_token(token: String) -> Result<AvoidDirective> {
    if let Some(feature) = AvoidFeature::from_token(&token) {
        return Ok(AvoidDirective::Feature(feature));
    }

    if token.starts_with(AvoidDirective::BBOX_PREFIX) {
        return parse_bounding_box(&token).map(AvoidDirective::Area);
    }

    if let Some(speed) = token.strip_prefix(AvoidDirective::MAX_SPEED_PREFIX) {
        return parse_max_speed(speed).map(AvoidDirective::MaxSpeed);
    }

    Err(ValidationError::UnsupportedAvoidObject { token })
}

/// `max_speed:` payload; no inner whitespace is allowed after the colon
fn parse_max_speed(raw: &str) -> Result<f64> {
    if raw.trim() != raw {
        return Err(ValidationError::InvalidNumber {
            field: Field::MaxSpeed,
            token: raw.to_string(),
        });
    }

    let speed = parse_float_no_nan(raw).ok_or_else(|| ValidationError::InvalidNumber {
        field: Field::MaxSpeed,
        token: raw.to_string(),
    })?;

    if speed < MIN_MAX_SPEED {
        return Err(ValidationError::OutOfRange {
            field: Field::MaxSpeed,
            value: speed,
        });
    }
    Ok(speed)
}
