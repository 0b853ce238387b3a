//! Avoid parameter validation

use argos_types::Result;

use crate::parsers::parse_avoid;

/// Validate an avoid parameter against the base or flexible grammar
///
/// See [`crate::parsers::avoid`] for both grammars. Absent, empty and the
/// exact value `none` are always accepted.
pub fn validate_avoid(avoid: Option<&str>, flexible: bool) -> Result<()> {
    match avoid {
        None => Ok(()),
        Some(value) => parse_avoid(value, flexible).map(|_| ()),
    }
}
