//! Hazmat class list parsing

use argos_config::limits::delimiters;
use argos_types::{Field, HazmatClass, Result, ValidationError};

use super::normalize_token;

/// Parse a `|` separated hazmat class list
///
/// Tokens are trimmed and lowercased before lookup. The first unknown token
/// is reported in its normalized form.
pub fn parse_hazmat_types(value: &str) -> Result<Vec<HazmatClass>> {
    value
        .split(delimiters::TOKEN)
        .map(|raw| {
            let token = normalize_token(raw);
            HazmatClass::from_token(&token).ok_or(ValidationError::Unsupported {
                field: Field::HazmatType,
                token,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hazmat_types() {
        assert_eq!(
            parse_hazmat_types("explosive| Circumstantial "),
            Ok(vec![HazmatClass::Explosive, HazmatClass::Circumstantial])
        );
        assert_eq!(
            parse_hazmat_types("general|Unknown"),
            Err(ValidationError::Unsupported {
                field: Field::HazmatType,
                token: "unknown".to_string()
            })
        );
        // Empty segment between delimiters is not a class
        assert!(parse_hazmat_types("general||explosive").is_err());
    }
}
