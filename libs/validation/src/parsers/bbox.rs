//! `bbox:` avoid-area parsing
//!
//! Accepted form is `bbox:min_lat,min_lon,max_lat,max_lon`. Every failure
//! (field count, number format, NaN, bound ordering, coordinate range) is
//! reported as the same [`ValidationError::BBoxFormat`], whose message is
//! part of the public API.

use argos_config::limits::{delimiters, BBOX_COMPONENTS};
use argos_types::{AvoidDirective, BoundingBox, Coordinate, Result, ValidationError};

use super::parse_float_no_nan;

/// Parse a `bbox:` token into its rectangle
///
/// Text before the first `bbox:` marker is ignored; without a marker the
/// token has no components and is rejected.
pub fn parse_bounding_box(value: &str) -> Result<BoundingBox> {
    let body = value
        .split_once(AvoidDirective::BBOX_PREFIX)
        .map(|(_, rest)| rest)
        .unwrap_or("");

    let fields: Vec<&str> = body.split(delimiters::COMPONENT).collect();
    if fields.len() != BBOX_COMPONENTS {
        return Err(ValidationError::BBoxFormat);
    }

    let mut values = [0.0_f64; BBOX_COMPONENTS];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = parse_float_no_nan(field).ok_or(ValidationError::BBoxFormat)?;
    }
    let [min_lat, min_lon, max_lat, max_lon] = values;

    if min_lat > max_lat || min_lon > max_lon {
        return Err(ValidationError::BBoxFormat);
    }

    let min = Coordinate::new(min_lat, min_lon);
    let max = Coordinate::new(max_lat, max_lon);
    min.validate().map_err(|_| ValidationError::BBoxFormat)?;
    max.validate().map_err(|_| ValidationError::BBoxFormat)?;

    Ok(BoundingBox::new(min, max))
}

/// Parse a `bbox:` token into its four corners
///
/// Corner order: min, (min_lat, max_lon), max, (max_lat, min_lon).
pub fn parse_avoid_bbox(value: &str) -> Result<[Coordinate; 4]> {
    parse_bounding_box(value).map(|bbox| bbox.corners())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_avoid_bbox() {
        let corners = parse_avoid_bbox("bbox:10,20,30,40").unwrap();
        assert_eq!(
            corners,
            [
                Coordinate::new(10.0, 20.0),
                Coordinate::new(10.0, 40.0),
                Coordinate::new(30.0, 40.0),
                Coordinate::new(30.0, 20.0),
            ]
        );

        // Whitespace around components is tolerated
        assert!(parse_avoid_bbox("bbox: 10 , 20 ,30, 40").is_ok());
        // Degenerate rectangle
        assert!(parse_avoid_bbox("bbox:10,20,10,20").is_ok());
        // Full range
        assert!(parse_avoid_bbox("bbox:-90,-180,90,180").is_ok());
    }

    #[test]
    fn test_parse_avoid_bbox_failures() {
        let cases = [
            "bbox:10,20,30",        // too few fields
            "bbox:10,20,30,40,50",  // too many fields
            "bbox:",                // empty body
            "10,20,30,40",          // missing prefix
            "bbox:a,20,30,40",      // not a number
            "bbox:nan,20,30,40",    // NaN
            "bbox:30,20,10,40",     // min_lat > max_lat
            "bbox:10,40,30,20",     // min_lon > max_lon
            "bbox:-91,20,30,40",    // latitude out of range
            "bbox:10,20,30,181",    // longitude out of range
            "bbox:10,,30,40",       // empty component
        ];

        for case in cases {
            assert_eq!(
                parse_avoid_bbox(case),
                Err(ValidationError::BBoxFormat),
                "expected {case:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_bbox_error_message_is_stable() {
        let err = parse_bounding_box("bbox:1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "avoid bbox format should be `avoid=bbox:min_lat,min_lon,max_lat,max_lon`"
        );
    }
}
