//! Whole-request validation
//!
//! [`RouteRequest`] mirrors the routing options a request handler receives.
//! It runs every field validator in a fixed order, either stopping at the
//! first rejection ([`RouteRequest::validate`]) or gathering all of them
//! ([`RouteRequest::collect_errors`]), and can hand back the parsed options
//! once the request is accepted.

use argos_types::{
    AvoidDirective, Coordinate, Field, HazmatClass, PreferredSide, Result, TravelMode,
    ValidationError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parsers::{parse_approaches, parse_avoid, parse_hazmat_types, parse_truck_size, TruckDimensions};
use crate::validators::{
    validate_approaches, validate_avoid, validate_hazmat_type, validate_mode,
    validate_truck_axle_load, validate_truck_size, validate_truck_weight,
};

/// Order in which request fields are checked
pub const FIELD_ORDER: [Field; 8] = [
    Field::Mode,
    Field::HazmatType,
    Field::TruckWeight,
    Field::TruckSize,
    Field::TruckAxleLoad,
    Field::Avoid,
    Field::Locations,
    Field::Approaches,
];

/// Routing options as received from a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteRequest {
    pub mode: Option<String>,
    pub hazmat_type: Option<String>,
    /// Kilograms
    pub truck_weight: Option<u64>,
    /// `height,width,length` in centimeters
    pub truck_size: Option<String>,
    pub truck_axle_load: Option<f64>,
    pub avoid: Option<String>,
    pub approaches: Option<String>,
    /// Waypoints including start and end
    pub locations: Vec<Coordinate>,
    /// Request-level capability; falls back to the caller's default when absent
    pub flexible: Option<bool>,
}

/// A rejected field with its rendered message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
    #[serde(skip)]
    pub error: ValidationError,
}

impl FieldError {
    pub fn new(field: Field, error: ValidationError) -> Self {
        Self {
            field,
            message: error.to_string(),
            error,
        }
    }
}

/// Parsed routing options of an accepted request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOptions {
    pub mode: Option<TravelMode>,
    pub flexible: bool,
    pub hazmat: Vec<HazmatClass>,
    pub truck_weight_tons: Option<f64>,
    pub truck_size: Option<TruckDimensions>,
    pub truck_axle_load: Option<f64>,
    pub avoid: Vec<AvoidDirective>,
    pub approaches: Vec<PreferredSide>,
    pub locations: Vec<Coordinate>,
}

impl RouteRequest {
    /// Capability the request is validated under
    pub fn is_flexible(&self, default_flexible: bool) -> bool {
        self.flexible.unwrap_or(default_flexible)
    }

    /// Run a single field's validator
    pub fn check(&self, field: Field, default_flexible: bool) -> Result<()> {
        let flexible = self.is_flexible(default_flexible);
        match field {
            Field::Mode => validate_mode(self.mode.as_deref()),
            Field::HazmatType => validate_hazmat_type(self.hazmat_type.as_deref(), flexible),
            Field::TruckWeight => validate_truck_weight(self.truck_weight, flexible),
            Field::TruckSize => validate_truck_size(self.truck_size.as_deref(), flexible),
            Field::TruckAxleLoad => validate_truck_axle_load(self.truck_axle_load, flexible),
            Field::Avoid | Field::MaxSpeed => validate_avoid(self.avoid.as_deref(), flexible),
            Field::Locations => self
                .locations
                .iter()
                .try_for_each(|location| location.validate()),
            Field::Approaches => {
                validate_approaches(self.approaches.as_deref(), self.locations.len())
            }
        }
    }

    /// Validate every field, stopping at the first rejection
    pub fn validate(&self, default_flexible: bool) -> std::result::Result<(), FieldError> {
        for field in FIELD_ORDER {
            if let Err(error) = self.check(field, default_flexible) {
                debug!(field = %field, error = %error, "request field rejected");
                return Err(FieldError::new(field, error));
            }
        }
        Ok(())
    }

    /// Validate every field and report all rejections in field order
    pub fn collect_errors(&self, default_flexible: bool) -> Vec<FieldError> {
        FIELD_ORDER
            .iter()
            .filter_map(|&field| {
                self.check(field, default_flexible).err().map(|error| {
                    debug!(field = %field, error = %error, "request field rejected");
                    FieldError::new(field, error)
                })
            })
            .collect()
    }

    /// Validate, then return the typed options
    pub fn parse(&self, default_flexible: bool) -> std::result::Result<RouteOptions, FieldError> {
        self.validate(default_flexible)?;
        let flexible = self.is_flexible(default_flexible);

        // Every parser below has already succeeded inside `validate`
        let attribute = |field: Field| move |error: ValidationError| FieldError::new(field, error);

        let hazmat = match non_empty(&self.hazmat_type) {
            Some(value) => parse_hazmat_types(value).map_err(attribute(Field::HazmatType))?,
            None => Vec::new(),
        };
        let truck_size = non_empty(&self.truck_size)
            .map(parse_truck_size)
            .transpose()
            .map_err(attribute(Field::TruckSize))?;
        let avoid = match self.avoid.as_deref() {
            Some(value) => parse_avoid(value, flexible).map_err(attribute(Field::Avoid))?,
            None => Vec::new(),
        };
        let approaches =
            parse_approaches(self.approaches.as_deref()).map_err(attribute(Field::Approaches))?;

        Ok(RouteOptions {
            mode: non_empty(&self.mode).and_then(TravelMode::from_token),
            flexible,
            hazmat,
            truck_weight_tons: self
                .truck_weight
                .map(|kg| kg as f64 / argos_config::limits::KG_PER_TON),
            truck_size,
            truck_axle_load: self.truck_axle_load,
            avoid,
            approaches,
            locations: self.locations.clone(),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truck_request() -> RouteRequest {
        RouteRequest {
            mode: Some("truck".to_string()),
            hazmat_type: Some("explosive".to_string()),
            truck_weight: Some(20_000),
            truck_size: Some("400,250,1200".to_string()),
            truck_axle_load: Some(10.0),
            avoid: Some("toll|bbox:10,10,20,20".to_string()),
            approaches: Some("curb;".to_string()),
            locations: vec![Coordinate::new(52.5, 13.4), Coordinate::new(48.1, 11.6)],
            flexible: None,
        }
    }

    #[test]
    fn test_default_request_is_valid() {
        let request = RouteRequest::default();
        assert_eq!(request.validate(false), Ok(()));
        assert!(request.collect_errors(true).is_empty());
    }

    #[test]
    fn test_flexible_request_passes() {
        let request = truck_request();
        assert_eq!(request.validate(true), Ok(()));
    }

    #[test]
    fn test_request_flag_overrides_default() {
        let mut request = truck_request();
        request.flexible = Some(false);

        let err = request.validate(true).unwrap_err();
        assert_eq!(err.field, Field::HazmatType);
        assert_eq!(err.message, "only flex can support hazmat type");
    }

    #[test]
    fn test_collect_errors_reports_all_fields() {
        let request = truck_request();
        let errors = request.collect_errors(false);

        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::HazmatType,
                Field::TruckWeight,
                Field::TruckSize,
                Field::TruckAxleLoad,
                Field::Avoid
            ]
        );
    }

    #[test]
    fn test_locations_and_approaches() {
        let mut request = RouteRequest {
            approaches: Some("curb;curb".to_string()),
            locations: vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(2.0, 2.0),
            ],
            ..Default::default()
        };

        let err = request.validate(false).unwrap_err();
        assert_eq!(err.field, Field::Approaches);
        assert_eq!(err.message, "the number of approaches should be 3");

        request.locations[1] = Coordinate::new(0.0, 200.0);
        let err = request.validate(false).unwrap_err();
        assert_eq!(err.field, Field::Locations);
        assert_eq!(err.error, ValidationError::InvalidLongitude(200.0));
    }

    #[test]
    fn test_parse_returns_typed_options() {
        let options = truck_request().parse(true).unwrap();

        assert_eq!(options.mode, Some(TravelMode::Truck));
        assert!(options.flexible);
        assert_eq!(options.hazmat, vec![HazmatClass::Explosive]);
        assert_eq!(options.truck_weight_tons, Some(20.0));
        assert_eq!(options.truck_size.map(|s| s.length_m), Some(12.0));
        assert_eq!(options.avoid.len(), 2);
        assert_eq!(
            options.approaches,
            vec![PreferredSide::Same, PreferredSide::Either]
        );
    }

    #[test]
    fn test_request_from_json() {
        let request: RouteRequest = serde_json::from_str(
            r#"{"mode": "car", "avoid": "ferries", "locations": [{"lat": 1.0, "lon": 2.0}]}"#,
        )
        .unwrap();

        assert_eq!(request.mode.as_deref(), Some("car"));
        assert_eq!(request.locations.len(), 1);
        assert_eq!(request.validate(false), Ok(()));
    }
}
