//! # Argos Request Validation
//!
//! Validation of user-supplied routing options before a route is computed:
//! travel mode, hazmat classes, truck weight, size and axle load, avoid
//! directives and per-waypoint approaches.
//!
//! ## Architecture
//!
//! - **parsers**: turn raw request strings into typed values (`bbox:` areas,
//!   approach sides, avoid directives, hazmat lists, truck dimensions)
//! - **validators**: one function per request field, built on the parsers;
//!   flex-only fields are rejected on base requests
//! - **request**: [`RouteRequest`] runs every validator over a full request
//!
//! Everything here is synchronous and side-effect free; functions only read
//! their arguments, so they can be called from any number of handlers at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use argos_validation::{validate_avoid, validate_truck_size, ValidationError};
//!
//! assert!(validate_avoid(Some("highway|ferry"), false).is_ok());
//! assert!(validate_avoid(Some("bbox:10,10,20,20"), true).is_ok());
//! assert_eq!(
//!     validate_avoid(Some("bbox:20,20,10,10"), true),
//!     Err(ValidationError::BBoxFormat)
//! );
//!
//! assert_eq!(
//!     validate_truck_size(Some("400,300,800"), false).unwrap_err().to_string(),
//!     "only flex can support truck size"
//! );
//! ```

pub mod parsers;
pub mod request;
pub mod validators;

// Re-export shared types so handlers need a single dependency
pub use argos_types::{
    AvoidDirective, AvoidFeature, BoundingBox, Coordinate, Field, HazmatClass, PreferredSide,
    Result, TravelMode, ValidationError,
};

pub use parsers::{
    parse_approaches, parse_avoid, parse_avoid_bbox, parse_bounding_box, parse_hazmat_types,
    parse_truck_size, TruckDimensions,
};
pub use request::{FieldError, RouteOptions, RouteRequest, FIELD_ORDER};
pub use validators::{
    validate_approaches, validate_avoid, validate_hazmat_type, validate_mode,
    validate_truck_axle_load, validate_truck_size, validate_truck_weight,
};
