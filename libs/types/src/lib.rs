//! # Argos Routing Types
//!
//! Shared vocabulary for routing request validation.
//!
//! ## Design Philosophy
//!
//! - **Closed Vocabularies**: every token-valued request field maps onto an enum
//!   backed by a static lookup table ([`TravelMode`], [`HazmatClass`],
//!   [`AvoidFeature`]), so adding a token is a one-line table change
//! - **Structured Errors**: failures are [`ValidationError`] values carrying the
//!   offending [`Field`] and token; the `Display` text is the message returned to
//!   API clients
//! - **Checked On Demand**: geographic values ([`Coordinate`], [`BoundingBox`]) are
//!   plain data and validated explicitly, so out-of-range input can be reported
//!
//! ## Quick Start
//!
//! ```rust
//! use argos_types::{AvoidFeature, BoundingBox, Coordinate, ValidationError};
//!
//! assert_eq!(AvoidFeature::from_token("ferries"), Some(AvoidFeature::Ferry));
//!
//! let bbox = BoundingBox::new(Coordinate::new(10.0, 10.0), Coordinate::new(20.0, 20.0));
//! assert_eq!(bbox.corners()[1], Coordinate::new(10.0, 20.0));
//!
//! assert_eq!(
//!     Coordinate::new(95.0, 0.0).validate(),
//!     Err(ValidationError::InvalidLatitude(95.0))
//! );
//! ```

pub mod common;
pub mod routing;

pub use common::errors::{Field, Result, ValidationError};
pub use common::geo::{BoundingBox, Coordinate};
pub use routing::{AvoidDirective, AvoidFeature, HazmatClass, PreferredSide, TravelMode};
