//! Routing option vocabularies

mod macros;

pub mod approach;
pub mod avoid;
pub mod hazmat;
pub mod mode;

pub use approach::PreferredSide;
pub use avoid::{AvoidDirective, AvoidFeature};
pub use hazmat::HazmatClass;
pub use mode::TravelMode;
