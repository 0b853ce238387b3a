//! Unit conversions and physical limits for truck parameters
//!
//! These are part of the public request contract and are intentionally not
//! exposed through runtime configuration.

/// Truck weight arrives in kilograms and is checked in tons
pub const KG_PER_TON: f64 = 1000.0;

/// Truck dimensions arrive in centimeters and are checked in meters
pub const CM_PER_METER: f64 = 100.0;

/// Heaviest accepted truck (tons)
pub const MAX_TRUCK_WEIGHT_TONS: f64 = 100.0;

/// Tallest accepted truck (meters)
pub const MAX_TRUCK_HEIGHT_M: f64 = 10.0;

/// Widest accepted truck (meters)
pub const MAX_TRUCK_WIDTH_M: f64 = 50.0;

/// Longest accepted truck (meters)
pub const MAX_TRUCK_LENGTH_M: f64 = 50.0;

/// Smallest accepted axle load
pub const MIN_AXLE_LOAD: f64 = 0.0;

/// Smallest accepted `max_speed:` avoid cap
pub const MIN_MAX_SPEED: f64 = 0.0;

/// Number of comma separated components in `truck_size`
pub const TRUCK_SIZE_COMPONENTS: usize = 3;

/// Number of comma separated components after `bbox:`
pub const BBOX_COMPONENTS: usize = 4;

/// Request field delimiters
pub mod delimiters {
    /// Multi-valued hazmat and avoid fields
    pub const TOKEN: char = '|';

    /// Truck size and bbox components
    pub const COMPONENT: char = ',';

    /// Per-waypoint approaches
    pub const WAYPOINT: char = ';';
}
