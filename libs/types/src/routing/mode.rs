//! Travel mode vocabulary

use super::macros::define_tokens;

define_tokens! {
    /// Vehicle profile the route is computed for
    TravelMode {
        Car => "car",
        Truck => "truck",
    }
}

impl TravelMode {
    pub fn is_truck(&self) -> bool {
        matches!(self, TravelMode::Truck)
    }
}
