//! Avoid directive vocabulary
//!
//! Base requests may only avoid the four classic road features. Flexible
//! requests add turn and road-class restrictions plus two structured objects:
//! a `bbox:` area and a `max_speed:` cap.

use super::macros::define_tokens;
use crate::common::geo::BoundingBox;
use serde::{Deserialize, Serialize};

define_tokens! {
    /// Road feature a route can be asked to avoid
    AvoidFeature {
        Highway => "highway" | "highways",
        Motorway => "motorway" | "motorways",
        Toll => "toll" | "tolls",
        Ferry => "ferry" | "ferries",
        LeftTurn => "left_turn",
        RightTurn => "right_turn",
        SingleLane => "single_lane",
        UTurn => "uturn" | "uturns",
        SharpTurn => "sharp_turn" | "sharp_turns",
        LivingStreet => "living_street" | "living_streets",
        ServiceRoad => "service_road" | "service_roads",
    }
}

impl AvoidFeature {
    /// Features that only flexible requests may avoid
    pub fn is_flex_only(&self) -> bool {
        !matches!(
            self,
            AvoidFeature::Highway | AvoidFeature::Motorway | AvoidFeature::Toll | AvoidFeature::Ferry
        )
    }
}

/// One parsed element of an `avoid` parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AvoidDirective {
    Feature(AvoidFeature),
    /// `bbox:min_lat,min_lon,max_lat,max_lon`
    Area(BoundingBox),
    /// `max_speed:<number>`
    MaxSpeed(f64),
}

impl AvoidDirective {
    pub const BBOX_PREFIX: &'static str = "bbox:";
    pub const MAX_SPEED_PREFIX: &'static str = "max_speed:";

    pub fn is_flex_only(&self) -> bool {
        match self {
            AvoidDirective::Feature(feature) => feature.is_flex_only(),
            AvoidDirective::Area(_) | AvoidDirective::MaxSpeed(_) => true,
        }
    }
}
