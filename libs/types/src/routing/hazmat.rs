//! Hazardous materials classes accepted on truck routes

use super::macros::define_tokens;

define_tokens! {
    /// Hazmat load class
    HazmatClass {
        General => "general",
        HarmfulToWater => "harmful_to_water",
        Explosive => "explosive",
        Circumstantial => "circumstantial",
    }
}
