//! Waypoint approach side

use serde::{Deserialize, Serialize};

/// Side of the road a route may arrive at or leave a waypoint from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredSide {
    /// Curb side of the waypoint
    Same,
    /// Never produced by the `approaches` grammar; no request token maps here yet
    Opposite,
    /// Either side
    Either,
}

impl PreferredSide {
    /// Map a normalized approach token
    ///
    /// `curb` pins the curb side, `unrestricted` and the empty token leave the
    /// side open.
    pub fn from_approach(token: &str) -> Option<Self> {
        match token {
            "curb" => Some(PreferredSide::Same),
            "" | "unrestricted" => Some(PreferredSide::Either),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            PreferredSide::Same => "same",
            PreferredSide::Opposite => "opposite",
            PreferredSide::Either => "either",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_approach() {
        assert_eq!(PreferredSide::from_approach("curb"), Some(PreferredSide::Same));
        assert_eq!(PreferredSide::from_approach(""), Some(PreferredSide::Either));
        assert_eq!(
            PreferredSide::from_approach("unrestricted"),
            Some(PreferredSide::Either)
        );
        assert_eq!(PreferredSide::from_approach("opposite"), None);
    }
}
