//! Transit data models
//!
//! Typed representations of MBTA stops as returned by the V3 stops API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// GTFS wheelchair boarding code
///
/// A three-valued domain: `0` means the agency published no information,
/// `1` means accessible, `2` means not accessible. Unknown codes are
/// treated as no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelchairBoarding {
    /// No accessibility information available (GTFS 0)
    #[default]
    NoInformation,
    /// Wheelchair boarding is possible (GTFS 1)
    Accessible,
    /// Wheelchair boarding is not possible (GTFS 2)
    NotAccessible,
}

impl WheelchairBoarding {
    /// Convert a raw GTFS code to a `WheelchairBoarding`
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Accessible,
            2 => Self::NotAccessible,
            _ => Self::NoInformation,
        }
    }

    /// Whether the stop is confirmed wheelchair accessible
    ///
    /// Collapses the three-valued code to a boolean: only `Accessible`
    /// counts; "no information" and "not accessible" both yield false.
    #[must_use]
    pub const fn is_accessible(&self) -> bool {
        matches!(self, Self::Accessible)
    }
}

/// A transit stop returned by a nearest-stop query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyStop {
    /// Stop identifier assigned by the transit agency
    pub id: String,
    /// Stop name (e.g. "Kenmore")
    pub name: String,
    /// Wheelchair boarding code for the stop
    pub wheelchair_boarding: WheelchairBoarding,
}

impl fmt::Display for NearbyStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
