//! Transport-type filter value object
//!
//! Parsed from free-text rider input ("T", "Bus", "Commuter Rail"). The
//! parse is total: anything unrecognized, including blank input, falls
//! back to [`RouteFilter::Any`] without an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter for the kind of transit stop to search for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteFilter {
    /// No filtering, any stop counts
    #[default]
    Any,
    /// Subway / light rail (the "T")
    Subway,
    /// Bus
    Bus,
    /// Commuter rail
    CommuterRail,
}

impl RouteFilter {
    /// Parse free-text rider input, case-insensitively
    ///
    /// Unrecognized text never fails; it maps to `Any`.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "t" => Self::Subway,
            "bus" => Self::Bus,
            "commuter rail" => Self::CommuterRail,
            _ => Self::Any,
        }
    }

    /// GTFS route-type code for the stops API, if this filter narrows at all
    ///
    /// `Any` yields `None`: the query is sent without a route-type filter.
    #[must_use]
    pub const fn route_type_code(&self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Subway => Some("1"),
            Self::CommuterRail => Some("2"),
            Self::Bus => Some("3"),
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Subway => "subway",
            Self::Bus => "bus",
            Self::CommuterRail => "commuter rail",
        }
    }
}

impl fmt::Display for RouteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
