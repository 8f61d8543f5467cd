//! Location references attached to incident records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an incident happened
///
/// Bulletins either name the interval between two stations or a single
/// station ("in the station grounds", "near the station"). The two shapes are
/// kept apart: a renderer places a pair at the midpoint and a single station
/// on the station itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationRef {
    /// Between two stations
    Between {
        /// First station named in the bulletin
        from: String,
        /// Second station named in the bulletin
        to: String,
    },

    /// At or near one station
    Station {
        /// Station name
        name: String,
    },
}

impl LocationRef {
    /// Create a station-pair reference
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        LocationRef::Between {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a single-station reference
    pub fn station(name: impl Into<String>) -> Self {
        LocationRef::Station { name: name.into() }
    }

    /// Whether this reference names a single station
    pub fn is_single_station(&self) -> bool {
        matches!(self, LocationRef::Station { .. })
    }

    /// Pair form used by gazetteer lookups
    ///
    /// A single station comes back with an empty second slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use shika_domain::LocationRef;
    ///
    /// assert_eq!(LocationRef::between("札幌", "桑園").as_pair(), ("札幌", "桑園"));
    /// assert_eq!(LocationRef::station("苫小牧").as_pair(), ("苫小牧", ""));
    /// ```
    pub fn as_pair(&self) -> (&str, &str) {
        match self {
            LocationRef::Between { from, to } => (from.as_str(), to.as_str()),
            LocationRef::Station { name } => (name.as_str(), ""),
        }
    }

    /// Station names referenced, in bulletin order
    pub fn station_names(&self) -> Vec<&str> {
        match self {
            LocationRef::Between { from, to } => vec![from.as_str(), to.as_str()],
            LocationRef::Station { name } => vec![name.as_str()],
        }
    }
}

impl fmt::Display for LocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationRef::Between { from, to } => write!(f, "{}～{}駅間", from, to),
            LocationRef::Station { name } => write!(f, "{}駅", name),
        }
    }
}
