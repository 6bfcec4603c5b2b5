//! The fixed set of clinic sites.
//!
//! Each site carries a county and postal code. Sites place providers and
//! scope imaging-room conflicts: two technicians at the same site share the
//! site's physical rooms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLocationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Bridgewater,
    Edison,
    Piscataway,
    Princeton,
    Morristown,
    Clark,
}

impl Location {
    pub fn county(self) -> &'static str {
        match self {
            Location::Bridgewater => "Somerset County",
            Location::Edison | Location::Piscataway => "Middlesex County",
            Location::Princeton => "Mercer County",
            Location::Morristown => "Morris County",
            Location::Clark => "Union County",
        }
    }

    pub fn zip(self) -> &'static str {
        match self {
            Location::Bridgewater => "08807",
            Location::Edison => "08817",
            Location::Piscataway => "08854",
            Location::Princeton => "08542",
            Location::Morristown => "07960",
            Location::Clark => "07066",
        }
    }

    /// The site's short display name.
    pub fn name(self) -> &'static str {
        match self {
            Location::Bridgewater => "BRIDGEWATER",
            Location::Edison => "EDISON",
            Location::Piscataway => "PISCATAWAY",
            Location::Princeton => "PRINCETON",
            Location::Morristown => "MORRISTOWN",
            Location::Clark => "CLARK",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.name(), self.county(), self.zip())
    }
}

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRIDGEWATER" => Ok(Location::Bridgewater),
            "EDISON" => Ok(Location::Edison),
            "PISCATAWAY" => Ok(Location::Piscataway),
            "PRINCETON" => Ok(Location::Princeton),
            "MORRISTOWN" => Ok(Location::Morristown),
            "CLARK" => Ok(Location::Clark),
            _ => Err(ParseLocationError(s.to_string())),
        }
    }
}
