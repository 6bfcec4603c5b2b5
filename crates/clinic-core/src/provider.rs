//! Providers: doctors for office visits, technicians for imaging visits.
//!
//! `Provider` is a sum type; the per-visit billing rate is resolved by
//! pattern match — a doctor's rate is fixed by specialty, a technician's is
//! a flat per-visit amount set when the roster is loaded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSpecialtyError;
use crate::location::Location;
use crate::profile::Profile;

/// A doctor's specialty, which fixes the office-visit charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    Family,
    Pediatrician,
    Allergist,
}

impl Specialty {
    /// Charge per office visit, in whole dollars.
    pub fn charge(self) -> u32 {
        match self {
            Specialty::Family => 250,
            Specialty::Pediatrician => 300,
            Specialty::Allergist => 350,
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Specialty::Family => "FAMILY",
            Specialty::Pediatrician => "PEDIATRICIAN",
            Specialty::Allergist => "ALLERGIST",
        };
        f.write_str(name)
    }
}

impl FromStr for Specialty {
    type Err = ParseSpecialtyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FAMILY" => Ok(Specialty::Family),
            "PEDIATRICIAN" => Ok(Specialty::Pediatrician),
            "ALLERGIST" => Ok(Specialty::Allergist),
            _ => Err(ParseSpecialtyError(s.to_string())),
        }
    }
}

/// A doctor. Identified by NPI; the NPI is unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    profile: Profile,
    location: Location,
    specialty: Specialty,
    npi: String,
}

impl Doctor {
    pub fn new(
        profile: Profile,
        location: Location,
        specialty: Specialty,
        npi: impl Into<String>,
    ) -> Self {
        Self {
            profile,
            location,
            specialty,
            npi: npi.into(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn specialty(&self) -> Specialty {
        self.specialty
    }

    pub fn npi(&self) -> &str {
        &self.npi
    }

    /// Charge per visit, fixed by specialty.
    pub fn rate(&self) -> u32 {
        self.specialty.charge()
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}][{}, #{}]",
            self.profile, self.location, self.specialty, self.npi
        )
    }
}

/// A technician. Identified by (profile, location); participates in the
/// imaging rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technician {
    profile: Profile,
    location: Location,
    rate_per_visit: u32,
}

impl Technician {
    pub fn new(profile: Profile, location: Location, rate_per_visit: u32) -> Self {
        Self {
            profile,
            location,
            rate_per_visit,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Flat charge per imaging visit, in whole dollars.
    pub fn rate(&self) -> u32 {
        self.rate_per_visit
    }

    /// Roster identity: same person at the same site.
    pub fn same_identity(&self, other: &Technician) -> bool {
        self.profile == other.profile && self.location == other.location
    }
}

impl fmt::Display for Technician {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}][rate: ${}.00]",
            self.profile, self.location, self.rate_per_visit
        )
    }
}

/// A provider of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    Doctor(Doctor),
    Technician(Technician),
}

impl Provider {
    pub fn profile(&self) -> &Profile {
        match self {
            Provider::Doctor(doctor) => doctor.profile(),
            Provider::Technician(technician) => technician.profile(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Provider::Doctor(doctor) => doctor.location(),
            Provider::Technician(technician) => technician.location(),
        }
    }

    /// Charge per visit under this provider's billing rule.
    pub fn rate(&self) -> u32 {
        match self {
            Provider::Doctor(doctor) => doctor.rate(),
            Provider::Technician(technician) => technician.rate(),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Doctor(doctor) => doctor.fmt(f),
            Provider::Technician(technician) => technician.fmt(f),
        }
    }
}
