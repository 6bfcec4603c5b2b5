//! Appointments and the identity key used for membership and conflicts.
//!
//! An appointment is identified by (date, timeslot, patient profile). The
//! provider is deliberately NOT part of the identity: two bookings for the
//! same patient at the same date and slot are the same appointment no
//! matter who provides the visit. Equality and ordering below preserve
//! exactly that rule.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::error::ParseImagingServiceError;
use crate::location::Location;
use crate::profile::Profile;
use crate::provider::{Doctor, Technician};
use crate::timeslot::Timeslot;

/// An imaging room category. Rooms are per-site: each clinic location has
/// one room of each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImagingService {
    CatScan,
    Ultrasound,
    Xray,
}

impl fmt::Display for ImagingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImagingService::CatScan => "CATSCAN",
            ImagingService::Ultrasound => "ULTRASOUND",
            ImagingService::Xray => "XRAY",
        };
        f.write_str(name)
    }
}

impl FromStr for ImagingService {
    type Err = ParseImagingServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catscan" => Ok(ImagingService::CatScan),
            "ultrasound" => Ok(ImagingService::Ultrasound),
            "xray" => Ok(ImagingService::Xray),
            _ => Err(ParseImagingServiceError(s.to_string())),
        }
    }
}

/// What kind of visit an appointment books, and with whom.
#[derive(Debug, Clone)]
pub enum Booking {
    Office { doctor: Doctor },
    Imaging { technician: Technician, room: ImagingService },
}

/// A scheduled appointment.
#[derive(Debug, Clone)]
pub struct Appointment {
    date: Date,
    slot: Timeslot,
    patient: Profile,
    booking: Booking,
}

impl Appointment {
    pub fn office(date: Date, slot: Timeslot, patient: Profile, doctor: Doctor) -> Self {
        Self {
            date,
            slot,
            patient,
            booking: Booking::Office { doctor },
        }
    }

    pub fn imaging(
        date: Date,
        slot: Timeslot,
        patient: Profile,
        technician: Technician,
        room: ImagingService,
    ) -> Self {
        Self {
            date,
            slot,
            patient,
            booking: Booking::Imaging { technician, room },
        }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn slot(&self) -> Timeslot {
        self.slot
    }

    pub fn patient(&self) -> &Profile {
        &self.patient
    }

    pub fn booking(&self) -> &Booking {
        &self.booking
    }

    pub fn is_imaging(&self) -> bool {
        matches!(self.booking, Booking::Imaging { .. })
    }

    pub fn doctor(&self) -> Option<&Doctor> {
        match &self.booking {
            Booking::Office { doctor } => Some(doctor),
            Booking::Imaging { .. } => None,
        }
    }

    pub fn technician(&self) -> Option<&Technician> {
        match &self.booking {
            Booking::Office { .. } => None,
            Booking::Imaging { technician, .. } => Some(technician),
        }
    }

    pub fn room(&self) -> Option<ImagingService> {
        match &self.booking {
            Booking::Office { .. } => None,
            Booking::Imaging { room, .. } => Some(*room),
        }
    }

    pub fn provider_profile(&self) -> &Profile {
        match &self.booking {
            Booking::Office { doctor } => doctor.profile(),
            Booking::Imaging { technician, .. } => technician.profile(),
        }
    }

    pub fn provider_location(&self) -> Location {
        match &self.booking {
            Booking::Office { doctor } => doctor.location(),
            Booking::Imaging { technician, .. } => technician.location(),
        }
    }

    /// Charge for this visit under the provider's billing rule.
    pub fn rate(&self) -> u32 {
        match &self.booking {
            Booking::Office { doctor } => doctor.rate(),
            Booking::Imaging { technician, .. } => technician.rate(),
        }
    }

    /// True iff `date`, `slot`, and `patient` equal this appointment's
    /// identity key. The patient comparison is exact (case-sensitive).
    pub fn has_identity(&self, date: Date, slot: Timeslot, patient: &Profile) -> bool {
        self.date == date && self.slot == slot && &self.patient == patient
    }
}

/// Identity-key equality: (date, slot, patient). The booking is ignored.
impl PartialEq for Appointment {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.slot == other.slot && self.patient == other.patient
    }
}

impl Eq for Appointment {}

/// Identity-key ordering: date, then slot, then patient profile.
impl Ord for Appointment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.slot.cmp(&other.slot))
            .then_with(|| self.patient.cmp(&other.patient))
    }
}

impl PartialOrd for Appointment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.booking {
            Booking::Office { doctor } => {
                write!(f, "{} {} {} {}", self.date, self.slot, self.patient, doctor)
            }
            Booking::Imaging { technician, room } => write!(
                f,
                "{} {} {} {}[{}]",
                self.date, self.slot, self.patient, technician, room
            ),
        }
    }
}
