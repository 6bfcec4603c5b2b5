//! The fixed ladder of half-day appointment slots.
//!
//! Exactly twelve slots exist: six mornings from 9:00 AM to 11:30 AM and six
//! afternoons from 2:00 PM to 4:30 PM, in 30-minute steps. The numeric index
//! runs 1-12 in chronological order and is how external callers name a slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTimeslotError;

/// One of the twelve appointment slots, declared in chronological order so
/// the derived ordering matches (hour, minute) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timeslot {
    /// 9:00 AM
    Slot1,
    /// 9:30 AM
    Slot2,
    /// 10:00 AM
    Slot3,
    /// 10:30 AM
    Slot4,
    /// 11:00 AM
    Slot5,
    /// 11:30 AM
    Slot6,
    /// 2:00 PM
    Slot7,
    /// 2:30 PM
    Slot8,
    /// 3:00 PM
    Slot9,
    /// 3:30 PM
    Slot10,
    /// 4:00 PM
    Slot11,
    /// 4:30 PM
    Slot12,
}

impl Timeslot {
    /// All twelve slots in chronological order.
    pub const ALL: [Timeslot; 12] = [
        Timeslot::Slot1,
        Timeslot::Slot2,
        Timeslot::Slot3,
        Timeslot::Slot4,
        Timeslot::Slot5,
        Timeslot::Slot6,
        Timeslot::Slot7,
        Timeslot::Slot8,
        Timeslot::Slot9,
        Timeslot::Slot10,
        Timeslot::Slot11,
        Timeslot::Slot12,
    ];

    /// Hour in 24-hour form.
    pub fn hour(self) -> u32 {
        match self {
            Timeslot::Slot1 | Timeslot::Slot2 => 9,
            Timeslot::Slot3 | Timeslot::Slot4 => 10,
            Timeslot::Slot5 | Timeslot::Slot6 => 11,
            Timeslot::Slot7 | Timeslot::Slot8 => 14,
            Timeslot::Slot9 | Timeslot::Slot10 => 15,
            Timeslot::Slot11 | Timeslot::Slot12 => 16,
        }
    }

    pub fn minute(self) -> u32 {
        match self {
            Timeslot::Slot1
            | Timeslot::Slot3
            | Timeslot::Slot5
            | Timeslot::Slot7
            | Timeslot::Slot9
            | Timeslot::Slot11 => 0,
            _ => 30,
        }
    }

    /// Numeric index, 1 through 12.
    pub fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Slot for a numeric index; `None` outside 1-12.
    pub fn from_index(index: u8) -> Option<Timeslot> {
        match index {
            1..=12 => Some(Self::ALL[index as usize - 1]),
            _ => None,
        }
    }
}

impl fmt::Display for Timeslot {
    /// 12-hour `H:MM AM/PM`, e.g. `9:00 AM` or `2:30 PM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour();
        let period = if hour < 12 { "AM" } else { "PM" };
        let display_hour = if hour == 0 || hour == 12 { 12 } else { hour % 12 };
        write!(f, "{}:{:02} {}", display_hour, self.minute(), period)
    }
}

impl FromStr for Timeslot {
    type Err = ParseTimeslotError;

    /// Parses the numeric token callers use to name a slot (`"1"`-`"12"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Timeslot::from_index)
            .ok_or_else(|| ParseTimeslotError(s.to_string()))
    }
}
