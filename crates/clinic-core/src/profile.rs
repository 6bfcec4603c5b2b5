//! Person profiles: name plus date of birth.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// A person's identifying profile. Ordering and equality are by
/// (last name, first name, date of birth), case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    first: String,
    last: String,
    dob: Date,
}

impl Profile {
    pub fn new(first: impl Into<String>, last: impl Into<String>, dob: Date) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            dob,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn dob(&self) -> Date {
        self.dob
    }

    /// Lookup matching for cancel/reschedule: names compare ASCII
    /// case-insensitively, the date of birth compares exactly.
    pub fn matches_ignore_case(&self, other: &Profile) -> bool {
        self.first.eq_ignore_ascii_case(&other.first)
            && self.last.eq_ignore_ascii_case(&other.last)
            && self.dob == other.dob
    }
}

impl Ord for Profile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.last
            .cmp(&other.last)
            .then_with(|| self.first.cmp(&other.first))
            .then_with(|| self.dob.cmp(&other.dob))
    }
}

impl PartialOrd for Profile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.last, self.dob)
    }
}
