//! Multi-key report ordering.
//!
//! Re-sequences an appointment list by repeatedly selecting the minimum
//! remaining element under the active comparator chain (O(n²), destructive —
//! callers must treat the list as reordered afterwards). The result is
//! deterministic because each chain breaks ties all the way down, not
//! because the algorithm is stable.

use std::cmp::Ordering;

use crate::appointment::Appointment;

/// The named report orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Date, then timeslot, then provider's last name.
    Chronological,
    /// Patient profile (last, first, dob), then date, then timeslot.
    ByPatient,
    /// Provider's county name, then date, then timeslot, then patient.
    ByCounty,
}

/// Sorts the appointments in place under `key` by selection of the minimum
/// remaining element.
pub fn sort_appointments(appointments: &mut [Appointment], key: SortKey) {
    for sorted_end in 0..appointments.len() {
        let mut smallest = sorted_end;
        for candidate in (sorted_end + 1)..appointments.len() {
            if compare(&appointments[candidate], &appointments[smallest], key) == Ordering::Less {
                smallest = candidate;
            }
        }
        appointments.swap(sorted_end, smallest);
    }
}

/// The comparator chains. Each field falls through to the next only on an
/// exact tie of the previous one.
pub fn compare(a: &Appointment, b: &Appointment, key: SortKey) -> Ordering {
    match key {
        SortKey::Chronological => compare_date_and_slot(a, b)
            .then_with(|| a.provider_profile().last().cmp(b.provider_profile().last())),
        SortKey::ByPatient => a
            .patient()
            .cmp(b.patient())
            .then_with(|| compare_date_and_slot(a, b)),
        SortKey::ByCounty => a
            .provider_location()
            .county()
            .cmp(b.provider_location().county())
            .then_with(|| compare_date_and_slot(a, b))
            .then_with(|| a.patient().cmp(b.patient())),
    }
}

fn compare_date_and_slot(a: &Appointment, b: &Appointment) -> Ordering {
    a.date()
        .cmp(&b.date())
        .then_with(|| a.slot().cmp(&b.slot()))
}
