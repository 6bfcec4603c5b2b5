//! The in-memory appointment collection and its conflict predicates.
//!
//! Insertion-ordered; the conflict checks here are the invariant-enforcing
//! half of the scheduling engine. The store performs no business-rule
//! validation — date, DOB, and provider checks happen in the engine before
//! any mutation is attempted — and it never panics on well-typed input.

use crate::appointment::{Appointment, ImagingService};
use crate::date::Date;
use crate::location::Location;
use crate::profile::Profile;
use crate::provider::{Doctor, Technician};
use crate::sort::{self, SortKey};
use crate::timeslot::Timeslot;

#[derive(Debug, Clone, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Identity-key membership: true iff an appointment with the same
    /// (date, slot, patient) exists, whoever the provider is.
    pub fn contains(&self, appointment: &Appointment) -> bool {
        self.appointments.iter().any(|existing| existing == appointment)
    }

    /// [`AppointmentStore::contains`] without building a candidate value.
    pub fn contains_key(&self, date: Date, slot: Timeslot, patient: &Profile) -> bool {
        self.appointments
            .iter()
            .any(|existing| existing.has_identity(date, slot, patient))
    }

    /// False iff the doctor (matched by NPI) already has an appointment at
    /// the same date and timeslot.
    pub fn is_doctor_available(&self, doctor: &Doctor, date: Date, slot: Timeslot) -> bool {
        !self.appointments.iter().any(|existing| {
            existing.date() == date
                && existing.slot() == slot
                && existing
                    .doctor()
                    .is_some_and(|existing_doctor| existing_doctor.npi() == doctor.npi())
        })
    }

    /// False iff an existing imaging appointment has the same technician at
    /// the same timeslot, or occupies the same room at the same timeslot and
    /// location. The room is location-scoped, not technician-scoped: any two
    /// technicians at one site contend for that site's single room of each
    /// category. Both checks are keyed by timeslot alone, in contrast to the
    /// date-and-timeslot doctor check.
    pub fn is_technician_or_room_free(
        &self,
        technician: &Technician,
        room: ImagingService,
        slot: Timeslot,
        location: Location,
    ) -> bool {
        !self.appointments.iter().any(|existing| {
            if existing.slot() != slot {
                return false;
            }
            let technician_busy = existing
                .technician()
                .is_some_and(|existing_technician| existing_technician.same_identity(technician));
            let room_busy =
                existing.room() == Some(room) && existing.provider_location() == location;
            technician_busy || room_busy
        })
    }

    pub fn add(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    /// Removes the appointment with the same identity key. Removing an
    /// absent appointment is a no-op; cancel and reschedule rely on that.
    pub fn remove(&mut self, appointment: &Appointment) {
        if let Some(index) = self.appointments.iter().position(|existing| existing == appointment) {
            self.appointments.remove(index);
        }
    }

    /// Linear scan by identity key. Patient names match ASCII
    /// case-insensitively; date, slot, and date of birth match exactly.
    pub fn find(&self, date: Date, slot: Timeslot, patient: &Profile) -> Option<&Appointment> {
        self.appointments.iter().find(|existing| {
            existing.date() == date
                && existing.slot() == slot
                && existing.patient().matches_ignore_case(patient)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    pub fn as_slice(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Re-sequences the store in place under the given report ordering.
    pub fn sort_by(&mut self, key: SortKey) {
        sort::sort_appointments(&mut self.appointments, key);
    }

    /// Empties the store, handing the appointments over in their current
    /// order. The billing view consumes the schedule this way.
    pub fn drain_all(&mut self) -> Vec<Appointment> {
        std::mem::take(&mut self.appointments)
    }
}
