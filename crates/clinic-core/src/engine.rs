//! The scheduling engine.
//!
//! Owns the roster, the technician rotation, and the appointment store, and
//! exposes the operation surface the command layer calls: date/DOB
//! validation, booking, cancellation, rescheduling, reports, and the
//! billing views. Every rejection is a reason value and leaves the
//! appointment set unchanged; the rotation cursor is the one piece of state
//! that still advances during a failed technician search.

use crate::appointment::{Appointment, Booking, ImagingService};
use crate::billing::{self, PatientStatement, ProviderCredit};
use crate::date::Date;
use crate::error::{DateError, DobError, Result, ScheduleError};
use crate::profile::Profile;
use crate::roster::Roster;
use crate::rotation::TechnicianRotation;
use crate::sort::SortKey;
use crate::store::AppointmentStore;
use crate::timeslot::Timeslot;

/// The named report views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKey {
    /// All appointments, date/timeslot/provider order.
    Chronological,
    /// All appointments, patient/date/timeslot order.
    ByPatient,
    /// All appointments, county/date/timeslot order.
    ByCounty,
    /// Office appointments only, county/date/timeslot order.
    OfficeOnly,
    /// Imaging appointments only, county/date/timeslot order.
    ImagingOnly,
}

/// One clinic session's scheduling state. Single-threaded and synchronous;
/// every operation runs to completion on the caller's thread.
#[derive(Debug)]
pub struct SchedulingEngine {
    roster: Roster,
    rotation: TechnicianRotation,
    store: AppointmentStore,
    today: Date,
}

impl SchedulingEngine {
    /// Builds an engine over the given roster, using the local clock for
    /// "today". The rotation is seeded from the roster's technicians in
    /// insertion order.
    pub fn new(roster: Roster) -> Self {
        Self::with_today(roster, Date::today())
    }

    /// Like [`SchedulingEngine::new`] with an injected reference date.
    pub fn with_today(roster: Roster, today: Date) -> Self {
        let rotation = TechnicianRotation::new(roster.technicians().cloned().collect());
        Self {
            roster,
            rotation,
            store: AppointmentStore::new(),
            today,
        }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The current appointments, in store order. Reports re-sequence this
    /// order in place.
    pub fn appointments(&self) -> &[Appointment] {
        self.store.as_slice()
    }

    /// Checks an appointment date, in order: it must be a real calendar
    /// date, strictly in the future, on a weekday, and within six months of
    /// today.
    pub fn validate_appointment_date(&self, date: Date) -> std::result::Result<(), DateError> {
        if !date.is_valid() {
            return Err(DateError::NotACalendarDate);
        }
        if date.is_today(self.today) || date.is_past(self.today) {
            return Err(DateError::TodayOrPast);
        }
        if date.is_weekend() {
            return Err(DateError::Weekend);
        }
        if !date.is_within_six_months_of(self.today) {
            return Err(DateError::BeyondBookingHorizon);
        }
        Ok(())
    }

    /// Checks a date of birth: a real calendar date, strictly before today.
    pub fn validate_dob(&self, dob: Date) -> std::result::Result<(), DobError> {
        if !dob.is_valid() {
            return Err(DobError::NotACalendarDate);
        }
        if !dob.is_past(self.today) {
            return Err(DobError::TodayOrFuture);
        }
        Ok(())
    }

    /// Books an office visit with the doctor holding `npi`.
    pub fn schedule_office(
        &mut self,
        date: Date,
        slot: Timeslot,
        patient: Profile,
        npi: &str,
    ) -> Result<Appointment> {
        self.validate_appointment_date(date)?;
        self.validate_dob(patient.dob())?;
        let doctor = self
            .roster
            .doctor_by_npi(npi)
            .ok_or_else(|| ScheduleError::ProviderNotFound(npi.to_string()))?
            .clone();
        if self.store.contains_key(date, slot, &patient) {
            return Err(ScheduleError::PatientAlreadyBooked);
        }
        if !self.store.is_doctor_available(&doctor, date, slot) {
            return Err(ScheduleError::DoctorUnavailable);
        }

        let appointment = Appointment::office(date, slot, patient, doctor);
        self.store.add(appointment.clone());
        Ok(appointment)
    }

    /// Books an imaging visit, assigning a technician by rotation.
    ///
    /// Walks the rotation at most roster-size steps and books the first
    /// candidate whose slot and room are free. On exhaustion the request is
    /// rejected and the cursor stays wherever the search left it — the next
    /// request starts from there, which keeps assignments fair across
    /// requests whether or not earlier ones succeeded.
    pub fn schedule_imaging(
        &mut self,
        date: Date,
        slot: Timeslot,
        patient: Profile,
        room: ImagingService,
    ) -> Result<Appointment> {
        self.validate_appointment_date(date)?;
        self.validate_dob(patient.dob())?;
        if self.store.contains_key(date, slot, &patient) {
            return Err(ScheduleError::PatientAlreadyBooked);
        }

        for _ in 0..self.rotation.len() {
            let Some(candidate) = self.rotation.next().cloned() else {
                break;
            };
            if self
                .store
                .is_technician_or_room_free(&candidate, room, slot, candidate.location())
            {
                let appointment =
                    Appointment::imaging(date, slot, patient.clone(), candidate, room);
                self.store.add(appointment.clone());
                return Ok(appointment);
            }
        }
        Err(ScheduleError::NoTechnicianAvailable)
    }

    /// Cancels the appointment with the given identity key, returning the
    /// removed appointment.
    pub fn cancel(&mut self, date: Date, slot: Timeslot, patient: &Profile) -> Result<Appointment> {
        let found = self
            .store
            .find(date, slot, patient)
            .cloned()
            .ok_or(ScheduleError::NotFound)?;
        self.store.remove(&found);
        Ok(found)
    }

    /// Moves an office appointment to a new timeslot on the same date,
    /// keeping the original doctor. Imaging appointments are never
    /// reschedulable.
    pub fn reschedule(
        &mut self,
        date: Date,
        old_slot: Timeslot,
        patient: &Profile,
        new_slot: Timeslot,
    ) -> Result<Appointment> {
        let existing = self
            .store
            .find(date, old_slot, patient)
            .cloned()
            .ok_or(ScheduleError::NotFound)?;
        let doctor = match existing.booking() {
            Booking::Office { doctor } => doctor.clone(),
            Booking::Imaging { .. } => return Err(ScheduleError::ImagingNotReschedulable),
        };
        if self.store.contains_key(date, new_slot, existing.patient()) {
            return Err(ScheduleError::PatientAlreadyBooked);
        }
        if !self.store.is_doctor_available(&doctor, date, new_slot) {
            return Err(ScheduleError::DoctorUnavailable);
        }

        self.store.remove(&existing);
        let appointment = Appointment::office(date, new_slot, existing.patient().clone(), doctor);
        self.store.add(appointment.clone());
        Ok(appointment)
    }

    /// Re-sequences the store under the report's ordering and returns the
    /// view. The reorder is destructive: the store stays in the new order.
    /// The office-only and imaging-only views use the county ordering and
    /// filter by kind after sorting.
    pub fn report(&mut self, key: ReportKey) -> Vec<&Appointment> {
        let sort_key = match key {
            ReportKey::Chronological => SortKey::Chronological,
            ReportKey::ByPatient => SortKey::ByPatient,
            ReportKey::ByCounty | ReportKey::OfficeOnly | ReportKey::ImagingOnly => {
                SortKey::ByCounty
            }
        };
        self.store.sort_by(sort_key);
        self.store
            .iter()
            .filter(|appointment| match key {
                ReportKey::OfficeOnly => !appointment.is_imaging(),
                ReportKey::ImagingOnly => appointment.is_imaging(),
                _ => true,
            })
            .collect()
    }

    /// Drains the schedule into per-patient billing statements, ordered by
    /// patient profile. The appointment set is empty afterwards.
    pub fn billing_statements(&mut self) -> Vec<PatientStatement> {
        billing::statements(self.store.drain_all())
    }

    /// Expected credit per provider over the current appointments, ordered
    /// by provider profile. Non-destructive.
    pub fn provider_credits(&self) -> Vec<ProviderCredit> {
        billing::provider_credits(self.store.as_slice())
    }
}
