//! Billing views over the appointment set.
//!
//! A patient's record is an append-only sequence of visits; the statement
//! total is the sum of each visit's provider rate. Statements consume the
//! appointment set (the schedule empties into the billing record); provider
//! credits are a non-destructive aggregation.

use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::profile::Profile;

/// One completed visit on a patient's record.
#[derive(Debug, Clone)]
pub struct Visit {
    appointment: Appointment,
}

impl Visit {
    pub fn new(appointment: Appointment) -> Self {
        Self { appointment }
    }

    pub fn appointment(&self) -> &Appointment {
        &self.appointment
    }
}

/// A patient and their visit history. Visits are only ever appended.
#[derive(Debug, Clone)]
pub struct Patient {
    profile: Profile,
    visits: Vec<Visit>,
}

impl Patient {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            visits: Vec::new(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn add_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Total amount due across all visits, in whole dollars.
    pub fn charge(&self) -> u32 {
        self.visits
            .iter()
            .map(|visit| visit.appointment().rate())
            .sum()
    }
}

/// One line of the billing statement report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientStatement {
    pub profile: Profile,
    pub amount_due: u32,
}

/// One line of the provider credit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCredit {
    pub profile: Profile,
    pub amount: u32,
}

/// Folds a drained appointment list into per-patient statements, one per
/// unique profile, ordered by patient profile.
pub fn statements(appointments: Vec<Appointment>) -> Vec<PatientStatement> {
    let mut patients: Vec<Patient> = Vec::new();
    for appointment in appointments {
        let index = match patients
            .iter()
            .position(|patient| patient.profile() == appointment.patient())
        {
            Some(index) => index,
            None => {
                patients.push(Patient::new(appointment.patient().clone()));
                patients.len() - 1
            }
        };
        patients[index].add_visit(Visit::new(appointment));
    }

    patients.sort_by(|a, b| a.profile().cmp(b.profile()));
    patients
        .into_iter()
        .map(|patient| PatientStatement {
            amount_due: patient.charge(),
            profile: patient.profile,
        })
        .collect()
}

/// Sums each provider's expected credit over the current appointments,
/// ordered by provider profile. Does not consume anything.
pub fn provider_credits(appointments: &[Appointment]) -> Vec<ProviderCredit> {
    let mut credits: Vec<ProviderCredit> = Vec::new();
    for appointment in appointments {
        let profile = appointment.provider_profile();
        match credits.iter_mut().find(|credit| &credit.profile == profile) {
            Some(credit) => credit.amount += appointment.rate(),
            None => credits.push(ProviderCredit {
                profile: profile.clone(),
                amount: appointment.rate(),
            }),
        }
    }

    credits.sort_by(|a, b| a.profile.cmp(&b.profile));
    credits
}
