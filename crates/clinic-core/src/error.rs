//! Error types for clinic scheduling operations.
//!
//! Rejections are reason values, never free text — rendering a reason for a
//! user is the caller's job. Parse errors cover malformed input tokens;
//! `DateError`/`DobError` cover business-rule rejections of otherwise
//! well-formed dates; `ScheduleError` is the union reported by the engine's
//! scheduling operations.

use thiserror::Error;

/// Reasons an appointment date is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    #[error("not a valid calendar date")]
    NotACalendarDate,

    #[error("today or a date before today")]
    TodayOrPast,

    #[error("Saturday or Sunday")]
    Weekend,

    #[error("beyond six months from today")]
    BeyondBookingHorizon,
}

/// Reasons a date of birth is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DobError {
    #[error("not a valid calendar date")]
    NotACalendarDate,

    #[error("today or a date after today")]
    TodayOrFuture,
}

/// Reasons a scheduling operation is rejected.
///
/// Every variant is recoverable: the operation reports the reason and leaves
/// the appointment set unchanged. The one piece of state that may still move
/// is the technician-rotation cursor, which advances during a failed search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("appointment date: {0}")]
    Date(#[from] DateError),

    #[error("patient dob: {0}")]
    Dob(#[from] DobError),

    /// No doctor with the given NPI exists in the roster.
    #[error("{0} - provider does not exist")]
    ProviderNotFound(String),

    /// The patient already has an appointment at this date and timeslot.
    #[error("patient already has an appointment at this timeslot")]
    PatientAlreadyBooked,

    /// The doctor already sees another patient at this date and timeslot.
    #[error("doctor is not available at the requested timeslot")]
    DoctorUnavailable,

    /// The full rotation was searched and every technician was booked.
    #[error("no technician is available at any location")]
    NoTechnicianAvailable,

    /// No appointment with the given identity key exists.
    #[error("appointment does not exist")]
    NotFound,

    /// Imaging appointments are never reschedulable.
    #[error("imaging appointments cannot be rescheduled")]
    ImagingNotReschedulable,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// A date token that is not `m/d/yyyy` with numeric fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} is not a valid date token")]
pub struct ParseDateError(pub String);

/// A timeslot token outside the numeric range 1-12.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} is not a valid time slot")]
pub struct ParseTimeslotError(pub String);

/// An imaging service name other than catscan, ultrasound, or xray.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} - imaging service not provided")]
pub struct ParseImagingServiceError(pub String);

/// A location name that is not one of the clinic sites.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} is not a known clinic location")]
pub struct ParseLocationError(pub String);

/// A specialty name that is not one of the recognized specialties.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} is not a known specialty")]
pub struct ParseSpecialtyError(pub String);
