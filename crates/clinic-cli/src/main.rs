//! `clinic` CLI — load a provider roster and schedule appointments from
//! line-oriented commands on stdin.
//!
//! ## Usage
//!
//! ```sh
//! clinic --providers providers.txt < commands.txt
//! ```
//!
//! Commands are comma-separated, one per line:
//!
//! - `D,date,slot,first,last,dob,npi` — schedule an office visit
//! - `T,date,slot,first,last,dob,room` — schedule an imaging visit
//! - `C,date,slot,first,last,dob` — cancel an appointment
//! - `R,date,oldslot,first,last,dob,newslot` — reschedule an office visit
//! - `PA` / `PP` / `PL` — all appointments by date, patient, or county
//! - `PO` / `PI` — office / imaging appointments by county
//! - `PS` — billing statements (empties the schedule)
//! - `PC` — provider credits
//! - `Q` — quit
//!
//! The roster file holds one provider per line, whitespace-separated
//! (`#` starts a comment):
//!
//! ```text
//! D ANDREW PATEL 1/21/1989 BRIDGEWATER FAMILY 01
//! T JENNY PATEL 8/31/1991 BRIDGEWATER 125
//! ```

use std::fs;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;

use clinic_core::{
    Date, DateError, DobError, Doctor, ImagingService, Profile, Provider, ReportKey, Roster,
    ScheduleError, SchedulingEngine, Technician, Timeslot,
};

#[derive(Parser)]
#[command(name = "clinic", version, about = "Clinic appointment scheduler")]
struct Cli {
    /// Provider roster file
    #[arg(short, long)]
    providers: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let roster = load_roster(&cli.providers)?;

    println!("Providers loaded to the list.");
    for provider in roster.providers_by_name() {
        println!("{}", provider);
    }

    let rotation: Vec<String> = roster
        .technicians()
        .map(|technician| {
            format!(
                "{} {} ({})",
                technician.profile().first(),
                technician.profile().last(),
                technician.location().name()
            )
        })
        .collect();
    if !rotation.is_empty() {
        println!("Rotation list for the technicians.");
        println!("{}", rotation.join(" --> "));
    }

    println!("Clinic Manager is running.");

    let mut engine = SchedulingEngine::new(roster);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        match tokens[0] {
            "D" => schedule_office(&mut engine, &tokens),
            "T" => schedule_imaging(&mut engine, &tokens),
            "C" => cancel(&mut engine, &tokens),
            "R" => reschedule(&mut engine, &tokens),
            "PA" => print_report(
                &mut engine,
                ReportKey::Chronological,
                "** List of appointments, ordered by date/time/provider.",
            ),
            "PP" => print_report(
                &mut engine,
                ReportKey::ByPatient,
                "** List of appointments, ordered by patient/date/time.",
            ),
            "PL" => print_report(
                &mut engine,
                ReportKey::ByCounty,
                "** List of appointments, ordered by county/date/time.",
            ),
            "PO" => print_report(
                &mut engine,
                ReportKey::OfficeOnly,
                "** List of office appointments ordered by county/date/time.",
            ),
            "PI" => print_report(
                &mut engine,
                ReportKey::ImagingOnly,
                "** List of radiology appointments ordered by county/date/time.",
            ),
            "PS" => print_statements(&mut engine),
            "PC" => print_credits(&mut engine),
            "Q" => {
                println!("Clinic Manager terminated.");
                return Ok(());
            }
            _ => println!("Invalid command!"),
        }
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

/// `D,date,slot,first,last,dob,npi`
fn schedule_office(engine: &mut SchedulingEngine, tokens: &[&str]) {
    let [_, date_token, slot_token, first, last, dob_token, npi] = tokens else {
        println!("Missing data tokens.");
        return;
    };
    let Some(date) = parse_date_token(date_token, "Appointment date") else {
        return;
    };
    let Some(slot) = parse_slot_token(slot_token) else {
        return;
    };
    let Some(dob) = parse_date_token(dob_token, "Patient dob") else {
        return;
    };

    let patient = Profile::new(*first, *last, dob);
    match engine.schedule_office(date, slot, patient, npi) {
        Ok(appointment) => println!("{} booked.", appointment),
        Err(error) => report_rejection(error, date_token, dob_token),
    }
}

/// `T,date,slot,first,last,dob,room`
fn schedule_imaging(engine: &mut SchedulingEngine, tokens: &[&str]) {
    let [_, date_token, slot_token, first, last, dob_token, room_token] = tokens else {
        println!("Missing data tokens.");
        return;
    };
    let Some(date) = parse_date_token(date_token, "Appointment date") else {
        return;
    };
    let Some(slot) = parse_slot_token(slot_token) else {
        return;
    };
    let Some(dob) = parse_date_token(dob_token, "Patient dob") else {
        return;
    };
    let room = match room_token.parse::<ImagingService>() {
        Ok(room) => room,
        Err(error) => {
            println!("{}.", error);
            return;
        }
    };

    let patient = Profile::new(*first, *last, dob);
    match engine.schedule_imaging(date, slot, patient, room) {
        Ok(appointment) => println!("{} booked.", appointment),
        Err(error) => report_rejection(error, date_token, dob_token),
    }
}

/// `C,date,slot,first,last,dob`
fn cancel(engine: &mut SchedulingEngine, tokens: &[&str]) {
    let [_, date_token, slot_token, first, last, dob_token] = tokens else {
        println!("Missing data tokens.");
        return;
    };
    let Some(date) = parse_date_token(date_token, "Appointment date") else {
        return;
    };
    let Some(slot) = parse_slot_token(slot_token) else {
        return;
    };
    let Some(dob) = parse_date_token(dob_token, "Patient dob") else {
        return;
    };

    let patient = Profile::new(*first, *last, dob);
    match engine.cancel(date, slot, &patient) {
        Ok(_) => println!(
            "{} {} {} {} {} - appointment has been canceled.",
            date, slot, first, last, dob
        ),
        Err(_) => println!(
            "{} {} {} {} {} - appointment does not exist.",
            date, slot, first, last, dob
        ),
    }
}

/// `R,date,oldslot,first,last,dob,newslot`
fn reschedule(engine: &mut SchedulingEngine, tokens: &[&str]) {
    let [_, date_token, old_slot_token, first, last, dob_token, new_slot_token] = tokens else {
        println!("Missing data tokens.");
        return;
    };
    let Some(date) = parse_date_token(date_token, "Appointment date") else {
        return;
    };
    let Some(old_slot) = parse_slot_token(old_slot_token) else {
        return;
    };
    let Some(dob) = parse_date_token(dob_token, "Patient dob") else {
        return;
    };
    let Some(new_slot) = parse_slot_token(new_slot_token) else {
        return;
    };

    let patient = Profile::new(*first, *last, dob);
    match engine.reschedule(date, old_slot, &patient, new_slot) {
        Ok(appointment) => println!("Rescheduled to {}", appointment),
        Err(ScheduleError::NotFound) => println!(
            "{} {} {} {} {} does not exist.",
            date, old_slot, first, last, dob
        ),
        Err(error) => report_rejection(error, date_token, dob_token),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reports
// ─────────────────────────────────────────────────────────────────────────────

fn print_report(engine: &mut SchedulingEngine, key: ReportKey, header: &str) {
    if engine.appointments().is_empty() {
        println!("The schedule calendar is empty.");
        return;
    }
    println!();
    println!("{}", header);
    for appointment in engine.report(key) {
        println!("{}", appointment);
    }
    println!("** end of list **");
}

fn print_statements(engine: &mut SchedulingEngine) {
    if engine.appointments().is_empty() {
        println!("The schedule calendar is empty.");
        return;
    }
    println!();
    println!("** Billing statement ordered by patient. **");
    for (index, statement) in engine.billing_statements().iter().enumerate() {
        println!(
            "({}) {} [due: ${}]",
            index + 1,
            statement.profile,
            format_amount(statement.amount_due)
        );
    }
    println!("** end of list **");
}

fn print_credits(engine: &mut SchedulingEngine) {
    if engine.appointments().is_empty() {
        println!("The schedule calendar is empty.");
        return;
    }
    println!();
    println!("** Credit amount ordered by provider. **");
    for (index, credit) in engine.provider_credits().iter().enumerate() {
        println!(
            "({}) {} [credit amount: ${}]",
            index + 1,
            credit.profile,
            format_amount(credit.amount)
        );
    }
    println!("** end of list **");
}

// ─────────────────────────────────────────────────────────────────────────────
// Token parsing and rendering
// ─────────────────────────────────────────────────────────────────────────────

fn parse_date_token(token: &str, label: &str) -> Option<Date> {
    match token.parse::<Date>() {
        Ok(date) => Some(date),
        Err(_) => {
            // A malformed token and an impossible calendar date read the
            // same to the user.
            println!("{}: {} is not a valid calendar date.", label, token);
            None
        }
    }
}

fn parse_slot_token(token: &str) -> Option<Timeslot> {
    match token.parse::<Timeslot>() {
        Ok(slot) => Some(slot),
        Err(error) => {
            println!("{}.", error);
            None
        }
    }
}

/// Renders an engine rejection. Date and DOB reasons echo the raw token the
/// user typed; the rest render the reason value directly.
fn report_rejection(error: ScheduleError, date_token: &str, dob_token: &str) {
    match error {
        ScheduleError::Date(DateError::NotACalendarDate) => {
            println!("Appointment date: {} is not a valid calendar date.", date_token)
        }
        ScheduleError::Date(DateError::TodayOrPast) => {
            println!("Appointment date: {} is today or a date before today.", date_token)
        }
        ScheduleError::Date(DateError::Weekend) => {
            println!("Appointment date: {} is Saturday or Sunday.", date_token)
        }
        ScheduleError::Date(DateError::BeyondBookingHorizon) => {
            println!("Appointment date: {} is not within six months.", date_token)
        }
        ScheduleError::Dob(DobError::NotACalendarDate) => {
            println!("Patient dob: {} is not a valid calendar date.", dob_token)
        }
        ScheduleError::Dob(DobError::TodayOrFuture) => {
            println!("Patient dob: {} is today or a date after today.", dob_token)
        }
        other => println!("{}.", other),
    }
}

/// `$#,##0.00`-style rendering of whole-dollar amounts.
fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}.00", grouped)
}

// ─────────────────────────────────────────────────────────────────────────────
// Roster loading
// ─────────────────────────────────────────────────────────────────────────────

fn load_roster(path: &str) -> Result<Roster> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read providers file: {}", path))?;

    let mut roster = Roster::new();
    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let provider = parse_provider(&tokens)
            .with_context(|| format!("{}:{}: bad provider line", path, line_number + 1))?;
        roster.add(provider);
    }
    Ok(roster)
}

/// `D first last dob location specialty npi` or `T first last dob location rate`.
fn parse_provider(tokens: &[&str]) -> Result<Provider> {
    match tokens {
        ["D", first, last, dob, location, specialty, npi] => {
            let dob: Date = dob.parse()?;
            Ok(Provider::Doctor(Doctor::new(
                Profile::new(*first, *last, dob),
                location.parse()?,
                specialty.parse()?,
                *npi,
            )))
        }
        ["T", first, last, dob, location, rate] => {
            let dob: Date = dob.parse()?;
            Ok(Provider::Technician(Technician::new(
                Profile::new(*first, *last, dob),
                location.parse()?,
                rate.parse()?,
            )))
        }
        _ => anyhow::bail!("unrecognized provider line"),
    }
}
