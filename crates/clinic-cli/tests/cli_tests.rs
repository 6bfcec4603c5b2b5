//! Integration tests for the `clinic` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the roster loading
//! and the command loop through the actual binary, piping command scripts
//! over stdin. Booking dates are computed relative to the real clock so the
//! date-validation rules accept them on any day the suite runs.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use predicates::prelude::*;

/// Helper: path to the providers.txt fixture.
fn providers_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/providers.txt")
}

fn clinic() -> Command {
    let mut cmd = Command::cargo_bin("clinic").unwrap();
    cmd.args(["--providers", providers_path()]);
    cmd
}

fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// A weekday roughly a month out — valid on any day the tests run.
fn future_weekday() -> String {
    let mut date = Local::now().date_naive() + Duration::days(30);
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date += Duration::days(1);
    }
    format_date(date)
}

/// A Saturday roughly a month out.
fn future_saturday() -> String {
    let mut date = Local::now().date_naive() + Duration::days(30);
    while date.weekday() != Weekday::Sat {
        date += Duration::days(1);
    }
    format_date(date)
}

// ─────────────────────────────────────────────────────────────────────────────
// Startup
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn startup_lists_providers_and_rotation() {
    clinic()
        .write_stdin("Q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Providers loaded to the list."))
        .stdout(predicate::str::contains("Rotation list for the technicians."))
        .stdout(predicate::str::contains(
            "JENNY PATEL (EDISON) --> FRANK LIN (EDISON)",
        ))
        .stdout(predicate::str::contains("Clinic Manager is running."))
        .stdout(predicate::str::contains("Clinic Manager terminated."));
}

#[test]
fn missing_roster_file_fails_with_context() {
    Command::cargo_bin("clinic")
        .unwrap()
        .args(["--providers", "/no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read providers file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Scheduling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn books_an_office_visit() {
    let script = format!("D,{},1,John,Doe,12/13/1989,01\nQ\n", future_weekday());

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("9:00 AM"))
        .stdout(predicate::str::contains("booked."));
}

#[test]
fn rejects_a_nonexistent_calendar_date() {
    clinic()
        .write_stdin("D,13/1/2025,1,John,Doe,12/13/1989,01\nQ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Appointment date: 13/1/2025 is not a valid calendar date.",
        ));
}

#[test]
fn rejects_weekend_dates() {
    let script = format!("D,{},1,John,Doe,12/13/1989,01\nQ\n", future_saturday());

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("is Saturday or Sunday."));
}

#[test]
fn rejects_an_unknown_provider() {
    let script = format!("D,{},1,John,Doe,12/13/1989,99\nQ\n", future_weekday());

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("99 - provider does not exist."));
}

#[test]
fn rejects_a_bad_timeslot_token() {
    let script = format!("D,{},13,John,Doe,12/13/1989,01\nQ\n", future_weekday());

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("13 is not a valid time slot."));
}

#[test]
fn imaging_exhausts_the_shared_edison_room() {
    // Both fixture technicians sit at Edison: the first X-ray booking takes
    // the room for that slot, the second finds nobody.
    let date = future_weekday();
    let script = format!(
        "T,{date},3,Ann,Ames,1/2/1990,xray\nT,{date},3,Bob,Best,3/4/1991,xray\nQ\n",
    );

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("booked."))
        .stdout(predicate::str::contains(
            "no technician is available at any location.",
        ));
}

#[test]
fn rejects_an_unknown_imaging_service() {
    let script = format!("T,{},3,Ann,Ames,1/2/1990,mri\nQ\n", future_weekday());

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("mri - imaging service not provided."));
}

// ─────────────────────────────────────────────────────────────────────────────
// Cancel and reschedule
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn cancels_a_booked_appointment() {
    let date = future_weekday();
    let script = format!(
        "D,{date},1,John,Doe,12/13/1989,01\nC,{date},1,john,doe,12/13/1989\nQ\n",
    );

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("appointment has been canceled."));
}

#[test]
fn cancel_of_nothing_reports_not_found() {
    let script = format!("C,{},1,John,Doe,12/13/1989\nQ\n", future_weekday());

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("appointment does not exist."));
}

#[test]
fn reschedules_an_office_visit() {
    let date = future_weekday();
    let script = format!(
        "D,{date},1,John,Doe,12/13/1989,01\nR,{date},1,John,Doe,12/13/1989,4\nQ\n",
    );

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rescheduled to"))
        .stdout(predicate::str::contains("10:30 AM"));
}

#[test]
fn imaging_visits_cannot_be_rescheduled() {
    let date = future_weekday();
    let script = format!(
        "T,{date},3,Ann,Ames,1/2/1990,ultrasound\nR,{date},3,Ann,Ames,1/2/1990,4\nQ\n",
    );

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("cannot be rescheduled."));
}

// ─────────────────────────────────────────────────────────────────────────────
// Reports and billing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_schedule_reports_are_empty() {
    clinic()
        .write_stdin("PA\nQ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The schedule calendar is empty."));
}

#[test]
fn lists_appointments_in_order() {
    let date = future_weekday();
    let script = format!(
        "D,{date},2,John,Doe,12/13/1989,01\nD,{date},1,Jane,Roe,5/6/1988,23\nPA\nQ\n",
    );

    let assert = clinic().write_stdin(script).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let header = "** List of appointments, ordered by date/time/provider.";
    assert!(stdout.contains(header), "missing report header");
    assert!(stdout.contains("** end of list **"));

    // Slot 1 (9:00 AM) lists before slot 2 (9:30 AM) in the report body.
    let body = &stdout[stdout.find(header).unwrap()..];
    let first = body.find("9:00 AM").expect("slot 1 in report");
    let second = body.find("9:30 AM").expect("slot 2 in report");
    assert!(first < second, "chronological order in the report");
}

#[test]
fn billing_statement_totals_the_visits() {
    let date = future_weekday();
    let script = format!(
        "D,{date},1,John,Doe,12/13/1989,01\nD,{date},2,John,Doe,12/13/1989,23\nPS\nQ\n",
    );

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("** Billing statement ordered by patient. **"))
        // Family ($250) + pediatrician ($300).
        .stdout(predicate::str::contains("[due: $550.00]"));
}

#[test]
fn provider_credits_follow_the_rates() {
    let date = future_weekday();
    let script = format!("T,{date},3,Ann,Ames,1/2/1990,xray\nPC\nQ\n");

    clinic()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("** Credit amount ordered by provider. **"))
        .stdout(predicate::str::contains("[credit amount: $125.00]"));
}
