//! Tests for the round-robin technician rotation.

use clinic_core::{Date, Location, Profile, Technician, TechnicianRotation};

fn technician(first: &str, last: &str, location: Location) -> Technician {
    Technician::new(
        Profile::new(first, last, Date::new(1, 1, 1990)),
        location,
        110,
    )
}

fn three_technicians() -> Vec<Technician> {
    vec![
        technician("Jenny", "Patel", Location::Bridgewater),
        technician("Monica", "Fox", Location::Edison),
        technician("Charles", "Brown", Location::Morristown),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Fairness
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn n_calls_visit_every_technician_in_roster_order() {
    let technicians = three_technicians();
    let mut rotation = TechnicianRotation::new(technicians.clone());

    for expected in &technicians {
        let handed_out = rotation.next().expect("roster is non-empty");
        assert_eq!(
            handed_out.profile(),
            expected.profile(),
            "rotation must follow roster order"
        );
    }
}

#[test]
fn wraps_around_and_repeats_the_same_order() {
    let technicians = three_technicians();
    let mut rotation = TechnicianRotation::new(technicians.clone());

    let first_pass: Vec<Profile> = (0..3)
        .map(|_| rotation.next().unwrap().profile().clone())
        .collect();
    let second_pass: Vec<Profile> = (0..3)
        .map(|_| rotation.next().unwrap().profile().clone())
        .collect();

    assert_eq!(first_pass, second_pass, "each cycle repeats the roster order");
}

// ─────────────────────────────────────────────────────────────────────────────
// Cursor behavior
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn cursor_keeps_advancing_between_calls() {
    let technicians = three_technicians();
    let mut rotation = TechnicianRotation::new(technicians.clone());

    rotation.next();
    rotation.next();
    // The next hand-out is the third technician, not a restart.
    let third = rotation.next().unwrap();
    assert_eq!(third.profile(), technicians[2].profile());
}

#[test]
fn reset_returns_to_the_start() {
    let technicians = three_technicians();
    let mut rotation = TechnicianRotation::new(technicians.clone());

    rotation.next();
    rotation.next();
    rotation.reset();
    assert_eq!(rotation.next().unwrap().profile(), technicians[0].profile());
}

// ─────────────────────────────────────────────────────────────────────────────
// Empty roster
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_roster_hands_out_nothing() {
    let mut rotation = TechnicianRotation::new(Vec::new());
    assert!(rotation.is_empty());
    assert_eq!(rotation.len(), 0);
    assert!(rotation.next().is_none());
    // Still nothing on repeated calls.
    assert!(rotation.next().is_none());
}

#[test]
fn single_technician_repeats_forever() {
    let technicians = vec![technician("Frank", "Lin", Location::Edison)];
    let mut rotation = TechnicianRotation::new(technicians.clone());

    for _ in 0..5 {
        assert_eq!(rotation.next().unwrap().profile(), technicians[0].profile());
    }
}
