//! Tests for the fixed twelve-slot ladder.

use clinic_core::Timeslot;

// ─────────────────────────────────────────────────────────────────────────────
// The ladder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn exactly_twelve_slots() {
    assert_eq!(Timeslot::ALL.len(), 12);
}

#[test]
fn half_hour_ladder_times() {
    let expected = [
        (9, 0),
        (9, 30),
        (10, 0),
        (10, 30),
        (11, 0),
        (11, 30),
        (14, 0),
        (14, 30),
        (15, 0),
        (15, 30),
        (16, 0),
        (16, 30),
    ];
    for (slot, (hour, minute)) in Timeslot::ALL.iter().zip(expected) {
        assert_eq!(
            (slot.hour(), slot.minute()),
            (hour, minute),
            "slot {} should be {}:{:02}",
            slot.index(),
            hour,
            minute
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric index
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn index_runs_one_through_twelve() {
    for (position, slot) in Timeslot::ALL.iter().enumerate() {
        assert_eq!(slot.index() as usize, position + 1);
    }
}

#[test]
fn from_index_round_trips() {
    for index in 1..=12u8 {
        let slot = Timeslot::from_index(index).expect("1-12 are valid indices");
        assert_eq!(slot.index(), index);
    }
}

#[test]
fn from_index_rejects_out_of_range() {
    assert_eq!(Timeslot::from_index(0), None);
    assert_eq!(Timeslot::from_index(13), None);
    assert_eq!(Timeslot::from_index(255), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Ordering, display, parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn ordered_chronologically() {
    assert!(Timeslot::Slot1 < Timeslot::Slot2);
    assert!(Timeslot::Slot6 < Timeslot::Slot7, "morning precedes afternoon");
    assert!(Timeslot::Slot11 < Timeslot::Slot12);

    let mut sorted = Timeslot::ALL;
    sorted.sort();
    assert_eq!(sorted, Timeslot::ALL, "declaration order is chronological");
}

#[test]
fn displays_in_twelve_hour_form() {
    assert_eq!(Timeslot::Slot1.to_string(), "9:00 AM");
    assert_eq!(Timeslot::Slot6.to_string(), "11:30 AM");
    assert_eq!(Timeslot::Slot7.to_string(), "2:00 PM");
    assert_eq!(Timeslot::Slot12.to_string(), "4:30 PM");
}

#[test]
fn parses_numeric_tokens() {
    assert_eq!("1".parse::<Timeslot>().unwrap(), Timeslot::Slot1);
    assert_eq!("12".parse::<Timeslot>().unwrap(), Timeslot::Slot12);
    assert_eq!(" 4 ".parse::<Timeslot>().unwrap(), Timeslot::Slot4);
}

#[test]
fn rejects_non_slot_tokens() {
    assert!("0".parse::<Timeslot>().is_err());
    assert!("13".parse::<Timeslot>().is_err());
    assert!("abc".parse::<Timeslot>().is_err());
    assert!("".parse::<Timeslot>().is_err());
}
