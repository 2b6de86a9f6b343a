// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the record store, including the overlap re-check that closes
//! the validate-then-write race.

use crate::{Persistence, PersistenceError};
use fieldbook_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use fieldbook_domain::{
    Booking, BookingState, Field, OperatingHours, RateCard, SportCategory, WeekAvailability,
};
use time::macros::date;

fn unpersisted_field(code: &str, sport: SportCategory) -> Field {
    Field::new(
        code,
        format!("Field {code}"),
        sport,
        OperatingHours::new(8.0, 22.0, 1.0).unwrap(),
        WeekAvailability::open_every_day(),
        RateCard::new(10.0, None, None).unwrap(),
    )
}

fn unpersisted_booking(reference: &str, field_id: i64, start: f64, end: f64) -> Booking {
    Booking::new(
        reference.to_string(),
        7,
        field_id,
        date!(2026 - 03 - 03),
        start,
        end,
        BookingState::Confirmed,
    )
}

fn test_event(reference: &str) -> AuditEvent {
    AuditEvent::new(
        Actor::new(String::from("staff-1"), String::from("staff")),
        Cause::new(String::from("req-1"), String::from("Staff request")),
        Action::new(String::from("CreateBooking"), None),
        StateSnapshot::new(String::from("bookings_count=0")),
        StateSnapshot::new(String::from("bookings_count=1")),
        Some(reference.to_string()),
    )
}

#[test]
fn test_insert_field_assigns_sequential_ids() {
    let mut store = Persistence::new();

    let first = store
        .insert_field(unpersisted_field("F1", SportCategory::Tennis))
        .unwrap();
    let second = store
        .insert_field(unpersisted_field("F2", SportCategory::Padel))
        .unwrap();

    assert_eq!(first.field_id, Some(1));
    assert_eq!(second.field_id, Some(2));
}

#[test]
fn test_insert_field_rejects_duplicate_code() {
    let mut store = Persistence::new();
    store
        .insert_field(unpersisted_field("F1", SportCategory::Tennis))
        .unwrap();

    let result = store.insert_field(unpersisted_field("f1", SportCategory::Padel));

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::DuplicateFieldCode(String::from("F1"))
    );
}

#[test]
fn test_field_lookup_round_trip() {
    let mut store = Persistence::new();
    let stored = store
        .insert_field(unpersisted_field("F1", SportCategory::Tennis))
        .unwrap();

    let fetched = store.field(1).unwrap();

    assert_eq!(fetched, stored);
    assert_eq!(
        store.field(2),
        Err(PersistenceError::FieldNotFound(2))
    );
}

#[test]
fn test_active_fields_excludes_deactivated_and_filters_by_sport() {
    let mut store = Persistence::new();
    store
        .insert_field(unpersisted_field("F1", SportCategory::Tennis))
        .unwrap();
    let mut padel = store
        .insert_field(unpersisted_field("F2", SportCategory::Padel))
        .unwrap();

    padel.active = false;
    store.update_field(padel).unwrap();

    let active = store.active_fields(None);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].code.value(), "F1");

    assert!(store.active_fields(Some(SportCategory::Padel)).is_empty());
}

#[test]
fn test_insert_booking_assigns_id() {
    let mut store = Persistence::new();

    let stored = store
        .insert_booking(unpersisted_booking("RES-00001", 1, 10.0, 12.0))
        .unwrap();

    assert_eq!(stored.booking_id, Some(1));
    assert_eq!(store.booking("RES-00001").unwrap(), stored);
}

#[test]
fn test_insert_booking_rejects_duplicate_reference() {
    let mut store = Persistence::new();
    store
        .insert_booking(unpersisted_booking("RES-00001", 1, 10.0, 12.0))
        .unwrap();

    let result = store.insert_booking(unpersisted_booking("RES-00001", 1, 14.0, 15.0));

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::DuplicateReference(String::from("RES-00001"))
    );
}

#[test]
fn test_losing_racer_surfaces_conflict() {
    // Two requests validated against the same empty snapshot; the second
    // write must be rejected by the store's own re-check.
    let mut store = Persistence::new();
    store
        .insert_booking(unpersisted_booking("RES-00001", 1, 10.0, 12.0))
        .unwrap();

    let result = store.insert_booking(unpersisted_booking("RES-00002", 1, 11.0, 13.0));

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::BookingConflict {
            reference: String::from("RES-00001"),
        }
    );
}

#[test]
fn test_inactive_bookings_do_not_trip_the_conflict_check() {
    let mut store = Persistence::new();
    let mut cancelled = unpersisted_booking("RES-00001", 1, 10.0, 12.0);
    cancelled.state = BookingState::Cancelled;
    store.insert_booking(cancelled).unwrap();

    let result = store.insert_booking(unpersisted_booking("RES-00002", 1, 10.0, 12.0));

    assert!(result.is_ok());
}

#[test]
fn test_update_booking_replaces_record() {
    let mut store = Persistence::new();
    let mut stored = store
        .insert_booking(unpersisted_booking("RES-00001", 1, 10.0, 12.0))
        .unwrap();

    stored.state = BookingState::Cancelled;
    store.update_booking(stored).unwrap();

    assert_eq!(
        store.booking("RES-00001").unwrap().state,
        BookingState::Cancelled
    );
}

#[test]
fn test_update_booking_recheck_catches_new_overlap() {
    let mut store = Persistence::new();
    store
        .insert_booking(unpersisted_booking("RES-00001", 1, 10.0, 12.0))
        .unwrap();
    let second = store
        .insert_booking(unpersisted_booking("RES-00002", 1, 14.0, 16.0))
        .unwrap();

    let mut moved = second;
    moved.start_time = 11.0;
    moved.end_time = 13.0;

    let result = store.update_booking(moved);

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::BookingConflict {
            reference: String::from("RES-00001"),
        }
    );
}

#[test]
fn test_update_unknown_booking_is_rejected() {
    let mut store = Persistence::new();

    let result = store.update_booking(unpersisted_booking("RES-00001", 1, 10.0, 12.0));

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::BookingNotFound(String::from("RES-00001"))
    );
}

#[test]
fn test_bookings_for_field_date_filters() {
    let mut store = Persistence::new();
    store
        .insert_booking(unpersisted_booking("RES-00001", 1, 10.0, 12.0))
        .unwrap();
    store
        .insert_booking(unpersisted_booking("RES-00002", 2, 10.0, 12.0))
        .unwrap();

    let found = store.bookings_for_field_date(1, date!(2026 - 03 - 03));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].reference, "RES-00001");
    assert!(
        store
            .bookings_for_field_date(1, date!(2026 - 03 - 04))
            .is_empty()
    );
}

#[test]
fn test_events_are_keyed_by_booking() {
    let mut store = Persistence::new();
    store.record_event(test_event("RES-00001"));
    store.record_event(test_event("RES-00002"));
    store.record_event(test_event("RES-00001"));

    assert_eq!(store.events_for_booking("RES-00001").len(), 2);
    assert_eq!(store.events_for_booking("RES-00002").len(), 1);
    assert!(store.events_for_booking("RES-00003").is_empty());
}

#[test]
fn test_reference_sequence_is_monotonic() {
    let store = Persistence::new();

    let first = store.next_reference_number();
    let second = store.next_reference_number();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn test_snapshots_reflect_stored_records() {
    let mut store = Persistence::new();
    store
        .insert_field(unpersisted_field("F1", SportCategory::Tennis))
        .unwrap();
    store
        .insert_booking(unpersisted_booking("RES-00001", 1, 10.0, 12.0))
        .unwrap();

    assert_eq!(store.catalog().fields.len(), 1);
    assert_eq!(store.board().bookings.len(), 1);
}
