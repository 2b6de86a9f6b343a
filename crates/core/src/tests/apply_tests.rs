// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for booking creation and rescheduling through the apply path.

use crate::{Board, Command, CoreError, apply};
use fieldbook_domain::{BookingState, DomainError};
use time::macros::date;

use super::helpers::{
    board_with, booking_date, create_test_actor, create_test_booking, create_test_catalog,
    create_test_cause, test_now,
};

#[test]
fn test_create_booking_derives_price_and_stamps_creation() {
    let catalog = create_test_catalog();
    let board = Board::new();
    let booking = create_test_booking("RES-00001", 10.0, 12.0, BookingState::Pending);

    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();

    // Tuesday daytime at base rate 10.0 for two hours.
    assert_eq!(result.booking.total_price, 20.0);
    assert!(result.booking.created_at.is_some());
    assert_eq!(result.booking.confirmed_at, None);
    assert_eq!(result.new_board.bookings.len(), 1);
    assert_eq!(
        result.audit_event.booking_reference,
        Some(String::from("RES-00001"))
    );
}

#[test]
fn test_create_confirmed_shortcut_stamps_confirmation() {
    let catalog = create_test_catalog();
    let board = Board::new();
    let booking = create_test_booking("RES-00001", 10.0, 12.0, BookingState::Confirmed);

    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.booking.created_at, result.booking.confirmed_at);
}

#[test]
fn test_create_booking_rejects_unknown_field() {
    let catalog = create_test_catalog();
    let board = Board::new();
    let mut booking = create_test_booking("RES-00001", 10.0, 12.0, BookingState::Pending);
    booking.field_id = 99;

    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::FieldNotFound(99))
    ));
}

#[test]
fn test_create_booking_rejects_inactive_field() {
    let mut catalog = create_test_catalog();
    catalog.fields[0].active = false;
    let board = Board::new();
    let booking = create_test_booking("RES-00001", 10.0, 12.0, BookingState::Pending);

    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::FieldInactive(_))
    ));
}

#[test]
fn test_create_booking_rejects_inverted_times_in_any_state() {
    let catalog = create_test_catalog();
    let board = Board::new();
    // The structural end > start constraint applies even to drafts.
    let booking = create_test_booking("RES-00001", 12.0, 10.0, BookingState::Draft);

    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidBookingTimes { .. })
    ));
}

#[test]
fn test_create_draft_rejects_past_date() {
    let catalog = create_test_catalog();
    let board = Board::new();
    let mut booking = create_test_booking("RES-00001", 10.0, 12.0, BookingState::Draft);
    booking.date = date!(2026 - 02 - 20);

    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::PastBookingDate { .. })
    ));
}

#[test]
fn test_create_booking_rejects_overlap_and_names_conflict() {
    let catalog = create_test_catalog();
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Confirmed,
    )]);
    let candidate = create_test_booking("RES-00002", 11.0, 13.0, BookingState::Pending);

    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking: candidate },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ConflictingBooking {
            reference: String::from("RES-00001"),
        })
    );
}

#[test]
fn test_create_booking_accepts_adjacent_interval() {
    let catalog = create_test_catalog();
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Confirmed,
    )]);
    let candidate = create_test_booking("RES-00002", 12.0, 14.0, BookingState::Pending);

    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking: candidate },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(result.is_ok());
}

#[test]
fn test_create_draft_skips_board_validation() {
    let catalog = create_test_catalog();
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Confirmed,
    )]);
    // Overlapping, but drafts are not validated against the board.
    let candidate = create_test_booking("RES-00002", 10.0, 12.0, BookingState::Draft);

    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking: candidate },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(result.is_ok());
}

#[test]
fn test_reschedule_moves_booking_and_reprices() {
    let catalog = create_test_catalog();
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Confirmed,
    )]);

    // Move into the evening: night rate 20.0 applies.
    let result = apply(
        &catalog,
        &board,
        Command::RescheduleBooking {
            reference: String::from("RES-00001"),
            date: booking_date(),
            start_time: 19.0,
            end_time: 21.0,
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.booking.start_time, 19.0);
    assert_eq!(result.booking.total_price, 40.0);
    assert_eq!(result.new_board.bookings.len(), 1);
}

#[test]
fn test_reschedule_rejects_overlap_with_sibling() {
    let catalog = create_test_catalog();
    let board = board_with(vec![
        create_test_booking("RES-00001", 10.0, 12.0, BookingState::Confirmed),
        create_test_booking("RES-00002", 14.0, 16.0, BookingState::Confirmed),
    ]);

    let result = apply(
        &catalog,
        &board,
        Command::RescheduleBooking {
            reference: String::from("RES-00002"),
            date: booking_date(),
            start_time: 11.0,
            end_time: 13.0,
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ConflictingBooking {
            reference: String::from("RES-00001"),
        })
    );
}

#[test]
fn test_reschedule_unknown_reference_is_rejected() {
    let catalog = create_test_catalog();
    let board = Board::new();

    let result = apply(
        &catalog,
        &board,
        Command::RescheduleBooking {
            reference: String::from("RES-09999"),
            date: booking_date(),
            start_time: 10.0,
            end_time: 11.0,
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::BookingNotFound(_))
    ));
}
