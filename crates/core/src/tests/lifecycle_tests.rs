// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for lifecycle transitions and their board re-validation.

use crate::{Board, Command, CoreError, TransitionResult, apply};
use fieldbook_domain::{BookingState, DomainError, TransitionAction, WeekAvailability};

use super::helpers::{
    board_with, create_test_actor, create_test_booking, create_test_catalog, create_test_cause,
    test_now,
};

fn transition(board: &Board, reference: &str, action: TransitionAction) -> Result<TransitionResult, CoreError> {
    apply(
        &create_test_catalog(),
        board,
        Command::TransitionBooking {
            reference: reference.to_string(),
            action,
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
}

#[test]
fn test_confirm_stamps_confirmation_time() {
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Draft,
    )]);

    let result = transition(&board, "RES-00001", TransitionAction::Confirm).unwrap();

    assert_eq!(result.booking.state, BookingState::Confirmed);
    assert!(result.booking.confirmed_at.is_some());
}

#[test]
fn test_full_lifecycle_happy_path() {
    let mut board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Draft,
    )]);

    for (action, expected) in [
        (TransitionAction::Confirm, BookingState::Confirmed),
        (TransitionAction::Start, BookingState::InProgress),
        (TransitionAction::Complete, BookingState::Completed),
    ] {
        let result = transition(&board, "RES-00001", action).unwrap();
        assert_eq!(result.booking.state, expected);
        board = result.new_board;
    }
}

#[test]
fn test_start_requires_confirmed_state() {
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Pending,
    )]);

    let result = transition(&board, "RES-00001", TransitionAction::Start);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition { .. })
    ));
}

#[test]
fn test_cancel_from_any_live_state() {
    for state in [
        BookingState::Draft,
        BookingState::Pending,
        BookingState::Confirmed,
        BookingState::InProgress,
    ] {
        let board = board_with(vec![create_test_booking("RES-00001", 10.0, 12.0, state)]);

        let result = transition(&board, "RES-00001", TransitionAction::Cancel).unwrap();

        assert_eq!(result.booking.state, BookingState::Cancelled);
    }
}

#[test]
fn test_cancel_of_cancelled_booking_fails_and_changes_nothing() {
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Cancelled,
    )]);

    let result = transition(&board, "RES-00001", TransitionAction::Cancel);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition { .. })
    ));
    // The original board is untouched; the booking is still cancelled.
    assert_eq!(board.bookings[0].state, BookingState::Cancelled);
}

#[test]
fn test_cancel_of_completed_booking_fails() {
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Completed,
    )]);

    let result = transition(&board, "RES-00001", TransitionAction::Cancel);

    assert!(result.is_err());
}

#[test]
fn test_reset_to_draft_escapes_terminal_states() {
    for state in [BookingState::Completed, BookingState::Cancelled] {
        let board = board_with(vec![create_test_booking("RES-00001", 10.0, 12.0, state)]);

        let result = transition(&board, "RES-00001", TransitionAction::ResetToDraft).unwrap();

        assert_eq!(result.booking.state, BookingState::Draft);
    }
}

#[test]
fn test_confirm_revalidates_against_the_board() {
    // A draft overlapping a confirmed booking may exist, but confirming it
    // must fail: entering an active state re-runs the overlap check.
    let board = board_with(vec![
        create_test_booking("RES-00001", 10.0, 12.0, BookingState::Confirmed),
        create_test_booking("RES-00002", 11.0, 13.0, BookingState::Draft),
    ]);

    let result = transition(&board, "RES-00002", TransitionAction::Confirm);

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ConflictingBooking {
            reference: String::from("RES-00001"),
        })
    );
}

#[test]
fn test_confirm_rejects_booking_outside_operating_window() {
    let mut catalog = create_test_catalog();
    catalog.fields[0].week = WeekAvailability {
        tuesday: false,
        ..WeekAvailability::open_every_day()
    };
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Draft,
    )]);

    let result = apply(
        &catalog,
        &board,
        Command::TransitionBooking {
            reference: String::from("RES-00001"),
            action: TransitionAction::Confirm,
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ClosedOnWeekday { .. })
    ));
}

#[test]
fn test_cancel_skips_board_validation() {
    // Cancelling must succeed even when the booking no longer fits the
    // board (here: two confirmed bookings overlap after a manual edit).
    let board = board_with(vec![
        create_test_booking("RES-00001", 10.0, 12.0, BookingState::Confirmed),
        create_test_booking("RES-00002", 11.0, 13.0, BookingState::Confirmed),
    ]);

    let result = transition(&board, "RES-00002", TransitionAction::Cancel);

    assert!(result.is_ok());
}

#[test]
fn test_transition_unknown_reference_is_rejected() {
    let board = Board::new();

    let result = transition(&board, "RES-09999", TransitionAction::Confirm);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::BookingNotFound(_))
    ));
}

#[test]
fn test_transition_audit_event_names_action_and_reference() {
    let board = board_with(vec![create_test_booking(
        "RES-00001",
        10.0,
        12.0,
        BookingState::Draft,
    )]);

    let result = transition(&board, "RES-00001", TransitionAction::Confirm).unwrap();

    assert_eq!(result.audit_event.action.name, "ConfirmBooking");
    assert_eq!(
        result.audit_event.booking_reference,
        Some(String::from("RES-00001"))
    );
}
