// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule validation for fields and bookings.
//!
//! All functions here are pure, deterministic, and have no side effects.
//! The overlap predicate is the single source of truth for interval
//! conflicts; slot generation and booking validation share it.

use crate::error::DomainError;
use crate::types::{Booking, Field};
use time::Date;

/// Half-open interval overlap test.
///
/// Two intervals `[s1, e1)` and `[s2, e2)` overlap iff `s1 < e2 && s2 < e1`.
/// A booking ending exactly where another starts does not conflict.
#[must_use]
pub const fn intervals_overlap(start_a: f64, end_a: f64, start_b: f64, end_b: f64) -> bool {
    start_a < end_b && start_b < end_a
}

/// Validates a field's structural constraints.
///
/// Operating hours and rates are validated at construction time; this
/// function checks the context-free string fields.
///
/// # Errors
///
/// Returns an error if the code or name is empty.
pub fn validate_field(field: &Field) -> Result<(), DomainError> {
    if field.code.value().is_empty() {
        return Err(DomainError::InvalidFieldCode(String::from(
            "Code cannot be empty",
        )));
    }
    if field.name.is_empty() {
        return Err(DomainError::InvalidFieldName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a booking's end time is after its start time.
///
/// This is structural and applies in every state, including draft.
///
/// # Errors
///
/// Returns `DomainError::InvalidBookingTimes` if the end time is not after
/// the start time.
pub fn validate_booking_times(booking: &Booking) -> Result<(), DomainError> {
    if booking.end_time <= booking.start_time {
        return Err(DomainError::InvalidBookingTimes {
            start: booking.start_time,
            end: booking.end_time,
        });
    }
    Ok(())
}

/// Validates that a booking lies within its field's operating window.
///
/// # Errors
///
/// Returns an error if the booking starts before the field opens, ends
/// after it closes, or falls on a disabled weekday.
pub fn validate_booking_window(booking: &Booking, field: &Field) -> Result<(), DomainError> {
    if booking.start_time < field.hours.opening() {
        return Err(DomainError::BeforeOpeningTime {
            start: booking.start_time,
            opening: field.hours.opening(),
        });
    }
    if booking.end_time > field.hours.closing() {
        return Err(DomainError::AfterClosingTime {
            end: booking.end_time,
            closing: field.hours.closing(),
        });
    }
    let weekday = booking.date.weekday();
    if !field.week.is_open(weekday) {
        return Err(DomainError::ClosedOnWeekday { weekday });
    }
    Ok(())
}

/// Validates that a booking does not overlap any active sibling.
///
/// Siblings are bookings on the same field and date, excluding the booking
/// itself (by reference), in a state that counts for conflicts.
///
/// # Errors
///
/// Returns `DomainError::ConflictingBooking` carrying the first
/// conflicting booking's reference.
pub fn validate_no_overlap(booking: &Booking, existing: &[Booking]) -> Result<(), DomainError> {
    existing
        .iter()
        .find(|other| {
            other.field_id == booking.field_id
                && other.date == booking.date
                && other.reference != booking.reference
                && other.is_active()
                && intervals_overlap(
                    booking.start_time,
                    booking.end_time,
                    other.start_time,
                    other.end_time,
                )
        })
        .map_or(Ok(()), |other| {
            Err(DomainError::ConflictingBooking {
                reference: other.reference.clone(),
            })
        })
}

/// Validates a booking against its field and the existing board.
///
/// Bookings in draft or cancelled state skip every check: draft bookings
/// are not yet on the board, and cancellation must always be allowed to
/// persist past validity.
///
/// # Errors
///
/// Returns the first window or overlap violation found.
pub fn validate_booking(
    booking: &Booking,
    field: &Field,
    existing: &[Booking],
) -> Result<(), DomainError> {
    if booking.state.skips_validation() {
        return Ok(());
    }
    validate_booking_window(booking, field)?;
    validate_no_overlap(booking, existing)?;
    Ok(())
}

/// Validates the past-date guard for draft bookings.
///
/// Applied on creation and on date changes only. Bookings in other states
/// may carry past dates; moving them there is reserved for privileged
/// backdating flows outside this crate.
///
/// # Errors
///
/// Returns `DomainError::PastBookingDate` if the booking is a draft dated
/// before `today`.
pub fn validate_booking_date(booking: &Booking, today: Date) -> Result<(), DomainError> {
    if booking.state == crate::booking_state::BookingState::Draft && booking.date < today {
        return Err(DomainError::PastBookingDate { date: booking.date });
    }
    Ok(())
}
