// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fieldbook_audit::{AuditEvent, StateSnapshot};
use fieldbook_domain::{Booking, Field, SportCategory};
use time::Date;

/// The field catalog: static configuration for every known field.
///
/// This is global metadata, separate from the booking board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// All known fields, active or not.
    pub fields: Vec<Field>,
}

impl Catalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Checks if a field code is already taken.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.fields.iter().any(|f| f.code.value() == code)
    }

    /// Looks up a field by its canonical identifier.
    #[must_use]
    pub fn field_by_id(&self, field_id: i64) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_id == Some(field_id))
    }

    /// Returns the active fields, optionally filtered by sport.
    ///
    /// Deactivated fields never appear in listings.
    #[must_use]
    pub fn active_fields(&self, sport: Option<SportCategory>) -> Vec<&Field> {
        self.fields
            .iter()
            .filter(|f| f.active && sport.is_none_or(|s| f.sport == s))
            .collect()
    }

    /// Adds a field.
    pub(crate) fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Replaces the field with the same canonical identifier.
    pub(crate) fn replace_field(&mut self, field: Field) {
        if let Some(slot) = self
            .fields
            .iter_mut()
            .find(|f| f.field_id == field.field_id)
        {
            *slot = field;
        }
    }
}

/// The booking board: every booking known to the system.
///
/// Transitions never mutate the board in place; they produce a new board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// All bookings, in creation order.
    pub bookings: Vec<Booking>,
}

impl Board {
    /// Creates a new empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    /// Looks up a booking by its reference.
    #[must_use]
    pub fn booking_by_reference(&self, reference: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.reference == reference)
    }

    /// Returns the bookings recorded for a field and date, in any state.
    #[must_use]
    pub fn bookings_for(&self, field_id: i64, date: Date) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.field_id == field_id && b.date == date)
            .collect()
    }

    /// Converts the board to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!("bookings_count={}", self.bookings.len()))
    }

    /// Adds a booking.
    pub(crate) fn add_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Replaces the booking with the same reference.
    pub(crate) fn replace_booking(&mut self, booking: Booking) {
        if let Some(slot) = self
            .bookings
            .iter_mut()
            .find(|b| b.reference == booking.reference)
        {
            *slot = booking;
        }
    }
}

/// The result of a successful catalog operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResult {
    /// The new catalog after the operation.
    pub new_catalog: Catalog,
    /// The field as created or updated.
    pub field: Field,
    /// The audit event recording this operation.
    pub audit_event: AuditEvent,
}

/// The result of a successful booking transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new board after the transition.
    pub new_board: Board,
    /// The booking as created or updated.
    pub booking: Booking,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
