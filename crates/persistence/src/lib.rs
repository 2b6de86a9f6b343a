// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record store for the Fieldbook reservation system.
//!
//! This crate provides the store for fields, bookings, and audit events.
//! The store is in-memory; the reservation core treats persistence as a
//! generic record-store collaborator, so the mechanics behind these
//! operations are deliberately unremarkable.
//!
//! ## Serialization of writes
//!
//! Booking creation is a validate-then-write sequence, and two concurrent
//! requests validating against the same snapshot could both pass. Every
//! booking write therefore re-checks overlap against the stored board
//! inside the `&mut self` mutation, which the caller serializes (the
//! server holds the store behind a mutex). A losing write surfaces as
//! [`PersistenceError::BookingConflict`] for the caller to retry with
//! fresh data.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};

use fieldbook::{Board, Catalog};
use fieldbook_audit::{AuditEvent, AuditTrail};
use fieldbook_domain::{Booking, DomainError, Field, SportCategory, validate_no_overlap};
use time::Date;
use tracing::{debug, warn};

pub use error::PersistenceError;

/// Monotonic counter backing booking reference generation.
///
/// Each call to `next_value()` receives a unique sequential number, eliminating
/// time-based collisions and keeping reference generation deterministic.
#[derive(Debug, Default)]
pub struct ReferenceSequence {
    counter: AtomicU64,
}

impl ReferenceSequence {
    /// Creates a new sequence starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Returns the next sequence number.
    #[must_use]
    pub fn next_value(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// The record store: fields, bookings, and the audit trail.
#[derive(Debug, Default)]
pub struct Persistence {
    fields: Vec<Field>,
    bookings: Vec<Booking>,
    trail: AuditTrail,
    next_field_id: i64,
    next_booking_id: i64,
    sequence: ReferenceSequence,
}

impl Persistence {
    /// Creates a new empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            bookings: Vec::new(),
            trail: AuditTrail::new(),
            next_field_id: 0,
            next_booking_id: 0,
            sequence: ReferenceSequence::new(),
        }
    }

    /// Returns the next booking reference number.
    #[must_use]
    pub fn next_reference_number(&self) -> u64 {
        self.sequence.next_value()
    }

    /// Stores a new field, assigning its canonical identifier.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateFieldCode` if the code is taken.
    pub fn insert_field(&mut self, field: Field) -> Result<Field, PersistenceError> {
        if self
            .fields
            .iter()
            .any(|f| f.code.value() == field.code.value())
        {
            return Err(PersistenceError::DuplicateFieldCode(
                field.code.value().to_string(),
            ));
        }

        self.next_field_id += 1;
        let mut field: Field = field;
        field.field_id = Some(self.next_field_id);
        debug!(field_id = self.next_field_id, code = %field.code, "field stored");
        self.fields.push(field.clone());
        Ok(field)
    }

    /// Replaces a stored field by its canonical identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the field carries no identifier or is unknown.
    pub fn update_field(&mut self, field: Field) -> Result<Field, PersistenceError> {
        let Some(field_id) = field.field_id else {
            return Err(PersistenceError::MissingIdentifier(String::from(
                "field has no field_id",
            )));
        };
        let Some(slot) = self.fields.iter_mut().find(|f| f.field_id == Some(field_id)) else {
            return Err(PersistenceError::FieldNotFound(field_id));
        };
        *slot = field.clone();
        Ok(field)
    }

    /// Fetches a field by its canonical identifier.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::FieldNotFound` if the field is unknown.
    pub fn field(&self, field_id: i64) -> Result<Field, PersistenceError> {
        self.fields
            .iter()
            .find(|f| f.field_id == Some(field_id))
            .cloned()
            .ok_or(PersistenceError::FieldNotFound(field_id))
    }

    /// Returns the active fields, optionally filtered by sport.
    ///
    /// Deactivated fields are excluded; they exist only for their
    /// historical bookings.
    #[must_use]
    pub fn active_fields(&self, sport: Option<SportCategory>) -> Vec<Field> {
        self.fields
            .iter()
            .filter(|f| f.active && sport.is_none_or(|s| f.sport == s))
            .cloned()
            .collect()
    }

    /// Stores a new booking, assigning its canonical identifier.
    ///
    /// The stored board is re-checked for overlap before the insert; this
    /// is the serialization point that closes the validate-then-write race.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BookingConflict` if an active booking
    /// already occupies the time, or `DuplicateReference` if the reference
    /// is taken.
    pub fn insert_booking(&mut self, booking: Booking) -> Result<Booking, PersistenceError> {
        if self.bookings.iter().any(|b| b.reference == booking.reference) {
            return Err(PersistenceError::DuplicateReference(booking.reference));
        }
        self.check_overlap(&booking)?;

        self.next_booking_id += 1;
        let mut booking: Booking = booking;
        booking.booking_id = Some(self.next_booking_id);
        debug!(
            booking_id = self.next_booking_id,
            reference = %booking.reference,
            "booking stored"
        );
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    /// Replaces a stored booking by its reference.
    ///
    /// The overlap re-check runs here as well: updates can move a booking
    /// into occupied time or into a state that occupies time.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BookingNotFound` if the reference is
    /// unknown, or `BookingConflict` if the new record overlaps an active
    /// sibling.
    pub fn update_booking(&mut self, booking: Booking) -> Result<Booking, PersistenceError> {
        self.check_overlap(&booking)?;

        let Some(slot) = self
            .bookings
            .iter_mut()
            .find(|b| b.reference == booking.reference)
        else {
            return Err(PersistenceError::BookingNotFound(booking.reference));
        };
        *slot = booking.clone();
        Ok(booking)
    }

    /// Fetches a booking by its reference.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BookingNotFound` if the reference is
    /// unknown.
    pub fn booking(&self, reference: &str) -> Result<Booking, PersistenceError> {
        self.bookings
            .iter()
            .find(|b| b.reference == reference)
            .cloned()
            .ok_or_else(|| PersistenceError::BookingNotFound(reference.to_string()))
    }

    /// Returns the bookings recorded for a field and date, in any state.
    #[must_use]
    pub fn bookings_for_field_date(&self, field_id: i64, date: Date) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.field_id == field_id && b.date == date)
            .cloned()
            .collect()
    }

    /// Appends an audit event to the trail.
    pub fn record_event(&mut self, event: AuditEvent) {
        self.trail.record(event);
    }

    /// Returns the audit events keyed to a booking, in arrival order.
    #[must_use]
    pub fn events_for_booking(&self, reference: &str) -> Vec<AuditEvent> {
        self.trail
            .events_for_booking(reference)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Builds a catalog snapshot for the core apply functions.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.fields = self.fields.clone();
        catalog
    }

    /// Builds a board snapshot for the core apply functions.
    #[must_use]
    pub fn board(&self) -> Board {
        let mut board = Board::new();
        board.bookings = self.bookings.clone();
        board
    }

    /// Re-checks a booking against the stored board.
    fn check_overlap(&self, booking: &Booking) -> Result<(), PersistenceError> {
        if !booking.is_active() {
            return Ok(());
        }
        if let Err(DomainError::ConflictingBooking { reference }) =
            validate_no_overlap(booking, &self.bookings)
        {
            warn!(
                candidate = %booking.reference,
                winner = %reference,
                "booking write lost overlap race"
            );
            return Err(PersistenceError::BookingConflict { reference });
        }
        Ok(())
    }
}
