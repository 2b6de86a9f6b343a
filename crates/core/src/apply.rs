// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Board, Catalog, CatalogResult, TransitionResult};
use fieldbook_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use fieldbook_domain::{
    Booking, DomainError, Field, TransitionAction, apply_action, quote_price, validate_booking,
    validate_booking_date, validate_booking_times, validate_field,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Applies a catalog command, producing a new catalog and audit event.
///
/// Catalog commands (`CreateField`, `SetFieldActive`) operate on global
/// field configuration, not the booking board.
///
/// # Arguments
///
/// * `catalog` - The current catalog (immutable)
/// * `command` - The catalog command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(CatalogResult)` containing the new catalog and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates domain rules or names an
/// unknown field.
#[allow(clippy::too_many_lines)]
pub fn apply_catalog(
    catalog: &Catalog,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogResult, CoreError> {
    match command {
        Command::CreateField { field } => {
            validate_field(&field)?;

            // Check for duplicate code
            if catalog.has_code(field.code.value()) {
                return Err(CoreError::DomainViolation(DomainError::DuplicateFieldCode(
                    field.code.value().to_string(),
                )));
            }

            let mut new_catalog: Catalog = catalog.clone();
            new_catalog.add_field(field.clone());

            let before: StateSnapshot =
                StateSnapshot::new(format!("fields_count={}", catalog.fields.len()));
            let after: StateSnapshot =
                StateSnapshot::new(format!("fields_count={}", new_catalog.fields.len()));

            let action: Action = Action::new(
                String::from("CreateField"),
                Some(format!(
                    "Created field '{}' ({})",
                    field.code.value(),
                    field.sport.as_str()
                )),
            );

            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, None);

            Ok(CatalogResult {
                new_catalog,
                field,
                audit_event,
            })
        }
        Command::UpdateField { field } => {
            validate_field(&field)?;

            let Some(field_id) = field.field_id else {
                return Err(CoreError::Internal(String::from(
                    "UpdateField requires a persisted field",
                )));
            };
            if catalog.field_by_id(field_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::FieldNotFound(
                    field_id,
                )));
            }

            // The code may change, but not onto another field.
            if catalog
                .fields
                .iter()
                .any(|f| f.field_id != Some(field_id) && f.code == field.code)
            {
                return Err(CoreError::DomainViolation(DomainError::DuplicateFieldCode(
                    field.code.value().to_string(),
                )));
            }

            let mut new_catalog: Catalog = catalog.clone();
            new_catalog.replace_field(field.clone());

            let before: StateSnapshot =
                StateSnapshot::new(format!("field={field_id},updated=false"));
            let after: StateSnapshot =
                StateSnapshot::new(format!("field={field_id},updated=true"));

            let action: Action = Action::new(
                String::from("UpdateField"),
                Some(format!("Updated field '{}'", field.code.value())),
            );

            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, None);

            Ok(CatalogResult {
                new_catalog,
                field,
                audit_event,
            })
        }
        Command::SetFieldActive { field_id, active } => {
            let Some(existing) = catalog.field_by_id(field_id) else {
                return Err(CoreError::DomainViolation(DomainError::FieldNotFound(
                    field_id,
                )));
            };

            let mut field: Field = existing.clone();
            let before: StateSnapshot = StateSnapshot::new(format!(
                "field={},active={}",
                field.code.value(),
                field.active
            ));
            field.active = active;
            let after: StateSnapshot = StateSnapshot::new(format!(
                "field={},active={}",
                field.code.value(),
                field.active
            ));

            let mut new_catalog: Catalog = catalog.clone();
            new_catalog.replace_field(field.clone());

            let action: Action = Action::new(
                String::from("SetFieldActive"),
                Some(format!(
                    "Field '{}' {}",
                    field.code.value(),
                    if active { "activated" } else { "deactivated" }
                )),
            );

            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, None);

            Ok(CatalogResult {
                new_catalog,
                field,
                audit_event,
            })
        }
        _ => {
            // Booking commands should use apply() instead
            unreachable!("apply_catalog called with a booking command")
        }
    }
}

/// Applies a booking command to the board, producing a new board and
/// audit event.
///
/// Every write that touches a booking's field, date, times, or state is
/// validated here before the new board is produced; a failed validation
/// leaves the board untouched.
///
/// # Arguments
///
/// * `catalog` - The field catalog (for window and pricing lookups)
/// * `board` - The current booking board (immutable)
/// * `command` - The booking command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The current instant, injected for deterministic stamping
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new board and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command violates domain rules
/// - The field or booking does not exist
#[allow(clippy::too_many_lines)]
pub fn apply(
    catalog: &Catalog,
    board: &Board,
    command: Command,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateBooking { booking } => {
            let field: &Field = catalog
                .field_by_id(booking.field_id)
                .ok_or(DomainError::FieldNotFound(booking.field_id))?;
            if !field.active {
                return Err(CoreError::DomainViolation(DomainError::FieldInactive(
                    field.code.value().to_string(),
                )));
            }

            validate_booking_times(&booking)?;
            validate_booking_date(&booking, now.date())?;
            validate_booking(&booking, field, &board.bookings)?;

            let mut booking: Booking = booking;
            booking.total_price =
                quote_price(field, booking.date, booking.start_time, booking.duration());
            let stamp: String = format_timestamp(now)?;
            booking.created_at = Some(stamp.clone());
            if booking.state == fieldbook_domain::BookingState::Confirmed {
                booking.confirmed_at = Some(stamp);
            }

            let before: StateSnapshot = board.to_snapshot();
            let mut new_board: Board = board.clone();
            new_board.add_booking(booking.clone());
            let after: StateSnapshot = new_board.to_snapshot();

            let action: Action = Action::new(
                String::from("CreateBooking"),
                Some(format!(
                    "Created booking {} on field {} for {} ({}-{})",
                    booking.reference,
                    booking.field_id,
                    booking.date,
                    booking.start_time,
                    booking.end_time
                )),
            );

            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                after,
                Some(booking.reference.clone()),
            );

            Ok(TransitionResult {
                new_board,
                booking,
                audit_event,
            })
        }
        Command::RescheduleBooking {
            reference,
            date,
            start_time,
            end_time,
        } => {
            let Some(existing) = board.booking_by_reference(&reference) else {
                return Err(CoreError::DomainViolation(DomainError::BookingNotFound(
                    reference,
                )));
            };

            let mut booking: Booking = existing.clone();
            let before: StateSnapshot = StateSnapshot::new(format!(
                "reference={},date={},start={},end={}",
                booking.reference, booking.date, booking.start_time, booking.end_time
            ));
            booking.date = date;
            booking.start_time = start_time;
            booking.end_time = end_time;

            let field: &Field = catalog
                .field_by_id(booking.field_id)
                .ok_or(DomainError::FieldNotFound(booking.field_id))?;

            validate_booking_times(&booking)?;
            validate_booking_date(&booking, now.date())?;
            validate_booking(&booking, field, &board.bookings)?;

            booking.total_price =
                quote_price(field, booking.date, booking.start_time, booking.duration());

            let after: StateSnapshot = StateSnapshot::new(format!(
                "reference={},date={},start={},end={}",
                booking.reference, booking.date, booking.start_time, booking.end_time
            ));

            let mut new_board: Board = board.clone();
            new_board.replace_booking(booking.clone());

            let action: Action = Action::new(
                String::from("RescheduleBooking"),
                Some(format!(
                    "Moved booking {} to {} ({start_time}-{end_time})",
                    booking.reference, booking.date
                )),
            );

            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                after,
                Some(booking.reference.clone()),
            );

            Ok(TransitionResult {
                new_board,
                booking,
                audit_event,
            })
        }
        Command::TransitionBooking { reference, action } => {
            let Some(existing) = board.booking_by_reference(&reference) else {
                return Err(CoreError::DomainViolation(DomainError::BookingNotFound(
                    reference,
                )));
            };

            let mut booking: Booking = existing.clone();
            let before: StateSnapshot = StateSnapshot::new(format!(
                "reference={},state={}",
                booking.reference, booking.state
            ));

            booking.state = apply_action(booking.state, action)?;
            if action == TransitionAction::Confirm {
                booking.confirmed_at = Some(format_timestamp(now)?);
            }

            // State is part of the validated field set: a booking entering
            // an active state must still fit the board. Transitions into
            // draft or cancelled are exempt.
            let field: &Field = catalog
                .field_by_id(booking.field_id)
                .ok_or(DomainError::FieldNotFound(booking.field_id))?;
            validate_booking(&booking, field, &board.bookings)?;

            let after: StateSnapshot = StateSnapshot::new(format!(
                "reference={},state={}",
                booking.reference, booking.state
            ));

            let mut new_board: Board = board.clone();
            new_board.replace_booking(booking.clone());

            let audit_action: Action = Action::new(
                transition_event_name(action).to_string(),
                Some(format!(
                    "Booking {}: {} -> {}",
                    booking.reference, existing.state, booking.state
                )),
            );

            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                audit_action,
                before,
                after,
                Some(booking.reference.clone()),
            );

            Ok(TransitionResult {
                new_board,
                booking,
                audit_event,
            })
        }
        _ => {
            // Catalog commands should use apply_catalog() instead
            unreachable!("apply called with a catalog command")
        }
    }
}

/// Maps a lifecycle action to its audit event name.
const fn transition_event_name(action: TransitionAction) -> &'static str {
    match action {
        TransitionAction::Confirm => "ConfirmBooking",
        TransitionAction::SetPending => "SetBookingPending",
        TransitionAction::Start => "StartBooking",
        TransitionAction::Complete => "CompleteBooking",
        TransitionAction::Cancel => "CancelBooking",
        TransitionAction::ResetToDraft => "ResetBookingToDraft",
    }
}

/// Formats an instant as RFC 3339 for storage on the booking.
fn format_timestamp(now: OffsetDateTime) -> Result<String, CoreError> {
    now.format(&Rfc3339)
        .map_err(|e| CoreError::Internal(format!("Failed to format timestamp: {e}")))
}
