// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use fieldbook::CoreError;
use fieldbook_domain::DomainError;
use fieldbook_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract: structural validation failures, conflicts, illegal lifecycle
/// transitions, missing resources, and internal faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The booking collides with the board: an overlapping active booking,
    /// or a field closed at the requested weekday or hour.
    BookingConflict {
        /// The conflicting booking's reference, when one exists.
        reference: Option<String>,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An illegal lifecycle transition was attempted. The booking is
    /// unchanged.
    InvalidTransition {
        /// A human-readable description of the rejected transition.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::BookingConflict { reference, message } => match reference {
                Some(reference) => {
                    write!(f, "Booking conflict with {reference}: {message}")
                }
                None => write!(f, "Booking conflict: {message}"),
            },
            Self::InvalidTransition { message } => {
                write!(f, "Invalid transition: {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidFieldCode(msg) => ApiError::InvalidInput {
            field: String::from("code"),
            message: msg,
        },
        DomainError::InvalidFieldName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidOperatingHours { opening, closing } => ApiError::InvalidInput {
            field: String::from("closing_time"),
            message: format!(
                "Closing time must be after opening time (opening={opening}, closing={closing})"
            ),
        },
        DomainError::HourOutOfRange { value } => ApiError::InvalidInput {
            field: String::from("operating_hours"),
            message: format!("Operating hour must be between 0 and 24, got {value}"),
        },
        DomainError::InvalidSlotDuration { duration } => ApiError::InvalidInput {
            field: String::from("slot_duration"),
            message: format!(
                "Slot duration must be greater than 0 and at most 8 hours, got {duration}"
            ),
        },
        DomainError::InvalidRate { tier, rate } => ApiError::InvalidInput {
            field: format!("{tier}_rate"),
            message: format!("The {tier} rate must not be negative, got {rate}"),
        },
        DomainError::DuplicateFieldCode(code) => ApiError::DomainRuleViolation {
            rule: String::from("unique_field_code"),
            message: format!("Field code '{code}' already exists"),
        },
        DomainError::FieldNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Field"),
            message: format!("Field {id} does not exist"),
        },
        DomainError::FieldInactive(code) => ApiError::DomainRuleViolation {
            rule: String::from("field_active"),
            message: format!("Field '{code}' is deactivated and accepts no bookings"),
        },
        DomainError::InvalidBookingTimes { start, end } => ApiError::InvalidInput {
            field: String::from("end_time"),
            message: format!("End time must be after start time (start={start}, end={end})"),
        },
        DomainError::BeforeOpeningTime { start, opening } => ApiError::BookingConflict {
            reference: None,
            message: format!("Start time {start} is before the field opening time {opening}"),
        },
        DomainError::AfterClosingTime { end, closing } => ApiError::BookingConflict {
            reference: None,
            message: format!("End time {end} is after the field closing time {closing}"),
        },
        DomainError::ClosedOnWeekday { weekday } => ApiError::BookingConflict {
            reference: None,
            message: format!("Field is not available on {weekday}"),
        },
        DomainError::ConflictingBooking { reference } => ApiError::BookingConflict {
            message: format!("An active booking already occupies this time: {reference}"),
            reference: Some(reference),
        },
        DomainError::PastBookingDate { date } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Bookings cannot be created for past dates ({date})"),
        },
        DomainError::InvalidBookingState(state) => ApiError::InvalidInput {
            field: String::from("state"),
            message: format!("Unknown booking state: {state}"),
        },
        DomainError::InvalidTransitionAction(action) => ApiError::InvalidInput {
            field: String::from("action"),
            message: format!("Unknown transition action: {action}"),
        },
        DomainError::InvalidTransition {
            from,
            action,
            reason,
        } => ApiError::InvalidTransition {
            message: format!("Cannot {action} a booking in state '{from}': {reason}"),
        },
        DomainError::BookingNotFound(reference) => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking '{reference}' does not exist"),
        },
        DomainError::InvalidSportCategory(sport) => ApiError::InvalidInput {
            field: String::from("sport"),
            message: format!("Unknown sport category: {sport}"),
        },
        DomainError::InvalidSurfaceType(surface) => ApiError::InvalidInput {
            field: String::from("surface"),
            message: format!("Unknown surface type: {surface}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Conflicts surfaced by the store's own overlap re-check keep their
/// conflicting reference so callers can retry with fresh data.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::FieldNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Field"),
            message: format!("Field {id} does not exist"),
        },
        PersistenceError::BookingNotFound(reference) => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking '{reference}' does not exist"),
        },
        PersistenceError::DuplicateFieldCode(code) => ApiError::DomainRuleViolation {
            rule: String::from("unique_field_code"),
            message: format!("Field code '{code}' already exists"),
        },
        PersistenceError::DuplicateReference(reference) => ApiError::Internal {
            message: format!("Booking reference '{reference}' already exists"),
        },
        PersistenceError::BookingConflict { reference } => ApiError::BookingConflict {
            message: format!("An active booking already occupies this time: {reference}"),
            reference: Some(reference),
        },
        PersistenceError::MissingIdentifier(msg) => ApiError::Internal {
            message: format!("Missing identifier: {msg}"),
        },
    }
}
