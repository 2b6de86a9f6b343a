// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Field code is empty or invalid.
    InvalidFieldCode(String),
    /// Field name is empty or invalid.
    InvalidFieldName(String),
    /// Closing time is not after opening time.
    InvalidOperatingHours {
        /// The opening time (fractional hours).
        opening: f64,
        /// The closing time (fractional hours).
        closing: f64,
    },
    /// An operating hour lies outside the 0-24 range.
    HourOutOfRange {
        /// The offending value.
        value: f64,
    },
    /// Slot duration is outside the permitted range.
    InvalidSlotDuration {
        /// The offending duration in hours.
        duration: f64,
    },
    /// A rate value is negative.
    InvalidRate {
        /// The rate tier ("base", "weekend", or "night").
        tier: &'static str,
        /// The offending value.
        rate: f64,
    },
    /// Field code already exists in the catalog.
    DuplicateFieldCode(String),
    /// Field does not exist.
    FieldNotFound(i64),
    /// Field exists but is deactivated.
    FieldInactive(String),
    /// Booking end time is not after its start time.
    InvalidBookingTimes {
        /// The start time (fractional hours).
        start: f64,
        /// The end time (fractional hours).
        end: f64,
    },
    /// Booking starts before the field opens.
    BeforeOpeningTime {
        /// The booking start time.
        start: f64,
        /// The field opening time.
        opening: f64,
    },
    /// Booking ends after the field closes.
    AfterClosingTime {
        /// The booking end time.
        end: f64,
        /// The field closing time.
        closing: f64,
    },
    /// The field is not available on the booking's weekday.
    ClosedOnWeekday {
        /// The weekday of the booking date.
        weekday: time::Weekday,
    },
    /// The booking overlaps an existing active booking.
    ConflictingBooking {
        /// The reference of the conflicting booking.
        reference: String,
    },
    /// A draft booking is dated in the past.
    PastBookingDate {
        /// The offending date.
        date: time::Date,
    },
    /// Booking state string is not recognized.
    InvalidBookingState(String),
    /// Transition action string is not recognized.
    InvalidTransitionAction(String),
    /// The requested lifecycle transition is not permitted.
    InvalidTransition {
        /// The current state.
        from: String,
        /// The attempted action.
        action: String,
        /// Why the transition is not allowed.
        reason: &'static str,
    },
    /// Booking does not exist.
    BookingNotFound(String),
    /// Sport category string is not recognized.
    InvalidSportCategory(String),
    /// Surface type string is not recognized.
    InvalidSurfaceType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFieldCode(msg) => write!(f, "Invalid field code: {msg}"),
            Self::InvalidFieldName(msg) => write!(f, "Invalid field name: {msg}"),
            Self::InvalidOperatingHours { opening, closing } => {
                write!(
                    f,
                    "Closing time must be after opening time (opening={opening}, closing={closing})"
                )
            }
            Self::HourOutOfRange { value } => {
                write!(f, "Operating hour must be between 0 and 24, got {value}")
            }
            Self::InvalidSlotDuration { duration } => {
                write!(
                    f,
                    "Slot duration must be greater than 0 and at most 8 hours, got {duration}"
                )
            }
            Self::InvalidRate { tier, rate } => {
                write!(f, "The {tier} rate must not be negative, got {rate}")
            }
            Self::DuplicateFieldCode(code) => {
                write!(f, "Field code '{code}' already exists")
            }
            Self::FieldNotFound(id) => write!(f, "Field {id} not found"),
            Self::FieldInactive(code) => write!(f, "Field '{code}' is deactivated"),
            Self::InvalidBookingTimes { start, end } => {
                write!(
                    f,
                    "End time must be after start time (start={start}, end={end})"
                )
            }
            Self::BeforeOpeningTime { start, opening } => {
                write!(
                    f,
                    "Start time {start} is before the field opening time {opening}"
                )
            }
            Self::AfterClosingTime { end, closing } => {
                write!(f, "End time {end} is after the field closing time {closing}")
            }
            Self::ClosedOnWeekday { weekday } => {
                write!(f, "Field is not available on {weekday}")
            }
            Self::ConflictingBooking { reference } => {
                write!(
                    f,
                    "An active booking already occupies this time: {reference}"
                )
            }
            Self::PastBookingDate { date } => {
                write!(f, "Bookings cannot be created for past dates ({date})")
            }
            Self::InvalidBookingState(state) => {
                write!(f, "Unknown booking state: {state}")
            }
            Self::InvalidTransitionAction(action) => {
                write!(f, "Unknown transition action: {action}")
            }
            Self::InvalidTransition {
                from,
                action,
                reason,
            } => {
                write!(f, "Cannot {action} a booking in state '{from}': {reason}")
            }
            Self::BookingNotFound(reference) => {
                write!(f, "Booking '{reference}' not found")
            }
            Self::InvalidSportCategory(sport) => {
                write!(f, "Unknown sport category: {sport}")
            }
            Self::InvalidSurfaceType(surface) => {
                write!(f, "Unknown surface type: {surface}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
