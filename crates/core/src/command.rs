// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fieldbook_domain::{Booking, Field, TransitionAction};
use time::Date;

/// A command represents caller or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a new field to the catalog.
    CreateField {
        /// The field configuration (unpersisted).
        field: Field,
    },
    /// Replace an existing field's configuration.
    ///
    /// The field must carry its canonical identifier; the code may change
    /// but must stay unique.
    UpdateField {
        /// The field configuration (persisted).
        field: Field,
    },
    /// Activate or deactivate a field.
    ///
    /// Deactivation removes the field from slot generation and catalog
    /// listings; historical bookings are untouched.
    SetFieldActive {
        /// The field's canonical identifier.
        field_id: i64,
        /// The new active flag.
        active: bool,
    },
    /// Create a new booking on the board.
    ///
    /// The booking's price and timestamps are derived during apply; any
    /// values carried in are overwritten.
    CreateBooking {
        /// The candidate booking.
        booking: Booking,
    },
    /// Move an existing booking to a new date or time range.
    RescheduleBooking {
        /// The booking's reference.
        reference: String,
        /// The new date.
        date: Date,
        /// The new start time in fractional hours.
        start_time: f64,
        /// The new end time in fractional hours.
        end_time: f64,
    },
    /// Run a lifecycle action against an existing booking.
    TransitionBooking {
        /// The booking's reference.
        reference: String,
        /// The lifecycle action to apply.
        action: TransitionAction,
    },
}
