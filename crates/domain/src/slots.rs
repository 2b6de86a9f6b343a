// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot generation for a field on a given date.
//!
//! ## Invariants
//!
//! - Slots lie within the field's operating hours and are exactly
//!   `slot_duration` wide; a trailing partial period is never emitted
//! - Slots are emitted ascending by start time and never overlap
//! - A date whose weekday is disabled on the field yields no slots
//! - Availability is derived from the bookings passed in; results are
//!   recomputed on every call and never cached
//!
//! ## Usage
//!
//! Callers pass the bookings already recorded for the field and date; any
//! booking in a state that counts for conflicts marks the slots it touches
//! as unavailable.

use crate::types::{Booking, Field};
use crate::validation::intervals_overlap;
use serde::{Deserialize, Serialize};
use time::Date;

/// A fixed-width candidate interval on a field and date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Start time in fractional hours.
    pub start_time: f64,
    /// End time in fractional hours.
    pub end_time: f64,
    /// Whether the interval is free of active bookings.
    pub available: bool,
}

/// Generates the ordered slot sequence for a field on a date.
///
/// # Arguments
///
/// * `field` - The field configuration
/// * `date` - The date to generate slots for
/// * `bookings` - The bookings recorded for this field and date
///
/// # Returns
///
/// Slots ascending by start time, each marked available unless an active
/// booking (pending, confirmed, or in progress) overlaps it as a half-open
/// interval.
#[must_use]
pub fn generate_slots(field: &Field, date: Date, bookings: &[Booking]) -> Vec<Slot> {
    if !field.week.is_open(date.weekday()) {
        return Vec::new();
    }

    let duration: f64 = field.hours.slot_duration();
    let closing: f64 = field.hours.closing();

    let mut slots: Vec<Slot> = Vec::new();
    let mut cursor: f64 = field.hours.opening();
    while cursor + duration <= closing {
        slots.push(Slot {
            start_time: cursor,
            end_time: cursor + duration,
            available: true,
        });
        cursor += duration;
    }

    for booking in bookings
        .iter()
        .filter(|b| b.date == date && b.is_active())
    {
        for slot in &mut slots {
            if intervals_overlap(
                booking.start_time,
                booking.end_time,
                slot.start_time,
                slot.end_time,
            ) {
                slot.available = false;
            }
        }
    }

    slots
}
