// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod booking_state;
mod error;
mod pricing;
mod slots;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking_state::{BookingState, TransitionAction, apply_action};
pub use error::DomainError;
pub use pricing::{NIGHT_RATE_START, quote_price, select_rate};
pub use slots::{Slot, generate_slots};

// Re-export public types
pub use types::{
    Booking, Field, FieldAmenities, FieldCode, OperatingHours, RateCard, SportCategory,
    SurfaceType, WeekAvailability,
};
pub use validation::{
    intervals_overlap, validate_booking, validate_booking_date, validate_booking_times,
    validate_booking_window, validate_field, validate_no_overlap,
};
