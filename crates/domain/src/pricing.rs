// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rate tier selection and price computation.
//!
//! ## Invariants
//!
//! - Tier precedence is fixed: weekend, then night, then base
//! - A weekend date with a weekend rate set uses the weekend rate even for
//!   evening start times; the night tier is only reachable when the
//!   weekend tier does not apply
//! - Pricing is pure and deterministic; the same inputs always produce the
//!   same amount

use crate::types::Field;
use time::{Date, Weekday};

/// Start times at or after this hour qualify for the night rate.
pub const NIGHT_RATE_START: f64 = 18.0;

/// Selects the hourly rate for a booking start on a date.
///
/// Precedence: the weekend rate when the date falls on a Saturday or
/// Sunday and the field has one; otherwise the night rate when the start
/// time is at or after [`NIGHT_RATE_START`] and the field has one;
/// otherwise the base rate.
#[must_use]
pub fn select_rate(field: &Field, date: Date, start_time: f64) -> f64 {
    let is_weekend: bool = matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday);

    if is_weekend && let Some(rate) = field.rates.weekend_rate() {
        return rate;
    }
    if start_time >= NIGHT_RATE_START
        && let Some(rate) = field.rates.night_rate()
    {
        return rate;
    }
    field.rates.base_rate()
}

/// Computes the total price for a reservation.
///
/// # Arguments
///
/// * `field` - The field being reserved
/// * `date` - The reservation date
/// * `start_time` - Start time in fractional hours
/// * `duration` - Duration in hours
///
/// # Returns
///
/// `rate * duration` for the selected tier, or 0 when the duration is not
/// positive.
#[must_use]
pub fn quote_price(field: &Field, date: Date, start_time: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    select_rate(field, date, start_time) * duration
}
