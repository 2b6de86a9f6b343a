// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Board, Catalog};
use fieldbook_audit::{Actor, Cause};
use fieldbook_domain::{
    Booking, BookingState, Field, OperatingHours, RateCard, SportCategory, WeekAvailability,
};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("staff-1"), String::from("staff"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Staff request"))
}

/// A fixed instant so every derived "today" is deterministic.
pub const fn test_now() -> OffsetDateTime {
    datetime!(2026-03-01 12:00 UTC)
}

/// A Tuesday comfortably after `test_now`.
pub const fn booking_date() -> Date {
    date!(2026 - 03 - 03)
}

pub fn create_test_field(field_id: i64, code: &str) -> Field {
    let mut field = Field::new(
        code,
        format!("Field {code}"),
        SportCategory::FootballSeven,
        OperatingHours::new(8.0, 22.0, 1.0).expect("valid hours"),
        WeekAvailability::open_every_day(),
        RateCard::new(10.0, Some(15.0), Some(20.0)).expect("valid rates"),
    );
    field.field_id = Some(field_id);
    field
}

pub fn create_test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.fields.push(create_test_field(1, "F1"));
    catalog
}

pub fn create_test_booking(reference: &str, start: f64, end: f64, state: BookingState) -> Booking {
    Booking::new(reference.to_string(), 7, 1, booking_date(), start, end, state)
}

pub fn board_with(bookings: Vec<Booking>) -> Board {
    let mut board = Board::new();
    board.bookings = bookings;
    board
}
