// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CreateBookingRequest, CreateFieldRequest, create_field};
use fieldbook_audit::{Actor, Cause};
use fieldbook_domain::WeekAvailability;
use fieldbook_persistence::Persistence;
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

pub const fn today() -> Date {
    date!(2026 - 03 - 01)
}

/// A Tuesday comfortably after `today`.
pub const fn booking_date() -> Date {
    date!(2026 - 03 - 03)
}

/// A Saturday in the same week as `booking_date`.
pub const fn weekend_date() -> Date {
    date!(2026 - 03 - 07)
}

pub fn field_request(code: &str) -> CreateFieldRequest {
    CreateFieldRequest {
        code: code.to_string(),
        name: format!("Field {code}"),
        sport: String::from("football_7"),
        surface: Some(String::from("synthetic_grass")),
        description: None,
        opening_time: 8.0,
        closing_time: 22.0,
        slot_duration: 1.0,
        base_rate: 10.0,
        weekend_rate: Some(15.0),
        night_rate: Some(20.0),
        has_lighting: true,
        has_roof: false,
        max_players: Some(14),
        available_days: WeekAvailability::open_every_day(),
    }
}

pub fn booking_request(field_id: i64, start: f64, end: f64) -> CreateBookingRequest {
    CreateBookingRequest {
        customer_id: 7,
        field_id,
        date: booking_date(),
        start_time: start,
        end_time: end,
        notes: None,
        players_count: None,
        initial_state: Some(String::from("pending")),
    }
}

/// A store with one field ("F1", id 1) already in the catalog.
pub fn store_with_field() -> Persistence {
    let mut store = Persistence::new();
    create_field(
        &mut store,
        field_request("F1"),
        create_test_actor(),
        create_test_cause(),
    )
    .expect("field creation should succeed");
    store
}
