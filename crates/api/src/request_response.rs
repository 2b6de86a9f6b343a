// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract; handlers translate between the two.

use fieldbook_audit::AuditEvent;
use fieldbook_domain::{Booking, Field, Slot, WeekAvailability};
use time::Date;

/// API request to add a field to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFieldRequest {
    /// The unique field code.
    pub code: String,
    /// The field's display name.
    pub name: String,
    /// The sport category (e.g., "`football_7`", "padel").
    pub sport: String,
    /// The playing surface, if known (e.g., "`synthetic_grass`").
    pub surface: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Opening time in fractional hours.
    pub opening_time: f64,
    /// Closing time in fractional hours.
    pub closing_time: f64,
    /// Bookable slot width in hours.
    pub slot_duration: f64,
    /// The default hourly rate.
    pub base_rate: f64,
    /// The weekend hourly rate, if any.
    pub weekend_rate: Option<f64>,
    /// The night hourly rate, if any.
    pub night_rate: Option<f64>,
    /// Whether the field has lighting.
    pub has_lighting: bool,
    /// Whether the field is roofed.
    pub has_roof: bool,
    /// Maximum player capacity.
    pub max_players: Option<u32>,
    /// Weekday availability flags.
    pub available_days: WeekAvailability,
}

/// A field as presented at the API boundary.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldInfo {
    /// The canonical field identifier.
    pub field_id: i64,
    /// The unique field code.
    pub code: String,
    /// The field's display name.
    pub name: String,
    /// The sport category.
    pub sport: String,
    /// The playing surface, if known.
    pub surface: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Opening time in fractional hours.
    pub opening_time: f64,
    /// Closing time in fractional hours.
    pub closing_time: f64,
    /// Bookable slot width in hours.
    pub slot_duration: f64,
    /// The default hourly rate.
    pub base_rate: f64,
    /// The weekend hourly rate, if any.
    pub weekend_rate: Option<f64>,
    /// The night hourly rate, if any.
    pub night_rate: Option<f64>,
    /// Whether the field has lighting.
    pub has_lighting: bool,
    /// Whether the field is roofed.
    pub has_roof: bool,
    /// Maximum player capacity.
    pub max_players: Option<u32>,
    /// Weekday availability flags.
    pub available_days: WeekAvailability,
    /// Whether the field accepts bookings and appears in listings.
    pub active: bool,
}

impl FieldInfo {
    /// Builds the DTO from a persisted field.
    ///
    /// Unpersisted fields map to identifier 0; handlers never produce one.
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        Self {
            field_id: field.field_id.unwrap_or(0),
            code: field.code.value().to_string(),
            name: field.name.clone(),
            sport: field.sport.as_str().to_string(),
            surface: field.amenities.surface.map(|s| s.as_str().to_string()),
            description: field.amenities.description.clone(),
            opening_time: field.hours.opening(),
            closing_time: field.hours.closing(),
            slot_duration: field.hours.slot_duration(),
            base_rate: field.rates.base_rate(),
            weekend_rate: field.rates.weekend_rate(),
            night_rate: field.rates.night_rate(),
            has_lighting: field.amenities.has_lighting,
            has_roof: field.amenities.has_roof,
            max_players: field.amenities.max_players,
            available_days: field.week,
            active: field.active,
        }
    }
}

/// API response for a successful field creation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CreateFieldResponse {
    /// The field as stored.
    pub field: FieldInfo,
    /// A success message.
    pub message: String,
}

/// API response listing the active catalog.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListFieldsResponse {
    /// The active fields, optionally filtered by sport.
    pub fields: Vec<FieldInfo>,
}

/// A bookable slot as presented at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlotInfo {
    /// Start time in fractional hours.
    pub start_time: f64,
    /// End time in fractional hours.
    pub end_time: f64,
    /// Whether the slot is free of active bookings.
    pub available: bool,
}

impl SlotInfo {
    /// Builds the DTO from a generated slot.
    #[must_use]
    pub const fn from_slot(slot: &Slot) -> Self {
        Self {
            start_time: slot.start_time,
            end_time: slot.end_time,
            available: slot.available,
        }
    }
}

/// API response for a slot listing.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListSlotsResponse {
    /// The field the slots belong to.
    pub field_id: i64,
    /// The field's display name.
    pub field_name: String,
    /// The date the slots were generated for.
    pub date: Date,
    /// The ordered slot sequence.
    pub slots: Vec<SlotInfo>,
}

/// API request to create a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingRequest {
    /// The owning customer.
    pub customer_id: i64,
    /// The field to reserve.
    pub field_id: i64,
    /// The reservation date.
    pub date: Date,
    /// Start time in fractional hours.
    pub start_time: f64,
    /// End time in fractional hours.
    pub end_time: f64,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Number of players.
    pub players_count: Option<u32>,
    /// Initial state shortcut: "draft" (default), "pending", or
    /// "confirmed".
    pub initial_state: Option<String>,
}

/// API request to move a booking to a new date or time range.
#[derive(Debug, Clone, PartialEq)]
pub struct RescheduleBookingRequest {
    /// The new date.
    pub date: Date,
    /// The new start time in fractional hours.
    pub start_time: f64,
    /// The new end time in fractional hours.
    pub end_time: f64,
}

/// API request to run a lifecycle action against a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionBookingRequest {
    /// The action: "confirm", "`set_pending`", "start", "complete",
    /// "cancel", or "`reset_to_draft`".
    pub action: String,
}

/// A booking as presented at the API boundary.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BookingInfo {
    /// The canonical booking identifier.
    pub booking_id: i64,
    /// The generated reference code.
    pub reference: String,
    /// The owning customer.
    pub customer_id: i64,
    /// The reserved field.
    pub field_id: i64,
    /// The reservation date.
    pub date: Date,
    /// Start time in fractional hours.
    pub start_time: f64,
    /// End time in fractional hours.
    pub end_time: f64,
    /// Duration in hours.
    pub duration: f64,
    /// The derived total price.
    pub total_price: f64,
    /// The lifecycle state.
    pub state: String,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Number of players.
    pub players_count: Option<u32>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Confirmation timestamp (RFC 3339).
    pub confirmed_at: Option<String>,
}

impl BookingInfo {
    /// Builds the DTO from a persisted booking.
    #[must_use]
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            booking_id: booking.booking_id.unwrap_or(0),
            reference: booking.reference.clone(),
            customer_id: booking.customer_id,
            field_id: booking.field_id,
            date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            duration: booking.duration(),
            total_price: booking.total_price,
            state: booking.state.as_str().to_string(),
            notes: booking.notes.clone(),
            players_count: booking.players_count,
            created_at: booking.created_at.clone(),
            confirmed_at: booking.confirmed_at.clone(),
        }
    }
}

/// API response for a successful booking creation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingResponse {
    /// The booking as stored.
    pub booking: BookingInfo,
    /// A success message.
    pub message: String,
}

/// API response for a successful lifecycle transition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionBookingResponse {
    /// The booking after the transition.
    pub booking: BookingInfo,
    /// A success message.
    pub message: String,
}

/// An audit event as presented at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuditEventInfo {
    /// The action name.
    pub action: String,
    /// Additional action details.
    pub details: Option<String>,
    /// The actor who initiated the change.
    pub actor: String,
    /// The state before the transition.
    pub before: String,
    /// The state after the transition.
    pub after: String,
}

impl AuditEventInfo {
    /// Builds the DTO from an audit event.
    #[must_use]
    pub fn from_event(event: &AuditEvent) -> Self {
        Self {
            action: event.action.name.clone(),
            details: event.action.details.clone(),
            actor: event.actor.id.clone(),
            before: event.before.data.clone(),
            after: event.after.data.clone(),
        }
    }
}

/// Customer contact data as presented at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CustomerContactInfo {
    /// The customer identifier.
    pub customer_id: i64,
    /// The customer's name.
    pub name: String,
    /// The customer's phone number.
    pub phone: Option<String>,
    /// The customer's email address.
    pub email: Option<String>,
}

/// API response for a booking detail view.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GetBookingResponse {
    /// The booking.
    pub booking: BookingInfo,
    /// The owning customer's contact data, when the directory knows them.
    pub customer: Option<CustomerContactInfo>,
    /// The booking's audit history, in arrival order.
    pub history: Vec<AuditEventInfo>,
}
