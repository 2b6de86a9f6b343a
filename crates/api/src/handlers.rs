// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers translate DTOs into core commands, apply them against store
//! snapshots, and persist the results. The current instant is injected by
//! the caller so every derived value (today, timestamps) is deterministic.

use std::str::FromStr;

use fieldbook::{Command, apply, apply_catalog};
use fieldbook_audit::{Actor, AuditEvent, Cause};
use fieldbook_domain::{
    Booking, BookingState, Field, OperatingHours, RateCard, SportCategory, SurfaceType,
    TransitionAction, WeekAvailability, generate_slots,
};
use fieldbook_persistence::Persistence;
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::customer::CustomerDirectory;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::reference::ReferencePolicy;
use crate::request_response::{
    AuditEventInfo, BookingInfo, CreateBookingRequest, CreateBookingResponse, CreateFieldRequest,
    CreateFieldResponse, CustomerContactInfo, FieldInfo, GetBookingResponse, ListFieldsResponse,
    ListSlotsResponse, RescheduleBookingRequest, SlotInfo, TransitionBookingRequest,
    TransitionBookingResponse,
};

/// The result of an API operation that includes both the response and the
/// audit event.
///
/// This ensures that successful state-changing operations always produce
/// an audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
}

/// Adds a field to the catalog.
///
/// This function:
/// - Translates the API request into domain types
/// - Applies the catalog command against a store snapshot
/// - Persists the field and records the audit event
///
/// # Arguments
///
/// * `persistence` - The record store
/// * `request` - The API request to create a field
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if any field validation fails or the code is already
/// taken.
pub fn create_field(
    persistence: &mut Persistence,
    request: CreateFieldRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<CreateFieldResponse>, ApiError> {
    let sport: SportCategory = SportCategory::parse(&request.sport).map_err(translate_domain_error)?;
    let surface: Option<SurfaceType> = match request.surface {
        Some(ref s) => Some(SurfaceType::parse(s).map_err(translate_domain_error)?),
        None => None,
    };
    let hours: OperatingHours =
        OperatingHours::new(request.opening_time, request.closing_time, request.slot_duration)
            .map_err(translate_domain_error)?;
    let rates: RateCard = RateCard::new(request.base_rate, request.weekend_rate, request.night_rate)
        .map_err(translate_domain_error)?;
    let week: WeekAvailability = request.available_days;

    let mut field: Field = Field::new(&request.code, request.name, sport, hours, week, rates);
    field.amenities.surface = surface;
    field.amenities.description = request.description;
    field.amenities.has_lighting = request.has_lighting;
    field.amenities.has_roof = request.has_roof;
    field.amenities.max_players = request.max_players;

    let catalog = persistence.catalog();
    let result = apply_catalog(&catalog, Command::CreateField { field }, actor, cause)
        .map_err(translate_core_error)?;

    let stored: Field = persistence
        .insert_field(result.field)
        .map_err(translate_persistence_error)?;
    persistence.record_event(result.audit_event.clone());
    info!(code = %stored.code, "field created");

    Ok(ApiResult {
        response: CreateFieldResponse {
            field: FieldInfo::from_field(&stored),
            message: format!("Field '{}' created", stored.code.value()),
        },
        audit_event: result.audit_event,
    })
}

/// Activates or deactivates a field.
///
/// Deactivation removes the field from listings and slot generation while
/// keeping the record and its historical bookings.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the field is unknown.
pub fn set_field_active(
    persistence: &mut Persistence,
    field_id: i64,
    active: bool,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<CreateFieldResponse>, ApiError> {
    let catalog = persistence.catalog();
    let result = apply_catalog(
        &catalog,
        Command::SetFieldActive { field_id, active },
        actor,
        cause,
    )
    .map_err(translate_core_error)?;

    let stored: Field = persistence
        .update_field(result.field)
        .map_err(translate_persistence_error)?;
    persistence.record_event(result.audit_event.clone());
    info!(code = %stored.code, active = stored.active, "field activity changed");

    Ok(ApiResult {
        response: CreateFieldResponse {
            field: FieldInfo::from_field(&stored),
            message: format!(
                "Field '{}' {}",
                stored.code.value(),
                if active { "activated" } else { "deactivated" }
            ),
        },
        audit_event: result.audit_event,
    })
}

/// Fetches a field by its canonical identifier.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the field is unknown.
pub fn get_field(persistence: &Persistence, field_id: i64) -> Result<FieldInfo, ApiError> {
    let field: Field = persistence
        .field(field_id)
        .map_err(translate_persistence_error)?;
    Ok(FieldInfo::from_field(&field))
}

/// Lists the active catalog, optionally filtered by sport.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the sport filter is not a known
/// category.
pub fn list_fields(
    persistence: &Persistence,
    sport: Option<&str>,
) -> Result<ListFieldsResponse, ApiError> {
    let sport: Option<SportCategory> = match sport {
        Some(s) => Some(SportCategory::parse(s).map_err(translate_domain_error)?),
        None => None,
    };

    let fields: Vec<FieldInfo> = persistence
        .active_fields(sport)
        .iter()
        .map(FieldInfo::from_field)
        .collect();

    Ok(ListFieldsResponse { fields })
}

/// Computes the bookable slots for a field on a date.
///
/// Slots are recomputed on every call from the current board; nothing is
/// cached.
///
/// # Arguments
///
/// * `persistence` - The record store
/// * `field_id` - The field to generate slots for
/// * `date` - The date to generate slots for
/// * `today` - The current date, injected by the caller
///
/// # Errors
///
/// Returns an error if the field is unknown or deactivated, or the date is
/// in the past.
pub fn list_available_slots(
    persistence: &Persistence,
    field_id: i64,
    date: Date,
    today: Date,
) -> Result<ListSlotsResponse, ApiError> {
    let field: Field = persistence
        .field(field_id)
        .map_err(translate_persistence_error)?;

    // Deactivation removes the field from slot generation.
    if !field.active {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Field"),
            message: format!("Field '{}' is deactivated", field.code.value()),
        });
    }

    if date < today {
        return Err(ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Slots cannot be listed for past dates ({date})"),
        });
    }

    let bookings = persistence.bookings_for_field_date(field_id, date);
    let slots: Vec<SlotInfo> = generate_slots(&field, date, &bookings)
        .iter()
        .map(SlotInfo::from_slot)
        .collect();

    Ok(ListSlotsResponse {
        field_id,
        field_name: field.name,
        date,
        slots,
    })
}

/// Creates a booking.
///
/// This function:
/// - Generates the booking reference from the store's sequence
/// - Translates the API request into a core command
/// - Applies the command (validation, pricing, stamping) against store
///   snapshots
/// - Persists the booking; the store's own overlap re-check closes the
///   validate-then-write race
/// - Records the audit event
///
/// # Arguments
///
/// * `persistence` - The record store
/// * `request` - The API request to create a booking
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The current instant, injected by the caller
///
/// # Errors
///
/// Returns an error if the initial state is not a creation shortcut, any
/// validation fails, or the write loses the overlap race.
pub fn create_booking(
    persistence: &mut Persistence,
    request: CreateBookingRequest,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<ApiResult<CreateBookingResponse>, ApiError> {
    let state: BookingState = match request.initial_state {
        Some(ref s) => BookingState::from_str(s).map_err(translate_domain_error)?,
        None => BookingState::Draft,
    };
    // Creation shortcuts stop at confirmed; later states only arise
    // through lifecycle transitions.
    if !matches!(
        state,
        BookingState::Draft | BookingState::Pending | BookingState::Confirmed
    ) {
        return Err(ApiError::InvalidInput {
            field: String::from("initial_state"),
            message: format!("Bookings cannot be created in state '{state}'"),
        });
    }

    let reference: String =
        ReferencePolicy::default().format(persistence.next_reference_number());

    let mut booking: Booking = Booking::new(
        reference,
        request.customer_id,
        request.field_id,
        request.date,
        request.start_time,
        request.end_time,
        state,
    );
    booking.notes = request.notes;
    booking.players_count = request.players_count;

    let catalog = persistence.catalog();
    let board = persistence.board();
    let result = apply(
        &catalog,
        &board,
        Command::CreateBooking { booking },
        actor,
        cause,
        now,
    )
    .map_err(translate_core_error)?;

    let stored: Booking = persistence
        .insert_booking(result.booking)
        .map_err(translate_persistence_error)?;
    persistence.record_event(result.audit_event.clone());
    info!(reference = %stored.reference, state = %stored.state, "booking created");

    Ok(ApiResult {
        response: CreateBookingResponse {
            booking: BookingInfo::from_booking(&stored),
            message: format!("Booking {} created", stored.reference),
        },
        audit_event: result.audit_event,
    })
}

/// Moves a booking to a new date or time range.
///
/// The move is validated like a create: structural times, the draft
/// past-date guard, operating window, and overlap against the board.
///
/// # Errors
///
/// Returns an error if the booking is unknown or the new range fails
/// validation.
pub fn reschedule_booking(
    persistence: &mut Persistence,
    reference: &str,
    request: RescheduleBookingRequest,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<ApiResult<TransitionBookingResponse>, ApiError> {
    let catalog = persistence.catalog();
    let board = persistence.board();
    let result = apply(
        &catalog,
        &board,
        Command::RescheduleBooking {
            reference: reference.to_string(),
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
        },
        actor,
        cause,
        now,
    )
    .map_err(translate_core_error)?;

    let stored: Booking = persistence
        .update_booking(result.booking)
        .map_err(translate_persistence_error)?;
    persistence.record_event(result.audit_event.clone());
    info!(reference = %stored.reference, date = %stored.date, "booking rescheduled");

    Ok(ApiResult {
        response: TransitionBookingResponse {
            booking: BookingInfo::from_booking(&stored),
            message: format!("Booking {} rescheduled", stored.reference),
        },
        audit_event: result.audit_event,
    })
}

/// Runs a lifecycle action against a booking.
///
/// # Arguments
///
/// * `persistence` - The record store
/// * `reference` - The booking's reference
/// * `request` - The action to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The current instant, injected by the caller
///
/// # Errors
///
/// Returns an error if the action is unknown, the booking does not exist,
/// the transition is illegal for the current state, or re-validation
/// against the board fails.
pub fn transition_booking(
    persistence: &mut Persistence,
    reference: &str,
    request: TransitionBookingRequest,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<ApiResult<TransitionBookingResponse>, ApiError> {
    let action: TransitionAction =
        TransitionAction::from_str(&request.action).map_err(translate_domain_error)?;

    let catalog = persistence.catalog();
    let board = persistence.board();
    let result = apply(
        &catalog,
        &board,
        Command::TransitionBooking {
            reference: reference.to_string(),
            action,
        },
        actor,
        cause,
        now,
    )
    .map_err(translate_core_error)?;

    let stored: Booking = persistence
        .update_booking(result.booking)
        .map_err(translate_persistence_error)?;
    persistence.record_event(result.audit_event.clone());
    info!(reference = %stored.reference, state = %stored.state, "booking transitioned");

    Ok(ApiResult {
        response: TransitionBookingResponse {
            booking: BookingInfo::from_booking(&stored),
            message: format!("Booking {} is now {}", stored.reference, stored.state),
        },
        audit_event: result.audit_event,
    })
}

/// Fetches a booking with its customer contact join and audit history.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the booking is unknown.
pub fn get_booking(
    persistence: &Persistence,
    reference: &str,
    directory: &dyn CustomerDirectory,
) -> Result<GetBookingResponse, ApiError> {
    let booking: Booking = persistence
        .booking(reference)
        .map_err(translate_persistence_error)?;

    let customer: Option<CustomerContactInfo> =
        directory.contact(booking.customer_id).map(|c| CustomerContactInfo {
            customer_id: c.customer_id,
            name: c.name,
            phone: c.phone,
            email: c.email,
        });

    let history: Vec<AuditEventInfo> = persistence
        .events_for_booking(reference)
        .iter()
        .map(AuditEventInfo::from_event)
        .collect();

    Ok(GetBookingResponse {
        booking: BookingInfo::from_booking(&booking),
        customer,
        history,
    })
}
