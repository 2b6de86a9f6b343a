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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use fieldbook_api::{
    ApiError, ApiResult, CreateBookingRequest, CreateBookingResponse, CreateFieldRequest,
    CreateFieldResponse, FieldInfo, GetBookingResponse, ListFieldsResponse, ListSlotsResponse,
    RescheduleBookingRequest, StaticCustomerDirectory, TransitionBookingRequest,
    TransitionBookingResponse, create_booking, create_field, get_booking, get_field,
    list_available_slots, list_fields, reschedule_booking, set_field_active, transition_booking,
};
use fieldbook_audit::{Actor, Cause};
use fieldbook_domain::WeekAvailability;
use fieldbook_persistence::Persistence;
use time::{Date, OffsetDateTime};

/// Fieldbook Server - HTTP server for the Fieldbook reservation system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The record store sits behind a Mutex; every booking write holds the
/// lock from snapshot through persist, which serializes the
/// validate-then-write sequence per store.
#[derive(Clone)]
struct AppState {
    /// The record store.
    persistence: Arc<Mutex<Persistence>>,
    /// The customer directory collaborator.
    directory: Arc<StaticCustomerDirectory>,
}

/// API request for creating a field.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateFieldApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of actor (e.g., "staff").
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The unique field code.
    code: String,
    /// The field's display name.
    name: String,
    /// The sport category.
    sport: String,
    /// The playing surface, if known.
    surface: Option<String>,
    /// Free-text description.
    description: Option<String>,
    /// Opening time in fractional hours.
    opening_time: f64,
    /// Closing time in fractional hours.
    closing_time: f64,
    /// Bookable slot width in hours.
    slot_duration: f64,
    /// The default hourly rate.
    base_rate: f64,
    /// The weekend hourly rate, if any.
    weekend_rate: Option<f64>,
    /// The night hourly rate, if any.
    night_rate: Option<f64>,
    /// Whether the field has lighting.
    #[serde(default)]
    has_lighting: bool,
    /// Whether the field is roofed.
    #[serde(default)]
    has_roof: bool,
    /// Maximum player capacity.
    max_players: Option<u32>,
    /// Weekday availability flags. Defaults to every day.
    available_days: Option<WeekAvailability>,
}

/// API request for creating a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBookingApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of actor (e.g., "staff", "portal").
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The owning customer.
    customer_id: i64,
    /// The field to reserve.
    field_id: i64,
    /// The reservation date.
    date: Date,
    /// Start time in fractional hours.
    start_time: f64,
    /// End time in fractional hours.
    end_time: f64,
    /// Free-text notes.
    notes: Option<String>,
    /// Number of players.
    players_count: Option<u32>,
    /// Initial state shortcut: "draft" (default), "pending", or
    /// "confirmed".
    initial_state: Option<String>,
}

/// API request for a lifecycle transition.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct TransitionApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of actor.
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The lifecycle action.
    action: String,
}

/// API request for rescheduling a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RescheduleApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of actor.
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The new date.
    date: Date,
    /// The new start time in fractional hours.
    start_time: f64,
    /// The new end time in fractional hours.
    end_time: f64,
}

/// API request for activating or deactivating a field.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SetFieldActiveApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of actor.
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The new active flag.
    active: bool,
}

/// Query parameters for the catalog listing.
#[derive(Debug, Clone, Deserialize)]
struct FieldsQuery {
    /// Optional sport filter.
    sport: Option<String>,
}

/// Query parameters for the slot listing.
#[derive(Debug, Clone, Deserialize)]
struct SlotsQuery {
    /// The date to generate slots for.
    date: Date,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// The conflicting booking's reference, for conflict errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicting_reference: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// The conflicting booking's reference, when one exists.
    conflicting_reference: Option<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            conflicting_reference: self.conflicting_reference,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BookingConflict { .. } | ApiError::InvalidTransition { .. } => {
                StatusCode::CONFLICT
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let conflicting_reference: Option<String> = match &err {
            ApiError::BookingConflict { reference, .. } => reference.clone(),
            _ => None,
        };
        Self {
            status,
            message: err.to_string(),
            conflicting_reference,
        }
    }
}

/// Builds the audit actor from request attribution fields.
fn actor_from(actor_id: String, actor_type: String) -> Actor {
    Actor::new(actor_id, actor_type)
}

/// Handler for POST `/fields` endpoint.
async fn handle_create_field(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateFieldApiRequest>,
) -> Result<Json<CreateFieldResponse>, HttpError> {
    info!(actor_id = %req.actor_id, code = %req.code, "Handling create_field request");

    let actor: Actor = actor_from(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let request: CreateFieldRequest = CreateFieldRequest {
        code: req.code,
        name: req.name,
        sport: req.sport,
        surface: req.surface,
        description: req.description,
        opening_time: req.opening_time,
        closing_time: req.closing_time,
        slot_duration: req.slot_duration,
        base_rate: req.base_rate,
        weekend_rate: req.weekend_rate,
        night_rate: req.night_rate,
        has_lighting: req.has_lighting,
        has_roof: req.has_roof,
        max_players: req.max_players,
        available_days: req.available_days.unwrap_or_default(),
    };

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<CreateFieldResponse> =
        create_field(&mut persistence, request, actor, cause)?;
    drop(persistence);

    Ok(Json(result.response))
}

/// Handler for POST `/fields/{field_id}/active` endpoint.
async fn handle_set_field_active(
    AxumState(app_state): AxumState<AppState>,
    Path(field_id): Path<i64>,
    Json(req): Json<SetFieldActiveApiRequest>,
) -> Result<Json<CreateFieldResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        field_id = field_id,
        active = req.active,
        "Handling set_field_active request"
    );

    let actor: Actor = actor_from(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let mut persistence = app_state.persistence.lock().await;
    let result = set_field_active(&mut persistence, field_id, req.active, actor, cause)?;
    drop(persistence);

    Ok(Json(result.response))
}

/// Handler for GET `/fields` endpoint.
async fn handle_list_fields(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<FieldsQuery>,
) -> Result<Json<ListFieldsResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: ListFieldsResponse = list_fields(&persistence, query.sport.as_deref())?;
    Ok(Json(response))
}

/// Handler for GET `/fields/{field_id}` endpoint.
async fn handle_get_field(
    AxumState(app_state): AxumState<AppState>,
    Path(field_id): Path<i64>,
) -> Result<Json<FieldInfo>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: FieldInfo = get_field(&persistence, field_id)?;
    Ok(Json(response))
}

/// Handler for GET `/fields/{field_id}/slots` endpoint.
///
/// Slots are recomputed from the live board on every request.
async fn handle_list_slots(
    AxumState(app_state): AxumState<AppState>,
    Path(field_id): Path<i64>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<ListSlotsResponse>, HttpError> {
    let today: Date = OffsetDateTime::now_utc().date();
    let persistence = app_state.persistence.lock().await;
    let response: ListSlotsResponse =
        list_available_slots(&persistence, field_id, query.date, today)?;
    Ok(Json(response))
}

/// Handler for POST `/bookings` endpoint.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingApiRequest>,
) -> Result<Json<CreateBookingResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        field_id = req.field_id,
        date = %req.date,
        "Handling create_booking request"
    );

    let actor: Actor = actor_from(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let request: CreateBookingRequest = CreateBookingRequest {
        customer_id: req.customer_id,
        field_id: req.field_id,
        date: req.date,
        start_time: req.start_time,
        end_time: req.end_time,
        notes: req.notes,
        players_count: req.players_count,
        initial_state: req.initial_state,
    };

    // The lock spans snapshot, validation, and insert: concurrent creates
    // on the same field and date are serialized here.
    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<CreateBookingResponse> = create_booking(
        &mut persistence,
        request,
        actor,
        cause,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(result.response))
}

/// Handler for GET `/bookings/{reference}` endpoint.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<GetBookingResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: GetBookingResponse =
        get_booking(&persistence, &reference, app_state.directory.as_ref())?;
    Ok(Json(response))
}

/// Handler for POST `/bookings/{reference}/transition` endpoint.
async fn handle_transition_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(reference): Path<String>,
    Json(req): Json<TransitionApiRequest>,
) -> Result<Json<TransitionBookingResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        reference = %reference,
        action = %req.action,
        "Handling transition_booking request"
    );

    let actor: Actor = actor_from(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<TransitionBookingResponse> = transition_booking(
        &mut persistence,
        &reference,
        TransitionBookingRequest { action: req.action },
        actor,
        cause,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(result.response))
}

/// Handler for POST `/bookings/{reference}/reschedule` endpoint.
async fn handle_reschedule_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(reference): Path<String>,
    Json(req): Json<RescheduleApiRequest>,
) -> Result<Json<TransitionBookingResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        reference = %reference,
        date = %req.date,
        "Handling reschedule_booking request"
    );

    let actor: Actor = actor_from(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<TransitionBookingResponse> = reschedule_booking(
        &mut persistence,
        &reference,
        RescheduleBookingRequest {
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
        },
        actor,
        cause,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(result.response))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/fields", post(handle_create_field))
        .route("/fields", get(handle_list_fields))
        .route("/fields/{field_id}", get(handle_get_field))
        .route("/fields/{field_id}/active", post(handle_set_field_active))
        .route("/fields/{field_id}/slots", get(handle_list_slots))
        .route("/bookings", post(handle_create_booking))
        .route("/bookings/{reference}", get(handle_get_booking))
        .route(
            "/bookings/{reference}/transition",
            post(handle_transition_booking),
        )
        .route(
            "/bookings/{reference}/reschedule",
            post(handle_reschedule_booking),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Fieldbook Server");

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(Persistence::new())),
        directory: Arc::new(StaticCustomerDirectory::new()),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
