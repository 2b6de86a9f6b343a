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

mod customer;
mod error;
mod handlers;
mod reference;
mod request_response;

#[cfg(test)]
mod tests;

pub use customer::{CustomerContact, CustomerDirectory, StaticCustomerDirectory};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    ApiResult, create_booking, create_field, get_booking, get_field, list_available_slots,
    list_fields, reschedule_booking, set_field_active, transition_booking,
};
pub use reference::{ReferenceError, ReferencePolicy};
pub use request_response::{
    AuditEventInfo, BookingInfo, CreateBookingRequest, CreateBookingResponse, CreateFieldRequest,
    CreateFieldResponse, CustomerContactInfo, FieldInfo, GetBookingResponse, ListFieldsResponse,
    ListSlotsResponse, RescheduleBookingRequest, SlotInfo, TransitionBookingRequest,
    TransitionBookingResponse,
};
