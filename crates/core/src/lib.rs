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

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use fieldbook_domain::DomainError;

// Re-export public types and functions
pub use apply::{apply, apply_catalog};
pub use command::Command;
pub use error::CoreError;
pub use state::{Board, Catalog, CatalogResult, TransitionResult};

/// Validates that a field exists in the catalog.
///
/// This is a read-only validation that does not create audit events.
///
/// # Arguments
///
/// * `catalog` - The catalog to check
/// * `field_id` - The field identifier to validate
///
/// # Errors
///
/// Returns `DomainError::FieldNotFound` if the field has not been created.
pub fn validate_field_exists(catalog: &Catalog, field_id: i64) -> Result<(), DomainError> {
    if catalog.field_by_id(field_id).is_none() {
        return Err(DomainError::FieldNotFound(field_id));
    }
    Ok(())
}

/// Validates that a booking exists on the board.
///
/// This is a read-only validation that does not create audit events.
///
/// # Arguments
///
/// * `board` - The board to check
/// * `reference` - The booking reference to validate
///
/// # Errors
///
/// Returns `DomainError::BookingNotFound` if no booking carries the
/// reference.
pub fn validate_booking_exists(board: &Board, reference: &str) -> Result<(), DomainError> {
    if board.booking_by_reference(reference).is_none() {
        return Err(DomainError::BookingNotFound(reference.to_string()));
    }
    Ok(())
}
