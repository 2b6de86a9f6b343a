// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The requested field was not found.
    FieldNotFound(i64),
    /// The requested booking was not found.
    BookingNotFound(String),
    /// A field with this code already exists.
    DuplicateFieldCode(String),
    /// A booking with this reference already exists.
    DuplicateReference(String),
    /// The write lost the race: an active booking already occupies the
    /// requested time. Callers should retry with fresh data.
    BookingConflict {
        /// The reference of the booking that won.
        reference: String,
    },
    /// The record carries no identifier where one is required.
    MissingIdentifier(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldNotFound(id) => write!(f, "Field {id} not found"),
            Self::BookingNotFound(reference) => {
                write!(f, "Booking '{reference}' not found")
            }
            Self::DuplicateFieldCode(code) => {
                write!(f, "Field code '{code}' already exists")
            }
            Self::DuplicateReference(reference) => {
                write!(f, "Booking reference '{reference}' already exists")
            }
            Self::BookingConflict { reference } => {
                write!(
                    f,
                    "An active booking already occupies this time: {reference}"
                )
            }
            Self::MissingIdentifier(msg) => write!(f, "Missing identifier: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
