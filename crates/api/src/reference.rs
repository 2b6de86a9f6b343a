// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking reference format policy.
//!
//! References are generated from the store's monotonic sequence and
//! rendered through this policy, keeping the format in one place.

use thiserror::Error;

/// Reference policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    /// The reference does not start with the expected prefix.
    #[error("Reference must start with '{expected}-'")]
    WrongPrefix {
        /// The expected prefix.
        expected: String,
    },

    /// The numeric part is missing or not all digits.
    #[error("Reference number must be at least {width} digits")]
    MalformedNumber {
        /// The minimum digit count.
        width: usize,
    },
}

/// Booking reference format configuration.
pub struct ReferencePolicy {
    /// The reference prefix.
    pub prefix: String,
    /// The zero-padded width of the numeric part.
    pub width: usize,
}

impl Default for ReferencePolicy {
    fn default() -> Self {
        Self {
            prefix: String::from("RES"),
            width: 5,
        }
    }
}

impl ReferencePolicy {
    /// Renders a sequence number as a reference.
    #[must_use]
    pub fn format(&self, number: u64) -> String {
        format!("{}-{:0width$}", self.prefix, number, width = self.width)
    }

    /// Validates a reference against the policy.
    ///
    /// # Errors
    ///
    /// Returns a `ReferenceError` if the reference does not match the
    /// `PREFIX-NNNNN` shape.
    pub fn validate(&self, reference: &str) -> Result<(), ReferenceError> {
        let Some(number) = reference.strip_prefix(&format!("{}-", self.prefix)) else {
            return Err(ReferenceError::WrongPrefix {
                expected: self.prefix.clone(),
            });
        };

        if number.len() < self.width || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ReferenceError::MalformedNumber { width: self.width });
        }

        Ok(())
    }
}
