// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Customer contact read-through.
//!
//! Customer and account management live outside this system. Bookings
//! carry only the owning customer identifier; contact data is joined in
//! explicitly through this directory at read time, never mirrored onto
//! the booking record.

use std::collections::HashMap;

/// Contact data for a customer, as the directory knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerContact {
    /// The customer identifier.
    pub customer_id: i64,
    /// The customer's name.
    pub name: String,
    /// The customer's phone number.
    pub phone: Option<String>,
    /// The customer's email address.
    pub email: Option<String>,
}

/// The customer collaborator seam.
///
/// Implementations resolve a customer identifier to contact data; a
/// missing customer is not an error, the join is simply empty.
pub trait CustomerDirectory {
    /// Looks up a customer's contact data.
    fn contact(&self, customer_id: i64) -> Option<CustomerContact>;
}

/// An in-memory directory.
#[derive(Debug, Clone, Default)]
pub struct StaticCustomerDirectory {
    contacts: HashMap<i64, CustomerContact>,
}

impl StaticCustomerDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contacts: HashMap::new(),
        }
    }

    /// Registers a customer's contact data.
    pub fn insert(&mut self, contact: CustomerContact) {
        self.contacts.insert(contact.customer_id, contact);
    }
}

impl CustomerDirectory for StaticCustomerDirectory {
    fn contact(&self, customer_id: i64) -> Option<CustomerContact> {
        self.contacts.get(&customer_id).cloned()
    }
}
