//! The user record stored in a role ledger.

use serde::{Deserialize, Serialize};

/// A single registrant within a role ledger.
///
/// The email is the uniqueness key at sign-up; login matches on name
/// and email jointly. The record carries no role field, since the role
/// is implied by which ledger it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

impl UserRecord {
    /// Create a new record.
    #[inline]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
