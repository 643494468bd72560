//! The closed set of account roles.

use std::fmt;
use std::str::FromStr;

/// Account role. Each role owns one independent user ledger.
///
/// The set is closed: exactly these three roles exist, and each maps to
/// a fixed ledger file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Supplier,
    Client,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Supplier, Role::Client];

    /// File name of this role's ledger inside the data directory.
    pub fn ledger_filename(self) -> &'static str {
        match self {
            Role::Admin => "admin.json",
            Role::Supplier => "supplier.json",
            Role::Client => "client.json",
        }
    }

    /// The role's display name, as it appears in the form.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Supplier => "Supplier",
            Role::Client => "Client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Parse a role name. Matching is exact and case-sensitive, so the
    /// form's "Select Role" placeholder never parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Supplier" => Ok(Role::Supplier),
            "Client" => Ok(Role::Client),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error returned when a submitted role name is not one of the three
/// known roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);
