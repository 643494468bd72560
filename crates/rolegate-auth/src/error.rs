//! Authentication flow errors.

use rolegate_store::{Role, StoreError};

/// Error raised while processing a submission.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required field is missing, or the role is not one of the
    /// known names. Recovered by re-prompting; never fatal.
    #[error("validation: {0}")]
    Validation(String),

    /// Sign-up attempted with an email already present for the role.
    /// The ledger is left unchanged.
    #[error("a user with email {email} already exists in {role}")]
    DuplicateUser { role: Role, email: String },

    /// The role ledger could not be read or written.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
