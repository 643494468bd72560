//! Submitted form data.

use rolegate_store::Role;

use crate::error::AuthError;

/// One form submission: the role selection plus the two identity fields.
///
/// Fields carry the raw strings as submitted. Nothing is trimmed or
/// case-folded here or anywhere downstream; all comparisons against
/// stored records are exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub role: String,
    pub name: String,
    pub email: String,
}

impl SubmitRequest {
    /// Create a request from the submitted field values.
    pub fn new(
        role: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check that all fields are present and resolve the role name.
    ///
    /// The form's unselected "Select Role" placeholder fails here like
    /// any other unknown role string.
    pub(crate) fn validate(&self) -> Result<Role, AuthError> {
        let role = self
            .role
            .parse::<Role>()
            .map_err(|_| AuthError::Validation("a role must be selected".to_string()))?;
        if self.name.is_empty() {
            return Err(AuthError::Validation("name is required".to_string()));
        }
        if self.email.is_empty() {
            return Err(AuthError::Validation("email is required".to_string()));
        }
        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_resolves_role() {
        let req = SubmitRequest::new("Supplier", "Alice", "alice@example.com");
        assert_eq!(req.validate().unwrap(), Role::Supplier);
    }

    #[test]
    fn unselected_role_fails() {
        let req = SubmitRequest::new("Select Role", "Alice", "alice@example.com");
        assert!(matches!(req.validate(), Err(AuthError::Validation(_))));
    }

    #[test]
    fn empty_fields_fail() {
        let req = SubmitRequest::new("Admin", "", "alice@example.com");
        assert!(matches!(req.validate(), Err(AuthError::Validation(_))));

        let req = SubmitRequest::new("Admin", "Alice", "");
        assert!(matches!(req.validate(), Err(AuthError::Validation(_))));
    }
}
