//! The submit / resume state machine.

use rolegate_store::{LedgerStore, Role, UserRecord};
use tracing::{debug, info};

use crate::error::AuthError;
use crate::request::SubmitRequest;

/// Result of a submit or resume pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Login matched a stored record; open the dashboard for this user.
    Authenticated { role: Role, name: String },

    /// No stored record matched. Ask the user whether to sign up and
    /// pass the answer to [`AuthFlow::resume`].
    Unconfirmed(PendingSignup),

    /// Sign-up persisted. The user is not logged in; reaching a
    /// dashboard takes a fresh submission.
    SignedUp { role: Role, name: String },

    /// The user declined to sign up; nothing changed.
    Declined,
}

/// A validated identity from a submission that found no login match,
/// held while the caller asks the user for a sign-up decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSignup {
    role: Role,
    name: String,
    email: String,
}

impl PendingSignup {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Orchestrates login and sign-up against a [`LedgerStore`].
///
/// Holds no state between passes; every submission re-reads the role's
/// ledger from disk.
#[derive(Debug, Clone)]
pub struct AuthFlow {
    store: LedgerStore,
}

impl AuthFlow {
    /// Create a flow over the given store.
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Run one submission pass.
    ///
    /// A record matching both name and email logs the user in. Anything
    /// else comes back as [`Outcome::Unconfirmed`] for the caller to
    /// continue via [`resume`](Self::resume).
    pub fn submit(&self, request: &SubmitRequest) -> Result<Outcome, AuthError> {
        let role = request.validate()?;
        let users = self.store.load(role)?;

        // Login keys on name and email jointly; the duplicate check in
        // resume() keys on email alone.
        let matched = users
            .iter()
            .any(|u| u.name == request.name && u.email == request.email);
        if matched {
            info!(role = %role, name = %request.name, "login matched");
            return Ok(Outcome::Authenticated {
                role,
                name: request.name.clone(),
            });
        }

        debug!(role = %role, "no matching record, awaiting sign-up decision");
        Ok(Outcome::Unconfirmed(PendingSignup {
            role,
            name: request.name.clone(),
            email: request.email.clone(),
        }))
    }

    /// Supply the user's answer to the sign-up question.
    ///
    /// `accept == false` ends the pass with nothing written. Otherwise
    /// the identity is appended to the role's ledger, unless its email
    /// is already taken there. The ledger lock is held across the whole
    /// read-modify-write so another process cannot interleave a save.
    pub fn resume(&self, pending: PendingSignup, accept: bool) -> Result<Outcome, AuthError> {
        if !accept {
            return Ok(Outcome::Declined);
        }

        let PendingSignup { role, name, email } = pending;
        let _guard = self.store.lock(role)?;

        let mut users = self.store.load(role)?;
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateUser { role, email });
        }

        users.push(UserRecord::new(name.clone(), email));
        self.store.save(role, &users)?;

        info!(role = %role, name = %name, "user signed up");
        Ok(Outcome::SignedUp { role, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> (tempfile::TempDir, AuthFlow) {
        let dir = tempfile::tempdir().unwrap();
        let flow = AuthFlow::new(LedgerStore::new(dir.path()));
        (dir, flow)
    }

    fn seed(flow: &AuthFlow, role: Role, records: &[UserRecord]) {
        flow.store().save(role, records).unwrap();
    }

    #[test]
    fn validation_failures_end_the_pass() {
        let (_dir, flow) = flow();

        let unselected = SubmitRequest::new("Select Role", "Alice", "a@x.com");
        assert!(matches!(
            flow.submit(&unselected),
            Err(AuthError::Validation(_))
        ));

        let no_name = SubmitRequest::new("Admin", "", "a@x.com");
        assert!(matches!(flow.submit(&no_name), Err(AuthError::Validation(_))));

        let no_email = SubmitRequest::new("Admin", "Alice", "");
        assert!(matches!(
            flow.submit(&no_email),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn login_matches_name_and_email_jointly() {
        let (_dir, flow) = flow();
        seed(&flow, Role::Client, &[UserRecord::new("Alice", "a@x.com")]);

        let hit = flow
            .submit(&SubmitRequest::new("Client", "Alice", "a@x.com"))
            .unwrap();
        assert_eq!(
            hit,
            Outcome::Authenticated {
                role: Role::Client,
                name: "Alice".to_string(),
            }
        );

        let wrong_email = flow
            .submit(&SubmitRequest::new("Client", "Alice", "wrong@x.com"))
            .unwrap();
        assert!(matches!(wrong_email, Outcome::Unconfirmed(_)));

        let wrong_name = flow
            .submit(&SubmitRequest::new("Client", "Bob", "a@x.com"))
            .unwrap();
        assert!(matches!(wrong_name, Outcome::Unconfirmed(_)));
    }

    #[test]
    fn comparisons_are_exact() {
        let (_dir, flow) = flow();
        seed(&flow, Role::Client, &[UserRecord::new("Alice", "a@x.com")]);

        // Case differences and stray whitespace are misses, not matches.
        let cased = flow
            .submit(&SubmitRequest::new("Client", "alice", "a@x.com"))
            .unwrap();
        assert!(matches!(cased, Outcome::Unconfirmed(_)));

        let padded = flow
            .submit(&SubmitRequest::new("Client", "Alice ", "a@x.com"))
            .unwrap();
        assert!(matches!(padded, Outcome::Unconfirmed(_)));
    }

    #[test]
    fn roles_partition_users() {
        let (_dir, flow) = flow();
        seed(&flow, Role::Client, &[UserRecord::new("Alice", "a@x.com")]);

        let as_admin = flow
            .submit(&SubmitRequest::new("Admin", "Alice", "a@x.com"))
            .unwrap();
        assert!(matches!(as_admin, Outcome::Unconfirmed(_)));
    }

    #[test]
    fn declined_signup_changes_nothing() {
        let (_dir, flow) = flow();

        let pending = match flow
            .submit(&SubmitRequest::new("Supplier", "Alice", "a@x.com"))
            .unwrap()
        {
            Outcome::Unconfirmed(pending) => pending,
            other => panic!("expected Unconfirmed, got {other:?}"),
        };

        assert_eq!(flow.resume(pending, false).unwrap(), Outcome::Declined);
        assert!(flow.store().load(Role::Supplier).unwrap().is_empty());
    }

    #[test]
    fn accepted_signup_appends_exactly_one_record() {
        let (_dir, flow) = flow();
        seed(&flow, Role::Client, &[UserRecord::new("Bob", "b@x.com")]);

        let pending = match flow
            .submit(&SubmitRequest::new("Client", "Alice", "a@x.com"))
            .unwrap()
        {
            Outcome::Unconfirmed(pending) => pending,
            other => panic!("expected Unconfirmed, got {other:?}"),
        };

        let outcome = flow.resume(pending, true).unwrap();
        assert_eq!(
            outcome,
            Outcome::SignedUp {
                role: Role::Client,
                name: "Alice".to_string(),
            }
        );

        let users = flow.store().load(Role::Client).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1], UserRecord::new("Alice", "a@x.com"));
    }

    #[test]
    fn signup_does_not_log_in() {
        let (_dir, flow) = flow();

        let request = SubmitRequest::new("Admin", "Alice", "a@x.com");
        let pending = match flow.submit(&request).unwrap() {
            Outcome::Unconfirmed(pending) => pending,
            other => panic!("expected Unconfirmed, got {other:?}"),
        };

        // SignedUp is not Authenticated; a second submission is what
        // reaches the dashboard.
        assert!(matches!(
            flow.resume(pending, true).unwrap(),
            Outcome::SignedUp { .. }
        ));
        assert!(matches!(
            flow.submit(&request).unwrap(),
            Outcome::Authenticated { .. }
        ));
    }

    #[test]
    fn duplicate_email_is_rejected_and_ledger_unchanged() {
        let (_dir, flow) = flow();
        seed(&flow, Role::Client, &[UserRecord::new("Alice", "a@x.com")]);
        let before = flow.store().load(Role::Client).unwrap();

        // Alice/a@x.com would log in, so build the collision with a
        // different name reusing the same email.
        let pending = match flow
            .submit(&SubmitRequest::new("Client", "Bob", "a@x.com"))
            .unwrap()
        {
            Outcome::Unconfirmed(pending) => pending,
            other => panic!("expected Unconfirmed, got {other:?}"),
        };

        let err = flow.resume(pending, true).unwrap_err();
        assert!(matches!(
            err,
            AuthError::DuplicateUser { role: Role::Client, ref email } if email == "a@x.com"
        ));
        assert_eq!(flow.store().load(Role::Client).unwrap(), before);
    }

    #[test]
    fn duplicate_check_keys_on_email_alone() {
        let (_dir, flow) = flow();
        seed(&flow, Role::Client, &[UserRecord::new("Alice", "a@x.com")]);

        // Bob shares no name with Alice, but the email is taken.
        let pending = match flow
            .submit(&SubmitRequest::new("Client", "Bob", "a@x.com"))
            .unwrap()
        {
            Outcome::Unconfirmed(pending) => pending,
            other => panic!("expected Unconfirmed, got {other:?}"),
        };

        assert!(matches!(
            flow.resume(pending, true),
            Err(AuthError::DuplicateUser { .. })
        ));
    }

    #[test]
    fn storage_corruption_propagates() {
        let (dir, flow) = flow();
        std::fs::write(dir.path().join("admin.json"), b"{ not a list").unwrap();

        let err = flow
            .submit(&SubmitRequest::new("Admin", "Alice", "a@x.com"))
            .unwrap_err();
        assert!(matches!(err, AuthError::Storage(_)));
    }
}
