//! Login and sign-up flow over role ledgers.
//!
//! A submission runs one pass: validate, then try to match a stored
//! record. A miss comes back as [`Outcome::Unconfirmed`] so the caller
//! can ask the user whether to register, then feed the answer through
//! [`AuthFlow::resume`]. No session state is kept between passes.
//!
//! # Example
//!
//! ```no_run
//! use rolegate_auth::{AuthFlow, Outcome, SubmitRequest};
//! use rolegate_store::LedgerStore;
//!
//! # fn example() -> Result<(), rolegate_auth::AuthError> {
//! let flow = AuthFlow::new(LedgerStore::new("data"));
//!
//! let request = SubmitRequest::new("Client", "Alice", "alice@example.com");
//! match flow.submit(&request)? {
//!     Outcome::Authenticated { role, name } => {
//!         println!("open the {role} dashboard for {name}");
//!     }
//!     Outcome::Unconfirmed(pending) => {
//!         // ask the user, then:
//!         flow.resume(pending, true)?;
//!     }
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod flow;
mod request;

pub use error::AuthError;
pub use flow::{AuthFlow, Outcome, PendingSignup};
pub use request::SubmitRequest;
