//! Role-partitioned user record storage.
//!
//! Each [`Role`] owns an independent ledger: the ordered list of
//! [`UserRecord`]s persisted as one JSON file inside a data directory.
//! A ledger is always loaded and rewritten as a whole; there is no
//! incremental append.
//!
//! # Example
//!
//! ```no_run
//! use rolegate_store::{LedgerStore, Role, UserRecord};
//!
//! # fn example() -> Result<(), rolegate_store::StoreError> {
//! let store = LedgerStore::new("data");
//! let mut users = store.load(Role::Client)?;
//! users.push(UserRecord::new("Alice", "alice@example.com"));
//! store.save(Role::Client, &users)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod ledger;
mod record;
mod role;

pub use error::StoreError;
pub use ledger::{LedgerStore, RoleLock};
pub use record::UserRecord;
pub use role::{Role, UnknownRole};
