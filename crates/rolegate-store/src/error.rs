//! Storage error types.

use std::path::PathBuf;

/// Error raised by [`LedgerStore`](crate::LedgerStore) operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A ledger file exists but does not hold a valid record list.
    ///
    /// This is never folded into "empty ledger"; corruption must
    /// surface to the caller.
    #[error("malformed ledger {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record list could not be encoded as JSON.
    #[error("serialize: {0}")]
    Serialize(serde_json::Error),
}
