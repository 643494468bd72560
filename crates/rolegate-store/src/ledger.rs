//! JSON-file-backed role ledgers.
//!
//! Atomic write (tmp + rename) ensures a concurrent reader never sees a
//! half-written ledger file.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::StoreError;
use crate::record::UserRecord;
use crate::role::Role;

/// Durable mapping from [`Role`] to its ordered list of [`UserRecord`]s.
///
/// Every operation reads or rewrites a role's ledger file as a whole;
/// nothing is cached between calls. The three ledgers are independent
/// resources.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    data_dir: PathBuf,
}

impl LedgerStore {
    /// Create a store rooted at `data_dir`. The directory is created
    /// lazily on the first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding the ledger files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn ledger_path(&self, role: Role) -> PathBuf {
        self.data_dir.join(role.ledger_filename())
    }

    /// Load the full ledger for `role`.
    ///
    /// A ledger that has never been written reads as empty. A file that
    /// exists but does not parse is [`StoreError::Malformed`].
    pub fn load(&self, role: Role) -> Result<Vec<UserRecord>, StoreError> {
        let path = self.ledger_path(role);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let records: Vec<UserRecord> = serde_json::from_str(&data)
            .map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), count = records.len(), "ledger loaded");
        Ok(records)
    }

    /// Replace the entire persisted ledger for `role`.
    ///
    /// The new content is written to a temporary file and renamed over
    /// the target, so readers only ever observe a complete ledger.
    pub fn save(&self, role: Role, records: &[UserRecord]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;

        let target = self.ledger_path(role);
        let tmp = self
            .data_dir
            .join(format!("{}.tmp", role.ledger_filename()));

        let data = serde_json::to_string_pretty(records).map_err(StoreError::Serialize)?;
        fs::write(&tmp, data.as_bytes())?;
        fs::rename(&tmp, &target)?;

        debug!(path = %target.display(), count = records.len(), "ledger saved");
        Ok(())
    }

    /// Take an exclusive cross-process lock on one role's ledger.
    ///
    /// Guards a load-then-save round trip against another process writing
    /// the same role file. Blocks until the lock is available; the lock
    /// is released when the returned guard is dropped. Ledgers of other
    /// roles are unaffected.
    pub fn lock(&self, role: Role) -> Result<RoleLock, StoreError> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self
            .data_dir
            .join(format!("{}.lock", role.ledger_filename()));
        let file = File::create(&path)?;
        file.lock_exclusive()?;
        Ok(RoleLock { file })
    }
}

/// Exclusive lock over one role's ledger, released on drop.
///
/// Uses an OS-level advisory file lock, so it is released even if the
/// process crashes while holding it.
#[derive(Debug)]
pub struct RoleLock {
    file: File,
}

impl Drop for RoleLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
