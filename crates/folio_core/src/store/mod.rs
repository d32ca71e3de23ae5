//! Persistent key-value store adapter.
//!
//! # Responsibility
//! - Provide the whole-value get/set contract every persisted blob uses.
//! - Enforce a write quota modeling the host store's size limit.
//!
//! # Invariants
//! - Writes are whole-value overwrites, last-writer-wins, no merge.
//! - A rejected write leaves the previously stored value untouched.
//! - Quota failures are terminal for that attempt; callers surface them
//!   as a user-visible warning and never retry.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

/// Store key holding the freeform content map.
pub const CONTENT_KEY: &str = "profileContentV1";
/// Store key holding the resume attachment payload.
pub const RESUME_KEY: &str = "profileResumeV1";
/// Store key holding the structured site data.
pub const SITE_DATA_KEY: &str = "siteDataV1";

/// Default write quota, sized like a browser local-storage bucket.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// The backend rejected the write because the value exceeds its quota.
    QuotaExceeded {
        key: String,
        size_bytes: usize,
        limit_bytes: usize,
    },
    /// Backend-level read/write failure.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded {
                key,
                size_bytes,
                limit_bytes,
            } => write!(
                f,
                "write of `{key}` rejected: {size_bytes} bytes exceeds quota of {limit_bytes}"
            ),
            Self::Backend(message) => write!(f, "store backend failure: {message}"),
        }
    }
}

impl Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Backend(value.to_string())
    }
}

/// Whole-value key-to-string persistence contract.
pub trait KvStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Overwrites the value for `key`. Fails with `QuotaExceeded` when the
    /// value is larger than the backend's configured limit.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

pub(crate) fn check_quota(key: &str, value: &str, quota: Option<usize>) -> StoreResult<()> {
    if let Some(limit_bytes) = quota {
        let size_bytes = value.len();
        if size_bytes > limit_bytes {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                size_bytes,
                limit_bytes,
            });
        }
    }
    Ok(())
}
