//! Error taxonomy shared by all backends
//!
//! Absence of a key is not an error: the load operations signal it through
//! their return type. Errors here are the failures a backend cannot resolve
//! for the caller.

use std::time::Duration;
use thiserror::Error;

/// Failures surfaced by a storage backend
///
/// The backend never retries internally; every error propagates to the
/// caller. A failed store leaves any previously-stored record unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The internal lock could not be acquired within the configured bound.
    /// Fatal for the call; the backend never proceeds without the lock.
    #[error("timed out acquiring the store lock after {0:?}")]
    LockTimeout(Duration),

    /// The caller's cancellation token fired before the operation entered
    /// its critical section.
    #[error("operation cancelled")]
    Cancelled,
}
