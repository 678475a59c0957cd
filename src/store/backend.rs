//! Storage contract implemented by every backend

use super::entry::{Entry, Metadata};
use super::properties::Properties;
use crate::error::StoreError;
use async_trait::async_trait;
use bytes::Bytes;
use tokio_util::sync::CancellationToken;

/// Abstract contract for key-value blob storage
///
/// Backends are interchangeable: the in-memory reference implementation and
/// any persistent one expose identical semantics and the same error
/// taxonomy, so callers select a backend without changing code. Every
/// operation takes a cancellation token, honored at least on entry; the
/// in-memory backend never performs I/O, but the asynchronous convention is
/// shared so I/O-bound backends fit the same trait.
///
/// Absence is uniform across the load operations: `None` means the key has
/// no record, and callers must not infer anything further from which
/// operation reported it.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Persist an entry, replacing any existing record for the same key in
    /// full. Returns an independent copy of the stored properties, post
    /// defaulting: never the caller's own instance.
    async fn store(
        &self,
        entry: &Entry,
        cancel: &CancellationToken,
    ) -> Result<Properties, StoreError>;

    /// Load a copy of the properties stored under `key`, or `None` if the
    /// key has no record.
    async fn load_properties(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<Option<Properties>, StoreError>;

    /// Load the metadata mapping stored under `key`, or `None` if the key
    /// has no record.
    async fn load_metadata(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<Option<Metadata>, StoreError>;

    /// Load the value bytes stored under `key`.
    ///
    /// A missing key yields an empty byte sequence, not a distinguishable
    /// absent marker. This asymmetry with the other load operations is
    /// long-standing behavior that callers rely on; use [`load_entry`] when
    /// absence must be told apart from an empty value.
    ///
    /// [`load_entry`]: KeyValueStore::load_entry
    async fn load_value(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<Bytes, StoreError>;

    /// Load a full, independently-owned reconstruction of the entry stored
    /// under `key`, or `None` if the key has no record.
    async fn load_entry(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<Option<Entry>, StoreError>;

    /// Delete the record for `key`. Removing an absent key is not an error.
    async fn remove_key(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<(), StoreError>;
}
