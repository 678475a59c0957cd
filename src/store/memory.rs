//! In-memory storage backend

use super::backend::KeyValueStore;
use super::entry::{Entry, Metadata};
use super::key::ByteKey;
use super::properties::Properties;
use crate::error::StoreError;
use async_trait::async_trait;
use bytes::Bytes;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::time::Duration;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Type alias for our hash map with SipHasher
type RecordMap = HashMap<ByteKey, StoreRecord, BuildHasherDefault<SipHasher13>>;

/// Bound on waiting for the internal lock
const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(15);

/// A stored record owning independent copies of all entry fields
///
/// Replaced wholesale when its key is stored again; never merged.
struct StoreRecord {
    key: Bytes,
    value: Bytes,
    properties: Properties,
    metadata: Metadata,
}

impl StoreRecord {
    fn from_entry(entry: &Entry) -> Self {
        StoreRecord {
            key: entry.key().clone(),
            value: entry.value().clone(),
            properties: entry.properties().clone(),
            metadata: entry.metadata().clone(),
        }
    }

    /// Reconstruct a fresh entry sharing nothing mutable with the record
    fn to_entry(&self) -> Entry {
        Entry::with_parts(
            self.key.clone(),
            self.value.clone(),
            Some(self.properties.clone()),
            Some(self.metadata.clone()),
        )
    }
}

/// Concurrency-safe in-memory reference backend
///
/// A single reader/writer lock guards the whole map: loads proceed
/// concurrently, any store or removal excludes everything else for its
/// critical section. Writes to the same key are totally ordered by lock
/// acquisition; a load never observes a partially-constructed record.
///
/// Each instance owns independent state, so multiple isolated stores can
/// coexist in one process. The backend never suspends on I/O; once the lock
/// is held an operation completes immediately.
pub struct InMemoryStore {
    records: RwLock<RecordMap>,
    lock_timeout: Duration,
}

impl InMemoryStore {
    /// Create an empty store with the default 15-second lock bound
    pub fn new() -> Self {
        Self::with_lock_timeout(DEFAULT_LOCK_TIMEOUT)
    }

    /// Create an empty store with a custom lock-acquisition bound
    pub fn with_lock_timeout(lock_timeout: Duration) -> Self {
        InMemoryStore {
            records: RwLock::new(RecordMap::default()),
            lock_timeout,
        }
    }

    async fn read_records(
        &self,
        cancel: &CancellationToken,
    ) -> Result<RwLockReadGuard<'_, RecordMap>, StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        tokio::select! {
            _ = cancel.cancelled() => Err(StoreError::Cancelled),
            locked = time::timeout(self.lock_timeout, self.records.read()) => {
                locked.map_err(|_| {
                    warn!("read lock not acquired within {:?}", self.lock_timeout);
                    StoreError::LockTimeout(self.lock_timeout)
                })
            }
        }
    }

    async fn write_records(
        &self,
        cancel: &CancellationToken,
    ) -> Result<RwLockWriteGuard<'_, RecordMap>, StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        tokio::select! {
            _ = cancel.cancelled() => Err(StoreError::Cancelled),
            locked = time::timeout(self.lock_timeout, self.records.write()) => {
                locked.map_err(|_| {
                    warn!("write lock not acquired within {:?}", self.lock_timeout);
                    StoreError::LockTimeout(self.lock_timeout)
                })
            }
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn store(
        &self,
        entry: &Entry,
        cancel: &CancellationToken,
    ) -> Result<Properties, StoreError> {
        let mut records = self.write_records(cancel).await?;

        let record = StoreRecord::from_entry(entry);
        let properties = record.properties.clone();

        debug!(
            "storing entry ({} key bytes, {} value bytes)",
            record.key.len(),
            record.value.len()
        );

        records.insert(ByteKey::new(record.key.clone()), record);

        Ok(properties)
    }

    async fn load_properties(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<Option<Properties>, StoreError> {
        let records = self.read_records(cancel).await?;

        Ok(records
            .get(&ByteKey::copy_from_slice(key))
            .map(|record| record.properties.clone()))
    }

    async fn load_metadata(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<Option<Metadata>, StoreError> {
        let records = self.read_records(cancel).await?;

        Ok(records
            .get(&ByteKey::copy_from_slice(key))
            .map(|record| record.metadata.clone()))
    }

    async fn load_value(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<Bytes, StoreError> {
        let records = self.read_records(cancel).await?;

        // Missing keys yield an empty value here, not an absent marker.
        Ok(records
            .get(&ByteKey::copy_from_slice(key))
            .map(|record| record.value.clone())
            .unwrap_or_else(Bytes::new))
    }

    async fn load_entry(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<Option<Entry>, StoreError> {
        let records = self.read_records(cancel).await?;

        Ok(records
            .get(&ByteKey::copy_from_slice(key))
            .map(StoreRecord::to_entry))
    }

    async fn remove_key(
        &self,
        key: &[u8],
        cancel: &CancellationToken,
    ) -> Result<(), StoreError> {
        let mut records = self.write_records(cancel).await?;

        if records.remove(&ByteKey::copy_from_slice(key)).is_some() {
            debug!("removed entry ({} key bytes)", key.len());
        }

        Ok(())
    }
}
