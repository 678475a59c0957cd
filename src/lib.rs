//! bytekv - A minimal key-value storage abstraction for binary blobs
//!
//! bytekv is designed with strong cohesion and loose coupling principles:
//! - One uniform contract ([`KeyValueStore`]) every backend implements
//! - An in-memory, concurrency-safe reference backend ([`InMemoryStore`])
//! - A data model of immutable entries with content properties and metadata
//!
//! Backends are selected by the caller and interchangeable behind the
//! contract; the in-memory one exists so application code and tests run
//! without any external storage.

pub mod error;
pub mod store;

/// Re-export commonly used types
pub use error::StoreError;
pub use store::{ByteKey, Entry, InMemoryStore, KeyValueStore, Metadata, Properties};
