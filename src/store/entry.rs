//! Entry structure for stored blobs

use super::properties::Properties;
use bytes::Bytes;
use std::collections::HashMap;

/// Free-form string annotations attached to an entry
///
/// Absent metadata is always represented as an empty mapping, never as a
/// missing value.
pub type Metadata = HashMap<String, String>;

/// One stored item: key, value, content properties and metadata
///
/// Immutable once constructed. Construction applies the content-type
/// default, so `properties().content_type` is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: Bytes,
    value: Bytes,
    properties: Properties,
    metadata: Metadata,
}

impl Entry {
    /// Create an entry with default properties and empty metadata
    pub fn new(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self::with_parts(key, value, None, None)
    }

    /// Create an entry, substituting defaults for absent parts
    ///
    /// Absent properties become a fresh default record; absent metadata
    /// becomes an empty mapping. An unset content type is filled with
    /// `application/octet-stream`.
    pub fn with_parts(
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
        properties: Option<Properties>,
        metadata: Option<Metadata>,
    ) -> Self {
        let mut properties = properties.unwrap_or_default();
        properties.apply_content_type_default();

        Entry {
            key: key.into(),
            value: value.into(),
            properties,
            metadata: metadata.unwrap_or_default(),
        }
    }

    /// The key bytes
    pub fn key(&self) -> &Bytes {
        &self.key
    }

    /// The value bytes
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// Content properties, post defaulting
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Metadata mapping (empty if none was supplied)
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
