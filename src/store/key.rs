//! Byte-key equality and hashing
//!
//! Keys are opaque byte sequences identified by content, not by reference.
//! Hashing scans at most the first `HASH_PREFIX_LEN` bytes so that lookup
//! cost stays flat for very large keys (content-addressed hashes, composite
//! keys); equality always compares full content, so prefix collisions only
//! cost a bucket scan.

use bytes::Bytes;
use std::hash::{Hash, Hasher};

/// Maximum number of leading bytes the hash examines
pub const HASH_PREFIX_LEN: usize = 1024;

/// Polynomial rolling hash over at most the first `HASH_PREFIX_LEN` bytes.
///
/// Accumulates `hash = hash * 37 ^ byte` starting from 0, with wrapping
/// 32-bit signed arithmetic. The empty sequence hashes to 0.
pub fn prefix_hash(bytes: &[u8]) -> i32 {
    let mut hash: i32 = 0;
    for &byte in bytes.iter().take(HASH_PREFIX_LEN) {
        hash = hash.wrapping_mul(37) ^ (byte as i32);
    }
    hash
}

/// Content equality for optional byte sequences.
///
/// Both absent compare equal; absent never equals present. Present sequences
/// compare by length first, then byte-by-byte, short-circuiting on the first
/// mismatch.
pub fn bytes_equal(x: Option<&[u8]>, y: Option<&[u8]>) -> bool {
    match (x, y) {
        (None, None) => true,
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Map key over an opaque byte sequence
///
/// Equality is full-content; `Hash` feeds the bounded-prefix hash to the
/// map's build-hasher, keeping the equal-implies-same-hash contract while
/// never scanning past the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteKey(Bytes);

impl ByteKey {
    /// Wrap an owned byte sequence
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        ByteKey(bytes.into())
    }

    /// Copy a borrowed slice into an owned key
    pub fn copy_from_slice(key: &[u8]) -> Self {
        ByteKey(Bytes::copy_from_slice(key))
    }

    /// The key's bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Unwrap into the underlying buffer
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl Hash for ByteKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(prefix_hash(&self.0));
    }
}

impl From<Bytes> for ByteKey {
    fn from(bytes: Bytes) -> Self {
        ByteKey(bytes)
    }
}
