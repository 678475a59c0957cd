//! Key-value blob storage module
//!
//! Provides the data model (entries, properties, metadata), the abstract
//! backend contract, and the in-memory reference backend. Independent of any
//! transport or persistence layer (loose coupling).

mod backend;
mod entry;
mod key;
mod memory;
mod properties;

pub use backend::KeyValueStore;
pub use entry::{Entry, Metadata};
pub use key::{bytes_equal, prefix_hash, ByteKey, HASH_PREFIX_LEN};
pub use memory::InMemoryStore;
pub use properties::{Properties, OCTET_STREAM};
