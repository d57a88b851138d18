//! htable: a single-threaded, separately chained hash table whose keys may
//! be of different concrete kinds.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small associative container with insert/overwrite, lookup
//!   and delete, that grows automatically to keep chains short.
//! - Layers:
//!   - `HashKey`: the key capability. A key serializes itself to bytes for
//!     hashing and compares itself against any other `dyn HashKey`,
//!     answering `false` for a different concrete kind. `IntKey` and
//!     `StrKey` are provided.
//!   - `fnv`: 64-bit FNV-1a over the key bytes, reduced modulo the bucket
//!     count.
//!   - `Table<V>`: owns the bucket array (`Vec` of chains) and the entry
//!     count. Values are a type parameter fixed per table.
//!   - `dump`: read-only bucket views, an entry iterator and a text dump.
//!
//! Invariants
//! - `len()` equals the number of entries across all buckets.
//! - No chain holds two keys that compare equal; `set` overwrites.
//! - Every entry sits in bucket `fnv1a64(hash_bytes) % bucket_count` for
//!   the current array, including right after growth.
//! - After `set` returns, `len / bucket_count <= 0.5`.
//!
//! Growth
//! - When an insert pushes the load factor above 0.5 the table allocates
//!   an array of twice the size, moves every entry to the slot its stored
//!   hash selects, and replaces the old array. Key code is not called
//!   during growth. The table never shrinks.
//!
//! Notes and non-goals
//! - Single-threaded: no internal locking. Mutation takes `&mut self`.
//! - No ordering guarantees; `delete` uses `swap_remove` inside a chain.
//! - Keys are immutable once stored.
//! - `delete` on a missing key is the only reported error; absence on
//!   lookup is `None`.

mod dump;
pub mod error;
pub mod fnv;
pub mod key;
mod table;
#[cfg(test)]
mod table_proptest;

// Public surface
pub use dump::{BucketView, Buckets, Dump, Iter};
pub use error::{Result, TableError};
pub use key::{HashKey, IntKey, StrKey};
pub use table::{Table, DEFAULT_BUCKETS, LOAD_FACTOR_THRESHOLD};
