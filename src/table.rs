//! Table: chained buckets keyed by `dyn HashKey`, grown by doubling.

use crate::error::{Result, TableError};
use crate::fnv::{bucket_index, fnv1a64};
use crate::key::HashKey;
use core::fmt;
use log::{debug, trace};

/// Bucket count used by `Table::new`.
pub const DEFAULT_BUCKETS: usize = 16;

/// Growth triggers once `len / bucket_count` exceeds this after an insert.
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.5;

pub(crate) struct Entry<V> {
    pub(crate) key: Box<dyn HashKey>,
    pub(crate) value: V,
    // Full FNV-1a hash; growth re-reduces it without touching the key.
    hash: u64,
}

pub(crate) type Bucket<V> = Vec<Entry<V>>;

pub struct Table<V> {
    len: usize,
    pub(crate) buckets: Vec<Bucket<V>>,
}

fn hash_key(key: &dyn HashKey) -> u64 {
    fnv1a64(&key.hash_bytes())
}

fn empty_buckets<V>(n: usize) -> Vec<Bucket<V>> {
    let mut buckets = Vec::with_capacity(n);
    buckets.resize_with(n, Vec::new);
    buckets
}

impl<V> Table<V> {
    pub fn new() -> Self {
        Self {
            len: 0,
            buckets: empty_buckets(DEFAULT_BUCKETS),
        }
    }

    /// Create a table with `n` initial buckets. `n == 0` is rejected.
    pub fn with_buckets(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(TableError::InvalidCapacity);
        }
        Ok(Self {
            len: 0,
            buckets: empty_buckets(n),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn position(&self, key: &dyn HashKey) -> (usize, Option<usize>) {
        let idx = bucket_index(hash_key(key), self.buckets.len());
        let pos = self.buckets[idx].iter().position(|e| e.key.key_eq(key));
        (idx, pos)
    }

    /// Insert or overwrite. Returns the previous value when the key was present.
    pub fn set<K: HashKey>(&mut self, key: K, value: V) -> Option<V> {
        let hash = hash_key(&key);
        let idx = bucket_index(hash, self.buckets.len());
        let bucket = &mut self.buckets[idx];
        if let Some(e) = bucket.iter_mut().find(|e| e.key.key_eq(&key)) {
            trace!("overwrite {} in bucket {}", key, idx);
            return Some(core::mem::replace(&mut e.value, value));
        }

        trace!("insert {} into bucket {}", key, idx);
        bucket.push(Entry {
            key: Box::new(key),
            value,
            hash,
        });
        self.len += 1;
        if self.load_factor() > LOAD_FACTOR_THRESHOLD {
            self.grow();
        }
        debug_assert!(self.load_factor() <= LOAD_FACTOR_THRESHOLD);
        None
    }

    pub fn get(&self, key: &dyn HashKey) -> Option<&V> {
        let (idx, pos) = self.position(key);
        pos.map(|i| &self.buckets[idx][i].value)
    }

    pub fn get_mut(&mut self, key: &dyn HashKey) -> Option<&mut V> {
        let (idx, pos) = self.position(key);
        match pos {
            Some(i) => Some(&mut self.buckets[idx][i].value),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &dyn HashKey) -> bool {
        self.position(key).1.is_some()
    }

    /// Remove the entry for `key` and hand its value back.
    ///
    /// The last entry of the bucket moves into the vacated position, so
    /// bucket order changes.
    pub fn delete(&mut self, key: &dyn HashKey) -> Result<V> {
        let (idx, pos) = self.position(key);
        let Some(i) = pos else {
            return Err(TableError::NotFound {
                key: key.to_string(),
            });
        };
        let entry = self.buckets[idx].swap_remove(i);
        self.len -= 1;
        trace!("deleted {} from bucket {}", entry.key, idx);
        Ok(entry.value)
    }

    // Allocate a doubled array, move every entry to its new slot, then swap.
    // Keys are already unique, so no equality checks are needed.
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let mut grown = empty_buckets(new_count);
        for entry in self.buckets.drain(..).flatten() {
            grown[bucket_index(entry.hash, new_count)].push(entry);
        }
        debug!(
            "grew table from {} to {} buckets ({} entries)",
            new_count / 2,
            new_count,
            self.len
        );
        self.buckets = grown;
    }
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Table<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("len", &self.len)
            .field("bucket_count", &self.buckets.len())
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, V>(&'a Table<V>);

impl<V: fmt::Debug> fmt::Debug for DebugEntries<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
