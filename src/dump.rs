//! Read-only traversal of a table: bucket views, an entry iterator and a
//! textual dump.
//!
//! Dump format:
//! ```text
//! length = 3
//! bucket   0: key1:v1, 31:v3
//! bucket   1:
//! bucket   2: key2:v2
//! ```
//! Every stored entry appears exactly once, grouped by bucket in array
//! order. Order within a bucket is whatever the chain currently holds.

use crate::key::HashKey;
use crate::table::{Entry, Table};
use core::fmt;
use std::io;

/// One slot of the bucket array.
pub struct BucketView<'a, V> {
    index: usize,
    entries: &'a [Entry<V>],
}

impl<'a, V> BucketView<'a, V> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'a dyn HashKey, &'a V)> + 'a {
        self.entries.iter().map(|e| (e.key.as_ref(), &e.value))
    }
}

/// Iterator over every bucket, including empty ones.
pub struct Buckets<'a, V> {
    it: core::iter::Enumerate<core::slice::Iter<'a, Vec<Entry<V>>>>,
}

impl<'a, V> Iterator for Buckets<'a, V> {
    type Item = BucketView<'a, V>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(index, b)| BucketView {
            index,
            entries: b.as_slice(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

/// Iterator over stored entries, bucket by bucket.
pub struct Iter<'a, V> {
    it: core::iter::Flatten<core::slice::Iter<'a, Vec<Entry<V>>>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a dyn HashKey, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.it.next()?;
        self.remaining -= 1;
        Some((e.key.as_ref(), &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> Table<V> {
    pub fn buckets(&self) -> Buckets<'_, V> {
        Buckets {
            it: self.buckets.iter().enumerate(),
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.buckets.iter().flatten(),
            remaining: self.len(),
        }
    }
}

impl<V: fmt::Display> Table<V> {
    /// Write the dump to `w`.
    pub fn dump<W: io::Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "{}", self.display())
    }

    /// `Display` adapter producing the dump text.
    pub fn display(&self) -> Dump<'_, V> {
        Dump { table: self }
    }
}

pub struct Dump<'a, V> {
    table: &'a Table<V>,
}

impl<V: fmt::Display> fmt::Display for Dump<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "length = {}", self.table.len())?;
        for bucket in self.table.buckets() {
            write!(f, "bucket {:3}:", bucket.index())?;
            for (i, (k, v)) in bucket.entries().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{}{}:{}", sep, k, v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a, V> IntoIterator for &'a Table<V> {
    type Item = (&'a dyn HashKey, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
