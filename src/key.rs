//! Key capability: byte serialization for hashing plus kind-aware equality.
//!
//! A table stores `Box<dyn HashKey>`, so keys of different concrete kinds
//! can live side by side. Equality between kinds is always `false`; two
//! keys with identical hash bytes but different kinds stay distinct.
//!
//! Keys must not change their hash bytes or equality while stored.

use core::any::Any;
use core::fmt;
use std::borrow::Cow;

/// Maximum length of a zig-zag varint encoding of an `i64`.
pub const MAX_VARINT_LEN64: usize = 10;

pub trait HashKey: Any + fmt::Display + fmt::Debug {
    /// Deterministic bytes fed to the hasher. Not used for equality.
    fn hash_bytes(&self) -> Cow<'_, [u8]>;

    /// `true` only when `other` is the same concrete kind and logically equal.
    fn key_eq(&self, other: &dyn HashKey) -> bool;

    fn as_any(&self) -> &dyn Any;
}

/// Signed integer key, hashed through its zig-zag varint encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IntKey(pub i64);

impl IntKey {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for IntKey {
    fn from(v: i64) -> Self {
        IntKey(v)
    }
}

impl fmt::Display for IntKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl HashKey for IntKey {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        let mut buf = [0u8; MAX_VARINT_LEN64];
        let n = put_varint(&mut buf, self.0);
        Cow::Owned(buf[..n].to_vec())
    }

    fn key_eq(&self, other: &dyn HashKey) -> bool {
        other
            .as_any()
            .downcast_ref::<IntKey>()
            .map(|o| o == self)
            .unwrap_or(false)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Text key. Case-sensitive; callers normalize before inserting if needed.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StrKey(pub String);

impl StrKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StrKey {
    fn from(s: &str) -> Self {
        StrKey(s.to_string())
    }
}

impl From<String> for StrKey {
    fn from(s: String) -> Self {
        StrKey(s)
    }
}

impl fmt::Display for StrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl HashKey for StrKey {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.0.as_bytes())
    }

    fn key_eq(&self, other: &dyn HashKey) -> bool {
        other
            .as_any()
            .downcast_ref::<StrKey>()
            .map(|o| o.0 == self.0)
            .unwrap_or(false)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Zig-zag encode `v` as LEB128 into `buf`, returning the number of bytes written.
fn put_varint(buf: &mut [u8; MAX_VARINT_LEN64], v: i64) -> usize {
    let mut ux = ((v as u64) << 1) ^ ((v >> 63) as u64);
    let mut i = 0;
    while ux >= 0x80 {
        buf[i] = (ux as u8) | 0x80;
        ux >>= 7;
        i += 1;
    }
    buf[i] = ux as u8;
    i + 1
}
