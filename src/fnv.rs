//! 64-bit FNV-1a over a key's hash bytes.

pub const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
pub const FNV_PRIME: u64 = 1099511628211;

/// Hash `bytes` with FNV-1a. Multiplication wraps.
#[inline]
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Reduce a full hash to a slot in `[0, bucket_count)`.
#[inline]
pub fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    (hash % bucket_count as u64) as usize
}
