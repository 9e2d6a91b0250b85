use crate::cache_aligned::CacheAligned;

/// Typical CPU cache line size in bytes.
///
/// Most modern CPUs have a cache line of 64 bytes. Every [`CacheAligned`]
/// slot starts on a multiple of this value.
pub const CACHE_LINE_SIZE: usize = 64;

/// Size of a raw pointer on the target architecture in bytes.
///
/// On a 64-bit system, this is usually 8 bytes; on a 32-bit system, 4 bytes.
pub const POINTER_SIZE: usize = size_of::<*const u8>();

// `repr(align(..))` only takes a literal, keep it in sync with the constant.
const _: () = assert!(align_of::<CacheAligned<u8>>() == CACHE_LINE_SIZE);

/// Number of padding bytes a `T` wastes once wrapped in a [`CacheAligned`] slot.
///
/// # Examples
///
/// ```
/// # use cache_aligned::constants::{padding_of, CACHE_LINE_SIZE};
/// assert_eq!(padding_of::<u64>(), CACHE_LINE_SIZE - 8);
/// assert_eq!(padding_of::<[u8; 64]>(), 0);
/// ```
pub const fn padding_of<T>() -> usize {
    size_of::<CacheAligned<T>>() - size_of::<T>()
}
