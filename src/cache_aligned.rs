use std::fmt;
use std::ops::{Deref, DerefMut};

/// A single value padded and aligned to a full cache line.
///
/// The struct is aligned to 64 bytes (see [`CACHE_LINE_SIZE`]), so its size is
/// always a multiple of the cache line. Two slots stored next to each other in
/// an array never share a line, which avoids false sharing between threads
/// that write to neighbouring slots.
///
/// Atomics need no special treatment: `AtomicU64::default()` and friends
/// already start at zero, so [`Default`] yields a zeroed atomic.
///
/// [`CACHE_LINE_SIZE`]: crate::constants::CACHE_LINE_SIZE
#[repr(align(64))]
pub struct CacheAligned<T> {
    value: T,
}

impl<T> CacheAligned<T> {
    /// Wrap `value` in its own cache line.
    pub const fn new(value: T) -> Self {
        CacheAligned { value }
    }

    /// Unwrap the padded value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Default> Default for CacheAligned<T> {
    /// Create a slot holding `T::default()`.
    fn default() -> Self {
        CacheAligned::new(T::default())
    }
}

impl<T> Deref for CacheAligned<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for CacheAligned<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for CacheAligned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheAligned").field("value", &self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::cache_aligned::CacheAligned;
    use crate::constants::CACHE_LINE_SIZE;
    use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

    #[test]
    fn test_layout_is_cache_line() {
        assert_eq!(align_of::<CacheAligned<u8>>(), CACHE_LINE_SIZE);
        assert_eq!(size_of::<CacheAligned<u8>>(), CACHE_LINE_SIZE);
        assert_eq!(size_of::<CacheAligned<AtomicI64>>(), CACHE_LINE_SIZE);
        assert_eq!(size_of::<CacheAligned<[u64; 9]>>(), 2 * CACHE_LINE_SIZE);
    }

    #[test]
    fn test_default_plain_value() {
        let slot: CacheAligned<i64> = CacheAligned::default();
        assert_eq!(*slot, 0);

        let slot: CacheAligned<String> = CacheAligned::default();
        assert!(slot.is_empty());
    }

    #[test]
    fn test_default_atomic_is_zero() {
        let slot: CacheAligned<AtomicU32> = CacheAligned::default();
        assert_eq!(slot.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_deref_mut_and_into_inner() {
        let mut slot = CacheAligned::new(10);
        *slot += 5;
        assert_eq!(*slot, 15);
        assert_eq!(slot.into_inner(), 15);
    }

    #[test]
    fn test_address_is_aligned() {
        let slots: [CacheAligned<u16>; 3] = Default::default();
        for slot in &slots {
            let addr = slot as *const CacheAligned<u16> as usize;
            assert_eq!(addr % CACHE_LINE_SIZE, 0);
        }
    }

    #[test]
    fn test_debug() {
        let slot = CacheAligned::new(7u8);
        assert_eq!(format!("{:?}", slot), "CacheAligned { value: 7 }");
    }
}
