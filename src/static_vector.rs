//! Fixed-capacity vector whose elements each own a full cache line.
//!
//! [`StaticCacheAlignedVector`] is meant for per-thread or per-shard state
//! (counters, slots, flags) that many threads write concurrently. Every
//! element lives in its own [`CacheAligned`] slot, so a write to element `i`
//! never invalidates the cache line holding element `i + 1`.
//!
//! The vector adds no synchronization of its own. Threads writing through a
//! shared reference need interior mutability in `T` (usually an atomic), and
//! access to the same index from several threads follows `T`'s own rules.

use crate::cache_aligned::CacheAligned;
use std::convert::Infallible;
use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ops::{Index, IndexMut};
use std::ptr;

/// A vector of exactly `N` cache-line aligned elements.
///
/// All `N` elements are constructed together, in index order, when the vector
/// is created, and dropped together, in index order, when it goes away.
/// There is no way to grow, shrink, clone or iterate it.
///
/// # Indexing
/// `vector[pos]` is bounds checked and panics when `pos >= N`.
/// [`get_unchecked`](Self::get_unchecked) skips the check for hot paths where
/// the caller already knows the index is in range.
pub struct StaticCacheAlignedVector<T, const N: usize> {
    slots: [CacheAligned<T>; N],
}

impl<T: Default, const N: usize> StaticCacheAlignedVector<T, N> {
    /// Create a vector with every element set to `T::default()`.
    ///
    /// For atomics this gives `N` counters starting at zero.
    pub fn new() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> StaticCacheAlignedVector<T, N> {
    /// Number of elements, fixed at compile time.
    pub const CAPACITY: usize = N;

    /// Create a vector where element `i` is `f(i)`.
    ///
    /// `f` is called once per index, in increasing order. If it panics, the
    /// elements built so far are dropped before the panic continues.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        match Self::try_from_fn(|pos| Ok::<T, Infallible>(f(pos))) {
            Ok(vector) => vector,
            Err(never) => match never {},
        }
    }

    /// Create a vector where element `i` is `f(i)`, stopping at the first error.
    ///
    /// Either all `N` elements are constructed, or none survive: on `Err` the
    /// elements already built are dropped in index order and the error is
    /// returned unchanged.
    pub fn try_from_fn<F, E>(mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let mut slots: [MaybeUninit<CacheAligned<T>>; N] = [const { MaybeUninit::uninit() }; N];
        let mut guard = InitGuard {
            slots: &mut slots,
            initialized: 0,
        };

        while guard.initialized < N {
            let value = f(guard.initialized)?;
            guard.slots[guard.initialized].write(CacheAligned::new(value));
            guard.initialized += 1;
        }
        mem::forget(guard);

        // SAFETY: every slot was written in the loop above, and
        // `MaybeUninit<X>` has the same layout as `X`.
        let slots = unsafe { ptr::read(&slots as *const _ as *const [CacheAligned<T>; N]) };
        Ok(StaticCacheAlignedVector { slots })
    }

    /// Returns the number of elements, always `N`.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        N
    }

    /// Same as [`size`](Self::size).
    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the element at `pos`, or `None` if `pos >= N`.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.slots.get(pos).map(|slot| &**slot)
    }

    /// Returns the element at `pos` mutably, or `None` if `pos >= N`.
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.slots.get_mut(pos).map(|slot| &mut **slot)
    }

    /// Returns the element at `pos` without a bounds check.
    ///
    /// # Safety
    /// `pos` must be less than `N`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        debug_assert!(pos < N, "index {} out of range for capacity {}", pos, N);
        unsafe { &**self.slots.get_unchecked(pos) }
    }

    /// Returns the element at `pos` mutably without a bounds check.
    ///
    /// # Safety
    /// `pos` must be less than `N`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, pos: usize) -> &mut T {
        debug_assert!(pos < N, "index {} out of range for capacity {}", pos, N);
        unsafe { &mut **self.slots.get_unchecked_mut(pos) }
    }
}

impl<T: Default, const N: usize> Default for StaticCacheAlignedVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for StaticCacheAlignedVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, pos: usize) -> &T {
        assert!(pos < N, "index {} out of range for capacity {}", pos, N);
        &*self.slots[pos]
    }
}

impl<T, const N: usize> IndexMut<usize> for StaticCacheAlignedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        assert!(pos < N, "index {} out of range for capacity {}", pos, N);
        &mut *self.slots[pos]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticCacheAlignedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter().map(|slot| &**slot)).finish()
    }
}

/// Drops the initialized prefix of `slots` if construction bails out early.
struct InitGuard<'a, T, const N: usize> {
    slots: &'a mut [MaybeUninit<CacheAligned<T>>; N],
    initialized: usize,
}

impl<T, const N: usize> Drop for InitGuard<'_, T, N> {
    fn drop(&mut self) {
        for slot in &mut self.slots[..self.initialized] {
            // SAFETY: slots below `initialized` were written and not yet dropped.
            unsafe { slot.assume_init_drop() }
        }
    }
}
