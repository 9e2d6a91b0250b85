//! Cache-line aligned containers for state shared between threads.
//!
//! When independent values written by different threads sit on the same
//! cache line, every write invalidates the line on the other cores even
//! though the threads never touch each other's data (false sharing). This
//! crate keeps such values one per line:
//!
//! - [`CacheAligned`] pads and aligns a single value to [`CACHE_LINE_SIZE`].
//! - [`StaticCacheAlignedVector`] holds exactly `N` of them, for per-worker
//!   or per-shard slots indexed by thread.
//!
//! ```
//! use cache_aligned::prelude::*;
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! let counters: StaticCacheAlignedVector<AtomicU64, 4> = StaticCacheAlignedVector::new();
//! counters[2].fetch_add(5, Ordering::Relaxed);
//!
//! assert_eq!(counters[2].load(Ordering::Relaxed), 5);
//! assert_eq!(counters[0].load(Ordering::Relaxed), 0);
//! assert_eq!(counters.size(), 4);
//! ```
//!
//! [`CACHE_LINE_SIZE`]: constants::CACHE_LINE_SIZE

pub mod cache_aligned;
pub mod constants;
pub mod static_vector;

pub use cache_aligned::CacheAligned;
pub use static_vector::StaticCacheAlignedVector;

pub mod prelude {
    pub use crate::cache_aligned::CacheAligned;
    pub use crate::constants::CACHE_LINE_SIZE;
    pub use crate::static_vector::StaticCacheAlignedVector;
}
