use super::backend::{DefaultFlag, FlagBackend};
use super::order::MemoryOrder;

use std::fmt;

/// An atomic boolean with test-and-set and clear operations.
///
/// `AtomicFlag` is the smallest building block of the crate: it is enough
/// to implement a spin lock (see [`FastMutex`](crate::FastMutex)).
///
/// Depending on the target and enabled features the flag is driven by a
/// hardware atomic exchange, an inline `xchg` instruction, or a mutex. The
/// three behave identically; only [`is_lock_free`](Self::is_lock_free) and
/// performance tell them apart.
///
/// # Examples
///
/// ```rust
/// use threadkit::{AtomicFlag, MemoryOrder};
///
/// let flag = AtomicFlag::new();
/// assert!(!flag.test_and_set(MemoryOrder::SeqCst));
/// assert!(flag.test_and_set(MemoryOrder::SeqCst));
///
/// flag.clear(MemoryOrder::SeqCst);
/// assert!(!flag.test_and_set(MemoryOrder::SeqCst));
/// ```
pub struct AtomicFlag {
    inner: DefaultFlag,
}

impl AtomicFlag {
    /// Creates a cleared flag.
    pub fn new() -> Self {
        Self::with_state(false)
    }

    /// Creates a flag in the given state.
    pub fn with_state(set: bool) -> Self {
        Self {
            inner: DefaultFlag::new(set),
        }
    }

    /// Atomically sets the flag and returns the value it held before.
    pub fn test_and_set(&self, order: MemoryOrder) -> bool {
        self.inner.test_and_set(order)
    }

    /// Atomically clears the flag.
    pub fn clear(&self, order: MemoryOrder) {
        self.inner.clear(order)
    }

    /// Returns `true` if the flag is driven without a lock.
    pub fn is_lock_free(&self) -> bool {
        DefaultFlag::LOCK_FREE
    }
}

impl Default for AtomicFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicFlag")
            .field("lock_free", &self.is_lock_free())
            .finish_non_exhaustive()
    }
}
