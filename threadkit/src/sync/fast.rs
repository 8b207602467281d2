use super::lockable::Lockable;
use crate::atomic::{AtomicFlag, MemoryOrder};
use crate::thread::this_thread;

use std::fmt;

/// A non-recursive spin lock.
///
/// `FastMutex` never enters the kernel to take the lock: it spins on an
/// [`AtomicFlag`], yielding the processor between attempts. It is cheaper
/// than [`Mutex`](super::Mutex) for very short critical sections and worse
/// under heavy contention. It cannot be used with a
/// [`Condvar`](super::Condvar).
///
/// # Examples
///
/// ```rust
/// use threadkit::{FastMutex, LockGuard};
///
/// let lock = FastMutex::new();
/// let guard = LockGuard::new(&lock);
/// assert!(!lock.try_lock());
/// drop(guard);
/// assert!(lock.try_lock());
/// unsafe { lock.unlock() };
/// ```
pub struct FastMutex {
    flag: AtomicFlag,
}

impl FastMutex {
    /// Creates an unlocked spin lock.
    pub fn new() -> Self {
        Self {
            flag: AtomicFlag::new(),
        }
    }

    /// Spins, yielding between attempts, until the lock is held.
    pub fn lock(&self) {
        while !self.try_lock() {
            this_thread::yield_now();
        }
    }

    /// Takes the lock if it is free.
    pub fn try_lock(&self) -> bool {
        !self.flag.test_and_set(MemoryOrder::Acquire)
    }

    /// Releases the lock.
    ///
    /// # Safety
    ///
    /// The calling thread must hold the lock.
    pub unsafe fn unlock(&self) {
        self.flag.clear(MemoryOrder::Release);
    }
}

impl Default for FastMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FastMutex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastMutex").finish_non_exhaustive()
    }
}

impl Lockable for FastMutex {
    fn lock(&self) {
        FastMutex::lock(self)
    }

    fn try_lock(&self) -> bool {
        FastMutex::try_lock(self)
    }

    unsafe fn unlock(&self) {
        unsafe { FastMutex::unlock(self) }
    }
}
