use super::condvar::{Condvar, private};
use super::lockable::Lockable;
use crate::sys::RawLock;
use crate::sys::platform;

use std::fmt;

/// A mutual exclusion lock its owner may take repeatedly.
///
/// Each [`lock`](Self::lock) by the owning thread must be balanced by one
/// [`unlock`](Self::unlock); other threads stay blocked until the count
/// drops back to zero. The count itself is kept by the native primitive.
///
/// # Examples
///
/// ```rust
/// use threadkit::{LockGuard, RecursiveMutex};
///
/// let mutex = RecursiveMutex::new();
///
/// let _outer = LockGuard::new(&mutex);
/// let _inner = LockGuard::new(&mutex);
/// ```
pub struct RecursiveMutex {
    inner: platform::RecursiveMutex,
}

impl RecursiveMutex {
    /// Creates an unlocked recursive mutex.
    pub fn new() -> Self {
        Self {
            inner: platform::RecursiveMutex::new(),
        }
    }

    /// Blocks until the calling thread holds the lock, or increments the
    /// count if it already does.
    pub fn lock(&self) {
        self.inner.lock();
    }

    /// Takes the lock if it is free or already held by the calling thread.
    pub fn try_lock(&self) -> bool {
        self.inner.try_lock()
    }

    /// Releases one level of ownership.
    ///
    /// # Safety
    ///
    /// The calling thread must hold the lock.
    pub unsafe fn unlock(&self) {
        unsafe { self.inner.unlock() }
    }
}

impl Default for RecursiveMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecursiveMutex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecursiveMutex").finish_non_exhaustive()
    }
}

impl Lockable for RecursiveMutex {
    fn lock(&self) {
        RecursiveMutex::lock(self)
    }

    fn try_lock(&self) -> bool {
        RecursiveMutex::try_lock(self)
    }

    unsafe fn unlock(&self) {
        unsafe { RecursiveMutex::unlock(self) }
    }
}

impl private::Sealed for RecursiveMutex {
    unsafe fn wait_on(&self, condvar: &Condvar) {
        unsafe { condvar.native().wait(&self.inner) }
    }
}

impl super::CondvarLock for RecursiveMutex {}
