use super::condvar::{Condvar, private};
use super::lockable::Lockable;
use crate::sys::RawLock;
use crate::sys::platform;

use std::fmt;

/// A non-recursive mutual exclusion lock.
///
/// At most one thread holds a `Mutex` at a time. Locking a mutex the
/// calling thread already holds never returns: the thread deadlocks
/// itself. This holds on every backend, including Win32 where the native
/// critical section would otherwise grant the second acquisition.
///
/// Prefer [`LockGuard`](super::LockGuard) over calling
/// [`unlock`](Self::unlock) by hand.
///
/// # Examples
///
/// ```rust
/// use threadkit::{LockGuard, Mutex};
///
/// let mutex = Mutex::new();
/// {
///     let _guard = LockGuard::new(&mutex);
///     assert!(!mutex.try_lock());
/// }
/// assert!(mutex.try_lock());
/// unsafe { mutex.unlock() };
/// ```
pub struct Mutex {
    inner: platform::Mutex,
}

impl Mutex {
    /// Creates an unlocked mutex.
    pub fn new() -> Self {
        Self {
            inner: platform::Mutex::new(),
        }
    }

    /// Blocks until the calling thread holds the lock.
    pub fn lock(&self) {
        self.inner.lock();
    }

    /// Takes the lock if it is free. Never blocks.
    pub fn try_lock(&self) -> bool {
        self.inner.try_lock()
    }

    /// Releases the lock.
    ///
    /// # Safety
    ///
    /// The calling thread must hold the lock.
    pub unsafe fn unlock(&self) {
        unsafe { self.inner.unlock() }
    }
}

impl Default for Mutex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Mutex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutex").finish_non_exhaustive()
    }
}

impl Lockable for Mutex {
    fn lock(&self) {
        Mutex::lock(self)
    }

    fn try_lock(&self) -> bool {
        Mutex::try_lock(self)
    }

    unsafe fn unlock(&self) {
        unsafe { Mutex::unlock(self) }
    }
}

impl private::Sealed for Mutex {
    unsafe fn wait_on(&self, condvar: &Condvar) {
        unsafe { condvar.native().wait(&self.inner) }
    }
}

impl super::CondvarLock for Mutex {}
