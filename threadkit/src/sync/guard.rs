use super::lockable::Lockable;

use std::fmt;
use std::marker::PhantomData;

/// Scoped ownership of a lock.
///
/// [`LockGuard::new`] locks the given mutex and the guard unlocks it when
/// dropped, exactly once, on every exit path. An empty guard
/// ([`LockGuard::empty`] or [`Default`]) refers to no mutex and unlocks
/// nothing.
///
/// A guard cannot be cloned, and it cannot leave the thread that created
/// it, since the lock must be released by its owner.
///
/// # Examples
///
/// ```rust
/// use threadkit::{Atomic, LockGuard, MemoryOrder, Mutex};
///
/// let mutex = Mutex::new();
/// let counter = Atomic::new(0);
///
/// let increment = || {
///     let _guard = LockGuard::new(&mutex);
///     counter.fetch_add(1, MemoryOrder::Relaxed);
/// };
///
/// increment();
/// increment();
/// assert_eq!(counter.get(), 2);
/// ```
#[must_use = "dropping the guard immediately releases the lock"]
pub struct LockGuard<'a, M: Lockable + ?Sized> {
    mutex: Option<&'a M>,

    /// Keeps the guard `!Send`.
    _owner: PhantomData<*const ()>,
}

impl<'a, M: Lockable + ?Sized> LockGuard<'a, M> {
    /// Locks `mutex` and returns a guard that unlocks it on drop.
    pub fn new(mutex: &'a M) -> Self {
        mutex.lock();

        Self {
            mutex: Some(mutex),
            _owner: PhantomData,
        }
    }

    /// Returns a guard that holds no lock.
    pub fn empty() -> Self {
        Self {
            mutex: None,
            _owner: PhantomData,
        }
    }

    /// The mutex this guard holds, if any.
    pub fn mutex(&self) -> Option<&'a M> {
        self.mutex
    }

    /// Returns `true` if the guard holds a lock.
    pub fn owns_lock(&self) -> bool {
        self.mutex.is_some()
    }
}

impl<M: Lockable + ?Sized> Default for LockGuard<'_, M> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<M: Lockable + ?Sized> Drop for LockGuard<'_, M> {
    fn drop(&mut self) {
        if let Some(mutex) = self.mutex.take() {
            unsafe { mutex.unlock() };
        }
    }
}

impl<M: Lockable + ?Sized> fmt::Debug for LockGuard<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockGuard")
            .field("owns_lock", &self.owns_lock())
            .finish()
    }
}
