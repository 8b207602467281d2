use super::guard::LockGuard;
use super::lockable::Lockable;
use crate::sys::platform;

use std::fmt;

pub(crate) mod private {
    use super::Condvar;

    pub trait Sealed {
        /// Releases `self`, waits on `condvar`, reacquires `self`.
        ///
        /// # Safety
        ///
        /// The calling thread must hold `self`.
        unsafe fn wait_on(&self, condvar: &Condvar);
    }
}

/// Locks that can be paired with a [`Condvar`].
///
/// Implemented by [`Mutex`](super::Mutex) and
/// [`RecursiveMutex`](super::RecursiveMutex). This trait is sealed.
pub trait CondvarLock: Lockable + private::Sealed {}

/// A condition variable.
///
/// A `Condvar` lets threads sleep until another thread announces that
/// some shared state changed. It stores no reference to a mutex: every
/// call site passes the mutex that protects the state, and all waiters of
/// one condition variable must use the same mutex.
///
/// Waits can return without a notification (spurious wakeups), and
/// another thread may change the state between the notification and the
/// waiter reacquiring the mutex. Always re-check the condition in a loop,
/// or use [`wait_while`](Self::wait_while).
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use threadkit::{Atomic, Condvar, LockGuard, MemoryOrder, Mutex, Thread};
///
/// struct Shared {
///     mutex: Mutex,
///     ready: Condvar,
///     count: Atomic<i32>,
/// }
///
/// let shared = Arc::new(Shared {
///     mutex: Mutex::new(),
///     ready: Condvar::new(),
///     count: Atomic::new(0),
/// });
///
/// let mut producer = Thread::new(
///     |shared: Arc<Shared>| {
///         let _guard = LockGuard::new(&shared.mutex);
///         shared.count.store(1, MemoryOrder::Relaxed);
///         shared.ready.notify_all();
///     },
///     shared.clone(),
/// );
///
/// let mut guard = LockGuard::new(&shared.mutex);
/// shared
///     .ready
///     .wait_while(&mut guard, || shared.count.load(MemoryOrder::Relaxed) == 0);
/// drop(guard);
///
/// producer.join();
/// ```
pub struct Condvar {
    inner: platform::Condvar,
}

impl Condvar {
    /// Creates a condition variable with no waiters.
    pub fn new() -> Self {
        Self {
            inner: platform::Condvar::new(),
        }
    }

    pub(crate) fn native(&self) -> &platform::Condvar {
        &self.inner
    }

    /// Atomically releases `mutex` and blocks until woken, then reacquires
    /// `mutex` before returning.
    ///
    /// The thread wakes on [`notify_one`](Self::notify_one),
    /// [`notify_all`](Self::notify_all), or spuriously.
    ///
    /// # Safety
    ///
    /// The calling thread must hold `mutex`, exactly once for a
    /// [`RecursiveMutex`](super::RecursiveMutex).
    pub unsafe fn wait<M: CondvarLock>(&self, mutex: &M) {
        unsafe { mutex.wait_on(self) }
    }

    /// Waits on the mutex held by `guard`.
    ///
    /// # Panics
    ///
    /// Panics if `guard` is empty.
    ///
    /// # Deadlocks
    ///
    /// A [`RecursiveMutex`](super::RecursiveMutex) must be held exactly
    /// once. The wait releases a single level of ownership, so with nested
    /// guards the notifier can never take the mutex.
    pub fn wait_guard<M: CondvarLock>(&self, guard: &mut LockGuard<'_, M>) {
        let mutex = guard
            .mutex()
            .expect("Condvar::wait_guard called with an empty LockGuard");

        unsafe { self.wait(mutex) }
    }

    /// Waits on the mutex held by `guard` for as long as `condition`
    /// returns `true`.
    ///
    /// `condition` is evaluated with the mutex held, before the first wait
    /// and after every wakeup.
    ///
    /// # Panics
    ///
    /// Panics if `guard` is empty.
    ///
    /// # Deadlocks
    ///
    /// A [`RecursiveMutex`](super::RecursiveMutex) must be held exactly
    /// once. The wait releases a single level of ownership, so with nested
    /// guards the notifier can never take the mutex.
    pub fn wait_while<M, F>(&self, guard: &mut LockGuard<'_, M>, mut condition: F)
    where
        M: CondvarLock,
        F: FnMut() -> bool,
    {
        while condition() {
            self.wait_guard(guard);
        }
    }

    /// Wakes one thread currently blocked on this condition variable.
    ///
    /// Only threads that started waiting before this call are eligible.
    /// Does nothing if no thread is waiting.
    pub fn notify_one(&self) {
        self.inner.notify_one();
    }

    /// Wakes every thread currently blocked on this condition variable.
    ///
    /// Only threads that started waiting before this call are woken.
    pub fn notify_all(&self) {
        self.inner.notify_all();
    }
}

impl Default for Condvar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Condvar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condvar").finish_non_exhaustive()
    }
}
