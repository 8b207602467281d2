/// A lock that can be held by one thread at a time.
///
/// Implemented by [`Mutex`](super::Mutex),
/// [`RecursiveMutex`](super::RecursiveMutex) and
/// [`FastMutex`](super::FastMutex). [`LockGuard`](super::LockGuard) is
/// generic over this trait.
pub trait Lockable {
    /// Blocks the calling thread until it holds the lock.
    fn lock(&self);

    /// Attempts to take the lock without blocking.
    ///
    /// Returns `true` if the lock is now held by the calling thread.
    fn try_lock(&self) -> bool;

    /// Releases the lock.
    ///
    /// If other threads are blocked in [`lock`](Self::lock), one of them
    /// is allowed to proceed.
    ///
    /// # Safety
    ///
    /// The calling thread must hold the lock.
    unsafe fn unlock(&self);
}
