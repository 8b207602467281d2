/// Operations every native lock exposes, regardless of backend.
///
/// Implemented by the `Mutex` and `RecursiveMutex` types of each platform
/// module so the public wrappers can stay backend agnostic.
pub(crate) trait RawLock {
    /// Blocks until the lock is held by the calling thread.
    fn lock(&self);

    /// Attempts to take the lock without blocking.
    fn try_lock(&self) -> bool;

    /// Releases the lock.
    ///
    /// # Safety
    ///
    /// The calling thread must currently hold the lock.
    unsafe fn unlock(&self);
}

/// Entry point handed to a freshly created native thread.
pub(crate) type ThreadMain = Box<dyn FnOnce() + Send + 'static>;

/// Smallest stack size ever requested from the operating system.
pub(crate) const MIN_STACK_SIZE: usize = 16 * 1024;
