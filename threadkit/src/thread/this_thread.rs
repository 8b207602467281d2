//! Operations on the calling thread.
//!
//! These free functions mirror the associated functions of
//! [`Thread`](super::Thread) but always act on the thread that calls them.

use super::context::current_id;
use super::id::ThreadId;
use crate::sys::platform;

#[doc(inline)]
pub use crate::time::{sleep, sleep_for};

/// Returns the id of the calling thread.
///
/// Inside a routine started by [`Thread::new`](super::Thread::new) this is
/// the same id the spawning side reads from
/// [`Thread::id`](super::Thread::id). Threads not started by this crate
/// receive an id the first time they ask.
pub fn id() -> ThreadId {
    current_id()
}

/// Yields the processor.
///
/// Offers the operating system the opportunity to run another ready thread
/// on the current processor. There is no guarantee that another thread
/// runs, nor about which one.
///
/// # Examples
///
/// ```rust
/// use threadkit::{AtomicFlag, MemoryOrder, this_thread};
///
/// let busy = AtomicFlag::new();
/// while busy.test_and_set(MemoryOrder::Acquire) {
///     this_thread::yield_now();
/// }
/// busy.clear(MemoryOrder::Release);
/// ```
pub fn yield_now() {
    platform::yield_now();
}
