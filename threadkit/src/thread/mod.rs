//! Threads of execution.
//!
//! This module provides:
//! - [`Thread`]: an owning handle to an operating system thread,
//! - [`Builder`]: thread creation with a name and stack size,
//! - [`ThreadId`]: a unique, comparable thread identifier,
//! - [`this_thread`]: operations on the calling thread.
//!
//! ## Lifecycle
//!
//! A thread starts running as soon as its handle is created. The owner
//! must then retire it exactly once, either with [`Thread::join`] (wait for
//! it) or [`Thread::detach`] (let it run on its own). Dropping a handle
//! that is still joinable aborts the process.

mod builder;
mod context;
mod id;

pub mod this_thread;

pub use builder::Builder;
pub use id::ThreadId;

use crate::sys::platform;

use std::fmt;
use std::process;

use tracing::{error, trace, warn};

/// Native handle type: `pthread_t` on POSIX systems, `HANDLE` on Windows.
pub type NativeHandle = platform::RawThread;

/// An owning handle to an operating system thread.
///
/// A `Thread` is either *empty* (no associated thread) or *joinable*. It
/// becomes empty after [`join`](Self::join) or [`detach`](Self::detach),
/// and starts empty when created with [`Default`] or when thread creation
/// fails in [`Thread::new`].
///
/// # Aborts
///
/// Dropping a joinable `Thread` calls [`std::process::abort`]. A thread
/// that is neither waited for nor explicitly detached is a resource leak,
/// and this surfaces it immediately.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use threadkit::{AtomicFlag, MemoryOrder, Thread};
///
/// let done = Arc::new(AtomicFlag::new());
///
/// let mut thread = Thread::new(
///     |done: Arc<AtomicFlag>| {
///         done.test_and_set(MemoryOrder::Release);
///     },
///     done.clone(),
/// );
///
/// thread.join();
/// assert!(done.test_and_set(MemoryOrder::Acquire));
/// ```
pub struct Thread {
    /// Native thread, present while joinable.
    native: Option<platform::NativeThread>,

    /// Id of the thread, kept for logging after it is retired.
    id: ThreadId,
}

impl Thread {
    /// Starts `routine(arg)` on a new thread.
    ///
    /// If the operating system cannot create the thread, a warning is
    /// logged and the returned handle is empty (not joinable). Use
    /// [`Builder::spawn`] to observe the error instead.
    pub fn new<F, A>(routine: F, arg: A) -> Self
    where
        F: FnOnce(A) + Send + 'static,
        A: Send + 'static,
    {
        match Builder::new().spawn(routine, arg) {
            Ok(thread) => thread,
            Err(error) => {
                warn!(%error, "thread creation failed, returning an empty handle");
                Self::default()
            }
        }
    }

    /// Starts the closure `f` on a new thread.
    ///
    /// Shorthand for [`Thread::new`] with a routine that takes no argument.
    pub fn spawn<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::new(|f: F| f(), f)
    }

    /// Blocks until the thread's routine has returned.
    ///
    /// Afterwards the handle is empty, and everything the thread wrote is
    /// visible to the caller.
    ///
    /// Joining an empty handle is a usage error. Debug builds panic; release
    /// builds return immediately.
    pub fn join(&mut self) {
        debug_assert!(self.joinable(), "join called on a non-joinable Thread");

        if let Some(native) = self.native.take() {
            native.join();
            trace!(thread = %self.id, "joined thread");
        }
    }

    /// Separates the thread from this handle.
    ///
    /// The thread keeps running and releases its resources when its routine
    /// returns. Afterwards the handle is empty. Detaching an empty handle
    /// does nothing.
    pub fn detach(&mut self) {
        if let Some(native) = self.native.take() {
            native.detach();
            trace!(thread = %self.id, "detached thread");
        }
    }

    /// Returns `true` if the handle owns a thread not yet joined or
    /// detached.
    pub fn joinable(&self) -> bool {
        self.native.is_some()
    }

    /// Returns the id of the thread, or [`ThreadId::default`] for an empty
    /// handle.
    ///
    /// Once the handle is joined or detached it no longer reports the id. A
    /// copy taken earlier stays valid and is never handed to another thread.
    pub fn id(&self) -> ThreadId {
        if self.joinable() {
            self.id
        } else {
            ThreadId::NONE
        }
    }

    /// Returns the native handle, or `None` for an empty handle.
    pub fn native_handle(&self) -> Option<NativeHandle> {
        self.native.as_ref().map(platform::NativeThread::raw)
    }

    /// Returns the number of threads the hardware can run concurrently.
    ///
    /// The value is advisory and `0` when the system cannot tell.
    pub fn hardware_concurrency() -> u32 {
        platform::hardware_concurrency()
    }
}

impl Default for Thread {
    /// Creates an empty handle.
    fn default() -> Self {
        Self {
            native: None,
            id: ThreadId::NONE,
        }
    }
}

impl Drop for Thread {
    fn drop(&mut self) {
        if self.joinable() {
            error!(thread = %self.id, "joinable Thread dropped, aborting");
            process::abort();
        }
    }
}

impl fmt::Debug for Thread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thread")
            .field("id", &self.id)
            .field("joinable", &self.joinable())
            .finish()
    }
}
