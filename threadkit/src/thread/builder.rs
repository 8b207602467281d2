use super::Thread;
use super::context::enter_thread;
use super::id::ThreadId;
use crate::error::{Error, Result};
use crate::sys::platform;

use std::ffi::CString;
use std::panic::{self, AssertUnwindSafe};
use std::process;

use tracing::{debug, error};

/// Builder for configuring and starting a thread.
///
/// `Builder` exposes the options the native thread APIs accept at
/// creation time: a name and a stack size. Unlike [`Thread::new`], its
/// [`spawn`](Self::spawn) reports creation failures.
///
/// # Examples
///
/// ```rust
/// use threadkit::Builder;
///
/// let mut thread = Builder::new()
///     .name("worker")
///     .stack_size(256 * 1024)
///     .spawn(|n: u32| assert_eq!(n, 7), 7)
///     .expect("failed to spawn");
///
/// thread.join();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    /// Name given to the native thread.
    name: Option<String>,

    /// Stack size in bytes; the platform default when unset.
    stack_size: Option<usize>,
}

impl Builder {
    /// Creates a `Builder` with the platform defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the thread.
    ///
    /// Platforms with a length limit (15 bytes on Linux) truncate the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the stack size of the thread, in bytes.
    ///
    /// The size is rounded up to what the platform accepts.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn stack_size(mut self, size: usize) -> Self {
        assert!(size > 0, "stack_size must be > 0");

        self.stack_size = Some(size);
        self
    }

    /// Starts `routine(arg)` on a new thread.
    ///
    /// The returned handle is joinable. If the routine panics, the process
    /// is aborted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name contains a NUL byte and
    /// [`Error::Spawn`] if the operating system refuses to create the
    /// thread.
    pub fn spawn<F, A>(self, routine: F, arg: A) -> Result<Thread>
    where
        F: FnOnce(A) + Send + 'static,
        A: Send + 'static,
    {
        let native_name = self
            .name
            .as_deref()
            .map(CString::new)
            .transpose()
            .map_err(|_| Error::InvalidName)?;

        let id = ThreadId::allocate();

        let main = move || {
            enter_thread(id, move || {
                if let Some(name) = &native_name {
                    platform::set_current_name(name);
                }

                let outcome = panic::catch_unwind(AssertUnwindSafe(move || routine(arg)));
                if outcome.is_err() {
                    error!(thread = %id, "thread routine panicked, aborting");
                    process::abort();
                }
            })
        };

        let native =
            platform::NativeThread::spawn(self.stack_size, Box::new(main)).map_err(Error::Spawn)?;

        debug!(
            thread = %id,
            name = self.name.as_deref().unwrap_or(""),
            stack_size = ?self.stack_size,
            "spawned thread"
        );

        Ok(Thread {
            native: Some(native),
            id,
        })
    }
}
