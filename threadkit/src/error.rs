//! Errors reported by the crate.
//!
//! Only thread creation through [`Builder`](crate::Builder) can fail in a
//! recoverable way. Every other contract violation either deadlocks the
//! caller (as documented on the offending type) or aborts the process.

use std::io;

use thiserror::Error;

/// Error returned by [`Builder::spawn`](crate::Builder::spawn).
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system refused to create the thread.
    #[error("failed to spawn thread: {0}")]
    Spawn(#[source] io::Error),

    /// The requested thread name contains a NUL byte.
    #[error("thread name contains an interior NUL byte")]
    InvalidName,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
