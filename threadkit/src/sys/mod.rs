//! Platform-specific threading backend.
//!
//! This module provides a unified interface over the native threading
//! primitives of each operating system family:
//!
//! - POSIX threads (`pthread_mutex_t`, `pthread_cond_t`, `pthread_create`),
//! - Win32 critical sections, events and `CreateThread`.
//!
//! Both backends expose identical type and function names with identical
//! semantics. The concrete implementation is selected at compile time and
//! re-exported as [`platform`]; the rest of the crate never names a backend
//! directly.

pub(crate) mod common;

pub(crate) use common::RawLock;

#[cfg(unix)]
pub(crate) mod unix;

#[cfg(windows)]
pub(crate) mod windows;

#[cfg(unix)]
pub(crate) use unix as platform;

#[cfg(windows)]
pub(crate) use windows as platform;
