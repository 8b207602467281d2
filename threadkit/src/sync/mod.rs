//! Blocking synchronization primitives.
//!
//! This module provides the lock and signaling types of the crate:
//! - [`Mutex`]: a non-recursive mutual exclusion lock,
//! - [`RecursiveMutex`]: a lock its owner may take repeatedly,
//! - [`FastMutex`]: a spin lock built on [`AtomicFlag`](crate::AtomicFlag),
//! - [`LockGuard`]: scoped ownership of any of the above,
//! - [`Condvar`]: wait/notify signaling paired with a mutex.
//!
//! ## Design notes
//!
//! - The locks do not wrap data. They are opaque objects that protect
//!   whatever the caller associates with them, like their pthread and
//!   Win32 counterparts.
//! - Blocking happens in the operating system scheduler. Nothing here is
//!   asynchronous and nothing can time out; [`Lockable::try_lock`] is the
//!   only non-blocking operation.
//! - Mutexes must be unlocked when dropped.

mod condvar;
mod fast;
mod guard;
mod lockable;
mod mutex;
mod recursive;

pub use condvar::{Condvar, CondvarLock};
pub use fast::FastMutex;
pub use guard::LockGuard;
pub use lockable::Lockable;
pub use mutex::Mutex;
pub use recursive::RecursiveMutex;
