//! # Threadkit
//!
//! **Threadkit** is a small, portable set of threading primitives for Rust:
//! native threads, mutexes, condition variables, atomics and sleeping, with
//! one API over POSIX threads and the Win32 threading calls.
//!
//! The primitives follow the classic lock-based model. Locks are opaque
//! objects that protect whatever the caller associates with them, a thread
//! handle must be joined or detached before it is dropped, and atomic
//! operations take an explicit [`MemoryOrder`].
//!
//! - **Threads**: [`Thread`], [`Builder`], [`ThreadId`] and the
//!   [`this_thread`] functions
//! - **Locks**: [`Mutex`], [`RecursiveMutex`], [`FastMutex`] and the scoped
//!   [`LockGuard`]
//! - **Signaling**: [`Condvar`], usable with either mutex type
//! - **Atomics**: [`AtomicFlag`] and [`Atomic<T>`](Atomic) with three
//!   compile-time backends
//! - **Time**: [`time::Duration`] with compile-time units, and `sleep_for`
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use threadkit::{Atomic, LockGuard, MemoryOrder, Mutex, Thread};
//!
//! let lock = Arc::new(Mutex::new());
//! let hits = Arc::new(Atomic::<u32>::new(0));
//!
//! let mut workers: Vec<Thread> = (0..4)
//!     .map(|_| {
//!         let lock = lock.clone();
//!         let hits = hits.clone();
//!
//!         Thread::spawn(move || {
//!             let _guard = LockGuard::new(&*lock);
//!             hits.fetch_add(1, MemoryOrder::SeqCst);
//!         })
//!     })
//!     .collect();
//!
//! for worker in &mut workers {
//!     worker.join();
//! }
//!
//! assert_eq!(hits.load(MemoryOrder::SeqCst), 4);
//! ```
//!
//! ## Modules
//!
//! - [`atomic`]: atomic flag and integers, memory orders
//! - [`sync`]: mutexes, lock guard and condition variable
//! - [`thread`]: thread handles, builder and ids
//! - [`time`]: durations, units and sleeping
//!
//! ## Features
//!
//! - `asm-atomics`: implement [`AtomicFlag`] with an inline `xchg` on
//!   x86 and x86_64
//! - `locked-atomics`: implement every atomic with a mutex, for targets
//!   without native atomics or for testing the fallback
//!
//! ## Logging
//!
//! Thread lifecycle events are reported through [`tracing`]. Install a
//! subscriber to see them; without one they cost nothing.

mod error;
mod sys;

pub mod atomic;
pub mod sync;
pub mod thread;
pub mod time;

pub use atomic::{Atomic, AtomicFlag, MemoryOrder};
pub use error::{Error, Result};
pub use sync::{Condvar, FastMutex, LockGuard, Lockable, Mutex, RecursiveMutex};
pub use thread::{Builder, Thread, ThreadId, this_thread};
