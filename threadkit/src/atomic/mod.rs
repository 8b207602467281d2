//! Atomic flag and atomic integers.
//!
//! This module provides:
//! - [`AtomicFlag`]: a boolean with test-and-set and clear,
//! - [`Atomic<T>`]: an integer cell with load, store and
//!   read-modify-write operations,
//! - [`MemoryOrder`]: the ordering hint every operation accepts.
//!
//! ## Backends
//!
//! Operations are carried out by one of three strategies, fixed at
//! compile time:
//!
//! | strategy      | used when                                         | orders honored |
//! |---------------|---------------------------------------------------|----------------|
//! | intrinsic     | default, target has atomics of the needed width   | yes            |
//! | inline `xchg` | `asm-atomics` feature on x86/x86_64 (flag only)   | always full barrier |
//! | mutex-guarded | `locked-atomics` feature, or no hardware support  | always `SeqCst` |
//!
//! The fallback upgrades every order to sequentially
//! consistent. Code that must run on it should not count on weaker
//! orders being cheaper.

mod backend;
mod cell;
mod flag;
mod order;
mod value;

pub use cell::Atomic;
pub use flag::AtomicFlag;
pub use order::MemoryOrder;
pub use value::AtomicValue;

/// Atomic `char`-sized signed integer.
pub type AtomicChar = Atomic<i8>;
/// Atomic signed `char`.
pub type AtomicSChar = Atomic<i8>;
/// Atomic unsigned `char`.
pub type AtomicUChar = Atomic<u8>;
/// Atomic `short`.
pub type AtomicShort = Atomic<i16>;
/// Atomic unsigned `short`.
pub type AtomicUShort = Atomic<u16>;
/// Atomic `int`.
pub type AtomicInt = Atomic<i32>;
/// Atomic unsigned `int`.
pub type AtomicUInt = Atomic<u32>;
/// Atomic `long` (pointer sized).
pub type AtomicLong = Atomic<isize>;
/// Atomic unsigned `long` (pointer sized).
pub type AtomicULong = Atomic<usize>;
/// Atomic `long long`.
pub type AtomicLLong = Atomic<i64>;
/// Atomic unsigned `long long`.
pub type AtomicULLong = Atomic<u64>;
