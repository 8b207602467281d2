use super::backend::AtomicCell;
use super::order::MemoryOrder;
use super::value::AtomicValue;

use std::fmt;

/// An integer that can be shared and modified between threads.
///
/// Every operation takes a [`MemoryOrder`]. On the lock-free path the
/// order is passed through to the hardware; on the lock-based fallback
/// (targets without atomics of this width, or the `locked-atomics`
/// feature) it is ignored and every operation is sequentially consistent.
///
/// Arithmetic wraps on overflow.
///
/// # Examples
///
/// ```rust
/// use threadkit::{Atomic, MemoryOrder};
///
/// let hits = Atomic::new(0u32);
///
/// assert_eq!(hits.fetch_add(5, MemoryOrder::Relaxed), 0);
/// assert_eq!(hits.pre_increment(), 6);
/// assert_eq!(hits.post_decrement(), 6);
/// assert_eq!(hits.load(MemoryOrder::SeqCst), 5);
/// ```
pub struct Atomic<T: AtomicValue> {
    cell: T::Cell,
}

impl<T: AtomicValue> Atomic<T> {
    /// Creates a new atomic holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            cell: T::Cell::new(value),
        }
    }

    /// Returns `true` if operations on this type complete without a lock.
    pub fn is_lock_free(&self) -> bool {
        <T::Cell as AtomicCell<T>>::LOCK_FREE
    }

    /// Atomically reads the current value.
    pub fn load(&self, order: MemoryOrder) -> T {
        self.cell.load(order)
    }

    /// Atomically replaces the current value.
    pub fn store(&self, value: T, order: MemoryOrder) {
        self.cell.store(value, order)
    }

    /// Atomically replaces the current value, returning the previous one.
    pub fn swap(&self, value: T, order: MemoryOrder) -> T {
        self.cell.swap(value, order)
    }

    /// Atomically adds `value`, returning the value held before.
    pub fn fetch_add(&self, value: T, order: MemoryOrder) -> T {
        self.cell.fetch_add(value, order)
    }

    /// Atomically subtracts `value`, returning the value held before.
    pub fn fetch_sub(&self, value: T, order: MemoryOrder) -> T {
        self.cell.fetch_sub(value, order)
    }

    /// Sequentially consistent [`load`](Self::load).
    pub fn get(&self) -> T {
        self.load(MemoryOrder::SeqCst)
    }

    /// Sequentially consistent [`store`](Self::store); returns `value`.
    pub fn set(&self, value: T) -> T {
        self.store(value, MemoryOrder::SeqCst);
        value
    }

    /// Increments and returns the new value (`++x`).
    pub fn pre_increment(&self) -> T {
        self.fetch_add(T::ONE, MemoryOrder::SeqCst)
            .wrapping_add(T::ONE)
    }

    /// Increments and returns the previous value (`x++`).
    pub fn post_increment(&self) -> T {
        self.fetch_add(T::ONE, MemoryOrder::SeqCst)
    }

    /// Decrements and returns the new value (`--x`).
    pub fn pre_decrement(&self) -> T {
        self.fetch_sub(T::ONE, MemoryOrder::SeqCst)
            .wrapping_sub(T::ONE)
    }

    /// Decrements and returns the previous value (`x--`).
    pub fn post_decrement(&self) -> T {
        self.fetch_sub(T::ONE, MemoryOrder::SeqCst)
    }
}

impl<T: AtomicValue + Default> Default for Atomic<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: AtomicValue> From<T> for Atomic<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: AtomicValue + fmt::Debug> fmt::Debug for Atomic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}
