//! Lock-based fallback.
//!
//! Every operation takes a [`Mutex`] for its whole duration, which makes
//! each one sequentially consistent. The requested memory order is
//! accepted for interface parity and otherwise ignored; callers on this
//! path get no benefit from weaker orders.

use super::{AtomicCell, FlagBackend};
use crate::atomic::order::MemoryOrder;
use crate::atomic::value::AtomicValue;
use crate::sync::{LockGuard, Mutex};

use std::cell::UnsafeCell;

/// Flag stored next to the mutex that guards it.
pub(crate) struct LockedFlag {
    lock: Mutex,
    flag: UnsafeCell<bool>,
}

// Safety: `flag` is only read or written while `lock` is held.
unsafe impl Send for LockedFlag {}
unsafe impl Sync for LockedFlag {}

impl FlagBackend for LockedFlag {
    const LOCK_FREE: bool = false;

    fn new(set: bool) -> Self {
        Self {
            lock: Mutex::new(),
            flag: UnsafeCell::new(set),
        }
    }

    fn test_and_set(&self, _order: MemoryOrder) -> bool {
        let _guard = LockGuard::new(&self.lock);

        let flag = unsafe { &mut *self.flag.get() };
        let previous = *flag;
        *flag = true;
        previous
    }

    fn clear(&self, _order: MemoryOrder) {
        let _guard = LockGuard::new(&self.lock);
        unsafe { *self.flag.get() = false };
    }
}

/// Value stored next to the mutex that guards it.
pub struct LockedCell<T> {
    lock: Mutex,
    value: UnsafeCell<T>,
}

// Safety: `value` is only read or written while `lock` is held.
unsafe impl<T: Send> Send for LockedCell<T> {}
unsafe impl<T: Send> Sync for LockedCell<T> {}

impl<T: AtomicValue> LockedCell<T> {
    /// Runs `f` on the value with the lock held.
    fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let _guard = LockGuard::new(&self.lock);
        f(unsafe { &mut *self.value.get() })
    }
}

impl<T: AtomicValue> AtomicCell<T> for LockedCell<T> {
    const LOCK_FREE: bool = false;

    fn new(value: T) -> Self {
        Self {
            lock: Mutex::new(),
            value: UnsafeCell::new(value),
        }
    }

    fn load(&self, _order: MemoryOrder) -> T {
        self.with(|value| *value)
    }

    fn store(&self, value: T, _order: MemoryOrder) {
        self.with(|current| *current = value);
    }

    fn swap(&self, value: T, _order: MemoryOrder) -> T {
        self.with(|current| std::mem::replace(current, value))
    }

    fn fetch_add(&self, value: T, _order: MemoryOrder) -> T {
        self.with(|current| {
            let previous = *current;
            *current = previous.wrapping_add(value);
            previous
        })
    }

    fn fetch_sub(&self, value: T, _order: MemoryOrder) -> T {
        self.with(|current| {
            let previous = *current;
            *current = previous.wrapping_sub(value);
            previous
        })
    }
}
