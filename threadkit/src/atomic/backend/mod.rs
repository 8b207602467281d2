//! Atomic backend strategies.
//!
//! Three interchangeable implementations, in priority order:
//!
//! - [`intrinsic`]: `core::sync::atomic` types, lock-free and honoring the
//!   requested memory order,
//! - [`asm`]: an `xchg`-based flag in inline assembly (x86/x86_64 only),
//! - [`locked`]: a value guarded by a [`Mutex`](crate::sync::Mutex),
//!   always sequentially consistent.
//!
//! The backend is fixed at compile time by the `asm-atomics` and
//! `locked-atomics` features and by the target's atomic widths. Nothing
//! is detected at run time.

use super::order::MemoryOrder;

// Only one flag backend is selected per build; the others stay compiled
// for the tests.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[allow(dead_code)]
pub(crate) mod asm;
#[allow(dead_code)]
pub(crate) mod intrinsic;
#[allow(dead_code)]
pub(crate) mod locked;

/// Storage strategy for [`AtomicFlag`](super::AtomicFlag).
pub(crate) trait FlagBackend: Send + Sync {
    /// Whether operations complete without taking a lock.
    const LOCK_FREE: bool;

    fn new(set: bool) -> Self;

    /// Sets the flag and returns its previous value.
    fn test_and_set(&self, order: MemoryOrder) -> bool;

    fn clear(&self, order: MemoryOrder);
}

/// Storage strategy for [`Atomic<T>`](super::Atomic).
///
/// Arithmetic wraps on overflow for every implementation.
pub trait AtomicCell<T>: Send + Sync {
    /// Whether operations complete without taking a lock.
    const LOCK_FREE: bool;

    fn new(value: T) -> Self;

    fn load(&self, order: MemoryOrder) -> T;

    fn store(&self, value: T, order: MemoryOrder);

    /// Replaces the value, returning the previous one.
    fn swap(&self, value: T, order: MemoryOrder) -> T;

    /// Adds `value`, returning the previous value.
    fn fetch_add(&self, value: T, order: MemoryOrder) -> T;

    /// Subtracts `value`, returning the previous value.
    fn fetch_sub(&self, value: T, order: MemoryOrder) -> T;
}

#[cfg(any(
    feature = "locked-atomics",
    all(
        not(all(
            feature = "asm-atomics",
            any(target_arch = "x86", target_arch = "x86_64")
        )),
        not(target_has_atomic = "8")
    )
))]
pub(crate) type DefaultFlag = locked::LockedFlag;

#[cfg(all(
    not(feature = "locked-atomics"),
    feature = "asm-atomics",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub(crate) type DefaultFlag = asm::AsmFlag;

#[cfg(all(
    not(feature = "locked-atomics"),
    not(all(
        feature = "asm-atomics",
        any(target_arch = "x86", target_arch = "x86_64")
    )),
    target_has_atomic = "8"
))]
pub(crate) type DefaultFlag = intrinsic::IntrinsicFlag;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::Thread;

    use std::sync::Arc;

    fn exercise_flag<F: FlagBackend>() {
        let flag = F::new(false);

        assert!(!flag.test_and_set(MemoryOrder::SeqCst));
        assert!(flag.test_and_set(MemoryOrder::Relaxed));
        assert!(flag.test_and_set(MemoryOrder::Acquire));

        flag.clear(MemoryOrder::Release);
        assert!(!flag.test_and_set(MemoryOrder::AcqRel));

        flag.clear(MemoryOrder::Consume);
        let preset = F::new(true);
        assert!(preset.test_and_set(MemoryOrder::SeqCst));
    }

    fn exercise_cell<C: AtomicCell<i32>>() {
        let cell = C::new(5);

        assert_eq!(cell.load(MemoryOrder::SeqCst), 5);
        assert_eq!(cell.fetch_add(3, MemoryOrder::Relaxed), 5);
        assert_eq!(cell.fetch_sub(10, MemoryOrder::AcqRel), 8);
        assert_eq!(cell.load(MemoryOrder::Release), -2);
        assert_eq!(cell.swap(i32::MAX, MemoryOrder::Consume), -2);
        assert_eq!(cell.fetch_add(1, MemoryOrder::SeqCst), i32::MAX);
        assert_eq!(cell.load(MemoryOrder::Acquire), i32::MIN);

        cell.store(42, MemoryOrder::Acquire);
        assert_eq!(cell.load(MemoryOrder::Relaxed), 42);
    }

    /// Uses the flag as a spin lock around a non-atomic counter.
    fn contend_flag<F: FlagBackend + 'static>() {
        struct Shared<F> {
            flag: F,
            count: std::cell::UnsafeCell<u32>,
        }
        unsafe impl<F: Sync> Sync for Shared<F> {}

        let shared = Arc::new(Shared {
            flag: F::new(false),
            count: std::cell::UnsafeCell::new(0),
        });

        let mut threads: Vec<Thread> = (0..4)
            .map(|_| {
                Thread::new(
                    |shared: Arc<Shared<F>>| {
                        for _ in 0..1000 {
                            while shared.flag.test_and_set(MemoryOrder::Acquire) {
                                std::hint::spin_loop();
                            }
                            unsafe { *shared.count.get() += 1 };
                            shared.flag.clear(MemoryOrder::Release);
                        }
                    },
                    shared.clone(),
                )
            })
            .collect();

        for thread in &mut threads {
            thread.join();
        }

        assert_eq!(unsafe { *shared.count.get() }, 4000);
    }

    #[test]
    fn test_intrinsic_flag() {
        exercise_flag::<intrinsic::IntrinsicFlag>();
        contend_flag::<intrinsic::IntrinsicFlag>();
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[test]
    fn test_asm_flag() {
        exercise_flag::<asm::AsmFlag>();
        contend_flag::<asm::AsmFlag>();
    }

    #[test]
    fn test_locked_flag() {
        exercise_flag::<locked::LockedFlag>();
        contend_flag::<locked::LockedFlag>();
    }

    #[test]
    fn test_intrinsic_cell() {
        exercise_cell::<std::sync::atomic::AtomicI32>();
        assert!(<std::sync::atomic::AtomicI32 as AtomicCell<i32>>::LOCK_FREE);
    }

    #[test]
    fn test_locked_cell() {
        exercise_cell::<locked::LockedCell<i32>>();
        assert!(!<locked::LockedCell<i32> as AtomicCell<i32>>::LOCK_FREE);
    }

    fn contend_cell<C: AtomicCell<u64> + 'static>() {
        let cell = Arc::new(C::new(0));

        let mut threads: Vec<Thread> = (0..4)
            .map(|_| {
                Thread::new(
                    |cell: Arc<C>| {
                        for _ in 0..1000 {
                            cell.fetch_add(2, MemoryOrder::Relaxed);
                            cell.fetch_sub(1, MemoryOrder::Relaxed);
                        }
                    },
                    cell.clone(),
                )
            })
            .collect();

        for thread in &mut threads {
            thread.join();
        }

        assert_eq!(cell.load(MemoryOrder::SeqCst), 4000);
    }

    #[cfg(target_has_atomic = "64")]
    #[test]
    fn test_intrinsic_cell_under_contention() {
        contend_cell::<std::sync::atomic::AtomicU64>();
    }

    #[test]
    fn test_locked_cell_under_contention() {
        contend_cell::<locked::LockedCell<u64>>();
    }
}
