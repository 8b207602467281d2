//! Lock-free backend built on `core::sync::atomic`.

use super::{AtomicCell, FlagBackend};
use crate::atomic::order::MemoryOrder;

use std::sync::atomic::AtomicBool;

/// Flag backed by a hardware atomic exchange.
pub(crate) struct IntrinsicFlag(AtomicBool);

impl FlagBackend for IntrinsicFlag {
    const LOCK_FREE: bool = true;

    fn new(set: bool) -> Self {
        Self(AtomicBool::new(set))
    }

    fn test_and_set(&self, order: MemoryOrder) -> bool {
        self.0.swap(true, order.for_rmw())
    }

    fn clear(&self, order: MemoryOrder) {
        self.0.store(false, order.for_store());
    }
}

macro_rules! intrinsic_cell {
    ($($width:tt => $($atomic:ident($ty:ty)),+;)*) => {$($(
        #[cfg(target_has_atomic = $width)]
        impl AtomicCell<$ty> for std::sync::atomic::$atomic {
            const LOCK_FREE: bool = true;

            fn new(value: $ty) -> Self {
                std::sync::atomic::$atomic::new(value)
            }

            fn load(&self, order: MemoryOrder) -> $ty {
                std::sync::atomic::$atomic::load(self, order.for_load())
            }

            fn store(&self, value: $ty, order: MemoryOrder) {
                std::sync::atomic::$atomic::store(self, value, order.for_store())
            }

            fn swap(&self, value: $ty, order: MemoryOrder) -> $ty {
                std::sync::atomic::$atomic::swap(self, value, order.for_rmw())
            }

            fn fetch_add(&self, value: $ty, order: MemoryOrder) -> $ty {
                std::sync::atomic::$atomic::fetch_add(self, value, order.for_rmw())
            }

            fn fetch_sub(&self, value: $ty, order: MemoryOrder) -> $ty {
                std::sync::atomic::$atomic::fetch_sub(self, value, order.for_rmw())
            }
        }
    )+)*};
}

intrinsic_cell! {
    "8" => AtomicI8(i8), AtomicU8(u8);
    "16" => AtomicI16(i16), AtomicU16(u16);
    "32" => AtomicI32(i32), AtomicU32(u32);
    "64" => AtomicI64(i64), AtomicU64(u64);
    "ptr" => AtomicIsize(isize), AtomicUsize(usize);
}
