use std::sync::atomic::Ordering;

/// Memory synchronization ordering for an atomic operation.
///
/// Every atomic operation in this crate accepts one. Only the lock-free
/// (intrinsic) backends distinguish between them; the lock-based fallback
/// treats every request as [`SeqCst`](MemoryOrder::SeqCst), and the
/// inline-assembly flag is a full barrier regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemoryOrder {
    /// No ordering constraint beyond atomicity of this operation.
    Relaxed,

    /// Orders reads that depend on the loaded value. Treated as
    /// [`Acquire`](MemoryOrder::Acquire).
    Consume,

    /// No read or write in the current thread can move before this load.
    Acquire,

    /// No read or write in the current thread can move after this store.
    Release,

    /// Both [`Acquire`](MemoryOrder::Acquire) and
    /// [`Release`](MemoryOrder::Release), for read-modify-write operations.
    AcqRel,

    /// Acquire-release plus a single total order of all such operations.
    #[default]
    SeqCst,
}

impl MemoryOrder {
    /// Ordering for a plain load. Store-only orders are strengthened.
    pub(crate) fn for_load(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume
            | MemoryOrder::Acquire
            | MemoryOrder::Release
            | MemoryOrder::AcqRel => Ordering::Acquire,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// Ordering for a plain store. Load-only orders are strengthened.
    pub(crate) fn for_store(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume
            | MemoryOrder::Acquire
            | MemoryOrder::Release
            | MemoryOrder::AcqRel => Ordering::Release,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// Ordering for a read-modify-write operation.
    pub(crate) fn for_rmw(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire => Ordering::Acquire,
            MemoryOrder::Release => Ordering::Release,
            MemoryOrder::AcqRel => Ordering::AcqRel,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_orders_are_strengthened() {
        assert_eq!(MemoryOrder::Release.for_load(), Ordering::Acquire);
        assert_eq!(MemoryOrder::AcqRel.for_load(), Ordering::Acquire);
        assert_eq!(MemoryOrder::Acquire.for_store(), Ordering::Release);
        assert_eq!(MemoryOrder::Consume.for_store(), Ordering::Release);
        assert_eq!(MemoryOrder::Consume.for_rmw(), Ordering::Acquire);
    }

    #[test]
    fn test_valid_orders_pass_through() {
        assert_eq!(MemoryOrder::Relaxed.for_load(), Ordering::Relaxed);
        assert_eq!(MemoryOrder::SeqCst.for_store(), Ordering::SeqCst);
        assert_eq!(MemoryOrder::AcqRel.for_rmw(), Ordering::AcqRel);
        assert_eq!(MemoryOrder::default(), MemoryOrder::SeqCst);
    }
}
