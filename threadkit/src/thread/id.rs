use crate::atomic::{Atomic, MemoryOrder};

use std::fmt;
use std::sync::LazyLock;

/// Source of thread ids. `0` is reserved for "no thread".
static NEXT_ID: LazyLock<Atomic<u64>> = LazyLock::new(|| Atomic::new(1));

/// A unique identifier for a thread.
///
/// Ids are totally ordered, hashable and printable. They stay valid after
/// the [`Thread`](super::Thread) they came from is joined, detached or
/// dropped, and are never handed to another thread within the same
/// process.
///
/// `ThreadId::default()` identifies no thread; it is what an empty
/// [`Thread`](super::Thread) handle reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ThreadId(u64);

impl ThreadId {
    /// The id of no thread.
    pub(crate) const NONE: ThreadId = ThreadId(0);

    /// Hands out the next unused id.
    pub(crate) fn allocate() -> Self {
        Self(NEXT_ID.fetch_add(1, MemoryOrder::Relaxed))
    }

    /// Returns `true` for the id of no thread.
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// The raw numeric value of the id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
