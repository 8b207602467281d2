//! Inline-assembly flag for x86 and x86_64.
//!
//! `xchg` with a memory operand is implicitly locked and acts as a full
//! barrier, so the requested memory order is accepted but never weakens
//! anything.

use super::FlagBackend;
use crate::atomic::order::MemoryOrder;

use std::arch::asm;
use std::cell::UnsafeCell;

/// Flag driven by a raw `xchg` instruction.
pub(crate) struct AsmFlag {
    flag: UnsafeCell<u32>,
}

// Safety: every access to `flag` goes through a locked `xchg`.
unsafe impl Send for AsmFlag {}
unsafe impl Sync for AsmFlag {}

impl AsmFlag {
    /// Atomically stores `value` and returns the previous contents.
    fn exchange(&self, value: u32) -> u32 {
        let mut value = value;

        unsafe {
            asm!(
                "xchg {value:e}, dword ptr [{flag}]",
                value = inout(reg) value,
                flag = in(reg) self.flag.get(),
                options(nostack, preserves_flags),
            );
        }

        value
    }
}

impl FlagBackend for AsmFlag {
    const LOCK_FREE: bool = true;

    fn new(set: bool) -> Self {
        Self {
            flag: UnsafeCell::new(set as u32),
        }
    }

    fn test_and_set(&self, _order: MemoryOrder) -> bool {
        self.exchange(1) != 0
    }

    fn clear(&self, _order: MemoryOrder) {
        self.exchange(0);
    }
}
