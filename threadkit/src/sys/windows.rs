//! Windows platform layer.
//!
//! This module provides the Win32 implementation of the threading
//! backend. It mirrors the POSIX layer and exposes identical type and
//! function names.
//!
//! Win32 critical sections are always recursive, so the non-recursive
//! mutex tracks ownership itself. Condition variables are emulated with a
//! waiter count and two events (one auto-reset for `notify_one`, one
//! manual-reset for `notify_all`).

use super::common::{MIN_STACK_SIZE, RawLock, ThreadMain};

use std::cell::UnsafeCell;
use std::ffi::{CStr, c_void};
use std::sync::atomic::{AtomicBool, Ordering};
use std::{io, mem, ptr};

use windows_sys::Win32::Foundation::{CloseHandle, HANDLE, WAIT_OBJECT_0};
use windows_sys::Win32::System::SystemInformation::{GetSystemInfo, SYSTEM_INFO};
use windows_sys::Win32::System::Threading::{
    CRITICAL_SECTION, CreateEventW, CreateThread, DeleteCriticalSection, EnterCriticalSection,
    GetCurrentThread, INFINITE, InitializeCriticalSection, LeaveCriticalSection, ResetEvent,
    STACK_SIZE_PARAM_IS_A_RESERVATION, SetEvent, SetThreadDescription, Sleep,
    TryEnterCriticalSection, WaitForMultipleObjects, WaitForSingleObject,
};

/// Native thread handle type.
pub(crate) type RawThread = HANDLE;

/// Sleep granularity: `Sleep` takes milliseconds.
pub(crate) const TICKS_PER_SECOND: i64 = 1_000;

const FALSE: i32 = 0;
const TRUE: i32 = 1;

/// Owning wrapper around a heap-pinned `CRITICAL_SECTION`.
struct CriticalSection(Box<UnsafeCell<CRITICAL_SECTION>>);

impl CriticalSection {
    fn new() -> Self {
        let section = Box::new(UnsafeCell::new(unsafe { mem::zeroed() }));
        unsafe { InitializeCriticalSection(section.get()) };

        Self(section)
    }

    fn enter(&self) {
        unsafe { EnterCriticalSection(self.0.get()) };
    }

    fn try_enter(&self) -> bool {
        unsafe { TryEnterCriticalSection(self.0.get()) != 0 }
    }

    fn leave(&self) {
        unsafe { LeaveCriticalSection(self.0.get()) };
    }
}

impl Drop for CriticalSection {
    fn drop(&mut self) {
        unsafe { DeleteCriticalSection(self.0.get()) };
    }
}

unsafe impl Send for CriticalSection {}
unsafe impl Sync for CriticalSection {}

/// Locks the emulated condition variable can release and reacquire.
pub(crate) trait CondvarLock: RawLock {}

/// Non-recursive mutex.
///
/// `already_locked` is only touched while the critical section is held.
/// A thread re-entering its own critical section finds it set and sleeps
/// until it clears, which never happens.
pub(crate) struct Mutex {
    section: CriticalSection,
    already_locked: AtomicBool,
}

impl Mutex {
    pub(crate) fn new() -> Self {
        Self {
            section: CriticalSection::new(),
            already_locked: AtomicBool::new(false),
        }
    }
}

impl RawLock for Mutex {
    fn lock(&self) {
        self.section.enter();

        while self.already_locked.load(Ordering::Relaxed) {
            unsafe { Sleep(1000) };
        }

        self.already_locked.store(true, Ordering::Relaxed);
    }

    fn try_lock(&self) -> bool {
        if !self.section.try_enter() {
            return false;
        }

        if self.already_locked.load(Ordering::Relaxed) {
            self.section.leave();
            return false;
        }

        self.already_locked.store(true, Ordering::Relaxed);
        true
    }

    unsafe fn unlock(&self) {
        self.already_locked.store(false, Ordering::Relaxed);
        self.section.leave();
    }
}

impl CondvarLock for Mutex {}

/// Recursive mutex; the critical section keeps the acquisition count.
pub(crate) struct RecursiveMutex {
    section: CriticalSection,
}

impl RecursiveMutex {
    pub(crate) fn new() -> Self {
        Self {
            section: CriticalSection::new(),
        }
    }
}

impl RawLock for RecursiveMutex {
    fn lock(&self) {
        self.section.enter();
    }

    fn try_lock(&self) -> bool {
        self.section.try_enter()
    }

    unsafe fn unlock(&self) {
        self.section.leave();
    }
}

impl CondvarLock for RecursiveMutex {}

/// Index of the auto-reset event used by `notify_one`.
const SIGNAL: usize = 0;

/// Index of the manual-reset event used by `notify_all`.
const BROADCAST: usize = 1;

/// Emulated condition variable.
pub(crate) struct Condvar {
    events: [HANDLE; 2],

    /// Number of threads between registering and finishing a wait.
    /// Guarded by `waiters_lock`.
    waiters: UnsafeCell<u32>,
    waiters_lock: CriticalSection,
}

unsafe impl Send for Condvar {}
unsafe impl Sync for Condvar {}

impl Condvar {
    pub(crate) fn new() -> Self {
        let signal = unsafe { CreateEventW(ptr::null(), FALSE, FALSE, ptr::null()) };
        assert!(!signal.is_null(), "CreateEventW failed");

        let broadcast = unsafe { CreateEventW(ptr::null(), TRUE, FALSE, ptr::null()) };
        assert!(!broadcast.is_null(), "CreateEventW failed");

        Self {
            events: [signal, broadcast],
            waiters: UnsafeCell::new(0),
            waiters_lock: CriticalSection::new(),
        }
    }

    /// Releases `lock`, blocks until signalled, then reacquires `lock`.
    ///
    /// The waiter is counted before `lock` is released, so a notification
    /// issued after the caller's predicate check is never lost.
    ///
    /// # Safety
    ///
    /// The calling thread must hold `lock`.
    pub(crate) unsafe fn wait<L: CondvarLock>(&self, lock: &L) {
        self.waiters_lock.enter();
        unsafe { *self.waiters.get() += 1 };
        self.waiters_lock.leave();

        unsafe { lock.unlock() };
        self.park();
        lock.lock();
    }

    fn park(&self) {
        let result = unsafe { WaitForMultipleObjects(2, self.events.as_ptr(), FALSE, INFINITE) };

        self.waiters_lock.enter();
        let last_waiter = unsafe {
            let waiters = &mut *self.waiters.get();
            *waiters -= 1;
            result == WAIT_OBJECT_0 + BROADCAST as u32 && *waiters == 0
        };
        self.waiters_lock.leave();

        if last_waiter {
            unsafe { ResetEvent(self.events[BROADCAST]) };
        }
    }

    fn has_waiters(&self) -> bool {
        self.waiters_lock.enter();
        let waiting = unsafe { *self.waiters.get() } > 0;
        self.waiters_lock.leave();

        waiting
    }

    pub(crate) fn notify_one(&self) {
        if self.has_waiters() {
            unsafe { SetEvent(self.events[SIGNAL]) };
        }
    }

    pub(crate) fn notify_all(&self) {
        if self.has_waiters() {
            unsafe { SetEvent(self.events[BROADCAST]) };
        }
    }
}

impl Drop for Condvar {
    fn drop(&mut self) {
        for event in self.events {
            unsafe { CloseHandle(event) };
        }
    }
}

/// A started thread that has been neither joined nor detached.
pub(crate) struct NativeThread {
    handle: HANDLE,
}

unsafe impl Send for NativeThread {}
unsafe impl Sync for NativeThread {}

impl NativeThread {
    /// Starts `main` on a new thread.
    pub(crate) fn spawn(stack_size: Option<usize>, main: ThreadMain) -> io::Result<Self> {
        let payload = Box::into_raw(Box::new(main));

        let (size, flags) = match stack_size {
            Some(size) => (size.max(MIN_STACK_SIZE), STACK_SIZE_PARAM_IS_A_RESERVATION),
            None => (0, 0),
        };

        let handle = unsafe {
            CreateThread(
                ptr::null(),
                size,
                Some(thread_start),
                payload as *const c_void,
                flags,
                ptr::null_mut(),
            )
        };

        if handle.is_null() {
            let error = io::Error::last_os_error();
            drop(unsafe { Box::from_raw(payload) });
            return Err(error);
        }

        Ok(Self { handle })
    }

    /// Blocks until the thread has finished, then closes its handle.
    pub(crate) fn join(self) {
        unsafe {
            WaitForSingleObject(self.handle, INFINITE);
            CloseHandle(self.handle);
        }
    }

    /// Closes the handle; the thread keeps running on its own.
    pub(crate) fn detach(self) {
        unsafe { CloseHandle(self.handle) };
    }

    pub(crate) fn raw(&self) -> RawThread {
        self.handle
    }
}

unsafe extern "system" fn thread_start(arg: *mut c_void) -> u32 {
    let main = unsafe { Box::from_raw(arg as *mut ThreadMain) };
    main();
    0
}

/// Names the calling thread.
pub(crate) fn set_current_name(name: &CStr) {
    let wide: Vec<u16> = name
        .to_string_lossy()
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();

    unsafe {
        SetThreadDescription(GetCurrentThread(), wide.as_ptr());
    }
}

/// Sleeps for `ticks` milliseconds.
pub(crate) fn sleep_ticks(ticks: u64) {
    // `INFINITE` is a sentinel, so sleep in chunks just below it.
    let mut remaining = ticks;

    while remaining > 0 {
        let chunk = remaining.min(u64::from(INFINITE - 1));
        unsafe { Sleep(chunk as u32) };
        remaining -= chunk;
    }
}

/// Offers the processor to another ready thread.
pub(crate) fn yield_now() {
    unsafe { Sleep(0) };
}

/// Number of logical processors, or `0` when the system cannot tell.
pub(crate) fn hardware_concurrency() -> u32 {
    let mut info: SYSTEM_INFO = unsafe { mem::zeroed() };
    unsafe { GetSystemInfo(&mut info) };

    info.dwNumberOfProcessors
}
