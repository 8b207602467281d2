//! POSIX platform layer.
//!
//! Implements the threading backend on top of the pthreads API. Every
//! pthread object that must not move once initialized is kept behind a
//! `Box` so the owning wrapper can be moved freely.

use super::common::{MIN_STACK_SIZE, RawLock, ThreadMain};

use libc::{
    PTHREAD_COND_INITIALIZER, PTHREAD_MUTEX_INITIALIZER, PTHREAD_MUTEX_NORMAL,
    PTHREAD_MUTEX_RECURSIVE, c_int, c_void, pthread_attr_destroy, pthread_attr_init,
    pthread_attr_setstacksize, pthread_attr_t, pthread_cond_broadcast, pthread_cond_destroy,
    pthread_cond_init, pthread_cond_signal, pthread_cond_t, pthread_cond_wait, pthread_create,
    pthread_detach, pthread_join, pthread_mutex_destroy, pthread_mutex_init, pthread_mutex_lock,
    pthread_mutex_t, pthread_mutex_trylock, pthread_mutex_unlock, pthread_mutexattr_destroy,
    pthread_mutexattr_init, pthread_mutexattr_settype, pthread_mutexattr_t, pthread_t,
};
use std::cell::UnsafeCell;
use std::ffi::CStr;
use std::mem::MaybeUninit;
use std::{io, ptr};

/// Native thread handle type.
pub(crate) type RawThread = pthread_t;

/// Sleep granularity: `nanosleep` is driven in microseconds.
pub(crate) const TICKS_PER_SECOND: i64 = 1_000_000;

/// Owning wrapper around a heap-pinned `pthread_mutex_t`.
struct PthreadMutex(Box<UnsafeCell<pthread_mutex_t>>);

impl PthreadMutex {
    /// Creates a mutex of the given pthread type.
    fn with_kind(kind: c_int) -> Self {
        let mutex = Box::new(UnsafeCell::new(PTHREAD_MUTEX_INITIALIZER));

        unsafe {
            let mut attr = MaybeUninit::<pthread_mutexattr_t>::uninit();
            let rc = pthread_mutexattr_init(attr.as_mut_ptr());
            assert_eq!(rc, 0, "pthread_mutexattr_init failed: {}", rc);

            let rc = pthread_mutexattr_settype(attr.as_mut_ptr(), kind);
            debug_assert_eq!(rc, 0);

            let rc = pthread_mutex_init(mutex.get(), attr.as_ptr());
            pthread_mutexattr_destroy(attr.as_mut_ptr());
            assert_eq!(rc, 0, "pthread_mutex_init failed: {}", rc);
        }

        Self(mutex)
    }

    fn raw(&self) -> *mut pthread_mutex_t {
        self.0.get()
    }

    fn lock(&self) {
        let rc = unsafe { pthread_mutex_lock(self.raw()) };
        debug_assert_eq!(rc, 0);
    }

    fn try_lock(&self) -> bool {
        unsafe { pthread_mutex_trylock(self.raw()) == 0 }
    }

    unsafe fn unlock(&self) {
        let rc = unsafe { pthread_mutex_unlock(self.raw()) };
        debug_assert_eq!(rc, 0);
    }
}

impl Drop for PthreadMutex {
    fn drop(&mut self) {
        let rc = unsafe { pthread_mutex_destroy(self.raw()) };
        debug_assert_eq!(rc, 0, "mutex destroyed while locked");
    }
}

unsafe impl Send for PthreadMutex {}
unsafe impl Sync for PthreadMutex {}

/// Locks that can be handed to `pthread_cond_wait`.
pub(crate) trait CondvarLock {
    fn raw(&self) -> *mut pthread_mutex_t;
}

/// Non-recursive mutex.
///
/// Uses `PTHREAD_MUTEX_NORMAL`, so a relock by the owning thread blocks
/// forever instead of being granted or reported.
pub(crate) struct Mutex {
    inner: PthreadMutex,
}

impl Mutex {
    pub(crate) fn new() -> Self {
        Self {
            inner: PthreadMutex::with_kind(PTHREAD_MUTEX_NORMAL),
        }
    }
}

impl RawLock for Mutex {
    fn lock(&self) {
        self.inner.lock();
    }

    fn try_lock(&self) -> bool {
        self.inner.try_lock()
    }

    unsafe fn unlock(&self) {
        unsafe { self.inner.unlock() }
    }
}

impl CondvarLock for Mutex {
    fn raw(&self) -> *mut pthread_mutex_t {
        self.inner.raw()
    }
}

/// Recursive mutex; pthreads keeps the acquisition count.
pub(crate) struct RecursiveMutex {
    inner: PthreadMutex,
}

impl RecursiveMutex {
    pub(crate) fn new() -> Self {
        Self {
            inner: PthreadMutex::with_kind(PTHREAD_MUTEX_RECURSIVE),
        }
    }
}

impl RawLock for RecursiveMutex {
    fn lock(&self) {
        self.inner.lock();
    }

    fn try_lock(&self) -> bool {
        self.inner.try_lock()
    }

    unsafe fn unlock(&self) {
        unsafe { self.inner.unlock() }
    }
}

impl CondvarLock for RecursiveMutex {
    fn raw(&self) -> *mut pthread_mutex_t {
        self.inner.raw()
    }
}

/// Condition variable backed by `pthread_cond_t`.
pub(crate) struct Condvar {
    cond: Box<UnsafeCell<pthread_cond_t>>,
}

impl Condvar {
    pub(crate) fn new() -> Self {
        let cond = Box::new(UnsafeCell::new(PTHREAD_COND_INITIALIZER));

        let rc = unsafe { pthread_cond_init(cond.get(), ptr::null()) };
        assert_eq!(rc, 0, "pthread_cond_init failed: {}", rc);

        Self { cond }
    }

    /// Releases `lock`, blocks until signalled, then reacquires `lock`.
    ///
    /// # Safety
    ///
    /// The calling thread must hold `lock`.
    pub(crate) unsafe fn wait<L: CondvarLock>(&self, lock: &L) {
        let rc = unsafe { pthread_cond_wait(self.cond.get(), lock.raw()) };
        debug_assert_eq!(rc, 0);
    }

    pub(crate) fn notify_one(&self) {
        let rc = unsafe { pthread_cond_signal(self.cond.get()) };
        debug_assert_eq!(rc, 0);
    }

    pub(crate) fn notify_all(&self) {
        let rc = unsafe { pthread_cond_broadcast(self.cond.get()) };
        debug_assert_eq!(rc, 0);
    }
}

impl Drop for Condvar {
    fn drop(&mut self) {
        let rc = unsafe { pthread_cond_destroy(self.cond.get()) };
        debug_assert_eq!(rc, 0);
    }
}

unsafe impl Send for Condvar {}
unsafe impl Sync for Condvar {}

/// A started pthread that has been neither joined nor detached.
pub(crate) struct NativeThread {
    id: pthread_t,
}

unsafe impl Send for NativeThread {}
unsafe impl Sync for NativeThread {}

impl NativeThread {
    /// Starts `main` on a new thread.
    ///
    /// On failure the boxed entry point is dropped here and the pthread
    /// error code is returned as an `io::Error`.
    pub(crate) fn spawn(stack_size: Option<usize>, main: ThreadMain) -> io::Result<Self> {
        let payload = Box::into_raw(Box::new(main));

        let mut native = MaybeUninit::<pthread_t>::uninit();
        let mut attr = MaybeUninit::<pthread_attr_t>::uninit();

        let rc = unsafe {
            let rc = pthread_attr_init(attr.as_mut_ptr());
            assert_eq!(rc, 0, "pthread_attr_init failed: {}", rc);

            if let Some(size) = stack_size {
                let rc = pthread_attr_setstacksize(attr.as_mut_ptr(), round_stack_size(size));
                if rc != 0 {
                    pthread_attr_destroy(attr.as_mut_ptr());
                    drop(Box::from_raw(payload));
                    return Err(io::Error::from_raw_os_error(rc));
                }
            }

            let rc = pthread_create(
                native.as_mut_ptr(),
                attr.as_ptr(),
                thread_start,
                payload as *mut c_void,
            );
            pthread_attr_destroy(attr.as_mut_ptr());
            rc
        };

        if rc != 0 {
            drop(unsafe { Box::from_raw(payload) });
            return Err(io::Error::from_raw_os_error(rc));
        }

        Ok(Self {
            id: unsafe { native.assume_init() },
        })
    }

    /// Blocks until the thread has finished.
    pub(crate) fn join(self) {
        let rc = unsafe { pthread_join(self.id, ptr::null_mut()) };
        debug_assert_eq!(rc, 0);
    }

    /// Lets the thread release its own resources when it finishes.
    pub(crate) fn detach(self) {
        let rc = unsafe { pthread_detach(self.id) };
        debug_assert_eq!(rc, 0);
    }

    pub(crate) fn raw(&self) -> RawThread {
        self.id
    }
}

extern "C" fn thread_start(arg: *mut c_void) -> *mut c_void {
    let main = unsafe { Box::from_raw(arg as *mut ThreadMain) };
    main();
    ptr::null_mut()
}

/// Rounds a requested stack size up to a whole number of pages.
fn round_stack_size(size: usize) -> usize {
    let size = size.max(MIN_STACK_SIZE);
    let page = match unsafe { libc::sysconf(libc::_SC_PAGESIZE) } {
        n if n > 0 => n as usize,
        _ => 4096,
    };

    size.div_ceil(page).saturating_mul(page)
}

/// Names the calling thread.
///
/// Linux limits names to 15 bytes; longer names are truncated.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) fn set_current_name(name: &CStr) {
    const MAX_LEN: usize = 15;

    let bytes = name.to_bytes();
    let mut buffer = [0u8; MAX_LEN + 1];
    let len = bytes.len().min(MAX_LEN);
    buffer[..len].copy_from_slice(&bytes[..len]);

    unsafe {
        libc::pthread_setname_np(libc::pthread_self(), buffer.as_ptr().cast());
    }
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) fn set_current_name(name: &CStr) {
    unsafe {
        libc::pthread_setname_np(name.as_ptr());
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios"
)))]
pub(crate) fn set_current_name(_name: &CStr) {}

/// Sleeps for `ticks` microseconds, resuming after signal interruptions.
pub(crate) fn sleep_ticks(ticks: u64) {
    let secs = ticks / TICKS_PER_SECOND as u64;
    let micros = ticks % TICKS_PER_SECOND as u64;

    let mut request = libc::timespec {
        tv_sec: secs.min(libc::time_t::MAX as u64) as libc::time_t,
        tv_nsec: (micros * 1_000) as _,
    };
    let mut remaining = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    loop {
        let rc = unsafe { libc::nanosleep(&request, &mut remaining) };
        if rc == 0 {
            break;
        }

        if io::Error::last_os_error().kind() != io::ErrorKind::Interrupted {
            break;
        }

        request = remaining;
    }
}

/// Offers the processor to another ready thread.
pub(crate) fn yield_now() {
    unsafe {
        libc::sched_yield();
    }
}

/// Number of online processors, or `0` when the system cannot tell.
pub(crate) fn hardware_concurrency() -> u32 {
    match unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) } {
        n if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 0,
    }
}
