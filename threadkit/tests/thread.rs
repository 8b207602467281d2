use std::collections::HashSet;
use std::env;
use std::process::Command;
use std::sync::Arc;
use threadkit::time::Milliseconds;
use threadkit::{Atomic, Builder, Error, MemoryOrder, Thread, ThreadId, this_thread};

const ABORT_CHILD_ENV: &str = "THREADKIT_ABORT_CHILD";

#[test]
fn test_join_makes_writes_visible() {
    let value = Arc::new(Atomic::<u64>::new(0));

    let mut thread = Thread::new(
        |value: Arc<Atomic<u64>>| value.store(42, MemoryOrder::Relaxed),
        value.clone(),
    );

    assert!(thread.joinable());
    thread.join();
    assert!(!thread.joinable());

    assert_eq!(value.load(MemoryOrder::Relaxed), 42);
}

#[test]
fn test_detach_keeps_thread_running() {
    let done = Arc::new(Atomic::<u32>::new(0));

    let mut thread = Thread::new(
        |done: Arc<Atomic<u32>>| {
            this_thread::sleep_for(Milliseconds::new(20));
            done.store(1, MemoryOrder::Release);
        },
        done.clone(),
    );

    let id = thread.id();
    thread.detach();

    assert!(!thread.joinable());
    assert!(thread.native_handle().is_none());
    assert!(!id.is_none());
    assert_eq!(thread.id(), ThreadId::default());

    for _ in 0..500 {
        if done.load(MemoryOrder::Acquire) == 1 {
            return;
        }
        this_thread::sleep_for(Milliseconds::new(10));
    }

    panic!("detached thread never finished");
}

#[test]
fn test_ids_are_distinct() {
    let mut threads: Vec<Thread> = (0..8).map(|_| Thread::spawn(|| {})).collect();

    let ids: HashSet<ThreadId> = threads.iter().map(Thread::id).collect();
    assert_eq!(ids.len(), 8);
    assert!(!ids.contains(&this_thread::id()));

    for thread in &mut threads {
        thread.join();
    }
}

#[test]
fn test_id_matches_inside_thread() {
    let seen = Arc::new(Atomic::<u64>::new(0));

    let mut thread = Thread::new(
        |seen: Arc<Atomic<u64>>| seen.store(this_thread::id().as_u64(), MemoryOrder::SeqCst),
        seen.clone(),
    );
    let id = thread.id();
    thread.join();

    assert!(!id.is_none());
    assert_eq!(seen.get(), id.as_u64());
}

#[test]
fn test_id_is_default_after_join() {
    let mut thread = Thread::spawn(|| {});
    let id = thread.id();
    assert!(!id.is_none());

    thread.join();

    assert_eq!(thread.id(), ThreadId::default());
    assert_ne!(id, thread.id());
}

#[test]
fn test_current_id_is_stable() {
    let first = this_thread::id();
    let second = this_thread::id();

    assert!(!first.is_none());
    assert_eq!(first, second);
}

#[test]
fn test_empty_handle() {
    let mut thread = Thread::default();

    assert!(!thread.joinable());
    assert!(thread.id().is_none());
    assert_eq!(thread.id(), ThreadId::default());
    assert!(thread.native_handle().is_none());

    thread.detach();
    assert!(!thread.joinable());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "non-joinable")]
fn test_join_empty_handle_panics_in_debug() {
    let mut thread = Thread::default();
    thread.join();
}

#[test]
fn test_native_handle_while_joinable() {
    let mut thread = Thread::spawn(|| this_thread::sleep_for(Milliseconds::new(5)));

    assert!(thread.native_handle().is_some());
    thread.join();
    assert!(thread.native_handle().is_none());
}

#[test]
fn test_hardware_concurrency() {
    let count = Thread::hardware_concurrency();

    if cfg!(any(target_os = "linux", windows)) {
        assert!(count >= 1);
    }
}

#[test]
fn test_builder_named_thread() {
    let ran = Arc::new(Atomic::<u32>::new(0));

    let mut thread = Builder::new()
        .name("threadkit-worker-with-a-long-name")
        .spawn(
            |ran: Arc<Atomic<u32>>| ran.store(1, MemoryOrder::SeqCst),
            ran.clone(),
        )
        .expect("spawn failed");

    thread.join();
    assert_eq!(ran.get(), 1);
}

#[test]
fn test_builder_stack_size() {
    let mut thread = Builder::new()
        .stack_size(1024 * 1024)
        .spawn(
            |_: ()| {
                let buffer = std::hint::black_box([1u8; 128 * 1024]);
                assert_eq!(buffer.iter().map(|&b| b as usize).sum::<usize>(), 128 * 1024);
            },
            (),
        )
        .expect("spawn failed");

    thread.join();
}

#[test]
fn test_builder_rejects_nul_in_name() {
    let result = Builder::new().name("bad\0name").spawn(|_: ()| {}, ());

    assert!(matches!(result, Err(Error::InvalidName)));
}

#[test]
#[should_panic(expected = "stack_size must be > 0")]
fn test_builder_zero_stack_size_panics() {
    let _ = Builder::new().stack_size(0);
}

#[test]
fn test_drop_joinable_aborts() {
    let exe = env::current_exe().expect("test binary path");

    let status = Command::new(exe)
        .args(["--exact", "child_drop_joinable", "--nocapture"])
        .env(ABORT_CHILD_ENV, "1")
        .status()
        .expect("failed to run child test");

    assert!(!status.success());

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(status.signal(), Some(libc::SIGABRT));
    }
}

#[test]
fn child_drop_joinable() {
    if env::var_os(ABORT_CHILD_ENV).is_none() {
        return;
    }

    let thread = Thread::spawn(|| this_thread::sleep_for(Milliseconds::new(50)));
    drop(thread);
}
