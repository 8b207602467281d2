use std::sync::Arc;
use threadkit::{Atomic, LockGuard, MemoryOrder, RecursiveMutex, Thread};

#[test]
fn test_recursive_mutex_relock_by_owner() {
    let mutex = RecursiveMutex::new();

    for _ in 0..5 {
        mutex.lock();
    }
    assert!(mutex.try_lock());

    for _ in 0..6 {
        unsafe { mutex.unlock() };
    }
}

#[test]
fn test_recursive_mutex_released_after_matching_unlocks() {
    let mutex = Arc::new(RecursiveMutex::new());
    let observed = Arc::new(Atomic::<u32>::new(0));

    let probe = |mutex: &Arc<RecursiveMutex>, observed: &Arc<Atomic<u32>>| {
        let mut thread = Thread::new(
            |(mutex, observed): (Arc<RecursiveMutex>, Arc<Atomic<u32>>)| {
                if mutex.try_lock() {
                    observed.store(1, MemoryOrder::SeqCst);
                    unsafe { mutex.unlock() };
                } else {
                    observed.store(2, MemoryOrder::SeqCst);
                }
            },
            (mutex.clone(), observed.clone()),
        );
        thread.join();
        observed.get()
    };

    mutex.lock();
    mutex.lock();
    mutex.lock();

    unsafe { mutex.unlock() };
    unsafe { mutex.unlock() };
    assert_eq!(probe(&mutex, &observed), 2);

    unsafe { mutex.unlock() };
    assert_eq!(probe(&mutex, &observed), 1);
}

#[test]
fn test_recursive_mutex_nested_guards() {
    let mutex = RecursiveMutex::new();

    {
        let outer = LockGuard::new(&mutex);
        let inner = LockGuard::new(&mutex);
        assert!(outer.owns_lock());
        assert!(inner.owns_lock());
    }

    assert!(mutex.try_lock());
    unsafe { mutex.unlock() };
}
