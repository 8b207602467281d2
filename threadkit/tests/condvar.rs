use std::sync::Arc;
use threadkit::atomic::AtomicInt;
use threadkit::time::Milliseconds;
use threadkit::{Condvar, LockGuard, MemoryOrder, Mutex, RecursiveMutex, Thread, this_thread};

struct Counter {
    mutex: Mutex,
    changed: Condvar,
    count: AtomicInt,
}

impl Counter {
    fn new() -> Self {
        Self {
            mutex: Mutex::new(),
            changed: Condvar::new(),
            count: AtomicInt::new(0),
        }
    }
}

#[test]
fn test_condvar_wait_until_count_reaches_five() {
    let counter = Arc::new(Counter::new());

    let mut producer = Thread::new(
        |counter: Arc<Counter>| {
            for _ in 0..5 {
                let _guard = LockGuard::new(&counter.mutex);
                counter.count.fetch_add(1, MemoryOrder::Relaxed);
                counter.changed.notify_one();
            }
        },
        counter.clone(),
    );

    {
        let mut guard = LockGuard::new(&counter.mutex);
        while counter.count.load(MemoryOrder::Relaxed) < 5 {
            counter.changed.wait_guard(&mut guard);
        }
        assert_eq!(counter.count.load(MemoryOrder::Relaxed), 5);
    }

    producer.join();
}

#[test]
fn test_condvar_notify_all_wakes_every_waiter() {
    let counter = Arc::new(Counter::new());
    let woken = Arc::new(AtomicInt::new(0));

    let mut waiters: Vec<Thread> = (0..4)
        .map(|_| {
            let counter = counter.clone();
            let woken = woken.clone();
            Thread::spawn(move || {
                let mut guard = LockGuard::new(&counter.mutex);
                counter
                    .changed
                    .wait_while(&mut guard, || counter.count.load(MemoryOrder::Relaxed) == 0);
                woken.fetch_add(1, MemoryOrder::Relaxed);
            })
        })
        .collect();

    this_thread::sleep_for(Milliseconds::new(50));

    {
        let _guard = LockGuard::new(&counter.mutex);
        counter.count.store(1, MemoryOrder::Relaxed);
        counter.changed.notify_all();
    }

    for waiter in &mut waiters {
        waiter.join();
    }

    assert_eq!(woken.get(), 4);
}

#[test]
fn test_condvar_notify_without_waiters() {
    let condvar = Condvar::new();

    condvar.notify_one();
    condvar.notify_all();
}

#[test]
fn test_condvar_with_recursive_mutex() {
    struct Shared {
        mutex: RecursiveMutex,
        ready: Condvar,
        flag: AtomicInt,
    }

    let shared = Arc::new(Shared {
        mutex: RecursiveMutex::new(),
        ready: Condvar::new(),
        flag: AtomicInt::new(0),
    });

    let mut signaler = Thread::new(
        |shared: Arc<Shared>| {
            let _guard = LockGuard::new(&shared.mutex);
            shared.flag.store(1, MemoryOrder::Relaxed);
            shared.ready.notify_all();
        },
        shared.clone(),
    );

    {
        let mut guard = LockGuard::new(&shared.mutex);
        shared
            .ready
            .wait_while(&mut guard, || shared.flag.load(MemoryOrder::Relaxed) == 0);
    }

    signaler.join();
    assert_eq!(shared.flag.get(), 1);
}

#[test]
fn test_condvar_raw_wait() {
    let counter = Arc::new(Counter::new());

    let mut producer = Thread::new(
        |counter: Arc<Counter>| {
            counter.mutex.lock();
            counter.count.store(1, MemoryOrder::Relaxed);
            counter.changed.notify_one();
            unsafe { counter.mutex.unlock() };
        },
        counter.clone(),
    );

    counter.mutex.lock();
    while counter.count.load(MemoryOrder::Relaxed) == 0 {
        unsafe { counter.changed.wait(&counter.mutex) };
    }
    unsafe { counter.mutex.unlock() };

    producer.join();
}

#[test]
fn test_condvar_recursive_mutex_after_inner_release() {
    struct Shared {
        mutex: RecursiveMutex,
        ready: Condvar,
        flag: AtomicInt,
    }

    let shared = Arc::new(Shared {
        mutex: RecursiveMutex::new(),
        ready: Condvar::new(),
        flag: AtomicInt::new(0),
    });

    let mut guard = LockGuard::new(&shared.mutex);
    {
        let _inner = LockGuard::new(&shared.mutex);
    }

    let mut signaler = Thread::new(
        |shared: Arc<Shared>| {
            let _guard = LockGuard::new(&shared.mutex);
            shared.flag.store(1, MemoryOrder::Relaxed);
            shared.ready.notify_one();
        },
        shared.clone(),
    );

    while shared.flag.load(MemoryOrder::Relaxed) == 0 {
        shared.ready.wait_guard(&mut guard);
    }
    drop(guard);

    signaler.join();
    assert_eq!(shared.flag.get(), 1);
}
