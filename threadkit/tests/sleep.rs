use std::time::{Duration, Instant};
use threadkit::this_thread;
use threadkit::time::{Microseconds, Milliseconds, Nanoseconds, Seconds};

#[test]
fn test_sleep_for_lower_bound() {
    let start = Instant::now();
    this_thread::sleep_for(Milliseconds::new(100));

    assert!(start.elapsed() >= Duration::from_millis(95));
}

#[test]
fn test_sleep_for_microseconds() {
    let start = Instant::now();
    this_thread::sleep_for(Microseconds::new(20_000));

    assert!(start.elapsed() >= Duration::from_millis(19));
}

#[test]
fn test_sleep_for_non_positive_returns_immediately() {
    let start = Instant::now();

    this_thread::sleep_for(Seconds::new(0));
    this_thread::sleep_for(Seconds::new(-10));
    this_thread::sleep_for(Nanoseconds::new(-1));

    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_sleep_std_duration() {
    let start = Instant::now();
    this_thread::sleep(Duration::from_millis(30));

    assert!(start.elapsed() >= Duration::from_millis(29));
}

#[test]
fn test_duration_count() {
    assert_eq!(Milliseconds::new(42).count(), 42);
    assert_eq!(Seconds::default().count(), 0);
}
