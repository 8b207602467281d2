use super::duration::Duration;
use super::ratio::Period;
use crate::sys::platform;

use std::time;

/// Suspends the calling thread for at least `duration`.
///
/// The duration is rounded half up to the native sleep granularity
/// (microseconds on POSIX systems, milliseconds on Windows). Zero and
/// negative durations return immediately.
///
/// # Examples
///
/// ```rust
/// use threadkit::time::{Milliseconds, sleep_for};
///
/// sleep_for(Milliseconds::new(10));
/// ```
pub fn sleep_for<P: Period>(duration: Duration<P>) {
    let ticks = duration.to_ticks(platform::TICKS_PER_SECOND);
    if ticks > 0 {
        platform::sleep_ticks(ticks);
    }
}

/// Suspends the calling thread for at least a [`std::time::Duration`].
///
/// Sub-tick remainders are rounded up, so the sleep is never shorter than
/// requested.
pub fn sleep(duration: time::Duration) {
    let per_tick = 1_000_000_000 / platform::TICKS_PER_SECOND as u128;
    let ticks = duration.as_nanos().div_ceil(per_tick);

    if ticks > 0 {
        platform::sleep_ticks(u64::try_from(ticks).unwrap_or(u64::MAX));
    }
}
