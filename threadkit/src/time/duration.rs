use super::ratio::{Micro, Milli, Nano, Period, Ratio};

use std::fmt;
use std::marker::PhantomData;
use std::time;

/// A signed number of ticks of the unit `P`.
///
/// The unit is part of the type, so `Duration<Milli>` and `Duration<Micro>`
/// are distinct. Durations are plain values: they are never modified after
/// construction.
///
/// # Examples
///
/// ```rust
/// use threadkit::time::Milliseconds;
///
/// let timeout = Milliseconds::new(250);
/// assert_eq!(timeout.count(), 250);
///
/// let std: std::time::Duration = timeout.into();
/// assert_eq!(std.as_millis(), 250);
/// ```
pub struct Duration<P: Period = Ratio<1>> {
    count: i64,
    _unit: PhantomData<P>,
}

impl<P: Period> Duration<P> {
    /// Creates a duration of `count` ticks.
    pub const fn new(count: i64) -> Self {
        Self {
            count,
            _unit: PhantomData,
        }
    }

    /// Returns the number of ticks.
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Converts to a whole number of native ticks, rounding half up.
    ///
    /// Non-positive durations convert to `0`; values beyond `u64` saturate.
    pub(crate) fn to_ticks(&self, ticks_per_second: i64) -> u64 {
        if self.count <= 0 {
            return 0;
        }

        let scaled = i128::from(self.count) * i128::from(P::NUM) * i128::from(ticks_per_second);
        let den = i128::from(P::DEN);
        let ticks = (2 * scaled + den) / (2 * den);

        u64::try_from(ticks).unwrap_or(u64::MAX)
    }
}

impl<P: Period> Clone for Duration<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Period> Copy for Duration<P> {}

impl<P: Period> PartialEq for Duration<P> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl<P: Period> Eq for Duration<P> {}

impl<P: Period> Default for Duration<P> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<P: Period> fmt::Debug for Duration<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({} x {}/{}s)", self.count, P::NUM, P::DEN)
    }
}

impl<P: Period> From<Duration<P>> for time::Duration {
    /// Negative durations convert to zero.
    fn from(duration: Duration<P>) -> Self {
        let nanos = duration.to_ticks(1_000_000_000);
        time::Duration::from_nanos(nanos)
    }
}

pub type Nanoseconds = Duration<Nano>;
pub type Microseconds = Duration<Micro>;
pub type Milliseconds = Duration<Milli>;
pub type Seconds = Duration;
pub type Minutes = Duration<Ratio<60>>;
pub type Hours = Duration<Ratio<3600>>;
