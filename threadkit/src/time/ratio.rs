use std::fmt;
use std::marker::PhantomData;

/// A unit of time expressed as `NUM / DEN` seconds.
///
/// Implemented by [`Ratio`]; a unit can be any positive rational.
pub trait Period: Copy + Send + Sync + 'static {
    /// Numerator of the unit, in seconds.
    const NUM: i64;

    /// Denominator of the unit, in seconds.
    const DEN: i64;
}

/// Compile-time rational number `NUM / DEN`.
///
/// `Ratio<1, 1000>` is a millisecond, `Ratio<60>` a minute. Both parts must
/// be positive; a non-positive part fails to compile as soon as the unit is
/// used.
///
/// # Examples
///
/// ```rust
/// use threadkit::time::{Duration, Ratio};
///
/// // A frame at 60 Hz.
/// type Frames = Duration<Ratio<1, 60>>;
///
/// let two_frames = Frames::new(2);
/// assert_eq!(two_frames.count(), 2);
/// ```
pub struct Ratio<const NUM: i64, const DEN: i64 = 1>(PhantomData<()>);

impl<const NUM: i64, const DEN: i64> Ratio<NUM, DEN> {
    const POSITIVE: () = assert!(NUM > 0 && DEN > 0, "Ratio parts must be positive");
}

impl<const NUM: i64, const DEN: i64> Period for Ratio<NUM, DEN> {
    const NUM: i64 = {
        let () = Self::POSITIVE;
        NUM
    };

    const DEN: i64 = {
        let () = Self::POSITIVE;
        DEN
    };
}

impl<const NUM: i64, const DEN: i64> Clone for Ratio<NUM, DEN> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const NUM: i64, const DEN: i64> Copy for Ratio<NUM, DEN> {}

impl<const NUM: i64, const DEN: i64> fmt::Debug for Ratio<NUM, DEN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ratio<{}, {}>", NUM, DEN)
    }
}

/// One billionth.
pub type Nano = Ratio<1, 1_000_000_000>;

/// One millionth.
pub type Micro = Ratio<1, 1_000_000>;

/// One thousandth.
pub type Milli = Ratio<1, 1_000>;
