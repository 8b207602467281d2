//! Durations and sleeping.
//!
//! This module provides:
//! - [`Ratio`] and the [`Period`] trait, compile-time unit descriptions,
//! - [`Duration`], a signed tick count in a given unit,
//! - the standard unit aliases ([`Nanoseconds`] through [`Hours`]),
//! - [`sleep_for`] and [`sleep`], which suspend the calling thread.

mod duration;
mod ratio;
mod sleep;

#[doc(inline)]
pub use duration::{Duration, Hours, Microseconds, Milliseconds, Minutes, Nanoseconds, Seconds};

#[doc(inline)]
pub use ratio::{Micro, Milli, Nano, Period, Ratio};

#[doc(inline)]
pub use sleep::{sleep, sleep_for};
