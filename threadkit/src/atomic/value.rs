use super::backend::AtomicCell;

mod sealed {
    pub trait Sealed {}
}

/// Arithmetic types that can live in an [`Atomic`](super::Atomic).
///
/// Implemented for every primitive integer up to 64 bits. The storage
/// strategy is chosen per type at compile time: the matching
/// `core::sync::atomic` type when the target supports that width (and the
/// `locked-atomics` feature is off), a mutex-guarded cell otherwise.
pub trait AtomicValue: sealed::Sealed + Copy + Send + 'static {
    /// Backend storing values of this type.
    type Cell: AtomicCell<Self>;

    /// The value `1`, used by the increment and decrement helpers.
    const ONE: Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! atomic_value {
    ($($width:tt => $($atomic:ident($ty:ty)),+;)*) => {$($(
        impl sealed::Sealed for $ty {}

        impl AtomicValue for $ty {
            #[cfg(all(target_has_atomic = $width, not(feature = "locked-atomics")))]
            type Cell = std::sync::atomic::$atomic;

            #[cfg(not(all(target_has_atomic = $width, not(feature = "locked-atomics"))))]
            type Cell = super::backend::locked::LockedCell<$ty>;

            const ONE: Self = 1;

            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }
        }
    )+)*};
}

atomic_value! {
    "8" => AtomicI8(i8), AtomicU8(u8);
    "16" => AtomicI16(i16), AtomicU16(u16);
    "32" => AtomicI32(i32), AtomicU32(u32);
    "64" => AtomicI64(i64), AtomicU64(u64);
    "ptr" => AtomicIsize(isize), AtomicUsize(usize);
}
