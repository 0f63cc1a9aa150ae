use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Sub, SubAssign},
    simd::SimdElement,
};

pub trait Int:
    Sized + Copy + Debug + Ord + Hash + Add<Output = Self> + Sub<Output = Self> + AddAssign + SubAssign {
    const ZERO: Self;
    const MAX: Self;
    const MIN: Self;
}

/// A signed integer type usable as a lane of the vectorized alignment
/// kernels.
///
/// Values are widened to `i64` when they leave a kernel, and parameters are
/// narrowed with saturation when they enter one. [`Self::MIN`] doubles as the
/// negative-infinity sentinel of the recurrences.
pub trait AlignableIntWidth: Int + SimdElement + Default + Display + Into<i64> {
    /// Narrows `value` to the lane type, clamping to the representable range.
    fn saturate_from(value: i64) -> Self;

    /// Whether `value` is representable in the lane type.
    #[inline]
    fn fits(value: i64) -> bool {
        let (min, max): (i64, i64) = (Self::MIN.into(), Self::MAX.into());
        (min..=max).contains(&value)
    }
}

macro_rules! impl_int {
    { $($ty:ty),* } => {
        $(
        impl Int for $ty {
            const ZERO: $ty = 0;
            const MAX: $ty = <$ty>::MAX;
            const MIN: $ty = <$ty>::MIN;
        } )*
     }
}

macro_rules! impl_alignable {
    { $($ty:ty),* } => {
        $(
        impl AlignableIntWidth for $ty {
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn saturate_from(value: i64) -> $ty {
                value.clamp(<$ty>::MIN.into(), <$ty>::MAX.into()) as $ty
            }
        } )*
     }
}

impl_int!(i8, i16, i32, i64);
impl_alignable!(i8, i16, i32, i64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn saturate() {
        assert_eq!(i8::saturate_from(300), i8::MAX);
        assert_eq!(i8::saturate_from(-300), i8::MIN);
        assert_eq!(i16::saturate_from(-300), -300);
        assert_eq!(i64::saturate_from(i64::MIN), i64::MIN);
        assert!(i8::fits(-128));
        assert!(!i8::fits(128));
        assert!(i64::fits(i64::MIN));
        assert_eq!(<i32 as Int>::MIN, i32::MIN);
    }
}
