use std::{
    ops::{AddAssign, SubAssign},
    simd::{SimdElement, Swizzle, prelude::*},
};

pub trait SimdExt<T> {
    // based on rotate_elements_right
    fn shift_elements_right_z<const OFFSET: usize>(self, padding: T) -> Self;
}

impl<T, const N: usize> SimdExt<T> for Simd<T, N>
where
    T: SimdElement,
{
    #[inline]
    fn shift_elements_right_z<const OFFSET: usize>(self, padding: T) -> Self {
        struct Shift<const OFFSET: usize>;

        impl<const OFFSET: usize, const N: usize> Swizzle<N> for Shift<OFFSET> {
            const INDEX: [usize; N] = const {
                let mut index = [N; N];
                let mut i = OFFSET;
                while i < N {
                    index[i] = i - OFFSET;
                    i += 1;
                }
                index
            };
        }

        Shift::<OFFSET>::concat_swizzle(self, Simd::splat(padding))
    }
}

// Do not use in a prelude to avoid conflicts with `std::simd::SimdInt`.
pub trait SimdAnyInt<T, const N: usize>:
    SimdOrd + SimdPartialEq<Mask = Mask<<T as SimdElement>::Mask, N>> + AddAssign<Simd<T, N>> + SubAssign<Simd<T, N>>
where
    T: SimdElement, {
    #[must_use]
    fn reduce_max(self) -> T;
    #[must_use]
    fn saturating_sub(self, rhs: Self) -> Self;
    #[must_use]
    fn saturating_add(self, rhs: Self) -> Self;
}

macro_rules! impl_simd_any_int_signed {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> SimdAnyInt<$t, N> for Simd<$t, N>
            where
            {
                #[inline]
                fn reduce_max(self) -> $t {
                    <Self as std::simd::num::SimdInt>::reduce_max(self)
                }

                #[inline]
                fn saturating_sub(self, rhs: Self) -> Self {
                    <Self as std::simd::num::SimdInt>::saturating_sub(self, rhs)
                }

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    <Self as std::simd::num::SimdInt>::saturating_add(self, rhs)
                }
            }
        )*
    };
}
impl_simd_any_int_signed!(i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_elements_right() {
        let v = Simd::from_array([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(v.shift_elements_right_z::<1>(0).to_array(), [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(v.shift_elements_right_z::<3>(-1).to_array(), [-1, -1, -1, 1, 2, 3, 4, 5]);
        assert_eq!(v.shift_elements_right_z::<7>(0).to_array(), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(v.shift_elements_right_z::<17>(0).to_array(), [0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_saturating() {
        let v: Simd<i8, 4> = Simd::from_array([-120, 0, 100, 127]);
        let step = Simd::splat(20);
        assert_eq!(SimdAnyInt::saturating_sub(v, step).to_array(), [-128, -20, 80, 107]);
        assert_eq!(SimdAnyInt::saturating_add(v, step).to_array(), [-100, 20, 120, 127]);
        assert_eq!(SimdAnyInt::reduce_max(v), 127);
    }
}
