//! Runtime capability probes.
//!
//! The vectorized kernels are written with portable SIMD, so they run on every
//! target; these probes only tell the dispatcher whether a vector unit backs
//! them. Without one, [`DispatchOptions::fallback_to_serial`] routes SIMD
//! layouts to the serial reference instead.
//!
//! [`DispatchOptions::fallback_to_serial`]: crate::alignment::DispatchOptions::fallback_to_serial

use std::{sync::OnceLock, time::Instant};

/// Whether the host supports ARM NEON.
#[must_use]
pub fn can_use_neon() -> bool {
    #[cfg(target_arch = "aarch64")]
    {
        std::arch::is_aarch64_feature_detected!("neon")
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        false
    }
}

/// Whether the binary was built for PowerPC ALTIVEC. There is no stable
/// runtime probe for it, so this reflects the compile-time target.
#[must_use]
pub fn can_use_altivec() -> bool {
    cfg!(target_feature = "altivec")
}

/// Whether the host supports SSE2.
#[must_use]
pub fn can_use_sse2() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        std::arch::is_x86_feature_detected!("sse2")
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        false
    }
}

/// Whether the host supports SSE4.1.
#[must_use]
pub fn can_use_sse41() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        std::arch::is_x86_feature_detected!("sse4.1")
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        false
    }
}

/// Whether the host supports AVX2.
#[must_use]
pub fn can_use_avx2() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        std::arch::is_x86_feature_detected!("avx2")
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        false
    }
}

/// Whether any supported vector unit is present.
#[must_use]
pub fn has_vector_unit() -> bool {
    can_use_avx2() || can_use_sse41() || can_use_sse2() || can_use_neon() || can_use_altivec()
}

/// Monotonic seconds since the first call in this process, for benchmarking.
#[must_use]
pub fn time() -> f64 {
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let a = time();
        let b = time();
        assert!(b >= a);
        assert!(a >= 0.0);
    }

    #[test]
    fn probes_are_consistent() {
        if can_use_avx2() {
            assert!(has_vector_unit());
        }
        #[cfg(target_arch = "x86_64")]
        assert!(can_use_sse2());
    }
}
