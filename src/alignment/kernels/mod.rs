//! ## Alignment Kernels
//!
//! Every kernel fills the same affine-gap dynamic programming matrix. For query
//! position $i$ (rows), reference position $j$ (columns), substitution score
//! $M(i,j)$, gap open $o$ and gap extend $e$:
//!
//! $$E_{i,j} = \max(H_{i,j-1} - o, E_{i,j-1} - e)$$
//! $$F_{i,j} = \max(H_{i-1,j} - o, F_{i-1,j} - e)$$
//! $$H_{i,j} = \max(H_{i-1,j-1} + M(i,j), E_{i,j}, F_{i,j})$$
//!
//! with an extra $0$ term for local alignment. A gap of $k$ cells costs $o +
//! (k-1)e$. Row $-1$ and column $-1$ hold the boundary described by
//! [`Boundary`]: zero where the regime lets that sequence begin for free, the
//! penalty of a leading gap otherwise.
//!
//! The kernels differ only in the order cells are computed:
//!
//! - [`serial`]: column by column in `i64`; the reference for all others.
//! - [`striped`]: Farrar's striped layout with a lazy `F` correction loop.
//! - [`scan`]: the striped layout with `F` resolved by a prefix scan.
//! - [`diag`]: anti-diagonals, one vector per stretch of a diagonal.
//! - [`banded`]: the serial kernel restricted to a diagonal band.
//!
//! All vector kernels report the same score and end cell as [`serial`] when
//! they do not saturate, and hand final `H` values to a [`CellRecorder`] for
//! the storage variants.
//!
//! ### Module Citations
//!
//! 1. Farrar, Michael. "Striped Smith–Waterman speeds database searches six
//!    times over other SIMD implementations." Bioinformatics 23.2 (2007):
//!    156-161.
//! 2. Daily, Jeff. "Parasail: SIMD C library for global, semi-global, and
//!    local pairwise sequence alignments." BMC Bioinformatics 17 (2016): 81.
//! 3. Wozniak, Andrzej. "Using video-oriented instructions to speed up
//!    sequence comparison." Bioinformatics 13.2 (1997): 145-150.
//!
//! [`Boundary`]: crate::alignment::recorder::Boundary
//! [`CellRecorder`]: crate::alignment::recorder::CellRecorder

use crate::{
    alignment::{
        Regime,
        recorder::{Boundary, CellRecorder, EndTracker, Scope},
    },
    data::matrices::SubstitutionMatrix,
    math::AlignableIntWidth,
    simd::SimdAnyInt,
};
use std::simd::{prelude::*};

pub(crate) mod banded;
pub(crate) mod diag;
pub(crate) mod scan;
pub(crate) mod serial;
pub(crate) mod striped;

#[cfg(all(test, feature = "rand"))]
mod bench;
#[cfg(test)]
mod test;

/// One alignment problem, with both sequences already mapped to matrix
/// ordinals.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Problem<'a> {
    pub query:     &'a [u8],
    pub reference: &'a [u8],
    pub matrix:    &'a SubstitutionMatrix,
    pub regime:    Regime,
    pub boundary:  Boundary,
}

impl<'a> Problem<'a> {
    pub(crate) fn new(
        query: &'a [u8], reference: &'a [u8], matrix: &'a SubstitutionMatrix, regime: Regime, open: i64, extend: i64,
    ) -> Self {
        Problem {
            query,
            reference,
            matrix,
            regime,
            boundary: Boundary::new(regime, open, extend),
        }
    }

    #[inline]
    pub(crate) fn m(&self) -> usize {
        self.query.len()
    }

    #[inline]
    pub(crate) fn n(&self) -> usize {
        self.reference.len()
    }

    /// `M(i, j)`
    #[inline]
    pub(crate) fn score(&self, i: usize, j: usize) -> i64 {
        i64::from(
            self.matrix
                .score_ordinals(usize::from(self.query[i]), usize::from(self.reference[j])),
        )
    }

    /// The thresholds beyond which a lane of type `T` may no longer hold exact
    /// values, or `None` if the problem cannot be represented in `T` at all.
    ///
    /// A cell strictly between `low` and `high` can still have a penalty
    /// subtracted or the largest substitution score added without clamping.
    pub(crate) fn limits<T: AlignableIntWidth>(&self) -> Option<Limits<T>> {
        let Boundary { open, extend, .. } = self.boundary;
        let (min, max) = (i64::from(self.matrix.min()), i64::from(self.matrix.max()));
        let (t_min, t_max): (i64, i64) = (T::MIN.into(), T::MAX.into());

        if !(T::fits(open) && T::fits(extend) && T::fits(min) && T::fits(max)) {
            return None;
        }

        let low = t_min + open.max(-min.min(0));
        let high = t_max - max.max(0);
        let deepest = self
            .boundary
            .top(self.n() - 1)
            .min(self.boundary.left(self.m() - 1));
        if low >= high || deepest <= low {
            return None;
        }

        Some(Limits {
            low:  T::saturate_from(low),
            high: T::saturate_from(high),
        })
    }
}

/// See [`Problem::limits`].
#[derive(Copy, Clone, Debug)]
pub(crate) struct Limits<T> {
    pub low:  T,
    pub high: T,
}

/// The score and end cell of one kernel run. The end is 0-based and inclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct KernelOutput {
    pub score:     i64,
    pub end_query: usize,
    pub end_ref:   usize,
    pub saturated: bool,
}

impl KernelOutput {
    pub(crate) fn from_tracker(tracker: &EndTracker, saturated: bool) -> Self {
        let (score, end_query, end_ref) = tracker.best().unwrap_or_default();
        KernelOutput {
            score,
            end_query,
            end_ref,
            saturated,
        }
    }

    /// The output of a run that could not start because the parameters do not
    /// fit the lane type.
    pub(crate) fn overflowed() -> Self {
        KernelOutput {
            saturated: true,
            ..Default::default()
        }
    }
}

/// Lanes of each striped vector that hold a real query position.
pub(crate) fn lane_masks<T, const N: usize>(m: usize, segments: usize) -> Vec<Mask<T::Mask, N>>
where
    T: AlignableIntWidth,
    {
    (0..segments)
        .map(|v| Mask::from_array(std::array::from_fn(|lane| lane * segments + v < m)))
        .collect()
}

/// Subtracts a penalty that may exceed the lane range, saturating at `T::MIN`.
#[inline]
pub(crate) fn sat_sub_wide<T, const N: usize>(mut v: Simd<T, N>, amount: i64) -> Simd<T, N>
where
    T: AlignableIntWidth,
    Simd<T, N>: SimdAnyInt<T, N>, {
    let t_max: i64 = T::MAX.into();
    if amount > t_max.saturating_mul(2).saturating_add(1) {
        return Simd::splat(T::MIN);
    }

    let mut left = amount;
    while left > 0 {
        let step = left.min(t_max);
        v = v.saturating_sub(Simd::splat(T::saturate_from(step)));
        left -= step;
    }
    v
}

/// Finishes one column of a striped kernel: checks the saturation limits,
/// offers end candidates, and feeds the recorder. Returns whether any real lane
/// reached a limit.
#[allow(clippy::too_many_arguments)]
pub(crate) fn finish_striped_column<T, const N: usize>(
    column: &[Simd<T, N>], valid: &[Mask<T::Mask, N>], j: usize, m: usize, limits: Limits<T>,
    tracker: &mut EndTracker, recorder: Option<&mut CellRecorder<'_>>,
) -> bool
where
    T: AlignableIntWidth,
    Simd<T, N>: SimdAnyInt<T, N>, {
    let segments = column.len();
    let (low, high) = (Simd::splat(limits.low), Simd::splat(limits.high));

    let mut saturated = false;
    for (h, valid) in column.iter().zip(valid) {
        saturated |= ((h.simd_le(low) | h.simd_ge(high)) & *valid).any();
    }

    let at = |i: usize| -> i64 { column[i % segments][i / segments].into() };

    match tracker.scope(j) {
        Scope::All => {
            let floor = Simd::splat(T::MIN);
            let column_max = column
                .iter()
                .zip(valid)
                .fold(floor, |acc, (h, valid)| acc.simd_max(valid.select(*h, floor)));
            let best = column_max.reduce_max();

            if tracker.accepts(best.into(), j) {
                let target = Simd::splat(best);
                let mut row = 0;
                for (v, (h, valid)) in column.iter().zip(valid).enumerate() {
                    let bits = (h.simd_eq(target) & *valid).to_bitmask();
                    if bits != 0 {
                        let lane = 63 - bits.leading_zeros() as usize;
                        row = row.max(lane * segments + v);
                    }
                }
                tracker.offer(row, j, best.into());
            }
        }
        Scope::LastRow => {
            tracker.offer(m - 1, j, at(m - 1));
        }
        Scope::Nothing => {}
    }

    if let Some(recorder) = recorder {
        for i in 0..m {
            recorder.cell(i, j, at(i));
        }
    }

    saturated
}
