use super::*;
use crate::alignment::{AlignError, errors::try_filled, recorder::NEG_INF};

/// The diagonals `j - i` a banded global alignment may visit: the main
/// diagonal and the one through the last cell, widened by `k` on each side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Band {
    low:  i64,
    high: i64,
}

impl Band {
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn new(m: usize, n: usize, k: usize) -> Self {
        let shift = n as i64 - m as i64;
        let k = k as i64;
        Band {
            low:  shift.min(0) - k,
            high: shift.max(0) + k,
        }
    }

    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn contains(&self, i: usize, j: usize) -> bool {
        (self.low..=self.high).contains(&(j as i64 - i as i64))
    }

    /// The rows of column `j` inside the band, if any.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn rows(&self, j: usize, m: usize) -> Option<(usize, usize)> {
        let first = (j as i64 - self.high).max(0);
        let last = (j as i64 - self.low).min(m as i64 - 1);
        (first <= last).then_some((first as usize, last as usize))
    }
}

/// Global alignment restricted to a band of diagonals, in `i64`.
///
/// Cells outside the band are treated as unreachable; the boundary row and
/// column keep their usual values. Because the band always contains the last
/// cell, a path exists for any `k`, and with `k` at least the longer length
/// the score equals the unbanded global alignment.
///
/// ## Complexity
///
/// For reference length $n$ and band width $k$:
///
/// - Time: $O(n(k + |n - m|))$
/// - Space: $O(m)$
pub(crate) fn banded(problem: &Problem<'_>, k: usize) -> Result<KernelOutput, AlignError> {
    let (m, n) = (problem.m(), problem.n());
    let boundary = problem.boundary;
    let Boundary { open, extend, .. } = boundary;
    let band = Band::new(m, n, k);

    let mut h_col = try_filled(m, NEG_INF)?;
    let mut e_col = try_filled(m, NEG_INF)?;

    // H(i, j - 1) and E(i, j - 1), before column j overwrites them
    let previous = |h_col: &[i64], e_col: &[i64], i: usize, j: usize| -> (i64, i64) {
        if j == 0 {
            (boundary.left(i), NEG_INF)
        } else if band.contains(i, j - 1) {
            (h_col[i], e_col[i])
        } else {
            (NEG_INF, NEG_INF)
        }
    };

    let mut tracker = EndTracker::new(problem.regime, m, n);

    for j in 0..n {
        let Some((first, last)) = band.rows(j, m) else {
            continue;
        };

        let mut diag = if first == 0 {
            boundary.corner(j)
        } else {
            previous(&h_col, &e_col, first - 1, j).0
        };
        let mut up = if first == 0 { boundary.top(j) } else { NEG_INF };
        let mut f = NEG_INF;

        for i in first..=last {
            let (left, e_left) = previous(&h_col, &e_col, i, j);
            let e = (left - open).max(e_left - extend);
            f = (up - open).max(f - extend);
            let h = (diag + problem.score(i, j)).max(e).max(f);

            diag = left;
            h_col[i] = h;
            e_col[i] = e;
            up = h;

            if tracker.is_candidate(i, j) {
                tracker.offer(i, j, h);
            }
        }
    }

    Ok(KernelOutput::from_tracker(&tracker, false))
}
