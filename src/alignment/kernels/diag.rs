use super::*;
use crate::alignment::{AlignError, errors::try_filled};

/// Fills the matrix one anti-diagonal at a time.
///
/// Cells on an anti-diagonal depend only on the two previous ones, so each
/// vector holds `N` consecutive query positions of one diagonal. The diagonals
/// are stored by query position offset by one: slot `0` is row `-1`, and slot
/// `i + 1` is row `i`. Slot `d + 1` of diagonal `d` is column `-1`.
///
/// See **[module citations](crate::alignment::kernels#module-citations)**.
///
/// ## Complexity
///
/// For query length $m$, reference length $n$, and $N$ SIMD lanes:
///
/// - Time: $O(mn/N)$ plus $O(mn)$ scalar gathers of substitution scores
/// - Space: $O(m)$, plus whatever the recorder stores
#[allow(non_snake_case, clippy::too_many_lines)]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub(crate) fn diag<T, const N: usize>(
    problem: &Problem<'_>, mut recorder: Option<&mut CellRecorder<'_>>, stop_on_saturation: bool,
) -> Result<KernelOutput, AlignError>
where
    T: AlignableIntWidth,
    Simd<T, N>: SimdAnyInt<T, N>, {
    let Some(limits) = problem.limits::<T>() else {
        return Ok(KernelOutput::overflowed());
    };

    let (m, n) = (problem.m(), problem.n());
    let boundary = problem.boundary;
    let local = problem.regime.is_local();
    let sat = T::saturate_from;

    let gap_opens = Simd::splat(sat(boundary.open));
    let gap_extends = Simd::splat(sat(boundary.extend));
    let zeros = Simd::splat(T::ZERO);
    let floor = Simd::splat(T::MIN);
    let (low, high) = (Simd::splat(limits.low), Simd::splat(limits.high));

    // Room for a full vector starting at the last row
    let len = m + 1 + N;
    let mut h2 = try_filled(len, T::MIN)?;
    let mut h1 = try_filled(len, T::MIN)?;
    let mut h0 = try_filled(len, T::MIN)?;
    let mut e1 = try_filled(len, T::MIN)?;
    let mut e0 = try_filled(len, T::MIN)?;
    let mut f1 = try_filled(len, T::MIN)?;
    let mut f0 = try_filled(len, T::MIN)?;

    // Diagonal -2 is the corner, diagonal -1 its two neighbors
    h2[0] = T::ZERO;
    h1[0] = sat(boundary.top(0));
    h1[1] = sat(boundary.left(0));

    let mut tracker = EndTracker::new(problem.regime, m, n);
    let mut saturated = false;

    for d in 0..m + n - 1 {
        let i_min = d.saturating_sub(n - 1);
        let i_max = (m - 1).min(d);

        for i in (i_min..=i_max).step_by(N) {
            let in_range = Mask::from_array(std::array::from_fn(|lane| i + lane <= i_max));
            let scores = Simd::from_array(std::array::from_fn(|lane| {
                let row = i + lane;
                if row <= i_max { sat(problem.score(row, d - row)) } else { T::ZERO }
            }));

            let diag = Simd::from_slice(&h2[i..]);
            let E = Simd::from_slice(&h1[i + 1..])
                .saturating_sub(gap_opens)
                .simd_max(Simd::from_slice(&e1[i + 1..]).saturating_sub(gap_extends));
            let F = Simd::from_slice(&h1[i..])
                .saturating_sub(gap_opens)
                .simd_max(Simd::from_slice(&f1[i..]).saturating_sub(gap_extends));

            let mut H = diag.saturating_add(scores).simd_max(E).simd_max(F);
            if local {
                H = H.simd_max(zeros);
            }

            H.copy_to_slice(&mut h0[i + 1..]);
            E.copy_to_slice(&mut e0[i + 1..]);
            F.copy_to_slice(&mut f0[i + 1..]);

            saturated |= ((H.simd_le(low) | H.simd_ge(high)) & in_range).any();

            // Only local alignment considers every cell of a diagonal
            if local {
                let best = in_range.select(H, floor).reduce_max();
                if tracker.accepts(best.into(), d - i) {
                    for lane in 0..N {
                        let row = i + lane;
                        if row <= i_max {
                            tracker.offer(row, d - row, H[lane].into());
                        }
                    }
                }
            }
        }

        if !local {
            // The last row and last column are the only other candidates
            if d + 1 >= m && d + 1 - m < n {
                let j = d + 1 - m;
                if tracker.is_candidate(m - 1, j) {
                    tracker.offer(m - 1, j, h0[m].into());
                }
            }
            if d + 1 >= n && d + 1 - n < m {
                let i = d + 1 - n;
                if tracker.is_candidate(i, n - 1) {
                    tracker.offer(i, n - 1, h0[i + 1].into());
                }
            }
        }

        if let Some(recorder) = recorder.as_deref_mut() {
            for i in (i_min..=i_max).rev() {
                recorder.cell(i, d - i, h0[i + 1].into());
            }
        }

        if saturated && stop_on_saturation {
            break;
        }

        // Boundary slots of diagonal d, read by diagonals d + 1 and d + 2
        h0[0] = sat(boundary.top(d + 1));
        f0[0] = T::MIN;
        if d + 2 <= m {
            h0[d + 2] = sat(boundary.left(d + 1));
            e0[d + 2] = T::MIN;
        }

        (h2, h1, h0) = (h1, h0, h2);
        (e1, e0) = (e0, e1);
        (f1, f0) = (f0, f1);
    }

    Ok(KernelOutput::from_tracker(&tracker, saturated))
}
