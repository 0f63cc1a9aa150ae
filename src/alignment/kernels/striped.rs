use super::*;
use crate::{
    alignment::{AlignError, errors::try_filled, profile::StripedProfile},
    simd::SimdExt,
};

/// Fills the matrix with Farrar's striped layout.
///
/// Each column is computed in one pass over the striped vectors, assuming `F`
/// never crosses a lane boundary; the lazy loop then carries `F` across lanes
/// until it stops improving any cell, fixing `H` and the next column's `E` as
/// it goes.
///
/// If the lanes saturate, the output is flagged. With `stop_on_saturation` the
/// kernel returns as soon as that happens, since the saturation cascade will
/// discard the result.
///
/// See **[module citations](crate::alignment::kernels#module-citations)**.
///
/// ## Complexity
///
/// For query length $m$, reference length $n$, and $N$ SIMD lanes:
///
/// - Time: $O(mn)$, with the average case as $O(mn/N)$
/// - Space: $O(m)$, plus whatever the recorder stores
#[allow(non_snake_case)]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub(crate) fn striped<T, const N: usize>(
    problem: &Problem<'_>, profile: &StripedProfile<T, N>, mut recorder: Option<&mut CellRecorder<'_>>,
    stop_on_saturation: bool,
) -> Result<KernelOutput, AlignError>
where
    T: AlignableIntWidth,
    Simd<T, N>: SimdAnyInt<T, N>, {
    let Some(limits) = problem.limits::<T>() else {
        return Ok(KernelOutput::overflowed());
    };

    let m = problem.m();
    let num_vecs = profile.number_vectors();
    let boundary = problem.boundary;
    let local = problem.regime.is_local();

    let gap_opens = Simd::splat(T::saturate_from(boundary.open));
    let gap_extends = Simd::splat(T::saturate_from(boundary.extend));
    let minimums = Simd::splat(T::MIN);
    let zeros = Simd::splat(T::ZERO);
    let valid = lane_masks::<T, N>(m, num_vecs);

    let mut load = try_filled(num_vecs, minimums)?;
    let mut store = try_filled(num_vecs, minimums)?;
    let mut e_scores = try_filled(num_vecs, minimums)?;

    // Column -1
    for v in 0..num_vecs {
        let left = |lane: usize| boundary.left(lane * num_vecs + v);
        store[v] = Simd::from_array(std::array::from_fn(|lane| T::saturate_from(left(lane))));
        e_scores[v] = Simd::from_array(std::array::from_fn(|lane| T::saturate_from(left(lane) - boundary.open)));
    }

    let mut tracker = EndTracker::new(problem.regime, m, problem.n());
    let mut saturated = false;

    for (j, &r) in problem.reference.iter().enumerate() {
        let mut H = store[num_vecs - 1].shift_elements_right_z::<1>(T::saturate_from(boundary.corner(j)));
        let mut F = minimums;
        F[0] = T::saturate_from(boundary.top(j) - boundary.open);

        (load, store) = (store, load);

        let scores_vec = profile.block(r);

        for v in 0..num_vecs {
            let mut E = e_scores[v];

            H = H.saturating_add(scores_vec[v]).simd_max(E).simd_max(F);
            if local {
                H = H.simd_max(zeros);
            }
            store[v] = H;

            H = H.saturating_sub(gap_opens);
            E = E.saturating_sub(gap_extends).simd_max(H);
            F = F.saturating_sub(gap_extends).simd_max(H);

            e_scores[v] = E;
            H = load[v];
        }

        'lazy_f: for _ in 0..N {
            F = F.shift_elements_right_z::<1>(T::MIN);

            for (store_v, e_v) in store.iter_mut().zip(e_scores.iter_mut()) {
                H = *store_v;

                if !F.simd_gt(H.saturating_sub(gap_opens)).any() {
                    break 'lazy_f;
                }

                H = H.simd_max(F);
                *store_v = H;
                *e_v = e_v.simd_max(H.saturating_sub(gap_opens));

                F = F.saturating_sub(gap_extends);
            }
        }

        saturated |= finish_striped_column(&store, &valid, j, m, limits, &mut tracker, recorder.as_deref_mut());
        if saturated && stop_on_saturation {
            break;
        }
    }

    Ok(KernelOutput::from_tracker(&tracker, saturated))
}
