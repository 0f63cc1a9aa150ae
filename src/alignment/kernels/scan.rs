use super::*;
use crate::{
    alignment::{AlignError, errors::try_filled, profile::StripedProfile},
    simd::SimdExt,
};

/// Fills the matrix with the striped layout, resolving `F` with a prefix scan
/// instead of a correction loop.
///
/// Each column takes three passes: `E` and a provisional `H` from the previous
/// column, `F` within each lane, then a max-scan across lanes whose result
/// decays by the extend penalty as it moves down a lane. The work per column
/// is fixed, so this layout does not depend on how often `F` wins.
///
/// See **[module citations](crate::alignment::kernels#module-citations)**.
///
/// ## Complexity
///
/// For query length $m$, reference length $n$, and $N$ SIMD lanes:
///
/// - Time: $O(mn/N + n \log N)$
/// - Space: $O(m)$, plus whatever the recorder stores
#[allow(non_snake_case)]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub(crate) fn scan<T, const N: usize>(
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

    #[allow(clippy::cast_possible_wrap)]
    let segment_extend = num_vecs as i64 * boundary.extend;

    // H of the previous column, then F, then H of this column
    let mut store = try_filled(num_vecs, minimums)?;
    let mut h_tmp = try_filled(num_vecs, minimums)?;
    let mut e_scores = try_filled(num_vecs, minimums)?;

    for (v, h) in store.iter_mut().enumerate() {
        *h = Simd::from_array(std::array::from_fn(|lane| {
            T::saturate_from(boundary.left(lane * num_vecs + v))
        }));
    }

    let mut tracker = EndTracker::new(problem.regime, m, problem.n());
    let mut saturated = false;

    for (j, &r) in problem.reference.iter().enumerate() {
        let scores_vec = profile.block(r);

        // E and the provisional H, which lacks F
        let mut H = store[num_vecs - 1].shift_elements_right_z::<1>(T::saturate_from(boundary.corner(j)));
        for v in 0..num_vecs {
            let prev = store[v];
            let E = prev
                .saturating_sub(gap_opens)
                .simd_max(e_scores[v].saturating_sub(gap_extends));
            e_scores[v] = E;

            let mut tmp = H.saturating_add(scores_vec[v]).simd_max(E);
            if local {
                tmp = tmp.simd_max(zeros);
            }
            h_tmp[v] = tmp;
            H = prev;
        }

        // F within each lane
        let mut F = minimums;
        F[0] = T::saturate_from(boundary.top(j) - boundary.open);
        for v in 0..num_vecs {
            store[v] = F;
            F = F
                .saturating_sub(gap_extends)
                .simd_max(h_tmp[v].saturating_sub(gap_opens));
        }

        // F entering each lane from all lanes above it
        let mut carry = F.shift_elements_right_z::<1>(T::MIN);
        if N > 1 {
            carry = carry.simd_max(sat_sub_wide(carry.shift_elements_right_z::<1>(T::MIN), segment_extend));
        }
        if N > 2 {
            carry = carry.simd_max(sat_sub_wide(carry.shift_elements_right_z::<2>(T::MIN), 2 * segment_extend));
        }
        if N > 4 {
            carry = carry.simd_max(sat_sub_wide(carry.shift_elements_right_z::<4>(T::MIN), 4 * segment_extend));
        }
        if N > 8 {
            carry = carry.simd_max(sat_sub_wide(carry.shift_elements_right_z::<8>(T::MIN), 8 * segment_extend));
        }
        if N > 16 {
            carry = carry.simd_max(sat_sub_wide(carry.shift_elements_right_z::<16>(T::MIN), 16 * segment_extend));
        }

        for v in 0..num_vecs {
            let F = store[v].simd_max(carry);
            store[v] = h_tmp[v].simd_max(F);
            carry = carry.saturating_sub(gap_extends);
        }

        saturated |= finish_striped_column(&store, &valid, j, m, limits, &mut tracker, recorder.as_deref_mut());
        if saturated && stop_on_saturation {
            break;
        }
    }

    Ok(KernelOutput::from_tracker(&tracker, saturated))
}
