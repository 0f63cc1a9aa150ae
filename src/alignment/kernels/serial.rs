use super::*;
use crate::alignment::{AlignError, errors::try_filled, recorder::NEG_INF};

/// Fills the matrix one reference column at a time in `i64`.
///
/// This is the reference implementation: it never saturates and every other
/// kernel is checked against it.
///
/// ## Complexity
///
/// For query length $m$ and reference length $n$:
///
/// - Time: $O(mn)$
/// - Space: $O(m)$, plus whatever the recorder stores
pub(crate) fn serial(problem: &Problem<'_>, mut recorder: Option<&mut CellRecorder<'_>>) -> Result<KernelOutput, AlignError> {
    let (m, n) = (problem.m(), problem.n());
    let Boundary { open, extend, .. } = problem.boundary;
    let local = problem.regime.is_local();

    // H(i, j - 1) and E(i, j - 1), initialized for column -1
    let mut h_col = try_filled(m, 0i64)?;
    let mut e_col = try_filled(m, NEG_INF)?;
    for (i, h) in h_col.iter_mut().enumerate() {
        *h = problem.boundary.left(i);
    }

    let mut tracker = EndTracker::new(problem.regime, m, n);

    for j in 0..n {
        let mut diag = problem.boundary.corner(j);
        let mut up = problem.boundary.top(j);
        let mut f = NEG_INF;

        for i in 0..m {
            let e = (h_col[i] - open).max(e_col[i] - extend);
            f = (up - open).max(f - extend);

            let mut h = (diag + problem.score(i, j)).max(e).max(f);
            if local {
                h = h.max(0);
            }

            diag = h_col[i];
            h_col[i] = h;
            e_col[i] = e;
            up = h;

            if tracker.is_candidate(i, j) {
                tracker.offer(i, j, h);
            }
            if let Some(recorder) = recorder.as_deref_mut() {
                recorder.cell(i, j, h);
            }
        }
    }

    Ok(KernelOutput::from_tracker(&tracker, false))
}
