//! Per-cell bookkeeping shared by every kernel: the boundary of the dynamic
//! programming matrix, end-cell selection, and the recorder that turns final
//! `H` values into statistics, tables, and traceback bytes.

use crate::{
    alignment::{AlignError, Regime, Storage, errors::try_filled, profile::ProfileTallies},
    data::matrices::SubstitutionMatrix,
};
use std::ops::Add;

/// Negative infinity for the `i64` recurrences. Far enough from `i64::MIN`
/// that subtracting penalties cannot wrap.
pub(crate) const NEG_INF: i64 = i64::MIN / 4;

/// Gap penalties and free ends for one alignment problem.
///
/// Rows are query positions `i`, columns are reference positions `j`. Row `-1`
/// and column `-1` hold the boundary scores.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Boundary {
    pub open:   i64,
    pub extend: i64,
    top_free:   bool,
    left_free:  bool,
}

impl Boundary {
    pub(crate) fn new(regime: Regime, open: i64, extend: i64) -> Self {
        Boundary {
            open,
            extend,
            top_free: regime.is_local() || regime.query_begin_free(),
            left_free: regime.is_local() || regime.ref_begin_free(),
        }
    }

    /// `H(-1, j)`
    #[inline]
    pub(crate) fn top(&self, j: usize) -> i64 {
        if self.top_free { 0 } else { -self.gap(j + 1) }
    }

    /// `H(i, -1)`
    #[inline]
    pub(crate) fn left(&self, i: usize) -> i64 {
        if self.left_free { 0 } else { -self.gap(i + 1) }
    }

    /// `H(-1, j - 1)`, the diagonal predecessor of `(0, j)`, including the
    /// corner `H(-1, -1) = 0`.
    #[inline]
    pub(crate) fn corner(&self, j: usize) -> i64 {
        if j == 0 { 0 } else { self.top(j - 1) }
    }

    /// Whether column `-1` is zero, so a leading run of query symbols is not
    /// charged.
    #[inline]
    pub(crate) fn query_prefix_free(&self) -> bool {
        self.left_free
    }

    /// Whether row `-1` is zero, so a leading run of reference symbols is not
    /// charged.
    #[inline]
    pub(crate) fn ref_prefix_free(&self) -> bool {
        self.top_free
    }

    /// Cost of a gap of `len` cells.
    #[inline]
    fn gap(&self, len: usize) -> i64 {
        #[allow(clippy::cast_possible_wrap)]
        let len = len as i64;
        self.open + (len - 1) * self.extend
    }

    #[inline]
    fn top_length(&self, j: usize) -> i64 {
        if self.top_free { 0 } else { cells(j) }
    }

    #[inline]
    fn left_length(&self, i: usize) -> i64 {
        if self.left_free { 0 } else { cells(i) }
    }
}

#[inline]
#[allow(clippy::cast_possible_wrap)]
fn cells(index: usize) -> i64 {
    index as i64 + 1
}

/// Which cells of a column may end the alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Scope {
    All,
    LastRow,
    Nothing,
}

/// Tracks the best end cell. Among equal scores the cell with the larger
/// reference position wins, then the larger query position, so the result does
/// not depend on the order in which a kernel visits cells.
#[derive(Clone, Debug)]
pub(crate) struct EndTracker {
    every_cell: bool,
    last_row:   bool,
    last_col:   bool,
    m:          usize,
    n:          usize,
    best:       Option<(i64, usize, usize)>,
}

impl EndTracker {
    pub(crate) fn new(regime: Regime, m: usize, n: usize) -> Self {
        EndTracker {
            every_cell: regime.is_local(),
            last_row: regime.query_end_free(),
            last_col: regime.ref_end_free(),
            m,
            n,
            best: None,
        }
    }

    /// The candidate cells of column `j`.
    #[inline]
    pub(crate) fn scope(&self, j: usize) -> Scope {
        if self.every_cell || (self.last_col && j + 1 == self.n) {
            Scope::All
        } else if self.last_row || j + 1 == self.n {
            Scope::LastRow
        } else {
            Scope::Nothing
        }
    }

    #[inline]
    pub(crate) fn is_candidate(&self, i: usize, j: usize) -> bool {
        match self.scope(j) {
            Scope::All => true,
            Scope::LastRow => i + 1 == self.m,
            Scope::Nothing => false,
        }
    }

    /// Whether a cell of column `j` scoring `h` could replace the current
    /// best. Lets vector kernels skip the per-lane search.
    #[inline]
    pub(crate) fn accepts(&self, h: i64, j: usize) -> bool {
        match self.best {
            None => true,
            Some((best, _, end_j)) => h > best || (h == best && j >= end_j),
        }
    }

    /// Offers a candidate cell, returning whether it became the best.
    #[inline]
    pub(crate) fn offer(&mut self, i: usize, j: usize, h: i64) -> bool {
        let better = match self.best {
            None => true,
            Some((best, end_i, end_j)) => (h, j, i) > (best, end_j, end_i),
        };
        if better {
            self.best = Some((h, i, j));
        }
        better
    }

    /// The best `(score, end_query, end_ref)`.
    #[inline]
    pub(crate) fn best(&self) -> Option<(i64, usize, usize)> {
        self.best
    }
}

/// Matches, positive-scoring pairs, and alignment length along a path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tally {
    pub matches: i64,
    pub similar: i64,
    pub length:  i64,
}

impl Tally {
    const GAP: Tally = Tally {
        matches: 0,
        similar: 0,
        length:  1,
    };

    #[inline]
    fn gapped(length: i64) -> Self {
        Tally {
            matches: 0,
            similar: 0,
            length,
        }
    }
}

impl Add for Tally {
    type Output = Tally;

    #[inline]
    fn add(self, rhs: Tally) -> Tally {
        Tally {
            matches: self.matches + rhs.matches,
            similar: self.similar + rhs.similar,
            length:  self.length + rhs.length,
        }
    }
}

/// Traceback byte layout: the source of `H` in the two low bits, then whether
/// `E` and `F` opened at this cell.
pub(crate) mod trace {
    pub const SOURCE: u8 = 0b11;
    pub const ZERO: u8 = 0;
    pub const DIAG: u8 = 1;
    /// `E`, horizontal, from `(i, j - 1)`.
    pub const LEFT: u8 = 2;
    /// `F`, vertical, from `(i - 1, j)`.
    pub const UP: u8 = 3;
    pub const LEFT_OPEN: u8 = 1 << 2;
    pub const UP_OPEN: u8 = 1 << 3;
}

/// Scores and optionally the three statistics for a set of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Planes {
    pub score:   Vec<i64>,
    pub matches: Vec<i64>,
    pub similar: Vec<i64>,
    pub length:  Vec<i64>,
}

impl Planes {
    fn new(len: usize, stats: bool) -> Result<Self, AlignError> {
        let stat_len = if stats { len } else { 0 };
        Ok(Planes {
            score:   try_filled(len, 0)?,
            matches: try_filled(stat_len, 0)?,
            similar: try_filled(stat_len, 0)?,
            length:  try_filled(stat_len, 0)?,
        })
    }

    #[inline]
    fn set(&mut self, index: usize, h: i64, tally: Option<Tally>) {
        self.score[index] = h;
        if let Some(t) = tally {
            self.matches[index] = t.matches;
            self.similar[index] = t.similar;
            self.length[index] = t.length;
        }
    }
}

/// The final row and column of the matrix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RowCol {
    pub row: Planes,
    pub col: Planes,
}

/// Everything a [`CellRecorder`] collected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Recording {
    pub end:       Option<(i64, usize, usize)>,
    pub end_tally: Option<Tally>,
    pub table:     Option<Planes>,
    pub rowcol:    Option<RowCol>,
    pub trace:     Option<Vec<u8>>,
}

/// Running statistics for the current and previous column of each row.
struct RowTallies {
    cur:  Vec<Tally>,
    prev: Vec<Tally>,
    e:    Vec<Tally>,
    f:    Vec<Tally>,
}

/// Rebuilds the per-cell state the storage variants need from final `H`
/// values alone.
///
/// A cell may be fed once `(i - 1, j)` and `(i, j - 1)` have been, and before
/// `(i, j + 1)` and `(i + 1, j + 1)`. Column-major order and anti-diagonals
/// visited with decreasing `i` both qualify. `E` and `F` are recomputed in
/// `i64`, so every layout records the same bytes for the same `H` matrix.
pub(crate) struct CellRecorder<'a> {
    query:     &'a [u8],
    reference: &'a [u8],
    matrix:    &'a SubstitutionMatrix,
    tallies:   Option<&'a ProfileTallies>,
    boundary:  Boundary,
    local:     bool,
    n:         usize,

    h_cur:  Vec<i64>,
    h_prev: Vec<i64>,
    e_cur:  Vec<i64>,
    f_cur:  Vec<i64>,
    stats:  Option<RowTallies>,

    tracker:   EndTracker,
    end_tally: Option<Tally>,
    table:     Option<Planes>,
    rowcol:    Option<RowCol>,
    trace:     Option<Vec<u8>>,
}

impl<'a> CellRecorder<'a> {
    /// ## Errors
    ///
    /// [`AlignError::OutOfMemory`] if the tables cannot be allocated.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        query: &'a [u8], reference: &'a [u8], matrix: &'a SubstitutionMatrix, tallies: Option<&'a ProfileTallies>,
        regime: Regime, boundary: Boundary, storage: Storage,
    ) -> Result<Self, AlignError> {
        let (m, n) = (query.len(), reference.len());
        let has_stats = storage.has_stats();

        let stats = if has_stats {
            Some(RowTallies {
                cur:  try_filled(m, Tally::default())?,
                prev: try_filled(m, Tally::default())?,
                e:    try_filled(m, Tally::default())?,
                f:    try_filled(m, Tally::default())?,
            })
        } else {
            None
        };

        let cells = m
            .checked_mul(n)
            .ok_or(AlignError::OutOfMemory { bytes: usize::MAX })?;

        Ok(CellRecorder {
            query,
            reference,
            matrix,
            tallies,
            boundary,
            local: regime.is_local(),
            n,
            h_cur: try_filled(m, NEG_INF)?,
            h_prev: try_filled(m, NEG_INF)?,
            e_cur: try_filled(m, NEG_INF)?,
            f_cur: try_filled(m, NEG_INF)?,
            stats,
            tracker: EndTracker::new(regime, m, n),
            end_tally: None,
            table: if storage.has_table() {
                Some(Planes::new(cells, has_stats)?)
            } else {
                None
            },
            rowcol: if storage.has_rowcol() {
                Some(RowCol {
                    row: Planes::new(n, has_stats)?,
                    col: Planes::new(m, has_stats)?,
                })
            } else {
                None
            },
            trace: if storage.has_trace() {
                Some(try_filled(cells, 0)?)
            } else {
                None
            },
        })
    }

    /// Records the final `H` value of cell `(i, j)`.
    pub(crate) fn cell(&mut self, i: usize, j: usize, h: i64) {
        let b = self.boundary;
        let q = self.query[i];
        let r = self.reference[j];
        let sub = i64::from(self.matrix.score_ordinals(usize::from(q), usize::from(r)));

        let diag = if i == 0 {
            b.corner(j)
        } else if j == 0 {
            b.left(i - 1)
        } else {
            self.h_prev[i - 1]
        } + sub;

        let (h_left, e_left) = if j == 0 {
            (b.left(i), NEG_INF)
        } else {
            (self.h_cur[i], self.e_cur[i])
        };
        let e_open = h_left - b.open;
        let e_extend = e_left - b.extend;
        let e = e_open.max(e_extend);

        let (h_up, f_up) = if i == 0 {
            (b.top(j), NEG_INF)
        } else {
            (self.h_cur[i - 1], self.f_cur[i - 1])
        };
        let f_open = h_up - b.open;
        let f_extend = f_up - b.extend;
        let f = f_open.max(f_extend);

        let source = if self.local && h == 0 {
            trace::ZERO
        } else if h == diag {
            trace::DIAG
        } else if h == e {
            trace::LEFT
        } else if h == f {
            trace::UP
        } else {
            // Only reachable from a saturated kernel, whose result is flagged
            trace::DIAG
        };

        let tally = self.stats.as_mut().map(|s| {
            let diag_tally = if i == 0 {
                Tally::default()
            } else if j == 0 {
                Tally::gapped(b.left_length(i - 1))
            } else {
                s.prev[i - 1]
            };
            let left_tally = if j == 0 { Tally::gapped(b.left_length(i)) } else { s.cur[i] };
            let up_tally = if i == 0 { Tally::gapped(b.top_length(j)) } else { s.cur[i - 1] };

            let e_tally = if e_open >= e_extend { left_tally } else { s.e[i] } + Tally::GAP;
            let f_tally = if i == 0 || f_open >= f_extend { up_tally } else { s.f[i - 1] } + Tally::GAP;

            let (exact, similar) = match self.tallies {
                Some(t) => t.get(i, r),
                None => (q == r, sub > 0),
            };
            let tally = match source {
                trace::ZERO => Tally::default(),
                trace::DIAG => {
                    diag_tally
                        + Tally {
                            matches: i64::from(exact),
                            similar: i64::from(similar),
                            length:  1,
                        }
                }
                trace::LEFT => e_tally,
                _ => f_tally,
            };

            s.prev[i] = left_tally;
            s.cur[i] = tally;
            s.e[i] = e_tally;
            s.f[i] = f_tally;
            tally
        });

        self.h_prev[i] = h_left;
        self.h_cur[i] = h;
        self.e_cur[i] = e;
        self.f_cur[i] = f;

        if self.tracker.is_candidate(i, j) && self.tracker.offer(i, j, h) {
            self.end_tally = tally;
        }

        let index = i * self.n + j;
        if let Some(table) = &mut self.table {
            table.set(index, h, tally);
        }
        if let Some(rowcol) = &mut self.rowcol {
            if i + 1 == self.query.len() {
                rowcol.row.set(j, h, tally);
            }
            if j + 1 == self.n {
                rowcol.col.set(i, h, tally);
            }
        }
        if let Some(trace) = &mut self.trace {
            let mut byte = source;
            if e_open >= e_extend {
                byte |= trace::LEFT_OPEN;
            }
            if f_open >= f_extend {
                byte |= trace::UP_OPEN;
            }
            trace[index] = byte;
        }
    }

    pub(crate) fn finish(self) -> Recording {
        Recording {
            end:       self.tracker.best(),
            end_tally: self.end_tally,
            table:     self.table,
            rowcol:    self.rowcol,
            trace:     self.trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn boundary_values() {
        let nw = Boundary::new(Regime::Nw, 10, 1);
        assert_eq!(nw.top(0), -10);
        assert_eq!(nw.top(2), -12);
        assert_eq!(nw.left(4), -14);
        assert_eq!(nw.corner(0), 0);
        assert_eq!(nw.corner(3), -12);

        let qb = Boundary::new(Regime::SgQb, 10, 1);
        assert_eq!(qb.top(5), 0);
        assert_eq!(qb.left(5), -15);

        let sw = Boundary::new(Regime::Sw, 10, 1);
        assert_eq!(sw.top(5), 0);
        assert_eq!(sw.left(5), 0);
    }

    #[test]
    fn end_order() {
        let mut tracker = EndTracker::new(Regime::Sw, 5, 5);
        assert!(tracker.offer(1, 1, 3));
        assert!(!tracker.offer(4, 0, 3));
        assert!(tracker.offer(0, 2, 3));
        assert!(tracker.offer(3, 2, 3));
        assert!(!tracker.offer(4, 4, 2));
        assert_eq!(tracker.best(), Some((3, 3, 2)));
        assert!(tracker.accepts(3, 2));
        assert!(!tracker.accepts(3, 1));
    }

    #[test]
    fn end_scope() {
        let nw = EndTracker::new(Regime::Nw, 3, 4);
        assert_eq!(nw.scope(0), Scope::Nothing);
        assert_eq!(nw.scope(3), Scope::LastRow);
        assert!(nw.is_candidate(2, 3));
        assert!(!nw.is_candidate(1, 3));

        let sg = EndTracker::new(Regime::Sg, 3, 4);
        assert_eq!(sg.scope(0), Scope::LastRow);
        assert_eq!(sg.scope(3), Scope::All);

        let de = EndTracker::new(Regime::SgDe, 3, 4);
        assert_eq!(de.scope(1), Scope::Nothing);
        assert_eq!(de.scope(3), Scope::All);
    }
}
