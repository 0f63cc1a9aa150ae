use crate::{
    alignment::{
        AlignError, KernelSpec, Layout, Regime, Storage, Width,
        recorder::{Planes, RowCol, Tally},
        traceback::Memo,
    },
    data::matrices::SubstitutionMatrix,
};

/// What a deferred traceback needs: the trace bytes and owned copies of the
/// inputs.
#[derive(Clone, Debug)]
pub(crate) struct TraceData {
    pub trace:     Vec<u8>,
    pub query:     Vec<u8>,
    pub reference: Vec<u8>,
    pub matrix:    SubstitutionMatrix,
    pub open:      i64,
    pub extend:    i64,
}

/// The outcome of one alignment.
///
/// Every result carries the score and the 0-based, inclusive end cell. What
/// else is available depends on the [`Storage`] of the kernel that produced
/// it: accessors for data that was not stored return
/// [`AlignError::InvalidArgument`], and tracebacks of results without trace
/// storage return [`AlignError::TraceUnavailable`].
///
/// Tables are row-major with one row per query position, so the cell for
/// query position `i` and reference position `j` is at `i * len_ref + j`.
///
/// ```
/// # use pairalign::{alignment::align, data::matrices::SubstitutionMatrix};
/// let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
/// let result = align("sw_stats_table_scan_16".parse().unwrap(), b"AGCT", b"AGCT", 10, 1, &matrix).unwrap();
/// assert_eq!(result.score(), 8);
/// assert_eq!(result.matches().unwrap(), 4);
/// assert_eq!(result.score_table().unwrap()[3 * 4 + 3], 8);
/// assert!(result.score_row().is_err());
/// ```
#[derive(Debug)]
pub struct AlignResult {
    pub(crate) score:     i64,
    pub(crate) end_query: usize,
    pub(crate) end_ref:   usize,
    pub(crate) len_query: usize,
    pub(crate) len_ref:   usize,
    pub(crate) spec:      KernelSpec,
    pub(crate) width:     Option<Width>,
    pub(crate) saturated: bool,
    pub(crate) banded:    bool,
    pub(crate) tally:     Option<Tally>,
    pub(crate) table:     Option<Planes>,
    pub(crate) rowcol:    Option<RowCol>,
    pub(crate) trace:     Option<TraceData>,
    pub(crate) memo:      Memo,
}

macro_rules! plane_accessor {
    ($(#[$doc:meta])* $name:ident, $source:ident, $storage:literal, $($path:tt)+) => {
        $(#[$doc])*
        ///
        /// ## Errors
        ///
        #[doc = concat!("[`AlignError::InvalidArgument`] unless the result was computed with `", $storage, "` storage.")]
        pub fn $name(&self) -> Result<&[i64], AlignError> {
            self.$source
                .as_ref()
                .map(|s| &s.$($path)+[..])
                .filter(|plane| !plane.is_empty())
                .ok_or_else(|| self.missing(stringify!($name)))
        }
    };
}

impl AlignResult {
    #[inline]
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// The 0-based query position of the end cell.
    #[inline]
    #[must_use]
    pub fn end_query(&self) -> usize {
        self.end_query
    }

    /// The 0-based reference position of the end cell.
    #[inline]
    #[must_use]
    pub fn end_ref(&self) -> usize {
        self.end_ref
    }

    #[inline]
    #[must_use]
    pub fn len_query(&self) -> usize {
        self.len_query
    }

    #[inline]
    #[must_use]
    pub fn len_ref(&self) -> usize {
        self.len_ref
    }

    /// The kernel that produced this result. When a vectorized layout fell
    /// back to the serial kernel, this reports the serial kernel.
    #[inline]
    #[must_use]
    pub fn spec(&self) -> KernelSpec {
        self.spec
    }

    #[inline]
    #[must_use]
    pub fn regime(&self) -> Regime {
        self.spec.regime
    }

    #[inline]
    #[must_use]
    pub fn storage(&self) -> Storage {
        self.spec.storage
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.spec.layout
    }

    /// The fixed width of the final pass, after any saturation cascade. `None`
    /// for serial and banded kernels, which compute in 64 bits.
    #[inline]
    #[must_use]
    pub fn width(&self) -> Option<Width> {
        self.width
    }

    /// Whether the score may be wrong because the lanes saturated. With the
    /// `sat` width this only happens if 64-bit lanes saturate too.
    #[inline]
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    #[inline]
    #[must_use]
    pub fn is_banded(&self) -> bool {
        self.banded
    }

    #[inline]
    #[must_use]
    pub fn is_nw(&self) -> bool {
        self.spec.regime.is_global()
    }

    #[inline]
    #[must_use]
    pub fn is_sw(&self) -> bool {
        self.spec.regime.is_local()
    }

    #[inline]
    #[must_use]
    pub fn is_sg(&self) -> bool {
        self.spec.regime.is_semi_global()
    }

    #[inline]
    #[must_use]
    pub fn is_serial(&self) -> bool {
        self.spec.layout == Layout::Serial
    }

    #[inline]
    #[must_use]
    pub fn is_scan(&self) -> bool {
        self.spec.layout == Layout::Scan
    }

    #[inline]
    #[must_use]
    pub fn is_striped(&self) -> bool {
        self.spec.layout == Layout::Striped
    }

    #[inline]
    #[must_use]
    pub fn is_diag(&self) -> bool {
        self.spec.layout == Layout::Diag
    }

    /// No kernel uses the blocked layout.
    #[inline]
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        false
    }

    /// Whether any statistics were stored, in any shape.
    #[inline]
    #[must_use]
    pub fn is_stats(&self) -> bool {
        self.spec.storage.has_stats()
    }

    #[inline]
    #[must_use]
    pub fn is_stats_table(&self) -> bool {
        self.spec.storage == Storage::StatsTable
    }

    #[inline]
    #[must_use]
    pub fn is_stats_rowcol(&self) -> bool {
        self.spec.storage == Storage::StatsRowcol
    }

    /// Whether a full score table was stored, with or without statistics.
    #[inline]
    #[must_use]
    pub fn is_table(&self) -> bool {
        self.spec.storage.has_table()
    }

    /// Whether the last row and column were stored, with or without
    /// statistics.
    #[inline]
    #[must_use]
    pub fn is_rowcol(&self) -> bool {
        self.spec.storage.has_rowcol()
    }

    #[inline]
    #[must_use]
    pub fn is_trace(&self) -> bool {
        self.trace.is_some()
    }

    fn missing(&self, what: &str) -> AlignError {
        AlignError::invalid(format!("{what} is not available from a '{}' result", self.spec))
    }

    fn end_tally(&self, what: &str) -> Result<Tally, AlignError> {
        self.tally.ok_or_else(|| self.missing(what))
    }

    /// Exact matches on the optimal path.
    ///
    /// ## Errors
    ///
    /// [`AlignError::InvalidArgument`] unless the result has statistics.
    pub fn matches(&self) -> Result<i64, AlignError> {
        self.end_tally("matches").map(|t| t.matches)
    }

    /// Positive-scoring pairs on the optimal path.
    ///
    /// ## Errors
    ///
    /// [`AlignError::InvalidArgument`] unless the result has statistics.
    pub fn similar(&self) -> Result<i64, AlignError> {
        self.end_tally("similar").map(|t| t.similar)
    }

    /// Cells on the optimal path, gaps included.
    ///
    /// ## Errors
    ///
    /// [`AlignError::InvalidArgument`] unless the result has statistics.
    pub fn length(&self) -> Result<i64, AlignError> {
        self.end_tally("length").map(|t| t.length)
    }

    plane_accessor!(
        /// The full score table.
        score_table, table, "table", score
    );
    plane_accessor!(
        /// Exact matches on the best path into each cell.
        matches_table, table, "stats_table", matches
    );
    plane_accessor!(similar_table, table, "stats_table", similar);
    plane_accessor!(length_table, table, "stats_table", length);

    plane_accessor!(
        /// Scores of the last query position, one per reference position.
        score_row, rowcol, "rowcol", row.score
    );
    plane_accessor!(
        /// Scores of the last reference position, one per query position.
        score_col, rowcol, "rowcol", col.score
    );
    plane_accessor!(matches_row, rowcol, "stats_rowcol", row.matches);
    plane_accessor!(matches_col, rowcol, "stats_rowcol", col.matches);
    plane_accessor!(similar_row, rowcol, "stats_rowcol", row.similar);
    plane_accessor!(similar_col, rowcol, "stats_rowcol", col.similar);
    plane_accessor!(length_row, rowcol, "stats_rowcol", row.length);
    plane_accessor!(length_col, rowcol, "stats_rowcol", col.length);
}
