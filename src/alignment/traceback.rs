//! Recovering the optimal path from a trace result: aligned strings, CIGAR
//! strings, and rescoring a CIGAR.

use crate::{
    alignment::{
        AlignError, AlignResult,
        recorder::{Boundary, trace},
        result::TraceData,
    },
    data::{
        cigar::{Cigar, Ciglet, cigar_encode},
        matrices::SubstitutionMatrix,
    },
};
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

/// Byte comparison used for the comparison line and `=`/`X` operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
struct SymbolEquality {
    case_sensitive: bool,
    aliases:        Vec<(u8, u8)>,
}

impl SymbolEquality {
    fn normalize(&self, b: u8) -> u8 {
        if self.case_sensitive { b } else { b.to_ascii_uppercase() }
    }

    fn same(&self, a: u8, b: u8) -> bool {
        let (a, b) = (self.normalize(a), self.normalize(b));
        a == b
            || self.aliases.iter().any(|&(x, y)| {
                let (x, y) = (self.normalize(x), self.normalize(y));
                (a, b) == (x, y) || (a, b) == (y, x)
            })
    }
}

/// Rendering options for [`AlignResult::traceback`].
///
/// Only the first byte of each marker is used; an empty marker renders as a
/// space. Symbols are compared case-insensitively unless `case_sensitive` is
/// set, and each pair in `alphabet_aliases` compares equal in either order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TracebackOptions {
    pub match_marker:     String,
    pub similar_marker:   String,
    pub negative_marker:  String,
    pub case_sensitive:   bool,
    pub alphabet_aliases: Vec<(u8, u8)>,
}

impl Default for TracebackOptions {
    fn default() -> Self {
        TracebackOptions {
            match_marker:     "|".to_string(),
            similar_marker:   ":".to_string(),
            negative_marker:  ".".to_string(),
            case_sensitive:   false,
            alphabet_aliases: Vec::new(),
        }
    }
}

impl TracebackOptions {
    fn equality(&self) -> SymbolEquality {
        SymbolEquality {
            case_sensitive: self.case_sensitive,
            aliases:        self.alphabet_aliases.clone(),
        }
    }
}

/// Rendering options for [`AlignResult::cigar`]. With `extended_ops`, aligned
/// pairs are split into `=` and `X` instead of `M`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CigarOptions {
    pub extended_ops:     bool,
    pub case_sensitive:   bool,
    pub alphabet_aliases: Vec<(u8, u8)>,
}

impl CigarOptions {
    fn equality(&self) -> SymbolEquality {
        SymbolEquality {
            case_sensitive: self.case_sensitive,
            aliases:        self.alphabet_aliases.clone(),
        }
    }
}

/// An alignment as three lines of equal length: the query with gaps, a
/// comparison line, and the reference with gaps.
///
/// Global and semi-global alignments span both sequences in full; local
/// alignments only cover the aligned region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Traceback {
    pub query:      Vec<u8>,
    pub comparison: Vec<u8>,
    pub reference:  Vec<u8>,
}

impl fmt::Display for Traceback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.query))?;
        writeln!(f, "{}", String::from_utf8_lossy(&self.comparison))?;
        write!(f, "{}", String::from_utf8_lossy(&self.reference))
    }
}

/// A CIGAR string anchored at the first aligned query and reference
/// positions (0-based). Free end gaps are not part of the CIGAR.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AlignmentCigar {
    pub cigar:     Cigar,
    pub beg_query: usize,
    pub beg_ref:   usize,
}

impl AlignmentCigar {
    /// The operations packed as `len << 4 | code`.
    ///
    /// ## Errors
    ///
    /// Runs longer than 2<sup>28</sup> - 1 cannot be packed.
    pub fn packed(&self) -> Result<Vec<u32>, AlignError> {
        self.cigar
            .iter()
            .map(|Ciglet { inc, op }| {
                let len = u32::try_from(inc).map_err(|_| AlignError::invalid("CIGAR run is too long to pack"))?;
                Ok(cigar_encode(len, op)?)
            })
            .collect()
    }
}

impl fmt::Display for AlignmentCigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cigar)
    }
}

/// The last traceback and CIGAR built from a result, keyed by their options.
#[derive(Debug, Default)]
pub(crate) struct Memo {
    traceback: Mutex<Option<(TracebackOptions, Arc<Traceback>)>>,
    cigar:     Mutex<Option<(CigarOptions, Arc<AlignmentCigar>)>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    /// Query position `i` against reference position `j`.
    Pair(usize, usize),
    /// Query position `i` against a gap.
    Insertion(usize),
    /// Reference position `j` against a gap.
    Deletion(usize),
}

/// A path through the matrix in forward order. Steps flagged as free are end
/// gaps the regime does not charge for.
struct Path {
    steps: Vec<(Step, bool)>,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum State {
    H,
    E,
    F,
}

impl Path {
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn trace(result: &AlignResult, data: &TraceData) -> Path {
        let regime = result.regime();
        let local = regime.is_local();
        let (m, n) = (data.query.len(), data.reference.len());

        let mut core = Vec::new();
        let (mut i, mut j) = (result.end_query as isize, result.end_ref as isize);
        let mut state = State::H;
        let mut stopped = local && result.score == 0;

        while !stopped && i >= 0 && j >= 0 {
            let byte = data.trace[i as usize * n + j as usize];
            match state {
                State::H => match byte & trace::SOURCE {
                    trace::ZERO => stopped = true,
                    trace::DIAG => {
                        core.push(Step::Pair(i as usize, j as usize));
                        i -= 1;
                        j -= 1;
                    }
                    trace::LEFT => state = State::E,
                    _ => state = State::F,
                },
                State::E => {
                    core.push(Step::Deletion(j as usize));
                    if byte & trace::LEFT_OPEN != 0 {
                        state = State::H;
                    }
                    j -= 1;
                }
                State::F => {
                    core.push(Step::Insertion(i as usize));
                    if byte & trace::UP_OPEN != 0 {
                        state = State::H;
                    }
                    i -= 1;
                }
            }
        }

        let mut steps = Vec::with_capacity(m + n);
        if !local {
            let boundary = Boundary::new(regime, data.open, data.extend);
            let query_prefix_free = boundary.query_prefix_free();
            let ref_prefix_free = boundary.ref_prefix_free();
            if i >= 0 {
                steps.extend((0..=i as usize).map(|i| (Step::Insertion(i), query_prefix_free)));
            }
            if j >= 0 {
                steps.extend((0..=j as usize).map(|j| (Step::Deletion(j), ref_prefix_free)));
            }
        }

        steps.extend(core.into_iter().rev().map(|step| (step, false)));

        if !local {
            steps.extend((result.end_query + 1..m).map(|i| (Step::Insertion(i), true)));
            steps.extend((result.end_ref + 1..n).map(|j| (Step::Deletion(j), true)));
        }

        Path { steps }
    }
}

fn marker(marker: &str) -> u8 {
    marker.bytes().next().unwrap_or(b' ')
}

fn render_traceback(path: &Path, data: &TraceData, options: &TracebackOptions) -> Traceback {
    let equality = options.equality();
    let (matched, similar, negative) = (
        marker(&options.match_marker),
        marker(&options.similar_marker),
        marker(&options.negative_marker),
    );

    let mut out = Traceback {
        query:      Vec::with_capacity(path.steps.len()),
        comparison: Vec::with_capacity(path.steps.len()),
        reference:  Vec::with_capacity(path.steps.len()),
    };

    for &(step, _) in &path.steps {
        let (q, c, r) = match step {
            Step::Pair(i, j) => {
                let (q, r) = (data.query[i], data.reference[j]);
                let c = if equality.same(q, r) {
                    matched
                } else if data.matrix.score(q, r) > 0 {
                    similar
                } else {
                    negative
                };
                (q, c, r)
            }
            Step::Insertion(i) => (data.query[i], b' ', b'-'),
            Step::Deletion(j) => (b'-', b' ', data.reference[j]),
        };
        out.query.push(q);
        out.comparison.push(c);
        out.reference.push(r);
    }

    out
}

fn render_cigar(path: &Path, data: &TraceData, options: &CigarOptions) -> AlignmentCigar {
    let equality = options.equality();
    let aligned = || path.steps.iter().filter(|(_, free)| !free).map(|&(step, _)| step);

    // Positions consumed before the first charged step
    let (mut beg_query, mut beg_ref) = (0, 0);
    for &(step, free) in &path.steps {
        if !free {
            match step {
                Step::Pair(i, j) => (beg_query, beg_ref) = (i, j),
                Step::Insertion(i) => beg_query = i,
                Step::Deletion(j) => beg_ref = j,
            }
            break;
        }
        match step {
            Step::Pair(i, j) => (beg_query, beg_ref) = (i + 1, j + 1),
            Step::Insertion(i) => beg_query = i + 1,
            Step::Deletion(j) => beg_ref = j + 1,
        }
    }

    let cigar = aligned()
        .map(|step| {
            let op = match step {
                Step::Pair(i, j) if options.extended_ops => {
                    if equality.same(data.query[i], data.reference[j]) {
                        b'='
                    } else {
                        b'X'
                    }
                }
                Step::Pair(..) => b'M',
                Step::Insertion(_) => b'I',
                Step::Deletion(_) => b'D',
            };
            Ciglet { inc: 1, op }
        })
        .collect();

    AlignmentCigar {
        cigar,
        beg_query,
        beg_ref,
    }
}

impl AlignResult {
    fn trace_data(&self) -> Result<&TraceData, AlignError> {
        self.trace.as_ref().ok_or(AlignError::TraceUnavailable)
    }

    /// Builds the aligned strings of a result computed with trace storage.
    /// The last traceback is cached per result and reused while the options
    /// are unchanged.
    ///
    /// ## Errors
    ///
    /// [`AlignError::TraceUnavailable`] unless the result has trace storage.
    ///
    /// ## Example
    ///
    /// ```
    /// # use pairalign::{alignment::{align, TracebackOptions}, data::matrices::SubstitutionMatrix};
    /// let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
    /// let result = align("nw_trace_diag_sat".parse().unwrap(), b"ACGT", b"AGGT", 4, 1, &matrix).unwrap();
    /// let traceback = result.traceback(&TracebackOptions::default()).unwrap();
    /// assert_eq!(traceback.to_string(), "ACGT\n|.||\nAGGT");
    /// ```
    pub fn traceback(&self, options: &TracebackOptions) -> Result<Arc<Traceback>, AlignError> {
        let data = self.trace_data()?;
        let mut slot = self.memo.traceback.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((key, cached)) = slot.as_ref()
            && key == options
        {
            return Ok(Arc::clone(cached));
        }

        let traceback = Arc::new(render_traceback(&Path::trace(self, data), data, options));
        *slot = Some((options.clone(), Arc::clone(&traceback)));
        Ok(traceback)
    }

    /// Builds the CIGAR string of a result computed with trace storage. The
    /// last CIGAR is cached per result and reused while the options are
    /// unchanged.
    ///
    /// ## Errors
    ///
    /// [`AlignError::TraceUnavailable`] unless the result has trace storage.
    pub fn cigar(&self, options: &CigarOptions) -> Result<Arc<AlignmentCigar>, AlignError> {
        let data = self.trace_data()?;
        let mut slot = self.memo.cigar.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((key, cached)) = slot.as_ref()
            && key == options
        {
            return Ok(Arc::clone(cached));
        }

        let cigar = Arc::new(render_cigar(&Path::trace(self, data), data, options));
        *slot = Some((options.clone(), Arc::clone(&cigar)));
        Ok(cigar)
    }
}

/// Rescores an alignment from its CIGAR, starting at `beg_query` and
/// `beg_ref`.
///
/// Aligned pairs (`M`, `=`, `X`) add their substitution score and each run of
/// `I` or `D` of length `k` costs `open + (k - 1) * extend`. For a CIGAR built
/// from a trace result this reproduces the result's score.
///
/// ## Errors
///
/// [`AlignError::InvalidArgument`] for operations other than `M`, `=`, `X`,
/// `I`, and `D`, or for a CIGAR that runs past the end of either sequence.
///
/// ## Example
///
/// ```
/// # use pairalign::{alignment::score_from_cigar, data::matrices::SubstitutionMatrix};
/// let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
/// let cigar = "2=2D2=".parse().unwrap();
/// let score = score_from_cigar(&cigar, b"ACGT", b"ACTTGT", 0, 0, 5, 1, &matrix).unwrap();
/// assert_eq!(score, 8 - 6);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn score_from_cigar(
    cigar: &Cigar, query: &[u8], reference: &[u8], beg_query: usize, beg_ref: usize, open: i32, extend: i32,
    matrix: &SubstitutionMatrix,
) -> Result<i64, AlignError> {
    let (open, extend) = (i64::from(open), i64::from(extend));
    let (mut i, mut j) = (beg_query, beg_ref);
    let mut score = 0;
    let past_end = || AlignError::invalid("the CIGAR runs past the end of a sequence");

    for Ciglet { inc, op } in cigar {
        match op {
            b'M' | b'=' | b'X' => {
                let q = query.get(i..i + inc).ok_or_else(past_end)?;
                let r = reference.get(j..j + inc).ok_or_else(past_end)?;
                score += q.iter().zip(r).map(|(&a, &b)| i64::from(matrix.score(a, b))).sum::<i64>();
                i += inc;
                j += inc;
            }
            b'I' | b'D' => {
                if op == b'I' {
                    i += inc;
                    if i > query.len() {
                        return Err(past_end());
                    }
                } else {
                    j += inc;
                    if j > reference.len() {
                        return Err(past_end());
                    }
                }
                #[allow(clippy::cast_possible_wrap)]
                let len = inc as i64;
                score -= open + (len - 1) * extend;
            }
            _ => {
                return Err(AlignError::invalid(format!(
                    "cannot score the CIGAR operation '{}'",
                    op as char
                )));
            }
        }
    }

    Ok(score)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn symbol_equality() {
        let insensitive = SymbolEquality::default();
        assert!(insensitive.same(b'a', b'A'));
        assert!(!insensitive.same(b'A', b'C'));

        let sensitive = SymbolEquality {
            case_sensitive: true,
            aliases:        vec![(b'T', b'U')],
        };
        assert!(!sensitive.same(b'a', b'A'));
        assert!(sensitive.same(b'U', b'T'));
        assert!(!sensitive.same(b'u', b'T'));
    }

    #[test]
    fn markers() {
        assert_eq!(marker("||"), b'|');
        assert_eq!(marker(""), b' ');
        assert_eq!(marker("é"), 0xC3);
    }

    #[test]
    fn rescoring() {
        let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
        let cigar: Cigar = "1X3I".parse().unwrap();
        assert_eq!(
            score_from_cigar(&cigar, b"ACGT", b"G", 0, 0, 10, 1, &matrix),
            Ok(-1 - 12)
        );
        assert!(score_from_cigar(&cigar, b"ACG", b"G", 0, 0, 10, 1, &matrix).is_err());
        assert!(score_from_cigar(&"2S".parse().unwrap(), b"AC", b"AC", 0, 0, 10, 1, &matrix).is_err());
    }
}
