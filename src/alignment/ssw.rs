use crate::{
    alignment::{AlignError, CigarOptions, KernelSpec, Layout, Regime, Storage, Width, align},
    data::matrices::SubstitutionMatrix,
};

/// A local alignment summarized the way the Striped Smith-Waterman library
/// reports it. The query is the read and all positions are 0-based and
/// inclusive.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SswResult {
    pub score1:      i64,
    pub ref_begin1:  usize,
    pub ref_end1:    usize,
    pub read_begin1: usize,
    pub read_end1:   usize,
    /// The `M`, `I`, and `D` operations packed as `len << 4 | code`.
    pub cigar:       Vec<u32>,
}

impl SswResult {
    /// Whether any part of the read aligned with a positive score.
    #[inline]
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        self.score1 > 0
    }
}

/// Local alignment with the striped trace kernel and the saturation cascade,
/// reduced to an [`SswResult`].
///
/// An unmapped read has a score of zero and an empty CIGAR.
///
/// ## Errors
///
/// See [`align`].
///
/// ## Example
///
/// ```
/// # use pairalign::{alignment::ssw, data::{cigar::cigar_decode, matrices::SubstitutionMatrix}};
/// let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
/// let result = ssw(b"AAAAAGGGGG", b"TTTTTGGGGG", 10, 1, &matrix).unwrap();
/// assert_eq!(result.score1, 10);
/// assert_eq!((result.read_begin1, result.read_end1), (5, 9));
/// assert_eq!(cigar_decode(&result.cigar).to_string(), "5M");
/// ```
pub fn ssw(
    query: &[u8], reference: &[u8], open: i32, extend: i32, matrix: &SubstitutionMatrix,
) -> Result<SswResult, AlignError> {
    let spec = KernelSpec::simd(Regime::Sw, Storage::Trace, Layout::Striped, Width::Sat);
    let result = align(spec, query, reference, open, extend, matrix)?;
    if result.score() <= 0 {
        return Ok(SswResult::default());
    }

    let cigar = result.cigar(&CigarOptions::default())?;
    Ok(SswResult {
        score1:      result.score(),
        ref_begin1:  cigar.beg_ref,
        ref_end1:    result.end_ref(),
        read_begin1: cigar.beg_query,
        read_end1:   result.end_query(),
        cigar:       cigar.packed()?,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::cigar::cigar_decode;

    #[test]
    fn gapped_read() {
        let matrix = SubstitutionMatrix::create(b"ACGT", 5, -4).unwrap();
        let result = ssw(b"ACGTACGTTTACGTACGT", b"GGGACGTACGTACGTACGTGGG", 6, 1, &matrix).unwrap();

        assert!(result.is_mapped());
        let cigar = cigar_decode(&result.cigar);
        assert_eq!(
            cigar.query_length(),
            result.read_end1 - result.read_begin1 + 1
        );
        assert_eq!(cigar.ref_length(), result.ref_end1 - result.ref_begin1 + 1);
        assert!(cigar.iter().all(|c| matches!(c.op, b'M' | b'I' | b'D')));
    }

    #[test]
    fn unmapped_read() {
        let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
        let result = ssw(b"AAAA", b"CCCC", 10, 1, &matrix).unwrap();
        assert!(!result.is_mapped());
        assert!(result.cigar.is_empty());
    }
}
