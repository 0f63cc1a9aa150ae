//! ## Substitution Matrices for Alignment
//!
//! The registry includes several commonly used protein substitution matrices
//! together with the NCBI nucleotide matrix:
//!
//! - PAM matrices: [PAM
//!   matrices](https://en.wikipedia.org/wiki/Point_accepted_mutation) (or Point
//!   Accepted Mutation matrices) were originally introduced by Margaret Dayhoff
//!   in 1978 (1). The PAM$\text{}_{\text{n}}$ matrix models the substitution
//!   probabilities given that for every 100 amino acids there are $n$
//!   mutations. Registered as `pam10` through `pam500` in steps of 10.
//!   `pam250` is the table distributed by NCBI; the others are
//!   extrapolated from Dayhoff's PAM1 mutation matrix in NCBI's units
//!   (ln(2)/2 below PAM200, ln(2)/3 from there on).
//! - BLOSUM matrices: [BLOSUM matrices](https://en.wikipedia.org/wiki/BLOSUM)
//!   were introduced in 1992 (2). They are formed by clustering a database of
//!   aligned proteins such that the sequences all have less than $r$% sequence
//!   similarity, then computing the scaled log odds of observing each pair of
//!   amino acids. Registered as `blosum30` through `blosum100` in steps of
//!   5, plus `blosum62`.
//! - NUC.4.4: the IUPAC nucleotide matrix used by BLASTN and EMBOSS.
//!   Registered as both `nuc44` and `dnafull`.
//!
//! The protein matrices use the NCBI alphabet `ARNDCQEGHILKMFPSTWYVBZX*`.
//! Bytes outside of a matrix's alphabet are scored as its wildcard symbol:
//! `*` if present, otherwise `X`, otherwise `N`, otherwise the last symbol.
//!
//! Registry names are matched ignoring case and the separators `_`, `-`,
//! `.`, and space, so `BLOSUM62`, `blosum-62`, and `NUC.4.4` all resolve.
//!
//! ## Choice of Matrix
//!
//! Higher BLOSUM numbers (and lower PAM numbers) are used for closely related
//! proteins. Lower BLOSUM numbers (and higher PAM numbers) are used for
//! distantly related proteins.
//!
//! ## Citations
//!
//! 1. Dayhoff, M., Schwartz, R., & Orcutt, B. (1978). A Model of Evolutionary
//!    Change in Proteins. Atlas of protein sequence and structure, 5, 345-352.
//! 2. Henikoff, S., & Henikoff, J. G. (1992). Amino acid substitution matrices
//!    from protein blocks. Proceedings of the National Academy of Sciences of
//!    the United States of America, 89(22), 10915–10919.
//!    <https://doi.org/10.1073/pnas.89.22.10915>

use crate::data::ByteIndexMap;
use std::{fmt::Display, path::Path, sync::LazyLock};

mod builtin;
mod error;
mod parse;
#[cfg(test)]
mod test;

pub use error::MatrixError;
use parse::MatParser;

/// The symbol appended by [`SubstitutionMatrix::create`] to score bytes
/// outside of the alphabet.
pub const WILDCARD: u8 = b'*';

/// A square table of integer scores over an alphabet of byte symbols.
///
/// Rows are indexed by the ordinal of the query symbol and columns by the
/// ordinal of the reference symbol. Every byte maps to some ordinal: bytes
/// outside the alphabet map to the wildcard symbol (see the [module
/// documentation](self)).
///
/// Matrices from the registry are library-owned and cannot be edited; use
/// [`copy`](SubstitutionMatrix::copy) to obtain a user-owned matrix first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SubstitutionMatrix {
    name:           String,
    mapping:        ByteIndexMap,
    scores:         Vec<i32>,
    min:            i32,
    max:            i32,
    user_owned:     bool,
    case_sensitive: bool,
}

/// The registered built-in matrices: names and their tables.
static REGISTRY: LazyLock<Vec<(&'static str, SubstitutionMatrix)>> = LazyLock::new(|| {
    use builtin::*;

    let protein = |name: &str, table: &[i8]| SubstitutionMatrix::builtin(name, PROTEIN_ALPHABET, table);
    let nuc44 = SubstitutionMatrix::builtin("nuc44", NUC44_ALPHABET, &NUC44);
    let mut dnafull = nuc44.clone();
    dnafull.name = "dnafull".to_string();

    vec![
        ("blosum30", protein("blosum30", &BLOSUM30)),
        ("blosum35", protein("blosum35", &BLOSUM35)),
        ("blosum40", protein("blosum40", &BLOSUM40)),
        ("blosum45", protein("blosum45", &BLOSUM45)),
        ("blosum50", protein("blosum50", &BLOSUM50)),
        ("blosum55", protein("blosum55", &BLOSUM55)),
        ("blosum60", protein("blosum60", &BLOSUM60)),
        ("blosum62", protein("blosum62", &BLOSUM62)),
        ("blosum65", protein("blosum65", &BLOSUM65)),
        ("blosum70", protein("blosum70", &BLOSUM70)),
        ("blosum75", protein("blosum75", &BLOSUM75)),
        ("blosum80", protein("blosum80", &BLOSUM80)),
        ("blosum85", protein("blosum85", &BLOSUM85)),
        ("blosum90", protein("blosum90", &BLOSUM90)),
        ("blosum95", protein("blosum95", &BLOSUM95)),
        ("blosum100", protein("blosum100", &BLOSUM100)),
        ("pam10", protein("pam10", &PAM10)),
        ("pam20", protein("pam20", &PAM20)),
        ("pam30", protein("pam30", &PAM30)),
        ("pam40", protein("pam40", &PAM40)),
        ("pam50", protein("pam50", &PAM50)),
        ("pam60", protein("pam60", &PAM60)),
        ("pam70", protein("pam70", &PAM70)),
        ("pam80", protein("pam80", &PAM80)),
        ("pam90", protein("pam90", &PAM90)),
        ("pam100", protein("pam100", &PAM100)),
        ("pam110", protein("pam110", &PAM110)),
        ("pam120", protein("pam120", &PAM120)),
        ("pam130", protein("pam130", &PAM130)),
        ("pam140", protein("pam140", &PAM140)),
        ("pam150", protein("pam150", &PAM150)),
        ("pam160", protein("pam160", &PAM160)),
        ("pam170", protein("pam170", &PAM170)),
        ("pam180", protein("pam180", &PAM180)),
        ("pam190", protein("pam190", &PAM190)),
        ("pam200", protein("pam200", &PAM200)),
        ("pam210", protein("pam210", &PAM210)),
        ("pam220", protein("pam220", &PAM220)),
        ("pam230", protein("pam230", &PAM230)),
        ("pam240", protein("pam240", &PAM240)),
        ("pam250", protein("pam250", &PAM250)),
        ("pam260", protein("pam260", &PAM260)),
        ("pam270", protein("pam270", &PAM270)),
        ("pam280", protein("pam280", &PAM280)),
        ("pam290", protein("pam290", &PAM290)),
        ("pam300", protein("pam300", &PAM300)),
        ("pam310", protein("pam310", &PAM310)),
        ("pam320", protein("pam320", &PAM320)),
        ("pam330", protein("pam330", &PAM330)),
        ("pam340", protein("pam340", &PAM340)),
        ("pam350", protein("pam350", &PAM350)),
        ("pam360", protein("pam360", &PAM360)),
        ("pam370", protein("pam370", &PAM370)),
        ("pam380", protein("pam380", &PAM380)),
        ("pam390", protein("pam390", &PAM390)),
        ("pam400", protein("pam400", &PAM400)),
        ("pam410", protein("pam410", &PAM410)),
        ("pam420", protein("pam420", &PAM420)),
        ("pam430", protein("pam430", &PAM430)),
        ("pam440", protein("pam440", &PAM440)),
        ("pam450", protein("pam450", &PAM450)),
        ("pam460", protein("pam460", &PAM460)),
        ("pam470", protein("pam470", &PAM470)),
        ("pam480", protein("pam480", &PAM480)),
        ("pam490", protein("pam490", &PAM490)),
        ("pam500", protein("pam500", &PAM500)),
        ("nuc44", nuc44),
        ("dnafull", dnafull),
    ]
});

/// Lowercases a registry name and drops the separators `_`, `-`, `.`, and
/// space.
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | '.' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Picks the symbol that bytes outside of `alphabet` are scored as.
fn wildcard_of(alphabet: &[u8]) -> Option<u8> {
    [WILDCARD, b'X', b'N']
        .into_iter()
        .find(|w| alphabet.contains(w))
        .or_else(|| alphabet.last().copied())
}

impl SubstitutionMatrix {
    fn builtin(name: &str, alphabet: &[u8], table: &[i8]) -> Self {
        let scores = table.iter().copied().map(i32::from).collect();
        // The built-in alphabets are unique and non-empty
        let mut matrix = Self::from_parts(name, alphabet, scores, false)
            .unwrap_or_else(|e| unreachable!("invalid built-in matrix {name}: {e}"));
        matrix.user_owned = false;
        matrix
    }

    /// Assembles a matrix, validating the alphabet and computing the score
    /// extremes. The result is user-owned.
    fn from_parts(name: &str, alphabet: &[u8], scores: Vec<i32>, case_sensitive: bool) -> Result<Self, MatrixError> {
        if alphabet.is_empty() {
            return Err(MatrixError::EmptyAlphabet);
        }
        if alphabet.len() > usize::from(u8::MAX) {
            return Err(MatrixError::AlphabetTooLarge(alphabet.len()));
        }

        let fold = |b: u8| if case_sensitive { b } else { b.to_ascii_uppercase() };
        let mut seen = [false; 256];
        for &b in alphabet {
            if std::mem::replace(&mut seen[usize::from(fold(b))], true) {
                return Err(MatrixError::DuplicateSymbol(b));
            }
        }

        let catch_all = wildcard_of(alphabet).ok_or(MatrixError::EmptyAlphabet)?;
        let mapping = if case_sensitive {
            ByteIndexMap::new(alphabet, catch_all)
        } else {
            ByteIndexMap::new_ignoring_case(alphabet, catch_all)
        }
        .ok_or(MatrixError::EmptyAlphabet)?;

        debug_assert_eq!(scores.len(), alphabet.len() * alphabet.len());
        let min = scores.iter().copied().min().unwrap_or_default();
        let max = scores.iter().copied().max().unwrap_or_default();

        Ok(SubstitutionMatrix {
            name: name.to_string(),
            mapping,
            scores,
            min,
            max,
            user_owned: true,
            case_sensitive,
        })
    }

    /// Looks up a built-in matrix by name.
    ///
    /// ## Errors
    ///
    /// Returns [`MatrixError::UnknownName`] if no built-in matrix is
    /// registered under `name`.
    ///
    /// ## Example
    ///
    /// ```
    /// # use pairalign::data::matrices::SubstitutionMatrix;
    /// let blosum62 = SubstitutionMatrix::lookup("BLOSUM62").unwrap();
    /// assert_eq!(blosum62.score(b'W', b'W'), 11);
    /// assert!(SubstitutionMatrix::lookup("blosum99").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<&'static SubstitutionMatrix, MatrixError> {
        let key = normalize_name(name);
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == key)
            .map(|(_, matrix)| matrix)
            .ok_or_else(|| MatrixError::UnknownName(name.to_string()))
    }

    /// The names of all built-in matrices.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> + Clone {
        REGISTRY.iter().map(|(name, _)| *name)
    }

    /// Reads a matrix from an NCBI-format file. Symbols are matched ignoring
    /// ASCII case.
    ///
    /// ## Errors
    ///
    /// Returns [`MatrixError::FileNotFound`] or [`MatrixError::Io`] if the
    /// file cannot be read, and [`MatrixError::Parse`] (with the line number)
    /// if it is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
        Self::read_file(path.as_ref(), false)
    }

    /// Similar to [`from_file`](SubstitutionMatrix::from_file), but symbols
    /// that differ in case are distinct.
    ///
    /// ## Errors
    ///
    /// See [`from_file`](SubstitutionMatrix::from_file).
    pub fn from_file_case_sensitive<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
        Self::read_file(path.as_ref(), true)
    }

    fn read_file(path: &Path, case_sensitive: bool) -> Result<Self, MatrixError> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => MatrixError::FileNotFound(path.display().to_string()),
            _ => MatrixError::Io(format!("'{path}': {e}", path = path.display())),
        })?;

        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        Self::from_text(&name, &bytes, case_sensitive)
    }

    /// Parses a matrix from NCBI-format text held in memory.
    ///
    /// ## Errors
    ///
    /// Returns [`MatrixError::Parse`] if the text is malformed, or an alphabet
    /// error if a symbol is repeated.
    pub fn from_text(name: &str, text: &[u8], case_sensitive: bool) -> Result<Self, MatrixError> {
        let parsed = MatParser::new(text).parse_matrix()?;
        Self::from_parts(name, &parsed.alphabet, parsed.scores, case_sensitive)
    }

    /// Creates a uniform matrix over `alphabet` scoring `matches` on the
    /// diagonal and `mismatch` elsewhere. A wildcard symbol `*` is appended
    /// (unless already present) that scores 0 against everything, and bytes
    /// outside the alphabet map to it. Symbols are matched ignoring ASCII
    /// case.
    ///
    /// ## Errors
    ///
    /// Returns an error if the alphabet is empty, too large, or repeats a
    /// symbol.
    ///
    /// ## Example
    ///
    /// ```
    /// # use pairalign::data::matrices::SubstitutionMatrix;
    /// let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
    /// assert_eq!(matrix.size(), 5);
    /// assert_eq!(matrix.score(b'a', b'A'), 2);
    /// assert_eq!(matrix.score(b'A', b'C'), -1);
    /// assert_eq!(matrix.score(b'U', b'A'), 0);
    /// ```
    pub fn create(alphabet: &[u8], matches: i32, mismatch: i32) -> Result<Self, MatrixError> {
        Self::create_uniform(alphabet, matches, mismatch, false)
    }

    /// Similar to [`create`](SubstitutionMatrix::create), but symbols that
    /// differ in case are distinct.
    ///
    /// ## Errors
    ///
    /// See [`create`](SubstitutionMatrix::create).
    pub fn create_case_sensitive(alphabet: &[u8], matches: i32, mismatch: i32) -> Result<Self, MatrixError> {
        Self::create_uniform(alphabet, matches, mismatch, true)
    }

    fn create_uniform(alphabet: &[u8], matches: i32, mismatch: i32, case_sensitive: bool) -> Result<Self, MatrixError> {
        if alphabet.is_empty() {
            return Err(MatrixError::EmptyAlphabet);
        }

        let mut symbols = alphabet.to_vec();
        if !symbols.contains(&WILDCARD) {
            symbols.push(WILDCARD);
        }
        let wildcard = symbols.iter().position(|&b| b == WILDCARD).unwrap_or(symbols.len() - 1);

        let size = symbols.len();
        let mut scores = vec![0; size * size];
        for (i, row) in scores.chunks_exact_mut(size).enumerate() {
            for (j, score) in row.iter_mut().enumerate() {
                *score = if i == wildcard || j == wildcard {
                    0
                } else if i == j {
                    matches
                } else {
                    mismatch
                };
            }
        }

        let name = String::from_utf8_lossy(alphabet).into_owned();
        Self::from_parts(&name, &symbols, scores, case_sensitive)
    }

    /// Returns a user-owned copy of this matrix that can be edited.
    #[must_use]
    pub fn copy(&self) -> Self {
        let mut out = self.clone();
        out.user_owned = true;
        out
    }

    /// Sets the score at (`row`, `col`), given as ordinals.
    ///
    /// ## Errors
    ///
    /// Returns [`MatrixError::NotUserOwned`] for built-in matrices and
    /// [`MatrixError::OutOfRange`] for indices outside the matrix.
    pub fn set_value(&mut self, row: usize, col: usize, value: i32) -> Result<(), MatrixError> {
        if !self.user_owned {
            return Err(MatrixError::NotUserOwned);
        }
        let size = self.size();
        if row >= size || col >= size {
            return Err(MatrixError::OutOfRange { row, col, size });
        }

        self.scores[row * size + col] = value;
        self.refresh_extremes();
        Ok(())
    }

    /// Replaces the scores of row `row`.
    ///
    /// ## Errors
    ///
    /// Returns [`MatrixError::NotUserOwned`] for built-in matrices and
    /// [`MatrixError::OutOfRange`] if `row` is outside the matrix or `values`
    /// is not exactly one row long.
    pub fn set_row(&mut self, row: usize, values: &[i32]) -> Result<(), MatrixError> {
        if !self.user_owned {
            return Err(MatrixError::NotUserOwned);
        }
        let size = self.size();
        if row >= size || values.len() != size {
            return Err(MatrixError::OutOfRange {
                row,
                col: values.len().saturating_sub(1),
                size,
            });
        }

        self.scores[row * size..(row + 1) * size].copy_from_slice(values);
        self.refresh_extremes();
        Ok(())
    }

    fn refresh_extremes(&mut self) {
        self.min = self.scores.iter().copied().min().unwrap_or_default();
        self.max = self.scores.iter().copied().max().unwrap_or_default();
    }

    /// The registry name, file name, or alphabet the matrix was made from.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbols of the matrix in ordinal order.
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[u8] {
        self.mapping.byte_keys()
    }

    /// The number of symbols (rows and columns).
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.mapping.len()
    }

    /// The smallest score in the matrix.
    #[inline]
    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// The largest score in the matrix.
    #[inline]
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Whether the matrix may be edited with
    /// [`set_value`](SubstitutionMatrix::set_value).
    #[inline]
    #[must_use]
    pub fn is_user_owned(&self) -> bool {
        self.user_owned
    }

    #[inline]
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// The byte-to-ordinal map.
    #[inline]
    #[must_use]
    pub fn mapping(&self) -> &ByteIndexMap {
        &self.mapping
    }

    /// Maps a byte to its ordinal.
    #[inline]
    #[must_use]
    pub fn to_ordinal(&self, b: u8) -> usize {
        self.mapping.to_index(b)
    }

    /// Maps every byte of `seq` to its ordinal.
    #[must_use]
    pub(crate) fn to_ordinals(&self, seq: &[u8]) -> Vec<u8> {
        seq.iter().map(|&b| self.mapping[b]).collect()
    }

    /// The score of aligning query byte `a` against reference byte `b`.
    #[inline]
    #[must_use]
    pub fn score(&self, a: u8, b: u8) -> i32 {
        self.score_ordinals(self.to_ordinal(a), self.to_ordinal(b))
    }

    /// The score at (`row`, `col`), given as ordinals.
    ///
    /// ## Panics
    ///
    /// Panics if either ordinal is outside the matrix.
    #[inline]
    #[must_use]
    pub fn score_ordinals(&self, row: usize, col: usize) -> i32 {
        self.scores[row * self.size() + col]
    }

    /// The scores of one row, given as an ordinal.
    ///
    /// ## Panics
    ///
    /// Panics if `row` is outside the matrix.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[i32] {
        let size = self.size();
        &self.scores[row * size..(row + 1) * size]
    }
}

impl Display for SubstitutionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        let mut col_widths = vec![0; size];
        for row in self.scores.chunks_exact(size) {
            for (width, val) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(val.to_string().len());
            }
        }
        for width in col_widths.iter_mut().skip(1) {
            *width += 1;
        }

        let residues = self.alphabet();

        write!(f, "   ")?;
        for (residue, width) in residues.iter().zip(&col_widths) {
            write!(f, "{residue:>width$}", residue = *residue as char)?;
        }
        writeln!(f)?;

        for (row, residue) in self.scores.chunks_exact(size).zip(residues) {
            write!(f, "{residue}  ", residue = *residue as char)?;
            for (val, width) in row.iter().zip(&col_widths) {
                write!(f, "{val:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for SubstitutionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{name} ({size}x{size})", name = self.name, size = self.size())?;
        write!(f, "{self}")
    }
}
