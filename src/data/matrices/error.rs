use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// Errors raised while obtaining, parsing, or editing a
/// [`SubstitutionMatrix`](super::SubstitutionMatrix).
#[non_exhaustive]
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum MatrixError {
    /// No built-in matrix is registered under this name.
    UnknownName(String),
    /// The matrix file does not exist.
    FileNotFound(String),
    /// The matrix file could not be read.
    Io(String),
    /// The matrix text is malformed. Lines are numbered from 1.
    Parse { line: usize, reason: String },
    /// The alphabet has no symbols.
    EmptyAlphabet,
    /// A symbol appears more than once in the alphabet.
    DuplicateSymbol(u8),
    /// More than 255 symbols were given.
    AlphabetTooLarge(usize),
    /// Built-in matrices are immutable; edit a copy instead.
    NotUserOwned,
    /// A row or column index is outside the matrix.
    OutOfRange { row: usize, col: usize, size: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::UnknownName(name) => write!(f, "No built-in substitution matrix is named '{name}'"),
            MatrixError::FileNotFound(path) => write!(f, "The substitution matrix file was not found: '{path}'"),
            MatrixError::Io(msg) => write!(f, "The substitution matrix file could not be read: {msg}"),
            MatrixError::Parse { line, reason } => write!(f, "Invalid substitution matrix at line {line}: {reason}"),
            MatrixError::EmptyAlphabet => write!(f, "The substitution matrix alphabet must not be empty"),
            MatrixError::DuplicateSymbol(b) => {
                write!(f, "The symbol '{b}' occurs more than once in the alphabet", b = b.escape_ascii())
            }
            MatrixError::AlphabetTooLarge(n) => {
                write!(f, "The alphabet has {n} symbols but at most {max} are supported", max = u8::MAX)
            }
            MatrixError::NotUserOwned => {
                write!(f, "Built-in substitution matrices cannot be modified; make a copy first")
            }
            MatrixError::OutOfRange { row, col, size } => {
                write!(f, "The cell ({row}, {col}) is outside of the {size}x{size} substitution matrix")
            }
        }
    }
}

impl fmt::Debug for MatrixError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for MatrixError {}
impl GetCode for MatrixError {}
