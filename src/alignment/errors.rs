use crate::data::{cigar::CigarError, err::GetCode, matrices::MatrixError};
use std::{error::Error, fmt};

/// What could not be found for [`AlignError::NotFound`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Missing {
    /// A substitution matrix name or file.
    Matrix(String),
    /// A kernel name outside of the naming scheme.
    Kernel(String),
    /// A sequence file.
    File(String),
}

/// The error taxonomy shared by the dispatcher, the results, and the
/// traceback builder.
///
/// Saturation is not an error: a result that saturated even at 64 bits is
/// returned with [`AlignResult::is_saturated`] set.
///
/// [`AlignResult::is_saturated`]: super::AlignResult::is_saturated
#[non_exhaustive]
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum AlignError {
    /// An unknown matrix, kernel, or file.
    NotFound(Missing),
    /// A malformed matrix, CIGAR, FASTA, or FASTQ input.
    Parse(String),
    /// An argument the kernels cannot accept, or an accessor that does not
    /// match how the result was computed.
    InvalidArgument(String),
    /// A table or trace could not be allocated.
    OutOfMemory { bytes: usize },
    /// A traceback or CIGAR was requested from a result computed without
    /// trace storage.
    TraceUnavailable,
}

impl AlignError {
    #[inline]
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AlignError::InvalidArgument(msg.into())
    }
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignError::NotFound(Missing::Matrix(name)) => write!(f, "No substitution matrix was found for '{name}'"),
            AlignError::NotFound(Missing::Kernel(name)) => write!(f, "No alignment kernel is named '{name}'"),
            AlignError::NotFound(Missing::File(path)) => write!(f, "The file was not found: '{path}'"),
            AlignError::Parse(msg) => write!(f, "Parse error: {msg}"),
            AlignError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            AlignError::OutOfMemory { bytes } => write!(f, "Failed to allocate {bytes} bytes for the alignment"),
            AlignError::TraceUnavailable => write!(
                f,
                "Tracebacks and CIGAR strings require a result computed with trace storage"
            ),
        }
    }
}

impl fmt::Debug for AlignError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for AlignError {}

impl GetCode for AlignError {
    #[inline]
    fn get_code(&self) -> i32 {
        match self {
            AlignError::NotFound(_) => 2,
            AlignError::Parse(_) => 3,
            AlignError::InvalidArgument(_) => 4,
            AlignError::OutOfMemory { .. } => 5,
            AlignError::TraceUnavailable => 6,
        }
    }
}

impl From<MatrixError> for AlignError {
    fn from(err: MatrixError) -> Self {
        match err {
            MatrixError::UnknownName(name) => AlignError::NotFound(Missing::Matrix(name)),
            MatrixError::FileNotFound(path) => AlignError::NotFound(Missing::Matrix(path)),
            MatrixError::Io(_) | MatrixError::Parse { .. } => AlignError::Parse(err.to_string()),
            _ => AlignError::InvalidArgument(err.to_string()),
        }
    }
}

impl From<CigarError> for AlignError {
    #[inline]
    fn from(err: CigarError) -> Self {
        AlignError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for AlignError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => AlignError::NotFound(Missing::File(err.to_string())),
            std::io::ErrorKind::OutOfMemory => AlignError::OutOfMemory { bytes: 0 },
            _ => AlignError::Parse(err.to_string()),
        }
    }
}

/// Allocates a vector of `len` copies of `value`, reporting allocation
/// failure instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, AlignError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| AlignError::OutOfMemory {
        bytes: len.saturating_mul(std::mem::size_of::<T>()),
    })?;
    v.resize(len, value);
    Ok(v)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes_and_conversions() {
        let err: AlignError = MatrixError::UnknownName("blosum99".to_string()).into();
        assert_eq!(err, AlignError::NotFound(Missing::Matrix("blosum99".to_string())));
        assert_eq!(err.get_code(), 2);

        let err: AlignError = MatrixError::NotUserOwned.into();
        assert_eq!(err.get_code(), 4);

        let err: AlignError = CigarError::MissingOp.into();
        assert!(matches!(err, AlignError::Parse(_)));

        let err: AlignError = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad").into();
        assert_eq!(err.get_code(), 3);
        assert_eq!(AlignError::TraceUnavailable.get_code(), 6);
    }

    #[test]
    fn allocation() {
        assert_eq!(try_filled(4, 7i64).unwrap(), vec![7; 4]);
        assert!(matches!(
            try_filled(usize::MAX / 2, 0i64),
            Err(AlignError::OutOfMemory { .. })
        ));
    }
}
