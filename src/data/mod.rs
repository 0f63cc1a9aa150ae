//! ## Data import, export, and manipulation functions.
//!
//! ## Substitution Matrices
//!
//! Alignment scores come from a [`SubstitutionMatrix`]: a square table of
//! integer scores over an alphabet of byte symbols, with a 256-entry map from
//! any input byte to the ordinal of its row or column. Matrices are obtained
//! three ways:
//!
//! - by name from a registry of built-in tables ([`SubstitutionMatrix::lookup`]),
//!   such as `blosum62` or `nuc44`
//! - by parsing an NCBI-format matrix file
//!   ([`SubstitutionMatrix::from_file`])
//! - by constructing a uniform match/mismatch matrix over an arbitrary
//!   alphabet ([`SubstitutionMatrix::create`])
//!
//! Built-in matrices are library-owned and immutable. Call
//! [`SubstitutionMatrix::copy`] to obtain an editable copy.
//!
//! ## Sequence Records
//!
//! [`FastaReader`] and [`FastQReader`] are buffered iterators over records,
//! and [`Sequences`] loads a whole file (auto-detecting the format) together
//! with summary statistics over the sequence lengths.
//!
//! [`SubstitutionMatrix`]: matrices::SubstitutionMatrix
//! [`SubstitutionMatrix::lookup`]: matrices::SubstitutionMatrix::lookup
//! [`SubstitutionMatrix::from_file`]: matrices::SubstitutionMatrix::from_file
//! [`SubstitutionMatrix::create`]: matrices::SubstitutionMatrix::create
//! [`SubstitutionMatrix::copy`]: matrices::SubstitutionMatrix::copy
//! [`FastaReader`]: records::fasta::FastaReader
//! [`FastQReader`]: records::fastq::FastQReader
//! [`Sequences`]: sequences::Sequences

mod byte_index;

/// CIGAR strings, both as text and as packed 32-bit operations.
pub mod cigar;
/// Error traits and helpers.
pub mod err;
/// Random sequence generation.
#[cfg(feature = "rand")]
pub mod generate;
/// Substitution matrices: the built-in registry, file parsing, and
/// construction from match/mismatch scores.
pub mod matrices;
/// Buffered readers for FASTA and FASTQ records.
pub mod records;
/// A loaded collection of sequences with length statistics.
pub mod sequences;

pub use byte_index::ByteIndexMap;
