#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::many_single_char_names
)]
#![feature(portable_simd)]
#![cfg_attr(test, feature(test))]

/// Alignment kernels, the dispatcher, results, and tracebacks.
pub mod alignment;
/// Data import, export, and manipulation: substitution matrices, CIGAR
/// strings, sequence records.
pub mod data;
/// Runtime CPU capability probes and a monotonic clock.
pub mod platform;

/// A flat C ABI over the dispatcher.
#[cfg(feature = "capi")]
pub mod capi;

/// Mathematical utilities.
pub(crate) mod math;
/// SIMD traits to extend portable SIMD.
pub(crate) mod simd;

/// Common structures and functions re-exported
pub mod prelude {
    pub use crate::alignment::{
        AlignError, AlignResult, AlignmentCigar, CigarOptions, DispatchOptions, KernelName, KernelSpec, Layout,
        Profile, Regime, Storage, Traceback, TracebackOptions, Width, align, align_by_name, align_profile,
        align_profile_by_name, align_with, nw_banded, score_from_cigar, ssw,
    };
    pub use crate::data::{
        cigar::{Cigar, cigar_decode, cigar_decode_op, cigar_decode_len, cigar_encode, cigar_encode_string},
        err::GetCode,
        matrices::SubstitutionMatrix,
        records::{fasta::FastaReader, fastq::FastQReader},
        sequences::Sequences,
    };
    #[cfg(feature = "rand")]
    pub use crate::data::generate::rand_sequence;
}
