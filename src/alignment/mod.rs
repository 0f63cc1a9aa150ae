//! ## Functions for aligning sequence data.
//!
//! *Pairalign* computes global, local, and semi-global alignments with
//! affine gap penalties for DNA, protein, or any other alphabet described by
//! a [`SubstitutionMatrix`].
//!
//! - [Needleman-Wunsch]: global alignment, the `nw` regime.
//! - [Smith-Waterman]: local alignment, the `sw` regime.
//! - Semi-global alignment: the `sg` regimes, which leave a chosen subset of
//!   the sequence ends free of gap penalties.
//!
//! Every kernel is a point in the product of four axes, see [`KernelSpec`].
//! The [`align`] family dispatches to the kernel and, for the `sat` width,
//! reruns at wider lanes until the scores fit.
//!
//! [Needleman-Wunsch]: https://en.wikipedia.org/wiki/Needleman%E2%80%93Wunsch_algorithm
//! [Smith-Waterman]: https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm
//! [`SubstitutionMatrix`]: crate::data::matrices::SubstitutionMatrix

pub(crate) mod kernels;
pub(crate) mod recorder;

mod dispatch;
mod errors;
mod kernel_name;
mod profile;
mod result;
mod ssw;
mod traceback;

pub use dispatch::*;
pub use errors::*;
pub use kernel_name::*;
pub use profile::Profile;
pub use result::*;
pub use ssw::*;
pub use traceback::{AlignmentCigar, CigarOptions, Traceback, TracebackOptions, score_from_cigar};
