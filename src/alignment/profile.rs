use crate::{
    alignment::{AlignError, Width, errors::try_filled},
    data::matrices::SubstitutionMatrix,
    math::AlignableIntWidth,
};
use std::{
    simd::{SimdElement, prelude::*},
    sync::OnceLock,
};

/// Lanes per vector for each width, so that every vector is 256 bits.
pub(crate) const LANES_8: usize = 32;
pub(crate) const LANES_16: usize = 16;
pub(crate) const LANES_32: usize = 8;
pub(crate) const LANES_64: usize = 4;

/// Query scores reshaped into Farrar's striped order for one lane type.
///
/// The query is cut into `N` segments of `segments` positions; query position
/// `i` lives in vector `i % segments`, lane `i / segments`. Vector `v` of the
/// block for reference ordinal `r` is at `profile[r * segments + v]`. Lanes past
/// the end of the query hold `T::MIN` so they can never raise a real cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StripedProfile<T, const N: usize>
where
    T: SimdElement,
    {
    pub(crate) profile:  Vec<Simd<T, N>>,
    pub(crate) segments: usize,
}

impl<T, const N: usize> StripedProfile<T, N>
where
    T: AlignableIntWidth,
{
    /// Builds the striped scores for query `ordinals`. Scores that do not fit
    /// in `T` are clamped; the kernels detect this through the matrix range.
    pub(crate) fn new(ordinals: &[u8], matrix: &SubstitutionMatrix) -> Result<Self, AlignError> {
        // SupportedLaneCount cannot presently be zero.
        let segments = ordinals.len().div_ceil(N).max(1);
        let size = matrix.size();
        let mut profile = try_filled(size * segments, Simd::splat(T::MIN))?;

        for r in 0..size {
            for v in 0..segments {
                let mut vector = Simd::splat(T::MIN);
                for (lane, i) in (v..N * segments).step_by(segments).enumerate() {
                    if let Some(&q) = ordinals.get(i) {
                        // Rows are indexed by the query, columns by the reference
                        vector[lane] = T::saturate_from(i64::from(matrix.score_ordinals(usize::from(q), r)));
                    }
                }
                profile[r * segments + v] = vector;
            }
        }

        Ok(StripedProfile { profile, segments })
    }

    /// Returns the number of SIMD vectors per reference symbol.
    #[inline]
    #[must_use]
    pub fn number_vectors(&self) -> usize {
        self.segments
    }

    /// The vectors for reference ordinal `r`.
    #[inline]
    pub(crate) fn block(&self, r: u8) -> &[Simd<T, N>] {
        let start = usize::from(r) * self.segments;
        &self.profile[start..start + self.segments]
    }
}

const EXACT: u8 = 1;
const POSITIVE: u8 = 2;

/// Match and similarity flags per (reference ordinal, query position), used by
/// the statistics kernels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ProfileTallies {
    flags: Vec<u8>,
    len:   usize,
}

impl ProfileTallies {
    fn new(ordinals: &[u8], matrix: &SubstitutionMatrix) -> Result<Self, AlignError> {
        let len = ordinals.len();
        let mut flags = try_filled(matrix.size() * len, 0u8)?;
        for (r, block) in flags.chunks_exact_mut(len.max(1)).enumerate().take(matrix.size()) {
            for (flag, &q) in block.iter_mut().zip(ordinals) {
                if usize::from(q) == r {
                    *flag |= EXACT;
                }
                if matrix.score_ordinals(usize::from(q), r) > 0 {
                    *flag |= POSITIVE;
                }
            }
        }
        Ok(ProfileTallies { flags, len })
    }

    /// Whether query position `i` matches reference ordinal `r` exactly, and
    /// whether the pair scores positively.
    #[inline]
    pub(crate) fn get(&self, i: usize, r: u8) -> (bool, bool) {
        let flag = self.flags[usize::from(r) * self.len + i];
        (flag & EXACT != 0, flag & POSITIVE != 0)
    }
}

/// A query prepared for aligning against many references.
///
/// A profile is bound to one [`SubstitutionMatrix`] and built for one
/// [`Width`]; it may only be consumed by kernels of that width (the serial
/// kernels accept any profile). The striped scores for the scan and striped
/// layouts are built eagerly for a fixed width, and lazily for every width the
/// saturation cascade of a [`Width::Sat`] profile reaches.
///
/// ```
/// # use pairalign::{alignment::{Profile, Width, align_profile}, data::matrices::SubstitutionMatrix};
/// let matrix = SubstitutionMatrix::lookup("blosum62").unwrap();
/// let profile = Profile::new(b"HEAGAWGHEE", matrix, Width::Sat).unwrap();
/// let spec = "sw_striped_sat".parse().unwrap();
/// for reference in [&b"PAWHEAE"[..], b"HEAGAWGHEE"] {
///     let result = align_profile(spec, &profile, reference, 10, 1).unwrap();
///     assert!(result.score() > 0);
/// }
/// ```
#[derive(Debug)]
pub struct Profile<'a> {
    query:     &'a [u8],
    matrix:    &'a SubstitutionMatrix,
    ordinals:  Vec<u8>,
    width:     Width,
    tallies:   Option<ProfileTallies>,
    striped8:  OnceLock<StripedProfile<i8, LANES_8>>,
    striped16: OnceLock<StripedProfile<i16, LANES_16>>,
    striped32: OnceLock<StripedProfile<i32, LANES_32>>,
    striped64: OnceLock<StripedProfile<i64, LANES_64>>,
}

macro_rules! striped_getter {
    ($name:ident, $field:ident, $t:ty, $n:expr) => {
        pub(crate) fn $name(&self) -> Result<&StripedProfile<$t, $n>, AlignError> {
            if let Some(profile) = self.$field.get() {
                return Ok(profile);
            }
            let profile = StripedProfile::new(&self.ordinals, self.matrix)?;
            Ok(self.$field.get_or_init(|| profile))
        }
    };
}

impl<'a> Profile<'a> {
    /// Creates a profile of `query` for kernels of `width`.
    ///
    /// ## Errors
    ///
    /// [`AlignError::InvalidArgument`] if the query is empty, or
    /// [`AlignError::OutOfMemory`].
    pub fn new(query: &'a [u8], matrix: &'a SubstitutionMatrix, width: Width) -> Result<Self, AlignError> {
        Self::build(query, matrix, width, false)
    }

    /// Like [`Profile::new`], and also prepares the match and similarity
    /// flags required by the `stats` kernels.
    ///
    /// ## Errors
    ///
    /// See [`Profile::new`].
    pub fn new_stats(query: &'a [u8], matrix: &'a SubstitutionMatrix, width: Width) -> Result<Self, AlignError> {
        Self::build(query, matrix, width, true)
    }

    fn build(query: &'a [u8], matrix: &'a SubstitutionMatrix, width: Width, stats: bool) -> Result<Self, AlignError> {
        let profile = Self::unprepared(query, matrix, width, stats)?;
        match width {
            Width::W8 | Width::Sat => profile.striped_i8().map(|_| ())?,
            Width::W16 => profile.striped_i16().map(|_| ())?,
            Width::W32 => profile.striped_i32().map(|_| ())?,
            Width::W64 => profile.striped_i64().map(|_| ())?,
        }
        Ok(profile)
    }

    /// A profile whose striped scores are only built when a kernel first asks
    /// for them. Used by the dispatcher for one-off alignments.
    pub(crate) fn unprepared(
        query: &'a [u8], matrix: &'a SubstitutionMatrix, width: Width, stats: bool,
    ) -> Result<Self, AlignError> {
        if query.is_empty() {
            return Err(AlignError::invalid("the query must not be empty"));
        }

        let ordinals = matrix.to_ordinals(query);
        let tallies = if stats {
            Some(ProfileTallies::new(&ordinals, matrix)?)
        } else {
            None
        };

        Ok(Profile {
            query,
            matrix,
            ordinals,
            width,
            tallies,
            striped8: OnceLock::new(),
            striped16: OnceLock::new(),
            striped32: OnceLock::new(),
            striped64: OnceLock::new(),
        })
    }

    striped_getter!(striped_i8, striped8, i8, LANES_8);
    striped_getter!(striped_i16, striped16, i16, LANES_16);
    striped_getter!(striped_i32, striped32, i32, LANES_32);
    striped_getter!(striped_i64, striped64, i64, LANES_64);

    #[inline]
    #[must_use]
    pub fn query(&self) -> &'a [u8] {
        self.query
    }

    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &'a SubstitutionMatrix {
        self.matrix
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }

    /// Whether the profile can feed the `stats` kernels.
    #[inline]
    #[must_use]
    pub fn is_stats(&self) -> bool {
        self.tallies.is_some()
    }

    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.query.len()
    }

    #[inline]
    pub(crate) fn ordinals(&self) -> &[u8] {
        &self.ordinals
    }

    #[inline]
    pub(crate) fn tallies(&self) -> Option<&ProfileTallies> {
        self.tallies.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn striped_order() {
        let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
        // 5 positions over 4 lanes: 2 segments
        let profile = StripedProfile::<i16, 4>::new(&matrix.to_ordinals(b"ACGTA"), &matrix).unwrap();
        assert_eq!(profile.number_vectors(), 2);

        let a = profile.block(0);
        // Vector 0 holds positions 0, 2, 4, and a pad
        assert_eq!(a[0].to_array(), [2, -1, 2, i16::MIN]);
        // Vector 1 holds positions 1, 3, and two pads
        assert_eq!(a[1].to_array(), [-1, -1, i16::MIN, i16::MIN]);
    }

    #[test]
    fn clamps_to_lane_type() {
        let matrix = SubstitutionMatrix::create(b"AC", 300, -300).unwrap();
        let profile = StripedProfile::<i8, 32>::new(&matrix.to_ordinals(b"AC"), &matrix).unwrap();
        assert_eq!(profile.block(0)[0][0], i8::MAX);
        assert_eq!(profile.block(0)[0][1], i8::MIN);
    }

    #[test]
    fn profile_widths() {
        let matrix = SubstitutionMatrix::lookup("blosum62").unwrap();
        let profile = Profile::new_stats(b"HEAGAWGHEE", matrix, Width::Sat).unwrap();
        assert!(profile.is_stats());
        assert_eq!(profile.len(), 10);
        assert!(profile.striped8.get().is_some());
        assert!(profile.striped16.get().is_none());
        assert_eq!(profile.striped_i16().unwrap().number_vectors(), 1);
        assert!(profile.striped16.get().is_some());

        let tallies = profile.tallies().unwrap();
        let h = matrix.to_ordinal(b'H') as u8;
        let r = matrix.to_ordinal(b'R') as u8;
        assert_eq!(tallies.get(0, h), (true, true));
        assert_eq!(tallies.get(0, r), (false, false));

        assert!(Profile::new(b"", matrix, Width::W8).is_err());
    }
}
