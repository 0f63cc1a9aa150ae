//! ## CIGAR Strings
//!
//! A [CIGAR string] is a run-length encoding of an alignment as
//! increment-operation pairs, e.g. `3=1X2D`. [`Cigar`] holds the text form.
//!
//! The packed form follows BAM: each operation is a `u32` holding
//! `length << 4 | code`, where `code` is the position of the operation in
//! [`CIGAR_OPS`]. Lengths must fit in 28 bits.
//!
//! | Op  | Code | Meaning                                   |
//! |-----|------|-------------------------------------------|
//! | `M` | 0    | alignment match (match or mismatch)       |
//! | `I` | 1    | insertion: consumes the query             |
//! | `D` | 2    | deletion: consumes the reference          |
//! | `N` | 3    | skipped reference region                  |
//! | `S` | 4    | soft clip                                 |
//! | `H` | 5    | hard clip                                 |
//! | `P` | 6    | padding                                   |
//! | `=` | 7    | sequence match                            |
//! | `X` | 8    | sequence mismatch                         |
//! | `B` | 9    | back                                      |
//!
//! [CIGAR string]: https://en.wikipedia.org/wiki/Sequence_alignment#CIGAR_Format

#[cfg(feature = "fuzzing")]
mod arbitrary;
mod error;
mod iter;
mod packed;
#[cfg(test)]
mod test;

pub use error::CigarError;
pub use iter::CigletIterator;
pub use packed::*;

/// The CIGAR operations, in packed code order.
pub const CIGAR_OPS: &[u8; 10] = b"MIDNSHP=XB";

/// The largest increment that fits in a packed operation.
pub const MAX_PACKED_LEN: u32 = (1 << 28) - 1;

#[inline]
#[must_use]
pub(crate) fn is_valid_op(op: u8) -> bool {
    CIGAR_OPS.contains(&op)
}

/// A [CIGAR string] of length-opcode pairs used in sequence alignment.
///
/// [CIGAR string]: https://en.wikipedia.org/wiki/Sequence_alignment#CIGAR_Format
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Cigar(pub(crate) Vec<u8>);

impl Cigar {
    /// Creates a CIGAR string from a Vec of bytes without checking for validity
    #[inline]
    #[must_use]
    pub fn from_vec_unchecked(v: Vec<u8>) -> Self {
        Cigar(v)
    }

    /// Creates a new empty CIGAR string
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Cigar(Vec::new())
    }

    /// Sums lengths for operations consuming the reference: `M`, `D`, `N`,
    /// `=`, and `X`.
    #[must_use]
    pub fn ref_length(&self) -> usize {
        self.iter()
            .filter(|Ciglet { op, .. }| matches!(op, b'M' | b'D' | b'N' | b'=' | b'X'))
            .map(|Ciglet { inc, .. }| inc)
            .sum()
    }

    /// Sums lengths for operations consuming the query: `M`, `I`, `S`, `=`,
    /// and `X`.
    #[must_use]
    pub fn query_length(&self) -> usize {
        self.iter()
            .filter(|Ciglet { op, .. }| matches!(op, b'M' | b'I' | b'S' | b'=' | b'X'))
            .map(|Ciglet { inc, .. }| inc)
            .sum()
    }

    /// Returns an iterator of [`Ciglet`] for the CIGAR.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CigletIterator<'_> {
        CigletIterator::new(&self.0)
    }

    /// The CIGAR text as bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Validates that a CIGAR only contains valid (inc, op) pairs
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Cigar::try_from(&self.0[..]).is_ok()
    }
}

impl<'a> IntoIterator for &'a Cigar {
    type Item = Ciglet;
    type IntoIter = CigletIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CigletIterator::new(&self.0)
    }
}

/// Condenses [`Ciglet`] values into a CIGAR string, merging adjacent pairs
/// with the same operation and skipping zero increments.
impl FromIterator<Ciglet> for Cigar {
    fn from_iter<I: IntoIterator<Item = Ciglet>>(iter: I) -> Self {
        let mut condensed: Vec<u8> = Vec::new();
        let mut format_buffer = itoa::Buffer::new();
        let mut previous: Option<Ciglet> = None;

        for ciglet in iter.into_iter().filter(|c| c.inc > 0) {
            match previous.as_mut() {
                Some(p) if p.op == ciglet.op => p.inc += ciglet.inc,
                _ => {
                    if let Some(p) = previous.replace(ciglet) {
                        condensed.extend_from_slice(format_buffer.format(p.inc).as_bytes());
                        condensed.push(p.op);
                    }
                }
            }
        }

        if let Some(p) = previous {
            condensed.extend_from_slice(format_buffer.format(p.inc).as_bytes());
            condensed.push(p.op);
        }

        Cigar(condensed)
    }
}

impl std::fmt::Display for Cigar {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "*")
        } else {
            write!(f, "{}", String::from_utf8_lossy(&self.0))
        }
    }
}

impl std::fmt::Debug for Cigar {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl TryFrom<Vec<u8>> for Cigar {
    type Error = CigarError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let mut num: u32 = 0;
        let mut has_number = false;

        for b in &bytes {
            if b.is_ascii_digit() {
                // "0M" is a zero increment, "05M" a padded one
                if has_number && num == 0 {
                    return Err(CigarError::LeadingZero);
                }
                num = num
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(u32::from(b - b'0')))
                    .filter(|&n| n <= MAX_PACKED_LEN)
                    .ok_or(CigarError::IncOverflow)?;
                has_number = true;
            } else if is_valid_op(*b) {
                if !has_number {
                    return Err(CigarError::MissingInc);
                }
                if num == 0 {
                    return Err(CigarError::IncZero);
                }
                num = 0;
                has_number = false;
            } else {
                return Err(CigarError::InvalidOperation);
            }
        }

        if has_number {
            return Err(CigarError::MissingOp);
        }

        Ok(Cigar(bytes))
    }
}

impl TryFrom<&[u8]> for Cigar {
    type Error = CigarError;

    #[inline]
    fn try_from(v: &[u8]) -> Result<Self, Self::Error> {
        Cigar::try_from(v.to_owned())
    }
}

impl TryFrom<&str> for Cigar {
    type Error = CigarError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Cigar::try_from(s.as_bytes())
    }
}

impl std::str::FromStr for Cigar {
    type Err = CigarError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cigar::try_from(s)
    }
}

/// A single increment-opcode pair.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ciglet {
    /// Increment or repetition count.
    pub inc: usize,
    /// Alignment operation code.
    pub op:  u8,
}

impl std::fmt::Display for Ciglet {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.inc, self.op as char)
    }
}

impl std::fmt::Debug for Ciglet {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({},{})", self.inc, self.op as char)
    }
}
