//! The BAM packing of CIGAR operations into `u32` values.

use super::{CIGAR_OPS, Cigar, CigarError, Ciglet, MAX_PACKED_LEN};

/// Packs an operation as `len << 4 | code`.
///
/// ## Errors
///
/// Returns [`CigarError::InvalidOperation`] if `op` is not one of
/// [`CIGAR_OPS`], [`CigarError::IncZero`] for a zero length, and
/// [`CigarError::IncOverflow`] if `len` does not fit in 28 bits.
///
/// ## Example
///
/// ```
/// # use pairalign::data::cigar::{cigar_encode, cigar_decode_len, cigar_decode_op};
/// let packed = cigar_encode(5, b'=').unwrap();
/// assert_eq!(packed, (5 << 4) | 7);
/// assert_eq!(cigar_decode_len(packed), 5);
/// assert_eq!(cigar_decode_op(packed), b'=');
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn cigar_encode(len: u32, op: u8) -> Result<u32, CigarError> {
    let code = CIGAR_OPS.iter().position(|&o| o == op).ok_or(CigarError::InvalidOperation)?;
    if len == 0 {
        return Err(CigarError::IncZero);
    }
    if len > MAX_PACKED_LEN {
        return Err(CigarError::IncOverflow);
    }
    // There are only 10 operations
    Ok((len << 4) | code as u32)
}

/// The operation letter of a packed value. Codes beyond the table decode as
/// `M`.
#[inline]
#[must_use]
pub fn cigar_decode_op(packed: u32) -> u8 {
    CIGAR_OPS.get((packed & 0xF) as usize).copied().unwrap_or(b'M')
}

/// The length of a packed value.
#[inline]
#[must_use]
pub fn cigar_decode_len(packed: u32) -> u32 {
    packed >> 4
}

/// Parses CIGAR text into packed operations. Adjacent pairs with the same
/// operation are kept separate.
///
/// ## Errors
///
/// Returns the [`CigarError`] describing the first malformed pair.
pub fn cigar_encode_string(cigar: &str) -> Result<Vec<u32>, CigarError> {
    let cigar = Cigar::try_from(cigar.trim())?;
    cigar
        .iter()
        .map(|Ciglet { inc, op }| {
            let len = u32::try_from(inc).map_err(|_| CigarError::IncOverflow)?;
            cigar_encode(len, op)
        })
        .collect()
}

/// Renders packed operations as CIGAR text.
#[must_use]
pub fn cigar_decode(packed: &[u32]) -> Cigar {
    let mut text = Vec::with_capacity(packed.len() * 3);
    let mut format_buffer = itoa::Buffer::new();
    for &p in packed {
        text.extend_from_slice(format_buffer.format(cigar_decode_len(p)).as_bytes());
        text.push(cigar_decode_op(p));
    }
    Cigar(text)
}
