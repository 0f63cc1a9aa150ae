//! Iteration over CIGAR strings.

use super::{Ciglet, is_valid_op};

/// An iterator over a CIGAR string.
///
/// This iterator has the following unchecked behavior which is worth noting:
///
/// - If an invalid operation is encountered, an increment is missing or zero,
///   or an increment overflows [`usize`], then the iterator ends early.
/// - If adjacent operations are the same, this iterator will yield them
///   separately as two [`Ciglet`] values.
#[derive(Clone, Debug)]
pub struct CigletIterator<'a> {
    buffer: &'a [u8],
}

impl<'a> CigletIterator<'a> {
    /// Constructs an iterator from a CIGAR byte buffer.
    #[inline]
    pub(crate) fn new(buffer: &'a [u8]) -> Self {
        CigletIterator {
            buffer: buffer.trim_ascii(),
        }
    }
}

impl Iterator for CigletIterator<'_> {
    type Item = Ciglet;

    fn next(&mut self) -> Option<Self::Item> {
        let mut num: usize = 0;

        for (index, &b) in self.buffer.iter().enumerate() {
            if b.is_ascii_digit() {
                num = num.checked_mul(10)?.checked_add(usize::from(b - b'0'))?;
            } else if is_valid_op(b) && num > 0 {
                self.buffer = &self.buffer[index + 1..];
                return Some(Ciglet { inc: num, op: b });
            } else {
                self.buffer = &[];
                return None;
            }
        }

        self.buffer = &[];
        None
    }
}
