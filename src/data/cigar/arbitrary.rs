use super::{CIGAR_OPS, Cigar, Ciglet, MAX_PACKED_LEN};
use arbitrary::{Arbitrary, Result, Unstructured};

/// Generates a well-formed pair: an operation from [`CIGAR_OPS`] and an
/// increment that fits in a packed operation.
impl<'a> Arbitrary<'a> for Ciglet {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(Ciglet {
            inc: u.int_in_range(1..=MAX_PACKED_LEN as usize)?,
            op:  *u.choose(CIGAR_OPS)?,
        })
    }
}

/// Generates CIGAR strings that always parse and pack. Adjacent pairs are
/// not merged, so `2M3M` can occur.
impl<'a> Arbitrary<'a> for Cigar {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mut out = Vec::new();
        let mut format_buffer = itoa::Buffer::new();
        for ciglet in u.arbitrary_iter::<Ciglet>()? {
            let Ciglet { inc, op } = ciglet?;
            out.extend_from_slice(format_buffer.format(inc).as_bytes());
            out.push(op);
        }
        Ok(Cigar(out))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::cigar::{cigar_decode, cigar_encode_string};

    #[test]
    fn arbitrary_cigars_pack() {
        let bytes: Vec<u8> = (0..=255).cycle().take(4096).collect();
        let mut u = Unstructured::new(&bytes);
        while !u.is_empty() {
            let cigar = Cigar::arbitrary(&mut u).unwrap();
            assert!(cigar.is_valid());
            if cigar.as_bytes().is_empty() {
                continue;
            }
            let packed = cigar_encode_string(&cigar.to_string()).unwrap();
            assert_eq!(cigar_decode(&packed), cigar);
        }
    }
}
