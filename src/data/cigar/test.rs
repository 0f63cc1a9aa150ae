use super::*;

#[test]
fn test_iter() {
    let cigar = Cigar::from_vec_unchecked(b"  1M22I333D4444N55555S6666H777P88X9=10B  ".to_vec());
    let mut cigar = cigar.iter();

    assert_eq!(cigar.next(), Some(Ciglet { op: b'M', inc: 1 }));
    assert_eq!(cigar.next(), Some(Ciglet { op: b'I', inc: 22 }));
    assert_eq!(cigar.next(), Some(Ciglet { op: b'D', inc: 333 }));
    assert_eq!(cigar.next(), Some(Ciglet { op: b'N', inc: 4444 }));
    assert_eq!(cigar.next(), Some(Ciglet { op: b'S', inc: 55555 }));
    assert_eq!(cigar.next(), Some(Ciglet { op: b'H', inc: 6666 }));
    assert_eq!(cigar.next(), Some(Ciglet { op: b'P', inc: 777 }));
    assert_eq!(cigar.next(), Some(Ciglet { op: b'X', inc: 88 }));
    assert_eq!(cigar.next(), Some(Ciglet { op: b'=', inc: 9 }));
    assert_eq!(cigar.next(), Some(Ciglet { op: b'B', inc: 10 }));
    assert_eq!(cigar.next(), None);

    // Illegal cigar op
    let cigar = Cigar::from_vec_unchecked(b"8K".to_vec());
    assert_eq!(cigar.iter().next(), None);

    // Leading zeroes don't matter
    let cigar = Cigar::from_vec_unchecked(b"000000000000000000000000000000155M".to_vec());
    assert_eq!(cigar.iter().next(), Some(Ciglet { op: b'M', inc: 155 }));

    // Overflows
    let cigar = Cigar::from_vec_unchecked(b"100000000000000000000000000000155M".to_vec());
    assert_eq!(cigar.iter().next(), None);

    // Bad order
    let cigar = Cigar::from_vec_unchecked(b"M155M".to_vec());
    assert_eq!(cigar.iter().next(), None);
}

#[test]
fn test_validation() {
    assert!(Cigar::try_from("3=1X2D").is_ok());
    assert_eq!(Cigar::try_from("3=1K"), Err(CigarError::InvalidOperation));
    assert_eq!(Cigar::try_from("0M"), Err(CigarError::IncZero));
    assert_eq!(Cigar::try_from("05M"), Err(CigarError::LeadingZero));
    assert_eq!(Cigar::try_from("3M00I"), Err(CigarError::LeadingZero));
    assert!(Cigar::try_from("10M100I").is_ok());
    assert_eq!(cigar_encode_string("2=05X"), Err(CigarError::LeadingZero));
    assert_eq!(Cigar::try_from("M"), Err(CigarError::MissingInc));
    assert_eq!(Cigar::try_from("3M4"), Err(CigarError::MissingOp));
    assert_eq!(Cigar::try_from("268435456M"), Err(CigarError::IncOverflow));
    assert!(Cigar::try_from("268435455M").is_ok());
    assert!(Cigar::from_vec_unchecked(b"4Q".to_vec()).is_valid().eq(&false));
}

#[test]
fn test_condense() {
    let ciglets = [
        Ciglet { inc: 2, op: b'=' },
        Ciglet { inc: 1, op: b'=' },
        Ciglet { inc: 0, op: b'I' },
        Ciglet { inc: 1, op: b'X' },
        Ciglet { inc: 2, op: b'D' },
    ];
    let cigar: Cigar = ciglets.into_iter().collect();
    assert_eq!(cigar.to_string(), "3=1X2D");
    assert_eq!(cigar.ref_length(), 6);
    assert_eq!(cigar.query_length(), 4);

    let empty: Cigar = std::iter::empty().collect();
    assert_eq!(empty.to_string(), "*");
}

#[test]
fn test_packed() {
    let packed = cigar_encode_string("3=1X2D").unwrap();
    assert_eq!(packed, vec![(3 << 4) | 7, (1 << 4) | 8, (2 << 4) | 2]);
    assert_eq!(cigar_decode(&packed).to_string(), "3=1X2D");

    for (i, &op) in CIGAR_OPS.iter().enumerate() {
        let p = cigar_encode(42, op).unwrap();
        assert_eq!(cigar_decode_op(p), op);
        assert_eq!(cigar_decode_len(p), 42);
        assert_eq!(p & 0xF, u32::try_from(i).unwrap());
    }

    // Codes outside of the table decode as 'M'
    assert_eq!(cigar_decode_op((7 << 4) | 12), b'M');

    assert_eq!(cigar_encode(0, b'M'), Err(CigarError::IncZero));
    assert_eq!(cigar_encode(MAX_PACKED_LEN + 1, b'M'), Err(CigarError::IncOverflow));
    assert_eq!(cigar_encode(3, b'Q'), Err(CigarError::InvalidOperation));
    assert_eq!(cigar_encode_string("5M2"), Err(CigarError::MissingOp));
}
