// Row and column order for the protein tables
pub(super) const PROTEIN_ALPHABET: &[u8] = b"ARNDCQEGHILKMFPSTWYVBZX*";

// Row and column order for the nucleotide table
pub(super) const NUC44_ALPHABET: &[u8] = b"ATGCSWRYKMBVHDN";

/// BLOSUM30 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM30: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      4, -1,  0,  0, -3,  1,  0,  0, -2,  0, -1,  0,  1, -2, -1,  1,  1, -5, -4,  1,  0,  0,  0, -7, // A
     -1,  8, -2, -1, -2,  3, -1, -2, -1, -3, -2,  1,  0, -1, -1, -1, -3,  0,  0, -1, -2,  0, -1, -7, // R
      0, -2,  8,  1, -1, -1, -1,  0,  0, -2, -2,  0, -1, -1, -3,  0,  1, -7, -4, -2,  5, -1, -1, -7, // N
      0, -1,  1,  9, -3, -1,  1, -1, -2, -4, -1,  0, -3, -5, -1,  0, -1, -4, -1, -2,  5,  0, -1, -7, // D
     -3, -2, -1, -3, 17, -2,  1, -4, -5,  0, -2,  0, -2, -3, -3, -2, -2, -2, -6, -2, -2,  0, -2, -7, // C
      1,  3, -1, -1, -2,  8,  2, -2,  0, -2,  0,  0, -1, -3,  0, -1,  0, -1, -1, -3, -1,  4, -1, -7, // Q
      0, -1, -1,  1,  1,  2,  6, -2,  0, -3, -1,  1, -1, -4,  1,  0, -2, -1, -2, -3,  0,  5, -1, -7, // E
      0, -2,  0, -1, -4, -2, -2,  8, -3, -1, -2, -1, -2, -3, -1,  0, -2,  1, -3, -3,  0, -2, -1, -7, // G
     -2, -1,  0, -2, -5,  0,  0, -3, 14, -2, -1, -2,  2, -3,  1, -1, -2, -5,  0, -3, -1,  0, -1, -7, // H
      0, -3, -2, -4,  0, -2, -3, -1, -2,  6,  2, -2,  1,  0, -3, -1,  0, -3, -1,  4, -3, -3,  0, -7, // I
     -1, -2, -2, -1, -2,  0, -1, -2, -1,  2,  4, -2,  2,  2, -3, -2,  0, -2,  3,  1, -1, -1, -1, -7, // L
      0,  1,  0,  0,  0,  0,  1, -1, -2, -2, -2,  4,  2, -1,  0,  0, -1, -2, -1, -2,  0,  0,  0, -7, // K
      1,  0, -1, -3, -2, -1, -1, -2,  2,  1,  2,  2,  6,  0, -4, -2,  0, -3, -1,  0, -2, -1,  0, -7, // M
     -2, -1, -1, -5, -3, -3, -4, -3, -3,  0,  2, -1,  0, 10, -4, -1, -2,  0,  3, -1, -3, -4, -1, -7, // F
     -1, -1, -3, -1, -3,  0,  1, -1,  1, -3, -3,  0, -4, -4, 11, -1,  0, -3, -2, -4, -2,  0, -1, -7, // P
      1, -1,  0,  0, -2, -1,  0,  0, -1, -1, -2,  0, -2, -1, -1,  4,  2, -3, -2, -1,  0,  0,  0, -7, // S
      1, -3,  1, -1, -2,  0, -2, -2, -2,  0,  0, -1,  0, -2,  0,  2,  5, -5, -1,  1,  0, -1,  0, -7, // T
     -5,  0, -7, -4, -2, -1, -1,  1, -5, -3, -2, -2, -3,  0, -3, -3, -5, 20,  5, -3, -5, -1, -2, -7, // W
     -4,  0, -4, -1, -6, -1, -2, -3,  0, -1,  3, -1, -1,  3, -2, -2, -1,  5,  9,  1, -3, -2, -1, -7, // Y
      1, -1, -2, -2, -2, -3, -3, -3, -3,  4,  1, -2,  0, -1, -4, -1,  1, -3,  1,  5, -2, -3,  0, -7, // V
      0, -2,  5,  5, -2, -1,  0,  0, -1, -3, -1,  0, -2, -3, -2,  0,  0, -5, -3, -2,  5,  0, -1, -7, // B
      0,  0, -1,  0,  0,  4,  5, -2,  0, -3, -1,  0, -1, -4,  0,  0, -1, -1, -2, -3,  0,  4, -1, -7, // Z
      0, -1, -1, -1, -2, -1, -1, -1, -1,  0, -1,  0,  0, -1, -1,  0,  0, -2, -1,  0, -1, -1, -1, -7, // X
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,  1, // *
];

/// BLOSUM35 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM35: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -1, -1, -1, -2,  0, -1,  0, -2, -1, -2,  0,  0, -2, -2,  1,  0, -2, -1,  0, -1, -1,  0, -5, // A
     -1,  8, -1, -1, -3,  2, -1, -2, -1, -3, -2,  2,  0, -1, -2, -1, -2,  0,  0, -1, -1,  0, -1, -5, // R
     -1, -1,  7,  1, -1,  1, -1,  1,  1, -1, -2,  0, -1, -1, -2,  0,  0, -2, -2, -2,  4,  0,  0, -5, // N
     -1, -1,  1,  8, -3, -1,  2, -2,  0, -3, -2, -1, -3, -3, -1, -1, -1, -3, -2, -2,  5,  1, -1, -5, // D
     -2, -3, -1, -3, 15, -3, -1, -3, -4, -4, -2, -2, -4, -4, -4, -3, -1, -5, -5, -2, -2, -2, -2, -5, // C
      0,  2,  1, -1, -3,  7,  2, -2, -1, -2, -2,  0, -1, -4,  0,  0,  0, -1,  0, -3,  0,  4, -1, -5, // Q
     -1, -1, -1,  2, -1,  2,  6, -2, -1, -3, -1,  1, -2, -3,  0,  0, -1, -1, -1, -2,  0,  5, -1, -5, // E
      0, -2,  1, -2, -3, -2, -2,  7, -2, -3, -3, -1, -1, -3, -2,  1, -2, -1, -2, -3,  0, -2, -1, -5, // G
     -2, -1,  1,  0, -4, -1, -1, -2, 12, -3, -2, -2,  1, -3, -1, -1, -2, -4,  0, -4,  0, -1, -1, -5, // H
     -1, -3, -1, -3, -4, -2, -3, -3, -3,  5,  2, -2,  1,  1, -1, -2, -1, -1,  0,  4, -2, -3,  0, -5, // I
     -2, -2, -2, -2, -2, -2, -1, -3, -2,  2,  5, -2,  3,  2, -3, -2,  0,  0,  0,  2, -2, -2,  0, -5, // L
      0,  2,  0, -1, -2,  0,  1, -1, -2, -2, -2,  5,  0, -1,  0,  0,  0,  0, -1, -2,  0,  1,  0, -5, // K
      0,  0, -1, -3, -4, -1, -2, -1,  1,  1,  3,  0,  6,  0, -3, -1,  0,  1,  0,  1, -2, -2,  0, -5, // M
     -2, -1, -1, -3, -4, -4, -3, -3, -3,  1,  2, -1,  0,  8, -4, -1, -1,  1,  3,  1, -2, -3, -1, -5, // F
     -2, -2, -2, -1, -4,  0,  0, -2, -1, -1, -3,  0, -3, -4, 10, -2,  0, -4, -3, -3, -1,  0, -1, -5, // P
      1, -1,  0, -1, -3,  0,  0,  1, -1, -2, -2,  0, -1, -1, -2,  4,  2, -2, -1, -1,  0,  0,  0, -5, // S
      0, -2,  0, -1, -1,  0, -1, -2, -2, -1,  0,  0,  0, -1,  0,  2,  5, -2, -2,  1, -1, -1,  0, -5, // T
     -2,  0, -2, -3, -5, -1, -1, -1, -4, -1,  0,  0,  1,  1, -4, -2, -2, 16,  3, -2, -3, -1, -1, -5, // W
     -1,  0, -2, -2, -5,  0, -1, -2,  0,  0,  0, -1,  0,  3, -3, -1, -2,  3,  8,  0, -2, -1, -1, -5, // Y
      0, -1, -2, -2, -2, -3, -2, -3, -4,  4,  2, -2,  1,  1, -3, -1,  1, -2,  0,  5, -2, -2,  0, -5, // V
     -1, -1,  4,  5, -2,  0,  0,  0,  0, -2, -2,  0, -2, -2, -1,  0, -1, -3, -2, -2,  5,  0, -1, -5, // B
     -1,  0,  0,  1, -2,  4,  5, -2, -1, -3, -2,  1, -2, -3,  0,  0, -1, -1, -1, -2,  0,  4,  0, -5, // Z
      0, -1,  0, -1, -2, -1, -1, -1, -1,  0,  0,  0,  0, -1, -1,  0,  0, -1, -1,  0, -1,  0, -1, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// BLOSUM40 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM40: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -2, -1, -1, -2,  0, -1,  1, -2, -1, -2, -1, -1, -3, -2,  1,  0, -3, -2,  0, -1, -1,  0, -6, // A
     -2,  9,  0, -1, -3,  2, -1, -3,  0, -3, -2,  3, -1, -2, -3, -1, -2, -2, -1, -2, -1,  0, -1, -6, // R
     -1,  0,  8,  2, -2,  1, -1,  0,  1, -2, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  4,  0, -1, -6, // N
     -1, -1,  2,  9, -2, -1,  2, -2,  0, -4, -3,  0, -3, -4, -2,  0, -1, -5, -3, -3,  6,  1, -1, -6, // D
     -2, -3, -2, -2, 16, -4, -2, -3, -4, -4, -2, -3, -3, -2, -5, -1, -1, -6, -4, -2, -2, -3, -2, -6, // C
      0,  2,  1, -1, -4,  8,  2, -2,  0, -3, -2,  1, -1, -4, -2,  1, -1, -1, -1, -3,  0,  4, -1, -6, // Q
     -1, -1, -1,  2, -2,  2,  7, -3,  0, -4, -2,  1, -2, -3,  0,  0, -1, -2, -2, -3,  1,  5, -1, -6, // E
      1, -3,  0, -2, -3, -2, -3,  8, -2, -4, -4, -2, -2, -3, -1,  0, -2, -2, -3, -4, -1, -2, -1, -6, // G
     -2,  0,  1,  0, -4,  0,  0, -2, 13, -3, -2, -1,  1, -2, -2, -1, -2, -5,  2, -4,  0,  0, -1, -6, // H
     -1, -3, -2, -4, -4, -3, -4, -4, -3,  6,  2, -3,  1,  1, -2, -2, -1, -3,  0,  4, -3, -4, -1, -6, // I
     -2, -2, -3, -3, -2, -2, -2, -4, -2,  2,  6, -2,  3,  2, -4, -3, -1, -1,  0,  2, -3, -2, -1, -6, // L
     -1,  3,  0,  0, -3,  1,  1, -2, -1, -3, -2,  6, -1, -3, -1,  0,  0, -2, -1, -2,  0,  1, -1, -6, // K
     -1, -1, -2, -3, -3, -1, -2, -2,  1,  1,  3, -1,  7,  0, -2, -2, -1, -2,  1,  1, -3, -2,  0, -6, // M
     -3, -2, -3, -4, -2, -4, -3, -3, -2,  1,  2, -3,  0,  9, -4, -2, -1,  1,  4,  0, -3, -4, -1, -6, // F
     -2, -3, -2, -2, -5, -2,  0, -1, -2, -2, -4, -1, -2, -4, 11, -1,  0, -4, -3, -3, -2, -1, -2, -6, // P
      1, -1,  1,  0, -1,  1,  0,  0, -1, -2, -3,  0, -2, -2, -1,  5,  2, -5, -2, -1,  0,  0,  0, -6, // S
      0, -2,  0, -1, -1, -1, -1, -2, -2, -1, -1,  0, -1, -1,  0,  2,  6, -4, -1,  1,  0, -1,  0, -6, // T
     -3, -2, -4, -5, -6, -1, -2, -2, -5, -3, -1, -2, -2,  1, -4, -5, -4, 19,  3, -3, -4, -2, -2, -6, // W
     -2, -1, -2, -3, -4, -1, -2, -3,  2,  0,  0, -1,  1,  4, -3, -2, -1,  3,  9, -1, -3, -2, -1, -6, // Y
      0, -2, -3, -3, -2, -3, -3, -4, -4,  4,  2, -2,  1,  0, -3, -1,  1, -3, -1,  5, -3, -3, -1, -6, // V
     -1, -1,  4,  6, -2,  0,  1, -1,  0, -3, -3,  0, -3, -3, -2,  0,  0, -4, -3, -3,  5,  2, -1, -6, // B
     -1,  0,  0,  1, -3,  4,  5, -2,  0, -4, -2,  1, -2, -4, -1,  0, -1, -2, -2, -3,  2,  5, -1, -6, // Z
      0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1,  0, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// BLOSUM45 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM45: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -2, -1, -2, -1, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -2, -2,  0, -1, -1,  0, -5, // A
     -2,  7,  0, -1, -3,  1,  0, -2,  0, -3, -2,  3, -1, -2, -2, -1, -1, -2, -1, -2, -1,  0, -1, -5, // R
     -1,  0,  6,  2, -2,  0,  0,  0,  1, -2, -3,  0, -2, -2, -2,  1,  0, -4, -2, -3,  4,  0, -1, -5, // N
     -2, -1,  2,  7, -3,  0,  2, -1,  0, -4, -3,  0, -3, -4, -1,  0, -1, -4, -2, -3,  5,  1, -1, -5, // D
     -1, -3, -2, -3, 12, -3, -3, -3, -3, -3, -2, -3, -2, -2, -4, -1, -1, -5, -3, -1, -2, -3, -2, -5, // C
     -1,  1,  0,  0, -3,  6,  2, -2,  1, -2, -2,  1,  0, -4, -1,  0, -1, -2, -1, -3,  0,  4, -1, -5, // Q
     -1,  0,  0,  2, -3,  2,  6, -2,  0, -3, -2,  1, -2, -3,  0,  0, -1, -3, -2, -3,  1,  4, -1, -5, // E
      0, -2,  0, -1, -3, -2, -2,  7, -2, -4, -3, -2, -2, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -5, // G
     -2,  0,  1,  0, -3,  1,  0, -2, 10, -3, -2, -1,  0, -2, -2, -1, -2, -3,  2, -3,  0,  0, -1, -5, // H
     -1, -3, -2, -4, -3, -2, -3, -4, -3,  5,  2, -3,  2,  0, -2, -2, -1, -2,  0,  3, -3, -3, -1, -5, // I
     -1, -2, -3, -3, -2, -2, -2, -3, -2,  2,  5, -3,  2,  1, -3, -3, -1, -2,  0,  1, -3, -2, -1, -5, // L
     -1,  3,  0,  0, -3,  1,  1, -2, -1, -3, -3,  5, -1, -3, -1, -1, -1, -2, -1, -2,  0,  1, -1, -5, // K
     -1, -1, -2, -3, -2,  0, -2, -2,  0,  2,  2, -1,  6,  0, -2, -2, -1, -2,  0,  1, -2, -1, -1, -5, // M
     -2, -2, -2, -4, -2, -4, -3, -3, -2,  0,  1, -3,  0,  8, -3, -2, -1,  1,  3,  0, -3, -3, -1, -5, // F
     -1, -2, -2, -1, -4, -1,  0, -2, -2, -2, -3, -1, -2, -3,  9, -1, -1, -3, -3, -3, -2, -1, -1, -5, // P
      1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -3, -1, -2, -2, -1,  4,  2, -4, -2, -1,  0,  0,  0, -5, // S
      0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -1, -1,  2,  5, -3, -1,  0,  0, -1,  0, -5, // T
     -2, -2, -4, -4, -5, -2, -3, -2, -3, -2, -2, -2, -2,  1, -3, -4, -3, 15,  3, -3, -4, -2, -2, -5, // W
     -2, -1, -2, -2, -3, -1, -2, -3,  2,  0,  0, -1,  0,  3, -3, -2, -1,  3,  8, -1, -2, -2, -1, -5, // Y
      0, -2, -3, -3, -1, -3, -3, -3, -3,  3,  1, -2,  1,  0, -3, -1,  0, -3, -1,  5, -3, -3, -1, -5, // V
     -1, -1,  4,  5, -2,  0,  1, -1,  0, -3, -3,  0, -2, -3, -2,  0,  0, -4, -2, -3,  4,  2, -1, -5, // B
     -1,  0,  0,  1, -3,  4,  4, -2,  0, -3, -2,  1, -1, -3, -1,  0, -1, -2, -2, -3,  2,  4, -1, -5, // Z
      0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0,  0, -2, -1, -1, -1, -1, -1, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// BLOSUM50 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM50: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -2, -1, -2, -1, -1, -1,  0, -2, -1, -2, -1, -1, -3, -1,  1,  0, -3, -2,  0, -2, -1, -1, -5, // A
     -2,  7, -1, -2, -4,  1,  0, -3,  0, -4, -3,  3, -2, -3, -3, -1, -1, -3, -1, -3, -1,  0, -1, -5, // R
     -1, -1,  7,  2, -2,  0,  0,  0,  1, -3, -4,  0, -2, -4, -2,  1,  0, -4, -2, -3,  4,  0, -1, -5, // N
     -2, -2,  2,  8, -4,  0,  2, -1, -1, -4, -4, -1, -4, -5, -1,  0, -1, -5, -3, -4,  5,  1, -1, -5, // D
     -1, -4, -2, -4, 13, -3, -3, -3, -3, -2, -2, -3, -2, -2, -4, -1, -1, -5, -3, -1, -3, -3, -2, -5, // C
     -1,  1,  0,  0, -3,  7,  2, -2,  1, -3, -2,  2,  0, -4, -1,  0, -1, -1, -1, -3,  0,  4, -1, -5, // Q
     -1,  0,  0,  2, -3,  2,  6, -3,  0, -4, -3,  1, -2, -3, -1, -1, -1, -3, -2, -3,  1,  5, -1, -5, // E
      0, -3,  0, -1, -3, -2, -3,  8, -2, -4, -4, -2, -3, -4, -2,  0, -2, -3, -3, -4, -1, -2, -2, -5, // G
     -2,  0,  1, -1, -3,  1,  0, -2, 10, -4, -3,  0, -1, -1, -2, -1, -2, -3,  2, -4,  0,  0, -1, -5, // H
     -1, -4, -3, -4, -2, -3, -4, -4, -4,  5,  2, -3,  2,  0, -3, -3, -1, -3, -1,  4, -4, -3, -1, -5, // I
     -2, -3, -4, -4, -2, -2, -3, -4, -3,  2,  5, -3,  3,  1, -4, -3, -1, -2, -1,  1, -4, -3, -1, -5, // L
     -1,  3,  0, -1, -3,  2,  1, -2,  0, -3, -3,  6, -2, -4, -1,  0, -1, -3, -2, -3,  0,  1, -1, -5, // K
     -1, -2, -2, -4, -2,  0, -2, -3, -1,  2,  3, -2,  7,  0, -3, -2, -1, -1,  0,  1, -3, -1, -1, -5, // M
     -3, -3, -4, -5, -2, -4, -3, -4, -1,  0,  1, -4,  0,  8, -4, -3, -2,  1,  4, -1, -4, -4, -2, -5, // F
     -1, -3, -2, -1, -4, -1, -1, -2, -2, -3, -4, -1, -3, -4, 10, -1, -1, -4, -3, -3, -2, -1, -2, -5, // P
      1, -1,  1,  0, -1,  0, -1,  0, -1, -3, -3,  0, -2, -3, -1,  5,  2, -4, -2, -2,  0,  0, -1, -5, // S
      0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  2,  5, -3, -2,  0,  0, -1,  0, -5, // T
     -3, -3, -4, -5, -5, -1, -3, -3, -3, -3, -2, -3, -1,  1, -4, -4, -3, 15,  2, -3, -5, -2, -3, -5, // W
     -2, -1, -2, -3, -3, -1, -2, -3,  2, -1, -1, -2,  0,  4, -3, -2, -2,  2,  8, -1, -3, -2, -1, -5, // Y
      0, -3, -3, -4, -1, -3, -3, -4, -4,  4,  1, -3,  1, -1, -3, -2,  0, -3, -1,  5, -4, -3, -1, -5, // V
     -2, -1,  4,  5, -3,  0,  1, -1,  0, -4, -4,  0, -3, -4, -2,  0,  0, -5, -3, -4,  5,  2, -1, -5, // B
     -1,  0,  0,  1, -3,  4,  5, -2,  0, -3, -3,  1, -1, -4, -1,  0, -1, -2, -2, -3,  2,  5, -1, -5, // Z
     -1, -1, -1, -1, -2, -1, -1, -2, -1, -1, -1, -1, -1, -2, -2, -1,  0, -3, -1, -1, -1, -1, -1, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// BLOSUM55 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM55: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -2, -2, -2,  0, -1, -1,  0, -2, -2, -2, -1, -1, -3, -1,  2,  0, -4, -2,  0, -2, -1, -1, -5, // A
     -2,  8, -1, -2, -4,  1,  0, -3,  0, -4, -3,  3, -2, -3, -3, -1, -1, -3, -2, -3, -1,  0, -1, -5, // R
     -2, -1,  8,  2, -3,  0,  0,  0,  1, -4, -4,  0, -3, -4, -2,  1,  0, -5, -2, -4,  4,  0, -1, -5, // N
     -2, -2,  2,  8, -4,  0,  2, -2, -1, -4, -5, -1, -4, -5, -2,  0, -1, -5, -3, -4,  5,  1, -2, -5, // D
      0, -4, -3, -4, 13, -4, -4, -3, -4, -2, -2, -4, -2, -3, -3, -1, -1, -4, -3, -1, -4, -4, -2, -5, // C
     -1,  1,  0,  0, -4,  7,  2, -2,  1, -4, -3,  2,  0, -4, -1,  0, -1, -2, -1, -3,  0,  4, -1, -5, // Q
     -1,  0,  0,  2, -4,  2,  7, -3,  0, -4, -4,  1, -3, -4, -1,  0, -1, -3, -2, -3,  1,  5, -1, -5, // E
      0, -3,  0, -2, -3, -2, -3,  8, -2, -5, -5, -2, -3, -4, -3,  0, -2, -3, -4, -4, -1, -3, -2, -5, // G
     -2,  0,  1, -1, -4,  1,  0, -2, 11, -4, -3,  0, -2, -1, -3, -1, -2, -3,  2, -4,  0,  0, -1, -5, // H
     -2, -4, -4, -4, -2, -4, -4, -5, -4,  6,  2, -4,  2,  0, -3, -3, -1, -3, -1,  4, -4, -4, -1, -5, // I
     -2, -3, -4, -5, -2, -3, -4, -5, -3,  2,  6, -3,  3,  1, -4, -3, -2, -3, -1,  1, -4, -3, -1, -5, // L
     -1,  3,  0, -1, -4,  2,  1, -2,  0, -4, -3,  6, -2, -4, -1,  0, -1, -4, -2, -3,  0,  1, -1, -5, // K
     -1, -2, -3, -4, -2,  0, -3, -3, -2,  2,  3, -2,  8,  0, -3, -2, -1, -2, -1,  1, -3, -2, -1, -5, // M
     -3, -3, -4, -5, -3, -4, -4, -4, -1,  0,  1, -4,  0,  9, -5, -3, -3,  2,  4, -1, -5, -4, -2, -5, // F
     -1, -3, -2, -2, -3, -1, -1, -3, -3, -3, -4, -1, -3, -5, 10, -1, -1, -5, -4, -3, -2, -1, -2, -5, // P
      2, -1,  1,  0, -1,  0,  0,  0, -1, -3, -3,  0, -2, -3, -1,  5,  2, -4, -2, -2,  0,  0, -1, -5, // S
      0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -2, -1, -1, -3, -1,  2,  6, -3, -2,  0, -1, -1, -1, -5, // T
     -4, -3, -5, -5, -4, -2, -3, -3, -3, -3, -3, -4, -2,  2, -5, -4, -3, 15,  3, -4, -5, -3, -3, -5, // W
     -2, -2, -2, -3, -3, -1, -2, -4,  2, -1, -1, -2, -1,  4, -4, -2, -2,  3,  9, -2, -3, -2, -1, -5, // Y
      0, -3, -4, -4, -1, -3, -3, -4, -4,  4,  1, -3,  1, -1, -3, -2,  0, -4, -2,  5, -4, -3, -1, -5, // V
     -2, -1,  4,  5, -4,  0,  1, -1,  0, -4, -4,  0, -3, -5, -2,  0, -1, -5, -3, -4,  5,  2, -1, -5, // B
     -1,  0,  0,  1, -4,  4,  5, -3,  0, -4, -3,  1, -2, -4, -1,  0, -1, -3, -2, -3,  2,  5, -1, -5, // Z
     -1, -1, -1, -2, -2, -1, -1, -2, -1, -1, -1, -1, -1, -2, -2, -1, -1, -3, -1, -1, -1, -1, -1, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// BLOSUM60 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM60: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      4, -1, -1, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4, // A
     -1,  5,  0, -1, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -2, -1,  0, -1, -4, // R
     -1,  0,  6,  1, -2,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4, // N
     -2, -1,  1,  6, -3,  0,  2, -1, -1, -3, -3, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4, // D
      0, -3, -2, -3,  9, -3, -3, -2, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4, // C
     -1,  1,  0,  0, -3,  5,  2, -2,  1, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4, // Q
     -1,  0,  0,  2, -3,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // E
      0, -2,  0, -1, -2, -2, -2,  6, -2, -3, -4, -1, -2, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4, // G
     -2,  0,  1, -1, -3,  1,  0, -2,  7, -3, -3, -1, -1, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4, // H
     -1, -3, -3, -3, -1, -3, -3, -3, -3,  4,  2, -3,  1,  0, -3, -2, -1, -2, -1,  3, -3, -3, -1, -4, // I
     -1, -2, -3, -3, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -3, -2, -1, -4, // L
     -1,  2,  0, -1, -3,  1,  1, -1, -1, -3, -2,  4, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4, // K
     -1, -1, -2, -3, -1,  0, -2, -2, -1,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4, // M
     -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4, // F
     -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4, // P
      1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4, // S
      0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  4, -2, -2,  0, -1, -1,  0, -4, // T
     -3, -3, -4, -4, -2, -2, -3, -2, -2, -2, -2, -3, -1,  1, -4, -3, -2, 10,  2, -3, -4, -2, -2, -4, // W
     -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  6, -1, -3, -2, -1, -4, // Y
      0, -2, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4, // V
     -2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -3,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4, // B
     -1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -2,  1, -1, -3, -1,  0, -1, -2, -2, -2,  1,  3, -1, -4, // Z
      0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// BLOSUM62 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM62: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4, // A
     -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4, // R
     -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4, // N
     -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4, // D
      0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4, // C
     -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4, // Q
     -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // E
      0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4, // G
     -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4, // H
     -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4, // I
     -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4, // L
     -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4, // K
     -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4, // M
     -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4, // F
     -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4, // P
      1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4, // S
      0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4, // T
     -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4, // W
     -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4, // Y
      0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4, // V
     -2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4, // B
     -1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // Z
      0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// BLOSUM65 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM65: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -2, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1, -1, -4, // A
     -1,  6,  0, -2, -4,  1,  0, -2,  0, -3, -2,  2, -2, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4, // R
     -2,  0,  6,  1, -3,  0,  0, -1,  1, -3, -4,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4, // N
     -2, -2,  1,  6, -4,  0,  2, -1, -1, -3, -4, -1, -3, -4, -2,  0, -1, -5, -3, -3,  4,  1, -1, -4, // D
      0, -4, -3, -4,  9, -3, -4, -3, -3, -1, -1, -3, -2, -2, -3, -1, -1, -2, -2, -1, -3, -4, -2, -4, // C
     -1,  1,  0,  0, -3,  6,  2, -2,  1, -3, -2,  1,  0, -3, -1,  0, -1, -2, -2, -2,  0,  3, -1, -4, // Q
     -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -3,  1,  4, -1, -4, // E
      0, -2, -1, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -3, -3, -3, -1, -2, -2, -4, // G
     -2,  0,  1, -1, -3,  1,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4, // H
     -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -2, -1,  3, -3, -3, -1, -4, // I
     -2, -2, -4, -4, -1, -2, -3, -4, -3,  2,  4, -3,  2,  0, -3, -3, -1, -2, -1,  1, -4, -3, -1, -4, // L
     -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -3,  5, -2, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4, // K
     -1, -2, -2, -3, -2,  0, -2, -3, -2,  1,  2, -2,  6,  0, -3, -2, -1, -2, -1,  1, -3, -2, -1, -4, // M
     -2, -3, -3, -4, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -2, -4, // F
     -1, -2, -2, -2, -3, -1, -1, -2, -2, -3, -3, -1, -3, -4,  8, -1, -1, -4, -3, -2, -2, -1, -2, -4, // P
      1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -3,  0, -2, -2, -1,  4,  1, -3, -2, -2,  0,  0, -1, -4, // S
      0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -3, -2,  0, -1, -1, -1, -4, // T
     -3, -3, -4, -5, -2, -2, -3, -3, -2, -2, -2, -3, -2,  1, -4, -3, -3, 10,  2, -3, -4, -3, -2, -4, // W
     -2, -2, -2, -3, -2, -2, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4, // Y
      0, -3, -3, -3, -1, -2, -3, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4, // V
     -2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4, // B
     -1,  0,  0,  1, -4,  3,  4, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // Z
     -1, -1, -1, -1, -2, -1, -1, -2, -1, -1, -1, -1, -1, -2, -2, -1, -1, -2, -1, -1, -1, -1, -1, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// BLOSUM70 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM70: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      4, -2, -2, -2, -1, -1, -1,  0, -2, -2, -2, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1, -1, -4, // A
     -2,  6, -1, -2, -4,  1,  0, -3,  0, -3, -3,  2, -2, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4, // R
     -2, -1,  6,  1, -3,  0,  0, -1,  0, -4, -4,  0, -2, -3, -2,  0,  0, -4, -2, -3,  3,  0, -1, -4, // N
     -2, -2,  1,  6, -4, -1,  1, -2, -1, -4, -4, -1, -3, -4, -2,  0, -1, -5, -4, -4,  4,  1, -2, -4, // D
     -1, -4, -3, -4,  9, -3, -4, -3, -4, -1, -2, -4, -2, -2, -3, -1, -1, -3, -3, -1, -4, -4, -2, -4, // C
     -1,  1,  0, -1, -3,  6,  2, -2,  1, -3, -2,  1,  0, -3, -2,  0, -1, -2, -2, -2,  0,  3, -1, -4, // Q
     -1,  0,  0,  1, -4,  2,  5, -2,  0, -4, -3,  1, -2, -4, -1,  0, -1, -4, -3, -3,  1,  4, -1, -4, // E
      0, -3, -1, -2, -3, -2, -2,  6, -2, -4, -4, -2, -3, -4, -3, -1, -2, -3, -4, -4, -1, -2, -2, -4, // G
     -2,  0,  0, -1, -4,  1,  0, -2,  8, -4, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3, -1,  0, -1, -4, // H
     -2, -3, -4, -4, -1, -3, -4, -4, -4,  4,  2, -3,  1,  0, -3, -3, -1, -3, -1,  3, -4, -3, -1, -4, // I
     -2, -3, -4, -4, -2, -2, -3, -4, -3,  2,  4, -3,  2,  0, -3, -3, -2, -2, -1,  1, -4, -3, -1, -4, // L
     -1,  2,  0, -1, -4,  1,  1, -2, -1, -3, -3,  5, -2, -3, -1,  0, -1, -3, -2, -3, -1,  1, -1, -4, // K
     -1, -2, -2, -3, -2,  0, -2, -3, -2,  1,  2, -2,  6,  0, -3, -2, -1, -2, -1,  1, -3, -1, -1, -4, // M
     -2, -3, -3, -4, -2, -3, -4, -4, -1,  0,  0, -3,  0,  6, -4, -3, -2,  1,  3, -1, -4, -3, -2, -4, // F
     -1, -2, -2, -2, -3, -2, -1, -3, -2, -3, -3, -1, -3, -4,  8, -1, -1, -4, -3, -3, -2, -1, -2, -4, // P
      1, -1,  0,  0, -1,  0,  0, -1, -1, -3, -3,  0, -2, -3, -1,  4,  1, -3, -2, -2,  0,  0, -1, -4, // S
      0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -2, -1, -1, -2, -1,  1,  5, -3, -2,  0, -1, -1, -1, -4, // T
     -3, -3, -4, -5, -3, -2, -4, -3, -2, -3, -2, -3, -2,  1, -4, -3, -3, 11,  2, -3, -4, -3, -3, -4, // W
     -2, -2, -2, -4, -3, -2, -3, -4,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -2, -3, -2, -1, -4, // Y
      0, -3, -3, -4, -1, -2, -3, -4, -3,  3,  1, -3,  1, -1, -3, -2,  0, -3, -2,  4, -3, -3, -1, -4, // V
     -2, -1,  3,  4, -4,  0,  1, -1, -1, -4, -4, -1, -3, -4, -2,  0, -1, -4, -3, -3,  4,  0, -1, -4, // B
     -1,  0,  0,  1, -4,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -3,  0,  4, -1, -4, // Z
     -1, -1, -1, -2, -2, -1, -1, -2, -1, -1, -1, -1, -1, -2, -2, -1, -1, -3, -1, -1, -1, -1, -1, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// BLOSUM75 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM75: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      4, -2, -2, -2, -1, -1, -1,  0, -2, -2, -2, -1, -1, -3, -1,  1,  0, -3, -2,  0, -2, -1, -1, -5, // A
     -2,  6, -1, -2, -4,  1,  0, -3,  0, -3, -3,  2, -2, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -5, // R
     -2, -1,  6,  1, -3,  0, -1, -1,  0, -4, -4,  0, -3, -4, -3,  0,  0, -4, -3, -3,  3,  0, -1, -5, // N
     -2, -2,  1,  6, -4, -1,  1, -2, -1, -4, -4, -1, -4, -4, -2, -1, -1, -5, -4, -4,  4,  1, -2, -5, // D
     -1, -4, -3, -4,  9, -3, -5, -3, -4, -1, -2, -4, -2, -2, -4, -1, -1, -3, -3, -1, -4, -4, -2, -5, // C
     -1,  1,  0, -1, -3,  6,  2, -2,  1, -3, -3,  1,  0, -4, -2,  0, -1, -2, -2, -2,  0,  3, -1, -5, // Q
     -1,  0, -1,  1, -5,  2,  5, -3,  0, -4, -4,  1, -2, -4, -1,  0, -1, -4, -3, -3,  1,  4, -1, -5, // E
      0, -3, -1, -2, -3, -2, -3,  6, -2, -5, -4, -2, -3, -4, -3, -1, -2, -3, -4, -4, -1, -2, -2, -5, // G
     -2,  0,  0, -1, -4,  1,  0, -2,  8, -4, -3, -1, -2, -2, -2, -1, -2, -2,  2, -4, -1,  0, -1, -5, // H
     -2, -3, -4, -4, -1, -3, -4, -5, -4,  4,  1, -3,  1,  0, -3, -3, -1, -3, -2,  3, -4, -4, -2, -5, // I
     -2, -3, -4, -4, -2, -3, -4, -4, -3,  1,  4, -3,  2,  0, -3, -3, -2, -2, -1,  1, -4, -3, -1, -5, // L
     -1,  2,  0, -1, -4,  1,  1, -2, -1, -3, -3,  5, -2, -4, -1,  0, -1, -4, -2, -3, -1,  1, -1, -5, // K
     -1, -2, -3, -4, -2,  0, -2, -3, -2,  1,  2, -2,  6,  0, -3, -2, -1, -2, -2,  1, -3, -2, -1, -5, // M
     -3, -3, -4, -4, -2, -4, -4, -4, -2,  0,  0, -4,  0,  6, -4, -3, -2,  1,  3, -1, -4, -4, -2, -5, // F
     -1, -2, -3, -2, -4, -2, -1, -3, -2, -3, -3, -1, -3, -4,  8, -1, -1, -5, -4, -3, -2, -2, -2, -5, // P
      1, -1,  0, -1, -1,  0,  0, -1, -1, -3, -3,  0, -2, -3, -1,  5,  1, -3, -2, -2,  0,  0, -1, -5, // S
      0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -2, -1, -1, -2, -1,  1,  5, -3, -2,  0, -1, -1, -1, -5, // T
     -3, -3, -4, -5, -3, -2, -4, -3, -2, -3, -2, -4, -2,  1, -5, -3, -3, 11,  2, -3, -5, -3, -3, -5, // W
     -2, -2, -3, -4, -3, -2, -3, -4,  2, -2, -1, -2, -2,  3, -4, -2, -2,  2,  7, -2, -3, -2, -2, -5, // Y
      0, -3, -3, -4, -1, -2, -3, -4, -4,  3,  1, -3,  1, -1, -3, -2,  0, -3, -2,  4, -4, -3, -1, -5, // V
     -2, -1,  3,  4, -4,  0,  1, -1, -1, -4, -4, -1, -3, -4, -2,  0, -1, -5, -3, -4,  4,  0, -2, -5, // B
     -1,  0,  0,  1, -4,  3,  4, -2,  0, -4, -3,  1, -2, -4, -2,  0, -1, -3, -2, -3,  0,  4, -1, -5, // Z
     -1, -1, -1, -2, -2, -1, -1, -2, -1, -2, -1, -1, -1, -2, -2, -1, -1, -3, -2, -1, -2, -1, -1, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// BLOSUM80 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM80: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      7, -3, -3, -3, -1, -2, -2,  0, -3, -3, -3, -1, -2, -4, -1,  2,  0, -5, -4, -1, -3, -2, -1, -8, // A
     -3,  9, -1, -3, -6,  1, -1, -4,  0, -5, -4,  3, -3, -5, -3, -2, -2, -5, -4, -4, -2,  0, -2, -8, // R
     -3, -1,  9,  2, -5,  0, -1, -1,  1, -6, -6,  0, -4, -6, -4,  1,  0, -7, -4, -5,  5,  0, -2, -8, // N
     -3, -3,  2, 10, -7, -1,  2, -3, -2, -7, -7, -2, -6, -6, -3, -1, -2, -8, -6, -6,  6,  1, -3, -8, // D
     -1, -6, -5, -7, 13, -5, -7, -6, -7, -2, -3, -6, -3, -4, -6, -2, -2, -5, -5, -2, -6, -7, -4, -8, // C
     -2,  1,  0, -1, -5,  9,  3, -4,  1, -5, -4,  2, -1, -5, -3, -1, -1, -4, -3, -4, -1,  5, -2, -8, // Q
     -2, -1, -1,  2, -7,  3,  8, -4,  0, -6, -6,  1, -4, -6, -2,  0, -2, -6, -5, -4,  1,  6, -2, -8, // E
      0, -4, -1, -3, -6, -4, -4,  9, -4, -7, -7, -3, -5, -6, -5, -1, -3, -6, -6, -6, -2, -4, -3, -8, // G
     -3,  0,  1, -2, -7,  1,  0, -4, 12, -6, -5, -1, -4, -2, -4, -2, -3, -4,  3, -5, -1,  0, -2, -8, // H
     -3, -5, -6, -7, -2, -5, -6, -7, -6,  7,  2, -5,  2, -1, -5, -4, -2, -5, -3,  4, -6, -6, -2, -8, // I
     -3, -4, -6, -7, -3, -4, -6, -7, -5,  2,  6, -4,  3,  0, -5, -4, -3, -4, -2,  1, -7, -5, -2, -8, // L
     -1,  3,  0, -2, -6,  2,  1, -3, -1, -5, -4,  8, -3, -5, -2, -1, -1, -6, -4, -4, -1,  1, -2, -8, // K
     -2, -3, -4, -6, -3, -1, -4, -5, -4,  2,  3, -3,  9, -1, -4, -3, -1, -3, -3,  1, -5, -3, -2, -8, // M
     -4, -5, -6, -6, -4, -5, -6, -6, -2, -1,  0, -5, -1, 10, -6, -4, -4,  0,  4, -2, -6, -6, -3, -8, // F
     -1, -3, -4, -3, -6, -3, -2, -5, -4, -5, -5, -2, -4, -6, 12, -2, -3, -7, -6, -4, -4, -2, -3, -8, // P
      2, -2,  1, -1, -2, -1,  0, -1, -2, -4, -4, -1, -3, -4, -2,  7,  2, -6, -3, -3,  0, -1, -1, -8, // S
      0, -2,  0, -2, -2, -1, -2, -3, -3, -2, -3, -1, -1, -4, -3,  2,  8, -5, -3,  0, -1, -2, -1, -8, // T
     -5, -5, -7, -8, -5, -4, -6, -6, -4, -5, -4, -6, -3,  0, -7, -6, -5, 16,  3, -5, -8, -5, -5, -8, // W
     -4, -4, -4, -6, -5, -3, -5, -6,  3, -3, -2, -4, -3,  4, -6, -3, -3,  3, 11, -3, -5, -4, -3, -8, // Y
     -1, -4, -5, -6, -2, -4, -4, -6, -5,  4,  1, -4,  1, -2, -4, -3,  0, -5, -3,  7, -6, -4, -2, -8, // V
     -3, -2,  5,  6, -6, -1,  1, -2, -1, -6, -7, -1, -5, -6, -4,  0, -1, -8, -5, -6,  6,  0, -3, -8, // B
     -2,  0,  0,  1, -7,  5,  6, -4,  0, -6, -5,  1, -3, -6, -2, -1, -2, -5, -4, -4,  0,  6, -1, -8, // Z
     -1, -2, -2, -3, -4, -2, -2, -3, -2, -2, -2, -2, -2, -3, -3, -1, -1, -5, -3, -2, -3, -1, -2, -8, // X
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// BLOSUM85 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM85: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -2, -2, -2, -1, -1, -1,  0, -2, -2, -2, -1, -2, -3, -1,  1,  0, -3, -3, -1, -2, -1, -1, -6, // A
     -2,  6, -1, -2, -4,  1, -1, -3,  0, -4, -3,  2, -2, -4, -2, -1, -2, -4, -3, -3, -2,  0, -2, -6, // R
     -2, -1,  7,  1, -4,  0, -1, -1,  0, -4, -4,  0, -3, -4, -3,  0,  0, -5, -3, -4,  4, -1, -2, -6, // N
     -2, -2,  1,  7, -5, -1,  1, -2, -2, -5, -5, -1, -4, -4, -2, -1, -2, -6, -4, -4,  4,  1, -2, -6, // D
     -1, -4, -4, -5,  9, -4, -5, -4, -5, -2, -2, -4, -2, -3, -4, -2, -2, -4, -3, -1, -4, -5, -3, -6, // C
     -1,  1,  0, -1, -4,  6,  2, -3,  1, -4, -3,  1,  0, -4, -2, -1, -1, -3, -2, -3, -1,  4, -1, -6, // Q
     -1, -1, -1,  1, -5,  2,  6, -3, -1, -4, -4,  0, -3, -4, -2, -1, -1, -4, -4, -3,  0,  4, -1, -6, // E
      0, -3, -1, -2, -4, -3, -3,  6, -3, -5, -5, -2, -4, -4, -3, -1, -2, -4, -5, -4, -1, -3, -2, -6, // G
     -2,  0,  0, -2, -5,  1, -1, -3,  8, -4, -3, -1, -3, -2, -3, -1, -2, -3,  2, -4, -1,  0, -2, -6, // H
     -2, -4, -4, -5, -2, -4, -4, -5, -4,  5,  1, -3,  1, -1, -4, -3, -1, -3, -2,  3, -5, -4, -2, -6, // I
     -2, -3, -4, -5, -2, -3, -4, -5, -3,  1,  4, -3,  2,  0, -4, -3, -2, -3, -2,  0, -5, -4, -2, -6, // L
     -1,  2,  0, -1, -4,  1,  0, -2, -1, -3, -3,  6, -2, -4, -2, -1, -1, -5, -3, -3, -1,  1, -1, -6, // K
     -2, -2, -3, -4, -2,  0, -3, -4, -3,  1,  2, -2,  7, -1, -3, -2, -1, -2, -2,  0, -4, -2, -1, -6, // M
     -3, -4, -4, -4, -3, -4, -4, -4, -2, -1,  0, -4, -1,  7, -4, -3, -3,  0,  3, -1, -4, -4, -2, -6, // F
     -1, -2, -3, -2, -4, -2, -2, -3, -3, -4, -4, -2, -3, -4,  8, -1, -2, -5, -4, -3, -3, -2, -2, -6, // P
      1, -1,  0, -1, -2, -1, -1, -1, -1, -3, -3, -1, -2, -3, -1,  5,  1, -4, -2, -2,  0, -1, -1, -6, // S
      0, -2,  0, -2, -2, -1, -1, -2, -2, -1, -2, -1, -1, -3, -2,  1,  5, -4, -2,  0, -1, -1, -1, -6, // T
     -3, -4, -5, -6, -4, -3, -4, -4, -3, -3, -3, -5, -2,  0, -5, -4, -4, 11,  2, -3, -5, -4, -3, -6, // W
     -3, -3, -3, -4, -3, -2, -4, -5,  2, -2, -2, -3, -2,  3, -4, -2, -2,  2,  7, -2, -4, -3, -2, -6, // Y
     -1, -3, -4, -4, -1, -3, -3, -4, -4,  3,  0, -3,  0, -1, -3, -2,  0, -3, -2,  5, -4, -3, -1, -6, // V
     -2, -2,  4,  4, -4, -1,  0, -1, -1, -5, -5, -1, -4, -4, -3,  0, -1, -5, -4, -4,  4,  0, -2, -6, // B
     -1,  0, -1,  1, -5,  4,  4, -3,  0, -4, -4,  1, -2, -4, -2, -1, -1, -4, -3, -3,  0,  4, -1, -6, // Z
     -1, -2, -2, -2, -3, -1, -1, -2, -2, -2, -2, -1, -1, -2, -2, -1, -1, -3, -2, -1, -2, -1, -2, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// BLOSUM90 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM90: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -2, -2, -3, -1, -1, -1,  0, -2, -2, -2, -1, -2, -3, -1,  1,  0, -4, -3, -1, -2, -1, -1, -6, // A
     -2,  6, -1, -3, -5,  1, -1, -3,  0, -4, -3,  2, -2, -4, -3, -1, -2, -4, -3, -3, -2,  0, -2, -6, // R
     -2, -1,  7,  1, -4,  0, -1, -1,  0, -4, -4,  0, -3, -4, -3,  0,  0, -5, -3, -4,  4, -1, -2, -6, // N
     -3, -3,  1,  7, -5, -1,  1, -2, -2, -5, -5, -1, -4, -5, -3, -1, -2, -6, -4, -5,  4,  0, -2, -6, // D
     -1, -5, -4, -5,  9, -4, -6, -4, -5, -2, -2, -4, -2, -3, -4, -2, -2, -4, -4, -2, -4, -5, -3, -6, // C
     -1,  1,  0, -1, -4,  7,  2, -3,  1, -4, -3,  1,  0, -4, -2, -1, -1, -3, -3, -3, -1,  4, -1, -6, // Q
     -1, -1, -1,  1, -6,  2,  6, -3, -1, -4, -4,  0, -3, -5, -2, -1, -1, -5, -4, -3,  0,  4, -2, -6, // E
      0, -3, -1, -2, -4, -3, -3,  6, -3, -5, -5, -2, -4, -5, -3, -1, -3, -4, -5, -5, -2, -3, -2, -6, // G
     -2,  0,  0, -2, -5,  1, -1, -3,  8, -4, -4, -1, -3, -2, -3, -2, -2, -3,  1, -4, -1,  0, -2, -6, // H
     -2, -4, -4, -5, -2, -4, -4, -5, -4,  5,  1, -4,  1, -1, -4, -3, -1, -4, -2,  3, -5, -4, -2, -6, // I
     -2, -3, -4, -5, -2, -3, -4, -5, -4,  1,  5, -3,  2,  0, -4, -3, -2, -3, -2,  0, -5, -4, -2, -6, // L
     -1,  2,  0, -1, -4,  1,  0, -2, -1, -4, -3,  6, -2, -4, -2, -1, -1, -5, -3, -3, -1,  1, -1, -6, // K
     -2, -2, -3, -4, -2,  0, -3, -4, -3,  1,  2, -2,  7, -1, -3, -2, -1, -2, -2,  0, -4, -2, -1, -6, // M
     -3, -4, -4, -5, -3, -4, -5, -5, -2, -1,  0, -4, -1,  7, -4, -3, -3,  0,  3, -2, -4, -4, -2, -6, // F
     -1, -3, -3, -3, -4, -2, -2, -3, -3, -4, -4, -2, -3, -4,  8, -2, -2, -5, -4, -3, -3, -2, -2, -6, // P
      1, -1,  0, -1, -2, -1, -1, -1, -2, -3, -3, -1, -2, -3, -2,  5,  1, -4, -3, -2,  0, -1, -1, -6, // S
      0, -2,  0, -2, -2, -1, -1, -3, -2, -1, -2, -1, -1, -3, -2,  1,  6, -4, -2, -1, -1, -1, -1, -6, // T
     -4, -4, -5, -6, -4, -3, -5, -4, -3, -4, -3, -5, -2,  0, -5, -4, -4, 11,  2, -3, -6, -4, -3, -6, // W
     -3, -3, -3, -4, -4, -3, -4, -5,  1, -2, -2, -3, -2,  3, -4, -3, -2,  2,  8, -3, -4, -3, -2, -6, // Y
     -1, -3, -4, -5, -2, -3, -3, -5, -4,  3,  0, -3,  0, -2, -3, -2, -1, -3, -3,  5, -4, -3, -2, -6, // V
     -2, -2,  4,  4, -4, -1,  0, -2, -1, -5, -5, -1, -4, -4, -3,  0, -1, -6, -4, -4,  4,  0, -2, -6, // B
     -1,  0, -1,  0, -5,  4,  4, -3,  0, -4, -4,  1, -2, -4, -2, -1, -1, -4, -3, -3,  0,  4, -1, -6, // Z
     -1, -2, -2, -2, -3, -1, -2, -2, -2, -2, -2, -1, -1, -2, -2, -1, -1, -3, -2, -2, -2, -1, -2, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// BLOSUM95 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM95: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -2, -2, -3, -1, -1, -1, -1, -3, -2, -2, -1, -2, -3, -1,  1,  0, -4, -3, -1, -3, -1, -1, -6, // A
     -2,  7, -1, -3, -5,  0, -2, -4, -1, -4, -3,  2, -2, -4, -3, -2, -2, -4, -3, -4, -2, -1, -2, -6, // R
     -2, -1,  7,  1, -3,  0, -1, -1,  0, -4, -5,  0, -3, -4, -3,  0, -1, -5, -3, -4,  4, -1, -2, -6, // N
     -3, -3,  1,  7, -5, -1,  1, -2, -2, -5, -5, -1, -5, -5, -3, -1, -2, -6, -5, -5,  4,  0, -2, -6, // D
     -1, -5, -3, -5,  9, -4, -6, -5, -5, -2, -3, -5, -3, -3, -5, -2, -2, -4, -4, -2, -4, -5, -3, -6, // C
     -1,  0,  0, -1, -4,  7,  2, -3,  1, -4, -3,  1, -1, -4, -2, -1, -1, -3, -3, -3, -1,  4, -1, -6, // Q
     -1, -2, -1,  1, -6,  2,  6, -3, -1, -4, -4,  0, -3, -5, -2, -1, -2, -5, -4, -3,  0,  5, -2, -6, // E
     -1, -4, -1, -2, -5, -3, -3,  6, -3, -6, -5, -3, -4, -5, -4, -1, -3, -5, -5, -5, -2, -3, -3, -6, // G
     -3, -1,  0, -2, -5,  1, -1, -3,  9, -4, -4, -1, -3, -2, -3, -2, -2, -3,  1, -4, -1,  0, -2, -6, // H
     -2, -4, -4, -5, -2, -4, -4, -6, -4,  5,  1, -4,  1, -1, -4, -3, -2, -4, -2,  3, -5, -4, -2, -6, // I
     -2, -3, -5, -5, -3, -3, -4, -5, -4,  1,  5, -3,  2,  0, -4, -3, -2, -3, -2,  0, -5, -4, -2, -6, // L
     -1,  2,  0, -1, -5,  1,  0, -3, -1, -4, -3,  6, -2, -4, -2, -1, -1, -5, -3, -3, -1,  0, -1, -6, // K
     -2, -2, -3, -5, -3, -1, -3, -4, -3,  1,  2, -2,  7, -1, -3, -3, -1, -2, -3,  0, -4, -2, -2, -6, // M
     -3, -4, -4, -5, -3, -4, -5, -5, -2, -1,  0, -4, -1,  7, -5, -3, -3,  0,  3, -2, -5, -4, -2, -6, // F
     -1, -3, -3, -3, -5, -2, -2, -4, -3, -4, -4, -2, -3, -5,  8, -2, -2, -5, -5, -3, -3, -2, -3, -6, // P
      1, -2,  0, -1, -2, -1, -1, -1, -2, -3, -3, -1, -3, -3, -2,  5,  1, -4, -3, -2,  0, -1, -1, -6, // S
      0, -2, -1, -2, -2, -1, -2, -3, -2, -2, -2, -1, -1, -3, -2,  1,  6, -4, -3, -1, -1, -2, -1, -6, // T
     -4, -4, -5, -6, -4, -3, -5, -5, -3, -4, -3, -5, -2,  0, -5, -4, -4, 11,  2, -4, -6, -4, -4, -6, // W
     -3, -3, -3, -5, -4, -3, -4, -5,  1, -2, -2, -3, -3,  3, -5, -3, -3,  2,  8, -3, -4, -4, -2, -6, // Y
     -1, -4, -4, -5, -2, -3, -3, -5, -4,  3,  0, -3,  0, -2, -3, -2, -1, -4, -3,  5, -5, -3, -2, -6, // V
     -3, -2,  4,  4, -4, -1,  0, -2, -1, -5, -5, -1, -4, -5, -3,  0, -1, -6, -4, -5,  4,  0, -2, -6, // B
     -1, -1, -1,  0, -5,  4,  5, -3,  0, -4, -4,  0, -2, -4, -2, -1, -2, -4, -4, -3,  0,  4, -1, -6, // Z
     -1, -2, -2, -2, -3, -1, -2, -3, -2, -2, -2, -1, -2, -2, -3, -1, -1, -4, -2, -2, -2, -1, -2, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// BLOSUM100 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const BLOSUM100: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      8, -3, -4, -5, -2, -2, -3, -1, -4, -4, -4, -2, -3, -5, -2,  1, -1, -6, -5, -2, -4, -2, -2,-10, // A
     -3, 10, -2, -5, -8,  0, -3, -6, -1, -7, -6,  3, -4, -6, -5, -3, -3, -7, -5, -6, -4, -2, -3,-10, // R
     -4, -2, 11,  1, -5, -1, -2, -2,  0, -7, -7, -1, -5, -7, -5,  0, -1, -8, -5, -7,  5, -2, -3,-10, // N
     -5, -5,  1, 10, -8, -2,  2, -4, -3, -8, -8, -3, -8, -8, -5, -2, -4,-10, -7, -8,  6,  0, -4,-10, // D
     -2, -8, -5, -8, 14, -7, -9, -7, -8, -3, -5, -8, -4, -4, -8, -3, -3, -7, -6, -3, -7, -8, -5,-10, // C
     -2,  0, -1, -2, -7, 11,  2, -5,  1, -6, -5,  2, -2, -6, -4, -2, -3, -5, -4, -5, -2,  5, -2,-10, // Q
     -3, -3, -2,  2, -9,  2, 10, -6, -2, -7, -7,  0, -5, -8, -4, -2, -3, -8, -7, -5,  0,  7, -3,-10, // E
     -1, -6, -2, -4, -7, -5, -6,  9, -6, -9, -8, -5, -7, -8, -6, -2, -5, -7, -8, -8, -3, -5, -4,-10, // G
     -4, -1,  0, -3, -8,  1, -2, -6, 13, -7, -6, -3, -5, -4, -5, -3, -4, -5,  1, -7, -2, -1, -4,-10, // H
     -4, -7, -7, -8, -3, -6, -7, -9, -7,  8,  2, -6,  1, -2, -7, -5, -3, -6, -4,  4, -8, -7, -3,-10, // I
     -4, -6, -7, -8, -5, -5, -7, -8, -6,  2,  8, -6,  3,  0, -7, -6, -4, -5, -4,  0, -8, -6, -3,-10, // L
     -2,  3, -1, -3, -8,  2,  0, -5, -3, -6, -6, 10, -4, -6, -3, -2, -3, -8, -5, -5, -2,  0, -2,-10, // K
     -3, -4, -5, -8, -4, -2, -5, -7, -5,  1,  3, -4, 12, -3, -6, -4, -3, -6, -5,  1, -6, -4, -2,-10, // M
     -5, -6, -7, -8, -4, -6, -8, -8, -4, -2,  0, -6, -3, 10, -7, -5, -5, -1,  3, -3, -7, -7, -3,-10, // F
     -2, -5, -5, -5, -8, -4, -4, -6, -5, -7, -7, -3, -6, -7, 12, -3, -4, -8, -7, -6, -5, -4, -4,-10, // P
      1, -3,  0, -2, -3, -2, -2, -2, -3, -5, -6, -2, -4, -5, -3,  9,  2, -7, -5, -4, -1, -2, -2,-10, // S
     -1, -3, -1, -4, -3, -3, -3, -5, -4, -3, -4, -3, -3, -5, -4,  2,  9, -7, -5, -1, -2, -3, -2,-10, // T
     -6, -7, -8,-10, -7, -5, -8, -7, -5, -6, -5, -8, -6, -1, -8, -7, -7, 15,  2, -5, -8, -7, -5,-10, // W
     -5, -5, -5, -7, -6, -4, -7, -8,  1, -4, -4, -5, -5,  3, -7, -5, -5,  2, 12, -5, -6, -6, -4,-10, // Y
     -2, -6, -7, -8, -3, -5, -5, -8, -7,  4,  0, -5,  1, -3, -6, -4, -1, -5, -5,  8, -7, -5, -3,-10, // V
     -4, -4,  5,  6, -7, -2,  0, -3, -2, -8, -8, -2, -6, -7, -5, -1, -2, -8, -6, -7,  6,  0, -3,-10, // B
     -2, -2, -2,  0, -8,  5,  7, -5, -1, -7, -6,  0, -4, -7, -4, -2, -3, -7, -6, -5,  0,  6, -2,-10, // Z
     -2, -3, -3, -4, -5, -2, -3, -4, -4, -3, -3, -2, -2, -3, -4, -2, -2, -5, -4, -3, -3, -2, -3,-10, // X
    -10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,  1, // *
];

/// PAM10 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM10: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      7,-11, -7, -6,-10, -7, -5, -4,-10, -8, -9,-10, -8,-11, -4, -3, -3,-19,-10, -5, -6, -6, -6,-23, // A
    -11,  9,-10,-17,-10, -4,-15,-15, -4, -8,-12, -2, -7,-11, -7, -6,-10, -5,-19,-10,-12, -7, -9,-23, // R
     -7,-10,  9, -1,-17, -7, -5, -6, -2, -8,-10, -4,-15,-11, -9, -2, -5,-15, -7,-11,  7, -6, -6,-23, // N
     -6,-17, -1,  8,-21, -6,  0, -6, -7,-11,-18, -8,-18,-20,-11, -7, -8,-22,-17,-11,  7, -1, -9,-23, // D
    -10,-10,-17,-21, 10,-20,-20,-16,-10, -9,-21,-20,-20,-19,-11, -6,-11,-21, -7, -9,-18,-20,-14,-23, // C
     -7, -4, -7, -6,-20,  9, -1,-10, -2,-10, -8, -6, -6,-19, -6, -8, -9,-19,-18,-10, -6,  7, -8,-23, // Q
     -5,-15, -5,  0,-20, -1,  8, -7, -9, -8,-12, -7,-14,-20, -8, -7, -9,-23,-11,-10, -1,  7, -8,-23, // E
     -4,-15, -6, -6,-16,-10, -7,  7,-15,-17,-13,-11,-15,-12, -9, -4, -9,-21,-20, -9, -6, -8, -9,-23, // G
    -10, -4, -2, -7,-10, -2, -9,-15, 10,-17,-10,-10,-17, -8, -7,-10,-11,-15, -6,-10, -4, -4, -9,-23, // H
     -8, -8, -8,-11, -9,-10, -8,-17,-17,  9, -4, -9, -3, -5,-14,-10, -5,-20,-10, -1, -9, -9, -8,-23, // I
     -9,-12,-10,-18,-21, -8,-12,-13,-10, -4,  7,-12, -2, -6,-10,-12,-10,-16,-10, -5,-12, -9, -9,-23, // L
    -10, -2, -4, -8,-20, -6, -7,-11,-10, -9,-12,  7, -4,-20, -9, -7, -6,-18,-16,-12, -5, -6, -8,-23, // K
     -8, -7,-15,-18,-20, -6,-14,-15,-17, -3, -2, -4, 12, -7,-14, -8, -6,-20,-18, -4,-16, -8, -9,-23, // M
    -11,-11,-11,-20,-19,-19,-20,-12, -8, -5, -6,-20, -7,  9,-16, -9,-11, -7, -1,-13,-13,-19,-11,-23, // F
     -4, -7, -9,-11,-11, -6, -8, -9, -7,-14,-10, -9,-14,-16,  8, -4, -7,-20,-20, -9,-10, -7, -8,-23, // P
     -3, -6, -2, -7, -6, -8, -7, -4,-10,-10,-12, -7, -8, -9, -4,  7, -2, -7,-10,-10, -4, -8, -6,-23, // S
     -3,-10, -5, -8,-11, -9, -9, -9,-11, -5,-10, -6, -6,-11, -7, -2,  8,-19,-10, -6, -6, -9, -6,-23, // T
    -19, -5,-15,-22,-21,-19,-23,-21,-15,-20,-16,-18,-20, -7,-20, -7,-19, 13, -7,-23,-17,-21,-17,-23, // W
    -10,-19, -7,-17, -7,-18,-11,-20, -6,-10,-10,-16,-18, -1,-20,-10,-10, -7, 10,-10, -9,-12,-12,-23, // Y
     -5,-10,-11,-11, -9,-10,-10, -9,-10, -1, -5,-12, -4,-13, -9,-10, -6,-23,-10,  8,-11,-10, -8,-23, // V
     -6,-12,  7,  7,-18, -6, -1, -6, -4, -9,-12, -5,-16,-13,-10, -4, -6,-17, -9,-11,  7, -3, -8,-23, // B
     -6, -7, -6, -1,-20,  7,  7, -8, -4, -9, -9, -6, -8,-19, -7, -8, -9,-21,-12,-10, -3,  7, -8,-23, // Z
     -6, -9, -6, -9,-14, -8, -8, -9, -9, -8, -9, -8, -9,-11, -8, -6, -6,-17,-12, -8, -8, -8, -8,-23, // X
    -23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,-23,  1, // *
];

/// PAM20 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM20: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      6, -8, -5, -4, -8, -5, -3, -3, -8, -6, -7, -8, -6, -9, -2, -1, -1,-15, -8, -3, -4, -4, -4,-19, // A
     -8,  9, -7,-13, -9, -3,-11,-12, -2, -6,-10, -1, -5, -9, -5, -4, -8, -3,-15, -8, -9, -5, -7,-19, // R
     -5, -7,  8,  1,-13, -5, -3, -4, -1, -6, -8, -2,-11, -9, -7, -1, -3,-12, -5, -9,  6, -4, -4,-19, // N
     -4,-13,  1,  8,-16, -4,  2, -4, -5, -9,-14, -6,-14,-16, -8, -5, -6,-18,-13, -9,  6,  0, -7,-19, // D
     -8, -9,-13,-16, 10,-16,-16,-13, -8, -7,-17,-16,-16,-15, -9, -4, -8,-17, -5, -7,-14,-16,-11,-19, // C
     -5, -3, -5, -4,-16,  9,  0, -8,  0, -8, -6, -4, -5,-15, -4, -6, -7,-15,-14, -8, -4,  7, -6,-19, // Q
     -3,-11, -3,  2,-16,  0,  8, -5, -7, -7,-10, -5,-11,-16, -6, -5, -7,-19, -9, -8,  0,  6, -6,-19, // E
     -3,-12, -4, -4,-13, -8, -5,  7,-12,-13,-11, -9,-12,-10, -7, -3, -7,-17,-16, -7, -4, -6, -7,-19, // G
     -8, -2, -1, -5, -8,  0, -7,-12,  9,-13, -8, -8,-13, -7, -5, -8, -8,-12, -4, -8, -2, -2, -7,-19, // H
     -6, -6, -6, -9, -7, -8, -7,-13,-13,  9, -2, -7, -2, -3,-11, -8, -3,-16, -8,  1, -7, -7, -6,-19, // I
     -7,-10, -8,-14,-17, -6,-10,-11, -8, -2,  7, -9,  0, -4, -8,-10, -8,-13, -8, -3,-10, -7, -7,-19, // L
     -8, -1, -2, -6,-16, -4, -5, -9, -8, -7, -9,  7, -2,-16, -7, -5, -4,-14,-13,-10, -3, -5, -6,-19, // K
     -6, -5,-11,-14,-16, -5,-11,-12,-13, -2,  0, -2, 11, -5,-11, -6, -5,-16,-14, -2,-12, -7, -7,-19, // M
     -9, -9, -9,-16,-15,-15,-16,-10, -7, -3, -4,-16, -5,  9,-13, -7, -9, -5,  1,-10,-11,-15, -9,-19, // F
     -2, -5, -7, -8, -9, -4, -6, -7, -5,-11, -8, -7,-11,-13,  8, -3, -5,-16,-16, -7, -8, -5, -6,-19, // P
     -1, -4, -1, -5, -4, -6, -5, -3, -8, -8,-10, -5, -6, -7, -3,  7,  0, -6, -8, -8, -2, -6, -4,-19, // S
     -1, -8, -3, -6, -8, -7, -7, -7, -8, -3, -8, -4, -5, -9, -5,  0,  7,-15, -8, -4, -4, -7, -5,-19, // T
    -15, -3,-12,-18,-17,-15,-19,-17,-12,-16,-13,-14,-16, -5,-16, -6,-15, 13, -5,-19,-14,-17,-13,-19, // W
     -8,-15, -5,-13, -5,-14, -9,-16, -4, -8, -8,-13,-14,  1,-16, -8, -8, -5, 10, -8, -7,-10, -9,-19, // Y
     -3, -8, -9, -9, -7, -8, -8, -7, -8,  1, -3,-10, -2,-10, -7, -8, -4,-19, -8,  7, -9, -8, -6,-19, // V
     -4, -9,  6,  6,-14, -4,  0, -4, -2, -7,-10, -3,-12,-11, -8, -2, -4,-14, -7, -9,  6, -1, -6,-19, // B
     -4, -5, -4,  0,-16,  7,  6, -6, -2, -7, -7, -5, -7,-15, -5, -6, -7,-17,-10, -8, -1,  6, -6,-19, // Z
     -4, -7, -4, -7,-11, -6, -6, -7, -7, -6, -7, -6, -7, -9, -6, -4, -5,-13, -9, -6, -6, -6, -6,-19, // X
    -19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,-19,  1, // *
];

/// PAM30 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM30: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      6, -7, -4, -3, -7, -4, -2, -2, -7, -5, -6, -7, -5, -8, -1,  0, -1,-13, -7, -2, -3, -3, -3,-17, // A
     -7,  8, -6,-10, -7, -2, -9,-10, -2, -5, -8,  0, -4, -8, -4, -3, -6, -2,-13, -7, -8, -4, -6,-17, // R
     -4, -6,  8,  2,-11, -4, -2, -3,  0, -5, -7, -1, -9, -7, -5,  0, -2,-10, -4, -7,  6, -3, -3,-17, // N
     -3,-10,  2,  8,-14, -3,  2, -3, -4, -7,-12, -4,-11,-14, -7, -3, -5,-16,-11, -8,  6,  1, -5,-17, // D
     -7, -7,-11,-14, 10,-14,-14,-11, -7, -6,-15,-14,-13,-13, -7, -3, -7,-15, -4, -6,-12,-14, -9,-17, // C
     -4, -2, -4, -3,-14,  8,  1, -7,  1, -7, -5, -3, -4,-13, -3, -5, -5,-13,-12, -7, -3,  6, -5,-17, // Q
     -2, -9, -2,  2,-14,  1,  8, -4, -5, -6, -9, -4, -9,-14, -5, -4, -6,-17, -8, -6,  1,  6, -5,-17, // E
     -2,-10, -3, -3,-11, -7, -4,  6,-10,-11, -9, -7,-10, -9, -6, -2, -6,-15,-13, -6, -3, -5, -5,-17, // G
     -7, -2,  0, -4, -7,  1, -5,-10,  9,-11, -6, -6,-10, -5, -4, -6, -7,-10, -3, -7, -1, -1, -5,-17, // H
     -5, -5, -5, -7, -6, -7, -6,-11,-11,  8, -1, -6, -1, -2, -9, -7, -2,-14, -7,  2, -6, -6, -5,-17, // I
     -6, -8, -7,-12,-15, -5, -9, -9, -6, -1,  7, -8,  1, -3, -7, -9, -6,-11, -7, -2, -9, -6, -6,-17, // L
     -7,  0, -1, -4,-14, -3, -4, -7, -6, -6, -8,  7, -1,-13, -6, -4, -3,-12,-12, -8, -2, -4, -5,-17, // K
     -5, -4, -9,-11,-13, -4, -9,-10,-10, -1,  1, -1, 11, -4, -9, -5, -4,-14,-11, -1,-10, -5, -5,-17, // M
     -8, -8, -7,-14,-13,-13,-14, -9, -5, -2, -3,-13, -4,  9,-11, -6, -8, -4,  2, -8, -9,-13, -8,-17, // F
     -1, -4, -5, -7, -7, -3, -5, -6, -4, -9, -7, -6, -9,-11,  8, -2, -4,-14,-13, -6, -6, -4, -5,-17, // P
      0, -3,  0, -3, -3, -5, -4, -2, -6, -7, -9, -4, -5, -6, -2,  6,  0, -5, -7, -6, -1, -5, -3,-17, // S
     -1, -6, -2, -5, -7, -5, -6, -6, -7, -2, -6, -3, -4, -8, -4,  0,  7,-12, -7, -3, -3, -6, -4,-17, // T
    -13, -2,-10,-16,-15,-13,-17,-15,-10,-14,-11,-12,-14, -4,-14, -5,-12, 13, -4,-16,-12,-15,-11,-17, // W
     -7,-13, -4,-11, -4,-12, -8,-13, -3, -7, -7,-12,-11,  2,-13, -7, -7, -4, 10, -7, -6, -9, -8,-17, // Y
     -2, -7, -7, -8, -6, -7, -6, -6, -7,  2, -2, -8, -1, -8, -6, -6, -3,-16, -7,  7, -8, -7, -5,-17, // V
     -3, -8,  6,  6,-12, -3,  1, -3, -1, -6, -9, -2,-10, -9, -6, -1, -3,-12, -6, -8,  6,  0, -4,-17, // B
     -3, -4, -3,  1,-14,  6,  6, -5, -1, -6, -6, -4, -5,-13, -4, -5, -6,-15, -9, -7,  0,  6, -5,-17, // Z
     -3, -6, -3, -5, -9, -5, -5, -5, -5, -5, -6, -5, -5, -8, -5, -3, -4,-11, -8, -5, -4, -5, -5,-17, // X
    -17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,-17,  1, // *
];

/// PAM40 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM40: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      6, -6, -3, -3, -6, -4, -2, -1, -6, -4, -5, -6, -4, -7, -1,  0,  0,-12, -7, -2, -3, -2, -3,-15, // A
     -6,  8, -5, -9, -7, -1, -8, -9, -1, -5, -7,  1, -4, -7, -3, -2, -5, -1,-11, -6, -6, -3, -5,-15, // R
     -3, -5,  7,  2, -9, -3, -1, -2,  1, -4, -7,  0, -7, -7, -5,  0, -1, -9, -4, -6,  6, -2, -3,-15, // N
     -3, -9,  2,  7,-12, -2,  3, -2, -3, -6,-11, -4,-10,-12, -6, -3, -4,-14,-10, -7,  6,  2, -4,-15, // D
     -6, -7, -9,-12,  9,-12,-12,-10, -6, -6,-13,-12,-12,-11, -7, -2, -6,-14, -3, -5,-11,-12, -8,-15, // C
     -4, -1, -3, -2,-12,  8,  2, -6,  1, -6, -4, -2, -3,-11, -2, -4, -5,-12,-10, -6, -2,  6, -4,-15, // Q
     -2, -8, -1,  3,-12,  2,  7, -3, -4, -5, -8, -4, -8,-12, -4, -3, -5,-15, -7, -6,  2,  6, -4,-15, // E
     -1, -9, -2, -2,-10, -6, -3,  6, -9, -9, -8, -6, -9, -8, -5, -1, -5,-13,-12, -5, -2, -4, -5,-15, // G
     -6, -1,  1, -3, -6,  1, -4, -9,  9, -9, -6, -5, -9, -5, -3, -5, -6, -9, -3, -6, -1,  0, -4,-15, // H
     -4, -5, -4, -6, -6, -6, -5, -9, -9,  8, -1, -5,  0, -2, -8, -6, -2,-13, -6,  2, -5, -5, -4,-15, // I
     -5, -7, -7,-11,-13, -4, -8, -8, -6, -1,  7, -7,  1, -2, -6, -8, -6,-10, -6, -2, -8, -6, -5,-15, // L
     -6,  1,  0, -4,-12, -2, -4, -6, -5, -5, -7,  6, -1,-12, -5, -3, -2,-10,-10, -7, -2, -3, -4,-15, // K
     -4, -4, -7,-10,-12, -3, -8, -9, -9,  0,  1, -1, 11, -4, -8, -5, -3,-12,-10, -1, -8, -5, -5,-15, // M
     -7, -7, -7,-12,-11,-11,-12, -8, -5, -2, -2,-12, -4,  9,-10, -6, -7, -3,  2, -7, -8,-12, -7,-15, // F
     -1, -3, -5, -6, -7, -2, -4, -5, -3, -8, -6, -5, -8,-10,  8, -1, -3,-12,-12, -5, -5, -3, -4,-15, // P
      0, -2,  0, -3, -2, -4, -3, -1, -5, -6, -8, -3, -5, -6, -1,  6,  1, -4, -6, -5, -1, -4, -2,-15, // S
      0, -5, -1, -4, -6, -5, -5, -5, -6, -2, -6, -2, -3, -7, -3,  1,  7,-11, -6, -2, -2, -5, -3,-15, // T
    -12, -1, -9,-14,-14,-12,-15,-13, -9,-13,-10,-10,-12, -3,-12, -4,-11, 13, -4,-15,-11,-13,-10,-15, // W
     -7,-11, -4,-10, -3,-10, -7,-12, -3, -6, -6,-10,-10,  2,-12, -6, -6, -4, 10, -6, -5, -8, -7,-15, // Y
     -2, -6, -6, -7, -5, -6, -6, -5, -6,  2, -2, -7, -1, -7, -5, -5, -2,-15, -6,  7, -7, -6, -4,-15, // V
     -3, -6,  6,  6,-11, -2,  2, -2, -1, -5, -8, -2, -8, -8, -5, -1, -2,-11, -5, -7,  6,  1, -4,-15, // B
     -2, -3, -2,  2,-12,  6,  6, -4,  0, -5, -6, -3, -5,-12, -3, -4, -5,-13, -8, -6,  1,  6, -4,-15, // Z
     -3, -5, -3, -4, -8, -4, -4, -5, -4, -4, -5, -4, -5, -7, -4, -2, -3,-10, -7, -4, -4, -4, -4,-15, // X
    -15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,-15,  1, // *
];

/// PAM50 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM50: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -6, -2, -2, -5, -3, -1, -1, -5, -3, -5, -5, -4, -6,  0,  0,  0,-11, -6, -1, -2, -2, -2,-14, // A
     -6,  8, -4, -8, -6, -1, -7, -8,  0, -4, -7,  1, -3, -6, -3, -2, -5, -1,-10, -6, -5, -3, -4,-14, // R
     -2, -4,  7,  2, -8, -2, -1, -2,  1, -4, -6,  0, -6, -6, -4,  1, -1, -8, -3, -6,  5, -1, -2,-14, // N
     -2, -8,  2,  7,-11, -1,  3, -2, -2, -6,-10, -3, -9,-11, -5, -2, -3,-13, -9, -6,  6,  2, -4,-14, // D
     -5, -6, -8,-11,  9,-11,-11, -9, -6, -5,-12,-11,-11,-10, -6, -2, -6,-12, -3, -4, -9,-11, -7,-14, // C
     -3, -1, -2, -1,-11,  8,  2, -5,  2, -6, -4, -2, -3,-10, -2, -4, -4,-11, -9, -5, -2,  6, -3,-14, // Q
     -1, -7, -1,  3,-11,  2,  7, -3, -3, -4, -7, -3, -7,-11, -4, -3, -4,-14, -7, -5,  2,  6, -3,-14, // E
     -1, -8, -2, -2, -9, -5, -3,  6, -8, -8, -8, -6, -8, -7, -4, -1, -4,-12,-11, -4, -2, -4, -4,-14, // G
     -5,  0,  1, -2, -6,  2, -3, -8,  9, -8, -5, -4, -8, -4, -3, -4, -5, -8, -2, -5,  0,  0, -4,-14, // H
     -3, -4, -4, -6, -5, -6, -4, -8, -8,  8,  0, -4,  0, -1, -7, -5, -1,-11, -5,  3, -5, -5, -3,-14, // I
     -5, -7, -6,-10,-12, -4, -7, -8, -5,  0,  6, -6,  2, -1, -5, -7, -5, -9, -5, -1, -7, -5, -4,-14, // L
     -5,  1,  0, -3,-11, -2, -3, -6, -4, -4, -6,  6,  0,-11, -5, -3, -2, -9, -9, -7, -1, -2, -4,-14, // K
     -4, -3, -6, -9,-11, -3, -7, -8, -8,  0,  2,  0, 10, -3, -7, -4, -2,-11, -9,  0, -7, -4, -4,-14, // M
     -6, -6, -6,-11,-10,-10,-11, -7, -4, -1, -1,-11, -3,  9, -9, -5, -6, -3,  3, -6, -8,-10, -6,-14, // F
      0, -3, -4, -5, -6, -2, -4, -4, -3, -7, -5, -5, -7, -9,  8, -1, -3,-11,-11, -5, -5, -3, -4,-14, // P
      0, -2,  1, -2, -2, -4, -3, -1, -4, -5, -7, -3, -4, -5, -1,  6,  1, -4, -6, -5, -1, -3, -2,-14, // S
      0, -5, -1, -3, -6, -4, -4, -4, -5, -1, -5, -2, -2, -6, -3,  1,  6,-10, -5, -2, -2, -4, -2,-14, // T
    -11, -1, -8,-13,-12,-11,-14,-12, -8,-11, -9, -9,-11, -3,-11, -4,-10, 13, -3,-13,-10,-12, -9,-14, // W
     -6,-10, -3, -9, -3, -9, -7,-11, -2, -5, -5, -9, -9,  3,-11, -6, -5, -3,  9, -6, -5, -7, -6,-14, // Y
     -1, -6, -6, -6, -4, -5, -5, -4, -5,  3, -1, -7,  0, -6, -5, -5, -2,-13, -6,  7, -6, -5, -3,-14, // V
     -2, -5,  5,  6, -9, -2,  2, -2,  0, -5, -7, -1, -7, -8, -5, -1, -2,-10, -5, -6,  5,  1, -3,-14, // B
     -2, -3, -1,  2,-11,  6,  6, -4,  0, -5, -5, -2, -4,-10, -3, -3, -4,-12, -7, -5,  1,  6, -3,-14, // Z
     -2, -4, -2, -4, -7, -3, -3, -4, -4, -3, -4, -4, -4, -6, -4, -2, -2, -9, -6, -3, -3, -3, -4,-14, // X
    -14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,-14,  1, // *
];

/// PAM60 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM60: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -5, -2, -2, -5, -3, -1,  0, -5, -3, -4, -5, -3, -6,  0,  1,  1,-10, -6, -1, -2, -2, -2,-12, // A
     -5,  8, -3, -7, -6,  0, -6, -7,  0, -4, -6,  2, -3, -6, -2, -2, -4,  0, -9, -5, -5, -2, -4,-12, // R
     -2, -3,  6,  2, -7, -2,  0, -1,  1, -4, -5,  0, -6, -5, -3,  1, -1, -7, -3, -5,  5, -1, -2,-12, // N
     -2, -7,  2,  7,-10, -1,  3, -2, -2, -5, -9, -3, -8,-10, -5, -2, -3,-12, -8, -6,  5,  2, -3,-12, // D
     -5, -6, -7,-10,  9,-10,-10, -8, -5, -5,-11,-10,-10, -9, -5, -2, -5,-11, -2, -4, -9,-10, -6,-12, // C
     -3,  0, -2, -1,-10,  7,  2, -5,  2, -5, -3, -1, -2, -9, -1, -3, -4,-10, -8, -5, -1,  6, -3,-12, // Q
     -1, -6,  0,  3,-10,  2,  7, -2, -3, -4, -6, -3, -6,-10, -3, -2, -3,-12, -6, -5,  2,  5, -3,-12, // E
      0, -7, -1, -2, -8, -5, -2,  6, -7, -7, -7, -5, -7, -7, -4,  0, -3,-11,-10, -4, -2, -3, -3,-12, // G
     -5,  0,  1, -2, -5,  2, -3, -7,  8, -7, -5, -4, -7, -4, -2, -4, -5, -7, -2, -5,  0,  0, -3,-12, // H
     -3, -4, -4, -5, -5, -5, -4, -7, -7,  7,  0, -4,  1, -1, -6, -4, -1,-10, -4,  3, -4, -4, -3,-12, // I
     -4, -6, -5, -9,-11, -3, -6, -7, -5,  0,  6, -6,  2, -1, -5, -6, -4, -8, -5, -1, -7, -5, -4,-12, // L
     -5,  2,  0, -3,-10, -1, -3, -5, -4, -4, -6,  6,  0,-10, -4, -2, -2, -8, -9, -6, -1, -2, -3,-12, // K
     -3, -3, -6, -8,-10, -2, -6, -7, -7,  1,  2,  0, 10, -3, -6, -4, -2,-10, -8,  0, -6, -4, -3,-12, // M
     -6, -6, -5,-10, -9, -9,-10, -7, -4, -1, -1,-10, -3,  8, -8, -5, -6, -2,  3, -5, -7, -9, -5,-12, // F
      0, -2, -3, -5, -5, -1, -3, -4, -2, -6, -5, -4, -6, -8,  7,  0, -2,-10,-10, -4, -4, -2, -3,-12, // P
      1, -2,  1, -2, -2, -3, -2,  0, -4, -4, -6, -2, -4, -5,  0,  5,  1, -3, -5, -4,  0, -3, -2,-12, // S
      1, -4, -1, -3, -5, -4, -3, -3, -5, -1, -4, -2, -2, -6, -2,  1,  6, -9, -5, -1, -2, -4, -2,-12, // T
    -10,  0, -7,-12,-11,-10,-12,-11, -7,-10, -8, -8,-10, -2,-10, -3, -9, 13, -2,-12, -9,-11, -8,-12, // W
     -6, -9, -3, -8, -2, -8, -6,-10, -2, -4, -5, -9, -8,  3,-10, -5, -5, -2,  9, -5, -5, -7, -5,-12, // Y
     -1, -5, -5, -6, -4, -5, -5, -4, -5,  3, -1, -6,  0, -5, -4, -4, -1,-12, -5,  6, -5, -5, -3,-12, // V
     -2, -5,  5,  5, -9, -1,  2, -2,  0, -4, -7, -1, -6, -7, -4,  0, -2, -9, -5, -5,  5,  1, -3,-12, // B
     -2, -2, -1,  2,-10,  6,  5, -3,  0, -4, -5, -2, -4, -9, -2, -3, -4,-11, -7, -5,  1,  5, -3,-12, // Z
     -2, -4, -2, -3, -6, -3, -3, -3, -3, -3, -4, -3, -3, -5, -3, -2, -2, -8, -5, -3, -3, -3, -3,-12, // X
    -12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,  1, // *
];

/// PAM70 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM70: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      5, -4, -1, -1, -4, -2, -1,  0, -4, -2, -4, -4, -3, -5,  0,  1,  1, -9, -5, -1, -1, -1, -1,-12, // A
     -4,  8, -3, -6, -5,  0, -5, -7,  0, -3, -6,  2, -2, -6, -2, -1, -4,  0, -8, -5, -4, -2, -3,-12, // R
     -1, -3,  6,  3, -7, -1,  0, -1,  1, -3, -5,  0, -5, -5, -3,  1,  0, -7, -3, -5,  5, -1, -2,-12, // N
     -1, -6,  3,  6, -9,  0,  3, -1, -2, -5, -8, -2, -7, -9, -4, -1, -2,-11, -7, -5,  5,  2, -3,-12, // D
     -4, -5, -7, -9,  9, -9, -9, -7, -5, -4,-10, -9, -9, -8, -5, -1, -4,-11, -2, -4, -8, -9, -6,-12, // C
     -2,  0, -1,  0, -9,  7,  2, -4,  2, -5, -3, -1, -2, -8, -1, -3, -3, -9, -8, -4, -1,  5, -2,-12, // Q
     -1, -5,  0,  3, -9,  2,  6, -2, -2, -4, -6, -2, -5, -9, -3, -2, -3,-12, -6, -4,  2,  5, -3,-12, // E
      0, -7, -1, -1, -7, -4, -2,  6, -6, -6, -7, -5, -7, -6, -3,  0, -3,-10, -9, -3, -1, -3, -3,-12, // G
     -4,  0,  1, -2, -5,  2, -2, -6,  8, -6, -4, -3, -6, -3, -2, -3, -4, -7, -1, -5,  0,  1, -3,-12, // H
     -2, -3, -3, -5, -4, -5, -4, -6, -6,  7,  0, -4,  1,  0, -6, -4, -1,-10, -4,  3, -4, -4, -3,-12, // I
     -4, -6, -5, -8,-10, -3, -6, -7, -4,  0,  6, -5,  2, -1, -4, -6, -4, -7, -4,  0, -6, -4, -4,-12, // L
     -4,  2,  0, -2, -9, -1, -2, -5, -3, -4, -5,  6,  0, -9, -4, -2, -1, -7, -8, -5, -1, -2, -3,-12, // K
     -3, -2, -5, -7, -9, -2, -5, -7, -6,  1,  2,  0, 10, -2, -5, -3, -2, -9, -7,  0, -6, -3, -3,-12, // M
     -5, -6, -5, -9, -8, -8, -9, -6, -3,  0, -1, -9, -2,  8, -7, -4, -5, -2,  4, -5, -7, -9, -5,-12, // F
      0, -2, -3, -4, -5, -1, -3, -3, -2, -6, -4, -4, -5, -7,  7,  0, -2, -9, -9, -4, -3, -2, -3,-12, // P
      1, -1,  1, -1, -1, -3, -2,  0, -3, -4, -6, -2, -3, -4,  0,  5,  2, -3, -5, -3,  0, -2, -1,-12, // S
      1, -4,  0, -2, -4, -3, -3, -3, -4, -1, -4, -1, -2, -5, -2,  2,  6, -8, -5, -1, -1, -3, -2,-12, // T
     -9,  0, -7,-11,-11, -9,-12,-10, -7,-10, -7, -7, -9, -2, -9, -3, -8, 13, -2,-11, -8,-10, -8,-12, // W
     -5, -8, -3, -7, -2, -8, -6, -9, -1, -4, -4, -8, -7,  4, -9, -5, -5, -2,  9, -5, -4, -6, -5,-12, // Y
     -1, -5, -5, -5, -4, -4, -4, -3, -5,  3,  0, -5,  0, -5, -4, -3, -1,-11, -5,  6, -5, -4, -2,-12, // V
     -1, -4,  5,  5, -8, -1,  2, -1,  0, -4, -6, -1, -6, -7, -3,  0, -1, -8, -4, -5,  5,  1, -2,-12, // B
     -1, -2, -1,  2, -9,  5,  5, -3,  1, -4, -4, -2, -3, -9, -2, -2, -3,-10, -6, -4,  1,  5, -2,-12, // Z
     -1, -3, -2, -3, -6, -2, -3, -3, -3, -3, -4, -3, -3, -5, -3, -1, -2, -8, -5, -2, -2, -2, -3,-12, // X
    -12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,-12,  1, // *
];

/// PAM80 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM80: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      4, -4, -1, -1, -4, -2, -1,  0, -4, -2, -4, -4, -3, -5,  0,  1,  1, -8, -5,  0, -1, -1, -1,-11, // A
     -4,  7, -2, -5, -5,  0, -4, -6,  0, -3, -5,  2, -2, -5, -2, -1, -3,  0, -8, -4, -4, -2, -3,-11, // R
     -1, -2,  5,  3, -6, -1,  0, -1,  2, -3, -5,  0, -4, -5, -3,  1,  0, -6, -2, -4,  4,  0, -1,-11, // N
     -1, -5,  3,  6, -9,  0,  4, -1, -1, -4, -7, -2, -6, -8, -4, -1, -2,-10, -7, -5,  5,  2, -2,-11, // D
     -4, -5, -6, -9,  9, -9, -9, -7, -5, -4, -9, -9, -8, -8, -4, -1, -4,-10, -2, -3, -7, -9, -5,-11, // C
     -2,  0, -1,  0, -9,  7,  2, -4,  2, -4, -3, -1, -2, -8, -1, -3, -3, -8, -7, -4,  0,  5, -2,-11, // Q
     -1, -4,  0,  4, -9,  2,  6, -2, -2, -3, -5, -2, -5, -8, -2, -2, -3,-11, -5, -4,  2,  5, -2,-11, // E
      0, -6, -1, -1, -7, -4, -2,  6, -6, -6, -6, -4, -6, -6, -3,  0, -2,-10, -8, -3, -1, -2, -3,-11, // G
     -4,  0,  2, -1, -5,  2, -2, -6,  8, -6, -4, -3, -6, -3, -2, -3, -4, -6, -1, -4,  0,  1, -3,-11, // H
     -2, -3, -3, -4, -4, -4, -3, -6, -6,  7,  1, -3,  1,  0, -5, -3, -1, -9, -4,  3, -4, -4, -2,-11, // I
     -4, -5, -5, -7, -9, -3, -5, -6, -4,  1,  6, -5,  2,  0, -4, -5, -4, -7, -4,  0, -6, -4, -3,-11, // L
     -4,  2,  0, -2, -9, -1, -2, -4, -3, -3, -5,  6,  0, -8, -3, -2, -1, -7, -7, -5, -1, -1, -3,-11, // K
     -3, -2, -4, -6, -8, -2, -5, -6, -6,  1,  2,  0,  9, -2, -5, -3, -2, -9, -6,  1, -5, -3, -3,-11, // M
     -5, -5, -5, -8, -8, -8, -8, -6, -3,  0,  0, -8, -2,  8, -7, -4, -5, -2,  4, -4, -6, -8, -4,-11, // F
      0, -2, -3, -4, -4, -1, -2, -3, -2, -5, -4, -3, -5, -7,  7,  0, -1, -9, -8, -3, -3, -2, -2,-11, // P
      1, -1,  1, -1, -1, -3, -2,  0, -3, -3, -5, -2, -3, -4,  0,  4,  2, -3, -4, -3,  0, -2, -1,-11, // S
      1, -3,  0, -2, -4, -3, -3, -2, -4, -1, -4, -1, -2, -5, -1,  2,  5, -8, -4, -1, -1, -3, -1,-11, // T
     -8,  0, -6,-10,-10, -8,-11,-10, -6, -9, -7, -7, -9, -2, -9, -3, -8, 13, -2,-11, -8, -9, -7,-11, // W
     -5, -8, -2, -7, -2, -7, -5, -8, -1, -4, -4, -7, -6,  4, -8, -4, -4, -2,  9, -4, -4, -6, -5,-11, // Y
      0, -4, -4, -5, -3, -4, -4, -3, -4,  3,  0, -5,  1, -4, -3, -3, -1,-11, -4,  6, -4, -4, -2,-11, // V
     -1, -4,  4,  5, -7,  0,  2, -1,  0, -4, -6, -1, -5, -6, -3,  0, -1, -8, -4, -4,  5,  1, -2,-11, // B
     -1, -2,  0,  2, -9,  5,  5, -2,  1, -4, -4, -1, -3, -8, -2, -2, -3, -9, -6, -4,  1,  5, -2,-11, // Z
     -1, -3, -1, -2, -5, -2, -2, -3, -3, -2, -3, -3, -3, -4, -2, -1, -1, -7, -5, -2, -2, -2, -2,-11, // X
    -11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,  1, // *
];

/// PAM90 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM90: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      4, -4, -1, -1, -4, -2,  0,  0, -4, -2, -3, -3, -2, -5,  0,  1,  1, -8, -5,  0, -1, -1, -1,-10, // A
     -4,  7, -2, -5, -5,  0, -4, -6,  1, -3, -5,  2, -2, -5, -1, -1, -3,  0, -7, -4, -3, -1, -2,-10, // R
     -1, -2,  5,  3, -6, -1,  0, -1,  2, -3, -4,  1, -4, -4, -2,  1,  0, -6, -2, -4,  4,  0, -1,-10, // N
     -1, -5,  3,  6, -8,  0,  4, -1, -1, -4, -7, -2, -6, -8, -3, -1, -2,-10, -6, -4,  5,  3, -2,-10, // D
     -4, -5, -6, -8,  9, -8, -8, -6, -4, -4, -9, -8, -8, -7, -4, -1, -4, -9, -1, -3, -7, -8, -5,-10, // C
     -2,  0, -1,  0, -8,  6,  2, -3,  2, -4, -3,  0, -2, -7, -1, -2, -3, -8, -6, -4,  0,  5, -2,-10, // Q
      0, -4,  0,  4, -8,  2,  6, -1, -2, -3, -5, -2, -4, -8, -2, -1, -2,-10, -5, -3,  2,  5, -2,-10, // E
      0, -6, -1, -1, -6, -3, -1,  5, -5, -5, -6, -4, -6, -6, -3,  0, -2, -9, -8, -3, -1, -2, -2,-10, // G
     -4,  1,  2, -1, -4,  2, -2, -5,  8, -5, -4, -2, -5, -3, -2, -3, -3, -6, -1, -4,  1,  1, -2,-10, // H
     -2, -3, -3, -4, -4, -4, -3, -5, -5,  6,  1, -3,  1,  0, -5, -3,  0, -8, -3,  3, -3, -3, -2,-10, // I
     -3, -5, -4, -7, -9, -3, -5, -6, -4,  1,  6, -5,  3,  0, -4, -5, -3, -7, -3,  0, -5, -4, -3,-10, // L
     -3,  2,  1, -2, -8,  0, -2, -4, -2, -3, -5,  6,  0, -8, -3, -1, -1, -6, -7, -4,  0, -1, -2,-10, // K
     -2, -2, -4, -6, -8, -2, -4, -6, -5,  1,  3,  0,  9, -2, -4, -3, -1, -8, -6,  1, -5, -3, -2,-10, // M
     -5, -5, -4, -8, -7, -7, -8, -6, -3,  0,  0, -8, -2,  8, -6, -4, -4, -1,  4, -4, -6, -7, -4,-10, // F
      0, -1, -2, -3, -4, -1, -2, -3, -2, -5, -4, -3, -4, -6,  7,  0, -1, -8, -8, -3, -3, -1, -2,-10, // P
      1, -1,  1, -1, -1, -2, -1,  0, -3, -3, -5, -1, -3, -4,  0,  4,  2, -3, -4, -3,  0, -2, -1,-10, // S
      1, -3,  0, -2, -4, -3, -2, -2, -3,  0, -3, -1, -1, -4, -1,  2,  5, -7, -4, -1, -1, -2, -1,-10, // T
     -8,  0, -6,-10, -9, -8,-10, -9, -6, -8, -7, -6, -8, -1, -8, -3, -7, 13, -2,-10, -7, -9, -7,-10, // W
     -5, -7, -2, -6, -1, -6, -5, -8, -1, -3, -3, -7, -6,  4, -8, -4, -4, -2,  9, -4, -4, -6, -4,-10, // Y
      0, -4, -4, -4, -3, -4, -3, -3, -4,  3,  0, -4,  1, -4, -3, -3, -1,-10, -4,  6, -4, -4, -2,-10, // V
     -1, -3,  4,  5, -7,  0,  2, -1,  1, -3, -5,  0, -5, -6, -3,  0, -1, -7, -4, -4,  4,  2, -2,-10, // B
     -1, -1,  0,  3, -8,  5,  5, -2,  1, -3, -4, -1, -3, -7, -1, -2, -2, -9, -6, -4,  2,  5, -2,-10, // Z
     -1, -2, -1, -2, -5, -2, -2, -2, -2, -2, -3, -2, -2, -4, -2, -1, -1, -7, -4, -2, -2, -2, -2,-10, // X
    -10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,-10,  1, // *
];

/// PAM100 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM100: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      4, -3, -1, -1, -3, -2,  0,  1, -3, -2, -3, -3, -2, -4,  1,  1,  1, -7, -4,  0, -1, -1, -1, -9, // A
     -3,  7, -2, -4, -4,  0, -4, -5,  1, -3, -4,  2, -1, -5, -1, -1, -2,  0, -7, -4, -3, -1, -2, -9, // R
     -1, -2,  5,  3, -5, -1,  1, -1,  2, -3, -4,  1, -4, -4, -2,  1,  0, -6, -2, -3,  4,  0, -1, -9, // N
     -1, -4,  3,  5, -7,  0,  4, -1, -1, -4, -6, -1, -5, -7, -3, -1, -1, -9, -6, -4,  4,  3, -2, -9, // D
     -3, -4, -5, -7,  9, -8, -8, -6, -4, -3, -8, -7, -7, -7, -4, -1, -3, -9, -1, -3, -6, -8, -5, -9, // C
     -2,  0, -1,  0, -8,  6,  2, -3,  2, -4, -2,  0, -1, -7,  0, -2, -2, -7, -6, -3,  0,  5, -2, -9, // Q
      0, -4,  1,  4, -8,  2,  5, -1, -1, -3, -5, -1, -4, -7, -2, -1, -2, -9, -5, -3,  3,  4, -2, -9, // E
      1, -5, -1, -1, -6, -3, -1,  5, -5, -5, -5, -4, -5, -5, -2,  0, -2, -9, -7, -3, -1, -2, -2, -9, // G
     -3,  1,  2, -1, -4,  2, -1, -5,  7, -5, -3, -2, -5, -3, -1, -2, -3, -5, -1, -4,  1,  1, -2, -9, // H
     -2, -3, -3, -4, -3, -4, -3, -5, -5,  6,  1, -3,  1,  0, -4, -3,  0, -8, -3,  3, -3, -3, -2, -9, // I
     -3, -4, -4, -6, -8, -2, -5, -5, -3,  1,  6, -4,  3,  0, -3, -5, -3, -6, -3,  0, -5, -3, -3, -9, // L
     -3,  2,  1, -1, -7,  0, -1, -4, -2, -3, -4,  5,  0, -7, -3, -1, -1, -6, -7, -4,  0, -1, -2, -9, // K
     -2, -1, -4, -5, -7, -1, -4, -5, -5,  1,  3,  0,  9, -1, -4, -3, -1, -7, -5,  1, -4, -3, -2, -9, // M
     -4, -5, -4, -7, -7, -7, -7, -5, -3,  0,  0, -7, -1,  8, -6, -4, -4, -1,  4, -3, -5, -7, -4, -9, // F
      1, -1, -2, -3, -4,  0, -2, -2, -1, -4, -3, -3, -4, -6,  7,  0, -1, -8, -7, -3, -2, -1, -2, -9, // P
      1, -1,  1, -1, -1, -2, -1,  0, -2, -3, -5, -1, -3, -4,  0,  4,  2, -2, -4, -2,  0, -2, -1, -9, // S
      1, -2,  0, -1, -3, -2, -2, -2, -3,  0, -3, -1, -1, -4, -1,  2,  5, -7, -4,  0, -1, -2, -1, -9, // T
     -7,  0, -6, -9, -9, -7, -9, -9, -5, -8, -6, -6, -7, -1, -8, -2, -7, 12, -1, -9, -7, -8, -6, -9, // W
     -4, -7, -2, -6, -1, -6, -5, -7, -1, -3, -3, -7, -5,  4, -7, -4, -4, -1,  9, -4, -3, -5, -4, -9, // Y
      0, -4, -3, -4, -3, -3, -3, -3, -4,  3,  0, -4,  1, -3, -3, -2,  0, -9, -4,  5, -4, -3, -2, -9, // V
     -1, -3,  4,  4, -6,  0,  3, -1,  1, -3, -5,  0, -4, -5, -2,  0, -1, -7, -3, -4,  4,  2, -1, -9, // B
     -1, -1,  0,  3, -8,  5,  4, -2,  1, -3, -3, -1, -3, -7, -1, -2, -2, -8, -5, -3,  2,  5, -2, -9, // Z
     -1, -2, -1, -2, -5, -2, -2, -2, -2, -2, -3, -2, -2, -4, -2, -1, -1, -6, -4, -2, -1, -2, -2, -9, // X
     -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,  1, // *
];

/// PAM110 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM110: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      3, -3, -1, -1, -3, -1,  0,  1, -3, -1, -3, -3, -2, -4,  1,  1,  1, -7, -4,  0, -1, -1, -1, -9, // A
     -3,  7, -2, -4, -4,  1, -3, -5,  1, -3, -4,  2, -1, -4, -1, -1, -2,  1, -6, -4, -3, -1, -2, -9, // R
     -1, -2,  4,  2, -5,  0,  1,  0,  2, -2, -4,  1, -3, -4, -2,  1,  0, -5, -2, -3,  3,  0, -1, -9, // N
     -1, -4,  2,  5, -7,  1,  3,  0, -1, -3, -6, -1, -5, -7, -2, -1, -1, -9, -5, -4,  4,  3, -2, -9, // D
     -3, -4, -5, -7,  9, -7, -7, -5, -4, -3, -8, -7, -7, -6, -4, -1, -3, -9, -1, -3, -6, -7, -4, -9, // C
     -1,  1,  0,  1, -7,  6,  2, -3,  3, -3, -2,  0, -1, -6,  0, -2, -2, -7, -6, -3,  0,  4, -1, -9, // Q
      0, -3,  1,  3, -7,  2,  5, -1, -1, -3, -4, -1, -4, -7, -2, -1, -2, -9, -5, -3,  3,  4, -2, -9, // E
      1, -5,  0,  0, -5, -3, -1,  5, -4, -4, -5, -3, -5, -5, -2,  0, -1, -8, -7, -2,  0, -2, -2, -9, // G
     -3,  1,  2, -1, -4,  3, -1, -4,  7, -4, -3, -2, -4, -2, -1, -2, -3, -5, -1, -4,  1,  1, -2, -9, // H
     -1, -3, -2, -3, -3, -3, -3, -4, -4,  6,  1, -3,  1,  0, -4, -3,  0, -7, -3,  3, -3, -3, -2, -9, // I
     -3, -4, -4, -6, -8, -2, -4, -5, -3,  1,  6, -4,  3,  0, -3, -4, -3, -6, -3,  1, -5, -3, -2, -9, // L
     -3,  2,  1, -1, -7,  0, -1, -3, -2, -3, -4,  5,  0, -7, -2, -1, -1, -5, -6, -4,  0, -1, -2, -9, // K
     -2, -1, -3, -5, -7, -1, -4, -5, -4,  1,  3,  0,  8, -1, -4, -2, -1, -7, -5,  1, -4, -2, -2, -9, // M
     -4, -4, -4, -7, -6, -6, -7, -5, -2,  0,  0, -7, -1,  8, -6, -3, -4, -1,  4, -3, -5, -6, -3, -9, // F
      1, -1, -2, -2, -4,  0, -2, -2, -1, -4, -3, -2, -4, -6,  6,  0, -1, -7, -7, -2, -2, -1, -2, -9, // P
      1, -1,  1, -1, -1, -2, -1,  0, -2, -3, -4, -1, -2, -3,  0,  3,  2, -2, -4, -2,  0, -1, -1, -9, // S
      1, -2,  0, -1, -3, -2, -2, -1, -3,  0, -3, -1, -1, -4, -1,  2,  5, -6, -4,  0, -1, -2, -1, -9, // T
     -7,  1, -5, -9, -9, -7, -9, -8, -5, -7, -6, -5, -7, -1, -7, -2, -6, 12, -1, -9, -7, -8, -6, -9, // W
     -4, -6, -2, -5, -1, -6, -5, -7, -1, -3, -3, -6, -5,  4, -7, -4, -4, -1,  8, -4, -3, -5, -4, -9, // Y
      0, -4, -3, -4, -3, -3, -3, -2, -4,  3,  1, -4,  1, -3, -2, -2,  0, -9, -4,  5, -3, -3, -2, -9, // V
     -1, -3,  3,  4, -6,  0,  3,  0,  1, -3, -5,  0, -4, -5, -2,  0, -1, -7, -3, -3,  4,  2, -1, -9, // B
     -1, -1,  0,  3, -7,  4,  4, -2,  1, -3, -3, -1, -2, -6, -1, -1, -2, -8, -5, -3,  2,  4, -2, -9, // Z
     -1, -2, -1, -2, -4, -1, -2, -2, -2, -2, -2, -2, -2, -3, -2, -1, -1, -6, -4, -2, -1, -2, -2, -9, // X
     -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,  1, // *
];

/// PAM120 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM120: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      3, -3,  0,  0, -3, -1,  0,  1, -3, -1, -3, -2, -2, -4,  1,  1,  1, -7, -4,  0,  0, -1, -1, -8, // A
     -3,  6, -1, -3, -4,  1, -3, -4,  1, -2, -4,  2, -1, -4, -1, -1, -2,  1, -6, -3, -2, -1, -2, -8, // R
      0, -1,  4,  2, -5,  0,  1,  0,  2, -2, -4,  1, -3, -4, -2,  1,  0, -5, -2, -3,  3,  0, -1, -8, // N
      0, -3,  2,  5, -7,  1,  3,  0,  0, -3, -5, -1, -4, -6, -2,  0, -1, -8, -5, -3,  4,  3, -2, -8, // D
     -3, -4, -5, -7,  9, -7, -7, -5, -4, -3, -7, -7, -6, -6, -3, -1, -3, -8, -1, -2, -6, -7, -4, -8, // C
     -1,  1,  0,  1, -7,  6,  2, -3,  3, -3, -2,  0, -1, -6,  0, -2, -2, -6, -5, -3,  0,  4, -1, -8, // Q
      0, -3,  1,  3, -7,  2,  5, -1, -1, -3, -4, -1, -3, -6, -1, -1, -2, -8, -4, -3,  2,  4, -1, -8, // E
      1, -4,  0,  0, -5, -3, -1,  5, -4, -4, -5, -3, -4, -5, -2,  1, -1, -8, -6, -2,  0, -1, -2, -8, // G
     -3,  1,  2,  0, -4,  3, -1, -4,  7, -4, -3, -2, -4, -2, -1, -2, -3, -5, -1, -3,  1,  1, -2, -8, // H
     -1, -2, -2, -3, -3, -3, -3, -4, -4,  6,  1, -2,  1,  0, -3, -2,  0, -7, -2,  3, -3, -3, -1, -8, // I
     -3, -4, -4, -5, -7, -2, -4, -5, -3,  1,  5, -4,  3,  0, -3, -4, -3, -5, -3,  1, -4, -3, -2, -8, // L
     -2,  2,  1, -1, -7,  0, -1, -3, -2, -2, -4,  5,  1, -6, -2, -1, -1, -5, -6, -4,  0, -1, -2, -8, // K
     -2, -1, -3, -4, -6, -1, -3, -4, -4,  1,  3,  1,  8, -1, -3, -2, -1, -7, -4,  1, -4, -2, -2, -8, // M
     -4, -4, -4, -6, -6, -6, -6, -5, -2,  0,  0, -6, -1,  8, -5, -3, -4, -1,  4, -3, -5, -6, -3, -8, // F
      1, -1, -2, -2, -3,  0, -1, -2, -1, -3, -3, -2, -3, -5,  6,  1, -1, -7, -6, -2, -2, -1, -1, -8, // P
      1, -1,  1,  0, -1, -2, -1,  1, -2, -2, -4, -1, -2, -3,  1,  3,  2, -2, -3, -2,  0, -1, -1, -8, // S
      1, -2,  0, -1, -3, -2, -2, -1, -3,  0, -3, -1, -1, -4, -1,  2,  4, -6, -3,  0,  0, -2, -1, -8, // T
     -7,  1, -5, -8, -8, -6, -8, -8, -5, -7, -5, -5, -7, -1, -7, -2, -6, 12, -1, -8, -6, -7, -5, -8, // W
     -4, -6, -2, -5, -1, -5, -4, -6, -1, -2, -3, -6, -4,  4, -6, -3, -3, -1,  8, -3, -3, -5, -3, -8, // Y
      0, -3, -3, -3, -2, -3, -3, -2, -3,  3,  1, -4,  1, -3, -2, -2,  0, -8, -3,  5, -3, -3, -1, -8, // V
      0, -2,  3,  4, -6,  0,  2,  0,  1, -3, -4,  0, -4, -5, -2,  0,  0, -6, -3, -3,  4,  2, -1, -8, // B
     -1, -1,  0,  3, -7,  4,  4, -1,  1, -3, -3, -1, -2, -6, -1, -1, -2, -7, -5, -3,  2,  4, -1, -8, // Z
     -1, -2, -1, -2, -4, -1, -1, -2, -2, -1, -2, -2, -2, -3, -1, -1, -1, -5, -3, -1, -1, -1, -2, -8, // X
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM130 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM130: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      3, -3,  0,  0, -3, -1,  0,  1, -2, -1, -3, -2, -2, -4,  1,  1,  1, -6, -4,  0,  0,  0, -1, -8, // A
     -3,  6, -1, -3, -4,  1, -3, -4,  1, -2, -4,  3, -1, -4, -1, -1, -2,  1, -6, -3, -2, -1, -2, -8, // R
      0, -1,  4,  2, -4,  0,  1,  0,  2, -2, -4,  1, -3, -3, -1,  1,  0, -5, -2, -3,  3,  0, -1, -8, // N
      0, -3,  2,  5, -6,  1,  3,  0,  0, -3, -5, -1, -4, -6, -2,  0, -1, -8, -5, -3,  4,  3, -1, -8, // D
     -3, -4, -4, -6,  9, -6, -6, -5, -4, -3, -7, -6, -6, -5, -3, -1, -3, -8, -1, -2, -5, -6, -4, -8, // C
     -1,  1,  0,  1, -6,  5,  2, -2,  3, -3, -2,  0, -1, -5,  0, -1, -2, -6, -5, -3,  0,  4, -1, -8, // Q
      0, -3,  1,  3, -6,  2,  5, -1, -1, -2, -4, -1, -3, -6, -1, -1, -1, -8, -4, -3,  2,  4, -1, -8, // E
      1, -4,  0,  0, -5, -2, -1,  5, -4, -4, -5, -3, -4, -5, -2,  1, -1, -7, -6, -2,  0, -1, -2, -8, // G
     -2,  1,  2,  0, -4,  3, -1, -4,  7, -4, -3, -1, -4, -2, -1, -2, -2, -4,  0, -3,  1,  1, -1, -8, // H
     -1, -2, -2, -3, -3, -3, -2, -4, -4,  5,  1, -2,  2,  0, -3, -2,  0, -7, -2,  3, -3, -3, -1, -8, // I
     -3, -4, -4, -5, -7, -2, -4, -5, -3,  1,  5, -3,  3,  0, -3, -4, -2, -5, -2,  1, -4, -3, -2, -8, // L
     -2,  3,  1, -1, -6,  0, -1, -3, -1, -2, -3,  5,  1, -6, -2, -1,  0, -5, -6, -3,  0,  0, -1, -8, // K
     -2, -1, -3, -4, -6, -1, -3, -4, -4,  2,  3,  1,  8, -1, -3, -2, -1, -6, -4,  1, -3, -2, -1, -8, // M
     -4, -4, -3, -6, -5, -5, -6, -5, -2,  0,  0, -6, -1,  7, -5, -3, -3, -1,  4, -3, -5, -6, -3, -8, // F
      1, -1, -1, -2, -3,  0, -1, -2, -1, -3, -3, -2, -3, -5,  6,  1,  0, -6, -6, -2, -2, -1, -1, -8, // P
      1, -1,  1,  0, -1, -1, -1,  1, -2, -2, -4, -1, -2, -3,  1,  3,  2, -2, -3, -2,  0, -1, -1, -8, // S
      1, -2,  0, -1, -3, -2, -1, -1, -2,  0, -2,  0, -1, -3,  0,  2,  4, -6, -3,  0,  0, -1, -1, -8, // T
     -6,  1, -5, -8, -8, -6, -8, -7, -4, -7, -5, -5, -6, -1, -6, -2, -6, 12, -1, -8, -6, -7, -5, -8, // W
     -4, -6, -2, -5, -1, -5, -4, -6,  0, -2, -2, -6, -4,  4, -6, -3, -3, -1,  8, -3, -3, -5, -3, -8, // Y
      0, -3, -3, -3, -2, -3, -3, -2, -3,  3,  1, -3,  1, -3, -2, -2,  0, -8, -3,  5, -3, -3, -1, -8, // V
      0, -2,  3,  4, -5,  0,  2,  0,  1, -3, -4,  0, -3, -5, -2,  0,  0, -6, -3, -3,  3,  2, -1, -8, // B
      0, -1,  0,  3, -6,  4,  4, -1,  1, -3, -3,  0, -2, -6, -1, -1, -1, -7, -5, -3,  2,  4, -1, -8, // Z
     -1, -2, -1, -1, -4, -1, -1, -2, -1, -1, -2, -1, -1, -3, -1, -1, -1, -5, -3, -1, -1, -1, -1, -8, // X
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM140 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM140: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      3, -2,  0,  0, -3, -1,  0,  1, -2, -1, -2, -2, -2, -3,  1,  1,  1, -6, -3,  0,  0,  0, -1, -8, // A
     -2,  6, -1, -3, -3,  1, -2, -4,  1, -2, -3,  3, -1, -4, -1, -1, -2,  1, -5, -3, -2, -1, -1, -8, // R
      0, -1,  3,  2, -4,  0,  1,  0,  2, -2, -3,  1, -2, -3, -1,  1,  0, -5, -2, -2,  3,  1, -1, -8, // N
      0, -3,  2,  4, -6,  1,  3,  0,  0, -3, -5, -1, -4, -6, -2,  0, -1, -7, -4, -3,  4,  2, -1, -8, // D
     -3, -3, -4, -6,  9, -6, -6, -4, -3, -3, -7, -6, -6, -5, -3,  0, -3, -7, -1, -2, -5, -6, -4, -8, // C
     -1,  1,  0,  1, -6,  5,  2, -2,  3, -3, -2,  0, -1, -5,  0, -1, -2, -6, -5, -3,  1,  4, -1, -8, // Q
      0, -2,  1,  3, -6,  2,  4, -1,  0, -2, -4, -1, -3, -6, -1, -1, -1, -8, -4, -2,  2,  4, -1, -8, // E
      1, -4,  0,  0, -4, -2, -1,  5, -3, -4, -4, -3, -4, -4, -1,  1, -1, -7, -6, -2,  0, -1, -1, -8, // G
     -2,  1,  2,  0, -3,  3,  0, -3,  6, -4, -3, -1, -3, -2, -1, -2, -2, -4,  0, -3,  1,  1, -1, -8, // H
     -1, -2, -2, -3, -3, -3, -2, -4, -4,  5,  1, -2,  2,  0, -3, -2,  0, -6, -2,  3, -2, -2, -1, -8, // I
     -2, -3, -3, -5, -7, -2, -4, -4, -3,  1,  5, -3,  3,  1, -3, -3, -2, -5, -2,  1, -4, -3, -2, -8, // L
     -2,  3,  1, -1, -6,  0, -1, -3, -1, -2, -3,  5,  1, -6, -2, -1,  0, -4, -5, -3,  0,  0, -1, -8, // K
     -2, -1, -2, -4, -6, -1, -3, -4, -3,  2,  3,  1,  7, -1, -3, -2, -1, -6, -4,  1, -3, -2, -1, -8, // M
     -3, -4, -3, -6, -5, -5, -6, -4, -2,  0,  1, -6, -1,  7, -5, -3, -3,  0,  5, -2, -4, -5, -3, -8, // F
      1, -1, -1, -2, -3,  0, -1, -1, -1, -3, -3, -2, -3, -5,  6,  1,  0, -6, -6, -2, -1, -1, -1, -8, // P
      1, -1,  1,  0,  0, -1, -1,  1, -2, -2, -3, -1, -2, -3,  1,  3,  2, -2, -3, -2,  0, -1,  0, -8, // S
      1, -2,  0, -1, -3, -2, -1, -1, -2,  0, -2,  0, -1, -3,  0,  2,  4, -5, -3,  0,  0, -1, -1, -8, // T
     -6,  1, -5, -7, -7, -6, -8, -7, -4, -6, -5, -4, -6,  0, -6, -2, -5, 12, -1, -8, -6, -7, -5, -8, // W
     -3, -5, -2, -4, -1, -5, -4, -6,  0, -2, -2, -5, -4,  5, -6, -3, -3, -1,  8, -3, -3, -4, -3, -8, // Y
      0, -3, -2, -3, -2, -3, -2, -2, -3,  3,  1, -3,  1, -2, -2, -2,  0, -8, -3,  5, -3, -2, -1, -8, // V
      0, -2,  3,  4, -5,  1,  2,  0,  1, -2, -4,  0, -3, -4, -1,  0,  0, -6, -3, -3,  3,  2, -1, -8, // B
      0, -1,  1,  2, -6,  4,  4, -1,  1, -2, -3,  0, -2, -5, -1, -1, -1, -7, -4, -2,  2,  4, -1, -8, // Z
     -1, -1, -1, -1, -4, -1, -1, -1, -1, -1, -2, -1, -1, -3, -1,  0, -1, -5, -3, -1, -1, -1, -1, -8, // X
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM150 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM150: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      3, -2,  0,  0, -2, -1,  0,  1, -2, -1, -2, -2, -1, -3,  1,  1,  1, -6, -3,  0,  0,  0,  0, -7, // A
     -2,  6, -1, -2, -3,  1, -2, -4,  1, -2, -3,  3, -1, -4, -1, -1, -1,  1, -5, -3, -2,  0, -1, -7, // R
      0, -1,  3,  2, -4,  0,  1,  0,  2, -2, -3,  1, -2, -3, -1,  1,  0, -4, -2, -2,  3,  1, -1, -7, // N
      0, -2,  2,  4, -6,  1,  3,  0,  0, -3, -4, -1, -3, -5, -2,  0, -1, -7, -4, -3,  3,  2, -1, -7, // D
     -2, -3, -4, -6,  9, -6, -6, -4, -3, -2, -6, -6, -5, -5, -3,  0, -2, -7,  0, -2, -5, -6, -3, -7, // C
     -1,  1,  0,  1, -6,  5,  2, -2,  2, -2, -2,  0, -1, -5,  0, -1, -1, -5, -4, -2,  1,  4, -1, -7, // Q
      0, -2,  1,  3, -6,  2,  4,  0,  0, -2, -3, -1, -3, -5, -1, -1, -1, -7, -4, -2,  2,  4, -1, -7, // E
      1, -4,  0,  0, -4, -2,  0,  4, -3, -3, -4, -2, -4, -4, -1,  1, -1, -7, -5, -2,  0, -1, -1, -7, // G
     -2,  1,  2,  0, -3,  2,  0, -3,  6, -3, -3, -1, -3, -2, -1, -1, -2, -4,  0, -3,  1,  1, -1, -7, // H
     -1, -2, -2, -3, -2, -2, -2, -3, -3,  5,  1, -2,  2,  0, -3, -2,  0, -6, -2,  3, -2, -2, -1, -7, // I
     -2, -3, -3, -4, -6, -2, -3, -4, -3,  1,  5, -3,  3,  1, -3, -3, -2, -5, -2,  1, -4, -3, -2, -7, // L
     -2,  3,  1, -1, -6,  0, -1, -2, -1, -2, -3,  5,  1, -5, -2, -1,  0, -4, -5, -3,  0,  0, -1, -7, // K
     -1, -1, -2, -3, -5, -1, -3, -4, -3,  2,  3,  1,  7, -1, -3, -2, -1, -6, -4,  1, -3, -2, -1, -7, // M
     -3, -4, -3, -5, -5, -5, -5, -4, -2,  0,  1, -5, -1,  7, -5, -3, -3,  0,  5, -2, -4, -5, -3, -7, // F
      1, -1, -1, -2, -3,  0, -1, -1, -1, -3, -3, -2, -3, -5,  6,  1,  0, -6, -5, -2, -1, -1, -1, -7, // P
      1, -1,  1,  0,  0, -1, -1,  1, -1, -2, -3, -1, -2, -3,  1,  2,  2, -2, -3, -1,  0, -1,  0, -7, // S
      1, -1,  0, -1, -2, -1, -1, -1, -2,  0, -2,  0, -1, -3,  0,  2,  4, -5, -3,  0,  0, -1,  0, -7, // T
     -6,  1, -4, -7, -7, -5, -7, -7, -4, -6, -5, -4, -6,  0, -6, -2, -5, 12,  0, -7, -6, -6, -5, -7, // W
     -3, -5, -2, -4,  0, -4, -4, -5,  0, -2, -2, -5, -4,  5, -5, -3, -3,  0,  8, -3, -3, -4, -3, -7, // Y
      0, -3, -2, -3, -2, -2, -2, -2, -3,  3,  1, -3,  1, -2, -2, -1,  0, -7, -3,  4, -2, -2, -1, -7, // V
      0, -2,  3,  3, -5,  1,  2,  0,  1, -2, -4,  0, -3, -4, -1,  0,  0, -6, -3, -2,  3,  2, -1, -7, // B
      0,  0,  1,  2, -6,  4,  4, -1,  1, -2, -3,  0, -2, -5, -1, -1, -1, -6, -4, -2,  2,  4, -1, -7, // Z
      0, -1, -1, -1, -3, -1, -1, -1, -1, -1, -2, -1, -1, -3, -1,  0,  0, -5, -3, -1, -1, -1, -1, -7, // X
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,  1, // *
];

/// PAM160 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM160: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -2,  0,  0, -2, -1,  0,  1, -2, -1, -2, -2, -1, -3,  1,  1,  1, -5, -3,  0,  0,  0,  0, -7, // A
     -2,  6, -1, -2, -3,  1, -2, -3,  1, -2, -3,  3, -1, -4, -1, -1, -1,  1, -5, -3, -1,  0, -1, -7, // R
      0, -1,  3,  2, -4,  0,  1,  0,  1, -2, -3,  1, -2, -3, -1,  1,  0, -4, -2, -2,  2,  1,  0, -7, // N
      0, -2,  2,  4, -5,  1,  3,  0,  0, -3, -4,  0, -3, -5, -1,  0, -1, -7, -4, -2,  3,  2, -1, -7, // D
     -2, -3, -4, -5,  9, -5, -5, -4, -3, -2, -6, -5, -5, -4, -3,  0, -2, -7,  0, -2, -4, -5, -3, -7, // C
     -1,  1,  0,  1, -5,  4,  2, -2,  2, -2, -2,  0, -1, -4,  0, -1, -1, -5, -4, -2,  1,  3, -1, -7, // Q
      0, -2,  1,  3, -5,  2,  4,  0,  0, -2, -3, -1, -3, -5, -1,  0, -1, -7, -4, -2,  2,  3, -1, -7, // E
      1, -3,  0,  0, -4, -2,  0,  4, -3, -3, -4, -2, -3, -4, -1,  1, -1, -6, -5, -2,  0, -1, -1, -7, // G
     -2,  1,  1,  0, -3,  2,  0, -3,  6, -3, -2, -1, -3, -2, -1, -1, -2, -4,  0, -3,  1,  1, -1, -7, // H
     -1, -2, -2, -3, -2, -2, -2, -3, -3,  5,  1, -2,  2,  0, -3, -2,  0, -6, -2,  3, -2, -2, -1, -7, // I
     -2, -3, -3, -4, -6, -2, -3, -4, -2,  1,  5, -3,  3,  1, -2, -3, -2, -4, -2,  1, -4, -2, -2, -7, // L
     -2,  3,  1,  0, -5,  0, -1, -2, -1, -2, -3,  4,  1, -5, -1,  0,  0, -4, -5, -3,  0,  0, -1, -7, // K
     -1, -1, -2, -3, -5, -1, -3, -3, -3,  2,  3,  1,  7, -1, -3, -2, -1, -5, -3,  1, -3, -2, -1, -7, // M
     -3, -4, -3, -5, -4, -4, -5, -4, -2,  0,  1, -5, -1,  7, -4, -3, -3,  0,  5, -2, -4, -5, -2, -7, // F
      1, -1, -1, -1, -3,  0, -1, -1, -1, -3, -2, -1, -3, -4,  5,  1,  0, -5, -5, -2, -1,  0, -1, -7, // P
      1, -1,  1,  0,  0, -1,  0,  1, -1, -2, -3,  0, -2, -3,  1,  2,  1, -2, -3, -1,  0, -1,  0, -7, // S
      1, -1,  0, -1, -2, -1, -1, -1, -2,  0, -2,  0, -1, -3,  0,  1,  3, -5, -3,  0,  0, -1,  0, -7, // T
     -5,  1, -4, -7, -7, -5, -7, -6, -4, -6, -4, -4, -5,  0, -5, -2, -5, 12,  0, -7, -5, -6, -4, -7, // W
     -3, -5, -2, -4,  0, -4, -4, -5,  0, -2, -2, -5, -3,  5, -5, -3, -3,  0,  8, -3, -3, -4, -3, -7, // Y
      0, -3, -2, -2, -2, -2, -2, -2, -3,  3,  1, -3,  1, -2, -2, -1,  0, -7, -3,  4, -2, -2, -1, -7, // V
      0, -1,  2,  3, -4,  1,  2,  0,  1, -2, -4,  0, -3, -4, -1,  0,  0, -5, -3, -2,  3,  2, -1, -7, // B
      0,  0,  1,  2, -5,  3,  3, -1,  1, -2, -2,  0, -2, -5,  0, -1, -1, -6, -4, -2,  2,  3, -1, -7, // Z
      0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -2, -1, -1, -2, -1,  0,  0, -4, -3, -1, -1, -1, -1, -7, // X
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,  1, // *
];

/// PAM170 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM170: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -2,  0,  0, -2, -1,  0,  1, -2, -1, -2, -2, -1, -3,  1,  1,  1, -5, -3,  0,  0,  0,  0, -7, // A
     -2,  5, -1, -2, -3,  1, -2, -3,  1, -2, -3,  3, -1, -3,  0,  0, -1,  1, -4, -2, -1,  0, -1, -7, // R
      0, -1,  3,  2, -4,  0,  1,  0,  1, -2, -3,  1, -2, -3, -1,  1,  0, -4, -2, -2,  2,  1,  0, -7, // N
      0, -2,  2,  4, -5,  1,  3,  0,  0, -2, -4,  0, -3, -5, -1,  0,  0, -6, -4, -2,  3,  2, -1, -7, // D
     -2, -3, -4, -5,  9, -5, -5, -4, -3, -2, -6, -5, -5, -4, -2,  0, -2, -7,  0, -2, -4, -5, -3, -7, // C
     -1,  1,  0,  1, -5,  4,  2, -2,  2, -2, -2,  0, -1, -4,  0, -1, -1, -5, -4, -2,  1,  3, -1, -7, // Q
      0, -2,  1,  3, -5,  2,  4,  0,  0, -2, -3,  0, -2, -5, -1,  0, -1, -7, -4, -2,  2,  3, -1, -7, // E
      1, -3,  0,  0, -4, -2,  0,  4, -3, -3, -4, -2, -3, -4, -1,  1,  0, -6, -5, -2,  0, -1, -1, -7, // G
     -2,  1,  1,  0, -3,  2,  0, -3,  6, -3, -2, -1, -3, -2, -1, -1, -2, -4,  0, -3,  1,  1, -1, -7, // H
     -1, -2, -2, -2, -2, -2, -2, -3, -3,  4,  2, -2,  2,  1, -2, -2,  0, -5, -2,  3, -2, -2, -1, -7, // I
     -2, -3, -3, -4, -6, -2, -3, -4, -2,  2,  5, -3,  3,  1, -2, -3, -2, -4, -2,  1, -3, -2, -2, -7, // L
     -2,  3,  1,  0, -5,  0,  0, -2, -1, -2, -3,  4,  1, -5, -1,  0,  0, -4, -5, -2,  0,  0, -1, -7, // K
     -1, -1, -2, -3, -5, -1, -2, -3, -3,  2,  3,  1,  6,  0, -2, -2, -1, -5, -3,  1, -2, -2, -1, -7, // M
     -3, -3, -3, -5, -4, -4, -5, -4, -2,  1,  1, -5,  0,  7, -4, -3, -3,  0,  5, -2, -4, -5, -2, -7, // F
      1,  0, -1, -1, -2,  0, -1, -1, -1, -2, -2, -1, -2, -4,  5,  1,  0, -5, -5, -1, -1,  0, -1, -7, // P
      1,  0,  1,  0,  0, -1,  0,  1, -1, -2, -3,  0, -2, -3,  1,  2,  1, -2, -3, -1,  0, -1,  0, -7, // S
      1, -1,  0,  0, -2, -1, -1,  0, -2,  0, -2,  0, -1, -3,  0,  1,  3, -5, -3,  0,  0, -1,  0, -7, // T
     -5,  1, -4, -6, -7, -5, -7, -6, -4, -5, -4, -4, -5,  0, -5, -2, -5, 12,  0, -7, -5, -6, -4, -7, // W
     -3, -4, -2, -4,  0, -4, -4, -5,  0, -2, -2, -5, -3,  5, -5, -3, -3,  0,  8, -3, -3, -4, -2, -7, // Y
      0, -2, -2, -2, -2, -2, -2, -2, -3,  3,  1, -2,  1, -2, -1, -1,  0, -7, -3,  4, -2, -2, -1, -7, // V
      0, -1,  2,  3, -4,  1,  2,  0,  1, -2, -3,  0, -2, -4, -1,  0,  0, -5, -3, -2,  3,  2, -1, -7, // B
      0,  0,  1,  2, -5,  3,  3, -1,  1, -2, -2,  0, -2, -5,  0, -1, -1, -6, -4, -2,  2,  3, -1, -7, // Z
      0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -2, -1, -1, -2, -1,  0,  0, -4, -2, -1, -1, -1, -1, -7, // X
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,  1, // *
];

/// PAM180 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM180: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -2,  0,  0, -2, -1,  0,  1, -2, -1, -2, -1, -1, -3,  1,  1,  1, -5, -3,  0,  0,  0,  0, -6, // A
     -2,  5,  0, -2, -3,  1, -2, -3,  1, -2, -3,  3, -1, -3,  0,  0, -1,  1, -4, -2, -1,  0, -1, -6, // R
      0,  0,  2,  2, -3,  0,  1,  0,  1, -2, -3,  1, -2, -3, -1,  1,  0, -4, -2, -2,  2,  1,  0, -6, // N
      0, -2,  2,  4, -5,  1,  3,  0,  0, -2, -4,  0, -3, -5, -1,  0,  0, -6, -4, -2,  3,  2, -1, -6, // D
     -2, -3, -3, -5,  8, -5, -5, -4, -3, -2, -5, -5, -5, -4, -2,  0, -2, -6,  0, -2, -4, -5, -3, -6, // C
     -1,  1,  0,  1, -5,  4,  2, -1,  2, -2, -2,  0, -1, -4,  0, -1, -1, -5, -4, -2,  1,  3, -1, -6, // Q
      0, -2,  1,  3, -5,  2,  4,  0,  0, -2, -3,  0, -2, -5, -1,  0, -1, -6, -3, -2,  2,  3, -1, -6, // E
      1, -3,  0,  0, -4, -1,  0,  4, -2, -3, -4, -2, -3, -4, -1,  1,  0, -6, -5, -1,  0, -1, -1, -6, // G
     -2,  1,  1,  0, -3,  2,  0, -2,  6, -3, -2, -1, -2, -1,  0, -1, -2, -3,  0, -2,  1,  1, -1, -6, // H
     -1, -2, -2, -2, -2, -2, -2, -3, -3,  4,  2, -2,  2,  1, -2, -1,  0, -5, -1,  3, -2, -2, -1, -6, // I
     -2, -3, -3, -4, -5, -2, -3, -4, -2,  2,  5, -3,  3,  1, -2, -3, -2, -4, -1,  1, -3, -2, -1, -6, // L
     -1,  3,  1,  0, -5,  0,  0, -2, -1, -2, -3,  4,  1, -4, -1,  0,  0, -3, -4, -2,  0,  0, -1, -6, // K
     -1, -1, -2, -3, -5, -1, -2, -3, -2,  2,  3,  1,  6,  0, -2, -2, -1, -5, -3,  1, -2, -2, -1, -6, // M
     -3, -3, -3, -5, -4, -4, -5, -4, -1,  1,  1, -4,  0,  7, -4, -3, -3,  0,  5, -2, -4, -4, -2, -6, // F
      1,  0, -1, -1, -2,  0, -1, -1,  0, -2, -2, -1, -2, -4,  5,  1,  0, -5, -4, -1, -1,  0, -1, -6, // P
      1,  0,  1,  0,  0, -1,  0,  1, -1, -1, -3,  0, -2, -3,  1,  2,  1, -2, -3, -1,  0,  0,  0, -6, // S
      1, -1,  0,  0, -2, -1, -1,  0, -2,  0, -2,  0, -1, -3,  0,  1,  3, -4, -3,  0,  0, -1,  0, -6, // T
     -5,  1, -4, -6, -6, -5, -6, -6, -3, -5, -4, -3, -5,  0, -5, -2, -4, 12,  0, -6, -5, -5, -4, -6, // W
     -3, -4, -2, -4,  0, -4, -3, -5,  0, -1, -1, -4, -3,  5, -4, -3, -3,  0,  8, -2, -2, -4, -2, -6, // Y
      0, -2, -2, -2, -2, -2, -2, -1, -2,  3,  1, -2,  1, -2, -1, -1,  0, -6, -2,  4, -2, -2, -1, -6, // V
      0, -1,  2,  3, -4,  1,  2,  0,  1, -2, -3,  0, -2, -4, -1,  0,  0, -5, -2, -2,  3,  2, -1, -6, // B
      0,  0,  1,  2, -5,  3,  3, -1,  1, -2, -2,  0, -2, -4,  0,  0, -1, -5, -4, -2,  2,  3, -1, -6, // Z
      0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -1, -1, -1, -2, -1,  0,  0, -4, -2, -1, -1, -1, -1, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// PAM190 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/2 bit units.
#[rustfmt::skip]
pub(super) const PAM190: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -2,  0,  0, -2, -1,  0,  1, -1, -1, -2, -1, -1, -3,  1,  1,  1, -5, -3,  0,  0,  0,  0, -6, // A
     -2,  5,  0, -2, -3,  1, -1, -3,  1, -2, -3,  2,  0, -3,  0,  0, -1,  1, -4, -2, -1,  0, -1, -6, // R
      0,  0,  2,  2, -3,  0,  1,  0,  1, -2, -3,  1, -2, -3, -1,  1,  0, -4, -1, -2,  2,  1,  0, -6, // N
      0, -2,  2,  3, -4,  1,  3,  0,  0, -2, -4,  0, -3, -4, -1,  0,  0, -6, -4, -2,  3,  2, -1, -6, // D
     -2, -3, -3, -4,  8, -5, -5, -3, -3, -2, -5, -5, -4, -4, -2,  0, -2, -6,  0, -2, -4, -5, -3, -6, // C
     -1,  1,  0,  1, -5,  4,  2, -1,  2, -2, -1,  0, -1, -4,  0, -1, -1, -4, -4, -2,  1,  3, -1, -6, // Q
      0, -1,  1,  3, -5,  2,  3,  0,  0, -2, -3,  0, -2, -4, -1,  0, -1, -6, -3, -2,  2,  3, -1, -6, // E
      1, -3,  0,  0, -3, -1,  0,  4, -2, -2, -3, -2, -3, -4, -1,  1,  0, -6, -4, -1,  0, -1, -1, -6, // G
     -1,  1,  1,  0, -3,  2,  0, -2,  5, -3, -2,  0, -2, -1,  0, -1, -1, -3,  0, -2,  1,  1, -1, -6, // H
     -1, -2, -2, -2, -2, -2, -2, -2, -3,  4,  2, -2,  2,  1, -2, -1,  0, -5, -1,  3, -2, -2, -1, -6, // I
     -2, -3, -3, -4, -5, -1, -3, -3, -2,  2,  5, -2,  3,  1, -2, -3, -2, -4, -1,  1, -3, -2, -1, -6, // L
     -1,  2,  1,  0, -5,  0,  0, -2,  0, -2, -2,  4,  1, -4, -1,  0,  0, -3, -4, -2,  0,  0, -1, -6, // K
     -1,  0, -2, -3, -4, -1, -2, -3, -2,  2,  3,  1,  6,  0, -2, -1,  0, -5, -3,  1, -2, -2, -1, -6, // M
     -3, -3, -3, -4, -4, -4, -4, -4, -1,  1,  1, -4,  0,  7, -4, -2, -2,  0,  5, -1, -3, -4, -2, -6, // F
      1,  0, -1, -1, -2,  0, -1, -1,  0, -2, -2, -1, -2, -4,  5,  1,  0, -5, -4, -1, -1,  0, -1, -6, // P
      1,  0,  1,  0,  0, -1,  0,  1, -1, -1, -3,  0, -1, -2,  1,  2,  1, -2, -2, -1,  0,  0,  0, -6, // S
      1, -1,  0,  0, -2, -1, -1,  0, -1,  0, -2,  0,  0, -2,  0,  1,  3, -4, -2,  0,  0, -1,  0, -6, // T
     -5,  1, -4, -6, -6, -4, -6, -6, -3, -5, -4, -3, -5,  0, -5, -2, -4, 12,  0, -6, -5, -5, -4, -6, // W
     -3, -4, -1, -4,  0, -4, -3, -4,  0, -1, -1, -4, -3,  5, -4, -2, -2,  0,  7, -2, -2, -3, -2, -6, // Y
      0, -2, -2, -2, -2, -2, -2, -1, -2,  3,  1, -2,  1, -1, -1, -1,  0, -6, -2,  4, -2, -2, -1, -6, // V
      0, -1,  2,  3, -4,  1,  2,  0,  1, -2, -3,  0, -2, -3, -1,  0,  0, -5, -2, -2,  2,  2, -1, -6, // B
      0,  0,  1,  2, -5,  3,  3, -1,  1, -2, -2,  0, -2, -4,  0,  0, -1, -5, -3, -2,  2,  3, -1, -6, // Z
      0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -1, -1, -1, -2, -1,  0,  0, -4, -2, -1, -1, -1, -1, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// PAM200 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM200: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      3, -2,  0,  0, -3, -1,  0,  1, -2, -1, -2, -2, -2, -4,  1,  1,  2, -7, -4,  0,  0,  0,  0, -9, // A
     -2,  7,  0, -2, -4,  1, -2, -4,  2, -2, -4,  4, -1, -5,  0, -1, -1,  2, -6, -3, -1,  0, -1, -9, // R
      0,  0,  3,  3, -5,  1,  2,  0,  2, -2, -4,  1, -2, -4, -1,  1,  1, -6, -2, -2,  3,  1,  0, -9, // N
      0, -2,  3,  5, -6,  2,  4,  0,  0, -3, -5,  0, -4, -6, -1,  0,  0, -8, -5, -3,  4,  3, -1, -9, // D
     -3, -4, -5, -6, 12, -7, -7, -5, -4, -3, -7, -7, -6, -5, -3,  0, -3, -9,  0, -2, -5, -7, -4, -9, // C
     -1,  1,  1,  2, -7,  5,  3, -2,  3, -3, -2,  1, -1, -5,  0, -1, -1, -6, -5, -3,  1,  4, -1, -9, // Q
      0, -2,  2,  4, -7,  3,  5,  0,  0, -3, -4,  0, -3, -6, -1,  0, -1, -9, -5, -2,  3,  4, -1, -9, // E
      1, -4,  0,  0, -5, -2,  0,  6, -3, -3, -5, -2, -4, -5, -1,  1,  0, -8, -6, -2,  0, -1, -1, -9, // G
     -2,  2,  2,  0, -4,  3,  0, -3,  8, -4, -3, -1, -3, -2,  0, -1, -2, -5,  0, -3,  1,  2, -1, -9, // H
     -1, -2, -2, -3, -3, -3, -3, -3, -4,  6,  2, -2,  2,  1, -3, -2,  0, -7, -2,  4, -3, -3, -1, -9, // I
     -2, -4, -4, -5, -7, -2, -4, -5, -3,  2,  7, -3,  4,  1, -3, -4, -2, -6, -2,  2, -4, -3, -2, -9, // L
     -2,  4,  1,  0, -7,  1,  0, -2, -1, -2, -3,  6,  1, -6, -2,  0,  0, -5, -6, -3,  0,  0, -1, -9, // K
     -2, -1, -2, -4, -6, -1, -3, -4, -3,  2,  4,  1,  8,  0, -3, -2, -1, -7, -4,  2, -3, -2, -1, -9, // M
     -4, -5, -4, -6, -5, -5, -6, -5, -2,  1,  1, -6,  0, 10, -5, -3, -3,  0,  7, -2, -5, -6, -3, -9, // F
      1,  0, -1, -1, -3,  0, -1, -1,  0, -3, -3, -2, -3, -5,  7,  1,  0, -7, -6, -2, -1,  0, -1, -9, // P
      1, -1,  1,  0,  0, -1,  0,  1, -1, -2, -4,  0, -2, -3,  1,  2,  2, -3, -3, -1,  1, -1,  0, -9, // S
      2, -1,  1,  0, -3, -1, -1,  0, -2,  0, -2,  0, -1, -3,  0,  2,  4, -6, -3,  0,  0, -1,  0, -9, // T
     -7,  2, -6, -8, -9, -6, -9, -8, -5, -7, -6, -5, -7,  0, -7, -3, -6, 18,  0, -9, -7, -8, -5, -9, // W
     -4, -6, -2, -5,  0, -5, -5, -6,  0, -2, -2, -6, -4,  7, -6, -3, -3,  0, 11, -3, -3, -5, -3, -9, // Y
      0, -3, -2, -3, -2, -3, -2, -2, -3,  4,  2, -3,  2, -2, -2, -1,  0, -9, -3,  5, -3, -3, -1, -9, // V
      0, -1,  3,  4, -5,  1,  3,  0,  1, -3, -4,  0, -3, -5, -1,  1,  0, -7, -3, -3,  4,  2, -1, -9, // B
      0,  0,  1,  3, -7,  4,  4, -1,  2, -3, -3,  0, -2, -6,  0, -1, -1, -8, -5, -3,  2,  4, -1, -9, // Z
      0, -1,  0, -1, -4, -1, -1, -1, -1, -1, -2, -1, -1, -3, -1,  0,  0, -5, -3, -1, -1, -1, -1, -9, // X
     -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,  1, // *
];

/// PAM210 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM210: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -2,  0,  0, -3, -1,  0,  1, -2, -1, -2, -2, -1, -4,  1,  1,  1, -7, -4,  0,  0,  0,  0, -8, // A
     -2,  7,  0, -2, -4,  1, -2, -4,  2, -2, -4,  4, -1, -4,  0, -1, -1,  2, -5, -3, -1,  0, -1, -8, // R
      0,  0,  3,  3, -4,  1,  2,  0,  2, -2, -3,  1, -2, -3, -1,  1,  1, -5, -2, -2,  3,  1,  0, -8, // N
      0, -2,  3,  5, -6,  2,  4,  1,  0, -3, -5,  0, -3, -6, -1,  0,  0, -8, -5, -3,  4,  3, -1, -8, // D
     -3, -4, -4, -6, 12, -6, -6, -5, -4, -3, -7, -6, -6, -5, -3,  0, -2, -8,  0, -2, -5, -6, -4, -8, // C
     -1,  1,  1,  2, -6,  5,  3, -2,  3, -3, -2,  1, -1, -5,  0, -1, -1, -6, -5, -2,  1,  4, -1, -8, // Q
      0, -2,  2,  4, -6,  3,  5,  0,  0, -2, -4,  0, -3, -6, -1,  0, -1, -8, -5, -2,  3,  4, -1, -8, // E
      1, -4,  0,  1, -5, -2,  0,  6, -3, -3, -5, -2, -4, -5, -1,  1,  0, -8, -6, -2,  0, -1, -1, -8, // G
     -2,  2,  2,  0, -4,  3,  0, -3,  8, -3, -3,  0, -3, -2,  0, -1, -2, -4,  0, -3,  1,  2, -1, -8, // H
     -1, -2, -2, -3, -3, -3, -2, -3, -3,  5,  2, -2,  2,  1, -3, -2,  0, -7, -2,  4, -3, -2, -1, -8, // I
     -2, -4, -3, -5, -7, -2, -4, -5, -3,  2,  7, -3,  4,  2, -3, -3, -2, -5, -2,  2, -4, -3, -2, -8, // L
     -2,  4,  1,  0, -6,  1,  0, -2,  0, -2, -3,  5,  1, -6, -1,  0,  0, -4, -6, -3,  1,  0, -1, -8, // K
     -1, -1, -2, -3, -6, -1, -3, -4, -3,  2,  4,  1,  8,  0, -3, -2, -1, -6, -3,  2, -3, -2, -1, -8, // M
     -4, -4, -3, -6, -5, -5, -6, -5, -2,  1,  2, -6,  0, 10, -5, -3, -3,  0,  7, -2, -5, -6, -3, -8, // F
      1,  0, -1, -1, -3,  0, -1, -1,  0, -3, -3, -1, -3, -5,  7,  1,  0, -7, -6, -2, -1,  0, -1, -8, // P
      1, -1,  1,  0,  0, -1,  0,  1, -1, -2, -3,  0, -2, -3,  1,  2,  2, -3, -3, -1,  1,  0,  0, -8, // S
      1, -1,  1,  0, -2, -1, -1,  0, -2,  0, -2,  0, -1, -3,  0,  2,  4, -6, -3,  0,  0, -1,  0, -8, // T
     -7,  2, -5, -8, -8, -6, -8, -8, -4, -7, -5, -4, -6,  0, -7, -3, -6, 18,  0, -8, -7, -7, -5, -8, // W
     -4, -5, -2, -5,  0, -5, -5, -6,  0, -2, -2, -6, -3,  7, -6, -3, -3,  0, 11, -3, -3, -5, -3, -8, // Y
      0, -3, -2, -3, -2, -2, -2, -2, -3,  4,  2, -3,  2, -2, -2, -1,  0, -8, -3,  5, -2, -2, -1, -8, // V
      0, -1,  3,  4, -5,  1,  3,  0,  1, -3, -4,  1, -3, -5, -1,  1,  0, -7, -3, -2,  3,  2, -1, -8, // B
      0,  0,  1,  3, -6,  4,  4, -1,  2, -2, -3,  0, -2, -6,  0,  0, -1, -7, -5, -2,  2,  4, -1, -8, // Z
      0, -1,  0, -1, -4, -1, -1, -1, -1, -1, -2, -1, -1, -3, -1,  0,  0, -5, -3, -1, -1, -1, -1, -8, // X
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM220 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM220: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -2,  0,  0, -2, -1,  0,  1, -2, -1, -2, -1, -1, -4,  1,  1,  1, -6, -4,  0,  0,  0,  0, -8, // A
     -2,  7,  0, -2, -4,  1, -2, -3,  2, -2, -3,  4, -1, -4,  0,  0, -1,  2, -5, -3, -1,  0, -1, -8, // R
      0,  0,  3,  2, -4,  1,  2,  0,  2, -2, -3,  1, -2, -3, -1,  1,  1, -5, -2, -2,  2,  1,  0, -8, // N
      0, -2,  2,  4, -6,  2,  4,  1,  1, -3, -5,  0, -3, -6, -1,  0,  0, -8, -5, -3,  4,  3, -1, -8, // D
     -2, -4, -4, -6, 12, -6, -6, -4, -4, -3, -7, -6, -6, -5, -3,  0, -2, -8,  0, -2, -5, -6, -3, -8, // C
     -1,  1,  1,  2, -6,  5,  3, -2,  3, -2, -2,  1, -1, -5,  0, -1, -1, -6, -5, -2,  1,  4, -1, -8, // Q
      0, -2,  2,  4, -6,  3,  4,  0,  0, -2, -4,  0, -3, -6, -1,  0, -1, -8, -5, -2,  3,  4, -1, -8, // E
      1, -3,  0,  1, -4, -2,  0,  5, -3, -3, -4, -2, -4, -5, -1,  1,  0, -8, -6, -2,  0, -1, -1, -8, // G
     -2,  2,  2,  1, -4,  3,  0, -3,  7, -3, -3,  0, -3, -2,  0, -1, -2, -4,  0, -3,  1,  2, -1, -8, // H
     -1, -2, -2, -3, -3, -2, -2, -3, -3,  5,  2, -2,  2,  1, -2, -2,  0, -7, -1,  4, -2, -2, -1, -8, // I
     -2, -3, -3, -5, -7, -2, -4, -4, -3,  2,  6, -3,  4,  2, -3, -3, -2, -5, -1,  2, -4, -3, -2, -8, // L
     -1,  4,  1,  0, -6,  1,  0, -2,  0, -2, -3,  5,  1, -6, -1,  0,  0, -4, -6, -3,  1,  0, -1, -8, // K
     -1, -1, -2, -3, -6, -1, -3, -4, -3,  2,  4,  1,  8,  0, -2, -2, -1, -6, -3,  2, -3, -2, -1, -8, // M
     -4, -4, -3, -6, -5, -5, -6, -5, -2,  1,  2, -6,  0, 10, -5, -3, -3,  0,  7, -2, -4, -5, -2, -8, // F
      1,  0, -1, -1, -3,  0, -1, -1,  0, -2, -3, -1, -2, -5,  7,  1,  0, -6, -6, -2, -1,  0, -1, -8, // P
      1,  0,  1,  0,  0, -1,  0,  1, -1, -2, -3,  0, -2, -3,  1,  2,  2, -2, -3, -1,  1,  0,  0, -8, // S
      1, -1,  1,  0, -2, -1, -1,  0, -2,  0, -2,  0, -1, -3,  0,  2,  3, -6, -3,  0,  0, -1,  0, -8, // T
     -6,  2, -5, -8, -8, -6, -8, -8, -4, -7, -5, -4, -6,  0, -6, -2, -6, 17,  0, -8, -6, -7, -5, -8, // W
     -4, -5, -2, -5,  0, -5, -5, -6,  0, -1, -1, -6, -3,  7, -6, -3, -3,  0, 11, -3, -3, -5, -3, -8, // Y
      0, -3, -2, -3, -2, -2, -2, -2, -3,  4,  2, -3,  2, -2, -2, -1,  0, -8, -3,  5, -2, -2, -1, -8, // V
      0, -1,  2,  4, -5,  1,  3,  0,  1, -2, -4,  1, -3, -4, -1,  1,  0, -6, -3, -2,  3,  2, -1, -8, // B
      0,  0,  1,  3, -6,  4,  4, -1,  2, -2, -3,  0, -2, -5,  0,  0, -1, -7, -5, -2,  2,  4, -1, -8, // Z
      0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -2, -1, -1, -2, -1,  0,  0, -5, -3, -1, -1, -1, -1, -8, // X
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM230 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM230: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -2,  0,  0, -2, -1,  0,  1, -2, -1, -2, -1, -1, -3,  1,  1,  1, -6, -4,  0,  0,  0,  0, -8, // A
     -2,  7,  0, -2, -4,  1, -1, -3,  2, -2, -3,  4,  0, -4,  0,  0, -1,  2, -5, -3, -1,  0, -1, -8, // R
      0,  0,  2,  2, -4,  1,  2,  0,  2, -2, -3,  1, -2, -3,  0,  1,  1, -5, -2, -2,  2,  1,  0, -8, // N
      0, -2,  2,  4, -6,  2,  4,  1,  1, -3, -4,  0, -3, -6, -1,  0,  0, -8, -4, -2,  3,  3, -1, -8, // D
     -2, -4, -4, -6, 12, -6, -6, -4, -4, -3, -7, -6, -6, -5, -3,  0, -2, -8,  0, -2, -5, -6, -3, -8, // C
     -1,  1,  1,  2, -6,  5,  3, -1,  3, -2, -2,  1, -1, -5,  0, -1, -1, -6, -4, -2,  1,  4, -1, -8, // Q
      0, -1,  2,  4, -6,  3,  4,  0,  0, -2, -3,  0, -2, -5,  0,  0,  0, -8, -4, -2,  3,  4, -1, -8, // E
      1, -3,  0,  1, -4, -1,  0,  5, -3, -3, -4, -2, -3, -5, -1,  1,  0, -7, -6, -2,  0,  0, -1, -8, // G
     -2,  2,  2,  1, -4,  3,  0, -3,  7, -3, -3,  0, -3, -2,  0, -1, -2, -4,  0, -3,  1,  2, -1, -8, // H
     -1, -2, -2, -3, -3, -2, -2, -3, -3,  5,  2, -2,  2,  1, -2, -2,  0, -6, -1,  4, -2, -2, -1, -8, // I
     -2, -3, -3, -4, -7, -2, -3, -4, -3,  2,  6, -3,  4,  2, -3, -3, -2, -5, -1,  2, -4, -3, -1, -8, // L
     -1,  4,  1,  0, -6,  1,  0, -2,  0, -2, -3,  5,  1, -5, -1,  0,  0, -4, -5, -3,  1,  0, -1, -8, // K
     -1,  0, -2, -3, -6, -1, -2, -3, -3,  2,  4,  1,  7,  0, -2, -2, -1, -6, -3,  2, -2, -2, -1, -8, // M
     -3, -4, -3, -6, -5, -5, -5, -5, -2,  1,  2, -5,  0,  9, -5, -3, -3,  1,  7, -1, -4, -5, -2, -8, // F
      1,  0,  0, -1, -3,  0,  0, -1,  0, -2, -3, -1, -2, -5,  6,  1,  0, -6, -5, -1, -1,  0, -1, -8, // P
      1,  0,  1,  0,  0, -1,  0,  1, -1, -2, -3,  0, -2, -3,  1,  2,  2, -2, -3, -1,  1,  0,  0, -8, // S
      1, -1,  1,  0, -2, -1,  0,  0, -2,  0, -2,  0, -1, -3,  0,  2,  3, -6, -3,  0,  0, -1,  0, -8, // T
     -6,  2, -5, -8, -8, -6, -8, -7, -4, -6, -5, -4, -6,  1, -6, -2, -6, 17,  0, -8, -6, -7, -5, -8, // W
     -4, -5, -2, -4,  0, -4, -4, -6,  0, -1, -1, -5, -3,  7, -5, -3, -3,  0, 10, -3, -3, -4, -3, -8, // Y
      0, -3, -2, -2, -2, -2, -2, -2, -3,  4,  2, -3,  2, -1, -1, -1,  0, -8, -3,  5, -2, -2, -1, -8, // V
      0, -1,  2,  3, -5,  1,  3,  0,  1, -2, -4,  1, -2, -4, -1,  1,  0, -6, -3, -2,  3,  2, -1, -8, // B
      0,  0,  1,  3, -6,  4,  4,  0,  2, -2, -3,  0, -2, -5,  0,  0, -1, -7, -4, -2,  2,  4, -1, -8, // Z
      0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -1, -1, -1, -2, -1,  0,  0, -5, -3, -1, -1, -1, -1, -8, // X
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM240 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM240: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -2,  0,  0, -2,  0,  0,  1, -2, -1, -2, -1, -1, -3,  1,  1,  1, -6, -3,  0,  0,  0,  0, -8, // A
     -2,  6,  0, -1, -4,  1, -1, -3,  2, -2, -3,  3,  0, -4,  0,  0, -1,  2, -5, -3, -1,  0, -1, -8, // R
      0,  0,  2,  2, -4,  1,  1,  0,  2, -2, -3,  1, -2, -3,  0,  1,  1, -5, -2, -2,  2,  1,  0, -8, // N
      0, -1,  2,  4, -5,  2,  4,  1,  1, -2, -4,  0, -3, -5, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // D
     -2, -4, -4, -5, 12, -6, -6, -4, -4, -2, -6, -6, -5, -4, -3,  0, -2, -8,  0, -2, -5, -6, -3, -8, // C
      0,  1,  1,  2, -6,  4,  3, -1,  3, -2, -2,  1, -1, -4,  0, -1, -1, -5, -4, -2,  1,  3, -1, -8, // Q
      0, -1,  1,  4, -6,  3,  4,  0,  1, -2, -3,  0, -2, -5,  0,  0,  0, -7, -4, -2,  3,  3, -1, -8, // E
      1, -3,  0,  1, -4, -1,  0,  5, -2, -3, -4, -2, -3, -4,  0,  1,  0, -7, -5, -1,  1,  0, -1, -8, // G
     -2,  2,  2,  1, -4,  3,  1, -2,  7, -3, -2,  0, -2, -2,  0, -1, -1, -4,  0, -3,  1,  2, -1, -8, // H
     -1, -2, -2, -2, -2, -2, -2, -3, -3,  5,  2, -2,  2,  1, -2, -1,  0, -6, -1,  4, -2, -2, -1, -8, // I
     -2, -3, -3, -4, -6, -2, -3, -4, -2,  2,  6, -3,  4,  2, -2, -3, -2, -5, -1,  2, -4, -3, -1, -8, // L
     -1,  3,  1,  0, -6,  1,  0, -2,  0, -2, -3,  5,  1, -5, -1,  0,  0, -4, -5, -2,  1,  0, -1, -8, // K
     -1,  0, -2, -3, -5, -1, -2, -3, -2,  2,  4,  1,  7,  0, -2, -2,  0, -6, -3,  2, -2, -2, -1, -8, // M
     -3, -4, -3, -5, -4, -4, -5, -4, -2,  1,  2, -5,  0,  9, -4, -3, -3,  1,  7, -1, -4, -5, -2, -8, // F
      1,  0,  0, -1, -3,  0,  0,  0,  0, -2, -2, -1, -2, -4,  6,  1,  0, -6, -5, -1, -1,  0, -1, -8, // P
      1,  0,  1,  0,  0, -1,  0,  1, -1, -1, -3,  0, -2, -3,  1,  2,  1, -2, -3, -1,  1,  0,  0, -8, // S
      1, -1,  1,  0, -2, -1,  0,  0, -1,  0, -2,  0,  0, -3,  0,  1,  3, -5, -3,  0,  0, -1,  0, -8, // T
     -6,  2, -5, -7, -8, -5, -7, -7, -4, -6, -5, -4, -6,  1, -6, -2, -5, 17,  1, -7, -6, -6, -5, -8, // W
     -3, -5, -2, -4,  0, -4, -4, -5,  0, -1, -1, -5, -3,  7, -5, -3, -3,  1, 10, -3, -3, -4, -2, -8, // Y
      0, -3, -2, -2, -2, -2, -2, -1, -3,  4,  2, -2,  2, -1, -1, -1,  0, -7, -3,  4, -2, -2, -1, -8, // V
      0, -1,  2,  3, -5,  1,  3,  1,  1, -2, -4,  1, -2, -4, -1,  1,  0, -6, -3, -2,  3,  2,  0, -8, // B
      0,  0,  1,  3, -6,  3,  3,  0,  2, -2, -3,  0, -2, -5,  0,  0, -1, -6, -4, -2,  2,  3, -1, -8, // Z
      0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -1, -1, -1, -2, -1,  0,  0, -5, -2, -1,  0, -1, -1, -8, // X
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM250 as distributed by NCBI.
#[rustfmt::skip]
pub(super) const PAM250: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -2,  0,  0, -2,  0,  0,  1, -1, -1, -2, -1, -1, -3,  1,  1,  1, -6, -3,  0,  0,  0,  0, -8, // A
     -2,  6,  0, -1, -4,  1, -1, -3,  2, -2, -3,  3,  0, -4,  0,  0, -1,  2, -4, -2, -1,  0, -1, -8, // R
      0,  0,  2,  2, -4,  1,  1,  0,  2, -2, -3,  1, -2, -3,  0,  1,  0, -4, -2, -2,  2,  1,  0, -8, // N
      0, -1,  2,  4, -5,  2,  3,  1,  1, -2, -4,  0, -3, -6, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // D
     -2, -4, -4, -5, 12, -5, -5, -3, -3, -2, -6, -5, -5, -4, -3,  0, -2, -8,  0, -2, -4, -5, -3, -8, // C
      0,  1,  1,  2, -5,  4,  2, -1,  3, -2, -2,  1, -1, -5,  0, -1, -1, -5, -4, -2,  1,  3, -1, -8, // Q
      0, -1,  1,  3, -5,  2,  4,  0,  1, -2, -3,  0, -2, -5, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // E
      1, -3,  0,  1, -3, -1,  0,  5, -2, -3, -4, -2, -3, -5,  0,  1,  0, -7, -5, -1,  0,  0, -1, -8, // G
     -1,  2,  2,  1, -3,  3,  1, -2,  6, -2, -2,  0, -2, -2,  0, -1, -1, -3,  0, -2,  1,  2, -1, -8, // H
     -1, -2, -2, -2, -2, -2, -2, -3, -2,  5,  2, -2,  2,  1, -2, -1,  0, -5, -1,  4, -2, -2, -1, -8, // I
     -2, -3, -3, -4, -6, -2, -3, -4, -2,  2,  6, -3,  4,  2, -3, -3, -2, -2, -1,  2, -3, -3, -1, -8, // L
     -1,  3,  1,  0, -5,  1,  0, -2,  0, -2, -3,  5,  0, -5, -1,  0,  0, -3, -4, -2,  1,  0, -1, -8, // K
     -1,  0, -2, -3, -5, -1, -2, -3, -2,  2,  4,  0,  6,  0, -2, -2, -1, -4, -2,  2, -2, -2, -1, -8, // M
     -3, -4, -3, -6, -4, -5, -5, -5, -2,  1,  2, -5,  0,  9, -5, -3, -3,  0,  7, -1, -4, -5, -2, -8, // F
      1,  0,  0, -1, -3,  0, -1,  0,  0, -2, -3, -1, -2, -5,  6,  1,  0, -6, -5, -1, -1,  0, -1, -8, // P
      1,  0,  1,  0,  0, -1,  0,  1, -1, -1, -3,  0, -2, -3,  1,  2,  1, -2, -3, -1,  0,  0,  0, -8, // S
      1, -1,  0,  0, -2, -1,  0,  0, -1,  0, -2,  0, -1, -3,  0,  1,  3, -5, -3,  0,  0, -1,  0, -8, // T
     -6,  2, -4, -7, -8, -5, -7, -7, -3, -5, -2, -3, -4,  0, -6, -2, -5, 17,  0, -6, -5, -6, -4, -8, // W
     -3, -4, -2, -4,  0, -4, -4, -5,  0, -1, -1, -4, -2,  7, -5, -3, -3,  0, 10, -2, -3, -4, -2, -8, // Y
      0, -2, -2, -2, -2, -2, -2, -1, -2,  4,  2, -2,  2, -1, -1, -1,  0, -6, -2,  4, -2, -2, -1, -8, // V
      0, -1,  2,  3, -4,  1,  3,  0,  1, -2, -3,  1, -2, -4, -1,  0,  0, -5, -3, -2,  3,  2, -1, -8, // B
      0,  0,  1,  3, -5,  3,  3,  0,  2, -2, -3,  0, -2, -5,  0,  0, -1, -6, -4, -2,  2,  3, -1, -8, // Z
      0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -1, -1, -1, -2, -1,  0,  0, -4, -2, -1, -1, -1, -1, -8, // X
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM260 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM260: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -1,  0,  0, -2,  0,  0,  1, -1,  0, -2, -1, -1, -3,  1,  1,  1, -6, -3,  0,  0,  0,  0, -7, // A
     -1,  6,  0, -1, -3,  1, -1, -3,  1, -2, -3,  3,  0, -4,  0,  0, -1,  2, -4, -2, -1,  0, -1, -7, // R
      0,  0,  2,  2, -4,  1,  1,  0,  1, -2, -3,  1, -2, -3,  0,  1,  1, -4, -2, -2,  2,  1,  0, -7, // N
      0, -1,  2,  4, -5,  2,  3,  1,  1, -2, -4,  0, -3, -5, -1,  0,  0, -7, -4, -2,  3,  3, -1, -7, // D
     -2, -3, -4, -5, 12, -5, -5, -4, -3, -2, -6, -5, -5, -4, -2,  0, -2, -7,  0, -2, -4, -5, -3, -7, // C
      0,  1,  1,  2, -5,  4,  2, -1,  3, -2, -2,  1, -1, -4,  0,  0, -1, -5, -4, -2,  1,  3,  0, -7, // Q
      0, -1,  1,  3, -5,  2,  4,  0,  1, -2, -3,  0, -2, -5,  0,  0,  0, -7, -4, -2,  3,  3, -1, -7, // E
      1, -3,  0,  1, -4, -1,  0,  5, -2, -2, -4, -2, -3, -4,  0,  1,  0, -7, -5, -1,  1,  0, -1, -7, // G
     -1,  1,  1,  1, -3,  3,  1, -2,  6, -3, -2,  0, -2, -1,  0, -1, -1, -4,  0, -2,  1,  2, -1, -7, // H
      0, -2, -2, -2, -2, -2, -2, -2, -3,  4,  2, -2,  2,  1, -2, -1,  0, -6, -1,  4, -2, -2, -1, -7, // I
     -2, -3, -3, -4, -6, -2, -3, -4, -2,  2,  6, -3,  4,  2, -2, -3, -1, -4, -1,  2, -3, -2, -1, -7, // L
     -1,  3,  1,  0, -5,  1,  0, -2,  0, -2, -3,  5,  1, -5, -1,  0,  0, -4, -5, -2,  1,  0, -1, -7, // K
     -1,  0, -2, -3, -5, -1, -2, -3, -2,  2,  4,  1,  6,  0, -2, -1,  0, -5, -2,  2, -2, -2, -1, -7, // M
     -3, -4, -3, -5, -4, -4, -5, -4, -1,  1,  2, -5,  0,  9, -4, -3, -3,  1,  7, -1, -4, -4, -2, -7, // F
      1,  0,  0, -1, -2,  0,  0,  0,  0, -2, -2, -1, -2, -4,  6,  1,  1, -5, -5, -1,  0,  0,  0, -7, // P
      1,  0,  1,  0,  0,  0,  0,  1, -1, -1, -3,  0, -1, -3,  1,  1,  1, -2, -3, -1,  1,  0,  0, -7, // S
      1, -1,  1,  0, -2, -1,  0,  0, -1,  0, -1,  0,  0, -3,  1,  1,  2, -5, -3,  0,  0,  0,  0, -7, // T
     -6,  2, -4, -7, -7, -5, -7, -7, -4, -6, -4, -4, -5,  1, -5, -2, -5, 17,  1, -7, -6, -6, -4, -7, // W
     -3, -4, -2, -4,  0, -4, -4, -5,  0, -1, -1, -5, -2,  7, -5, -3, -3,  1, 10, -2, -3, -4, -2, -7, // Y
      0, -2, -2, -2, -2, -2, -2, -1, -2,  4,  2, -2,  2, -1, -1, -1,  0, -7, -2,  4, -2, -2, -1, -7, // V
      0, -1,  2,  3, -4,  1,  3,  1,  1, -2, -3,  1, -2, -4,  0,  1,  0, -6, -3, -2,  3,  2,  0, -7, // B
      0,  0,  1,  3, -5,  3,  3,  0,  2, -2, -2,  0, -2, -4,  0,  0,  0, -6, -4, -2,  2,  3,  0, -7, // Z
      0, -1,  0, -1, -3,  0, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0,  0, -4, -2, -1,  0,  0, -1, -7, // X
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,  1, // *
];

/// PAM270 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM270: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -1,  0,  0, -2,  0,  0,  1, -1,  0, -2, -1, -1, -3,  1,  1,  1, -5, -3,  0,  0,  0,  0, -7, // A
     -1,  6,  0, -1, -3,  1, -1, -2,  1, -2, -3,  3,  0, -3,  0,  0, -1,  2, -4, -2, -1,  0, -1, -7, // R
      0,  0,  2,  2, -3,  1,  1,  0,  1, -2, -3,  1, -1, -3,  0,  1,  0, -4, -2, -2,  2,  1,  0, -7, // N
      0, -1,  2,  3, -5,  2,  3,  1,  1, -2, -4,  0, -2, -5,  0,  0,  0, -7, -4, -2,  3,  3, -1, -7, // D
     -2, -3, -3, -5, 12, -5, -5, -4, -3, -2, -6, -5, -5, -4, -2,  0, -2, -7,  0, -2, -4, -5, -3, -7, // C
      0,  1,  1,  2, -5,  4,  2, -1,  3, -2, -2,  1, -1, -4,  0,  0, -1, -5, -4, -2,  1,  3,  0, -7, // Q
      0, -1,  1,  3, -5,  2,  3,  0,  1, -2, -3,  0, -2, -5,  0,  0,  0, -7, -4, -2,  2,  3,  0, -7, // E
      1, -2,  0,  1, -4, -1,  0,  4, -2, -2, -3, -1, -3, -4,  0,  1,  0, -7, -5, -1,  1,  0, -1, -7, // G
     -1,  1,  1,  1, -3,  3,  1, -2,  6, -2, -2,  0, -2, -1,  0, -1, -1, -3,  0, -2,  1,  2, -1, -7, // H
      0, -2, -2, -2, -2, -2, -2, -2, -2,  4,  2, -2,  2,  1, -2, -1,  0, -5, -1,  3, -2, -2, -1, -7, // I
     -2, -3, -3, -4, -6, -2, -3, -3, -2,  2,  6, -2,  4,  2, -2, -3, -1, -4, -1,  2, -3, -2, -1, -7, // L
     -1,  3,  1,  0, -5,  1,  0, -1,  0, -2, -2,  4,  1, -4, -1,  0,  0, -3, -5, -2,  1,  0, -1, -7, // K
     -1,  0, -1, -2, -5, -1, -2, -3, -2,  2,  4,  1,  6,  0, -2, -1,  0, -5, -2,  2, -2, -1, -1, -7, // M
     -3, -3, -3, -5, -4, -4, -5, -4, -1,  1,  2, -4,  0,  9, -4, -3, -2,  1,  7, -1, -4, -4, -2, -7, // F
      1,  0,  0,  0, -2,  0,  0,  0,  0, -2, -2, -1, -2, -4,  5,  1,  1, -5, -4, -1,  0,  0,  0, -7, // P
      1,  0,  1,  0,  0,  0,  0,  1, -1, -1, -3,  0, -1, -3,  1,  1,  1, -2, -3, -1,  1,  0,  0, -7, // S
      1, -1,  0,  0, -2, -1,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  2, -5, -3,  0,  0,  0,  0, -7, // T
     -5,  2, -4, -7, -7, -5, -7, -7, -3, -5, -4, -3, -5,  1, -5, -2, -5, 17,  1, -7, -5, -6, -4, -7, // W
     -3, -4, -2, -4,  0, -4, -4, -5,  0, -1, -1, -5, -2,  7, -4, -3, -3,  1, 10, -2, -3, -4, -2, -7, // Y
      0, -2, -2, -2, -2, -2, -2, -1, -2,  3,  2, -2,  2, -1, -1, -1,  0, -7, -2,  4, -2, -2,  0, -7, // V
      0, -1,  2,  3, -4,  1,  2,  1,  1, -2, -3,  1, -2, -4,  0,  1,  0, -5, -3, -2,  2,  2,  0, -7, // B
      0,  0,  1,  3, -5,  3,  3,  0,  2, -2, -2,  0, -1, -4,  0,  0,  0, -6, -4, -2,  2,  3,  0, -7, // Z
      0, -1,  0, -1, -3,  0,  0, -1, -1, -1, -1, -1, -1, -2,  0,  0,  0, -4, -2,  0,  0,  0, -1, -7, // X
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,  1, // *
];

/// PAM280 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM280: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      2, -1,  0,  0, -2,  0,  0,  1, -1,  0, -2, -1, -1, -3,  1,  1,  1, -5, -3,  0,  0,  0,  0, -7, // A
     -1,  5,  0, -1, -3,  1, -1, -2,  1, -2, -3,  3,  0, -3,  0,  0, -1,  2, -4, -2,  0,  0, -1, -7, // R
      0,  0,  2,  2, -3,  1,  1,  0,  1, -2, -2,  1, -1, -3,  0,  1,  0, -4, -2, -1,  2,  1,  0, -7, // N
      0, -1,  2,  3, -5,  2,  3,  1,  1, -2, -3,  0, -2, -4,  0,  0,  0, -6, -4, -2,  3,  2,  0, -7, // D
     -2, -3, -3, -5, 12, -5, -5, -3, -3, -2, -5, -5, -5, -4, -2,  0, -2, -7,  0, -2, -4, -5, -3, -7, // C
      0,  1,  1,  2, -5,  3,  2, -1,  3, -2, -2,  1, -1, -4,  0,  0, -1, -5, -4, -2,  1,  3,  0, -7, // Q
      0, -1,  1,  3, -5,  2,  3,  0,  1, -2, -3,  0, -2, -4,  0,  0,  0, -6, -4, -2,  2,  3,  0, -7, // E
      1, -2,  0,  1, -3, -1,  0,  4, -2, -2, -3, -1, -3, -4,  0,  1,  0, -6, -5, -1,  1,  0, -1, -7, // G
     -1,  1,  1,  1, -3,  3,  1, -2,  6, -2, -2,  0, -2, -1,  0, -1, -1, -3,  0, -2,  1,  2, -1, -7, // H
      0, -2, -2, -2, -2, -2, -2, -2, -2,  4,  2, -1,  2,  1, -2, -1,  0, -5, -1,  3, -2, -2,  0, -7, // I
     -2, -3, -2, -3, -5, -2, -3, -3, -2,  2,  5, -2,  4,  2, -2, -2, -1, -4, -1,  2, -3, -2, -1, -7, // L
     -1,  3,  1,  0, -5,  1,  0, -1,  0, -1, -2,  4,  1, -4, -1,  0,  0, -3, -4, -2,  1,  0, -1, -7, // K
     -1,  0, -1, -2, -5, -1, -2, -3, -2,  2,  4,  1,  5,  0, -2, -1,  0, -5, -2,  2, -2, -1, -1, -7, // M
     -3, -3, -3, -4, -4, -4, -4, -4, -1,  1,  2, -4,  0,  9, -4, -3, -2,  1,  7, -1, -4, -4, -2, -7, // F
      1,  0,  0,  0, -2,  0,  0,  0,  0, -2, -2, -1, -2, -4,  5,  1,  1, -5, -4, -1,  0,  0,  0, -7, // P
      1,  0,  1,  0,  0,  0,  0,  1, -1, -1, -2,  0, -1, -3,  1,  1,  1, -2, -3, -1,  1,  0,  0, -7, // S
      1, -1,  0,  0, -2, -1,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  2, -5, -3,  0,  0,  0,  0, -7, // T
     -5,  2, -4, -6, -7, -5, -6, -6, -3, -5, -4, -3, -5,  1, -5, -2, -5, 17,  1, -6, -5, -6, -4, -7, // W
     -3, -4, -2, -4,  0, -4, -4, -5,  0, -1, -1, -4, -2,  7, -4, -3, -3,  1, 10, -2, -3, -4, -2, -7, // Y
      0, -2, -1, -2, -2, -2, -2, -1, -2,  3,  2, -2,  2, -1, -1, -1,  0, -6, -2,  4, -2, -2,  0, -7, // V
      0,  0,  2,  3, -4,  1,  2,  1,  1, -2, -3,  1, -2, -4,  0,  1,  0, -5, -3, -2,  2,  2,  0, -7, // B
      0,  0,  1,  2, -5,  3,  3,  0,  2, -2, -2,  0, -1, -4,  0,  0,  0, -6, -4, -2,  2,  3,  0, -7, // Z
      0, -1,  0,  0, -3,  0,  0, -1, -1,  0, -1, -1, -1, -2,  0,  0,  0, -4, -2,  0,  0,  0, -1, -7, // X
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,  1, // *
];

/// PAM290 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM290: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -2,  0,  0,  1, -1,  0, -1, -1, -1, -3,  1,  1,  1, -5, -3,  0,  0,  0,  0, -7, // A
     -1,  5,  0, -1, -3,  1, -1, -2,  1, -2, -2,  3,  0, -3,  0,  0, -1,  2, -4, -2,  0,  0, -1, -7, // R
      0,  0,  2,  2, -3,  1,  1,  0,  1, -1, -2,  1, -1, -3,  0,  1,  0, -4, -2, -1,  2,  1,  0, -7, // N
      0, -1,  2,  3, -4,  1,  3,  1,  1, -2, -3,  0, -2, -4,  0,  0,  0, -6, -4, -2,  3,  2,  0, -7, // D
     -2, -3, -3, -4, 11, -5, -4, -3, -3, -2, -5, -4, -4, -3, -2,  0, -2, -7,  0, -2, -4, -5, -2, -7, // C
      0,  1,  1,  1, -5,  3,  2, -1,  2, -2, -1,  1, -1, -4,  0,  0,  0, -5, -3, -2,  1,  3,  0, -7, // Q
      0, -1,  1,  3, -4,  2,  3,  0,  1, -2, -3,  0, -2, -4,  0,  0,  0, -6, -4, -1,  2,  3,  0, -7, // E
      1, -2,  0,  1, -3, -1,  0,  4, -2, -2, -3, -1, -2, -4,  0,  1,  0, -6, -4, -1,  1,  0, -1, -7, // G
     -1,  1,  1,  1, -3,  2,  1, -2,  5, -2, -2,  0, -2, -1,  0, -1, -1, -3,  0, -2,  1,  2,  0, -7, // H
      0, -2, -1, -2, -2, -2, -2, -2, -2,  4,  2, -1,  2,  1, -2, -1,  0, -5, -1,  3, -2, -2,  0, -7, // I
     -1, -2, -2, -3, -5, -1, -3, -3, -2,  2,  5, -2,  3,  2, -2, -2, -1, -4, -1,  2, -3, -2, -1, -7, // L
     -1,  3,  1,  0, -4,  1,  0, -1,  0, -1, -2,  4,  1, -4, -1,  0,  0, -3, -4, -2,  1,  0,  0, -7, // K
     -1,  0, -1, -2, -4, -1, -2, -2, -2,  2,  3,  1,  5,  0, -2, -1,  0, -5, -2,  2, -2, -1,  0, -7, // M
     -3, -3, -3, -4, -3, -4, -4, -4, -1,  1,  2, -4,  0,  8, -4, -3, -2,  1,  7, -1, -3, -4, -2, -7, // F
      1,  0,  0,  0, -2,  0,  0,  0,  0, -2, -2, -1, -2, -4,  5,  1,  1, -5, -4, -1,  0,  0,  0, -7, // P
      1,  0,  1,  0,  0,  0,  0,  1, -1, -1, -2,  0, -1, -3,  1,  1,  1, -2, -3, -1,  1,  0,  0, -7, // S
      1, -1,  0,  0, -2,  0,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  2, -4, -2,  0,  0,  0,  0, -7, // T
     -5,  2, -4, -6, -7, -5, -6, -6, -3, -5, -4, -3, -5,  1, -5, -2, -4, 17,  1, -6, -5, -5, -4, -7, // W
     -3, -4, -2, -4,  0, -3, -4, -4,  0, -1, -1, -4, -2,  7, -4, -3, -2,  1,  9, -2, -3, -4, -2, -7, // Y
      0, -2, -1, -2, -2, -2, -1, -1, -2,  3,  2, -2,  2, -1, -1, -1,  0, -6, -2,  4, -2, -2,  0, -7, // V
      0,  0,  2,  3, -4,  1,  2,  1,  1, -2, -3,  1, -2, -3,  0,  1,  0, -5, -3, -2,  2,  2,  0, -7, // B
      0,  0,  1,  2, -5,  3,  3,  0,  2, -2, -2,  0, -1, -4,  0,  0,  0, -5, -4, -2,  2,  3,  0, -7, // Z
      0, -1,  0,  0, -2,  0,  0, -1,  0,  0, -1,  0,  0, -2,  0,  0,  0, -4, -2,  0,  0,  0, -1, -7, // X
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,  1, // *
];

/// PAM300 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM300: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -2,  0,  0,  1, -1,  0, -1, -1, -1, -3,  1,  1,  1, -5, -3,  0,  0,  0,  0, -6, // A
     -1,  5,  0, -1, -3,  1, -1, -2,  1, -2, -2,  3,  0, -3,  0,  0,  0,  2, -4, -2,  0,  0, -1, -6, // R
      0,  0,  1,  2, -3,  1,  1,  0,  1, -1, -2,  1, -1, -2,  0,  1,  0, -4, -2, -1,  2,  1,  0, -6, // N
      0, -1,  2,  3, -4,  1,  3,  1,  1, -2, -3,  0, -2, -4,  0,  0,  0, -6, -3, -2,  2,  2,  0, -6, // D
     -2, -3, -3, -4, 11, -4, -4, -3, -3, -2, -5, -4, -4, -3, -2,  0, -2, -6,  0, -1, -4, -4, -2, -6, // C
      0,  1,  1,  1, -4,  3,  2, -1,  2, -2, -1,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -6, // Q
      0, -1,  1,  3, -4,  2,  3,  0,  1, -2, -3,  0, -2, -4,  0,  0,  0, -6, -3, -1,  2,  3,  0, -6, // E
      1, -2,  0,  1, -3, -1,  0,  4, -2, -2, -3, -1, -2, -4,  0,  1,  0, -6, -4, -1,  1,  0,  0, -6, // G
     -1,  1,  1,  1, -3,  2,  1, -2,  5, -2, -2,  0, -2, -1,  0, -1, -1, -3,  0, -2,  1,  1,  0, -6, // H
      0, -2, -1, -2, -2, -2, -2, -2, -2,  4,  2, -1,  2,  1, -1, -1,  0, -5, -1,  3, -2, -2,  0, -6, // I
     -1, -2, -2, -3, -5, -1, -3, -3, -2,  2,  5, -2,  3,  2, -2, -2, -1, -4,  0,  2, -3, -2, -1, -6, // L
     -1,  3,  1,  0, -4,  1,  0, -1,  0, -1, -2,  4,  0, -4,  0,  0,  0, -3, -4, -2,  1,  0,  0, -6, // K
     -1,  0, -1, -2, -4, -1, -2, -2, -2,  2,  3,  0,  5,  0, -1, -1,  0, -4, -2,  2, -2, -1,  0, -6, // M
     -3, -3, -2, -4, -3, -3, -4, -4, -1,  1,  2, -4,  0,  8, -3, -2, -2,  1,  7, -1, -3, -4, -2, -6, // F
      1,  0,  0,  0, -2,  0,  0,  0,  0, -1, -2,  0, -1, -3,  5,  1,  1, -5, -4, -1,  0,  0,  0, -6, // P
      1,  0,  1,  0,  0,  0,  0,  1, -1, -1, -2,  0, -1, -2,  1,  1,  1, -2, -2, -1,  1,  0,  0, -6, // S
      1,  0,  0,  0, -2,  0,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  2, -4, -2,  0,  0,  0,  0, -6, // T
     -5,  2, -4, -6, -6, -4, -6, -6, -3, -5, -4, -3, -4,  1, -5, -2, -4, 17,  1, -6, -5, -5, -4, -6, // W
     -3, -4, -2, -3,  0, -3, -3, -4,  0, -1,  0, -4, -2,  7, -4, -2, -2,  1,  9, -2, -3, -3, -2, -6, // Y
      0, -2, -1, -2, -1, -1, -1, -1, -2,  3,  2, -2,  2, -1, -1, -1,  0, -6, -2,  3, -1, -1,  0, -6, // V
      0,  0,  2,  2, -4,  1,  2,  1,  1, -2, -3,  1, -2, -3,  0,  1,  0, -5, -3, -1,  2,  2,  0, -6, // B
      0,  0,  1,  2, -4,  2,  3,  0,  1, -2, -2,  0, -1, -4,  0,  0,  0, -5, -3, -1,  2,  3,  0, -6, // Z
      0, -1,  0,  0, -2,  0,  0,  0,  0,  0, -1,  0,  0, -2,  0,  0,  0, -4, -2,  0,  0,  0, -1, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// PAM310 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM310: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -2,  0,  0,  1, -1,  0, -1, -1, -1, -2,  1,  1,  1, -5, -3,  0,  0,  0,  0, -6, // A
     -1,  5,  0, -1, -3,  1, -1, -2,  1, -1, -2,  3,  0, -3,  0,  0,  0,  2, -4, -2,  0,  0,  0, -6, // R
      0,  0,  1,  2, -3,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  1,  0, -4, -2, -1,  1,  1,  0, -6, // N
      0, -1,  2,  3, -4,  1,  3,  1,  1, -2, -3,  0, -2, -4,  0,  0,  0, -6, -3, -2,  2,  2,  0, -6, // D
     -2, -3, -3, -4, 11, -4, -4, -3, -3, -2, -5, -4, -4, -3, -2,  0, -2, -6,  1, -1, -3, -4, -2, -6, // C
      0,  1,  1,  1, -4,  3,  2, -1,  2, -1, -1,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -6, // Q
      0, -1,  1,  3, -4,  2,  3,  0,  1, -2, -2,  0, -2, -4,  0,  0,  0, -6, -3, -1,  2,  2,  0, -6, // E
      1, -2,  1,  1, -3, -1,  0,  4, -2, -2, -3, -1, -2, -3,  0,  1,  0, -6, -4, -1,  1,  0,  0, -6, // G
     -1,  1,  1,  1, -3,  2,  1, -2,  5, -2, -2,  0, -2, -1,  0, -1, -1, -3,  0, -2,  1,  1,  0, -6, // H
      0, -1, -1, -2, -2, -1, -2, -2, -2,  3,  2, -1,  2,  1, -1, -1,  0, -5, -1,  3, -2, -1,  0, -6, // I
     -1, -2, -2, -3, -5, -1, -2, -3, -2,  2,  5, -2,  3,  2, -2, -2, -1, -4,  0,  2, -3, -2, -1, -6, // L
     -1,  3,  1,  0, -4,  1,  0, -1,  0, -1, -2,  4,  0, -4,  0,  0,  0, -3, -4, -2,  1,  1,  0, -6, // K
     -1,  0, -1, -2, -4, -1, -2, -2, -2,  2,  3,  0,  5,  0, -1, -1,  0, -4, -2,  2, -2, -1,  0, -6, // M
     -2, -3, -2, -4, -3, -3, -4, -3, -1,  1,  2, -4,  0,  8, -3, -2, -2,  1,  7, -1, -3, -4, -1, -6, // F
      1,  0,  0,  0, -2,  0,  0,  0,  0, -1, -2,  0, -1, -3,  5,  1,  1, -5, -4, -1,  0,  0,  0, -6, // P
      1,  0,  1,  0,  0,  0,  0,  1, -1, -1, -2,  0, -1, -2,  1,  1,  1, -2, -2, -1,  1,  0,  0, -6, // S
      1,  0,  0,  0, -2,  0,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  2, -4, -2,  0,  0,  0,  0, -6, // T
     -5,  2, -4, -6, -6, -4, -6, -6, -3, -5, -4, -3, -4,  1, -5, -2, -4, 17,  1, -6, -5, -5, -4, -6, // W
     -3, -4, -2, -3,  1, -3, -3, -4,  0, -1,  0, -4, -2,  7, -4, -2, -2,  1,  9, -2, -3, -3, -2, -6, // Y
      0, -2, -1, -2, -1, -1, -1, -1, -2,  3,  2, -2,  2, -1, -1, -1,  0, -6, -2,  3, -1, -1,  0, -6, // V
      0,  0,  1,  2, -3,  1,  2,  1,  1, -2, -3,  1, -2, -3,  0,  1,  0, -5, -3, -1,  2,  2,  0, -6, // B
      0,  0,  1,  2, -4,  2,  2,  0,  1, -1, -2,  1, -1, -4,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0, -1,  0,  0, -1,  0,  0,  0, -4, -2,  0,  0,  0, -1, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// PAM320 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM320: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -2,  0,  0,  1, -1,  0, -1, -1, -1, -2,  1,  1,  1, -5, -3,  0,  0,  0,  0, -6, // A
     -1,  5,  0, -1, -3,  1,  0, -2,  1, -1, -2,  3,  0, -3,  0,  0,  0,  2, -3, -2,  0,  0,  0, -6, // R
      0,  0,  1,  2, -3,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  1,  0, -4, -2, -1,  1,  1,  0, -6, // N
      0, -1,  2,  3, -4,  1,  3,  1,  1, -2, -3,  0, -2, -4,  0,  0,  0, -6, -3, -1,  2,  2,  0, -6, // D
     -2, -3, -3, -4, 11, -4, -4, -3, -3, -2, -5, -4, -4, -3, -2,  0, -1, -6,  1, -1, -3, -4, -2, -6, // C
      0,  1,  1,  1, -4,  3,  2, -1,  2, -1, -1,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -6, // Q
      0,  0,  1,  3, -4,  2,  3,  0,  1, -1, -2,  0, -1, -4,  0,  0,  0, -6, -3, -1,  2,  2,  0, -6, // E
      1, -2,  1,  1, -3, -1,  0,  4, -1, -2, -3, -1, -2, -3,  0,  1,  0, -6, -4, -1,  1,  0,  0, -6, // G
     -1,  1,  1,  1, -3,  2,  1, -1,  5, -2, -2,  0, -2, -1,  0,  0, -1, -3,  0, -2,  1,  1,  0, -6, // H
      0, -1, -1, -2, -2, -1, -1, -2, -2,  3,  2, -1,  2,  1, -1, -1,  0, -5, -1,  3, -1, -1,  0, -6, // I
     -1, -2, -2, -3, -5, -1, -2, -3, -2,  2,  5, -2,  3,  2, -2, -2, -1, -4,  0,  2, -2, -2, -1, -6, // L
     -1,  3,  1,  0, -4,  1,  0, -1,  0, -1, -2,  4,  0, -4,  0,  0,  0, -3, -4, -1,  1,  1,  0, -6, // K
     -1,  0, -1, -2, -4, -1, -1, -2, -2,  2,  3,  0,  4,  0, -1, -1,  0, -4, -2,  2, -1, -1,  0, -6, // M
     -2, -3, -2, -4, -3, -3, -4, -3, -1,  1,  2, -4,  0,  8, -3, -2, -2,  1,  7, -1, -3, -3, -1, -6, // F
      1,  0,  0,  0, -2,  0,  0,  0,  0, -1, -2,  0, -1, -3,  4,  1,  1, -4, -4, -1,  0,  0,  0, -6, // P
      1,  0,  1,  0,  0,  0,  0,  1,  0, -1, -2,  0, -1, -2,  1,  1,  1, -2, -2, -1,  1,  0,  0, -6, // S
      1,  0,  0,  0, -1,  0,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  2, -4, -2,  0,  0,  0,  0, -6, // T
     -5,  2, -4, -6, -6, -4, -6, -6, -3, -5, -4, -3, -4,  1, -4, -2, -4, 16,  1, -6, -5, -5, -3, -6, // W
     -3, -3, -2, -3,  1, -3, -3, -4,  0, -1,  0, -4, -2,  7, -4, -2, -2,  1,  9, -2, -2, -3, -2, -6, // Y
      0, -2, -1, -1, -1, -1, -1, -1, -2,  3,  2, -1,  2, -1, -1, -1,  0, -6, -2,  3, -1, -1,  0, -6, // V
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  1, -1, -3,  0,  1,  0, -5, -2, -1,  2,  2,  0, -6, // B
      0,  0,  1,  2, -4,  2,  2,  0,  1, -1, -2,  1, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0, -1,  0,  0, -1,  0,  0,  0, -3, -2,  0,  0,  0,  0, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// PAM330 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM330: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -2,  0,  0,  1, -1,  0, -1,  0, -1, -2,  1,  1,  1, -5, -2,  0,  0,  0,  0, -6, // A
     -1,  4,  0, -1, -3,  1,  0, -2,  1, -1, -2,  3,  0, -3,  0,  0,  0,  2, -3, -2,  0,  0,  0, -6, // R
      0,  0,  1,  1, -3,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  1,  0, -4, -2, -1,  1,  1,  0, -6, // N
      0, -1,  1,  3, -4,  1,  2,  1,  1, -2, -3,  0, -2, -4,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // D
     -2, -3, -3, -4, 11, -4, -4, -3, -3, -2, -4, -4, -4, -3, -2,  0, -1, -6,  1, -1, -3, -4, -2, -6, // C
      0,  1,  1,  1, -4,  2,  2, -1,  2, -1, -1,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -6, // Q
      0,  0,  1,  2, -4,  2,  3,  0,  1, -1, -2,  0, -1, -4,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // E
      1, -2,  1,  1, -3, -1,  0,  4, -1, -2, -3, -1, -2, -3,  0,  1,  0, -5, -4, -1,  1,  0,  0, -6, // G
     -1,  1,  1,  1, -3,  2,  1, -1,  4, -2, -2,  0, -1, -1,  0,  0, -1, -3,  0, -2,  1,  1,  0, -6, // H
      0, -1, -1, -2, -2, -1, -1, -2, -2,  3,  2, -1,  2,  1, -1, -1,  0, -4,  0,  3, -1, -1,  0, -6, // I
     -1, -2, -2, -3, -4, -1, -2, -3, -2,  2,  5, -2,  3,  2, -2, -2, -1, -3,  0,  2, -2, -2, -1, -6, // L
      0,  3,  1,  0, -4,  1,  0, -1,  0, -1, -2,  3,  0, -3,  0,  0,  0, -3, -4, -1,  1,  1,  0, -6, // K
     -1,  0, -1, -2, -4, -1, -1, -2, -1,  2,  3,  0,  4,  0, -1, -1,  0, -4, -2,  2, -1, -1,  0, -6, // M
     -2, -3, -2, -4, -3, -3, -4, -3, -1,  1,  2, -3,  0,  8, -3, -2, -2,  1,  7,  0, -3, -3, -1, -6, // F
      1,  0,  0,  0, -2,  0,  0,  0,  0, -1, -2,  0, -1, -3,  4,  1,  1, -4, -3, -1,  0,  0,  0, -6, // P
      1,  0,  1,  0,  0,  0,  0,  1,  0, -1, -2,  0, -1, -2,  1,  1,  1, -2, -2, -1,  1,  0,  0, -6, // S
      1,  0,  0,  0, -1,  0,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -6, // T
     -5,  2, -4, -5, -6, -4, -5, -5, -3, -4, -3, -3, -4,  1, -4, -2, -4, 16,  1, -5, -4, -5, -3, -6, // W
     -2, -3, -2, -3,  1, -3, -3, -4,  0,  0,  0, -4, -2,  7, -3, -2, -2,  1,  9, -2, -2, -3, -2, -6, // Y
      0, -2, -1, -1, -1, -1, -1, -1, -2,  3,  2, -1,  2,  0, -1, -1,  0, -5, -2,  3, -1, -1,  0, -6, // V
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  1, -1, -3,  0,  1,  0, -4, -2, -1,  2,  2,  0, -6, // B
      0,  0,  1,  2, -4,  2,  2,  0,  1, -1, -2,  1, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0, -1,  0,  0, -1,  0,  0,  0, -3, -2,  0,  0,  0,  0, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// PAM340 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM340: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -1,  0,  0,  1, -1,  0, -1,  0, -1, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -6, // A
     -1,  4,  0,  0, -3,  1,  0, -2,  1, -1, -2,  3,  0, -3,  0,  0,  0,  2, -3, -2,  0,  0,  0, -6, // R
      0,  0,  1,  1, -3,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  1,  0, -3, -2, -1,  1,  1,  0, -6, // N
      0,  0,  1,  2, -4,  1,  2,  1,  1, -1, -3,  0, -2, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // D
     -1, -3, -3, -4, 11, -4, -4, -3, -3, -2, -4, -4, -4, -3, -2,  0, -1, -6,  1, -1, -3, -4, -2, -6, // C
      0,  1,  1,  1, -4,  2,  2,  0,  2, -1, -1,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -6, // Q
      0,  0,  1,  2, -4,  2,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // E
      1, -2,  1,  1, -3,  0,  1,  3, -1, -2, -3, -1, -2, -3,  0,  1,  0, -5, -4, -1,  1,  0,  0, -6, // G
     -1,  1,  1,  1, -3,  2,  1, -1,  4, -2, -2,  0, -1, -1,  0,  0, -1, -3,  0, -2,  1,  1,  0, -6, // H
      0, -1, -1, -1, -2, -1, -1, -2, -2,  3,  2, -1,  2,  1, -1, -1,  0, -4,  0,  3, -1, -1,  0, -6, // I
     -1, -2, -2, -3, -4, -1, -2, -3, -2,  2,  5, -2,  3,  2, -1, -2, -1, -3,  0,  2, -2, -2, -1, -6, // L
      0,  3,  1,  0, -4,  1,  0, -1,  0, -1, -2,  3,  0, -3,  0,  0,  0, -3, -4, -1,  1,  1,  0, -6, // K
     -1,  0, -1, -2, -4, -1, -1, -2, -1,  2,  3,  0,  4,  0, -1, -1,  0, -4, -1,  2, -1, -1,  0, -6, // M
     -2, -3, -2, -3, -3, -3, -3, -3, -1,  1,  2, -3,  0,  8, -3, -2, -2,  1,  7,  0, -3, -3, -1, -6, // F
      1,  0,  0,  0, -2,  0,  0,  0,  0, -1, -1,  0, -1, -3,  4,  1,  1, -4, -3, -1,  0,  0,  0, -6, // P
      1,  0,  1,  0,  0,  0,  0,  1,  0, -1, -2,  0, -1, -2,  1,  1,  1, -2, -2, -1,  0,  0,  0, -6, // S
      1,  0,  0,  0, -1,  0,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -6, // T
     -4,  2, -3, -5, -6, -4, -5, -5, -3, -4, -3, -3, -4,  1, -4, -2, -4, 16,  1, -5, -4, -5, -3, -6, // W
     -2, -3, -2, -3,  1, -3, -3, -4,  0,  0,  0, -4, -1,  7, -3, -2, -2,  1,  9, -2, -2, -3, -1, -6, // Y
      0, -2, -1, -1, -1, -1, -1, -1, -2,  3,  2, -1,  2,  0, -1, -1,  0, -5, -2,  3, -1, -1,  0, -6, // V
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  1, -1, -3,  0,  0,  0, -4, -2, -1,  2,  2,  0, -6, // B
      0,  0,  1,  2, -4,  2,  2,  0,  1, -1, -2,  1, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0, -1,  0,  0, -1,  0,  0,  0, -3, -1,  0,  0,  0,  0, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// PAM350 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM350: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -1,  0,  0,  1, -1,  0, -1,  0, -1, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -6, // A
     -1,  4,  0,  0, -3,  1,  0, -1,  1, -1, -2,  3,  0, -3,  0,  0,  0,  2, -3, -1,  0,  0,  0, -6, // R
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  1,  0, -3, -2, -1,  1,  1,  0, -6, // N
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // D
     -1, -3, -2, -3, 11, -4, -4, -3, -2, -2, -4, -4, -4, -3, -2,  0, -1, -6,  1, -1, -3, -4, -2, -6, // C
      0,  1,  1,  1, -4,  2,  2,  0,  2, -1, -1,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -6, // Q
      0,  0,  1,  2, -4,  2,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -6, // E
      1, -1,  1,  1, -3,  0,  1,  3, -1, -1, -2, -1, -2, -3,  0,  1,  0, -5, -3, -1,  1,  0,  0, -6, // G
     -1,  1,  1,  1, -2,  2,  1, -1,  4, -2, -2,  0, -1, -1,  0,  0, -1, -3,  0, -2,  1,  1,  0, -6, // H
      0, -1, -1, -1, -2, -1, -1, -1, -2,  3,  2, -1,  2,  1, -1, -1,  0, -4,  0,  2, -1, -1,  0, -6, // I
     -1, -2, -2, -2, -4, -1, -2, -2, -2,  2,  5, -2,  3,  2, -1, -2, -1, -3,  0,  2, -2, -2, -1, -6, // L
      0,  3,  1,  0, -4,  1,  0, -1,  0, -1, -2,  3,  0, -3,  0,  0,  0, -2, -3, -1,  1,  1,  0, -6, // K
     -1,  0, -1, -1, -4, -1, -1, -2, -1,  2,  3,  0,  4,  0, -1, -1,  0, -4, -1,  1, -1, -1,  0, -6, // M
     -2, -3, -2, -3, -3, -3, -3, -3, -1,  1,  2, -3,  0,  8, -3, -2, -2,  1,  7,  0, -3, -3, -1, -6, // F
      1,  0,  0,  0, -2,  0,  0,  0,  0, -1, -1,  0, -1, -3,  4,  1,  1, -4, -3, -1,  0,  0,  0, -6, // P
      1,  0,  1,  0,  0,  0,  0,  1,  0, -1, -2,  0, -1, -2,  1,  1,  1, -2, -2, -1,  0,  0,  0, -6, // S
      1,  0,  0,  0, -1,  0,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -6, // T
     -4,  2, -3, -5, -6, -4, -5, -5, -3, -4, -3, -2, -4,  1, -4, -2, -4, 16,  1, -5, -4, -4, -3, -6, // W
     -2, -3, -2, -3,  1, -3, -3, -3,  0,  0,  0, -3, -1,  7, -3, -2, -2,  1,  8, -1, -2, -3, -1, -6, // Y
      0, -1, -1, -1, -1, -1, -1, -1, -2,  2,  2, -1,  1,  0, -1, -1,  0, -5, -1,  3, -1, -1,  0, -6, // V
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  1, -1, -3,  0,  0,  0, -4, -2, -1,  2,  1,  0, -6, // B
      0,  0,  1,  2, -4,  2,  2,  0,  1, -1, -2,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -6, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0, -1,  0,  0, -1,  0,  0,  0, -3, -1,  0,  0,  0,  0, -6, // X
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,  1, // *
];

/// PAM360 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM360: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -1,  0,  0,  1, -1,  0, -1,  0, -1, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -5, // A
     -1,  4,  0,  0, -2,  1,  0, -1,  1, -1, -2,  3,  0, -3,  0,  0,  0,  2, -3, -1,  0,  0,  0, -5, // R
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -5, // N
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -5, // D
     -1, -2, -2, -3, 11, -4, -3, -2, -2, -2, -4, -3, -3, -3, -1,  0, -1, -5,  1, -1, -3, -3, -2, -5, // C
      0,  1,  1,  1, -4,  2,  2,  0,  2, -1, -1,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -5, // Q
      0,  0,  1,  2, -3,  2,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -5, // E
      1, -1,  1,  1, -2,  0,  1,  3, -1, -1, -2, -1, -2, -3,  0,  1,  0, -5, -3, -1,  1,  0,  0, -5, // G
     -1,  1,  1,  1, -2,  2,  1, -1,  4, -2, -1,  0, -1, -1,  0,  0, -1, -3,  0, -2,  1,  1,  0, -5, // H
      0, -1, -1, -1, -2, -1, -1, -1, -2,  3,  2, -1,  2,  1, -1, -1,  0, -4,  0,  2, -1, -1,  0, -5, // I
     -1, -2, -2, -2, -4, -1, -2, -2, -1,  2,  4, -2,  3,  2, -1, -2, -1, -3,  0,  2, -2, -2, -1, -5, // L
      0,  3,  1,  0, -3,  1,  0, -1,  0, -1, -2,  3,  0, -3,  0,  0,  0, -2, -3, -1,  1,  1,  0, -5, // K
     -1,  0, -1, -1, -3, -1, -1, -2, -1,  2,  3,  0,  3,  1, -1, -1,  0, -4, -1,  1, -1, -1,  0, -5, // M
     -2, -3, -2, -3, -3, -3, -3, -3, -1,  1,  2, -3,  1,  7, -3, -2, -2,  1,  6,  0, -3, -3, -1, -5, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -3,  4,  1,  1, -4, -3, -1,  0,  0,  0, -5, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0, -1, -2,  0, -1, -2,  1,  1,  1, -2, -2,  0,  0,  0,  0, -5, // S
      1,  0,  0,  0, -1,  0,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -5, // T
     -4,  2, -3, -5, -5, -4, -5, -5, -3, -4, -3, -2, -4,  1, -4, -2, -4, 16,  1, -5, -4, -4, -3, -5, // W
     -2, -3, -2, -3,  1, -3, -3, -3,  0,  0,  0, -3, -1,  6, -3, -2, -2,  1,  8, -1, -2, -3, -1, -5, // Y
      0, -1, -1, -1, -1, -1, -1, -1, -2,  2,  2, -1,  1,  0, -1,  0,  0, -5, -1,  3, -1, -1,  0, -5, // V
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  1, -1, -3,  0,  0,  0, -4, -2, -1,  2,  1,  0, -5, // B
      0,  0,  1,  2, -3,  2,  2,  0,  1, -1, -2,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -5, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0, -1,  0,  0, -1,  0,  0,  0, -3, -1,  0,  0,  0,  0, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// PAM370 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM370: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -1,  0,  0,  1, -1,  0, -1,  0, -1, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -5, // A
     -1,  4,  0,  0, -2,  1,  0, -1,  1, -1, -2,  2,  0, -2,  0,  0,  0,  2, -3, -1,  0,  0,  0, -5, // R
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -3, -1, -1,  1,  1,  0, -5, // N
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -5, // D
     -1, -2, -2, -3, 11, -3, -3, -2, -2, -1, -4, -3, -3, -2, -1,  0, -1, -5,  1, -1, -3, -3, -2, -5, // C
      0,  1,  1,  1, -3,  2,  1,  0,  2, -1, -1,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -5, // Q
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -5, // E
      1, -1,  1,  1, -2,  0,  1,  3, -1, -1, -2, -1, -2, -3,  0,  1,  0, -5, -3, -1,  1,  0,  0, -5, // G
     -1,  1,  1,  1, -2,  2,  1, -1,  4, -1, -1,  0, -1, -1,  0,  0, -1, -2,  0, -1,  1,  1,  0, -5, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  3,  2, -1,  2,  1, -1, -1,  0, -4,  0,  2, -1, -1,  0, -5, // I
     -1, -2, -2, -2, -4, -1, -2, -2, -1,  2,  4, -2,  3,  2, -1, -2, -1, -3,  0,  2, -2, -2, -1, -5, // L
      0,  2,  1,  0, -3,  1,  0, -1,  0, -1, -2,  3,  0, -3,  0,  0,  0, -2, -3, -1,  1,  1,  0, -5, // K
     -1,  0, -1, -1, -3, -1, -1, -2, -1,  2,  3,  0,  3,  1, -1, -1,  0, -3, -1,  1, -1, -1,  0, -5, // M
     -2, -2, -2, -3, -2, -3, -3, -3, -1,  1,  2, -3,  1,  7, -3, -2, -2,  1,  6,  0, -2, -3, -1, -5, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -3,  4,  1,  1, -4, -3, -1,  0,  0,  0, -5, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0, -1, -2,  0, -1, -2,  1,  1,  1, -2, -2,  0,  0,  0,  0, -5, // S
      1,  0,  0,  0, -1,  0,  0,  0, -1,  0, -1,  0,  0, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -5, // T
     -4,  2, -3, -5, -5, -4, -5, -5, -2, -4, -3, -2, -3,  1, -4, -2, -4, 16,  1, -5, -4, -4, -3, -5, // W
     -2, -3, -1, -3,  1, -3, -3, -3,  0,  0,  0, -3, -1,  6, -3, -2, -2,  1,  8, -1, -2, -3, -1, -5, // Y
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  0, -1,  0,  0, -5, -1,  2, -1, -1,  0, -5, // V
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // B
      0,  0,  1,  2, -3,  2,  2,  0,  1, -1, -2,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -5, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0, -1,  0,  0, -1,  0,  0,  0, -3, -1,  0,  0,  0,  0, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// PAM380 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM380: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -1,  0,  0,  1, -1,  0, -1,  0, -1, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -5, // A
     -1,  4,  0,  0, -2,  1,  0, -1,  1, -1, -2,  2,  0, -2,  0,  0,  0,  2, -3, -1,  0,  0,  0, -5, // R
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -3, -1, -1,  1,  1,  0, -5, // N
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -5, // D
     -1, -2, -2, -3, 10, -3, -3, -2, -2, -1, -4, -3, -3, -2, -1,  0, -1, -5,  1, -1, -3, -3, -2, -5, // C
      0,  1,  1,  1, -3,  2,  1,  0,  2, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  2,  0, -5, // Q
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -5, -3, -1,  2,  2,  0, -5, // E
      1, -1,  1,  1, -2,  0,  1,  3, -1, -1, -2, -1, -2, -3,  0,  1,  0, -5, -3, -1,  1,  0,  0, -5, // G
     -1,  1,  1,  1, -2,  2,  1, -1,  3, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -5, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  2,  1, -1, -1,  0, -4,  0,  2, -1, -1,  0, -5, // I
     -1, -2, -2, -2, -4, -1, -2, -2, -1,  2,  4, -1,  3,  2, -1, -1, -1, -3,  0,  2, -2, -1, -1, -5, // L
      0,  2,  1,  0, -3,  1,  0, -1,  0, -1, -1,  3,  0, -3,  0,  0,  0, -2, -3, -1,  1,  1,  0, -5, // K
     -1,  0, -1, -1, -3, -1, -1, -2, -1,  2,  3,  0,  3,  1, -1, -1,  0, -3, -1,  1, -1, -1,  0, -5, // M
     -2, -2, -2, -3, -2, -2, -3, -3, -1,  1,  2, -3,  1,  7, -2, -2, -2,  1,  6,  0, -2, -3, -1, -5, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -2,  3,  1,  1, -4, -3,  0,  0,  0,  0, -5, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0, -1, -1,  0, -1, -2,  1,  1,  1, -2, -2,  0,  0,  0,  0, -5, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -2,  1,  1,  1, -3, -2,  0,  0,  0,  0, -5, // T
     -4,  2, -3, -5, -5, -3, -5, -5, -2, -4, -3, -2, -3,  1, -4, -2, -3, 16,  1, -5, -4, -4, -3, -5, // W
     -2, -3, -1, -3,  1, -2, -3, -3,  0,  0,  0, -3, -1,  6, -3, -2, -2,  1,  8, -1, -2, -3, -1, -5, // Y
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  0,  0,  0,  0, -5, -1,  2, -1, -1,  0, -5, // V
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // B
      0,  0,  1,  2, -3,  2,  2,  0,  1, -1, -1,  1, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -5, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0, -1,  0,  0, -1,  0,  0,  0, -3, -1,  0,  0,  0,  0, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// PAM390 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM390: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0, -1, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -5, // A
     -1,  3,  0,  0, -2,  1,  0, -1,  1, -1, -2,  2,  0, -2,  0,  0,  0,  2, -3, -1,  0,  0,  0, -5, // R
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -3, -1, -1,  1,  1,  0, -5, // N
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -4, -3, -1,  2,  2,  0, -5, // D
     -1, -2, -2, -3, 10, -3, -3, -2, -2, -1, -4, -3, -3, -2, -1,  0, -1, -5,  1, -1, -3, -3, -2, -5, // C
      0,  1,  1,  1, -3,  2,  1,  0,  2, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  2,  0, -5, // Q
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -4, -3, -1,  1,  2,  0, -5, // E
      1, -1,  1,  1, -2,  0,  1,  3, -1, -1, -2, -1, -1, -3,  0,  1,  0, -5, -3, -1,  1,  0,  0, -5, // G
      0,  1,  1,  1, -2,  2,  1, -1,  3, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -5, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  2,  1, -1, -1,  0, -4,  0,  2, -1, -1,  0, -5, // I
     -1, -2, -2, -2, -4, -1, -2, -2, -1,  2,  4, -1,  3,  2, -1, -1, -1, -3,  0,  2, -2, -1,  0, -5, // L
      0,  2,  1,  0, -3,  1,  0, -1,  0, -1, -1,  3,  0, -3,  0,  0,  0, -2, -3, -1,  1,  1,  0, -5, // K
     -1,  0, -1, -1, -3, -1, -1, -1, -1,  2,  3,  0,  3,  1, -1, -1,  0, -3, -1,  1, -1, -1,  0, -5, // M
     -2, -2, -2, -3, -2, -2, -3, -3, -1,  1,  2, -3,  1,  7, -2, -2, -1,  1,  6,  0, -2, -3, -1, -5, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -2,  3,  1,  1, -4, -3,  0,  0,  0,  0, -5, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0, -1, -1,  0, -1, -2,  1,  1,  1, -2, -2,  0,  0,  0,  0, -5, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -1,  1,  1,  1, -3, -2,  0,  0,  0,  0, -5, // T
     -4,  2, -3, -4, -5, -3, -4, -5, -2, -4, -3, -2, -3,  1, -4, -2, -3, 16,  1, -4, -4, -4, -3, -5, // W
     -2, -3, -1, -3,  1, -2, -3, -3,  0,  0,  0, -3, -1,  6, -3, -2, -2,  1,  8, -1, -2, -2, -1, -5, // Y
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  0,  0,  0,  0, -4, -1,  2, -1, -1,  0, -5, // V
      0,  0,  1,  2, -3,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // B
      0,  0,  1,  2, -3,  2,  2,  0,  1, -1, -1,  1, -1, -3,  0,  0,  0, -4, -2, -1,  1,  2,  0, -5, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0,  0,  0,  0, -1,  0,  0,  0, -3, -1,  0,  0,  0,  0, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// PAM400 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM400: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -5, // A
     -1,  3,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -3, -1,  0,  0,  0, -5, // R
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -1, -1,  1,  1,  0, -5, // N
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -4, -3, -1,  2,  2,  0, -5, // D
     -1, -2, -2, -3, 10, -3, -3, -2, -2, -1, -3, -3, -3, -2, -1,  0, -1, -5,  1, -1, -2, -3, -2, -5, // C
      0,  1,  1,  1, -3,  2,  1,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -5, // Q
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -4, -2, -1,  1,  2,  0, -5, // E
      1, -1,  1,  1, -2,  0,  1,  3, -1, -1, -2,  0, -1, -3,  0,  1,  0, -4, -3, -1,  1,  0,  0, -5, // G
      0,  1,  1,  1, -2,  1,  1, -1,  3, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -5, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  2,  1, -1, -1,  0, -4,  0,  2, -1, -1,  0, -5, // I
     -1, -1, -1, -2, -3, -1, -2, -2, -1,  2,  4, -1,  3,  2, -1, -1, -1, -3,  0,  2, -2, -1,  0, -5, // L
      0,  2,  1,  0, -3,  1,  0,  0,  0, -1, -1,  3,  0, -3,  0,  0,  0, -2, -3, -1,  1,  1,  0, -5, // K
      0,  0, -1, -1, -3, -1, -1, -1, -1,  2,  3,  0,  3,  1, -1, -1,  0, -3, -1,  1, -1, -1,  0, -5, // M
     -2, -2, -2, -3, -2, -2, -3, -3, -1,  1,  2, -3,  1,  7, -2, -2, -1,  1,  6,  0, -2, -2, -1, -5, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -2,  3,  1,  1, -4, -3,  0,  0,  0,  0, -5, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0, -1, -1,  0, -1, -2,  1,  1,  1, -2, -2,  0,  0,  0,  0, -5, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -1,  1,  1,  1, -3, -2,  0,  0,  0,  0, -5, // T
     -4,  2, -3, -4, -5, -3, -4, -4, -2, -4, -3, -2, -3,  1, -4, -2, -3, 16,  1, -4, -4, -4, -3, -5, // W
     -2, -3, -1, -3,  1, -2, -2, -3,  0,  0,  0, -3, -1,  6, -3, -2, -2,  1,  8, -1, -2, -2, -1, -5, // Y
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  0,  0,  0,  0, -4, -1,  2, -1, -1,  0, -5, // V
      0,  0,  1,  2, -2,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // B
      0,  0,  1,  2, -3,  1,  2,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -4, -2, -1,  1,  2,  0, -5, // Z
      0,  0,  0,  0, -2,  0,  0,  0,  0,  0,  0,  0,  0, -1,  0,  0,  0, -3, -1,  0,  0,  0,  0, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// PAM410 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM410: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1, -1,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -5, // A
     -1,  3,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -5, // R
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -1, -1,  1,  1,  0, -5, // N
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // D
     -1, -2, -2, -3, 10, -3, -3, -2, -2, -1, -3, -3, -3, -2, -1,  0, -1, -5,  1, -1, -2, -3, -1, -5, // C
      0,  1,  1,  1, -3,  2,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -5, // Q
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -4, -2, -1,  1,  2,  0, -5, // E
      1, -1,  1,  1, -2,  0,  1,  3, -1, -1, -2,  0, -1, -2,  0,  1,  0, -4, -3, -1,  1,  0,  0, -5, // G
      0,  1,  1,  1, -2,  1,  1, -1,  3, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -5, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  1, -1, -1,  0, -3,  0,  2, -1, -1,  0, -5, // I
     -1, -1, -1, -2, -3, -1, -2, -2, -1,  2,  4, -1,  3,  2, -1, -1, -1, -3,  0,  2, -2, -1,  0, -5, // L
      0,  2,  1,  0, -3,  1,  0,  0,  0, -1, -1,  3,  0, -3,  0,  0,  0, -2, -3, -1,  1,  1,  0, -5, // K
      0,  0, -1, -1, -3,  0, -1, -1, -1,  1,  3,  0,  3,  1, -1, -1,  0, -3, -1,  1, -1, -1,  0, -5, // M
     -2, -2, -2, -3, -2, -2, -3, -2, -1,  1,  2, -3,  1,  7, -2, -2, -1,  1,  6,  0, -2, -2, -1, -5, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -2,  3,  1,  1, -3, -3,  0,  0,  0,  0, -5, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0, -1, -1,  0, -1, -2,  1,  1,  1, -2, -2,  0,  0,  0,  0, -5, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -1,  1,  1,  1, -3, -2,  0,  0,  0,  0, -5, // T
     -4,  2, -3, -4, -5, -3, -4, -4, -2, -3, -3, -2, -3,  1, -3, -2, -3, 16,  1, -4, -4, -4, -3, -5, // W
     -2, -2, -1, -2,  1, -2, -2, -3,  0,  0,  0, -3, -1,  6, -3, -2, -2,  1,  8, -1, -2, -2, -1, -5, // Y
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  0,  0,  0,  0, -4, -1,  2, -1, -1,  0, -5, // V
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // B
      0,  0,  1,  1, -3,  1,  2,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  0,  0,  0, -3, -1,  0,  0,  0,  0, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// PAM420 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM420: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1,  0,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -2,  1,  1,  1, -4, -2,  0,  0,  0,  0, -5, // A
      0,  3,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -5, // R
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -1, -1,  1,  1,  0, -5, // N
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -3,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // D
     -1, -2, -2, -3, 10, -3, -3, -2, -2, -1, -3, -3, -3, -2, -1,  0, -1, -5,  1, -1, -2, -3, -1, -5, // C
      0,  1,  1,  1, -3,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -5, // Q
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // E
      1, -1,  1,  1, -2,  0,  1,  2, -1, -1, -2,  0, -1, -2,  0,  1,  0, -4, -3, -1,  1,  0,  0, -5, // G
      0,  1,  1,  1, -2,  1,  1, -1,  3, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -5, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  1, -1, -1,  0, -3,  0,  2, -1, -1,  0, -5, // I
     -1, -1, -1, -2, -3, -1, -2, -2, -1,  2,  4, -1,  2,  2, -1, -1, -1, -3,  0,  1, -2, -1,  0, -5, // L
      0,  2,  1,  0, -3,  1,  0,  0,  0, -1, -1,  2,  0, -2,  0,  0,  0, -2, -3, -1,  1,  1,  0, -5, // K
      0,  0, -1, -1, -3,  0, -1, -1, -1,  1,  2,  0,  2,  1, -1, -1,  0, -3, -1,  1, -1, -1,  0, -5, // M
     -2, -2, -2, -3, -2, -2, -2, -2, -1,  1,  2, -2,  1,  7, -2, -2, -1,  1,  6,  0, -2, -2, -1, -5, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -2,  3,  1,  1, -3, -2,  0,  0,  0,  0, -5, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0, -1, -1,  0, -1, -2,  1,  1,  1, -2, -2,  0,  0,  0,  0, -5, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -1,  1,  1,  1, -3, -2,  0,  0,  0,  0, -5, // T
     -4,  2, -3, -4, -5, -3, -4, -4, -2, -3, -3, -2, -3,  1, -3, -2, -3, 15,  1, -4, -3, -4, -2, -5, // W
     -2, -2, -1, -2,  1, -2, -2, -3,  0,  0,  0, -3, -1,  6, -2, -2, -2,  1,  8, -1, -2, -2, -1, -5, // Y
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  1, -1,  1,  0,  0,  0,  0, -4, -1,  2, -1, -1,  0, -5, // V
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -2,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -5, // B
      0,  0,  1,  1, -3,  1,  1,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  0,  0,  0, -2, -1,  0,  0,  0,  0, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// PAM430 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM430: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1,  0,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  1,  1, -3, -2,  0,  0,  0,  0, -5, // A
      0,  3,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -5, // R
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  1, -1, -1,  0,  0,  0, -3, -1, -1,  1,  1,  0, -5, // N
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -2,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // D
     -1, -2, -2, -3, 10, -3, -3, -2, -2, -1, -3, -3, -3, -2, -1,  0, -1, -5,  1, -1, -2, -3, -1, -5, // C
      0,  1,  1,  1, -3,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -5, // Q
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -1,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // E
      1, -1,  1,  1, -2,  0,  1,  2, -1, -1, -2,  0, -1, -2,  0,  1,  0, -4, -3, -1,  1,  0,  0, -5, // G
      0,  1,  1,  1, -2,  1,  1, -1,  3, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -5, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  1, -1, -1,  0, -3,  0,  2, -1, -1,  0, -5, // I
     -1, -1, -1, -2, -3, -1, -1, -2, -1,  2,  4, -1,  2,  2, -1, -1, -1, -2,  0,  1, -1, -1,  0, -5, // L
      0,  2,  1,  0, -3,  1,  0,  0,  0, -1, -1,  2,  0, -2,  0,  0,  0, -2, -3, -1,  1,  1,  0, -5, // K
      0,  0, -1, -1, -3,  0, -1, -1, -1,  1,  2,  0,  2,  1, -1, -1,  0, -3, -1,  1, -1, -1,  0, -5, // M
     -1, -2, -1, -2, -2, -2, -2, -2, -1,  1,  2, -2,  1,  7, -2, -2, -1,  1,  6,  0, -2, -2, -1, -5, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -2,  3,  1,  1, -3, -2,  0,  0,  0,  0, -5, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0, -1, -1,  0, -1, -2,  1,  1,  1, -2, -2,  0,  0,  0,  0, -5, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -1,  1,  1,  1, -3, -2,  0,  0,  0,  0, -5, // T
     -3,  2, -3, -4, -5, -3, -4, -4, -2, -3, -2, -2, -3,  1, -3, -2, -3, 15,  1, -4, -3, -4, -2, -5, // W
     -2, -2, -1, -2,  1, -2, -2, -3,  0,  0,  0, -3, -1,  6, -2, -2, -2,  1,  7, -1, -2, -2, -1, -5, // Y
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  1, -1,  1,  0,  0,  0,  0, -4, -1,  2, -1, -1,  0, -5, // V
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -5, // B
      0,  0,  1,  1, -3,  1,  1,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -5, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  0,  0,  0, -2, -1,  0,  0,  0,  0, -5, // X
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// PAM440 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM440: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1,  0,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  1,  1, -3, -2,  0,  0,  0,  0, -4, // A
      0,  3,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -4, // R
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1, -1, -1,  0,  0,  0, -3, -1, -1,  1,  1,  0, -4, // N
      0,  0,  1,  2, -2,  1,  2,  1,  1, -1, -2,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -4, // D
     -1, -2, -2, -2, 10, -3, -3, -2, -2, -1, -3, -3, -3, -2, -1,  0, -1, -4,  1, -1, -2, -3, -1, -4, // C
      0,  1,  1,  1, -3,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Q
      0,  0,  1,  2, -3,  1,  2,  1,  1, -1, -1,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -4, // E
      1, -1,  0,  1, -2,  0,  1,  2, -1, -1, -2,  0, -1, -2,  0,  1,  0, -4, -3,  0,  1,  0,  0, -4, // G
      0,  1,  1,  1, -2,  1,  1, -1,  2, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -4, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  1, -1, -1,  0, -3,  0,  2, -1, -1,  0, -4, // I
     -1, -1, -1, -2, -3, -1, -1, -2, -1,  2,  4, -1,  2,  2, -1, -1, -1, -2,  0,  1, -1, -1,  0, -4, // L
      0,  2,  1,  0, -3,  1,  0,  0,  0, -1, -1,  2,  0, -2,  0,  0,  0, -2, -2, -1,  1,  1,  0, -4, // K
      0,  0, -1, -1, -3,  0, -1, -1, -1,  1,  2,  0,  2,  1, -1, -1,  0, -3, -1,  1, -1, -1,  0, -4, // M
     -1, -2, -1, -2, -2, -2, -2, -2, -1,  1,  2, -2,  1,  7, -2, -1, -1,  1,  6,  0, -2, -2, -1, -4, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -2,  3,  1,  1, -3, -2,  0,  0,  0,  0, -4, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0, -1, -1,  0, -1, -1,  1,  1,  1, -2, -2,  0,  0,  0,  0, -4, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -1,  1,  1,  1, -3, -1,  0,  0,  0,  0, -4, // T
     -3,  2, -3, -4, -4, -3, -4, -4, -2, -3, -2, -2, -3,  1, -3, -2, -3, 15,  1, -4, -3, -3, -2, -4, // W
     -2, -2, -1, -2,  1, -2, -2, -3,  0,  0,  0, -2, -1,  6, -2, -2, -1,  1,  7, -1, -2, -2, -1, -4, // Y
      0, -1, -1, -1, -1, -1, -1,  0, -1,  2,  1, -1,  1,  0,  0,  0,  0, -4, -1,  2, -1, -1,  0, -4, // V
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // B
      0,  0,  1,  1, -3,  1,  1,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  0,  0,  0, -2, -1,  0,  0,  0,  0, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// PAM450 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM450: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1,  0,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  1,  1, -3, -2,  0,  0,  0,  0, -4, // A
      0,  3,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -4, // R
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1, -1, -1,  0,  0,  0, -3, -1, -1,  1,  1,  0, -4, // N
      0,  0,  1,  2, -2,  1,  1,  1,  1, -1, -2,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -4, // D
     -1, -2, -2, -2, 10, -3, -2, -2, -2, -1, -3, -3, -3, -2, -1,  0, -1, -4,  1, -1, -2, -3, -1, -4, // C
      0,  1,  1,  1, -3,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Q
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -4, // E
      1, -1,  0,  1, -2,  0,  1,  2, -1, -1, -2,  0, -1, -2,  0,  1,  0, -4, -2,  0,  1,  0,  0, -4, // G
      0,  1,  1,  1, -2,  1,  1, -1,  2, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -4, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  1, -1,  0,  0, -3,  0,  2, -1, -1,  0, -4, // I
     -1, -1, -1, -2, -3, -1, -1, -2, -1,  2,  3, -1,  2,  2, -1, -1,  0, -2,  0,  1, -1, -1,  0, -4, // L
      0,  2,  1,  0, -3,  1,  0,  0,  0, -1, -1,  2,  0, -2,  0,  0,  0, -2, -2, -1,  1,  1,  0, -4, // K
      0,  0, -1, -1, -3,  0, -1, -1, -1,  1,  2,  0,  2,  1, -1, -1,  0, -3, -1,  1, -1, -1,  0, -4, // M
     -1, -2, -1, -2, -2, -2, -2, -2, -1,  1,  2, -2,  1,  6, -2, -1, -1,  1,  6,  0, -2, -2, -1, -4, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0, -1, -1,  0, -1, -2,  3,  1,  1, -3, -2,  0,  0,  0,  0, -4, // P
      1,  0,  0,  0,  0,  0,  0,  1,  0,  0, -1,  0, -1, -1,  1,  1,  1, -2, -1,  0,  0,  0,  0, -4, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  1,  1,  1, -3, -1,  0,  0,  0,  0, -4, // T
     -3,  2, -3, -4, -4, -3, -4, -4, -2, -3, -2, -2, -3,  1, -3, -2, -3, 15,  1, -4, -3, -3, -2, -4, // W
     -2, -2, -1, -2,  1, -2, -2, -2,  0,  0,  0, -2, -1,  6, -2, -1, -1,  1,  7, -1, -2, -2, -1, -4, // Y
      0, -1, -1, -1, -1, -1, -1,  0, -1,  2,  1, -1,  1,  0,  0,  0,  0, -4, -1,  2, -1, -1,  0, -4, // V
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // B
      0,  0,  1,  1, -3,  1,  1,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  0,  0,  0, -2, -1,  0,  0,  0,  0, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// PAM460 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM460: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1,  0,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  0,  1, -3, -2,  0,  0,  0,  0, -4, // A
      0,  2,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -4, // R
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1, -1, -1,  0,  0,  0, -3, -1, -1,  1,  1,  0, -4, // N
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -4, // D
     -1, -2, -2, -2, 10, -3, -2, -2, -2, -1, -3, -2, -2, -2, -1,  0, -1, -4,  1, -1, -2, -2, -1, -4, // C
      0,  1,  1,  1, -3,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Q
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -4, // E
      1, -1,  0,  1, -2,  0,  1,  2, -1, -1, -1,  0, -1, -2,  0,  1,  0, -4, -2,  0,  1,  0,  0, -4, // G
      0,  1,  1,  1, -2,  1,  1, -1,  2, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -4, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  1,  0,  0,  0, -3,  0,  2, -1, -1,  0, -4, // I
     -1, -1, -1, -1, -3, -1, -1, -1, -1,  2,  3, -1,  2,  2, -1, -1,  0, -2,  0,  1, -1, -1,  0, -4, // L
      0,  2,  1,  0, -2,  1,  0,  0,  0, -1, -1,  2,  0, -2,  0,  0,  0, -2, -2, -1,  1,  1,  0, -4, // K
      0,  0, -1, -1, -2,  0, -1, -1, -1,  1,  2,  0,  2,  1,  0, -1,  0, -3, -1,  1, -1, -1,  0, -4, // M
     -1, -2, -1, -2, -2, -2, -2, -2, -1,  1,  2, -2,  1,  6, -2, -1, -1,  1,  6,  0, -2, -2, -1, -4, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -2,  2,  1,  1, -3, -2,  0,  0,  0,  0, -4, // P
      0,  0,  0,  0,  0,  0,  0,  1,  0,  0, -1,  0, -1, -1,  1,  1,  1, -2, -1,  0,  0,  0,  0, -4, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  1,  1,  1, -3, -1,  0,  0,  0,  0, -4, // T
     -3,  2, -3, -4, -4, -3, -4, -4, -2, -3, -2, -2, -3,  1, -3, -2, -3, 15,  1, -4, -3, -3, -2, -4, // W
     -2, -2, -1, -2,  1, -2, -2, -2,  0,  0,  0, -2, -1,  6, -2, -1, -1,  1,  7, -1, -2, -2, -1, -4, // Y
      0, -1, -1, -1, -1, -1, -1,  0, -1,  2,  1, -1,  1,  0,  0,  0,  0, -4, -1,  2, -1, -1,  0, -4, // V
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // B
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  0,  0,  0, -2, -1,  0,  0,  0,  0, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// PAM470 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM470: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1,  0,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  0,  1, -3, -2,  0,  0,  0,  0, -4, // A
      0,  2,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -4, // R
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1, -1, -1,  0,  0,  0, -2, -1, -1,  1,  1,  0, -4, // N
      0,  0,  1,  1, -2,  1,  1,  1,  0, -1, -1,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -4, // D
     -1, -2, -2, -2,  9, -2, -2, -2, -2, -1, -3, -2, -2, -2, -1,  0, -1, -4,  1, -1, -2, -2, -1, -4, // C
      0,  1,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Q
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  0, -1, -2,  0,  0,  0, -4, -2, -1,  1,  1,  0, -4, // E
      1, -1,  0,  1, -2,  0,  1,  2, -1, -1, -1,  0, -1, -2,  0,  1,  0, -4, -2,  0,  1,  0,  0, -4, // G
      0,  1,  1,  0, -2,  1,  1, -1,  2, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  1,  1,  0, -4, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  1,  0,  0,  0, -3,  0,  1, -1, -1,  0, -4, // I
     -1, -1, -1, -1, -3, -1, -1, -1, -1,  2,  3, -1,  2,  2, -1, -1,  0, -2,  0,  1, -1, -1,  0, -4, // L
      0,  2,  1,  0, -2,  1,  0,  0,  0, -1, -1,  2,  0, -2,  0,  0,  0, -2, -2, -1,  1,  1,  0, -4, // K
      0,  0, -1, -1, -2,  0, -1, -1, -1,  1,  2,  0,  2,  1,  0, -1,  0, -3, -1,  1, -1, -1,  0, -4, // M
     -1, -2, -1, -2, -2, -2, -2, -2, -1,  1,  2, -2,  1,  6, -2, -1, -1,  2,  6,  0, -2, -2, -1, -4, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -2,  2,  1,  1, -3, -2,  0,  0,  0,  0, -4, // P
      0,  0,  0,  0,  0,  0,  0,  1,  0,  0, -1,  0, -1, -1,  1,  0,  0, -2, -1,  0,  0,  0,  0, -4, // S
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  1,  0,  1, -3, -1,  0,  0,  0,  0, -4, // T
     -3,  2, -2, -4, -4, -3, -4, -4, -2, -3, -2, -2, -3,  2, -3, -2, -3, 15,  1, -3, -3, -3, -2, -4, // W
     -2, -2, -1, -2,  1, -2, -2, -2,  0,  0,  0, -2, -1,  6, -2, -1, -1,  1,  7, -1, -2, -2, -1, -4, // Y
      0, -1, -1, -1, -1, -1, -1,  0, -1,  1,  1, -1,  1,  0,  0,  0,  0, -3, -1,  1, -1, -1,  0, -4, // V
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // B
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  0,  0,  0, -2, -1,  0,  0,  0,  0, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// PAM480 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM480: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1,  0,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  0,  0, -3, -1,  0,  0,  0,  0, -4, // A
      0,  2,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -4, // R
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1,  0, -1,  0,  0,  0, -2, -1,  0,  1,  1,  0, -4, // N
      0,  0,  1,  1, -2,  1,  1,  1,  0, -1, -1,  0, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // D
     -1, -2, -2, -2,  9, -2, -2, -2, -2, -1, -3, -2, -2, -1, -1,  0, -1, -4,  1, -1, -2, -2, -1, -4, // C
      0,  1,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Q
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  0, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // E
      1, -1,  0,  1, -2,  0,  1,  2,  0, -1, -1,  0, -1, -2,  0,  1,  0, -4, -2,  0,  1,  0,  0, -4, // G
      0,  1,  1,  0, -2,  1,  1,  0,  2, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  0,  1,  0, -4, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  2,  2, -1,  1,  1,  0,  0,  0, -3,  0,  1, -1, -1,  0, -4, // I
     -1, -1, -1, -1, -3, -1, -1, -1, -1,  2,  3, -1,  2,  2, -1, -1,  0, -2,  0,  1, -1, -1,  0, -4, // L
      0,  2,  1,  0, -2,  1,  0,  0,  0, -1, -1,  2,  0, -2,  0,  0,  0, -2, -2, -1,  1,  1,  0, -4, // K
      0,  0,  0, -1, -2,  0, -1, -1, -1,  1,  2,  0,  2,  1,  0,  0,  0, -2,  0,  1, -1, -1,  0, -4, // M
     -1, -2, -1, -2, -1, -2, -2, -2, -1,  1,  2, -2,  1,  6, -2, -1, -1,  2,  6,  0, -2, -2,  0, -4, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -2,  2,  1,  1, -3, -2,  0,  0,  0,  0, -4, // P
      0,  0,  0,  0,  0,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  0,  0, -1, -1,  0,  0,  0,  0, -4, // S
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  1,  0,  1, -3, -1,  0,  0,  0,  0, -4, // T
     -3,  2, -2, -3, -4, -3, -3, -4, -2, -3, -2, -2, -2,  2, -3, -1, -3, 15,  1, -3, -3, -3, -2, -4, // W
     -1, -2, -1, -2,  1, -2, -2, -2,  0,  0,  0, -2,  0,  6, -2, -1, -1,  1,  7, -1, -2, -2, -1, -4, // Y
      0, -1,  0, -1, -1, -1, -1,  0, -1,  1,  1, -1,  1,  0,  0,  0,  0, -3, -1,  1, -1, -1,  0, -4, // V
      0,  0,  1,  1, -2,  1,  1,  1,  0, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // B
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, -2, -1,  0,  0,  0,  0, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// PAM490 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM490: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1,  0,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  0,  0, -3, -1,  0,  0,  0,  0, -4, // A
      0,  2,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -4, // R
      0,  0,  1,  1, -2,  1,  1,  0,  0, -1, -1,  1,  0, -1,  0,  0,  0, -2, -1,  0,  1,  1,  0, -4, // N
      0,  0,  1,  1, -2,  1,  1,  1,  0, -1, -1,  0, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // D
     -1, -2, -2, -2,  9, -2, -2, -2, -2, -1, -3, -2, -2, -1, -1,  0, -1, -4,  1, -1, -2, -2, -1, -4, // C
      0,  1,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Q
      0,  0,  1,  1, -2,  1,  1,  1,  1, -1, -1,  0, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // E
      1, -1,  0,  1, -2,  0,  1,  2,  0, -1, -1,  0, -1, -2,  0,  1,  0, -4, -2,  0,  1,  0,  0, -4, // G
      0,  1,  0,  0, -2,  1,  1,  0,  2, -1, -1,  0, -1, -1,  0,  0,  0, -2,  0, -1,  0,  1,  0, -4, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  1,  2, -1,  1,  1,  0,  0,  0, -3,  0,  1, -1, -1,  0, -4, // I
     -1, -1, -1, -1, -3, -1, -1, -1, -1,  2,  3, -1,  2,  2, -1, -1,  0, -2,  0,  1, -1, -1,  0, -4, // L
      0,  2,  1,  0, -2,  1,  0,  0,  0, -1, -1,  2,  0, -2,  0,  0,  0, -2, -2, -1,  1,  1,  0, -4, // K
      0,  0,  0, -1, -2,  0, -1, -1, -1,  1,  2,  0,  2,  1,  0,  0,  0, -2,  0,  1, -1,  0,  0, -4, // M
     -1, -2, -1, -2, -1, -2, -2, -2, -1,  1,  2, -2,  1,  6, -2, -1, -1,  2,  6,  0, -2, -2,  0, -4, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -2,  2,  1,  1, -3, -2,  0,  0,  0,  0, -4, // P
      0,  0,  0,  0,  0,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  0,  0, -1, -1,  0,  0,  0,  0, -4, // S
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  1,  0,  1, -3, -1,  0,  0,  0,  0, -4, // T
     -3,  2, -2, -3, -4, -3, -3, -4, -2, -3, -2, -2, -2,  2, -3, -1, -3, 15,  2, -3, -3, -3, -2, -4, // W
     -1, -2, -1, -2,  1, -2, -2, -2,  0,  0,  0, -2,  0,  6, -2, -1, -1,  2,  7, -1, -2, -2, -1, -4, // Y
      0, -1,  0, -1, -1, -1, -1,  0, -1,  1,  1, -1,  1,  0,  0,  0,  0, -3, -1,  1, -1, -1,  0, -4, // V
      0,  0,  1,  1, -2,  1,  1,  1,  0, -1, -1,  1, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // B
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, -2, -1,  0,  0,  0,  0, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// PAM500 extrapolated from the Dayhoff PAM1 mutation matrix, in ln(2)/3 bit units.
#[rustfmt::skip]
pub(super) const PAM500: [i8; 576] = [
//     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
      1,  0,  0,  0, -1,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  0,  0, -3, -1,  0,  0,  0,  0, -4, // A
      0,  2,  0,  0, -2,  1,  0, -1,  1, -1, -1,  2,  0, -2,  0,  0,  0,  2, -2, -1,  0,  0,  0, -4, // R
      0,  0,  1,  1, -1,  1,  1,  0,  0, -1, -1,  1,  0, -1,  0,  0,  0, -2, -1,  0,  1,  1,  0, -4, // N
      0,  0,  1,  1, -2,  1,  1,  1,  0, -1, -1,  0, -1, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // D
     -1, -2, -1, -2,  9, -2, -2, -1, -2, -1, -2, -2, -2, -1, -1,  0, -1, -4,  1, -1, -2, -2, -1, -4, // C
      0,  1,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -2, -2, -1,  1,  1,  0, -4, // Q
      0,  0,  1,  1, -2,  1,  1,  1,  0, -1, -1,  0, -1, -2,  0,  0,  0, -3, -2,  0,  1,  1,  0, -4, // E
      1, -1,  0,  1, -1,  0,  1,  2,  0, -1, -1,  0, -1, -2,  0,  1,  0, -3, -2,  0,  1,  0,  0, -4, // G
      0,  1,  0,  0, -2,  1,  0,  0,  2, -1, -1,  0, -1,  0,  0,  0,  0, -2,  0, -1,  0,  1,  0, -4, // H
      0, -1, -1, -1, -1, -1, -1, -1, -1,  1,  2, -1,  1,  1,  0,  0,  0, -3,  0,  1, -1, -1,  0, -4, // I
     -1, -1, -1, -1, -2, -1, -1, -1, -1,  2,  3, -1,  2,  2, -1, -1,  0, -2,  0,  1, -1, -1,  0, -4, // L
      0,  2,  1,  0, -2,  1,  0,  0,  0, -1, -1,  2,  0, -2,  0,  0,  0, -1, -2, -1,  1,  1,  0, -4, // K
      0,  0,  0, -1, -2,  0, -1, -1, -1,  1,  2,  0,  2,  1,  0,  0,  0, -2,  0,  1, -1,  0,  0, -4, // M
     -1, -2, -1, -2, -1, -2, -2, -2,  0,  1,  2, -2,  1,  6, -2, -1, -1,  2,  5,  0, -2, -2,  0, -4, // F
      1,  0,  0,  0, -1,  0,  0,  0,  0,  0, -1,  0,  0, -2,  2,  1,  1, -3, -2,  0,  0,  0,  0, -4, // P
      0,  0,  0,  0,  0,  0,  0,  1,  0,  0, -1,  0,  0, -1,  1,  0,  0, -1, -1,  0,  0,  0,  0, -4, // S
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0, -1,  1,  0,  1, -2, -1,  0,  0,  0,  0, -4, // T
     -3,  2, -2, -3, -4, -2, -3, -3, -2, -3, -2, -1, -2,  2, -3, -1, -2, 15,  2, -3, -3, -3, -2, -4, // W
     -1, -2, -1, -2,  1, -2, -2, -2,  0,  0,  0, -2,  0,  5, -2, -1, -1,  2,  6, -1, -1, -2, -1, -4, // Y
      0, -1,  0, -1, -1, -1,  0,  0, -1,  1,  1, -1,  1,  0,  0,  0,  0, -3, -1,  1,  0, -1,  0, -4, // V
      0,  0,  1,  1, -2,  1,  1,  1,  0, -1, -1,  1, -1, -2,  0,  0,  0, -3, -1,  0,  1,  1,  0, -4, // B
      0,  0,  1,  1, -2,  1,  1,  0,  1, -1, -1,  1,  0, -2,  0,  0,  0, -3, -2, -1,  1,  1,  0, -4, // Z
      0,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, -2, -1,  0,  0,  0,  0, -4, // X
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// NUC.4.4 (also distributed as EDNAFULL) over the IUPAC nucleotide codes.
#[rustfmt::skip]
pub(super) const NUC44: [i8; 225] = [
//     A   T   G   C   S   W   R   Y   K   M   B   V   H   D   N
      5, -4, -4, -4, -4,  1,  1, -4, -4,  1, -4, -1, -1, -1, -2, // A
     -4,  5, -4, -4, -4,  1, -4,  1,  1, -4, -1, -4, -1, -1, -2, // T
     -4, -4,  5, -4,  1, -4,  1, -4,  1, -4, -1, -1, -4, -1, -2, // G
     -4, -4, -4,  5,  1, -4, -4,  1, -4,  1, -1, -1, -1, -4, -2, // C
     -4, -4,  1,  1, -1, -4, -2, -2, -2, -2, -1, -1, -3, -3, -1, // S
      1,  1, -4, -4, -4, -1, -2, -2, -2, -2, -3, -3, -1, -1, -1, // W
      1, -4,  1, -4, -2, -2, -1, -4, -2, -2, -3, -1, -3, -1, -1, // R
     -4,  1, -4,  1, -2, -2, -4, -1, -2, -2, -1, -3, -1, -3, -1, // Y
     -4,  1,  1, -4, -2, -2, -2, -2, -1, -4, -1, -3, -3, -1, -1, // K
      1, -4, -4,  1, -2, -2, -2, -2, -4, -1, -3, -1, -1, -3, -1, // M
     -4, -1, -1, -1, -1, -3, -3, -1, -1, -3, -1, -2, -2, -2, -1, // B
     -1, -4, -1, -1, -1, -3, -1, -3, -3, -1, -2, -1, -2, -2, -1, // V
     -1, -1, -4, -1, -3, -1, -3, -1, -3, -1, -2, -2, -1, -2, -1, // H
     -1, -1, -1, -4, -3, -1, -1, -3, -1, -3, -2, -2, -2, -1, -1, // D
     -2, -2, -2, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, // N
];
