use std::ops::Index;

/// Represents a mapping between bytes and indices, such as the map from the
/// symbols of a substitution matrix's alphabet to its row ordinals.
///
/// Every one of the 256 byte values maps to some index: bytes that are not
/// keys map to the index of the `catch_all` key.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct ByteIndexMap {
    pub(crate) index_map: [u8; 256],
    pub(crate) byte_keys: Vec<u8>,
}

impl ByteIndexMap {
    /// Create a new [`ByteIndexMap`] mapping each key to its position in
    /// `byte_keys`. Any byte that is not specified in `byte_keys` is mapped to
    /// the same thing as `catch_all`.
    ///
    /// Returns `None` if `byte_keys` contains duplicates, has more than 255
    /// entries, or does not contain `catch_all`.
    #[must_use]
    pub fn new(byte_keys: &[u8], catch_all: u8) -> Option<Self> {
        Self::build(byte_keys, catch_all, false)
    }

    /// Similar to [`ByteIndexMap::new`], but both cases of each ASCII letter
    /// in `byte_keys` map to the same index. Keys that differ only in case
    /// count as duplicates.
    #[must_use]
    pub fn new_ignoring_case(byte_keys: &[u8], catch_all: u8) -> Option<Self> {
        Self::build(byte_keys, catch_all, true)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn build(byte_keys: &[u8], catch_all: u8, ignore_case: bool) -> Option<Self> {
        if byte_keys.len() > usize::from(u8::MAX) {
            return None;
        }

        let fold = |b: u8| if ignore_case { b.to_ascii_uppercase() } else { b };
        let catch_all_index = byte_keys.iter().position(|&k| fold(k) == fold(catch_all))? as u8;

        let mut out = ByteIndexMap {
            index_map: [catch_all_index; 256],
            byte_keys: byte_keys.to_vec(),
        };

        let mut seen = [false; 256];
        for (i, &key) in byte_keys.iter().enumerate() {
            if std::mem::replace(&mut seen[usize::from(fold(key))], true) {
                return None;
            }

            // Truncation will not occur because the length was checked above
            if ignore_case {
                out.set_byte_ignoring_case(key, i as u8);
            } else {
                out.set_byte(key, i as u8);
            }
        }

        Some(out)
    }

    /// Set the index for a byte.
    #[inline]
    fn set_byte(&mut self, byte: u8, index: u8) {
        self.index_map[byte as usize] = index;
    }

    /// Set the index for a byte, ignoring case.
    #[inline]
    fn set_byte_ignoring_case(&mut self, byte: u8, index: u8) {
        self.index_map[byte.to_ascii_lowercase() as usize] = index;
        self.index_map[byte.to_ascii_uppercase() as usize] = index;
    }

    /// Get the number of keys.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.byte_keys.len()
    }

    /// The keys, in index order.
    #[inline]
    #[must_use]
    pub fn byte_keys(&self) -> &[u8] {
        &self.byte_keys
    }

    /// Convert a byte `b` into an index.
    #[inline]
    #[must_use]
    pub fn to_index(&self, b: u8) -> usize {
        self.index_map[b as usize] as usize
    }
}

impl Index<u8> for ByteIndexMap {
    type Output = u8;

    #[inline]
    fn index(&self, index: u8) -> &u8 {
        &self.index_map[index as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn map_and_catch_all() {
        let map = ByteIndexMap::new(b"ACGTN", b'N').unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.to_index(b'A'), 0);
        assert_eq!(map.to_index(b'T'), 3);
        assert_eq!(map.to_index(b'a'), 4);
        assert_eq!(map.to_index(b'@'), 4);
        assert_eq!(map[b'G'], 2);
    }

    #[test]
    fn ignoring_case() {
        let map = ByteIndexMap::new_ignoring_case(b"ACGTn", b'N').unwrap();
        assert_eq!(map.to_index(b'a'), 0);
        assert_eq!(map.to_index(b'N'), 4);
        assert_eq!(map.to_index(b'x'), 4);
    }

    #[test]
    fn rejects_bad_keys() {
        assert!(ByteIndexMap::new(b"ACGA", b'A').is_none());
        assert!(ByteIndexMap::new(b"ACG", b'N').is_none());
        assert!(ByteIndexMap::new_ignoring_case(b"ACGa", b'A').is_none());
        assert!(ByteIndexMap::new(b"ACGa", b'A').is_some());
    }
}
