use std::hash::{BuildHasher, Hasher};

use crate::xxh32::Xxh32;
use crate::xxh64::Xxh64;

impl Hasher for Xxh32 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.digest())
    }
}

impl Hasher for Xxh64 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.digest()
    }
}

/// Xxh32Builder creates seeded `Xxh32` hashers, e.g. for a `HashMap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh32Builder {
    seed: u32,
}

impl Xxh32Builder {
    /// with_seed returns a builder whose hashers all start from `seed`.
    pub const fn with_seed(seed: u32) -> Self {
        Xxh32Builder { seed }
    }
}

impl BuildHasher for Xxh32Builder {
    type Hasher = Xxh32;

    fn build_hasher(&self) -> Xxh32 {
        Xxh32::new(self.seed)
    }
}

/// Xxh64Builder creates seeded `Xxh64` hashers, e.g. for a `HashMap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh64Builder {
    seed: u64,
}

impl Xxh64Builder {
    /// with_seed returns a builder whose hashers all start from `seed`.
    pub const fn with_seed(seed: u64) -> Self {
        Xxh64Builder { seed }
    }
}

impl BuildHasher for Xxh64Builder {
    type Hasher = Xxh64;

    fn build_hasher(&self) -> Xxh64 {
        Xxh64::new(self.seed)
    }
}

#[cfg(test)]
pub mod test {
    use std::collections::HashMap;
    use std::hash::{BuildHasher, Hash, Hasher};

    use super::*;
    use crate::{xxh32::xxh32, xxh64::xxh64};

    #[test]
    fn finish_is_digest() {
        let mut h = Xxh64Builder::with_seed(8).build_hasher();
        h.write(b"hello ");
        h.write(b"world");
        assert_eq!(h.finish(), xxh64(b"hello world", 8));

        let mut h = Xxh32Builder::with_seed(8).build_hasher();
        h.write(b"hello world");
        assert_eq!(h.finish(), u64::from(xxh32(b"hello world", 8)));
    }

    #[test]
    fn same_key_same_hash() {
        let builder = Xxh64Builder::with_seed(0xdead_beef);
        let hash_of = |key: &str| {
            let mut h = builder.build_hasher();
            key.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash_of("lane"), hash_of("lane"));
        assert_ne!(hash_of("lane"), hash_of("lanes"));
    }

    #[test]
    fn keys_a_hash_map() {
        let mut m: HashMap<&str, usize, Xxh32Builder> =
            HashMap::with_hasher(Xxh32Builder::default());
        for (i, word) in ["seed", "lane", "block", "digest"].into_iter().enumerate() {
            m.insert(word, i);
        }
        assert_eq!(m.get("block"), Some(&2));
        assert_eq!(m.get("tail"), None);
    }
}
