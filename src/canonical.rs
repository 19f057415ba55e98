use byteorder::{BigEndian, ByteOrder};

use crate::error::Error;
use crate::{xxh32, xxh64};

/// Canonical converts a digest to and from its big-endian byte form.
///
/// The canonical form is the only representation of a digest that compares
/// equal across hosts of different byte order, so it is what should be
/// written to files or sent over the wire.
pub trait Canonical: Sized + Copy {
    /// The fixed-width byte array holding the canonical form.
    type Bytes: AsRef<[u8]> + Copy;

    /// to_canonical writes the digest most significant byte first.
    fn to_canonical(self) -> Self::Bytes;

    /// from_canonical reads a digest written by `to_canonical`.
    fn from_canonical(bytes: Self::Bytes) -> Self;

    /// from_canonical_slice reads a digest from a slice that must be exactly
    /// the canonical width.
    fn from_canonical_slice(bytes: &[u8]) -> Result<Self, Error>;
}

impl Canonical for u32 {
    type Bytes = [u8; xxh32::DIGEST_SIZE];

    fn to_canonical(self) -> [u8; xxh32::DIGEST_SIZE] {
        let mut out = [0; xxh32::DIGEST_SIZE];
        BigEndian::write_u32(&mut out, self);
        out
    }

    fn from_canonical(bytes: [u8; xxh32::DIGEST_SIZE]) -> Self {
        BigEndian::read_u32(&bytes)
    }

    fn from_canonical_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != xxh32::DIGEST_SIZE {
            return Err(Error::CanonicalLength {
                expected: xxh32::DIGEST_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(BigEndian::read_u32(bytes))
    }
}

impl Canonical for u64 {
    type Bytes = [u8; xxh64::DIGEST_SIZE];

    fn to_canonical(self) -> [u8; xxh64::DIGEST_SIZE] {
        let mut out = [0; xxh64::DIGEST_SIZE];
        BigEndian::write_u64(&mut out, self);
        out
    }

    fn from_canonical(bytes: [u8; xxh64::DIGEST_SIZE]) -> Self {
        BigEndian::read_u64(&bytes)
    }

    fn from_canonical_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != xxh64::DIGEST_SIZE {
            return Err(Error::CanonicalLength {
                expected: xxh64::DIGEST_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(BigEndian::read_u64(bytes))
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn canonical_is_big_endian() {
        assert_eq!(0x02CC_5D05u32.to_canonical(), [0x02, 0xCC, 0x5D, 0x05]);
        assert_eq!(hex::encode(0x02CC_5D05u32.to_canonical()), "02cc5d05");
        assert_eq!(
            hex::encode(0xEF46_DB37_51D8_E999u64.to_canonical()),
            "ef46db3751d8e999"
        );
    }

    #[test]
    fn canonical_slice() -> anyhow::Result<()> {
        let bytes = hex::decode("44bc2cf5ad770999")?;
        assert_eq!(u64::from_canonical_slice(&bytes)?, 0x44BC_2CF5_AD77_0999);
        assert_eq!(u32::from_canonical_slice(&bytes[..4])?, 0x44BC_2CF5);

        assert_eq!(
            u32::from_canonical_slice(&bytes),
            Err(Error::CanonicalLength {
                expected: 4,
                actual: 8
            })
        );
        assert_eq!(
            u64::from_canonical_slice(&bytes[..7]),
            Err(Error::CanonicalLength {
                expected: 8,
                actual: 7
            })
        );
        Ok(())
    }

    #[quickcheck]
    fn round_trip_32(x: u32) -> bool {
        u32::from_canonical(x.to_canonical()) == x
    }

    #[quickcheck]
    fn round_trip_64(x: u64) -> bool {
        u64::from_canonical(x.to_canonical()) == x
    }
}
