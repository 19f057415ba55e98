use byteorder::{ByteOrder, NativeEndian};

/// Endianness is the byte order of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// host returns the byte order of the target this crate was compiled for.
    pub const fn host() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// is_little reports whether words are stored least significant byte first.
    pub const fn is_little(self) -> bool {
        matches!(self, Endianness::Little)
    }
}

/// HOST is the byte order of the running platform.
pub const HOST: Endianness = Endianness::host();

/// le32 turns a word loaded in `endian` byte order into its little-endian value.
#[inline(always)]
pub const fn le32(raw: u32, endian: Endianness) -> u32 {
    if endian.is_little() {
        raw
    } else {
        raw.swap_bytes()
    }
}

/// le64 turns a word loaded in `endian` byte order into its little-endian value.
#[inline(always)]
pub const fn le64(raw: u64, endian: Endianness) -> u64 {
    if endian.is_little() {
        raw
    } else {
        raw.swap_bytes()
    }
}

/// read_u32 reads the little-endian word stored in the first 4 bytes of `input`.
///
/// Panics if `input` is shorter than 4 bytes.
#[inline(always)]
pub fn read_u32(input: &[u8]) -> u32 {
    le32(NativeEndian::read_u32(input), HOST)
}

/// read_u64 reads the little-endian word stored in the first 8 bytes of `input`.
///
/// Panics if `input` is shorter than 8 bytes.
#[inline(always)]
pub fn read_u64(input: &[u8]) -> u64 {
    le64(NativeEndian::read_u64(input), HOST)
}
