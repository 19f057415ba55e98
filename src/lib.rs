#![warn(missing_docs)]
//! A Rust implementation of the xxHash non-cryptographic hash family.
//!
//! Two widths are provided, XXH32 and XXH64, each as a one-shot function over
//! a complete buffer and as a streaming accumulator fed with arbitrarily
//! chunked input. Both produce the same digest for the same bytes and seed,
//! however the input is split, and match the published reference output bit
//! for bit on every host.
//!
//! Digests are plain integers. Use the [`Canonical`] form (big-endian bytes)
//! to store or transmit them.
//!
//! # Example
//! ```
//! use xxhash::{xxh64, Canonical, Xxh64};
//!
//! let mut h = Xxh64::new(0);
//! h.update(b"hello ");
//! h.update(b"world");
//! assert_eq!(h.digest(), xxh64(b"hello world", 0));
//!
//! let bytes = h.digest().to_canonical();
//! assert_eq!(u64::from_canonical(bytes), h.digest());
//! ```
//!
//! The [`xxhcore`] types plug the hashes into the `digest` crate traits, and
//! [`hasher`] provides `std::hash` builders. None of this is suitable where
//! collision or preimage resistance is required.

/// `abi` is the C-ABI surface, exported unmangled with the `c-abi` feature.
pub mod abi;
/// `accumulator` is the streaming interface shared by both widths.
pub mod accumulator;
/// `canonical` converts digests to and from their big-endian byte form.
pub mod canonical;
/// `endian` reads little-endian words independently of the host byte order.
pub mod endian;
/// `error` names the ways a caller can break the API contract.
pub mod error;
/// `hasher` adapts the accumulators to `std::hash`.
pub mod hasher;
/// `xxh32` is the 32-bit variant.
pub mod xxh32;
/// `xxh64` is the 64-bit variant.
pub mod xxh64;
/// `xxhcore` implements the `digest` crate core traits for both variants.
pub mod xxhcore;

pub use accumulator::Accumulator;
pub use canonical::Canonical;
pub use error::Error;
pub use hasher::{Xxh32Builder, Xxh64Builder};
pub use xxh32::{xxh32, Xxh32};
pub use xxh64::{xxh64, Xxh64};
pub use xxhcore::{Xxh32Core, Xxh32Digest, Xxh64Core, Xxh64Digest};

/// Major version of the implemented algorithm release.
pub const VERSION_MAJOR: u32 = 0;
/// Minor version of the implemented algorithm release.
pub const VERSION_MINOR: u32 = 6;
/// Release number of the implemented algorithm release.
pub const VERSION_RELEASE: u32 = 1;
/// `VERSION_MAJOR*100*100 + VERSION_MINOR*100 + VERSION_RELEASE`.
pub const VERSION_NUMBER: u32 = VERSION_MAJOR * 100 * 100 + VERSION_MINOR * 100 + VERSION_RELEASE;

/// version_number returns [`VERSION_NUMBER`].
pub const fn version_number() -> u32 {
    VERSION_NUMBER
}
