use core::fmt;

use digest::{
    block_buffer::Eager,
    core_api::{AlgorithmName, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore, UpdateCore},
    crypto_common::{Block, BlockSizeUser},
    typenum::{U16, U32, U4, U8},
    Output, OutputSizeUser, Reset,
};

use crate::canonical::Canonical;
use crate::{xxh32, xxh64};

// The eager block buffer of `CoreWrapper` plays the role of the carry-over
// buffer, so a core only keeps the lanes and the count of mixed bytes.
macro_rules! xxh_core {
    ($core:ident, $wrapper:ident, $variant:ident, $word:ty, $block:ty, $out:ty, $name:literal) => {
        #[doc = concat!("Core of the ", $name, " hash for the `digest` crate traits.")]
        ///
        /// The fixed output is the canonical big-endian digest.
        #[derive(Clone, Debug)]
        pub struct $core {
            seed: $word,
            lanes: $variant::Lanes,
            len: u64, // bytes mixed into the lanes
        }

        impl $core {
            /// with_seed returns a core whose stream, and every reset, starts from `seed`.
            pub const fn with_seed(seed: $word) -> Self {
                Self {
                    seed,
                    lanes: $variant::Lanes::new(seed),
                    len: 0,
                }
            }

            /// seed returns the seed restored by every reset.
            pub fn seed(&self) -> $word {
                self.seed
            }
        }

        impl Default for $core {
            fn default() -> Self {
                Self::with_seed(0)
            }
        }

        impl Reset for $core {
            fn reset(&mut self) {
                *self = Self::with_seed(self.seed);
            }
        }

        impl BlockSizeUser for $core {
            type BlockSize = $block;
        }

        impl BufferKindUser for $core {
            type BufferKind = Eager;
        }

        impl OutputSizeUser for $core {
            type OutputSize = $out;
        }

        impl UpdateCore for $core {
            fn update_blocks(&mut self, blocks: &[Block<Self>]) {
                for b in blocks {
                    self.lanes.absorb(b);
                }
                self.len += (blocks.len() * $variant::BLOCK_SIZE) as u64;
            }
        }

        impl FixedOutputCore for $core {
            fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
                let tail = buffer.get_data();
                // an eager buffer never holds a full block, so any mixed block
                // means the stream reached one block
                let h = if self.len > 0 {
                    self.lanes.fold()
                } else {
                    self.seed.wrapping_add($variant::PRIME_5)
                };
                let digest = $variant::finish(h, self.len + tail.len() as u64, tail);

                out.copy_from_slice(&digest.to_canonical());
            }
        }

        impl AlgorithmName for $core {
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($name)
            }
        }

        #[doc = concat!("Buffered ", $name, " hasher implementing `digest::Update` and `digest::FixedOutput`.")]
        pub type $wrapper = CoreWrapper<$core>;
    };
}

xxh_core!(Xxh32Core, Xxh32Digest, xxh32, u32, U16, U4, "XXH32");
xxh_core!(Xxh64Core, Xxh64Digest, xxh64, u64, U32, U8, "XXH64");
