use std::io;

use crate::accumulator::Accumulator;
use crate::endian::{read_u32, read_u64};

/// Multiplier of the lane rounds, merge rounds and tails.
pub const PRIME_1: u64 = 0x9E37_79B1_85EB_CA87;
/// Multiplier applied to each input word of a lane round.
pub const PRIME_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
/// Offset of the half-word tail and avalanche multiplier.
pub const PRIME_3: u64 = 0x1656_67B1_9E37_79F9;
/// Offset of the merge rounds and word tail.
pub const PRIME_4: u64 = 0x85EB_CA77_C2B2_AE63;
/// Offset of the short-input seed and byte tail multiplier.
pub const PRIME_5: u64 = 0x27D4_EB2F_1656_67C5;

/// Block size, in bytes, of one round over the four lanes.
pub const BLOCK_SIZE: usize = 32;

/// The size in bytes of a XXH64 digest.
pub const DIGEST_SIZE: usize = 8;

/// round mixes one input word into a lane.
#[inline(always)]
pub const fn round(acc: u64, input: u64) -> u64 {
    acc.wrapping_add(input.wrapping_mul(PRIME_2))
        .rotate_left(31)
        .wrapping_mul(PRIME_1)
}

/// merge_round folds a finished lane back into the running hash.
#[inline(always)]
pub const fn merge_round(acc: u64, lane: u64) -> u64 {
    (acc ^ round(0, lane))
        .wrapping_mul(PRIME_1)
        .wrapping_add(PRIME_4)
}

/// avalanche scrambles the final bits so that close inputs land far apart.
#[inline(always)]
pub const fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(PRIME_2);
    h ^= h >> 29;
    h = h.wrapping_mul(PRIME_3);
    h ^= h >> 32;
    h
}

/// Lanes holds the four independent running mixes of the block loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lanes([u64; 4]);

impl Lanes {
    pub(crate) const fn new(seed: u64) -> Self {
        Lanes([
            seed.wrapping_add(PRIME_1).wrapping_add(PRIME_2),
            seed.wrapping_add(PRIME_2),
            seed,
            seed.wrapping_sub(PRIME_1),
        ])
    }

    // block must hold exactly BLOCK_SIZE bytes
    #[inline(always)]
    pub(crate) fn absorb(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        for (lane, word) in self.0.iter_mut().zip(block.chunks_exact(8)) {
            *lane = round(*lane, read_u64(word));
        }
    }

    #[inline(always)]
    pub(crate) fn fold(&self) -> u64 {
        let [v1, v2, v3, v4] = self.0;
        let h = v1
            .rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18));
        self.0.iter().fold(h, |h, &lane| merge_round(h, lane))
    }
}

/// finish adds the length, absorbs the sub-block tail and applies the avalanche.
#[inline(always)]
pub(crate) fn finish(mut h: u64, total_len: u64, tail: &[u8]) -> u64 {
    h = h.wrapping_add(total_len);

    let mut words = tail.chunks_exact(8);
    for word in &mut words {
        h = (h ^ round(0, read_u64(word)))
            .rotate_left(27)
            .wrapping_mul(PRIME_1)
            .wrapping_add(PRIME_4);
    }

    let mut rest = words.remainder();
    if rest.len() >= 4 {
        h = (h ^ u64::from(read_u32(rest)).wrapping_mul(PRIME_1))
            .rotate_left(23)
            .wrapping_mul(PRIME_2)
            .wrapping_add(PRIME_3);
        rest = &rest[4..];
    }

    for &byte in rest {
        h = (h ^ u64::from(byte).wrapping_mul(PRIME_5))
            .rotate_left(11)
            .wrapping_mul(PRIME_1);
    }

    avalanche(h)
}

/// xxh64 computes the 64-bit hash of `input` in a single call.
///
/// ```
/// assert_eq!(xxhash::xxh64(b"", 0), 0xEF46DB3751D8E999);
/// ```
pub fn xxh64(input: &[u8], seed: u64) -> u64 {
    let mut blocks = input.chunks_exact(BLOCK_SIZE);

    let h = if input.len() >= BLOCK_SIZE {
        let mut lanes = Lanes::new(seed);
        for block in &mut blocks {
            lanes.absorb(block);
        }
        lanes.fold()
    } else {
        seed.wrapping_add(PRIME_5)
    };

    finish(h, input.len() as u64, blocks.remainder())
}

/// Xxh64 is the streaming state of the 64-bit hash.
#[derive(Clone, Debug)]
pub struct Xxh64 {
    seed: u64,
    lanes: Lanes,
    total_len: u64,
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
}

impl Xxh64 {
    /// new returns a state reset to `seed`.
    pub const fn new(seed: u64) -> Self {
        Xxh64 {
            seed,
            lanes: Lanes::new(seed),
            total_len: 0,
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
        }
    }

    /// reset starts a new stream with `seed`.
    pub fn reset(&mut self, seed: u64) {
        *self = Xxh64::new(seed);
    }

    /// seed returns the seed of the current stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// total_len returns the number of bytes fed since the last reset.
    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    /// update feeds `input` into the stream.
    pub fn update(&mut self, mut input: &[u8]) {
        self.total_len = self.total_len.wrapping_add(input.len() as u64);

        if self.buffered + input.len() < BLOCK_SIZE {
            self.buffer[self.buffered..self.buffered + input.len()].copy_from_slice(input);
            self.buffered += input.len();
            return;
        }

        if self.buffered > 0 {
            let fill = BLOCK_SIZE - self.buffered;
            self.buffer[self.buffered..].copy_from_slice(&input[..fill]);
            self.lanes.absorb(&self.buffer);
            input = &input[fill..];
            self.buffered = 0;
        }

        // whole blocks are mixed straight from the caller's slice
        let mut blocks = input.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            self.lanes.absorb(block);
        }

        let tail = blocks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }

    /// digest returns the hash of the stream so far without consuming it.
    pub fn digest(&self) -> u64 {
        let h = if self.total_len >= BLOCK_SIZE as u64 {
            self.lanes.fold()
        } else {
            self.seed.wrapping_add(PRIME_5)
        };

        finish(h, self.total_len, &self.buffer[..self.buffered])
    }
}

impl Default for Xxh64 {
    fn default() -> Self {
        Xxh64::new(0)
    }
}

impl Accumulator for Xxh64 {
    type Hash = u64;

    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn oneshot(input: &[u8], seed: u64) -> u64 {
        xxh64(input, seed)
    }

    fn with_seed(seed: u64) -> Self {
        Xxh64::new(seed)
    }

    fn reset(&mut self, seed: u64) {
        Xxh64::reset(self, seed)
    }

    fn update(&mut self, input: &[u8]) {
        Xxh64::update(self, input)
    }

    fn digest(&self) -> u64 {
        Xxh64::digest(self)
    }
}

impl io::Write for Xxh64 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
