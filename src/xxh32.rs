use std::io;

use crate::accumulator::Accumulator;
use crate::endian::read_u32;

/// Multiplier of the lane rounds and byte tail.
pub const PRIME_1: u32 = 0x9E37_79B1;
/// Multiplier applied to each input word of a lane round.
pub const PRIME_2: u32 = 0x85EB_CA77;
/// Multiplier of the word tail and avalanche.
pub const PRIME_3: u32 = 0xC2B2_AE3D;
/// Multiplier following the word tail rotation.
pub const PRIME_4: u32 = 0x27D4_EB2F;
/// Offset of the short-input seed and byte tail multiplier.
pub const PRIME_5: u32 = 0x1656_67B1;

/// Block size, in bytes, of one round over the four lanes.
pub const BLOCK_SIZE: usize = 16;

/// The size in bytes of a XXH32 digest.
pub const DIGEST_SIZE: usize = 4;

/// round mixes one input word into a lane.
#[inline(always)]
pub const fn round(acc: u32, input: u32) -> u32 {
    acc.wrapping_add(input.wrapping_mul(PRIME_2))
        .rotate_left(13)
        .wrapping_mul(PRIME_1)
}

/// avalanche scrambles the final bits so that close inputs land far apart.
#[inline(always)]
pub const fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 15;
    h = h.wrapping_mul(PRIME_2);
    h ^= h >> 13;
    h = h.wrapping_mul(PRIME_3);
    h ^= h >> 16;
    h
}

/// Lanes holds the four independent running mixes of the block loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lanes([u32; 4]);

impl Lanes {
    pub(crate) const fn new(seed: u32) -> Self {
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
        for (lane, word) in self.0.iter_mut().zip(block.chunks_exact(4)) {
            *lane = round(*lane, read_u32(word));
        }
    }

    #[inline(always)]
    pub(crate) fn fold(&self) -> u32 {
        let [v1, v2, v3, v4] = self.0;
        v1.rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18))
    }
}

/// finish adds the length, absorbs the sub-block tail and applies the avalanche.
#[inline(always)]
pub(crate) fn finish(mut h: u32, total_len: u64, tail: &[u8]) -> u32 {
    // only the low 32 bits of the length take part
    h = h.wrapping_add(total_len as u32);

    let mut words = tail.chunks_exact(4);
    for word in &mut words {
        h = h
            .wrapping_add(read_u32(word).wrapping_mul(PRIME_3))
            .rotate_left(17)
            .wrapping_mul(PRIME_4);
    }
    for &byte in words.remainder() {
        h = h
            .wrapping_add(u32::from(byte).wrapping_mul(PRIME_5))
            .rotate_left(11)
            .wrapping_mul(PRIME_1);
    }

    avalanche(h)
}

/// xxh32 computes the 32-bit hash of `input` in a single call.
///
/// ```
/// assert_eq!(xxhash::xxh32(b"", 0), 0x02CC5D05);
/// ```
pub fn xxh32(input: &[u8], seed: u32) -> u32 {
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

/// Xxh32 is the streaming state of the 32-bit hash.
///
/// Input shorter than a block is held back until a full block is available,
/// so feeding many tiny slices costs little more than one large one.
#[derive(Clone, Debug)]
pub struct Xxh32 {
    seed: u32,
    lanes: Lanes,
    total_len: u64,           // bytes fed since reset
    buffer: [u8; BLOCK_SIZE], // unmixed tail of the last partial block
    buffered: usize,          // number of valid bytes in buffer
}

impl Xxh32 {
    /// new returns a state reset to `seed`.
    pub const fn new(seed: u32) -> Self {
        Xxh32 {
            seed,
            lanes: Lanes::new(seed),
            total_len: 0,
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
        }
    }

    /// reset starts a new stream with `seed`.
    pub fn reset(&mut self, seed: u32) {
        *self = Xxh32::new(seed);
    }

    /// seed returns the seed of the current stream.
    pub fn seed(&self) -> u32 {
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
            // complete the pending block first
            let fill = BLOCK_SIZE - self.buffered;
            self.buffer[self.buffered..].copy_from_slice(&input[..fill]);
            self.lanes.absorb(&self.buffer);
            input = &input[fill..];
            self.buffered = 0;
        }

        let mut blocks = input.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            self.lanes.absorb(block);
        }

        let tail = blocks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }

    /// digest returns the hash of the stream so far without consuming it.
    pub fn digest(&self) -> u32 {
        let h = if self.total_len >= BLOCK_SIZE as u64 {
            self.lanes.fold()
        } else {
            self.seed.wrapping_add(PRIME_5)
        };

        finish(h, self.total_len, &self.buffer[..self.buffered])
    }
}

impl Default for Xxh32 {
    fn default() -> Self {
        Xxh32::new(0)
    }
}

impl Accumulator for Xxh32 {
    type Hash = u32;

    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn oneshot(input: &[u8], seed: u32) -> u32 {
        xxh32(input, seed)
    }

    fn with_seed(seed: u32) -> Self {
        Xxh32::new(seed)
    }

    fn reset(&mut self, seed: u32) {
        Xxh32::reset(self, seed)
    }

    fn update(&mut self, input: &[u8]) {
        Xxh32::update(self, input)
    }

    fn digest(&self) -> u32 {
        Xxh32::digest(self)
    }
}

impl io::Write for Xxh32 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
