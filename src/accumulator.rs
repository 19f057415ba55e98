use crate::canonical::Canonical;

/// Accumulator is an incremental hash state fed with arbitrarily chunked input.
///
/// For any split of a byte stream into consecutive `update` calls, `digest`
/// equals `oneshot` over the whole stream with the same seed.
pub trait Accumulator: Clone {
    /// The digest type, which is also the seed type.
    type Hash: Canonical + Copy + Eq;

    /// Number of bytes mixed per lane round.
    const BLOCK_SIZE: usize;

    /// oneshot hashes a complete buffer in a single call.
    fn oneshot(input: &[u8], seed: Self::Hash) -> Self::Hash;

    /// with_seed returns an accumulator already reset to `seed`.
    fn with_seed(seed: Self::Hash) -> Self;

    /// reset starts a new stream. Calling it twice in a row is the same as calling it once.
    fn reset(&mut self, seed: Self::Hash);

    /// update appends `input` to the stream.
    fn update(&mut self, input: &[u8]);

    /// digest returns the hash of everything fed since the last reset.
    /// The state is left untouched, so the stream may be continued afterwards.
    fn digest(&self) -> Self::Hash;

    /// canonical_digest returns `digest` in its canonical big-endian form.
    fn canonical_digest(&self) -> <Self::Hash as Canonical>::Bytes {
        self.digest().to_canonical()
    }
}
