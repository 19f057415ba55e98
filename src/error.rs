use thiserror::Error;

/// Error is raised only when a caller breaks the API contract.
///
/// Hashing itself is total over every input and seed, so none of these
/// variants can be produced by the content of the data being hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A null input pointer was passed together with a nonzero length.
    #[error("null input with a claimed length of {len} bytes")]
    NullInput {
        /// The length claimed by the caller.
        len: usize,
    },
    /// A null accumulator handle was passed.
    #[error("null accumulator handle")]
    NullState,
    /// The accumulator was used before it was ever reset.
    #[error("accumulator used before reset")]
    Uninitialized,
    /// A canonical digest slice had the wrong width.
    #[error("canonical digest must be {expected} bytes, got {actual}")]
    CanonicalLength {
        /// The width of the canonical form.
        expected: usize,
        /// The length of the slice that was supplied.
        actual: usize,
    },
}
