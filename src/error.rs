//! Error taxonomy for generation requests.

use thiserror::Error;

/// Failures surfaced by [`generate`](crate::generate) and the entropy source.
///
/// All of these are raised before any output is produced; there is no
/// partial or retryable failure mode.
#[derive(Debug, Error)]
pub enum Error {
    /// Both a named kind and a custom character set were supplied.
    #[error("expected either `kind` or `characters`, not both")]
    ConflictingSelector,

    /// A named kind outside the recognized set.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// Custom character set is empty.
    #[error("expected `characters` to contain at least 1 symbol")]
    NoCharacters,

    /// Custom character set has more symbols than a 16-bit selector can index.
    #[error("expected `characters` to contain at most 65536 symbols, got {0}")]
    TooManyCharacters(usize),

    /// A single entropy request above the absolute platform ceiling.
    #[error("entropy request of {requested} bytes exceeds the {max} byte ceiling")]
    EntropyCeiling { requested: u64, max: u64 },

    /// The operating system RNG failed to produce bytes.
    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand_core::OsError),
}
