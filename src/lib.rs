//! Cryptographically secure random strings from unbiased alphabets.
//!
//! Every character of a generated string is drawn independently and
//! uniformly from the resolved alphabet, with entropy from the operating
//! system RNG. Alphabets that do not divide 65536 evenly go through
//! rejection sampling, so there is no modulo bias; the two dense encodings
//! (hex, base64) skip selection entirely and encode raw bytes instead.
//!
//! ```no_run
//! use randstr::{Kind, Request, generate};
//!
//! let token = generate(&Request::new(32))?; // hex by default
//! let otp = generate(&Request::new(6).kind(Kind::Numeric))?;
//! let pin = generate(&Request::new(4).characters("123456789"))?;
//! # Ok::<(), randstr::Error>(())
//! ```
//!
//! With the `async` feature, [`generate_async`] offers the same semantics
//! and output distribution, awaiting its entropy on the blocking pool.

mod alphabet;
mod encode;
pub mod entropy;
mod error;
mod select;

pub use alphabet::Kind;
pub use error::Error;

use alphabet::Target;
use encode::Encoding;

/// A single generation request.
///
/// At most one of `kind` and `characters` may be set; with neither, the
/// output is hex. Requests carry no state between calls and never cache
/// results.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Exact output length in symbols.
    pub length: usize,
    /// Built-in alphabet or encoding.
    pub kind: Option<Kind>,
    /// Custom alphabet of 1..=65536 symbols, mutually exclusive with `kind`.
    pub characters: Option<String>,
}

impl Request {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = Some(characters.into());
        self
    }
}

/// Generate a random string of exactly `request.length` symbols.
///
/// # Errors
///
/// Fails fast, before any entropy is consumed, on a conflicting selector or
/// an out-of-range custom set; [`Error::EntropyCeiling`] and
/// [`Error::Entropy`] surface from the entropy source.
pub fn generate(request: &Request) -> Result<String, Error> {
    match alphabet::resolve(request.kind, request.characters.as_deref())? {
        Target::Hex => encode::encoded(Encoding::Hex, request.length),
        Target::Base64 => encode::encoded(Encoding::Base64, request.length),
        Target::Chars(chars) => select::select(request.length, &chars),
    }
}

/// Async variant of [`generate`]: identical validation, alphabet tables,
/// and output distribution; only the entropy fetches are awaited.
#[cfg(feature = "async")]
pub async fn generate_async(request: &Request) -> Result<String, Error> {
    match alphabet::resolve(request.kind, request.characters.as_deref())? {
        Target::Hex => encode::encoded_async(Encoding::Hex, request.length).await,
        Target::Base64 => encode::encoded_async(Encoding::Base64, request.length).await,
        Target::Chars(chars) => select::select_async(request.length, &chars).await,
    }
}
