//! Dense-encoding shortcut for hex and base64 output.
//!
//! Both encodings map bytes onto their alphabets without bias (256 is an
//! exact multiple of 16 and of 64), so every prefix of the symbol stream is
//! uniform and no rejection pass is needed.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::entropy;
use crate::error::Error;

#[derive(Clone, Copy)]
pub(crate) enum Encoding {
    Hex,
    Base64,
}

impl Encoding {
    /// Exact raw-byte budget for `length` output symbols: half a byte per
    /// hex digit, three quarters per base64 digit, rounded up.
    fn byte_budget(self, length: usize) -> u64 {
        match self {
            Encoding::Hex => (length as u64).div_ceil(2),
            Encoding::Base64 => (length as u64 * 3).div_ceil(4),
        }
    }

    fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => hex::encode(bytes),
            // Padding only ever lands past the truncation point.
            Encoding::Base64 => STANDARD.encode(bytes),
        }
    }
}

/// Encode fresh entropy and truncate to exactly `length` symbols.
pub(crate) fn encoded(encoding: Encoding, length: usize) -> Result<String, Error> {
    let bytes = entropy::random_bytes(encoding.byte_budget(length))?;
    let mut out = encoding.encode(&bytes);
    out.truncate(length);
    Ok(out)
}

#[cfg(feature = "async")]
pub(crate) async fn encoded_async(encoding: Encoding, length: usize) -> Result<String, Error> {
    let bytes = entropy::random_bytes_async(encoding.byte_budget(length)).await?;
    let mut out = encoding.encode(&bytes);
    out.truncate(length);
    Ok(out)
}
