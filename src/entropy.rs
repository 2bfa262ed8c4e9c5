//! Entropy source - chunked fills from the operating system RNG.
//!
//! Every random byte in the crate flows through [`random_bytes`]; no other
//! module talks to the OS RNG directly.

use rand::TryRngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::error::Error;

/// Absolute ceiling on a single entropy request.
pub const MAX_BYTES: u64 = u32::MAX as u64;

/// Largest fill issued to the OS RNG in one call. Some secure-RNG
/// implementations refuse single requests above 64 KiB, so larger buffers
/// are populated by sequential fills into disjoint chunks.
const FILL_CEILING: usize = 65536;

/// Fetch `n` cryptographically secure random bytes.
///
/// The returned buffer zeroes itself on drop; callers hand it straight to
/// the selector or encoder and never persist it.
pub fn random_bytes(n: u64) -> Result<Zeroizing<Vec<u8>>, Error> {
    if n > MAX_BYTES {
        return Err(Error::EntropyCeiling {
            requested: n,
            max: MAX_BYTES,
        });
    }

    let mut bytes = Zeroizing::new(vec![0u8; n as usize]);
    for chunk in bytes.chunks_mut(FILL_CEILING) {
        OsRng.try_fill_bytes(chunk)?;
    }
    Ok(bytes)
}

/// Async variant of [`random_bytes`]: the fill runs on the blocking pool,
/// and the await is the only suspension point.
#[cfg(feature = "async")]
pub async fn random_bytes_async(n: u64) -> Result<Zeroizing<Vec<u8>>, Error> {
    if n > MAX_BYTES {
        return Err(Error::EntropyCeiling {
            requested: n,
            max: MAX_BYTES,
        });
    }

    tokio::task::spawn_blocking(move || random_bytes(n))
        .await
        .expect("entropy task panicked")
}
