//! Unbiased symbol selection via rejection sampling over 16-bit words.

use crate::entropy;
use crate::error::Error;

/// Incremental rejection sampler, shared by the sync and async drivers.
///
/// Consecutive entropy byte pairs are read as little-endian `u16` words.
/// Words above `max_valid` are discarded, not reused: mapping them through
/// `word % n` would make low-index symbols more probable whenever the
/// alphabet size does not divide 65536 evenly. Accepted words index the
/// alphabet by remainder.
pub(crate) struct Selector<'a> {
    alphabet: &'a [char],
    n: u32,
    max_valid: u32,
    batch_len: u64,
    wanted: usize,
    produced: usize,
    out: String,
}

impl<'a> Selector<'a> {
    pub(crate) fn new(length: usize, alphabet: &'a [char]) -> Self {
        debug_assert!(!alphabet.is_empty() && alphabet.len() <= crate::alphabet::MAX_ALPHABET);
        let n = alphabet.len() as u32;
        // One word per symbol plus 10% slack, so a second fetch stays rare.
        let batch_len = 2 * (length as f64 * 1.1).ceil() as u64;
        Self {
            alphabet,
            n,
            max_valid: (0x10000 / n) * n - 1,
            batch_len,
            wanted: length,
            produced: 0,
            out: String::with_capacity(length),
        }
    }

    /// Bytes to request per entropy fetch; fixed across refills.
    pub(crate) fn batch_len(&self) -> u64 {
        self.batch_len
    }

    pub(crate) fn is_done(&self) -> bool {
        self.produced == self.wanted
    }

    /// Consume one entropy batch, appending accepted symbols. Words left
    /// over once the output is full are discarded.
    pub(crate) fn feed(&mut self, entropy: &[u8]) {
        for pair in entropy.chunks_exact(2) {
            if self.produced == self.wanted {
                return;
            }
            let word = u16::from_le_bytes([pair[0], pair[1]]) as u32;
            if word > self.max_valid {
                continue;
            }
            self.out.push(self.alphabet[(word % self.n) as usize]);
            self.produced += 1;
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// Draw exactly `length` symbols uniformly from `alphabet`.
///
/// Refetches a fresh same-sized batch whenever rejections exhaust the
/// current one; a zero-length request consumes no entropy at all.
pub(crate) fn select(length: usize, alphabet: &[char]) -> Result<String, Error> {
    let mut selector = Selector::new(length, alphabet);
    while !selector.is_done() {
        let batch = entropy::random_bytes(selector.batch_len())?;
        selector.feed(&batch);
    }
    Ok(selector.finish())
}

#[cfg(feature = "async")]
pub(crate) async fn select_async(length: usize, alphabet: &[char]) -> Result<String, Error> {
    let mut selector = Selector::new(length, alphabet);
    while !selector.is_done() {
        let batch = entropy::random_bytes_async(selector.batch_len()).await?;
        selector.feed(&batch);
    }
    Ok(selector.finish())
}
