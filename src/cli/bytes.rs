//! Raw entropy output mode.

use std::fs::OpenOptions;
use std::io::Write;

use randstr::entropy;

use super::prompts;

/// Parse byte count with optional K, M, G suffix
pub fn parse_byte_count(s: &str) -> Option<u64> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if s.ends_with('K') {
        (&s[..s.len() - 1], 1024)
    } else if s.ends_with('M') {
        (&s[..s.len() - 1], 1024 * 1024)
    } else if s.ends_with('G') {
        (&s[..s.len() - 1], 1024 * 1024 * 1024)
    } else {
        (s.as_str(), 1)
    };
    num_str.parse::<u64>().ok().map(|n| n * multiplier)
}

fn write_bytes<W: Write>(out: &mut W, limit: Option<u64>) {
    // Matches the entropy source's per-call fill ceiling, so each loop
    // iteration is a single OS RNG call.
    const CHUNK: u64 = 65536;
    let mut written: u64 = 0;

    loop {
        let want = match limit {
            Some(limit) => {
                let remaining = limit - written;
                if remaining == 0 {
                    break;
                }
                remaining.min(CHUNK)
            }
            None => CHUNK,
        };

        let buf = match entropy::random_bytes(want) {
            Ok(buf) => buf,
            Err(e) => {
                prompts::error(&e.to_string());
                break;
            }
        };
        if out.write_all(&buf).is_err() {
            break;
        }
        written += want;
    }
}

/// Stream raw random bytes to stdout or a file, up to `limit` if given.
pub fn output(limit: Option<u64>, file_path: Option<&str>) {
    if let Some(path) = file_path {
        let mut file = match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
        {
            Ok(file) => file,
            Err(e) => {
                prompts::error(&format!("Failed to open {path}: {e}"));
                return;
            }
        };
        write_bytes(&mut file, limit);
    } else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_bytes(&mut out, limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_count_suffixes() {
        assert_eq!(parse_byte_count("512"), Some(512));
        assert_eq!(parse_byte_count("4k"), Some(4096));
        assert_eq!(parse_byte_count("2M"), Some(2 * 1024 * 1024));
        assert_eq!(parse_byte_count("1G"), Some(1024 * 1024 * 1024));
        assert_eq!(parse_byte_count("nope"), None);
    }

    #[test]
    fn limited_write_produces_exact_count() {
        let mut sink = Vec::new();
        write_bytes(&mut sink, Some(70000));
        assert_eq!(sink.len(), 70000);
    }
}
