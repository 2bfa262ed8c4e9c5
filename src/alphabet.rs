//! Named alphabets and request resolution.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::Error;

/// Largest alphabet a 16-bit selector can index.
pub const MAX_ALPHABET: usize = 65536;

// Table order fixes symbol indexing; output semantics are unaffected.
static URL_SAFE: LazyLock<Vec<char>> = LazyLock::new(|| {
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-._~"
        .chars()
        .collect()
});

static NUMERIC: LazyLock<Vec<char>> = LazyLock::new(|| "0123456789".chars().collect());

// Excludes visually ambiguous characters.
static DISTINGUISHABLE: LazyLock<Vec<char>> =
    LazyLock::new(|| "CDEHKMPRTUWXY012458".chars().collect());

static ASCII_PRINTABLE: LazyLock<Vec<char>> =
    LazyLock::new(|| (0x21u8..=0x7e).map(char::from).collect());

static ALPHANUMERIC: LazyLock<Vec<char>> = LazyLock::new(|| {
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
        .chars()
        .collect()
});

/// Built-in alphabet or encoding selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Lowercase `0-9a-f`, produced by direct hex encoding.
    Hex,
    /// Standard `A-Za-z0-9+/`, produced by direct base64 encoding.
    Base64,
    UrlSafe,
    Numeric,
    Distinguishable,
    AsciiPrintable,
    Alphanumeric,
}

impl Kind {
    /// Every recognized kind, in CLI/TUI display order.
    pub const ALL: [Kind; 7] = [
        Kind::Hex,
        Kind::Base64,
        Kind::UrlSafe,
        Kind::Numeric,
        Kind::Distinguishable,
        Kind::AsciiPrintable,
        Kind::Alphanumeric,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Kind::Hex => "hex",
            Kind::Base64 => "base64",
            Kind::UrlSafe => "url-safe",
            Kind::Numeric => "numeric",
            Kind::Distinguishable => "distinguishable",
            Kind::AsciiPrintable => "ascii-printable",
            Kind::Alphanumeric => "alphanumeric",
        }
    }

    /// Number of distinct symbols; used for entropy estimates.
    pub fn size(self) -> usize {
        match self {
            Kind::Hex => 16,
            Kind::Base64 => 64,
            Kind::UrlSafe => URL_SAFE.len(),
            Kind::Numeric => NUMERIC.len(),
            Kind::Distinguishable => DISTINGUISHABLE.len(),
            Kind::AsciiPrintable => ASCII_PRINTABLE.len(),
            Kind::Alphanumeric => ALPHANUMERIC.len(),
        }
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Kind::Hex),
            "base64" => Ok(Kind::Base64),
            "url-safe" => Ok(Kind::UrlSafe),
            "numeric" => Ok(Kind::Numeric),
            "distinguishable" => Ok(Kind::Distinguishable),
            "ascii-printable" => Ok(Kind::AsciiPrintable),
            "alphanumeric" => Ok(Kind::Alphanumeric),
            other => Err(Error::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved generation target. The two dense encodings bypass the selector;
/// everything else carries its symbol table.
#[derive(Debug)]
pub(crate) enum Target<'a> {
    Hex,
    Base64,
    Chars(Cow<'a, [char]>),
}

/// Validate the selector half of a request and resolve it to a target.
///
/// Both absent defaults to hex. A custom set must hold 1..=65536 symbols.
pub(crate) fn resolve<'a>(
    kind: Option<Kind>,
    characters: Option<&'a str>,
) -> Result<Target<'a>, Error> {
    match (kind, characters) {
        (Some(_), Some(_)) => Err(Error::ConflictingSelector),
        (Some(kind), None) => Ok(match kind {
            Kind::Hex => Target::Hex,
            Kind::Base64 => Target::Base64,
            Kind::UrlSafe => Target::Chars(Cow::Borrowed(URL_SAFE.as_slice())),
            Kind::Numeric => Target::Chars(Cow::Borrowed(NUMERIC.as_slice())),
            Kind::Distinguishable => Target::Chars(Cow::Borrowed(DISTINGUISHABLE.as_slice())),
            Kind::AsciiPrintable => Target::Chars(Cow::Borrowed(ASCII_PRINTABLE.as_slice())),
            Kind::Alphanumeric => Target::Chars(Cow::Borrowed(ALPHANUMERIC.as_slice())),
        }),
        (None, None) => Ok(Target::Hex),
        (None, Some(characters)) => {
            let chars: Vec<char> = characters.chars().collect();
            if chars.is_empty() {
                return Err(Error::NoCharacters);
            }
            if chars.len() > MAX_ALPHABET {
                return Err(Error::TooManyCharacters(chars.len()));
            }
            Ok(Target::Chars(Cow::Owned(chars)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(Kind::Hex.size(), 16);
        assert_eq!(Kind::Base64.size(), 64);
        assert_eq!(Kind::UrlSafe.size(), 66);
        assert_eq!(Kind::Numeric.size(), 10);
        assert_eq!(Kind::Distinguishable.size(), 19);
        assert_eq!(Kind::AsciiPrintable.size(), 94);
        assert_eq!(Kind::Alphanumeric.size(), 62);
    }

    #[test]
    fn names_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(kind.name().parse::<Kind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "unknown".parse::<Kind>().unwrap_err();
        assert!(matches!(err, Error::UnknownType(ref s) if s == "unknown"));
    }

    #[test]
    fn conflicting_selector_rejected() {
        let err = resolve(Some(Kind::Hex), Some("1234")).unwrap_err();
        assert!(matches!(err, Error::ConflictingSelector));
    }

    #[test]
    fn custom_set_size_bounds() {
        assert!(matches!(resolve(None, Some("")), Err(Error::NoCharacters)));

        let oversized = "x".repeat(MAX_ALPHABET + 1);
        assert!(matches!(
            resolve(None, Some(oversized.as_str())),
            Err(Error::TooManyCharacters(n)) if n == MAX_ALPHABET + 1
        ));

        // 65536 symbols exactly is still legal.
        let max = "x".repeat(MAX_ALPHABET);
        assert!(resolve(None, Some(max.as_str())).is_ok());
    }

    #[test]
    fn default_is_hex() {
        assert!(matches!(resolve(None, None), Ok(Target::Hex)));
    }

    #[test]
    fn custom_set_counts_chars_not_bytes() {
        // Multi-byte symbols count once each.
        match resolve(None, Some("αβγ")).unwrap() {
            Target::Chars(chars) => assert_eq!(chars.len(), 3),
            _ => panic!("expected a symbol table"),
        }
    }
}
