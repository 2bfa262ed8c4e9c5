use std::collections::HashSet;

use randstr::{Error, Kind, Request, generate};

const HEX: &str = "0123456789abcdef";
const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-._~";
const NUMERIC: &str = "0123456789";
const DISTINGUISHABLE: &str = "CDEHKMPRTUWXY012458";
const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn assert_subset_of(s: &str, allowed: &str) {
    let allowed: HashSet<char> = allowed.chars().collect();
    assert!(
        s.chars().all(|c| allowed.contains(&c)),
        "unexpected symbol in {s:?}"
    );
}

/// Number of distinct symbols across `target_size * 640` generated
/// characters. The chance of missing any symbol of a set this small over
/// that many draws is negligible (below 1e-256 for the sizes used here).
fn distinct_symbols(request: &Request, target_size: usize) -> usize {
    let request = Request {
        length: target_size * 640,
        ..request.clone()
    };
    generate(&request).unwrap().chars().collect::<HashSet<_>>().len()
}

#[test]
fn default_type_is_hex() {
    assert_eq!(generate(&Request::new(0)).unwrap().len(), 0);
    assert_eq!(generate(&Request::new(10)).unwrap().len(), 10);
    assert_eq!(generate(&Request::new(100)).unwrap().len(), 100);
    assert_subset_of(&generate(&Request::new(100)).unwrap(), HEX);
    assert_eq!(distinct_symbols(&Request::default(), 16), 16);
}

#[test]
fn hex() {
    for length in [0, 10, 100] {
        let s = generate(&Request::new(length).kind(Kind::Hex)).unwrap();
        assert_eq!(s.len(), length);
        assert_subset_of(&s, HEX);
    }
    assert_eq!(distinct_symbols(&Request::default().kind(Kind::Hex), 16), 16);
}

#[test]
fn base64() {
    for length in [0, 10, 100] {
        let s = generate(&Request::new(length).kind(Kind::Base64)).unwrap();
        assert_eq!(s.len(), length);
        assert_subset_of(&s, BASE64);
    }
    assert_eq!(
        distinct_symbols(&Request::default().kind(Kind::Base64), 64),
        64
    );
}

#[test]
fn url_safe() {
    for length in [0, 10, 100] {
        let s = generate(&Request::new(length).kind(Kind::UrlSafe)).unwrap();
        assert_eq!(s.len(), length);
        assert_subset_of(&s, URL_SAFE);
    }
    assert_eq!(
        distinct_symbols(&Request::default().kind(Kind::UrlSafe), 66),
        66
    );
}

#[test]
fn numeric() {
    for length in [0, 10, 100] {
        let s = generate(&Request::new(length).kind(Kind::Numeric)).unwrap();
        assert_eq!(s.len(), length);
        assert_subset_of(&s, NUMERIC);
    }
    assert_eq!(
        distinct_symbols(&Request::default().kind(Kind::Numeric), 10),
        10
    );
}

#[test]
fn distinguishable() {
    for length in [0, 10, 100] {
        let s = generate(&Request::new(length).kind(Kind::Distinguishable)).unwrap();
        assert_eq!(s.len(), length);
        assert_subset_of(&s, DISTINGUISHABLE);
    }
    assert_eq!(
        distinct_symbols(&Request::default().kind(Kind::Distinguishable), 19),
        19
    );
}

#[test]
fn ascii_printable() {
    for length in [0, 10, 100] {
        let s = generate(&Request::new(length).kind(Kind::AsciiPrintable)).unwrap();
        assert_eq!(s.len(), length);
        assert!(s.chars().all(|c| ('\u{21}'..='\u{7e}').contains(&c)));
    }
}

#[test]
fn alphanumeric() {
    for length in [0, 10, 100] {
        let s = generate(&Request::new(length).kind(Kind::Alphanumeric)).unwrap();
        assert_eq!(s.len(), length);
        assert_subset_of(&s, ALPHANUMERIC);
    }
    assert_eq!(
        distinct_symbols(&Request::default().kind(Kind::Alphanumeric), 62),
        62
    );
}

#[test]
fn custom_characters() {
    for length in [0, 10, 100] {
        let s = generate(&Request::new(length).characters("1234")).unwrap();
        assert_eq!(s.len(), length);
        assert_subset_of(&s, "1234");
    }
    assert_eq!(distinct_symbols(&Request::default().characters("1234"), 4), 4);
    assert_eq!(
        distinct_symbols(&Request::default().characters("0123456789"), 10),
        10
    );
}

#[test]
fn single_symbol_custom_set_repeats_it() {
    let s = generate(&Request::new(17).characters("v")).unwrap();
    assert_eq!(s, "v".repeat(17));
}

#[test]
fn multibyte_custom_set() {
    let s = generate(&Request::new(50).characters("日月火水")).unwrap();
    assert_eq!(s.chars().count(), 50);
    assert_subset_of(&s, "日月火水");
}

#[test]
fn conflicting_selector_rejected() {
    let request = Request {
        length: 0,
        kind: Some(Kind::Hex),
        characters: Some("1234".to_string()),
    };
    assert!(matches!(
        generate(&request),
        Err(Error::ConflictingSelector)
    ));
}

#[test]
fn unknown_type_rejected_at_parse_boundary() {
    assert!(matches!(
        "unknown".parse::<Kind>(),
        Err(Error::UnknownType(ref s)) if s == "unknown"
    ));
}

#[test]
fn empty_custom_set_rejected() {
    assert!(matches!(
        generate(&Request::new(0).characters("")),
        Err(Error::NoCharacters)
    ));
}

#[test]
fn oversized_custom_set_rejected() {
    let characters = "x".repeat(65537);
    assert!(matches!(
        generate(&Request::new(0).characters(characters)),
        Err(Error::TooManyCharacters(65537))
    ));
}

#[test]
fn repeated_requests_are_not_memoized() {
    // Two 64-symbol hex strings collide with probability 2^-256.
    let request = Request::new(64);
    assert_ne!(generate(&request).unwrap(), generate(&request).unwrap());
}

#[cfg(feature = "async")]
mod async_variant {
    use super::*;
    use randstr::generate_async;

    #[tokio::test]
    async fn same_semantics_as_sync() {
        let s = generate_async(&Request::new(100)).await.unwrap();
        assert_eq!(s.len(), 100);
        assert_subset_of(&s, HEX);

        let s = generate_async(&Request::new(100).kind(Kind::Distinguishable))
            .await
            .unwrap();
        assert_eq!(s.len(), 100);
        assert_subset_of(&s, DISTINGUISHABLE);

        assert_eq!(generate_async(&Request::new(0)).await.unwrap(), "");
    }

    #[tokio::test]
    async fn same_validation_as_sync() {
        let request = Request {
            length: 4,
            kind: Some(Kind::Numeric),
            characters: Some("1234".to_string()),
        };
        assert!(matches!(
            generate_async(&request).await,
            Err(Error::ConflictingSelector)
        ));
    }
}
