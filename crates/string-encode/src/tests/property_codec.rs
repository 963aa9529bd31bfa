use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use super::arbitrary::ByteText;
use crate::{
    Encoding, Utf8Mode, bytes_to_hex, bytes_to_text, classify_encoding, has_multibyte,
    hex_to_bytes, is_strict_ascii, is_well_formed_utf8, text_to_bytes, text_units,
};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: byte-range text survives a raw encode and decode unchanged.
#[test]
fn binary_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: ByteText) -> bool {
        let bytes = text_to_bytes(&text.0, Utf8Mode::Never).unwrap();
        bytes.len() == text.0.len() && bytes_to_text(&bytes, Utf8Mode::Never).unwrap() == text.0
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(ByteText) -> bool);
}

/// Property: any valid UTF-16 text survives an explicit UTF-8 encode and
/// decode, and the bytes are the standard UTF-8 encoding.
#[test]
fn utf8_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: String) -> bool {
        let units = text_units(&s);
        let bytes = text_to_bytes(&units, Utf8Mode::Always).unwrap();
        bytes == s.as_bytes() && bytes_to_text(&bytes, Utf8Mode::Always).unwrap() == units
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: guessing both ways restores text that is either pure ASCII or
/// has a unit above `0xFF`. Latin-1-only text is ambiguous and skipped.
#[test]
fn guess_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: String) -> bool {
        let units = text_units(&s);
        if has_multibyte(&units).is_none() && !is_strict_ascii(&units) {
            return true;
        }
        let bytes = text_to_bytes(&units, Utf8Mode::Guess).unwrap();
        bytes_to_text(&bytes, Utf8Mode::Guess).unwrap() == units
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: a guessed decode never fails and agrees with the explicit modes.
#[test]
fn guessed_decode_is_total_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let guessed = bytes_to_text(&bytes, Utf8Mode::Guess).unwrap();
        match bytes_to_text(&bytes, Utf8Mode::Always) {
            Ok(decoded) => guessed == decoded,
            Err(_) => guessed == bytes_to_text(&bytes, Utf8Mode::Never).unwrap(),
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: labels agree with the standalone predicates.
#[test]
fn classification_consistency_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: ByteText, wide: Option<u16>) -> bool {
        let mut text = text.0;
        if let Some(w) = wide {
            text.push(w | 0x100);
        }
        let label = classify_encoding(&text);
        if label != classify_encoding(&text) {
            return false;
        }
        match label {
            Encoding::Multibyte => has_multibyte(&text).is_some(),
            Encoding::Ascii => is_strict_ascii(&text),
            Encoding::Utf8 => is_well_formed_utf8(&text) && !is_strict_ascii(&text),
            Encoding::AsyncUtf8 | Encoding::Binary => {
                has_multibyte(&text).is_none() && !is_well_formed_utf8(&text)
            }
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(ByteText, Option<u16>) -> bool);
}

/// Property: hex rendering and parsing are inverse.
#[test]
fn hex_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let hex = bytes_to_hex(&bytes);
        hex.len() == bytes.len() * 2
            && hex_to_bytes(&hex) == bytes
            && bytes_to_hex(&hex_to_bytes(&hex)) == hex
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
