//! End-to-end conversions of the reference strings, per group of strings
//! that share an expected behavior.

use alloc::{string::String, vec::Vec};

use rstest::rstest;

use super::fixtures::{ASCII, ASYNC_EDGES, BINARY, LOOKS_LIKE_BOTH, MULTIBYTE, units, utf8_text};
use crate::{
    DisplayEncoding, Utf8Mode, bytes_to_hex, bytes_to_text, display_string, hex_to_bytes,
    text_to_bytes, unit::CodeUnit,
};

fn display_units(bytes: &[u8], encoding: DisplayEncoding) -> Vec<CodeUnit> {
    display_string(bytes, encoding).unwrap().encode_utf16().collect()
}

// ─────────────────────────────────────────────────────────────────────
// Binary strings: no need to encode them as UTF-8
// ─────────────────────────────────────────────────────────────────────

#[rstest]
#[case::empty("")]
#[case::ascii(ASCII)]
#[case::latin1(BINARY)]
#[case::async_edges(ASYNC_EDGES)]
fn binary_strings(#[case] s: &str) {
    let text = units(s);

    let bytes = text_to_bytes(&text, Utf8Mode::Guess).unwrap();
    assert_eq!(bytes.len(), text.len());
    assert_eq!(bytes_to_text(&bytes, Utf8Mode::Guess).unwrap(), text);
    assert_eq!(display_units(&bytes, DisplayEncoding::Binary), text);

    // Could encode as well.
    let bytes = text_to_bytes(&text, Utf8Mode::Always).unwrap();
    assert_eq!(bytes_to_text(&bytes, Utf8Mode::Always).unwrap(), text);

    // Or force no guess.
    let bytes = text_to_bytes(&text, Utf8Mode::Never).unwrap();
    assert_eq!(bytes_to_text(&bytes, Utf8Mode::Never).unwrap(), text);
}

// ─────────────────────────────────────────────────────────────────────
// Already encoded UTF-8 strings: kept as bytes
// ─────────────────────────────────────────────────────────────────────

#[rstest]
#[case::encoded(utf8_text())]
#[case::looks_like_both(units(LOOKS_LIKE_BOTH))]
#[case::async_edges(units(ASYNC_EDGES))]
fn utf8_strings_stay_encoded(#[case] text: Vec<CodeUnit>) {
    let bytes = text_to_bytes(&text, Utf8Mode::Never).unwrap();
    assert_eq!(bytes.len(), text.len());
    assert_eq!(bytes_to_text(&bytes, Utf8Mode::Never).unwrap(), text);
    assert_eq!(display_units(&bytes, DisplayEncoding::Binary), text);
}

// ─────────────────────────────────────────────────────────────────────
// Multibyte strings: encoded as UTF-8
// ─────────────────────────────────────────────────────────────────────

#[rstest]
#[case::wide(MULTIBYTE)]
#[case::looks_like_both(LOOKS_LIKE_BOTH)]
fn multibyte_strings_encode_as_utf8(#[case] s: &str) {
    let text = units(s);
    let bytes = text_to_bytes(&text, Utf8Mode::Always).unwrap();
    assert!(bytes.len() > text.len());
    assert_eq!(bytes_to_text(&bytes, Utf8Mode::Always).unwrap(), text);
    assert_eq!(display_string(&bytes, DisplayEncoding::Utf8).unwrap(), s);
}

// ─────────────────────────────────────────────────────────────────────
// Guessing both ways
// ─────────────────────────────────────────────────────────────────────

#[rstest]
#[case::empty("")]
#[case::ascii(ASCII)]
#[case::latin1(BINARY)]
#[case::async_edges(ASYNC_EDGES)]
#[case::wide(MULTIBYTE)]
fn guess_restores(#[case] s: &str) {
    let text = units(s);
    let bytes = text_to_bytes(&text, Utf8Mode::Guess).unwrap();
    assert_eq!(bytes_to_text(&bytes, Utf8Mode::Guess).unwrap(), text);
    assert_eq!(display_units(&bytes, DisplayEncoding::Guess), text);
}

#[rstest]
#[case::encoded(utf8_text())]
#[case::looks_like_both(units(LOOKS_LIKE_BOTH))]
fn guess_decodes_lookalikes(#[case] text: Vec<CodeUnit>) {
    let bytes = text_to_bytes(&text, Utf8Mode::Guess).unwrap();
    assert_ne!(bytes_to_text(&bytes, Utf8Mode::Guess).unwrap(), text);
    assert_ne!(display_units(&bytes, DisplayEncoding::Guess), text);
}

#[test]
fn encoded_text_decodes_to_original() {
    let bytes = text_to_bytes(&utf8_text(), Utf8Mode::Never).unwrap();
    let decoded = bytes_to_text(&bytes, Utf8Mode::Always).unwrap();
    assert_eq!(String::from_utf16(&decoded).unwrap(), MULTIBYTE);
}

// ─────────────────────────────────────────────────────────────────────
// Hex
// ─────────────────────────────────────────────────────────────────────

#[test]
fn hex_of_binary_string() {
    let bytes = text_to_bytes(&units(LOOKS_LIKE_BOTH), Utf8Mode::Guess).unwrap();
    let hex = display_string(&bytes, DisplayEncoding::Hex).unwrap();
    assert_eq!(hex, "58d7a9");

    let unhex = hex_to_bytes(&hex);
    assert_eq!(
        bytes_to_text(&unhex, Utf8Mode::Never).unwrap(),
        bytes_to_text(&bytes, Utf8Mode::Never).unwrap()
    );

    assert_eq!(bytes_to_hex(&hex_to_bytes("03 12 ef a8")), "0312efa8");
}
