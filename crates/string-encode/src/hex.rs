//! Hexadecimal rendering and lenient parsing of byte buffers.

use alloc::{string::String, vec::Vec};

use crate::unit::CodeUnit;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Convert a single lowercase hex digit into its 0..=15 value.
#[inline]
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Renders `bytes` as lowercase hex, two digits per byte.
#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(b & 0x0F)]));
    }
    out
}

/// Reads the hex digits of `hex` into bytes, skipping everything else.
///
/// Only lowercase digits are read; `A-F` is skipped like any other
/// separator, matching what [`bytes_to_hex`] writes. Digits are paired in
/// order. A trailing unpaired digit becomes a byte of
/// its own, so `"abc"` reads as `[0xab, 0x0c]`.
///
/// ```rust
/// use string_encode::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("03 12 ef a8"), [0x03, 0x12, 0xef, 0xa8]);
/// assert_eq!(hex_to_bytes("de:ad:be:ef"), [0xde, 0xad, 0xbe, 0xef]);
/// assert!(hex_to_bytes("DE:AD").is_empty());
/// ```
#[must_use]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u8> = hex.bytes().filter_map(hex_val).collect();
    digits
        .chunks(2)
        .map(|pair| match *pair {
            [hi, lo] => (hi << 4) | lo,
            [lone] => lone,
            _ => unreachable!("chunks(2) yields one or two digits"),
        })
        .collect()
}

/// `true` if `text` has nothing but lowercase hex digits and ASCII
/// whitespace.
///
/// The empty string counts as hex.
#[must_use]
pub fn is_hex(text: &[CodeUnit]) -> bool {
    text.iter().all(|&c| {
        u8::try_from(c).is_ok_and(|b| hex_val(b).is_some() || b.is_ascii_whitespace())
    })
}
