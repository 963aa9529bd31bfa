//! Conversions between code-unit text and byte buffers.
//!
//! Two representations of text as bytes are supported:
//!
//! - raw (binary): one byte per code unit. Only units up to `0xFF` fit.
//! - UTF-8: the text is read as UTF-16, and every scalar value is packed
//!   into one to four bytes.
//!
//! Decoding is the reverse. The raw decode cannot fail; the UTF-8 decode is
//! strict and rejects overlong forms, encoded surrogates and scalars above
//! `U+10FFFF`.
//!
//! # Guessing
//!
//! With [`Utf8Mode::Guess`], encoding goes through UTF-8 only when the text
//! has a unit that does not fit in a byte, and decoding tries UTF-8 first
//! and keeps the raw units when that fails. A guessed decode never fails,
//! but it will decode a binary string that merely looks like UTF-8.

use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;
use log::debug;

use crate::{classify::has_multibyte, error::CodecError, options::Utf8Mode, unit::CodeUnit};

/// Collects the UTF-16 code units of `s`.
#[must_use]
pub fn text_units(s: &str) -> Vec<CodeUnit> {
    s.encode_utf16().collect()
}

/// Widens every byte to a code unit: the binary string of `bytes`.
#[must_use]
pub fn binary_text(bytes: &[u8]) -> Vec<CodeUnit> {
    bytes.iter().copied().map(CodeUnit::from).collect()
}

/// Converts `text` to bytes.
///
/// # Errors
///
/// - [`CodecError::OutOfRangeUnit`] when encoding without UTF-8 and a unit
///   does not fit in a byte.
/// - [`CodecError::UnpairedSurrogate`] when encoding with UTF-8 and `text`
///   is not valid UTF-16.
///
/// ```rust
/// use string_encode::{CodecError, text_to_bytes, text_units};
///
/// let text = text_units("×");
/// assert_eq!(text_to_bytes(&text, false), Ok(vec![0xD7]));
/// assert_eq!(text_to_bytes(&text, true), Ok(vec![0xC3, 0x97]));
///
/// let wide = text_units("⚔");
/// assert!(matches!(
///     text_to_bytes(&wide, false),
///     Err(CodecError::OutOfRangeUnit { unit: 0x2694, offset: 0 })
/// ));
/// ```
pub fn text_to_bytes(text: &[CodeUnit], mode: impl Into<Utf8Mode>) -> Result<Vec<u8>, CodecError> {
    let utf8 = match mode.into() {
        Utf8Mode::Guess => has_multibyte(text).is_some(),
        Utf8Mode::Always => true,
        Utf8Mode::Never => false,
    };
    if utf8 { encode_utf8(text) } else { encode_raw(text) }
}

/// Converts `bytes` to text.
///
/// ASCII input is returned as is in every mode.
///
/// # Errors
///
/// [`CodecError::MalformedUtf8`] with [`Utf8Mode::Always`] when `bytes` is
/// not well-formed UTF-8. The other modes never fail.
pub fn bytes_to_text(bytes: &[u8], mode: impl Into<Utf8Mode>) -> Result<Vec<CodeUnit>, CodecError> {
    match mode.into() {
        Utf8Mode::Never => Ok(binary_text(bytes)),
        _ if bytes.is_ascii() => Ok(binary_text(bytes)),
        Utf8Mode::Always => decode_utf8(bytes),
        Utf8Mode::Guess => Ok(decode_utf8_or_raw(bytes)),
    }
}

/// Packs the scalar values of the UTF-16 `text` as UTF-8.
///
/// # Errors
///
/// [`CodecError::UnpairedSurrogate`] if `text` contains a lone surrogate.
pub fn encode_utf8(text: &[CodeUnit]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(text.len());
    let mut offset = 0;
    for decoded in char::decode_utf16(text.iter().copied()) {
        let ch = decoded.map_err(|err| CodecError::UnpairedSurrogate {
            unit: err.unpaired_surrogate(),
            offset,
        })?;
        let mut buf = [0u8; 4];
        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        offset += ch.len_utf16();
    }
    Ok(out)
}

/// Decodes `bytes` as UTF-8, or `None` if they are not well-formed.
#[must_use]
pub fn try_decode_utf8(bytes: &[u8]) -> Option<Vec<CodeUnit>> {
    decode_utf8(bytes).ok()
}

/// Decodes `bytes` as UTF-8, keeping one unit per byte if that fails.
#[must_use]
pub fn decode_utf8_or_raw(bytes: &[u8]) -> Vec<CodeUnit> {
    try_decode_utf8(bytes).unwrap_or_else(|| {
        debug!("{} bytes are not UTF-8, keeping them as binary", bytes.len());
        binary_text(bytes)
    })
}

fn encode_raw(text: &[CodeUnit]) -> Result<Vec<u8>, CodecError> {
    text.iter()
        .enumerate()
        .map(|(offset, &unit)| {
            u8::try_from(unit).map_err(|_| CodecError::OutOfRangeUnit { unit, offset })
        })
        .collect()
}

fn decode_utf8(bytes: &[u8]) -> Result<Vec<CodeUnit>, CodecError> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut offset = 0;
    while offset < bytes.len() {
        let (ch, len) = bstr::decode_utf8(&bytes[offset..]);
        let ch = ch.ok_or(CodecError::MalformedUtf8 { offset })?;
        let mut buf = [0u16; 2];
        out.extend_from_slice(ch.encode_utf16(&mut buf));
        offset += len;
    }
    Ok(out)
}

/// Borrows `bytes` as a `str`, failing like the explicit UTF-8 decode.
pub(crate) fn utf8_str(bytes: &[u8]) -> Result<&str, CodecError> {
    bytes.to_str().map_err(|err| CodecError::MalformedUtf8 {
        offset: err.valid_up_to(),
    })
}

/// One `char` per byte: the Latin-1 reading of `bytes`.
pub(crate) fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
