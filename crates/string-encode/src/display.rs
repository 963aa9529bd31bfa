//! Rendering byte buffers as strings.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::{
    codec::{latin1_string, utf8_str},
    error::CodecError,
    hex::bytes_to_hex,
};

/// How [`display_string`] renders a buffer.
///
/// # Default
///
/// [`DisplayEncoding::Guess`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplayEncoding {
    /// One `char` per byte (`U+0000..=U+00FF`). Parsed from `binary` or
    /// `latin1`.
    Binary,
    /// Two lowercase hex digits per byte.
    Hex,
    /// Standard base64 with padding.
    Base64,
    /// Strict UTF-8. Parsed from `utf8` or `utf-8`.
    Utf8,
    /// UTF-8 if the bytes are well-formed, otherwise binary. Parsed from
    /// `auto`.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "auto"))]
    Guess,
}

impl DisplayEncoding {
    /// Canonical label, accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DisplayEncoding::Binary => "binary",
            DisplayEncoding::Hex => "hex",
            DisplayEncoding::Base64 => "base64",
            DisplayEncoding::Utf8 => "utf8",
            DisplayEncoding::Guess => "auto",
        }
    }
}

impl fmt::Display for DisplayEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" | "latin1" => Ok(DisplayEncoding::Binary),
            "hex" => Ok(DisplayEncoding::Hex),
            "base64" => Ok(DisplayEncoding::Base64),
            "utf8" | "utf-8" => Ok(DisplayEncoding::Utf8),
            "auto" => Ok(DisplayEncoding::Guess),
            other => Err(CodecError::UnknownEncoding(other.into())),
        }
    }
}

/// Renders `bytes` as a string.
///
/// # Errors
///
/// [`CodecError::MalformedUtf8`] for [`DisplayEncoding::Utf8`] when `bytes`
/// is not well-formed UTF-8. Every other encoding accepts any input.
///
/// ```rust
/// use string_encode::{DisplayEncoding, display_string};
///
/// let bytes = [0x58, 0xD7, 0xA9];
/// assert_eq!(display_string(&bytes, DisplayEncoding::Hex).unwrap(), "58d7a9");
/// assert_eq!(display_string(&bytes, DisplayEncoding::Binary).unwrap(), "X×©");
/// assert_eq!(display_string(&bytes, DisplayEncoding::Utf8).unwrap(), "X\u{5e9}");
/// ```
pub fn display_string(bytes: &[u8], encoding: DisplayEncoding) -> Result<String, CodecError> {
    match encoding {
        DisplayEncoding::Binary => Ok(latin1_string(bytes)),
        DisplayEncoding::Hex => Ok(bytes_to_hex(bytes)),
        DisplayEncoding::Base64 => Ok(base64(bytes)),
        DisplayEncoding::Utf8 => utf8_str(bytes).map(String::from),
        DisplayEncoding::Guess => {
            Ok(utf8_str(bytes).map_or_else(|_| latin1_string(bytes), String::from))
        }
    }
}

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn base64(bytes: &[u8]) -> String {
    let mut out = Vec::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let b0 = u32::from(chunk[0]);
        let b1 = chunk.get(1).copied().map_or(0, u32::from);
        let b2 = chunk.get(2).copied().map_or(0, u32::from);
        let triple = (b0 << 16) | (b1 << 8) | b2;

        for k in 0..4 {
            if k <= chunk.len() {
                let sextet = (triple >> (18 - 6 * k)) & 0x3F;
                out.push(BASE64_ALPHABET[sextet as usize]);
            } else {
                out.push(b'=');
            }
        }
    }
    // Every byte pushed is from the alphabet or '='.
    out.into_iter().map(char::from).collect()
}
