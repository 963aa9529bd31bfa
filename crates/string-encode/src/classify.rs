//! Encoding guesses for code-unit strings.

use core::{fmt, str::FromStr};

use log::trace;

use crate::{
    error::CodecError,
    scanner::{Utf8Scan, scan},
    unit::{CodeUnit, is_ascii_unit},
};

/// The encoding a string appears to be in.
///
/// Labels, as returned by [`Encoding::as_str`]:
///
/// | variant     | label    |
/// |-------------|----------|
/// | `Ascii`     | `ascii`  |
/// | `Utf8`      | `utf8`   |
/// | `AsyncUtf8` | `~utf8`  |
/// | `Multibyte` | `mb`     |
/// | `Binary`    | `binary` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// Every unit is 7-bit ASCII. The empty string is ASCII.
    #[cfg_attr(feature = "serde", serde(rename = "ascii"))]
    Ascii,
    /// Byte-range units forming well-formed UTF-8 with at least one
    /// multi-byte sequence.
    #[cfg_attr(feature = "serde", serde(rename = "utf8"))]
    Utf8,
    /// UTF-8 whose first or last character was cut by slicing.
    #[cfg_attr(feature = "serde", serde(rename = "~utf8"))]
    AsyncUtf8,
    /// At least one unit does not fit in a byte.
    #[cfg_attr(feature = "serde", serde(rename = "mb"))]
    Multibyte,
    /// Byte-range units that are not UTF-8.
    #[cfg_attr(feature = "serde", serde(rename = "binary"))]
    Binary,
}

impl Encoding {
    /// Short label of the encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Utf8 => "utf8",
            Encoding::AsyncUtf8 => "~utf8",
            Encoding::Multibyte => "mb",
            Encoding::Binary => "binary",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(Encoding::Ascii),
            "utf8" => Ok(Encoding::Utf8),
            "~utf8" => Ok(Encoding::AsyncUtf8),
            "mb" => Ok(Encoding::Multibyte),
            "binary" => Ok(Encoding::Binary),
            other => Err(CodecError::UnknownEncoding(other.into())),
        }
    }
}

/// Guesses the encoding of `text`.
///
/// The first rule that matches wins:
///
/// 1. a unit above `0xFF` makes it [`Encoding::Multibyte`];
/// 2. a strict UTF-8 scan without multi-byte sequences makes it
///    [`Encoding::Ascii`];
/// 3. a strict UTF-8 scan with multi-byte sequences makes it
///    [`Encoding::Utf8`];
/// 4. a scan that only succeeds with truncated edges makes it
///    [`Encoding::AsyncUtf8`];
/// 5. anything else is [`Encoding::Binary`].
#[must_use]
pub fn classify_encoding(text: &[CodeUnit]) -> Encoding {
    if has_multibyte(text).is_some() {
        return Encoding::Multibyte;
    }

    let strict = match scan(text, false) {
        Ok(res) if res.is_ascii() => return Encoding::Ascii,
        Ok(_) => return Encoding::Utf8,
        Err(reason) => reason,
    };

    match scan(text, true) {
        Ok(res) => {
            trace!("strict scan failed ({strict}), edges tolerated: {res:?}");
            Encoding::AsyncUtf8
        }
        Err(reason) => {
            trace!("not UTF-8: {reason}");
            Encoding::Binary
        }
    }
}

/// Returns the first unit of `text` that does not fit in a byte.
#[must_use]
pub fn has_multibyte(text: &[CodeUnit]) -> Option<CodeUnit> {
    text.iter().copied().find(|&c| c > 0xFF)
}

/// `true` if every unit of `text` fits in a byte.
#[must_use]
pub fn is_binary_representable(text: &[CodeUnit]) -> bool {
    has_multibyte(text).is_none()
}

/// `true` if every unit of `text` is below `0x80`.
#[must_use]
pub fn is_strict_ascii(text: &[CodeUnit]) -> bool {
    text.iter().all(|&c| is_ascii_unit(c))
}

/// `true` if `text` is well-formed UTF-8 bytes, without truncated edges.
#[must_use]
pub fn is_well_formed_utf8(text: &[CodeUnit]) -> bool {
    scan(text, false).is_ok()
}

/// Counts the bytes of `text` that belong to multi-byte UTF-8 sequences.
///
/// Returns `Some(0)` for ASCII and `None` if `text` is not UTF-8. With
/// `allow_async_edges`, continuation bytes at the start and an incomplete
/// sequence at the end are accepted and counted.
#[must_use]
pub fn count_utf8_bytes(text: &[CodeUnit], allow_async_edges: bool) -> Option<usize> {
    scan_utf8(text, allow_async_edges).map(|res| res.bytes)
}

/// Like [`count_utf8_bytes`], but also reports which edges were tolerated.
#[must_use]
pub fn scan_utf8(text: &[CodeUnit], allow_async_edges: bool) -> Option<Utf8Scan> {
    scan(text, allow_async_edges)
        .inspect_err(|reason| trace!("UTF-8 scan rejected input: {reason}"))
        .ok()
}
