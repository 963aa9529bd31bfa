//! Single-pass UTF-8 scanner over byte-range code units.
//!
//! The scanner answers one question: do these code units, read as bytes,
//! form UTF-8? It also answers a softer one. A buffer sliced out of a larger
//! one at an arbitrary byte offset may start with the tail of a character
//! and end with the head of another. With `allow_async_edges` set, the
//! scanner tolerates exactly those two defects:
//!
//! - continuation bytes at the very start of the input, before any other
//!   unit;
//! - a multi-byte sequence cut short by the end of the input.
//!
//! A stray continuation byte anywhere else, an invalid lead byte, or a lead
//! byte followed by a non-continuation byte is always malformed.
//!
//! The scan does not check for overlong forms or surrogate scalars, it only
//! follows the lead/continuation bit patterns.
//!
//! Result
//! - [`Utf8Scan::bytes`] counts the bytes that belong to multi-byte
//!   sequences, lead bytes included, plus tolerated edge bytes. ASCII units
//!   are not counted, so an ASCII-only (or empty) input scans to zero.

use thiserror::Error;

use crate::unit::{CodeUnit, is_ascii_unit, is_continuation_unit, lead_byte_length};

/// Outcome of a successful UTF-8 scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Scan {
    /// Number of bytes in multi-byte sequences, tolerated edges included.
    pub bytes: usize,
    /// Continuation bytes accepted at the start of the input.
    pub leading: usize,
    /// Bytes of the incomplete sequence accepted at the end of the input.
    pub trailing: usize,
}

impl Utf8Scan {
    /// `true` when no multi-byte sequence was seen.
    #[must_use]
    pub fn is_ascii(&self) -> bool {
        self.bytes == 0
    }

    /// `true` when neither edge needed to be tolerated.
    #[must_use]
    pub fn is_synchronous(&self) -> bool {
        self.leading == 0 && self.trailing == 0
    }
}

/// Why a scan failed. Only used for logging; callers see `None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Malformed {
    #[error("unit {unit:#06x} at {offset} is not a byte")]
    WideUnit { unit: CodeUnit, offset: usize },
    #[error("continuation byte {unit:#04x} at {offset} has no lead byte")]
    StrayContinuation { unit: CodeUnit, offset: usize },
    #[error("{unit:#04x} at {offset} is not a lead byte")]
    InvalidLead { unit: CodeUnit, offset: usize },
    #[error("expected a continuation byte at {offset}, found {unit:#06x}")]
    MissingContinuation { unit: CodeUnit, offset: usize },
    #[error("sequence at {offset} is cut short by the end of input")]
    Truncated { offset: usize },
}

/// Scans `units` as UTF-8 bytes.
pub(crate) fn scan(units: &[CodeUnit], allow_async_edges: bool) -> Result<Utf8Scan, Malformed> {
    let mut out = Utf8Scan::default();
    let len = units.len();
    let mut i = 0;

    while i < len {
        let unit = units[i];
        let offset = i;
        i += 1;

        if is_ascii_unit(unit) {
            continue;
        }
        if unit >= 0xFF {
            return Err(Malformed::WideUnit { unit, offset });
        }

        if is_continuation_unit(unit) {
            // Only a run of continuation bytes starting at offset 0 is an edge.
            if allow_async_edges && out.leading == offset {
                out.leading += 1;
                out.bytes += 1;
                continue;
            }
            return Err(Malformed::StrayContinuation { unit, offset });
        }

        let Some(needed) = lead_byte_length(unit) else {
            return Err(Malformed::InvalidLead { unit, offset });
        };

        let available = needed.min(len - i);
        for (k, &next) in units[i..i + available].iter().enumerate() {
            if !is_continuation_unit(next) {
                return Err(Malformed::MissingContinuation {
                    unit: next,
                    offset: i + k,
                });
            }
        }
        out.bytes += 1 + available;
        i += available;

        if available < needed {
            if !allow_async_edges {
                return Err(Malformed::Truncated { offset });
            }
            out.trailing = 1 + available;
        }
    }

    Ok(out)
}
