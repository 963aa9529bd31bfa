//! Predicates over single code units.
//!
//! Only units in `0..=0xFF` can stand for a byte. Lead and ASCII tests treat
//! a wider unit as "not a byte"; the continuation test only looks at the low
//! byte, so units above `0xFF` are rejected by the scanner before it asks.

/// One element of a text sequence: a UTF-16 code unit.
pub type CodeUnit = u16;

/// Returns `true` if `c` is a 7-bit ASCII unit.
#[inline]
#[must_use]
pub const fn is_ascii_unit(c: CodeUnit) -> bool {
    c < 0x80
}

/// Returns `true` if the low byte of `c` is a UTF-8 continuation byte
/// (`10xxxxxx`).
#[inline]
#[must_use]
pub const fn is_continuation_unit(c: CodeUnit) -> bool {
    c & 0xC0 == 0x80
}

/// Number of continuation bytes that must follow the lead byte `c`.
///
/// Returns `Some(1)` for `110xxxxx`, `Some(2)` for `1110xxxx` and `Some(3)`
/// for `11110xxx`. ASCII units, continuation bytes, `0xF8..=0xFF` and wide
/// units are not lead bytes and yield `None`.
///
/// Overlong leads (`0xC0`, `0xC1`) and leads of out-of-range scalars
/// (`0xF5..=0xF7`) are accepted: only the bit pattern is checked.
#[inline]
#[must_use]
pub const fn lead_byte_length(c: CodeUnit) -> Option<usize> {
    if c > 0xFF {
        return None;
    }
    if c & 0xE0 == 0xC0 {
        Some(1)
    } else if c & 0xF0 == 0xE0 {
        Some(2)
    } else if c & 0xF8 == 0xF0 {
        Some(3)
    } else {
        None
    }
}
