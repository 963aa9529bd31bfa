//! Byte-buffer helpers: windows and byte order.

use crate::error::CodecError;

/// Native byte order, fixed when the crate is compiled.
const LITTLE_ENDIAN: bool = 1u16.to_ne_bytes()[0] == 1;

/// `true` on little-endian targets.
#[inline]
#[must_use]
pub const fn is_little_endian() -> bool {
    LITTLE_ENDIAN
}

/// Reverses the byte order of a 32-bit integer.
#[inline]
#[must_use]
pub const fn swap_endianness_32(i: u32) -> u32 {
    i.swap_bytes()
}

/// Borrows `len` bytes of `buf` starting at `start`.
///
/// `start` defaults to the beginning of the buffer and `len` to the rest of
/// it.
///
/// # Errors
///
/// [`CodecError::WindowOutOfBounds`] if the window does not fit in `buf`.
///
/// ```rust
/// use string_encode::byte_window;
///
/// let buf = [1, 2, 3, 4, 5];
/// assert_eq!(byte_window(&buf, Some(1), Some(3)).unwrap(), [2, 3, 4]);
/// assert_eq!(byte_window(&buf, Some(3), None).unwrap(), [4, 5]);
/// assert!(byte_window(&buf, Some(4), Some(2)).is_err());
/// ```
pub fn byte_window(
    buf: &[u8],
    start: Option<usize>,
    len: Option<usize>,
) -> Result<&[u8], CodecError> {
    let start = start.unwrap_or(0);
    let out_of_bounds = |end| CodecError::WindowOutOfBounds {
        start,
        end,
        len: buf.len(),
    };
    let end = match len {
        Some(len) => start
            .checked_add(len)
            .ok_or_else(|| out_of_bounds(usize::MAX))?,
        None => buf.len().max(start),
    };
    buf.get(start..end).ok_or_else(|| out_of_bounds(end))
}
