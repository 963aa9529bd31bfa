use alloc::string::String;

use thiserror::Error;

/// Errors returned by the explicit (non-guessing) conversion paths.
///
/// Guessing conversions never produce [`CodecError::MalformedUtf8`]: when the
/// guess turns out wrong they fall back to the raw representation instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A code unit that does not fit in a byte was found while encoding
    /// without the UTF-8 transform.
    #[error("code unit {unit:#06x} at offset {offset} does not fit in a byte")]
    OutOfRangeUnit {
        /// The offending code unit.
        unit: u16,
        /// Index of the code unit in the input text.
        offset: usize,
    },
    /// A lone high or low surrogate cannot be packed as UTF-8.
    #[error("unpaired surrogate {unit:#06x} at offset {offset}")]
    UnpairedSurrogate {
        /// The surrogate code unit.
        unit: u16,
        /// Index of the code unit in the input text.
        offset: usize,
    },
    /// UTF-8 decoding was requested explicitly but the bytes are not
    /// well-formed UTF-8.
    #[error("malformed UTF-8 at byte offset {offset}")]
    MalformedUtf8 {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
    /// A byte window reaches past the end of its buffer.
    #[error("window {start}..{end} is out of bounds for a buffer of {len} bytes")]
    WindowOutOfBounds {
        /// First byte of the requested window.
        start: usize,
        /// One past the last byte of the requested window.
        end: usize,
        /// Length of the underlying buffer.
        len: usize,
    },
    /// The encoding label is not one of the known display encodings.
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),
}
