//! Convert text to and from byte buffers, and guess what encoding a string
//! is in.
//!
//! Text is modelled as a sequence of UTF-16 code units (`[u16]`), the way
//! hosts without a native buffer type store strings. A "binary" string keeps
//! one byte per code unit; a UTF-8 string stores the UTF-8 bytes of some
//! other text one byte per code unit. The classifier tells these apart with a
//! single scan:
//!
//! ```rust
//! use string_encode::{Encoding, binary_text, classify_encoding, text_units};
//!
//! assert_eq!(classify_encoding(&text_units("plain")), Encoding::Ascii);
//! assert_eq!(classify_encoding(&binary_text("€".as_bytes())), Encoding::Utf8);
//! assert_eq!(classify_encoding(&text_units("€")), Encoding::Multibyte);
//! ```
//!
//! Conversions guess the encoding unless told otherwise:
//!
//! ```rust
//! use string_encode::{Utf8Mode, bytes_to_text, text_to_bytes, text_units};
//!
//! let text = text_units("naïve ⚔");
//! let bytes = text_to_bytes(&text, Utf8Mode::Guess).unwrap();
//! assert_eq!(bytes, "naïve ⚔".as_bytes());
//! assert_eq!(bytes_to_text(&bytes, Utf8Mode::Guess).unwrap(), text);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bytes;
mod classify;
mod codec;
mod display;
mod error;
mod hex;
mod options;
mod scanner;
mod unit;

#[cfg(test)]
mod tests;

pub use bytes::{byte_window, is_little_endian, swap_endianness_32};
pub use classify::{
    Encoding, classify_encoding, count_utf8_bytes, has_multibyte, is_binary_representable,
    is_strict_ascii, is_well_formed_utf8, scan_utf8,
};
pub use codec::{
    binary_text, bytes_to_text, decode_utf8_or_raw, encode_utf8, text_to_bytes, text_units,
    try_decode_utf8,
};
pub use display::{DisplayEncoding, display_string};
pub use error::CodecError;
pub use hex::{bytes_to_hex, hex_to_bytes, is_hex};
pub use options::Utf8Mode;
pub use scanner::Utf8Scan;
pub use unit::{CodeUnit, is_ascii_unit, is_continuation_unit, lead_byte_length};
