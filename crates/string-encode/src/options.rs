/// Whether a conversion goes through UTF-8.
///
/// Used by [`text_to_bytes`](crate::text_to_bytes) and
/// [`bytes_to_text`](crate::bytes_to_text). Converts from `bool`
/// (`true` is [`Utf8Mode::Always`]) and from `Option<bool>` (`None` is
/// [`Utf8Mode::Guess`]).
///
/// # Default
///
/// [`Utf8Mode::Guess`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Utf8Mode {
    /// Infer from the content.
    ///
    /// Encoding uses UTF-8 only when some unit does not fit in a byte.
    /// Decoding tries UTF-8 and silently falls back to one unit per byte
    /// when the bytes are not UTF-8.
    #[default]
    Guess,
    /// Always transcode through UTF-8. Malformed input is an error.
    Always,
    /// Never transcode: one byte per code unit.
    Never,
}

impl From<bool> for Utf8Mode {
    fn from(utf8: bool) -> Self {
        if utf8 { Utf8Mode::Always } else { Utf8Mode::Never }
    }
}

impl From<Option<bool>> for Utf8Mode {
    fn from(utf8: Option<bool>) -> Self {
        utf8.map_or(Utf8Mode::Guess, Utf8Mode::from)
    }
}
