#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use string_encode::{
    Encoding, Utf8Mode, binary_text, bytes_to_text, classify_encoding, count_utf8_bytes,
    has_multibyte, is_well_formed_utf8, scan_utf8, text_to_bytes,
};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Arbitrary UTF-16, including lone surrogates.
    units: Vec<u16>,
    /// Arbitrary bytes, also read as a binary string.
    bytes: Vec<u8>,
    /// Where to cut `bytes` when it happens to be UTF-8.
    cut: (u16, u16),
}

fn check_text(text: &[u16]) {
    let label = classify_encoding(text);
    assert_eq!(label, classify_encoding(text), "classification must be pure");
    assert_eq!(label == Encoding::Multibyte, has_multibyte(text).is_some());

    if let Some(strict) = scan_utf8(text, false) {
        assert!(strict.is_synchronous());
        assert_eq!(scan_utf8(text, true), Some(strict));
    }

    match text_to_bytes(text, Utf8Mode::Never) {
        Ok(bytes) => {
            assert_eq!(bytes_to_text(&bytes, Utf8Mode::Never).unwrap(), text);
        }
        Err(_) => assert!(has_multibyte(text).is_some()),
    }

    if let Ok(s) = String::from_utf16(text) {
        let bytes = text_to_bytes(text, Utf8Mode::Always).unwrap();
        assert_eq!(bytes, s.as_bytes());
        assert_eq!(bytes_to_text(&bytes, Utf8Mode::Always).unwrap(), text);
    } else {
        assert!(text_to_bytes(text, Utf8Mode::Always).is_err());
    }
}

fn check_bytes(bytes: &[u8], cut: (u16, u16)) {
    let text = binary_text(bytes);
    check_text(&text);

    let guessed = bytes_to_text(bytes, Utf8Mode::Guess).unwrap();
    match std::str::from_utf8(bytes) {
        Ok(s) => {
            assert!(is_well_formed_utf8(&text));
            assert_eq!(guessed, s.encode_utf16().collect::<Vec<_>>());

            let start = usize::from(cut.0) % (bytes.len() + 1);
            let end = start + usize::from(cut.1) % (bytes.len() - start + 1);
            let window = &text[start..end];
            let non_ascii = window.iter().filter(|&&c| c >= 0x80).count();
            assert_eq!(count_utf8_bytes(window, true), Some(non_ascii));
        }
        Err(_) => {
            assert!(bytes_to_text(bytes, Utf8Mode::Always).is_err());
            assert_eq!(guessed, text);
        }
    }
}

fuzz_target!(|input: Input| {
    check_text(&input.units);
    check_bytes(&input.bytes, input.cut);
});
