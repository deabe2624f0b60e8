use encoding_rs::WINDOWS_1252;

/// Decode file bytes to text, never failing.
///
/// Strict UTF-8 is attempted first. On failure the bytes are re-decoded as
/// windows-1252, a permissive single-byte encoding that maps every byte to a
/// character, so some text is always produced.
pub fn decode_source(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passes_through() {
        assert_eq!(decode_source("print('héllo')".as_bytes()), "print('héllo')");
    }

    #[test]
    fn test_invalid_utf8_falls_back_to_single_byte() {
        // 0xE9 is 'é' in windows-1252 but an invalid UTF-8 sequence here.
        let bytes = b"caf\xe9";
        assert_eq!(decode_source(bytes), "café");
    }

    #[test]
    fn test_arbitrary_bytes_always_produce_text() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let text = decode_source(&bytes);
        assert!(!text.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_source(b""), "");
    }
}
