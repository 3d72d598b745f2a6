//! Text file reading with a lossy UTF-8 fallback.
//!
//! Strategy:
//! 1. Strict UTF-8 decoding (fast path)
//! 2. On failure, decode again and drop malformed byte sequences

use encoding_rs::{DecoderResult, UTF_8};
use std::io;
use std::path::Path;

/// Read a file as text, discarding invalid UTF-8 instead of failing.
///
/// Returns the content and whether any bytes were dropped.
pub fn read_text_lossy(path: &Path) -> io::Result<(String, bool)> {
    let bytes = std::fs::read(path)?;
    Ok(decode_utf8_lossy(&bytes))
}

/// Decode UTF-8, dropping (not replacing) malformed sequences.
pub fn decode_utf8_lossy(bytes: &[u8]) -> (String, bool) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), false);
    }

    let mut decoder = UTF_8.new_decoder_without_bom_handling();
    let mut out = String::with_capacity(bytes.len());
    let mut offset = 0;
    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[offset..], &mut out, true);
        offset += read;
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => out.reserve(bytes.len() - offset + 4),
            DecoderResult::Malformed(_, _) => {}
        }
    }
    (out, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_valid_utf8_is_untouched() {
        let (text, lossy) = decode_utf8_lossy("Rust 🚀 résumé".as_bytes());
        assert_eq!(text, "Rust 🚀 résumé");
        assert!(!lossy);
    }

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let (text, lossy) = decode_utf8_lossy(b"5 years \xff\xfeof Go");
        assert_eq!(text, "5 years of Go");
        assert!(lossy);
    }

    #[test]
    fn test_read_text_lossy_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"caf\xc3\xa9 \xc3").unwrap();
        file.flush().unwrap();

        let (text, lossy) = read_text_lossy(file.path()).unwrap();
        assert_eq!(text, "café ");
        assert!(lossy);
    }
}
