//! String utility functions
//!
//! Utilities for working with strings and text data.

/// Decodes bytes one character per byte
///
/// EXIF ASCII fields are not guaranteed to be valid UTF-8, so each byte is
/// taken as its Latin-1 code point rather than rejecting the field.
pub fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_string() {
        assert_eq!(bytes_to_string(b"Canon"), "Canon");
        assert_eq!(bytes_to_string(&[0x30, 0x32, 0x33, 0x30]), "0230");
        assert_eq!(bytes_to_string(&[0xE9]), "\u{e9}");
        assert_eq!(bytes_to_string(&[]), "");
    }
}
