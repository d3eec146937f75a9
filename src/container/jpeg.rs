//! JPEG marker scanner
//!
//! Walks the marker segments following SOI until the first APP1 segment,
//! whose payload is taken to be "Exif\0\0" followed by the TIFF block.

use log::debug;

use crate::container::ContainerLocator;
use crate::io::{ByteOrder, ByteReader};
use crate::tiff::constants::jpeg;
use crate::tiff::errors::{ExifError, ExifResult};

/// Locates the EXIF TIFF block in a JPEG marker stream
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegLocator;

impl ContainerLocator for JpegLocator {
    fn name(&self) -> &'static str {
        "JPEG"
    }

    fn locate_tiff(&self, data: &[u8]) -> ExifResult<usize> {
        if !data.matches_at(0, &jpeg::SOI) {
            debug!("Not a valid JPEG");
            return Err(ExifError::InvalidJpegSignature);
        }

        let mut offset = jpeg::SOI.len();
        while offset < data.len() {
            let prefix = data.read_u8(offset)?;
            if prefix != jpeg::MARKER_PREFIX {
                debug!("Not a valid marker at offset {}, found: {:#04x}", offset, prefix);
                return Err(ExifError::InvalidMarker { offset, found: prefix });
            }

            let marker = data.read_u8(offset + 1)?;
            debug!("Marker {:#04x} at offset {}", marker, offset);

            if marker == jpeg::APP1 {
                debug!("Found APP1 marker at offset {}", offset);
                return Ok(offset + jpeg::SEGMENT_HEADER_SIZE + jpeg::EXIF_IDENTIFIER_SIZE);
            }

            // Segment lengths are always big-endian and include the length field
            let length = data.read_u16(offset + 2, ByteOrder::BigEndian)?;
            offset += 2 + length as usize;
        }

        Err(ExifError::GenericError("No APP1 segment found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_app1_after_other_segments() {
        let mut data = vec![0xFF, 0xD8];
        data.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x04, 0xAA, 0xBB]);
        data.extend_from_slice(&[0xFF, 0xE1, 0x00, 0x10]);

        // APP1 at offset 8: marker(2) + length(2) + "Exif\0\0"(6)
        assert_eq!(JpegLocator.locate_tiff(&data).unwrap(), 18);
    }

    #[test]
    fn test_rejects_missing_soi() {
        let data = [0x89, 0x50, 0x4E, 0x47];
        assert!(matches!(JpegLocator.locate_tiff(&data), Err(ExifError::InvalidJpegSignature)));
    }

    #[test]
    fn test_rejects_malformed_marker() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x02, 0x12, 0x34];
        assert!(matches!(
            JpegLocator.locate_tiff(&data),
            Err(ExifError::InvalidMarker { offset: 6, found: 0x12 })
        ));
    }

    #[test]
    fn test_stream_without_app1() {
        let data = [0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x02];
        assert!(JpegLocator.locate_tiff(&data).is_err());
    }
}
