//! HEIC box scanner
//!
//! Finds the EXIF item through the metadata box: the "Exif" item type tag
//! gives the item index, and the matching iloc extent record gives the byte
//! offset of the item. The item starts with a big-endian preamble length,
//! after which the TIFF block begins.

use log::debug;

use crate::container::ContainerLocator;
use crate::io::{ByteOrder, ByteReader};
use crate::tiff::constants::heic;
use crate::tiff::errors::{ExifError, ExifResult};

/// Locates the EXIF TIFF block in a HEIC file
#[derive(Debug, Clone, Copy, Default)]
pub struct HeicLocator;

impl HeicLocator {
    /// Absolute bounds of the metadata box following the ftyp box
    fn metadata_range(data: &[u8]) -> ExifResult<(usize, usize)> {
        let ftyp_size = data.read_u32(0, ByteOrder::BigEndian)? as usize;
        let meta_size = data.read_u32(ftyp_size, ByteOrder::BigEndian)? as usize;
        debug!("ftyp box: {} bytes, metadata box: {} bytes", ftyp_size, meta_size);

        Ok((ftyp_size, ftyp_size.saturating_add(meta_size)))
    }

    /// First position in `start..end` where `tag` occurs
    fn find_tag(data: &[u8], start: usize, end: usize, tag: &[u8]) -> Option<usize> {
        let end = end.min(data.len());
        (start..end).find(|&i| data.matches_at(i, tag))
    }
}

impl ContainerLocator for HeicLocator {
    fn name(&self) -> &'static str {
        "HEIC"
    }

    fn locate_tiff(&self, data: &[u8]) -> ExifResult<usize> {
        let (meta_start, meta_end) = Self::metadata_range(data)?;

        let exif_offset = Self::find_tag(data, meta_start, meta_end, heic::EXIF_TAG)
            .ok_or(ExifError::MissingBox("Exif"))?;
        let iloc_offset = Self::find_tag(data, meta_start, meta_end, heic::ILOC_TAG)
            .ok_or(ExifError::MissingBox("iloc"))?;
        debug!("Found Exif tag at {}, iloc at {}", exif_offset, iloc_offset);

        let index_position = exif_offset
            .checked_sub(heic::ITEM_INDEX_BACKSTEP)
            .ok_or(ExifError::MissingBox("Exif"))?;
        let exif_item = data.read_u16(index_position, ByteOrder::BigEndian)?;
        debug!("EXIF item index: {}", exif_item);

        let mut record = iloc_offset + heic::ILOC_RECORDS_OFFSET;
        while record < meta_end {
            let item = data.read_u16(record, ByteOrder::BigEndian)?;
            if item == exif_item {
                let extent = data.read_u32(record + heic::EXTENT_OFFSET_FIELD, ByteOrder::BigEndian)? as usize;
                let preamble = data.read_u32(extent, ByteOrder::BigEndian)? as usize;
                debug!("EXIF extent at {}, preamble {} bytes", extent, preamble);

                return Ok(extent + heic::PREAMBLE_LENGTH_SIZE + preamble);
            }
            record += heic::ILOC_RECORD_SIZE;
        }

        Err(ExifError::MissingExifItem(exif_item))
    }
}
