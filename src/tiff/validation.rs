//! TIFF header validation
//!
//! The 8-byte header at the TIFF start anchor carries the byte order used
//! for every later read, the magic number and the offset of the first IFD.

use log::debug;

use crate::io::{ByteOrder, ByteReader};
use crate::tiff::constants::header;
use crate::tiff::errors::{ExifError, ExifResult};

/// Validated TIFF header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order of the whole block
    pub byte_order: ByteOrder,
    /// Offset of the first IFD, relative to the TIFF start
    pub first_ifd_offset: u32,
}

/// Validates the TIFF header found at `tiff_start`
///
/// # Arguments
/// * `data` - The whole input buffer
/// * `tiff_start` - Absolute offset of the TIFF block
///
/// # Returns
/// The header, or an error naming the first check that failed
pub fn validate_header(data: &[u8], tiff_start: usize) -> ExifResult<TiffHeader> {
    let marker = data.read_u16(tiff_start, ByteOrder::BigEndian)?;
    let byte_order = ByteOrder::detect(marker)?;
    debug!("Detected byte order: {}", byte_order.name());

    let magic = data.read_u16(tiff_start + 2, byte_order)?;
    if magic != header::TIFF_MAGIC {
        return Err(ExifError::InvalidMagic(magic));
    }

    let first_ifd_offset = data.read_u32(tiff_start + 4, byte_order)?;
    validate_ifd_offset(first_ifd_offset)?;
    debug!("First IFD offset: {}", first_ifd_offset);

    Ok(TiffHeader {
        byte_order,
        first_ifd_offset,
    })
}

/// Validates that an IFD offset points past the header
pub fn validate_ifd_offset(offset: u32) -> ExifResult<()> {
    if offset < header::HEADER_SIZE {
        return Err(ExifError::InvalidIfdOffset(offset));
    }

    Ok(())
}
