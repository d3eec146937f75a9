//! EXIF extraction pipeline
//!
//! Container locator → TIFF header → IFD0 → EXIF/GPS sub-directories →
//! semantic resolution. The `read_*` functions report which structural
//! check failed; the `find_*` functions collapse every failure to `None`.

pub mod resolver;

use log::debug;

use crate::container::{ContainerKind, ContainerLocator, HeicLocator, JpegLocator};
use crate::tiff::errors::{ExifError, ExifResult};
use crate::tiff::reader::TiffReader;
use crate::tiff::types::ExifRecord;

/// Decodes the TIFF block starting at `tiff_start` into a resolved record
pub fn read_exif_data(data: &[u8], tiff_start: usize) -> ExifResult<ExifRecord> {
    let reader = TiffReader::new(data, tiff_start)?;
    let directories = reader.read_directories()?;
    Ok(resolver::resolve(directories))
}

/// Locates the TIFF block with `locator` and decodes it
pub fn read_exif_with(data: &[u8], locator: &dyn ContainerLocator) -> ExifResult<ExifRecord> {
    let tiff_start = locator.locate_tiff(data)?;
    debug!("{}: TIFF block at offset {}", locator.name(), tiff_start);
    read_exif_data(data, tiff_start)
}

/// Reads EXIF from a JPEG buffer
pub fn read_exif_from_jpeg(data: &[u8]) -> ExifResult<ExifRecord> {
    read_exif_with(data, &JpegLocator)
}

/// Reads EXIF from a HEIC buffer
pub fn read_exif_from_heic(data: &[u8]) -> ExifResult<ExifRecord> {
    read_exif_with(data, &HeicLocator)
}

/// Reads EXIF from a buffer of either container kind
pub fn read_exif(data: &[u8]) -> ExifResult<ExifRecord> {
    let kind = ContainerKind::detect(data).ok_or(ExifError::UnsupportedContainer)?;
    read_exif_with(data, kind.locator().as_ref())
}

/// Logs why no record was produced and discards the error
fn no_data(result: ExifResult<ExifRecord>) -> Option<ExifRecord> {
    match result {
        Ok(record) => Some(record),
        Err(e) => {
            debug!("No EXIF data: {}", e);
            None
        }
    }
}

/// Finds EXIF in a JPEG buffer, or None when there is none
pub fn find_exif_in_jpeg(data: &[u8]) -> Option<ExifRecord> {
    no_data(read_exif_from_jpeg(data))
}

/// Finds EXIF in a HEIC buffer, or None when there is none
pub fn find_exif_in_heic(data: &[u8]) -> Option<ExifRecord> {
    no_data(read_exif_from_heic(data))
}

/// Finds EXIF in a JPEG or HEIC buffer, or None when there is none
pub fn find_exif(data: &[u8]) -> Option<ExifRecord> {
    no_data(read_exif(data))
}
