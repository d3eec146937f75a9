//! Custom error types for EXIF processing

use std::fmt;
use std::io;

/// EXIF-specific error types
///
/// Every structural failure maps to one variant so that callers wanting
/// diagnostics can tell which check rejected the input.
#[derive(Debug)]
pub enum ExifError {
    /// I/O error
    IoError(io::Error),
    /// Read past the end of the buffer
    OutOfBounds { offset: usize, len: usize, size: usize },
    /// Buffer does not start with the JPEG SOI marker
    InvalidJpegSignature,
    /// Expected a 0xFF marker prefix
    InvalidMarker { offset: usize, found: u8 },
    /// Invalid byte order marker
    InvalidByteOrder(u16),
    /// TIFF magic number was not 42
    InvalidMagic(u16),
    /// First IFD offset does not point past the header
    InvalidIfdOffset(u32),
    /// Required HEIC box tag not found
    MissingBox(&'static str),
    /// No iloc extent carries the EXIF item
    MissingExifItem(u16),
    /// Container kind could not be determined
    UnsupportedContainer,
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::OutOfBounds { offset, len, size } => write!(
                f,
                "Read of {} bytes at offset {} exceeds buffer size {}",
                len, offset, size
            ),
            ExifError::InvalidJpegSignature => write!(f, "Not a valid JPEG (missing 0xFFD8)"),
            ExifError::InvalidMarker { offset, found } => write!(
                f,
                "Not a valid marker at offset {}, found: {:#04x}",
                offset, found
            ),
            ExifError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            ExifError::InvalidMagic(v) => write!(f, "Invalid TIFF magic number: {:#06x}", v),
            ExifError::InvalidIfdOffset(v) => write!(f, "Invalid first IFD offset: {}", v),
            ExifError::MissingBox(name) => write!(f, "HEIC box not found: {}", name),
            ExifError::MissingExifItem(item) => {
                write!(f, "No iloc extent found for EXIF item {}", item)
            }
            ExifError::UnsupportedContainer => write!(f, "Unsupported container format"),
            ExifError::GenericError(msg) => write!(f, "EXIF error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

/// Result type for EXIF operations
pub type ExifResult<T> = Result<T, ExifError>;

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}
