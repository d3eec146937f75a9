//! TIFF, JPEG and HEIC format constants
//!
//! This module defines constants used throughout the EXIF decoding code,
//! replacing magic numbers with descriptive names.

/// TIFF header constants
pub mod header {
    /// Standard TIFF magic number (42)
    pub const TIFF_MAGIC: u16 = 0x002A;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: u16 = 0x4949;

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: u16 = 0x4D4D;

    /// Size of the TIFF header; the first IFD must start at or after it
    pub const HEADER_SIZE: u32 = 8;
}

/// Image File Directory layout
pub mod ifd {
    /// Size of the entry count preceding the entries
    pub const ENTRY_COUNT_SIZE: usize = 2;

    /// Size of one directory entry
    pub const ENTRY_SIZE: usize = 12;

    /// Offset of the value-or-offset field within an entry
    pub const VALUE_FIELD_OFFSET: usize = 8;

    /// Bytes available for a value stored inline in an entry
    pub const INLINE_VALUE_SIZE: usize = 4;
}

/// Field types as defined in the TIFF spec
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
}

/// IFD0 tag ids pointing at sub-directories
pub mod tags {
    pub const EXIF_IFD_POINTER: u16 = 0x8769;
    pub const GPS_INFO_IFD_POINTER: u16 = 0x8825;
}

/// JPEG marker stream constants
pub mod jpeg {
    /// Start-of-image marker
    pub const SOI: [u8; 2] = [0xFF, 0xD8];

    /// Prefix byte of every marker
    pub const MARKER_PREFIX: u8 = 0xFF;

    /// APP1 marker id, carrying EXIF
    pub const APP1: u8 = 0xE1;

    /// Marker pair plus the big-endian segment length
    pub const SEGMENT_HEADER_SIZE: usize = 4;

    /// Size of the "Exif\0\0" identifier preceding the TIFF block
    pub const EXIF_IDENTIFIER_SIZE: usize = 6;
}

/// HEIC (ISO-BMFF) box scanning constants
pub mod heic {
    /// Type tag of the EXIF item info entry
    pub const EXIF_TAG: &[u8; 4] = b"Exif";

    /// Type tag of the item location box
    pub const ILOC_TAG: &[u8; 4] = b"iloc";

    /// Type tag of the leading file type box
    pub const FTYP_TAG: &[u8; 4] = b"ftyp";

    /// Distance from the "Exif" tag back to its item index
    pub const ITEM_INDEX_BACKSTEP: usize = 4;

    /// Distance from the "iloc" tag to its first extent record
    pub const ILOC_RECORDS_OFFSET: usize = 12;

    /// Size of one iloc extent record
    pub const ILOC_RECORD_SIZE: usize = 16;

    /// Offset of the extent offset field within a record
    pub const EXTENT_OFFSET_FIELD: usize = 8;

    /// Size of the preamble length field at the start of the EXIF extent
    pub const PREAMBLE_LENGTH_SIZE: usize = 4;
}
