//! Byte order handling for TIFF blocks
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when decoding fixed-width
//! integers out of a byte slice.

use byteorder::{BigEndian, LittleEndian, ByteOrder as _};

use crate::tiff::constants::header;
use crate::tiff::errors::{ExifError, ExifResult};

/// Represents the byte order of a TIFF block or container field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the two marker bytes of a TIFF header
    ///
    /// Both markers are palindromic, so the marker value is independent of
    /// the order it was read in.
    pub fn detect(marker: u16) -> ExifResult<Self> {
        match marker {
            header::LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian), // "II" (Intel)
            header::BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),       // "MM" (Motorola)
            _ => Err(ExifError::InvalidByteOrder(marker)),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Returns the handler implementing this byte order
    pub fn handler(&self) -> &'static dyn ByteOrderHandler {
        match self {
            ByteOrder::LittleEndian => &LittleEndianHandler,
            ByteOrder::BigEndian => &BigEndianHandler,
        }
    }
}

/// Trait for byte order handling strategies
///
/// Each method decodes from the start of `bytes`; callers guarantee the
/// slice holds at least the width of the value.
pub trait ByteOrderHandler: Send + Sync {
    /// Decode a u16 value
    fn read_u16(&self, bytes: &[u8]) -> u16;

    /// Decode a u32 value
    fn read_u32(&self, bytes: &[u8]) -> u32;

    /// Decode an i32 value
    fn read_i32(&self, bytes: &[u8]) -> i32;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, bytes: &[u8]) -> u16 {
        LittleEndian::read_u16(bytes)
    }

    fn read_u32(&self, bytes: &[u8]) -> u32 {
        LittleEndian::read_u32(bytes)
    }

    fn read_i32(&self, bytes: &[u8]) -> i32 {
        LittleEndian::read_i32(bytes)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, bytes: &[u8]) -> u16 {
        BigEndian::read_u16(bytes)
    }

    fn read_u32(&self, bytes: &[u8]) -> u32 {
        BigEndian::read_u32(bytes)
    }

    fn read_i32(&self, bytes: &[u8]) -> i32 {
        BigEndian::read_i32(bytes)
    }
}
