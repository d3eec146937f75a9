//! Random-access reads over an immutable buffer
//!
//! The buffer carries no endianness of its own: every multi-byte read takes
//! the byte order explicitly, so fixed big-endian container framing and
//! TIFF-ordered fields can be read from the same buffer in one pass.

use crate::io::byte_order::ByteOrder;
use crate::tiff::errors::{ExifError, ExifResult};

/// Trait for bounds-checked, offset-addressed reads
pub trait ByteReader {
    /// Total number of readable bytes
    fn size(&self) -> usize;

    /// Borrow `len` bytes starting at `offset`
    fn read_bytes(&self, offset: usize, len: usize) -> ExifResult<&[u8]>;

    /// Read a single byte
    fn read_u8(&self, offset: usize) -> ExifResult<u8> {
        Ok(self.read_bytes(offset, 1)?[0])
    }

    /// Read a u16 value in the given byte order
    fn read_u16(&self, offset: usize, order: ByteOrder) -> ExifResult<u16> {
        let bytes = self.read_bytes(offset, 2)?;
        Ok(order.handler().read_u16(bytes))
    }

    /// Read a u32 value in the given byte order
    fn read_u32(&self, offset: usize, order: ByteOrder) -> ExifResult<u32> {
        let bytes = self.read_bytes(offset, 4)?;
        Ok(order.handler().read_u32(bytes))
    }

    /// Read an i32 value in the given byte order
    fn read_i32(&self, offset: usize, order: ByteOrder) -> ExifResult<i32> {
        let bytes = self.read_bytes(offset, 4)?;
        Ok(order.handler().read_i32(bytes))
    }

    /// Checks whether `tag` occurs verbatim at `offset`
    fn matches_at(&self, offset: usize, tag: &[u8]) -> bool {
        self.read_bytes(offset, tag.len())
            .map(|bytes| bytes == tag)
            .unwrap_or(false)
    }
}

impl ByteReader for [u8] {
    fn size(&self) -> usize {
        self.len()
    }

    fn read_bytes(&self, offset: usize, len: usize) -> ExifResult<&[u8]> {
        offset
            .checked_add(len)
            .and_then(|end| self.get(offset..end))
            .ok_or(ExifError::OutOfBounds {
                offset,
                len,
                size: self.len(),
            })
    }
}
