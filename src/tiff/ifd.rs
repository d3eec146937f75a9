//! Image File Directory (IFD) entry structure
//!
//! A directory is a u16 entry count followed by fixed 12-byte entries. Each
//! entry names a tag, the type and count of its values, and either the
//! values themselves (when they fit in four bytes) or their offset from the
//! start of the TIFF block.

use log::trace;

use crate::io::{ByteOrder, ByteReader};
use crate::tiff::constants::ifd;
use crate::tiff::errors::ExifResult;
use crate::utils::tag_utils;

/// Represents an entry in an Image File Directory (IFD)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IFDEntry {
    /// Tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// Value or offset to values, relative to the TIFF start
    pub value_offset: u32,
    /// Absolute position of this entry in the buffer
    pub position: usize,
}

impl IFDEntry {
    /// Reads the entry stored at `position`
    pub fn read(data: &[u8], position: usize, byte_order: ByteOrder) -> ExifResult<Self> {
        // Bounds-check the whole record once so a truncated entry fails as a unit
        data.read_bytes(position, ifd::ENTRY_SIZE)?;

        let entry = IFDEntry {
            tag: data.read_u16(position, byte_order)?,
            field_type: data.read_u16(position + 2, byte_order)?,
            count: data.read_u32(position + 4, byte_order)?,
            value_offset: data.read_u32(position + ifd::VALUE_FIELD_OFFSET, byte_order)?,
            position,
        };

        trace!("Read IFD entry: {}", entry.description());
        Ok(entry)
    }

    /// Absolute position of the inline value field
    pub fn inline_position(&self) -> usize {
        self.position + ifd::VALUE_FIELD_OFFSET
    }

    /// Returns a human-readable description of this entry
    pub fn description(&self) -> String {
        format!(
            "Tag: {:#06x}, Type: {} ({}), Count: {}, Value/Offset: {}",
            self.tag,
            self.field_type,
            tag_utils::get_field_type_name(self.field_type),
            self.count,
            self.value_offset
        )
    }
}

/// Absolute position of entry `index` in the directory at `dir_start`
pub fn entry_position(dir_start: usize, index: usize) -> usize {
    dir_start + ifd::ENTRY_COUNT_SIZE + index * ifd::ENTRY_SIZE
}
