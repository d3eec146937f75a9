//! TIFF block reader implementation
//!
//! Walks the directories of an embedded TIFF block: IFD0 first, then the
//! EXIF and GPS sub-directories it points at. The same directory walker
//! serves all three namespaces.

use log::{debug, trace, warn};

use crate::io::{ByteOrder, ByteReader};
use crate::tiff::constants::tags;
use crate::tiff::errors::ExifResult;
use crate::tiff::ifd::{self, IFDEntry};
use crate::tiff::tags::TagNamespace;
use crate::tiff::types::TagMap;
use crate::tiff::validation::{self, TiffHeader};
use crate::utils::tag_utils;

/// Raw field maps of the three directories of a TIFF block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDirectories {
    /// IFD0 fields
    pub tiff: TagMap,
    /// EXIF sub-directory fields, if the pointer was present and readable
    pub exif: Option<TagMap>,
    /// GPS sub-directory fields, if the pointer was present and readable
    pub gps: Option<TagMap>,
}

/// Reader for a TIFF block embedded in a larger buffer
///
/// All offsets inside the block are relative to `tiff_start`, and every
/// multi-byte read uses the byte order declared by the block's header.
pub struct TiffReader<'a> {
    /// The whole input buffer
    data: &'a [u8],
    /// Absolute offset of the TIFF header
    tiff_start: usize,
    /// Validated header
    header: TiffHeader,
}

impl<'a> TiffReader<'a> {
    /// Creates a reader after validating the header at `tiff_start`
    pub fn new(data: &'a [u8], tiff_start: usize) -> ExifResult<Self> {
        debug!("Reading TIFF block at offset {}", tiff_start);
        let header = validation::validate_header(data, tiff_start)?;

        Ok(TiffReader {
            data,
            tiff_start,
            header,
        })
    }

    /// Byte order declared by the header
    pub fn byte_order(&self) -> ByteOrder {
        self.header.byte_order
    }

    /// Absolute offset of the TIFF header
    pub fn tiff_start(&self) -> usize {
        self.tiff_start
    }

    /// Reads IFD0 and the EXIF and GPS sub-directories it references
    ///
    /// Failing to read IFD0 is an error; an unreadable sub-directory only
    /// leaves that namespace empty.
    pub fn read_directories(&self) -> ExifResult<RawDirectories> {
        let ifd0 = self.tiff_start + self.header.first_ifd_offset as usize;
        let tiff = self.read_ifd(ifd0, TagNamespace::Tiff)?;

        let exif = self.read_sub_ifd(&tiff, tags::EXIF_IFD_POINTER, TagNamespace::Exif);
        let gps = self.read_sub_ifd(&tiff, tags::GPS_INFO_IFD_POINTER, TagNamespace::Gps);

        Ok(RawDirectories { tiff, exif, gps })
    }

    /// Follows a pointer field of IFD0 to a sub-directory
    ///
    /// The pointer must be a plain, non-zero integer; anything else means
    /// the sub-directory is skipped.
    fn read_sub_ifd(&self, tiff: &TagMap, pointer_tag: u16, namespace: TagNamespace) -> Option<TagMap> {
        let pointer = TagNamespace::Tiff.tag_name(pointer_tag)?;
        let offset = tiff
            .get(pointer)
            .and_then(|value| value.as_integer())
            .filter(|&offset| offset > 0)?;

        match self.read_ifd(self.tiff_start + offset as usize, namespace) {
            Ok(tags) => Some(tags),
            Err(e) => {
                warn!("Skipping {} directory at offset {}: {}", namespace, offset, e);
                None
            }
        }
    }

    /// Reads one directory into a raw field map
    ///
    /// # Arguments
    /// * `dir_start` - Absolute offset of the directory's entry count
    /// * `namespace` - Tag table used to name the entries
    ///
    /// # Returns
    /// The decoded fields, keyed by name. Unknown tag ids and values that
    /// cannot be decoded are left out; a repeated tag keeps its last value.
    pub fn read_ifd(&self, dir_start: usize, namespace: TagNamespace) -> ExifResult<TagMap> {
        let entry_count = self.data.read_u16(dir_start, self.byte_order())?;
        debug!("{} IFD at offset {}: {} entries", namespace, dir_start, entry_count);

        let mut tags = TagMap::new();

        for index in 0..entry_count as usize {
            let position = ifd::entry_position(dir_start, index);
            let entry = match IFDEntry::read(self.data, position, self.byte_order()) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("{} IFD truncated after {} of {} entries: {}", namespace, index, entry_count, e);
                    break;
                }
            };

            let name = match namespace.tag_name(entry.tag) {
                Some(name) => name,
                None => {
                    trace!("Unknown {} tag {:#06x}, skipping", namespace, entry.tag);
                    continue;
                }
            };

            match tag_utils::read_tag_value(self.data, &entry, self.tiff_start, self.byte_order()) {
                Ok(Some(value)) => {
                    trace!("{} = {:?}", name, value);
                    tags.insert(name, value);
                }
                Ok(None) => trace!("{} has unsupported type {}, skipping", name, entry.field_type),
                Err(e) => debug!("Could not read value of {}: {}", name, e),
            }
        }

        debug!("Read {} {} fields", tags.len(), namespace);
        Ok(tags)
    }
}
