//! Tag value decoding utilities
//!
//! Converts a directory entry into a typed `TagValue`, following the TIFF
//! storage rules: small payloads live inline in the entry's value field,
//! larger ones at an offset relative to the TIFF start.

use log::trace;

use crate::io::{ByteOrder, ByteReader};
use crate::tiff::constants::{field_types, ifd};
use crate::tiff::errors::{ExifError, ExifResult};
use crate::tiff::ifd::IFDEntry;
use crate::tiff::types::TagValue;
use crate::utils::string_utils;

/// Decodes the value of a directory entry
///
/// # Arguments
/// * `data` - The whole input buffer
/// * `entry` - The directory entry to decode
/// * `tiff_start` - Absolute offset of the TIFF block
/// * `byte_order` - Byte order of the TIFF block
///
/// # Returns
/// `Ok(None)` for field types this decoder does not support, an error if
/// the payload lies outside the buffer, the decoded value otherwise
pub fn read_tag_value(
    data: &[u8],
    entry: &IFDEntry,
    tiff_start: usize,
    byte_order: ByteOrder,
) -> ExifResult<Option<TagValue>> {
    let handler = byte_order.handler();
    let count = entry.count as usize;

    let value = match entry.field_type {
        field_types::BYTE | field_types::UNDEFINED => {
            let location = value_location(entry, tiff_start, count <= ifd::INLINE_VALUE_SIZE)?;
            let bytes = read_array(data, location, count, 1, |b| b[0])?;
            collapse(bytes, TagValue::Byte, TagValue::Bytes)
        }
        field_types::ASCII => {
            let location = value_location(entry, tiff_start, count <= ifd::INLINE_VALUE_SIZE)?;
            // The count includes the trailing NUL
            let bytes = data.read_bytes(location, count.saturating_sub(1))?;
            TagValue::Ascii(string_utils::bytes_to_string(bytes))
        }
        field_types::SHORT => {
            let location = value_location(entry, tiff_start, count <= ifd::INLINE_VALUE_SIZE / 2)?;
            let values = read_array(data, location, count, 2, |b| handler.read_u16(b))?;
            collapse(values, TagValue::Short, TagValue::Shorts)
        }
        field_types::LONG => {
            let location = value_location(entry, tiff_start, count == 1)?;
            let values = read_array(data, location, count, 4, |b| handler.read_u32(b))?;
            collapse(values, TagValue::Long, TagValue::Longs)
        }
        field_types::RATIONAL => {
            let location = value_location(entry, tiff_start, false)?;
            let values = read_array(data, location, count, 8, |b| {
                handler.read_u32(b) as f64 / handler.read_u32(&b[4..]) as f64
            })?;
            collapse(values, TagValue::Rational, TagValue::Rationals)
        }
        field_types::SLONG => {
            let location = value_location(entry, tiff_start, count == 1)?;
            let values = read_array(data, location, count, 4, |b| handler.read_i32(b))?;
            collapse(values, TagValue::SLong, TagValue::SLongs)
        }
        field_types::SRATIONAL => {
            let location = value_location(entry, tiff_start, false)?;
            let values = read_array(data, location, count, 8, |b| {
                handler.read_i32(b) as f64 / handler.read_i32(&b[4..]) as f64
            })?;
            collapse(values, TagValue::SRational, TagValue::SRationals)
        }
        other => {
            trace!("Unsupported field type {} ({}) for tag {:#06x}",
                   other, get_field_type_name(other), entry.tag);
            return Ok(None);
        }
    };

    Ok(Some(value))
}

/// Absolute position of an entry's payload
fn value_location(entry: &IFDEntry, tiff_start: usize, inline: bool) -> ExifResult<usize> {
    if inline {
        Ok(entry.inline_position())
    } else {
        tiff_start
            .checked_add(entry.value_offset as usize)
            .ok_or_else(|| ExifError::GenericError(format!(
                "Value offset {} overflows from TIFF start {}", entry.value_offset, tiff_start
            )))
    }
}

/// Reads `count` fixed-width elements starting at `location`
///
/// The whole payload is bounds-checked before anything is decoded, so a
/// bogus count cannot trigger a large allocation.
fn read_array<T, F>(data: &[u8], location: usize, count: usize, width: usize, decode: F) -> ExifResult<Vec<T>>
where
    F: Fn(&[u8]) -> T,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    let total = count
        .checked_mul(width)
        .ok_or_else(|| ExifError::GenericError(format!("Value count {} too large", count)))?;
    let bytes = data.read_bytes(location, total)?;

    Ok(bytes.chunks_exact(width).map(decode).collect())
}

/// Single values become scalars, anything else a sequence
fn collapse<T>(mut values: Vec<T>, scalar: fn(T) -> TagValue, sequence: fn(Vec<T>) -> TagValue) -> TagValue {
    if values.len() == 1 {
        if let Some(value) = values.pop() {
            return scalar(value);
        }
    }
    sequence(values)
}

/// Get the name of a TIFF field type
///
/// # Arguments
/// * `field_type` - The field type ID to look up
///
/// # Returns
/// A string representing the field type name
pub fn get_field_type_name(field_type: u16) -> &'static str {
    match field_type {
        field_types::BYTE => "BYTE",
        field_types::ASCII => "ASCII",
        field_types::SHORT => "SHORT",
        field_types::LONG => "LONG",
        field_types::RATIONAL => "RATIONAL",
        field_types::SBYTE => "SBYTE",
        field_types::UNDEFINED => "UNDEFINED",
        field_types::SSHORT => "SSHORT",
        field_types::SLONG => "SLONG",
        field_types::SRATIONAL => "SRATIONAL",
        field_types::FLOAT => "FLOAT",
        field_types::DOUBLE => "DOUBLE",
        _ => "Unknown",
    }
}
