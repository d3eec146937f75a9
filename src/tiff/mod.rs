//! TIFF block parsing module
//!
//! This module provides structures and functions for reading the TIFF
//! block embedded in JPEG and HEIC files: header validation, directory
//! walking, value decoding and the tag tables of the three namespaces.

pub mod errors;
pub mod ifd;
pub mod types;
pub mod reader;
pub mod tags;
pub(crate) mod constants;
pub mod validation;
#[cfg(test)]
pub(crate) mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use errors::{ExifError, ExifResult};
pub use ifd::IFDEntry;
pub use reader::{RawDirectories, TiffReader};
pub use tags::TagNamespace;
pub use types::{ExifRecord, ExifValue, FieldMap, TagMap, TagValue};
pub use validation::TiffHeader;
