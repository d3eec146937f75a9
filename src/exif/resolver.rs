//! Semantic resolution of raw EXIF and GPS fields
//!
//! Enumerated codes become descriptive strings, version byte arrays become
//! text, and the three namespaces are merged into one record.

use log::trace;

use crate::tiff::reader::RawDirectories;
use crate::tiff::tags::TagNamespace;
use crate::tiff::types::{ExifRecord, ExifValue, TagMap, TagValue};
use crate::utils::exif_code_translators::{code_to_name, component_code_to_name, is_enumerated_field};
use crate::utils::string_utils;

/// Resolves the three raw directories and merges them
///
/// Merge order is TIFF, EXIF, GPS; a name present in more than one
/// namespace takes its value from the later one.
pub fn resolve(directories: RawDirectories) -> ExifRecord {
    let mut record: ExifRecord = directories
        .tiff
        .into_iter()
        .map(|(name, value)| (name, ExifValue::from(value)))
        .collect();

    if let Some(exif) = directories.exif {
        record.merge(resolve_namespace(exif, TagNamespace::Exif));
    }
    if let Some(gps) = directories.gps {
        record.merge(resolve_namespace(gps, TagNamespace::Gps));
    }

    record
}

/// Resolves every field of one raw directory
///
/// Fields whose value cannot be resolved are dropped rather than passed
/// through as raw numbers.
pub fn resolve_namespace(raw: TagMap, namespace: TagNamespace) -> ExifRecord {
    let mut resolved = ExifRecord::new();

    for (name, value) in raw {
        let result = match namespace {
            TagNamespace::Exif => resolve_exif_field(name, value),
            TagNamespace::Gps => resolve_gps_field(name, value),
            TagNamespace::Tiff => Some(ExifValue::from(value)),
        };

        match result {
            Some(value) => resolved.insert(name, value),
            None => trace!("Dropping unresolvable {} field {}", namespace, name),
        }
    }

    resolved
}

/// Resolves a single EXIF field
pub fn resolve_exif_field(name: &str, value: TagValue) -> Option<ExifValue> {
    match name {
        _ if is_enumerated_field(name) => {
            let code = value.as_integer()?;
            code_to_name(name, code).map(|text| ExifValue::Text(text.to_string()))
        }
        "ExifVersion" | "FlashpixVersion" => {
            let bytes = value.as_bytes().filter(|b| b.len() > 3)?;
            Some(ExifValue::Text(string_utils::bytes_to_string(&bytes[..4])))
        }
        "ComponentsConfiguration" => {
            let bytes = value.as_bytes().filter(|b| b.len() > 3)?;
            let channels = bytes[..4]
                .iter()
                .map(|&code| component_code_to_name(code as i64))
                .collect::<Option<Vec<_>>>()?;
            Some(ExifValue::Text(channels.concat()))
        }
        _ => Some(ExifValue::from(value)),
    }
}

/// Resolves a single GPS field
pub fn resolve_gps_field(name: &str, value: TagValue) -> Option<ExifValue> {
    match name {
        "GPSVersionID" => {
            let parts: Vec<String> = match &value {
                TagValue::Rationals(v) | TagValue::SRationals(v) => v.iter().map(|p| p.to_string()).collect(),
                _ => value.as_integers()?.iter().map(|p| p.to_string()).collect(),
            };
            if parts.len() <= 3 {
                return None;
            }
            let version = parts[..4].join(".");
            Some(ExifValue::Text(version))
        }
        _ => Some(ExifValue::from(value)),
    }
}
