//! Container locators
//!
//! A locator scans a container's own framing (JPEG markers, HEIC boxes) for
//! the embedded TIFF block carrying EXIF and returns its absolute offset.

pub mod heic;
pub mod jpeg;

pub use heic::HeicLocator;
pub use jpeg::JpegLocator;

use std::fmt;

use crate::io::ByteReader;
use crate::tiff::constants;
use crate::tiff::errors::ExifResult;

/// Strategy for finding the TIFF block inside a container
pub trait ContainerLocator {
    /// Short name of the container format
    fn name(&self) -> &'static str;

    /// Finds the absolute offset of the TIFF header in `data`
    fn locate_tiff(&self, data: &[u8]) -> ExifResult<usize>;
}

/// Container formats carrying EXIF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Jpeg,
    Heic,
}

impl ContainerKind {
    /// Sniffs the container kind from the first bytes of a file
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.matches_at(0, &constants::jpeg::SOI) {
            Some(ContainerKind::Jpeg)
        } else if data.matches_at(4, constants::heic::FTYP_TAG) {
            Some(ContainerKind::Heic)
        } else {
            None
        }
    }

    /// Parses a container kind from its command-line name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Some(ContainerKind::Jpeg),
            "heic" | "heif" => Some(ContainerKind::Heic),
            _ => None,
        }
    }

    /// Creates the locator for this container kind
    pub fn locator(&self) -> Box<dyn ContainerLocator> {
        match self {
            ContainerKind::Jpeg => Box::new(JpegLocator),
            ContainerKind::Heic => Box::new(HeicLocator),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.locator().name())
    }
}
