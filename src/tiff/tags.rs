//! Tag tables for the TIFF, EXIF and GPS namespaces
//!
//! Each namespace is a fixed vocabulary mapping a 16-bit tag id to a field
//! name. The tables below are the single source of truth; lookup indexes in
//! both directions are built from them on first use.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

/// Tags recognised in IFD0
const TIFF_TAGS: &[(u16, &str)] = &[
    (0x0100, "ImageWidth"),
    (0x0101, "ImageHeight"),
    (0x8769, "ExifIFDPointer"),
    (0x8825, "GPSInfoIFDPointer"),
    (0xA005, "InteroperabilityIFDPointer"),
    (0x0102, "BitsPerSample"),
    (0x0103, "Compression"),
    (0x0106, "PhotometricInterpretation"),
    (0x0112, "Orientation"),
    (0x0115, "SamplesPerPixel"),
    (0x011C, "PlanarConfiguration"),
    (0x0212, "YCbCrSubSampling"),
    (0x0213, "YCbCrPositioning"),
    (0x011A, "XResolution"),
    (0x011B, "YResolution"),
    (0x0128, "ResolutionUnit"),
    (0x0111, "StripOffsets"),
    (0x0116, "RowsPerStrip"),
    (0x0117, "StripByteCounts"),
    (0x0201, "JPEGInterchangeFormat"),
    (0x0202, "JPEGInterchangeFormatLength"),
    (0x012D, "TransferFunction"),
    (0x013E, "WhitePoint"),
    (0x013F, "PrimaryChromaticities"),
    (0x0211, "YCbCrCoefficients"),
    (0x0214, "ReferenceBlackWhite"),
    (0x0132, "DateTime"),
    (0x010E, "ImageDescription"),
    (0x010F, "Make"),
    (0x0110, "Model"),
    (0x0131, "Software"),
    (0x013B, "Artist"),
    (0x8298, "Copyright"),
];

/// Tags recognised in the EXIF sub-IFD
const EXIF_TAGS: &[(u16, &str)] = &[
    // Version tags
    (0x9000, "ExifVersion"),
    (0xA000, "FlashpixVersion"),
    // Colorspace
    (0xA001, "ColorSpace"),
    // Image configuration
    (0xA002, "PixelXDimension"),
    (0xA003, "PixelYDimension"),
    (0x9101, "ComponentsConfiguration"),
    (0x9102, "CompressedBitsPerPixel"),
    // User information
    (0x927C, "MakerNote"),
    (0x9286, "UserComment"),
    // Related file
    (0xA004, "RelatedSoundFile"),
    // Date and time
    (0x9003, "DateTimeOriginal"),
    (0x9004, "DateTimeDigitized"),
    (0x9290, "SubsecTime"),
    (0x9291, "SubsecTimeOriginal"),
    (0x9292, "SubsecTimeDigitized"),
    // Picture-taking conditions
    (0x829A, "ExposureTime"),
    (0x829D, "FNumber"),
    (0x8822, "ExposureProgram"),
    (0x8824, "SpectralSensitivity"),
    (0x8827, "ISOSpeedRatings"),
    (0x8828, "OECF"),
    (0x9201, "ShutterSpeedValue"),
    (0x9202, "ApertureValue"),
    (0x9203, "BrightnessValue"),
    (0x9204, "ExposureBias"),
    (0x9205, "MaxApertureValue"),
    (0x9206, "SubjectDistance"),
    (0x9207, "MeteringMode"),
    (0x9208, "LightSource"),
    (0x9209, "Flash"),
    (0x9214, "SubjectArea"),
    (0x920A, "FocalLength"),
    (0xA20B, "FlashEnergy"),
    (0xA20C, "SpatialFrequencyResponse"),
    (0xA20E, "FocalPlaneXResolution"),
    (0xA20F, "FocalPlaneYResolution"),
    (0xA210, "FocalPlaneResolutionUnit"),
    (0xA214, "SubjectLocation"),
    (0xA215, "ExposureIndex"),
    (0xA217, "SensingMethod"),
    (0xA300, "FileSource"),
    (0xA301, "SceneType"),
    (0xA302, "CFAPattern"),
    (0xA401, "CustomRendered"),
    (0xA402, "ExposureMode"),
    (0xA403, "WhiteBalance"),
    (0xA404, "DigitalZoomRation"),
    (0xA405, "FocalLengthIn35mmFilm"),
    (0xA406, "SceneCaptureType"),
    (0xA407, "GainControl"),
    (0xA408, "Contrast"),
    (0xA409, "Saturation"),
    (0xA40A, "Sharpness"),
    (0xA40B, "DeviceSettingDescription"),
    (0xA40C, "SubjectDistanceRange"),
    // Other
    (0xA005, "InteroperabilityIFDPointer"),
    (0xA420, "ImageUniqueID"),
];

/// Tags recognised in the GPS sub-IFD
const GPS_TAGS: &[(u16, &str)] = &[
    (0x0000, "GPSVersionID"),
    (0x0001, "GPSLatitudeRef"),
    (0x0002, "GPSLatitude"),
    (0x0003, "GPSLongitudeRef"),
    (0x0004, "GPSLongitude"),
    (0x0005, "GPSAltitudeRef"),
    (0x0006, "GPSAltitude"),
    (0x0007, "GPSTimeStamp"),
    (0x0008, "GPSSatellites"),
    (0x0009, "GPSStatus"),
    (0x000A, "GPSMeasureMode"),
    (0x000B, "GPSDOP"),
    (0x000C, "GPSSpeedRef"),
    (0x000D, "GPSSpeed"),
    (0x000E, "GPSTrackRef"),
    (0x000F, "GPSTrack"),
    (0x0010, "GPSImgDirectionRef"),
    (0x0011, "GPSImgDirection"),
    (0x0012, "GPSMapDatum"),
    (0x0013, "GPSDestLatitudeRef"),
    (0x0014, "GPSDestLatitude"),
    (0x0015, "GPSDestLongitudeRef"),
    (0x0016, "GPSDestLongitude"),
    (0x0017, "GPSDestBearingRef"),
    (0x0018, "GPSDestBearing"),
    (0x0019, "GPSDestDistanceRef"),
    (0x001A, "GPSDestDistance"),
    (0x001B, "GPSProcessingMethod"),
    (0x001C, "GPSAreaInformation"),
    (0x001D, "GPSDateStamp"),
    (0x001E, "GPSDifferential"),
];

/// Bidirectional index over one tag table
struct TagIndex {
    by_id: HashMap<u16, &'static str>,
    by_name: HashMap<&'static str, u16>,
}

impl TagIndex {
    fn build(table: &'static [(u16, &'static str)]) -> Self {
        TagIndex {
            by_id: table.iter().copied().collect(),
            by_name: table.iter().map(|&(id, name)| (name, id)).collect(),
        }
    }
}

lazy_static! {
    static ref TIFF_INDEX: TagIndex = TagIndex::build(TIFF_TAGS);
    static ref EXIF_INDEX: TagIndex = TagIndex::build(EXIF_TAGS);
    static ref GPS_INDEX: TagIndex = TagIndex::build(GPS_TAGS);
}

/// The directory a tag id is interpreted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagNamespace {
    /// IFD0 tags
    Tiff,
    /// Tags of the directory referenced by ExifIFDPointer
    Exif,
    /// Tags of the directory referenced by GPSInfoIFDPointer
    Gps,
}

impl TagNamespace {
    /// All namespaces, in merge order
    pub const ALL: [TagNamespace; 3] = [TagNamespace::Tiff, TagNamespace::Exif, TagNamespace::Gps];

    fn index(&self) -> &'static TagIndex {
        match self {
            TagNamespace::Tiff => &TIFF_INDEX,
            TagNamespace::Exif => &EXIF_INDEX,
            TagNamespace::Gps => &GPS_INDEX,
        }
    }

    /// Field name for a tag id, or None for ids outside this namespace
    pub fn tag_name(&self, id: u16) -> Option<&'static str> {
        self.index().by_id.get(&id).copied()
    }

    /// Tag id for a field name
    pub fn tag_id(&self, name: &str) -> Option<u16> {
        self.index().by_name.get(name).copied()
    }

    /// The full table, in declaration order
    pub fn tags(&self) -> &'static [(u16, &'static str)] {
        match self {
            TagNamespace::Tiff => TIFF_TAGS,
            TagNamespace::Exif => EXIF_TAGS,
            TagNamespace::Gps => GPS_TAGS,
        }
    }

    /// Short lowercase name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            TagNamespace::Tiff => "tiff",
            TagNamespace::Exif => "exif",
            TagNamespace::Gps => "gps",
        }
    }

    /// Parses a namespace from its short name
    pub fn from_name(name: &str) -> Option<Self> {
        TagNamespace::ALL
            .into_iter()
            .find(|ns| ns.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TagNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiff::constants::tags;

    #[test]
    fn test_lookup_both_directions() {
        assert_eq!(TagNamespace::Tiff.tag_name(0x0112), Some("Orientation"));
        assert_eq!(TagNamespace::Tiff.tag_id("Make"), Some(0x010F));
        assert_eq!(TagNamespace::Exif.tag_name(0x8822), Some("ExposureProgram"));
        assert_eq!(TagNamespace::Gps.tag_name(0x0000), Some("GPSVersionID"));
        assert_eq!(TagNamespace::Tiff.tag_name(tags::EXIF_IFD_POINTER), Some("ExifIFDPointer"));
        assert_eq!(TagNamespace::Tiff.tag_name(tags::GPS_INFO_IFD_POINTER), Some("GPSInfoIFDPointer"));
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        assert_eq!(TagNamespace::Tiff.tag_name(0xBEEF), None);
        // GPS ids are tiny and collide with nothing in IFD0
        assert_eq!(TagNamespace::Tiff.tag_name(0x0002), None);
        assert_eq!(TagNamespace::Exif.tag_id("Orientation"), None);
    }

    #[test]
    fn test_tables_have_unique_ids_and_names() {
        for ns in TagNamespace::ALL {
            let index = ns.index();
            assert_eq!(index.by_id.len(), ns.tags().len(), "duplicate id in {}", ns);
            assert_eq!(index.by_name.len(), ns.tags().len(), "duplicate name in {}", ns);
        }
    }

    #[test]
    fn test_namespace_names() {
        assert_eq!(TagNamespace::from_name("GPS"), Some(TagNamespace::Gps));
        assert_eq!(TagNamespace::from_name("xmp"), None);
        assert_eq!(TagNamespace::Exif.to_string(), "EXIF");
    }
}
