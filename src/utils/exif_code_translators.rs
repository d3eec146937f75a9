//! EXIF code translators
//!
//! This module translates the numeric codes of enumerated EXIF fields into
//! their descriptive strings. A code without an entry translates to `None`.

/// Fields whose integer value is replaced by its descriptive string
pub const ENUMERATED_FIELDS: &[&str] = &[
    "LightSource",
    "Flash",
    "MeteringMode",
    "ExposureProgram",
    "SensingMethod",
    "SceneCaptureType",
    "SceneType",
    "CustomRendered",
    "WhiteBalance",
    "GainControl",
    "Contrast",
    "Saturation",
    "Sharpness",
    "SubjectDistanceRange",
    "FileSource",
];

/// Checks whether a field is translated through a string table
pub fn is_enumerated_field(field: &str) -> bool {
    ENUMERATED_FIELDS.contains(&field)
}

/// Translates a code of an enumerated field
///
/// # Arguments
/// * `field` - Field name, one of `ENUMERATED_FIELDS`
/// * `code` - Raw integer value
///
/// # Returns
/// The descriptive string, or None for unknown fields and codes
pub fn code_to_name(field: &str, code: i64) -> Option<&'static str> {
    match field {
        "ExposureProgram" => exposure_program_code_to_name(code),
        "MeteringMode" => metering_mode_code_to_name(code),
        "LightSource" => light_source_code_to_name(code),
        "Flash" => flash_code_to_name(code),
        "SensingMethod" => sensing_method_code_to_name(code),
        "SceneCaptureType" => scene_capture_type_code_to_name(code),
        "SceneType" => scene_type_code_to_name(code),
        "CustomRendered" => custom_rendered_code_to_name(code),
        "WhiteBalance" => white_balance_code_to_name(code),
        "GainControl" => gain_control_code_to_name(code),
        "Contrast" => contrast_code_to_name(code),
        "Saturation" => saturation_code_to_name(code),
        "Sharpness" => sharpness_code_to_name(code),
        "SubjectDistanceRange" => subject_distance_range_code_to_name(code),
        "FileSource" => file_source_code_to_name(code),
        _ => None,
    }
}

pub fn exposure_program_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Not defined"),
        1 => Some("Manual"),
        2 => Some("Normal program"),
        3 => Some("Aperture priority"),
        4 => Some("Shutter priority"),
        5 => Some("Creative program"),
        6 => Some("Action program"),
        7 => Some("Portrait mode"),
        8 => Some("Landscape mode"),
        _ => None,
    }
}

pub fn metering_mode_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Unknown"),
        1 => Some("Average"),
        2 => Some("CenterWeightedAverage"),
        3 => Some("Spot"),
        4 => Some("MultiSpot"),
        5 => Some("Pattern"),
        6 => Some("Partial"),
        255 => Some("Other"),
        _ => None,
    }
}

pub fn light_source_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Unknown"),
        1 => Some("Daylight"),
        2 => Some("Fluorescent"),
        3 => Some("Tungsten (incandescent light)"),
        4 => Some("Flash"),
        9 => Some("Fine weather"),
        10 => Some("Cloudy weather"),
        11 => Some("Shade"),
        12 => Some("Daylight fluorescent (D 5700 - 7100K)"),
        13 => Some("Day white fluorescent (N 4600 - 5400K)"),
        14 => Some("Cool white fluorescent (W 3900 - 4500K)"),
        15 => Some("White fluorescent (WW 3200 - 3700K)"),
        17 => Some("Standard light A"),
        18 => Some("Standard light B"),
        19 => Some("Standard light C"),
        20 => Some("D55"),
        21 => Some("D65"),
        22 => Some("D75"),
        23 => Some("D50"),
        24 => Some("ISO studio tungsten"),
        255 => Some("Other"),
        _ => None,
    }
}

pub fn flash_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0x0000 => Some("Flash did not fire"),
        0x0001 => Some("Flash fired"),
        0x0005 => Some("Strobe return light not detected"),
        0x0007 => Some("Strobe return light detected"),
        0x0009 => Some("Flash fired, compulsory flash mode"),
        0x000D => Some("Flash fired, compulsory flash mode, return light not detected"),
        0x000F => Some("Flash fired, compulsory flash mode, return light detected"),
        0x0010 => Some("Flash did not fire, compulsory flash mode"),
        0x0018 => Some("Flash did not fire, auto mode"),
        0x0019 => Some("Flash fired, auto mode"),
        0x001D => Some("Flash fired, auto mode, return light not detected"),
        0x001F => Some("Flash fired, auto mode, return light detected"),
        0x0020 => Some("No flash function"),
        0x0041 => Some("Flash fired, red-eye reduction mode"),
        0x0045 => Some("Flash fired, red-eye reduction mode, return light not detected"),
        0x0047 => Some("Flash fired, red-eye reduction mode, return light detected"),
        0x0049 => Some("Flash fired, compulsory flash mode, red-eye reduction mode"),
        0x004D => Some("Flash fired, compulsory flash mode, red-eye reduction mode, return light not detected"),
        0x004F => Some("Flash fired, compulsory flash mode, red-eye reduction mode, return light detected"),
        0x0059 => Some("Flash fired, auto mode, red-eye reduction mode"),
        0x005D => Some("Flash fired, auto mode, return light not detected, red-eye reduction mode"),
        0x005F => Some("Flash fired, auto mode, return light detected, red-eye reduction mode"),
        _ => None,
    }
}

pub fn sensing_method_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        1 => Some("Not defined"),
        2 => Some("One-chip color area sensor"),
        3 => Some("Two-chip color area sensor"),
        4 => Some("Three-chip color area sensor"),
        5 => Some("Color sequential area sensor"),
        7 => Some("Trilinear sensor"),
        8 => Some("Color sequential linear sensor"),
        _ => None,
    }
}

pub fn scene_capture_type_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Standard"),
        1 => Some("Landscape"),
        2 => Some("Portrait"),
        3 => Some("Night scene"),
        _ => None,
    }
}

pub fn scene_type_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        1 => Some("Directly photographed"),
        _ => None,
    }
}

pub fn custom_rendered_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Normal process"),
        1 => Some("Custom process"),
        _ => None,
    }
}

pub fn white_balance_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Auto white balance"),
        1 => Some("Manual white balance"),
        _ => None,
    }
}

pub fn gain_control_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("None"),
        1 => Some("Low gain up"),
        2 => Some("High gain up"),
        3 => Some("Low gain down"),
        4 => Some("High gain down"),
        _ => None,
    }
}

pub fn contrast_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Normal"),
        1 => Some("Soft"),
        2 => Some("Hard"),
        _ => None,
    }
}

pub fn saturation_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Normal"),
        1 => Some("Low saturation"),
        2 => Some("High saturation"),
        _ => None,
    }
}

pub fn sharpness_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Normal"),
        1 => Some("Soft"),
        2 => Some("Hard"),
        _ => None,
    }
}

pub fn subject_distance_range_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Unknown"),
        1 => Some("Macro"),
        2 => Some("Close view"),
        3 => Some("Distant view"),
        _ => None,
    }
}

pub fn file_source_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        3 => Some("DSC"),
        _ => None,
    }
}

/// Converts a ComponentsConfiguration channel code to its letter(s)
///
/// Code 0 means "channel does not exist" and maps to the empty string.
pub fn component_code_to_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some(""),
        1 => Some("Y"),
        2 => Some("Cb"),
        3 => Some("Cr"),
        4 => Some("R"),
        5 => Some("G"),
        6 => Some("B"),
        _ => None,
    }
}
