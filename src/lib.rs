pub mod io;
pub mod tiff;
pub mod utils;
pub mod container;
pub mod exif;
pub mod commands;
pub mod api;

pub use crate::api::{ExifKit, OutputFormat};

pub use container::{ContainerKind, ContainerLocator};
pub use exif::{find_exif, find_exif_in_heic, find_exif_in_jpeg, read_exif, read_exif_data, read_exif_from_heic, read_exif_from_jpeg};
pub use tiff::{ExifError, ExifRecord, ExifResult, ExifValue, TagNamespace, TagValue};
pub use utils::logger::{is_debug, set_debug};
