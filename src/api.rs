use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::container::ContainerKind;
use crate::exif;
use crate::tiff::errors::{ExifError, ExifResult};
use crate::tiff::types::{ExifRecord, ExifValue};

/// Output formats for a resolved record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Name: value` lines
    Text,
    /// A TOML table
    Toml,
}

impl OutputFormat {
    /// Parses an output format from its command-line name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "toml" => Some(OutputFormat::Toml),
            _ => None,
        }
    }
}

/// Main interface to the ExifKit library
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifKit {
    /// Container to assume; sniffed from the data when unset
    container: Option<ContainerKind>,
}

impl ExifKit {
    /// Create an ExifKit instance that detects the container of each input
    pub fn new() -> Self {
        ExifKit { container: None }
    }

    /// Create an ExifKit instance that always uses the given container
    pub fn with_container(container: ContainerKind) -> Self {
        ExifKit { container: Some(container) }
    }

    /// Extract EXIF from an in-memory file
    ///
    /// # Arguments
    /// * `data` - The complete file contents
    ///
    /// # Returns
    /// The resolved record, or the error naming why there is none
    pub fn read_bytes(&self, data: &[u8]) -> ExifResult<ExifRecord> {
        match self.container {
            Some(kind) => exif::read_exif_with(data, kind.locator().as_ref()),
            None => exif::read_exif(data),
        }
    }

    /// Extract EXIF from a file on disk
    ///
    /// I/O failures are errors. A file that loads but carries no usable
    /// EXIF gives `Ok(None)`.
    ///
    /// # Arguments
    /// * `input_path` - Path to the JPEG or HEIC file
    pub fn extract_file<P: AsRef<Path>>(&self, input_path: P) -> ExifResult<Option<ExifRecord>> {
        let path = input_path.as_ref();
        let data = fs::read(path)?;
        debug!("Loaded {} ({} bytes)", path.display(), data.len());

        match self.read_bytes(&data) {
            Ok(record) => {
                info!("{}: {} fields", path.display(), record.len());
                Ok(Some(record))
            }
            Err(e) => {
                info!("{}: no EXIF data ({})", path.display(), e);
                Ok(None)
            }
        }
    }

    /// Render a record in the requested format
    pub fn format(&self, record: &ExifRecord, format: OutputFormat) -> ExifResult<String> {
        match format {
            OutputFormat::Text => Ok(format_text(record)),
            OutputFormat::Toml => format_toml(record),
        }
    }
}

/// Renders a record as `Name: value` lines in record order
pub fn format_text(record: &ExifRecord) -> String {
    record.to_string()
}

/// Renders a record as a TOML document
pub fn format_toml(record: &ExifRecord) -> ExifResult<String> {
    render_toml(&record_to_table(record))
}

/// Renders several records as one TOML document with a table per input
pub fn format_toml_batch<'a, I>(records: I) -> ExifResult<String>
where
    I: IntoIterator<Item = (&'a str, &'a ExifRecord)>,
{
    let mut document = toml::Table::new();
    for (path, record) in records {
        document.insert(path.to_string(), toml::Value::Table(record_to_table(record)));
    }
    render_toml(&document)
}

/// Converts a record into a TOML table keyed by field name
pub fn record_to_table(record: &ExifRecord) -> toml::Table {
    record
        .iter()
        .map(|(name, value)| (name.to_string(), to_toml_value(value)))
        .collect()
}

fn to_toml_value(value: &ExifValue) -> toml::Value {
    match value {
        ExifValue::Integer(v) => toml::Value::Integer(*v),
        ExifValue::Float(v) => toml::Value::Float(*v),
        ExifValue::Text(s) => toml::Value::String(s.clone()),
        ExifValue::List(values) => toml::Value::Array(values.iter().map(to_toml_value).collect()),
    }
}

fn render_toml(table: &toml::Table) -> ExifResult<String> {
    toml::to_string(table).map_err(|e| ExifError::GenericError(format!("TOML output failed: {}", e)))
}
