//! EXIF read command
//!
//! Extracts and prints the EXIF record of one or more JPEG/HEIC files.

use clap::ArgMatches;
use log::{debug, error, info};

use crate::api::{self, ExifKit, OutputFormat};
use crate::commands::command_traits::Command;
use crate::container::ContainerKind;
use crate::tiff::errors::{ExifError, ExifResult};
use crate::tiff::types::ExifRecord;
use crate::utils::progress::ProgressTracker;

/// Command for extracting EXIF from files
pub struct ReadCommand {
    /// Paths of the input files
    input_files: Vec<String>,
    /// Output format
    format: OutputFormat,
    /// Configured library entry point
    kit: ExifKit,
}

impl ReadCommand {
    /// Create a new read command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new ReadCommand instance or an error
    pub fn new(args: &ArgMatches) -> ExifResult<Self> {
        let input_files: Vec<String> = args
            .get_many::<String>("input")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        if input_files.is_empty() {
            return Err(ExifError::GenericError("Missing input file".to_string()));
        }

        let format_name = args.get_one::<String>("format").map(String::as_str).unwrap_or("text");
        let format = OutputFormat::from_name(format_name)
            .ok_or_else(|| ExifError::GenericError(format!("Unknown output format: {}", format_name)))?;

        let kit = match args.get_one::<String>("container").map(String::as_str) {
            None | Some("auto") => ExifKit::new(),
            Some(name) => {
                let kind = ContainerKind::from_name(name)
                    .ok_or_else(|| ExifError::GenericError(format!("Unknown container: {}", name)))?;
                debug!("Forcing container {}", kind);
                ExifKit::with_container(kind)
            }
        };

        Ok(ReadCommand {
            input_files,
            format,
            kit,
        })
    }

    /// Reads every input, returning the records found and the number of
    /// inputs that could not be loaded
    fn read_all(&self) -> (Vec<(&str, Option<ExifRecord>)>, usize) {
        let progress = if self.input_files.len() > 1 {
            Some(ProgressTracker::new(self.input_files.len() as u64, "Reading EXIF"))
        } else {
            None
        };

        let mut results = Vec::with_capacity(self.input_files.len());
        let mut failures = 0;

        for path in &self.input_files {
            if let Some(p) = &progress {
                p.set_message(path);
            }

            match self.kit.extract_file(path) {
                Ok(record) => results.push((path.as_str(), record)),
                Err(e) => {
                    error!("Failed to read {}: {}", path, e);
                    failures += 1;
                }
            }

            if let Some(p) = &progress {
                p.increment(1);
            }
        }

        if let Some(p) = progress {
            p.finish();
        }

        (results, failures)
    }

    /// Renders the records as text, with a header per file in batch mode
    fn render_text(&self, results: &[(&str, Option<ExifRecord>)]) -> String {
        let batch = self.input_files.len() > 1;
        let mut out = String::new();

        for (path, record) in results {
            if batch {
                out.push_str(&format!("== {} ==\n", path));
            }
            match record {
                Some(record) => out.push_str(&api::format_text(record)),
                None => out.push_str("No EXIF data\n"),
            }
            if batch {
                out.push('\n');
            }
        }

        out
    }

    /// Renders the records as TOML; files without EXIF are left out
    fn render_toml(&self, results: &[(&str, Option<ExifRecord>)]) -> ExifResult<String> {
        if self.input_files.len() == 1 {
            return match results.first() {
                Some((_, Some(record))) => api::format_toml(record),
                _ => Ok(String::new()),
            };
        }

        api::format_toml_batch(
            results
                .iter()
                .filter_map(|(path, record)| record.as_ref().map(|r| (*path, r))),
        )
    }
}

impl Command for ReadCommand {
    fn execute(&self) -> ExifResult<()> {
        info!("Reading EXIF from {} file(s)", self.input_files.len());

        let (results, failures) = self.read_all();

        let output = match self.format {
            OutputFormat::Text => self.render_text(&results),
            OutputFormat::Toml => self.render_toml(&results)?,
        };
        print!("{}", output);

        if failures > 0 {
            return Err(ExifError::GenericError(format!(
                "{} of {} inputs could not be read",
                failures,
                self.input_files.len()
            )));
        }

        debug!("Read completed successfully");
        Ok(())
    }
}
