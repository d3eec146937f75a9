//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod read_command;
pub mod tags_command;

pub use command_traits::{Command, CommandFactory};
pub use read_command::ReadCommand;
pub use tags_command::TagsCommand;

use clap::ArgMatches;
use crate::tiff::errors::ExifResult;

/// Factory for creating command instances based on CLI arguments
pub struct ExifkitCommandFactory;

impl ExifkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExifkitCommandFactory
    }
}

impl Default for ExifkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for ExifkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> ExifResult<Box<dyn Command>> {
        if args.contains_id("list-tags") {
            Ok(Box::new(TagsCommand::new(args)?))
        } else {
            // Default to reading EXIF
            Ok(Box::new(ReadCommand::new(args)?))
        }
    }
}
