//! Tag table listing command

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::tiff::errors::{ExifError, ExifResult};
use crate::tiff::tags::TagNamespace;

/// Command for printing the known tags of a namespace
pub struct TagsCommand {
    namespace: TagNamespace,
}

impl TagsCommand {
    /// Create a new tags command from the `--list-tags` argument
    pub fn new(args: &ArgMatches) -> ExifResult<Self> {
        let name = args
            .get_one::<String>("list-tags")
            .ok_or_else(|| ExifError::GenericError("Missing tag namespace".to_string()))?;
        let namespace = TagNamespace::from_name(name)
            .ok_or_else(|| ExifError::GenericError(format!("Unknown tag namespace: {}", name)))?;

        Ok(TagsCommand { namespace })
    }

    /// One `0xID  Name` line per tag, in table order
    pub fn render(&self) -> String {
        self.namespace
            .tags()
            .iter()
            .map(|(id, name)| format!("{:#06x}  {}\n", id, name))
            .collect()
    }
}

impl Command for TagsCommand {
    fn execute(&self) -> ExifResult<()> {
        print!("{}", self.render());
        Ok(())
    }
}
