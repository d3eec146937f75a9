use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use exifkit::utils::logger::Logger;
use exifkit::commands::{CommandFactory, ExifkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("ExifKit")
        .version("0.1.0")
        .author("Maurice Schilpp")
        .about("Extract EXIF metadata from JPEG and HEIC files")
        .arg(
            Arg::new("input")
                .help("Input JPEG or HEIC file(s)")
                .num_args(1..)
                .required_unless_present("list-tags")
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file as well as stderr")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (text, toml)")
                .value_name("FORMAT")
                .value_parser(["text", "toml"])
                .default_value("text"),
        )
        .arg(
            Arg::new("container")
                .short('c')
                .long("container")
                .help("Container format of the inputs (auto, jpeg, heic)")
                .value_name("KIND")
                .value_parser(["auto", "jpeg", "heic"])
                .default_value("auto"),
        )
        .arg(
            Arg::new("list-tags")
                .long("list-tags")
                .help("List the known tags of a namespace (tiff, exif, gps) and exit")
                .value_name("NAMESPACE")
                .value_parser(["tiff", "exif", "gps"])
                .required(false),
        )
        .get_matches();

    let log_file = matches.get_one::<String>("log-file").map(String::as_str);
    if let Err(e) = Logger::init_global_logger(log_file, matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = ExifkitCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
