//! Command-line interface for bin2header.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Exactly three positionals, taken verbatim. Leading hyphens are part of
/// the value, so there are no flags.
#[derive(Parser)]
#[command(name = "bin2header")]
#[command(about = "Embed a binary file into a C header as a byte array", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Binary file to embed
    #[arg(allow_hyphen_values = true)]
    pub input_file: PathBuf,

    /// Header file to create or overwrite
    #[arg(allow_hyphen_values = true)]
    pub output_file: PathBuf,

    /// Stem of the generated `<name>_size` and `<name>_data` symbols
    #[arg(allow_hyphen_values = true)]
    pub variable_name: OsString,
}
