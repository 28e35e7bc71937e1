//! Common test utilities for CLI tests.

use std::path::Path;
use std::process::{Command, Output};

/// Run the bin2header binary with the given arguments.
pub fn run_bin2header<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    command().args(args).output().expect("Failed to execute bin2header")
}

/// Run the bin2header binary from `dir`, so relative paths resolve there.
#[allow(dead_code)]
pub fn run_bin2header_in<I, S>(dir: &Path, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    command()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute bin2header")
}

fn command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bin2header"));
    command.env_remove("BIN2HEADER_LOG");
    command
}

/// Decode the `0xHH` tokens of a generated array body, in order.
#[allow(dead_code)]
pub fn decode_array(header: &str) -> Vec<u8> {
    header
        .lines()
        .filter(|line| line.starts_with("    "))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let hex = token.strip_prefix("0x").expect("token without 0x prefix");
            u8::from_str_radix(hex, 16).expect("token is not a hex byte")
        })
        .collect()
}

#[allow(dead_code)]
pub fn read_header(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read generated header")
}
