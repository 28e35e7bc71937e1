//! Error types for header emission.

use std::path::PathBuf;

use derive_more::{Display, Error};

/// Result type for emitter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while embedding a file.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The input file is missing or unreadable.
    #[display("cannot read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file cannot be created or truncated.
    #[display("cannot create {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing or flushing the output failed part way.
    #[display("cannot write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn create_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::CreateOutput {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::WriteOutput {
            path: path.into(),
            source,
        }
    }

    /// The path the failed operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::ReadInput { path, .. }
            | Error::CreateOutput { path, .. }
            | Error::WriteOutput { path, .. } => path,
        }
    }
}
