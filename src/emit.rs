//! C header emission for embedded binary files.
//!
//! The generated header looks like this:
//!
//! ```c
//! #pragma once
//!
//! // Generated from icon.bin
//! static const unsigned int icon_size = 3;
//! static const unsigned char icon_data[] = {
//!     0x00, 0x01, 0xff,
//! };
//! ```
//!
//! Every byte token is followed by `", "`, so lines end with a comma and a
//! space, and a header whose length is a multiple of [`BYTES_PER_LINE`]
//! carries an empty line before the closing brace.

use std::borrow::Cow;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Number of byte tokens written on each line of the array body.
pub const BYTES_PER_LINE: usize = 12;

/// Indentation of each line of the array body.
pub const INDENT: &str = "    ";

/// Everything needed to render one header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Embedding<'a> {
    /// Name shown in the "Generated from" comment. Has no semantic effect.
    pub source_name: &'a str,
    /// Stem of the `<symbol>_size` and `<symbol>_data` identifiers, used verbatim.
    pub symbol: &'a str,
    pub data: &'a [u8],
}

impl<'a> Embedding<'a> {
    pub fn new(source_name: &'a str, symbol: &'a str, data: &'a [u8]) -> Self {
        Self {
            source_name,
            symbol,
            data,
        }
    }

    /// Value of the generated `<symbol>_size` constant.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Writes the complete header to `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Renders the header into a string.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Embedding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol;

        writeln!(f, "#pragma once")?;
        writeln!(f)?;
        writeln!(f, "// Generated from {}", self.source_name)?;
        writeln!(f, "static const unsigned int {symbol}_size = {};", self.size())?;
        writeln!(f, "static const unsigned char {symbol}_data[] = {{")?;

        for line in self.data.chunks(BYTES_PER_LINE) {
            f.write_str(INDENT)?;
            for byte in line {
                write!(f, "0x{byte:02x}, ")?;
            }
            if line.len() == BYTES_PER_LINE {
                writeln!(f)?;
            }
        }

        // closes a partial last line, or leaves a blank one
        writeln!(f)?;
        writeln!(f, "}};")
    }
}

/// Final component of `path`, or the whole path when there is none.
pub fn base_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}

/// Reads `input` and writes a header embedding its bytes to `output`.
///
/// The output file is created or truncated. If writing fails part way the
/// file is left as it is.
pub fn emit(input: &Path, output: &Path, symbol: &str) -> Result<()> {
    let data = fs::read(input).map_err(|e| Error::read_input(input, e))?;
    debug!(input = %input.display(), bytes = data.len(), "Read input");

    if u32::try_from(data.len()).is_err() {
        warn!(
            bytes = data.len(),
            "Input is larger than an unsigned int can portably hold"
        );
    }

    let source_name = base_name(input);
    let embedding = Embedding::new(&source_name, symbol, &data);

    let file = File::create(output).map_err(|e| Error::create_output(output, e))?;
    let mut writer = BufWriter::new(file);
    embedding
        .write_to(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::write_output(output, e))?;

    info!(output = %output.display(), symbol, bytes = data.len(), "Header written");
    Ok(())
}
