//! Embeds binary files into C headers as `unsigned char` arrays.

pub mod emit;
pub mod error;

pub use crate::emit::{BYTES_PER_LINE, Embedding, base_name, emit};
pub use crate::error::{Error, Result};
