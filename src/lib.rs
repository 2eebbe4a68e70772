//! cmake2meson - translate CMake project trees into Meson build files
//!
//! Each directory's `CMakeLists.txt` is lexed, parsed into a flat statement
//! sequence and rewritten line for line into a `meson.build` beside it.
//! Only a fixed set of commands is translated; everything else is kept as a
//! `# name` marker.

pub mod ast;
pub mod parser;
pub mod fs;
pub mod converter;
pub mod preview;

pub use ast::types::*;
pub use parser::{parse, Parser, ParseException};
pub use converter::{ConversionReport, ConvertError, Converter, ConverterOptions};
