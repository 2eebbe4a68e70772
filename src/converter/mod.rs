//! CMake to Meson conversion
//!
//! `commands` translates single statements; `converter` drives the
//! per-directory walk and writes the output files.

pub mod errors;
pub mod commands;
pub mod report;
pub mod converter;

pub use errors::{ConvertError, StatementError};
pub use commands::{convert_statement, CommandKind, IGNORED_COMMANDS};
pub use report::{ConversionReport, DirectoryReport};
pub use converter::{Converter, ConverterOptions, INPUT_FILE_NAME, OUTPUT_FILE_NAME};
