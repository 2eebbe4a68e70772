//! Conversion Errors
//!
//! Everything that can abort a translation run. Only a missing input file in
//! a referenced subdirectory is recoverable, and that case never becomes an
//! error value: the converter logs it and moves on.

use std::path::PathBuf;
use thiserror::Error;

use crate::fs::FsError;
use crate::parser::ParseException;

/// A recognized command whose arguments do not fit its translation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatementError {
    #[error("{command}() requires {expected}")]
    MissingArgument {
        command: String,
        expected: &'static str,
    },

    /// A nested group reached value rendering.
    #[error("unexpected argument {found} in {command}()")]
    UnexpectedArgument { command: String, found: String },
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ParseException,
    },

    #[error("{}:{line}:{column}: {source}", path.display())]
    Statement {
        path: PathBuf,
        line: usize,
        column: usize,
        source: StatementError,
    },

    #[error("no {input_name} in project root '{}'", path.display())]
    MissingRootInput { path: PathBuf, input_name: String },

    #[error("directory '{}' includes itself through add_subdirectory", path.display())]
    RecursiveSubdirectory { path: PathBuf },

    #[error(transparent)]
    Fs(#[from] FsError),
}
