//! Parser module for CMake build files
//!
//! This module contains the lexer and parser for `CMakeLists.txt` sources.

pub mod types;
pub mod lexer;
pub mod parser;

// Re-exports
pub use types::ParseException;
pub use lexer::{Lexer, Token, TokenType, LexerError};
pub use parser::{parse, Parser};
