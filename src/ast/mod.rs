//! Syntax Tree Types for CMake
//!
//! Architecture:
//!   CMakeLists.txt → Lexer → Parser → Statements → Converter → meson.build

pub mod types;
