//! Directory Converter
//!
//! Walks one directory's statements in order, writing a Meson line for each
//! translated statement. `add_subdirectory` converts the referenced
//! directory depth-first before its `subdir()` line is emitted, so a child
//! `meson.build` always exists before the parent that includes it.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::ast::types::Statement;
use crate::converter::commands::{convert_statement, subdirectory_of, CommandKind};
use crate::converter::errors::{ConvertError, StatementError};
use crate::converter::report::{ConversionReport, DirectoryReport};
use crate::fs::in_memory_fs::normalize_path;
use crate::fs::FileSystem;
use crate::parser::Parser;

pub const INPUT_FILE_NAME: &str = "CMakeLists.txt";
pub const OUTPUT_FILE_NAME: &str = "meson.build";
pub const INDENT_UNIT: &str = "  ";

#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Per-directory source file
    pub input_name: String,
    /// Per-directory generated file
    pub output_name: String,
    /// Repeated once per indentation level
    pub indent_unit: String,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            input_name: INPUT_FILE_NAME.to_string(),
            output_name: OUTPUT_FILE_NAME.to_string(),
            indent_unit: INDENT_UNIT.to_string(),
        }
    }
}

pub struct Converter<F: FileSystem> {
    fs: F,
    options: ConverterOptions,
    /// Nothing raises this; every line is written at level zero by default.
    indent_level: usize,
    /// Directories currently being converted, innermost last
    active: Vec<PathBuf>,
}

impl<F: FileSystem> Converter<F> {
    pub fn new(fs: F) -> Self {
        Self::with_options(fs, ConverterOptions::default())
    }

    pub fn with_options(fs: F, options: ConverterOptions) -> Self {
        Self {
            fs,
            options,
            indent_level: 0,
            active: Vec::new(),
        }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
    }

    /// Convert the tree rooted at `root`.
    ///
    /// The root must contain an input file; referenced subdirectories
    /// without one are skipped with a warning.
    pub fn convert(&mut self, root: impl AsRef<Path>) -> Result<ConversionReport, ConvertError> {
        let root = root.as_ref();
        let input = root.join(&self.options.input_name);
        let source = match self.fs.read_file(&input) {
            Ok(source) => source,
            Err(e) if e.is_not_found() => {
                return Err(ConvertError::MissingRootInput {
                    path: root.to_path_buf(),
                    input_name: self.options.input_name.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let mut report = ConversionReport::default();
        self.active.clear();
        self.convert_source(root, &source, &mut report)?;
        Ok(report)
    }

    fn convert_dir(&mut self, dir: &Path, report: &mut ConversionReport) -> Result<(), ConvertError> {
        let input = dir.join(&self.options.input_name);
        let source = match self.fs.read_file(&input) {
            Ok(source) => source,
            Err(e) if e.is_not_found() => {
                warn!(directory = %dir.display(), "no {} found, skipping", self.options.input_name);
                report.skipped.push(dir.to_path_buf());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        self.convert_source(dir, &source, report)
    }

    fn convert_source(
        &mut self,
        dir: &Path,
        source: &str,
        report: &mut ConversionReport,
    ) -> Result<(), ConvertError> {
        let key = normalize_path(dir);
        if self.active.contains(&key) {
            return Err(ConvertError::RecursiveSubdirectory { path: dir.to_path_buf() });
        }
        self.active.push(key);
        let result = self.translate(dir, source, report);
        self.active.pop();
        result
    }

    fn translate(
        &mut self,
        dir: &Path,
        source: &str,
        report: &mut ConversionReport,
    ) -> Result<(), ConvertError> {
        debug!(directory = %dir.display(), "converting");
        let input = dir.join(&self.options.input_name);
        let output = dir.join(&self.options.output_name);
        let mut summary = DirectoryReport::new(dir.to_path_buf(), output.clone());
        let mut text = String::new();

        for stmt in Parser::new(source) {
            let stmt = stmt.map_err(|e| ConvertError::Parse {
                path: input.clone(),
                source: e,
            })?;
            summary.statements += 1;

            match CommandKind::of_statement(&stmt) {
                CommandKind::Subdirectory => {
                    let subdir = subdirectory_of(&stmt).map_err(|e| statement_error(&input, &stmt, e))?;
                    self.convert_dir(&dir.join(subdir), report)?;
                }
                CommandKind::Untranslated => summary.untranslated.push(stmt.name.clone()),
                _ => {}
            }

            if let Some(line) = convert_statement(&stmt).map_err(|e| statement_error(&input, &stmt, e))? {
                self.write_entry(&mut text, &line);
                summary.lines += 1;
            }
        }

        self.fs.write_file(&output, &text)?;
        debug!(output = %output.display(), lines = summary.lines, "wrote");
        report.converted.push(summary);
        Ok(())
    }

    fn write_entry(&self, out: &mut String, line: &str) {
        out.push_str(&self.options.indent_unit.repeat(self.indent_level));
        out.push_str(line);
        if !line.ends_with('\n') {
            out.push('\n');
        }
    }
}

fn statement_error(path: &Path, stmt: &Statement, source: StatementError) -> ConvertError {
    ConvertError::Statement {
        path: path.to_path_buf(),
        line: stmt.line,
        column: stmt.column,
        source,
    }
}
