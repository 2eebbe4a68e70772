//! Conversion Report
//!
//! Summary of one translation run, printable as JSON.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::fs::in_memory_fs::normalize_path;

/// What happened to one directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryReport {
    pub directory: PathBuf,
    pub output: PathBuf,
    /// Statements parsed from the input file
    pub statements: usize,
    /// Lines written to the output file
    pub lines: usize,
    /// Command names left behind as `# name` markers, in source order
    pub untranslated: Vec<String>,
}

impl DirectoryReport {
    pub fn new(directory: PathBuf, output: PathBuf) -> Self {
        Self {
            directory,
            output,
            statements: 0,
            lines: 0,
            untranslated: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionReport {
    /// Converted directories, children before the parent that includes them
    pub converted: Vec<DirectoryReport>,
    /// Referenced directories with no input file
    pub skipped: Vec<PathBuf>,
}

impl ConversionReport {
    /// Distinct output files in completion order. A directory included from
    /// two places is listed once.
    pub fn outputs(&self) -> Vec<&PathBuf> {
        let mut seen = HashSet::new();
        self.converted
            .iter()
            .map(|d| &d.output)
            .filter(|output| seen.insert(normalize_path(output)))
            .collect()
    }

    pub fn untranslated_count(&self) -> usize {
        self.converted.iter().map(|d| d.untranslated.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes() {
        let mut dir = DirectoryReport::new(PathBuf::from("proj"), PathBuf::from("proj/meson.build"));
        dir.statements = 3;
        dir.lines = 2;
        dir.untranslated.push("option".to_string());
        let report = ConversionReport {
            converted: vec![dir],
            skipped: vec![PathBuf::from("proj/docs")],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["converted"][0]["output"], "proj/meson.build");
        assert_eq!(json["converted"][0]["untranslated"][0], "option");
        assert_eq!(json["skipped"][0], "proj/docs");
        assert_eq!(report.untranslated_count(), 1);
    }

    #[test]
    fn test_outputs_deduplicated() {
        let dir = |d: &str| DirectoryReport::new(PathBuf::from(d), PathBuf::from(d).join("meson.build"));
        let report = ConversionReport {
            converted: vec![dir("p/a"), dir("p/b/../a"), dir("p/b"), dir("p")],
            skipped: vec![],
        };
        let outputs = report.outputs();
        assert_eq!(
            outputs,
            vec![
                &PathBuf::from("p/a/meson.build"),
                &PathBuf::from("p/b/meson.build"),
                &PathBuf::from("p/meson.build"),
            ]
        );
    }
}
