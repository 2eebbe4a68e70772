//! Dry-Run Previews
//!
//! Renders generated files for `--dry-run` and `--diff` instead of writing
//! them to disk.

use std::path::Path;

use similar::TextDiff;

/// Generated file preceded by a `==> path <==` header.
pub fn format_listing(path: &Path, content: &str) -> String {
    let mut output = format!("==> {} <==\n", path.display());
    output.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Unified diff with 3 lines of context. Empty when the texts match.
pub fn format_unified_diff(old_label: &str, new_label: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .missing_newline_hint(true)
        .header(old_label, new_label)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_produce_no_diff() {
        assert_eq!(format_unified_diff("a", "b", "x\n", "x\n"), "");
    }

    #[test]
    fn test_new_file_diff() {
        let diff = format_unified_diff("proj/meson.build", "proj/meson.build (generated)", "", "project('P')\n");
        assert!(diff.starts_with("--- proj/meson.build\n+++ proj/meson.build (generated)\n"));
        assert!(diff.contains("@@ -0,0 +1"));
        assert!(diff.ends_with("+project('P')\n"));
    }

    #[test]
    fn test_changed_line() {
        let diff = format_unified_diff("old", "new", "a = 'x'\nb = 'y'\n", "a = 'x'\nb = 'z'\n");
        assert!(diff.contains(" a = 'x'\n"));
        assert!(diff.contains("-b = 'y'\n"));
        assert!(diff.contains("+b = 'z'\n"));
    }

    #[test]
    fn test_missing_trailing_newline_is_marked() {
        let diff = format_unified_diff("old", "new", "a", "b\n");
        assert!(diff.contains("-a\n\\ No newline at end of file\n"));
    }

    #[test]
    fn test_listing_header() {
        assert_eq!(
            format_listing(Path::new("proj/meson.build"), "project('P')\n"),
            "==> proj/meson.build <==\nproject('P')\n"
        );
        assert_eq!(format_listing(Path::new("e/meson.build"), ""), "==> e/meson.build <==\n");
    }
}
