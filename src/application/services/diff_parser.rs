//! Parsing of unified diffs as produced by `git diff`.

use crate::domain::entities::file_diff::{DiffEntry, DiffMarker, RepoDiff};

const FILE_HEADER: &str = "diff --git ";
/// Headers of conflicted files while a merge is unresolved
const COMBINED_HEADERS: [&str; 2] = ["diff --cc ", "diff --combined "];
const HUNK_HEADER: &str = "@@";

/// Groups the hunk headers and changed lines of a unified diff by file.
///
/// The parser never fails: lines it does not recognize are ignored, as are
/// changed lines that show up before any file header.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffParser;

impl DiffParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, output: &str) -> RepoDiff {
        let mut diff = RepoDiff::new();
        let mut current: Option<String> = None;
        // between "diff --git" and the first hunk: "---"/"+++" are file names
        let mut in_file_header = false;

        for line in output.lines() {
            let header_path = match line.strip_prefix(FILE_HEADER) {
                Some(rest) => Some(file_path(rest)),
                None => COMBINED_HEADERS
                    .iter()
                    .find_map(|header| line.strip_prefix(header))
                    .map(|rest| rest.trim().to_string()),
            };
            if let Some(path) = header_path {
                diff.start_file(&path);
                current = Some(path);
                in_file_header = true;
                continue;
            }

            let Some(path) = current.as_deref() else {
                continue;
            };

            let entry = if line.starts_with(HUNK_HEADER) {
                in_file_header = false;
                DiffEntry::new(DiffMarker::Hunk, line.trim_end())
            } else if let Some(text) = line.strip_prefix('+') {
                if in_file_header && text.starts_with("++") {
                    continue;
                }
                DiffEntry::new(DiffMarker::Added, text.trim_end())
            } else if let Some(text) = line.strip_prefix('-') {
                if in_file_header && text.starts_with("--") {
                    continue;
                }
                DiffEntry::new(DiffMarker::Removed, text.trim_end())
            } else {
                continue;
            };

            diff.start_file(path).entries.push(entry);
        }

        diff
    }
}

/// Path from the remainder of a `diff --git a/<path> b/<path>` line
fn file_path(rest: &str) -> String {
    match rest.strip_prefix("a/") {
        Some(a_side) => a_side
            .split_once(" b/")
            .map(|(path, _)| path)
            .unwrap_or(a_side)
            .to_string(),
        // --no-prefix output
        None => rest.split_whitespace().next().unwrap_or(rest).to_string(),
    }
}
