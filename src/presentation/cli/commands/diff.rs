use colored::Colorize;

use crate::application::use_cases::diff_repositories::DiffResult;
use crate::domain::entities::file_diff::{DiffEntry, DiffMarker};
use crate::presentation::ui::DisplayHelper;

/// Renderer for the diff command
pub struct DiffCommand<'a> {
    display: &'a DisplayHelper,
}

impl<'a> DiffCommand<'a> {
    pub fn new(display: &'a DisplayHelper) -> Self {
        Self { display }
    }

    pub fn render(&self, result: &DiffResult) -> String {
        let mut out = String::new();

        if let Some(repo) = &result.unchanged_single {
            out.push_str(&format!("Repository {} has no changes.\n", repo));
            return out;
        }

        for repo_diff in &result.repositories {
            out.push_str(&self.display.heading(&format!("Diff for Repo: {}", repo_diff.repo)));
            out.push('\n');
            for file in repo_diff.diff.files() {
                out.push_str(&format!("Diff for '{}'\n", file.path));
                for entry in &file.entries {
                    out.push_str(&self.render_entry(entry));
                    out.push('\n');
                }
            }
        }
        out
    }

    fn render_entry(&self, entry: &DiffEntry) -> String {
        let line = match entry.marker {
            DiffMarker::Hunk => format!("  {}", entry.text),
            marker => format!("  {}\t{}", marker.symbol(), entry.text),
        };
        if !self.display.use_color {
            return line;
        }
        match entry.marker {
            DiffMarker::Added => line.green().to_string(),
            DiffMarker::Removed => line.red().to_string(),
            DiffMarker::Hunk => line.cyan().to_string(),
        }
    }
}
