use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::status_check::StatusResult;
use crate::domain::entities::status_record::StatusRecord;
use crate::domain::value_objects::{LineDelta, StatusCode};
use crate::presentation::cli::OutputFormat;
use crate::presentation::ui::DisplayHelper;

/// Renderer for the status command
pub struct StatusCommand<'a> {
    display: &'a DisplayHelper,
    output: OutputFormat,
}

impl<'a> StatusCommand<'a> {
    pub fn new(display: &'a DisplayHelper, output: OutputFormat) -> Self {
        Self { display, output }
    }

    pub fn render(&self, status: &StatusResult) -> Result<String> {
        match self.output {
            OutputFormat::Text => Ok(self.render_text(status)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(status)?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Yaml => Ok(serde_yaml::to_string(status)?),
        }
    }

    fn render_text(&self, status: &StatusResult) -> String {
        let mut out = String::new();
        for repo_status in &status.repositories {
            out.push_str(&self.display.heading(&format!("Status for Repo: {}", repo_status.repo)));
            out.push('\n');
            for record in &repo_status.files {
                out.push_str(&self.render_record(record));
                out.push('\n');
            }
        }
        out
    }

    fn render_record(&self, record: &StatusRecord) -> String {
        let code = record.code.to_string();
        let code = if self.display.use_color {
            match record.code {
                StatusCode::Added => code.green().to_string(),
                StatusCode::Deleted => code.red().to_string(),
                StatusCode::Unmerged => code.magenta().bold().to_string(),
                StatusCode::Untracked | StatusCode::Ignored => code.bright_black().to_string(),
                _ => code.yellow().to_string(),
            }
        } else {
            code
        };
        format!("  {} {}\t{}", code, format_delta(record.line_delta), record.path)
    }
}

/// `±<n>` padded to four columns after the sign, blank for zero
fn format_delta(delta: LineDelta) -> String {
    if delta.is_zero() {
        "    ".to_string()
    } else {
        format!("±{:<4}", delta.to_string())
    }
}
