use colored::Colorize;
use console::{measure_text_width, pad_str, Alignment, Style, Term};
use std::io;

const COLUMN_GAP: &str = "  ";

/// Display utilities for the CLI interface
pub struct DisplayHelper {
    pub use_color: bool,
    pub terminal: Term,
}

impl DisplayHelper {
    /// Create a new DisplayHelper
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            terminal: Term::stdout(),
        }
    }

    /// Format a section heading such as `Status for Repo: api`
    pub fn heading(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Format a remote name; `origin` is dimmed
    pub fn format_remote(&self, remote: &str) -> String {
        if self.use_color && remote == "origin" {
            remote.bright_black().to_string()
        } else {
            remote.to_string()
        }
    }

    /// Render rows without a header. Cells may span several lines and
    /// rows alternate between two background shades.
    pub fn render_table(&self, rows: &[Vec<String>]) -> String {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return String::new();
        }

        // Calculate column widths
        let mut col_widths = vec![0; columns];
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.lines().map(measure_text_width).max().unwrap_or(0);
                col_widths[i] = col_widths[i].max(width);
            }
        }

        let even = Style::new().on_black();
        let odd = Style::new().on_color256(235);

        let mut out = String::new();
        for (index, row) in rows.iter().enumerate() {
            let height = row.iter().map(|cell| cell.lines().count()).max().unwrap_or(0).max(1);
            let cell_lines: Vec<Vec<&str>> = row.iter().map(|cell| cell.lines().collect()).collect();

            for line_no in 0..height {
                let mut line = String::new();
                for (i, width) in col_widths.iter().enumerate() {
                    if i > 0 {
                        line.push_str(COLUMN_GAP);
                    }
                    let text = cell_lines
                        .get(i)
                        .and_then(|lines| lines.get(line_no))
                        .copied()
                        .unwrap_or("");
                    line.push_str(&pad_str(text, *width, Alignment::Left, None));
                }

                let line = if self.use_color {
                    let style = if index % 2 == 0 { &even } else { &odd };
                    style.apply_to(line).to_string()
                } else {
                    line.trim_end().to_string()
                };
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }

    /// Write rendered output to the terminal without an extra newline
    pub fn write(&self, text: &str) -> io::Result<()> {
        self.terminal.write_str(text)?;
        self.terminal.flush()
    }
}
