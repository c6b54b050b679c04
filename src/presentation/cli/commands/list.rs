use crate::application::use_cases::list_repositories::{ListResult, ListRow};
use crate::presentation::ui::DisplayHelper;

/// Renderer for the list command
pub struct ListCommand<'a> {
    display: &'a DisplayHelper,
    show_remotes: bool,
}

impl<'a> ListCommand<'a> {
    pub fn new(display: &'a DisplayHelper, show_remotes: bool) -> Self {
        Self {
            display,
            show_remotes,
        }
    }

    /// Table with the columns `changes`, `folder` and optionally `remotes`
    pub fn render(&self, result: &ListResult) -> String {
        let rows: Vec<Vec<String>> = result.rows.iter().map(|row| self.cells(row)).collect();
        self.display.render_table(&rows)
    }

    fn cells(&self, row: &ListRow) -> Vec<String> {
        let mut cells = vec![
            row.changes.map(|n| n.to_string()).unwrap_or_default(),
            row.name.clone(),
        ];
        if self.show_remotes {
            let remotes = row
                .remotes
                .iter()
                .flatten()
                .map(|remote| self.display.format_remote(remote))
                .collect::<Vec<_>>()
                .join("\n");
            cells.push(remotes);
        }
        cells
    }
}
