use colored::Colorize;

use crate::application::use_cases::batch_operation::BatchResult;
use crate::domain::entities::repo_entry::RepoEntry;
use crate::domain::value_objects::RepoAction;
use crate::presentation::ui::DisplayHelper;

/// Renderer for pull, push and reset
pub struct BatchCommand<'a> {
    display: &'a DisplayHelper,
}

impl<'a> BatchCommand<'a> {
    pub fn new(display: &'a DisplayHelper) -> Self {
        Self { display }
    }

    /// Line printed before the action runs, e.g. `Pulling Repo: api`
    pub fn progress_line(&self, action: RepoAction, repo: &RepoEntry) -> String {
        self.display
            .heading(&format!("{} Repo: {}", action.progress_label(), repo.name))
    }

    /// Summary of failed repositories, empty when everything succeeded
    pub fn render_failures(&self, action: RepoAction, result: &BatchResult) -> String {
        let mut out = String::new();
        for outcome in result.failed() {
            let line = format!(
                "{} failed for {}: {}",
                action,
                outcome.repo,
                outcome.error.as_deref().unwrap_or_default()
            );
            if self.display.use_color {
                out.push_str(&line.red().to_string());
            } else {
                out.push_str(&line);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::batch_operation::BatchOutcome;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_progress_line() {
        let display = DisplayHelper::new(false);
        let repo = RepoEntry::new("api", "/work/api", true);
        let command = BatchCommand::new(&display);

        assert_eq!(command.progress_line(RepoAction::Pull, &repo), "Pulling Repo: api");
        assert_eq!(command.progress_line(RepoAction::Push, &repo), "Pushing Repo: api");
        assert_eq!(command.progress_line(RepoAction::Reset, &repo), "Resetting Repo: api");
    }

    #[test]
    fn test_render_failures() {
        let display = DisplayHelper::new(false);
        let result = BatchResult {
            outcomes: vec![
                BatchOutcome {
                    repo: "api".to_string(),
                    error: Some("rejected".to_string()),
                },
                BatchOutcome {
                    repo: "web".to_string(),
                    error: None,
                },
            ],
        };

        assert_eq!(
            BatchCommand::new(&display).render_failures(RepoAction::Push, &result),
            "push failed for api: rejected\n"
        );
    }
}
