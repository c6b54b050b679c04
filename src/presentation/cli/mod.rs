pub mod commands;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::services::repo_queries::RepoQueryService;
use crate::application::use_cases::{
    batch_operation::{BatchOperationConfig, BatchOperationUseCase},
    diff_repositories::DiffRepositoriesUseCase,
    list_repositories::{ListRepositoriesConfig, ListRepositoriesUseCase},
    select_repositories::{SelectRepositoriesConfig, SelectRepositoriesUseCase},
    status_check::{StatusCheckConfig, StatusCheckUseCase},
};
use crate::common::error::RackError;
use crate::common::recovery::ErrorRecovery;
use crate::domain::entities::repo_entry::RepoEntry;
use crate::domain::value_objects::{RepoAction, Verbosity};
use crate::infrastructure::filesystem::{ConfigStore, RepositoryEnumerator};
use crate::infrastructure::scm::GitScm;
use crate::presentation::ui::DisplayHelper;

use commands::{BatchCommand, DiffCommand, ListCommand, StatusCommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// Output format options for status command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// rack - Manage the git repositories kept side by side in one directory
#[derive(Parser)]
#[command(name = "rack")]
#[command(about = "Manage the git repositories kept side by side in one directory")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Include untracked files
    #[arg(short = 'u', long, global = true)]
    pub show_untracked: bool,

    /// Directory holding the repositories (defaults to current directory)
    #[arg(short = 'd', long, env = "RACK_DIR", global = true)]
    pub working_dir: Option<PathBuf>,

    /// Only operate on these repositories (repeatable or comma separated)
    #[arg(short = 'r', long = "repo", value_delimiter = ',', global = true)]
    pub repos: Vec<String>,

    /// Only operate on repositories with uncommitted changes
    #[arg(short = 'C', long, global = true)]
    pub changed: bool,

    /// Only operate on the first repository with uncommitted changes
    #[arg(short = 'n', long, global = true)]
    pub next: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Stop on the first git or parse failure and dump debugging output
    #[arg(short = 'D', long = "die-and-debug", global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List repositories
    List {
        /// Show the number of changed files
        #[arg(short = 's', long)]
        status: bool,

        /// Show remote names
        #[arg(short = 'R', long, alias = "show-remotes")]
        remotes: bool,

        /// Also list directories that are not repositories
        #[arg(short = 'N', long)]
        non_repos: bool,

        /// Only list directories that are not repositories (requires -N)
        #[arg(short = 'O', long)]
        only_non_repos: bool,
    },

    /// Show uncommitted changes per repository
    Status {
        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Pull every repository
    Pull,

    /// Push every repository
    Push,

    /// Show uncommitted diffs
    Diff,

    /// Discard uncommitted changes (git reset --hard HEAD)
    Reset,

    /// Branch management (not implemented)
    Branch,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        self.init_logging();

        // Set up colored output
        let use_color = !self.cli.no_color && console::colors_enabled();
        colored::control::set_override(use_color);
        console::set_colors_enabled(use_color);
        let display = DisplayHelper::new(use_color);

        // Handle the command
        match self.handle_command(&display).await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    fn verbosity(&self) -> Verbosity {
        Verbosity::from_count(self.cli.verbose)
    }

    /// `RUST_LOG` wins over `-v`; logs go to stderr
    fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.verbosity().filter_directive()));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    async fn handle_command(&self, display: &DisplayHelper) -> anyhow::Result<()> {
        if let Commands::Branch = self.cli.command {
            let error = RackError::not_implemented("branch");
            tracing::error!("{}", error);
            return Err(error.into());
        }

        let list_use_case = match &self.cli.command {
            Commands::List {
                status,
                remotes,
                non_repos,
                only_non_repos,
            } => {
                let use_case = ListRepositoriesUseCase::new(ListRepositoriesConfig {
                    show_status: *status,
                    show_untracked: self.cli.show_untracked,
                    show_remotes: *remotes,
                    include_non_repos: *non_repos,
                    only_non_repos: *only_non_repos,
                });
                use_case.validate()?;
                Some(use_case)
            }
            _ => None,
        };

        let working_dir = match &self.cli.working_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir()?,
        };

        let mut selection_config = SelectRepositoriesConfig {
            working_dir: working_dir.clone(),
            explicit_repos: self.cli.repos.clone(),
            configured_repos: None,
            changed_only: self.cli.changed,
            next_only: self.cli.next,
            show_untracked: self.cli.show_untracked,
        };
        SelectRepositoriesUseCase::new(selection_config.clone()).validate()?;

        let config = ConfigStore::new().read_config(&working_dir).await?;
        selection_config.configured_repos = config.repos;

        let enumerator = RepositoryEnumerator::new(&working_dir);
        let mut queries = RepoQueryService::new(
            Arc::new(GitScm::new()),
            ErrorRecovery::new(self.cli.debug),
            self.verbosity(),
        );

        let repos = SelectRepositoriesUseCase::new(selection_config)
            .execute(&enumerator, &mut queries)
            .await?;
        tracing::debug!("selected {} repositories", repos.len());

        match &self.cli.command {
            Commands::List { remotes, .. } => {
                let Some(use_case) = list_use_case else {
                    return Err(RackError::internal_error("list configuration missing").into());
                };
                let result = use_case.execute(&repos, &enumerator, &mut queries).await?;
                display.write(&ListCommand::new(display, *remotes).render(&result))?;
                Ok(())
            }
            Commands::Status { output } => {
                let result = StatusCheckUseCase::new(StatusCheckConfig {
                    show_untracked: self.cli.show_untracked,
                })
                .execute(&repos, &mut queries)
                .await?;
                display.write(&StatusCommand::new(display, *output).render(&result)?)?;
                Ok(())
            }
            Commands::Diff => {
                let result = DiffRepositoriesUseCase::new()
                    .execute(&repos, &mut queries)
                    .await?;
                display.write(&DiffCommand::new(display).render(&result))?;
                Ok(())
            }
            Commands::Pull => {
                self.handle_batch(RepoAction::Pull, &repos, &mut queries, display)
                    .await
            }
            Commands::Push => {
                self.handle_batch(RepoAction::Push, &repos, &mut queries, display)
                    .await
            }
            Commands::Reset => {
                self.handle_batch(RepoAction::Reset, &repos, &mut queries, display)
                    .await
            }
            Commands::Branch => Err(RackError::not_implemented("branch").into()),
        }
    }

    async fn handle_batch(
        &self,
        action: RepoAction,
        repos: &[RepoEntry],
        queries: &mut RepoQueryService,
        display: &DisplayHelper,
    ) -> anyhow::Result<()> {
        let command = BatchCommand::new(display);
        let use_case = BatchOperationUseCase::new(BatchOperationConfig { action });

        let result = use_case
            .execute(repos, queries, |action, repo| {
                println!("{}", command.progress_line(action, repo));
            })
            .await?;

        if result.has_failures() {
            eprint!("{}", command.render_failures(action, &result));
            let failed = result.failed().count();
            return Err(anyhow::anyhow!(
                "git {} failed for {} of {} repositories",
                action,
                failed,
                result.outcomes.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repo_flag_accepts_repeats_and_commas() {
        let cli = Cli::try_parse_from(["rack", "-r", "api,web", "-r", "docs", "status"]).unwrap();
        assert_eq!(cli.repos, vec!["api", "web", "docs"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rack", "list", "-s", "-u", "-vv"]).unwrap();
        assert!(cli.show_untracked);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::List { status: true, .. }));
    }

    #[test]
    fn test_status_output_format() {
        let cli = Cli::try_parse_from(["rack", "status", "-o", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Status {
                output: OutputFormat::Json
            }
        ));
    }

    #[test]
    fn test_show_remotes_long_flag() {
        for flag in ["--show-remotes", "--remotes", "-R"] {
            let cli = Cli::try_parse_from(["rack", "list", flag]).unwrap();
            assert!(matches!(cli.command, Commands::List { remotes: true, .. }));
        }
    }

    #[test]
    fn test_debug_flag() {
        let cli = Cli::try_parse_from(["rack", "--die-and-debug", "diff"]).unwrap();
        assert!(cli.debug);
        let cli = Cli::try_parse_from(["rack", "-D", "diff"]).unwrap();
        assert!(cli.debug);
    }
}
