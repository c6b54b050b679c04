use super::scm_interface::{ScmError, ScmOperations};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Name of the metadata entry that marks a directory as a git repository.
/// It is a directory for regular clones and a file for worktrees and
/// submodules.
pub const GIT_METADATA_DIR: &str = ".git";

/// Git implementation of SCM operations, driving the `git` executable
pub struct GitScm {
    git_executable: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a git command in the given repository
    async fn execute_git_command(
        &self,
        args: &[&str],
        repo_path: &Path,
    ) -> Result<std::process::Output, ScmError> {
        if !repo_path.is_dir() {
            return Err(ScmError::repository_not_found(repo_path));
        }

        tracing::debug!(
            "running {} {} in {}",
            self.git_executable,
            args.join(" "),
            repo_path.display()
        );

        let output = Command::new(&self.git_executable)
            .args(args)
            .current_dir(repo_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    ScmError::executable_not_found(&self.git_executable)
                }
                _ => e.into(),
            })?;
        Ok(output)
    }

    /// Execute a git command and return its stdout, failing on non-zero exit
    async fn execute_git_command_checked(
        &self,
        args: &[&str],
        repo_path: &Path,
    ) -> Result<String, ScmError> {
        let output = self.execute_git_command(args, repo_path).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let command = format!("{} {}", self.git_executable, args.join(" "));
            return Err(ScmError::command_failed(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl ScmOperations for GitScm {
    async fn status_porcelain(&self, repo_path: &Path) -> Result<String, ScmError> {
        self.execute_git_command_checked(&["status", "--porcelain"], repo_path)
            .await
    }

    async fn diff_stat(&self, repo_path: &Path) -> Result<String, ScmError> {
        // A wide stat keeps long paths from being abbreviated with ".../"
        self.execute_git_command_checked(&["diff", "--stat=1000"], repo_path)
            .await
    }

    async fn diff(&self, repo_path: &Path) -> Result<String, ScmError> {
        self.execute_git_command_checked(&["diff"], repo_path).await
    }

    async fn remotes(&self, repo_path: &Path) -> Result<Vec<String>, ScmError> {
        let output = self
            .execute_git_command_checked(&["remote"], repo_path)
            .await?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    async fn reset_hard(&self, repo_path: &Path) -> Result<(), ScmError> {
        self.execute_git_command_checked(&["reset", "--hard", "HEAD"], repo_path)
            .await?;
        Ok(())
    }

    async fn pull(&self, repo_path: &Path) -> Result<(), ScmError> {
        self.execute_git_command_checked(&["pull"], repo_path).await?;
        Ok(())
    }

    async fn push(&self, repo_path: &Path) -> Result<(), ScmError> {
        self.execute_git_command_checked(&["push"], repo_path).await?;
        Ok(())
    }
}
