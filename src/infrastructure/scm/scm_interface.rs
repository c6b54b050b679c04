use async_trait::async_trait;
use std::path::Path;

/// Queries and batch operations rack runs against a single repository.
///
/// Query methods return the tool's raw text output; parsing happens in the
/// application layer so the adapter stays a thin subprocess wrapper.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScmOperations: Send + Sync {
    /// Short-form status listing (`git status --porcelain`)
    async fn status_porcelain(&self, repo_path: &Path) -> Result<String, ScmError>;

    /// Per-file change summary of the working tree (`git diff --stat`)
    async fn diff_stat(&self, repo_path: &Path) -> Result<String, ScmError>;

    /// Unified diff of the working tree (`git diff`)
    async fn diff(&self, repo_path: &Path) -> Result<String, ScmError>;

    /// Names of the configured remotes
    async fn remotes(&self, repo_path: &Path) -> Result<Vec<String>, ScmError>;

    /// Discard all uncommitted changes to tracked files
    async fn reset_hard(&self, repo_path: &Path) -> Result<(), ScmError>;

    /// Pull the current branch from its upstream
    async fn pull(&self, repo_path: &Path) -> Result<(), ScmError>;

    /// Push the current branch to its upstream
    async fn push(&self, repo_path: &Path) -> Result<(), ScmError>;
}

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Repository not found at path: {path}")]
    RepositoryNotFound { path: String },

    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Command execution failed: {command}, exit code: {exit_code}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },
}

impl ScmError {
    /// Create a repository not found error
    pub fn repository_not_found(path: &Path) -> Self {
        Self::RepositoryNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}
