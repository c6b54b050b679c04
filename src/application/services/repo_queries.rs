//! Cached per-repository queries.
//!
//! Results are kept for the lifetime of one invocation, keyed by repository
//! path and query flags, so that `--changed` filtering followed by `status`
//! only runs git once per repository. Batch operations call
//! [`RepoQueryService::invalidate`] after touching a repository.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::diff_parser::DiffParser;
use super::status_parser::StatusParser;
use crate::common::error::RackError;
use crate::common::recovery::ErrorRecovery;
use crate::common::result::RackResult;
use crate::domain::entities::{RepoDiff, RepoEntry, StatusRecord};
use crate::domain::value_objects::Verbosity;
use crate::infrastructure::scm::ScmOperations;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StatusKey {
    path: PathBuf,
    show_untracked: bool,
}

pub struct RepoQueryService {
    scm: Arc<dyn ScmOperations>,
    recovery: ErrorRecovery,
    verbosity: Verbosity,
    status_parser: StatusParser,
    diff_parser: DiffParser,
    status_cache: HashMap<StatusKey, Vec<StatusRecord>>,
    diff_cache: HashMap<PathBuf, RepoDiff>,
    remote_cache: HashMap<PathBuf, Vec<String>>,
}

impl RepoQueryService {
    pub fn new(scm: Arc<dyn ScmOperations>, recovery: ErrorRecovery, verbosity: Verbosity) -> Self {
        Self {
            scm,
            recovery,
            verbosity,
            status_parser: StatusParser::new(recovery),
            diff_parser: DiffParser::new(),
            status_cache: HashMap::new(),
            diff_cache: HashMap::new(),
            remote_cache: HashMap::new(),
        }
    }

    pub fn scm(&self) -> Arc<dyn ScmOperations> {
        Arc::clone(&self.scm)
    }

    pub fn recovery(&self) -> ErrorRecovery {
        self.recovery
    }

    /// Uncommitted changes of a repository. A failing `git status` yields an
    /// empty list; a failing `git diff --stat` leaves every delta at zero.
    pub async fn status_files(
        &mut self,
        repo: &RepoEntry,
        show_untracked: bool,
    ) -> RackResult<Vec<StatusRecord>> {
        let key = StatusKey {
            path: repo.path.clone(),
            show_untracked,
        };
        if let Some(records) = self.status_cache.get(&key) {
            return Ok(records.clone());
        }

        if self.verbosity.is_informative() {
            tracing::info!("Checking git status and diff: {}", repo.path.display());
        }

        let porcelain = self
            .scm
            .status_porcelain(&repo.path)
            .await
            .map_err(|e| {
                RackError::scm_error_with_source("git status failed", Some(repo.name.clone()), e)
            });
        let diff_stat = self
            .scm
            .diff_stat(&repo.path)
            .await
            .map_err(|e| {
                RackError::scm_error_with_source("git diff --stat failed", Some(repo.name.clone()), e)
            });

        let records = match porcelain {
            Ok(porcelain) => {
                let diff_stat = self.recovery.recover_or(diff_stat, String::new())?;
                self.status_parser.parse(&porcelain, &diff_stat, show_untracked)?
            }
            Err(e) => {
                self.recovery.recover(e)?;
                Vec::new()
            }
        };

        self.status_cache.insert(key, records.clone());
        Ok(records)
    }

    /// Uncommitted diff of a repository, empty when `git diff` fails
    pub async fn diff(&mut self, repo: &RepoEntry) -> RackResult<RepoDiff> {
        if let Some(diff) = self.diff_cache.get(&repo.path) {
            return Ok(diff.clone());
        }

        let output = self
            .scm
            .diff(&repo.path)
            .await
            .map_err(|e| {
                RackError::scm_error_with_source("git diff failed", Some(repo.name.clone()), e)
            });
        let diff = match output {
            Ok(output) => self.diff_parser.parse(&output),
            Err(e) => {
                self.recovery.recover(e)?;
                RepoDiff::new()
            }
        };

        self.diff_cache.insert(repo.path.clone(), diff.clone());
        Ok(diff)
    }

    /// Remote names of a repository, empty when `git remote` fails
    pub async fn remotes(&mut self, repo: &RepoEntry) -> RackResult<Vec<String>> {
        if let Some(remotes) = self.remote_cache.get(&repo.path) {
            return Ok(remotes.clone());
        }

        let remotes = self
            .scm
            .remotes(&repo.path)
            .await
            .map_err(|e| {
                RackError::scm_error_with_source("git remote failed", Some(repo.name.clone()), e)
            });
        let remotes = self.recovery.recover_or(remotes, Vec::new())?;

        self.remote_cache.insert(repo.path.clone(), remotes.clone());
        Ok(remotes)
    }

    /// Drop every cached result for the repository at `path`
    pub fn invalidate(&mut self, path: &Path) {
        self.status_cache.retain(|key, _| key.path != path);
        self.diff_cache.remove(path);
        self.remote_cache.remove(path);
    }
}
