//! # rack - Side-by-side repository manager
//!
//! `rack` manages a directory holding several git repositories next to each
//! other. It lists them, reports uncommitted changes, shows diffs and runs
//! pull, push or reset across all of them, one repository at a time.
//!
//! ## Features
//!
//! - **Listing**: Repositories (and optionally plain directories) with change counts and remotes
//! - **Status**: Uncommitted files per repository with the size of each change
//! - **Diff**: Hunks and changed lines grouped by file
//! - **Batch Operations**: `git pull`, `git push` and `git reset --hard HEAD` on every selected repository
//! - **Selection**: Restrict to named repositories, to repositories with changes, or to the next one with changes
//!
//! ## Quick Start
//!
//! ```bash
//! rack list -s          # change counts per repository
//! rack -C status        # only repositories with changes
//! rack -r api,web pull  # pull two repositories
//! rack -n diff          # diff of the first repository with changes
//! ```
//!
//! An optional `.rack.yaml` in the working directory fixes the set of
//! repositories instead of scanning for them:
//!
//! ```yaml
//! repos:
//!   - frontend
//!   - backend
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Status records, diffs and value objects
//! - [`application`]: Output parsers, the cached query service and use cases
//! - [`infrastructure`]: The `git` subprocess adapter, directory scanning and config loading
//! - [`presentation`]: CLI interface and rendering
//! - [`common`]: Shared error handling and the recovery policy
//!
//! ## Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rack::application::services::RepoQueryService;
//! use rack::application::use_cases::{StatusCheckConfig, StatusCheckUseCase};
//! use rack::common::ErrorRecovery;
//! use rack::domain::value_objects::Verbosity;
//! use rack::infrastructure::{GitScm, RepositoryEnumerator};
//!
//! # async fn example() -> rack::Result<()> {
//! let repos = RepositoryEnumerator::new("/home/me/projects").repositories()?;
//! let mut queries = RepoQueryService::new(
//!     Arc::new(GitScm::new()),
//!     ErrorRecovery::default(),
//!     Verbosity::Concise,
//! );
//!
//! let status = StatusCheckUseCase::new(StatusCheckConfig::default())
//!     .execute(&repos, &mut queries)
//!     .await?;
//!
//! for repo in &status.repositories {
//!     println!("{}: {} changed files", repo.repo, repo.files.len());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::RackError;
pub use crate::common::result::RackResult as Result;
