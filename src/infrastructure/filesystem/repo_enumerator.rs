use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::common::error::RackError;
use crate::common::result::RackResult;
use crate::domain::entities::repo_entry::RepoEntry;
use crate::infrastructure::scm::GIT_METADATA_DIR;

/// Lists the immediate subdirectories of a working directory and sorts them
/// into repositories and plain directories by probing for `.git`.
#[derive(Debug, Clone)]
pub struct RepositoryEnumerator {
    root: PathBuf,
}

impl RepositoryEnumerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Whether `path` holds git metadata (directory or worktree file)
    pub fn is_repository(&self, path: &Path) -> bool {
        path.join(GIT_METADATA_DIR).exists()
    }

    /// All immediate subdirectories, sorted by name
    pub fn entries(&self) -> RackResult<Vec<RepoEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf);
                match e.into_io_error() {
                    Some(io) => RackError::filesystem_error_with_source(
                        "Failed to list working directory",
                        path,
                        io,
                    ),
                    None => RackError::filesystem_error("Failed to list working directory", path),
                }
            })?;

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let is_repository = self.is_repository(path);
            tracing::trace!("{} repository={}", name, is_repository);
            entries.push(RepoEntry::new(name, path, is_repository));
        }

        Ok(entries)
    }

    /// Subdirectories that contain the metadata marker
    pub fn repositories(&self) -> RackResult<Vec<RepoEntry>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|e| e.is_repository)
            .collect())
    }

    /// Subdirectories that lack the metadata marker
    pub fn non_repositories(&self) -> RackResult<Vec<RepoEntry>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|e| !e.is_repository)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn names(entries: &[RepoEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn setup() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        std::fs::create_dir_all(root.join("zeta").join(".git")).unwrap();
        std::fs::create_dir_all(root.join("alpha").join(".git")).unwrap();
        std::fs::create_dir_all(root.join("notes")).unwrap();
        // worktrees and submodules carry a .git file instead of a directory
        std::fs::create_dir_all(root.join("worktree")).unwrap();
        std::fs::write(root.join("worktree").join(".git"), "gitdir: ../alpha/.git\n").unwrap();
        std::fs::write(root.join("README.md"), "# not a directory\n").unwrap();

        temp_dir
    }

    #[test]
    fn test_repositories_are_sorted_and_filtered() {
        let temp_dir = setup();
        let enumerator = RepositoryEnumerator::new(temp_dir.path());

        let repos = enumerator.repositories().unwrap();
        assert_eq!(names(&repos), vec!["alpha", "worktree", "zeta"]);
        assert_eq!(repos[0].path, temp_dir.path().join("alpha"));
    }

    #[test]
    fn test_non_repositories() {
        let temp_dir = setup();
        let enumerator = RepositoryEnumerator::new(temp_dir.path());

        let plain = enumerator.non_repositories().unwrap();
        assert_eq!(names(&plain), vec!["notes"]);
        assert!(!plain[0].is_repository);
    }

    #[test]
    fn test_entries_skip_files() {
        let temp_dir = setup();
        let enumerator = RepositoryEnumerator::new(temp_dir.path());

        let all = enumerator.entries().unwrap();
        assert_eq!(names(&all), vec!["alpha", "notes", "worktree", "zeta"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let enumerator = RepositoryEnumerator::new(temp_dir.path().join("missing"));
        assert!(matches!(
            enumerator.entries(),
            Err(RackError::FileSystemError { .. })
        ));
    }
}
