use std::path::PathBuf;

use crate::application::services::repo_queries::RepoQueryService;
use crate::common::error::RackError;
use crate::common::result::RackResult;
use crate::domain::entities::repo_entry::RepoEntry;
use crate::infrastructure::filesystem::repo_enumerator::RepositoryEnumerator;

/// 対象リポジトリ選択の設定
#[derive(Debug, Clone, Default)]
pub struct SelectRepositoriesConfig {
    /// 作業ディレクトリ
    pub working_dir: PathBuf,

    /// `-r` で明示されたリポジトリ
    pub explicit_repos: Vec<String>,

    /// `.rack.yaml` に記載されたリポジトリ
    pub configured_repos: Option<Vec<String>>,

    /// 変更のあるリポジトリのみを対象にするか
    pub changed_only: bool,

    /// 変更のある最初のリポジトリのみを対象にするか
    pub next_only: bool,

    /// 未追跡ファイルも変更として扱うか
    pub show_untracked: bool,
}

/// 操作対象リポジトリを決定するユースケース
pub struct SelectRepositoriesUseCase {
    config: SelectRepositoriesConfig,
}

impl SelectRepositoriesUseCase {
    pub fn new(config: SelectRepositoriesConfig) -> Self {
        Self { config }
    }

    /// 引数の組み合わせを検証（リポジトリには触れない）
    pub fn validate(&self) -> RackResult<()> {
        if self.config.next_only && !self.config.explicit_repos.is_empty() {
            return Err(RackError::invalid_arguments(
                "Cannot specify both --next and --repo",
            ));
        }
        Ok(())
    }

    /// 対象リポジトリを選択
    pub async fn execute(
        &self,
        enumerator: &RepositoryEnumerator,
        queries: &mut RepoQueryService,
    ) -> RackResult<Vec<RepoEntry>> {
        self.validate()?;

        let mut repos = self.base_repositories(enumerator)?;

        if self.config.changed_only {
            let mut changed = Vec::new();
            for repo in repos {
                if !queries
                    .status_files(&repo, self.config.show_untracked)
                    .await?
                    .is_empty()
                {
                    changed.push(repo);
                }
            }
            repos = changed;
        }

        if self.config.next_only {
            let mut next = None;
            for repo in repos {
                if !queries
                    .status_files(&repo, self.config.show_untracked)
                    .await?
                    .is_empty()
                {
                    next = Some(repo);
                    break;
                }
            }
            if next.is_none() {
                tracing::info!("no repository has uncommitted changes");
            }
            repos = next.into_iter().collect();
        }

        Ok(repos)
    }

    /// `-r`、設定ファイル、ディレクトリ探索の順で候補を決定
    fn base_repositories(&self, enumerator: &RepositoryEnumerator) -> RackResult<Vec<RepoEntry>> {
        let working_dir = &self.config.working_dir;

        if !self.config.explicit_repos.is_empty() {
            return Ok(self
                .config
                .explicit_repos
                .iter()
                .map(|name| RepoEntry::named(working_dir, name.as_str()))
                .collect());
        }

        if let Some(configured) = &self.config.configured_repos {
            return Ok(configured
                .iter()
                .map(|name| RepoEntry::named(working_dir, name.as_str()))
                .collect());
        }

        enumerator.repositories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::recovery::ErrorRecovery;
    use crate::domain::value_objects::Verbosity;
    use crate::infrastructure::scm::MockScmOperations;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn workspace() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for name in ["alpha", "beta", "gamma"] {
            std::fs::create_dir_all(temp_dir.path().join(name).join(".git")).unwrap();
        }
        std::fs::create_dir_all(temp_dir.path().join("scratch")).unwrap();
        temp_dir
    }

    /// beta and gamma have changes, alpha is clean
    fn dirty_mock() -> MockScmOperations {
        let mut mock = MockScmOperations::new();
        mock.expect_status_porcelain().returning(|path: &Path| {
            if path.ends_with("alpha") {
                Ok(String::new())
            } else {
                Ok(" M src/lib.rs\n".to_string())
            }
        });
        mock.expect_diff_stat().returning(|_| Ok(String::new()));
        mock
    }

    fn queries(mock: MockScmOperations) -> RepoQueryService {
        RepoQueryService::new(Arc::new(mock), ErrorRecovery::default(), Verbosity::Concise)
    }

    fn names(repos: &[RepoEntry]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_enumerates_repositories_by_default() {
        let temp_dir = workspace();
        let config = SelectRepositoriesConfig {
            working_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        let repos = SelectRepositoriesUseCase::new(config)
            .execute(
                &RepositoryEnumerator::new(temp_dir.path()),
                &mut queries(MockScmOperations::new()),
            )
            .await
            .unwrap();
        assert_eq!(names(&repos), vec!["alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_explicit_repos_override_config_and_enumeration() {
        let temp_dir = workspace();
        let config = SelectRepositoriesConfig {
            working_dir: temp_dir.path().to_path_buf(),
            explicit_repos: vec!["scratch".to_string()],
            configured_repos: Some(vec!["beta".to_string()]),
            ..Default::default()
        };

        let repos = SelectRepositoriesUseCase::new(config)
            .execute(
                &RepositoryEnumerator::new(temp_dir.path()),
                &mut queries(MockScmOperations::new()),
            )
            .await
            .unwrap();
        assert_eq!(names(&repos), vec!["scratch"]);
        assert_eq!(repos[0].path, temp_dir.path().join("scratch"));
    }

    #[tokio::test]
    async fn test_configured_repos_override_enumeration() {
        let temp_dir = workspace();
        let config = SelectRepositoriesConfig {
            working_dir: temp_dir.path().to_path_buf(),
            configured_repos: Some(vec!["gamma".to_string(), "alpha".to_string()]),
            ..Default::default()
        };

        let repos = SelectRepositoriesUseCase::new(config)
            .execute(
                &RepositoryEnumerator::new(temp_dir.path()),
                &mut queries(MockScmOperations::new()),
            )
            .await
            .unwrap();
        assert_eq!(names(&repos), vec!["gamma", "alpha"]);
    }

    #[tokio::test]
    async fn test_changed_only() {
        let temp_dir = workspace();
        let config = SelectRepositoriesConfig {
            working_dir: temp_dir.path().to_path_buf(),
            changed_only: true,
            ..Default::default()
        };

        let repos = SelectRepositoriesUseCase::new(config)
            .execute(
                &RepositoryEnumerator::new(temp_dir.path()),
                &mut queries(dirty_mock()),
            )
            .await
            .unwrap();
        assert_eq!(names(&repos), vec!["beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_next_only_picks_first_changed_repository() {
        let temp_dir = workspace();
        let config = SelectRepositoriesConfig {
            working_dir: temp_dir.path().to_path_buf(),
            next_only: true,
            ..Default::default()
        };

        let repos = SelectRepositoriesUseCase::new(config)
            .execute(
                &RepositoryEnumerator::new(temp_dir.path()),
                &mut queries(dirty_mock()),
            )
            .await
            .unwrap();
        assert_eq!(names(&repos), vec!["beta"]);
    }

    #[tokio::test]
    async fn test_next_only_without_changes_selects_nothing() {
        let temp_dir = workspace();
        let mut mock = MockScmOperations::new();
        mock.expect_status_porcelain().returning(|_| Ok(String::new()));
        mock.expect_diff_stat().returning(|_| Ok(String::new()));

        let config = SelectRepositoriesConfig {
            working_dir: temp_dir.path().to_path_buf(),
            next_only: true,
            ..Default::default()
        };
        let repos = SelectRepositoriesUseCase::new(config)
            .execute(&RepositoryEnumerator::new(temp_dir.path()), &mut queries(mock))
            .await
            .unwrap();
        assert!(repos.is_empty());
    }

    #[test]
    fn test_next_with_repo_is_rejected() {
        let config = SelectRepositoriesConfig {
            explicit_repos: vec!["alpha".to_string()],
            next_only: true,
            ..Default::default()
        };
        let result = SelectRepositoriesUseCase::new(config).validate();
        assert!(matches!(result, Err(RackError::InvalidArguments { .. })));
    }
}
