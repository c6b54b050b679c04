use crate::application::services::repo_queries::RepoQueryService;
use crate::common::error::RackError;
use crate::common::result::RackResult;
use crate::domain::entities::repo_entry::RepoEntry;
use crate::domain::value_objects::RepoAction;

/// 一括操作の設定
#[derive(Debug, Clone)]
pub struct BatchOperationConfig {
    /// 実行する操作
    pub action: RepoAction,
}

/// 単一リポジトリへの操作結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub repo: String,

    /// 失敗した場合のエラーメッセージ
    pub error: Option<String>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 一括操作の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchResult {
    pub fn failed(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// pull / push / reset を選択された全リポジトリに順に適用するユースケース
pub struct BatchOperationUseCase {
    config: BatchOperationConfig,
}

impl BatchOperationUseCase {
    pub fn new(config: BatchOperationConfig) -> Self {
        Self { config }
    }

    /// 操作を実行する。`on_start` は各リポジトリの操作前に呼ばれる
    pub async fn execute<F>(
        &self,
        repos: &[RepoEntry],
        queries: &mut RepoQueryService,
        mut on_start: F,
    ) -> RackResult<BatchResult>
    where
        F: FnMut(RepoAction, &RepoEntry),
    {
        let scm = queries.scm();
        let recovery = queries.recovery();
        let action = self.config.action;
        let mut result = BatchResult::default();

        for repo in repos {
            on_start(action, repo);

            let outcome = match action {
                RepoAction::Pull => scm.pull(&repo.path).await,
                RepoAction::Push => scm.push(&repo.path).await,
                RepoAction::Reset => scm.reset_hard(&repo.path).await,
            };
            queries.invalidate(&repo.path);

            let error = match outcome {
                Ok(()) => {
                    tracing::debug!(repo = %repo.name, %action, "done");
                    None
                }
                Err(e) => {
                    let message = e.to_string();
                    recovery.recover(RackError::scm_error_with_source(
                        format!("git {action} failed"),
                        Some(repo.name.clone()),
                        e,
                    ))?;
                    Some(message)
                }
            };

            result.outcomes.push(BatchOutcome {
                repo: repo.name.clone(),
                error,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::recovery::ErrorRecovery;
    use crate::domain::value_objects::Verbosity;
    use crate::infrastructure::scm::{MockScmOperations, ScmError};
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use std::sync::Arc;

    fn repos() -> Vec<RepoEntry> {
        vec![
            RepoEntry::new("api", "/work/api", true),
            RepoEntry::new("web", "/work/web", true),
        ]
    }

    fn queries(mock: MockScmOperations, debug: bool) -> RepoQueryService {
        RepoQueryService::new(Arc::new(mock), ErrorRecovery::new(debug), Verbosity::Concise)
    }

    #[tokio::test]
    async fn test_pull_runs_on_every_repository_in_order() {
        let mut mock = MockScmOperations::new();
        mock.expect_pull().times(2).returning(|_| Ok(()));

        let mut started = Vec::new();
        let result = BatchOperationUseCase::new(BatchOperationConfig {
            action: RepoAction::Pull,
        })
        .execute(&repos(), &mut queries(mock, false), |action, repo| {
            started.push(format!("{} {}", action.progress_label(), repo.name))
        })
        .await
        .unwrap();

        assert_eq!(started, vec!["Pulling api", "Pulling web"]);
        assert!(!result.has_failures());
    }

    #[tokio::test]
    async fn test_failure_is_recorded_and_execution_continues() {
        let mut mock = MockScmOperations::new();
        mock.expect_push().times(2).returning(|path: &Path| {
            if path.ends_with("api") {
                Err(ScmError::command_failed("git push", 1, "rejected"))
            } else {
                Ok(())
            }
        });

        let result = BatchOperationUseCase::new(BatchOperationConfig {
            action: RepoAction::Push,
        })
        .execute(&repos(), &mut queries(mock, false), |_, _| {})
        .await
        .unwrap();

        assert!(result.has_failures());
        let failed: Vec<_> = result.failed().map(|o| o.repo.as_str()).collect();
        assert_eq!(failed, vec!["api"]);
        assert!(result.outcomes[1].is_success());
    }

    #[tokio::test]
    async fn test_failure_halts_in_debug_mode() {
        let mut mock = MockScmOperations::new();
        mock.expect_reset_hard()
            .times(1)
            .returning(|_| Err(ScmError::command_failed("git reset --hard HEAD", 128, "fatal")));

        let result = BatchOperationUseCase::new(BatchOperationConfig {
            action: RepoAction::Reset,
        })
        .execute(&repos(), &mut queries(mock, true), |_, _| {})
        .await;

        assert!(matches!(result, Err(RackError::ScmError { .. })));
    }

    #[tokio::test]
    async fn test_reset_invalidates_cached_status() {
        let mut mock = MockScmOperations::new();
        let mut calls = 0;
        mock.expect_status_porcelain().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(" M a.rs\n".to_string())
            } else {
                Ok(String::new())
            }
        });
        mock.expect_diff_stat().returning(|_| Ok(String::new()));
        mock.expect_reset_hard().returning(|_| Ok(()));

        let repo = RepoEntry::new("api", "/work/api", true);
        let mut queries = queries(mock, false);
        assert_eq!(queries.status_files(&repo, false).await.unwrap().len(), 1);

        BatchOperationUseCase::new(BatchOperationConfig {
            action: RepoAction::Reset,
        })
        .execute(std::slice::from_ref(&repo), &mut queries, |_, _| {})
        .await
        .unwrap();

        assert!(queries.status_files(&repo, false).await.unwrap().is_empty());
    }
}
