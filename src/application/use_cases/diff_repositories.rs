use crate::application::services::repo_queries::RepoQueryService;
use crate::common::result::RackResult;
use crate::domain::entities::file_diff::RepoDiff;
use crate::domain::entities::repo_entry::RepoEntry;

/// 単一リポジトリの差分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDiff {
    pub repo: String,
    pub diff: RepoDiff,
}

/// 差分表示の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// 差分のあるリポジトリ
    pub repositories: Vec<RepositoryDiff>,

    /// 対象が1つだけで、変更がなかった場合のリポジトリ名
    pub unchanged_single: Option<String>,
}

/// 差分表示ユースケース
#[derive(Debug, Default)]
pub struct DiffRepositoriesUseCase;

impl DiffRepositoriesUseCase {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        repos: &[RepoEntry],
        queries: &mut RepoQueryService,
    ) -> RackResult<DiffResult> {
        let mut result = DiffResult::default();

        for repo in repos {
            let diff = queries.diff(repo).await?;
            if diff.is_empty() {
                continue;
            }
            result.repositories.push(RepositoryDiff {
                repo: repo.name.clone(),
                diff,
            });
        }

        if let [only] = repos {
            if result.repositories.is_empty() {
                result.unchanged_single = Some(only.name.clone());
            }
        }

        Ok(result)
    }
}
