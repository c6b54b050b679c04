use serde::Serialize;

use crate::application::services::repo_queries::RepoQueryService;
use crate::common::result::RackResult;
use crate::domain::entities::repo_entry::RepoEntry;
use crate::domain::entities::status_record::StatusRecord;

/// ステータス確認の設定
#[derive(Debug, Clone, Default)]
pub struct StatusCheckConfig {
    /// 未追跡ファイルも表示するか
    pub show_untracked: bool,
}

/// 単一リポジトリのステータス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    /// リポジトリ名
    pub repo: String,

    /// 未コミットの変更
    pub files: Vec<StatusRecord>,
}

/// ステータス確認の結果（変更のあるリポジトリのみ）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusResult {
    pub repositories: Vec<RepositoryStatus>,
}

/// ステータス確認ユースケース
pub struct StatusCheckUseCase {
    config: StatusCheckConfig,
}

impl StatusCheckUseCase {
    pub fn new(config: StatusCheckConfig) -> Self {
        Self { config }
    }

    /// 選択されたリポジトリのステータスを収集
    pub async fn execute(
        &self,
        repos: &[RepoEntry],
        queries: &mut RepoQueryService,
    ) -> RackResult<StatusResult> {
        let mut result = StatusResult::default();

        for repo in repos {
            let files = queries.status_files(repo, self.config.show_untracked).await?;
            if files.is_empty() {
                continue;
            }
            result.repositories.push(RepositoryStatus {
                repo: repo.name.clone(),
                files,
            });
        }

        Ok(result)
    }
}
