use serde::Serialize;

use crate::application::services::repo_queries::RepoQueryService;
use crate::common::error::RackError;
use crate::common::result::RackResult;
use crate::domain::entities::repo_entry::RepoEntry;
use crate::infrastructure::filesystem::repo_enumerator::RepositoryEnumerator;

/// 一覧表示の設定
#[derive(Debug, Clone, Default)]
pub struct ListRepositoriesConfig {
    /// 変更ファイル数を表示するか
    pub show_status: bool,

    /// 未追跡ファイルも数えるか
    pub show_untracked: bool,

    /// リモート名を表示するか
    pub show_remotes: bool,

    /// リポジトリでないディレクトリも含めるか
    pub include_non_repos: bool,

    /// リポジトリでないディレクトリのみを表示するか
    pub only_non_repos: bool,
}

/// 一覧の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    /// ディレクトリ名
    pub name: String,

    /// 変更ファイル数（`show_status` 指定時のみ）
    pub changes: Option<usize>,

    /// リモート名（`show_remotes` 指定時のみ）
    pub remotes: Option<Vec<String>>,

    /// リポジトリかどうか
    pub is_repository: bool,
}

/// 一覧の結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListResult {
    pub rows: Vec<ListRow>,
}

/// リポジトリ一覧ユースケース
pub struct ListRepositoriesUseCase {
    config: ListRepositoriesConfig,
}

impl ListRepositoriesUseCase {
    pub fn new(config: ListRepositoriesConfig) -> Self {
        Self { config }
    }

    /// フラグの組み合わせを検証
    pub fn validate(&self) -> RackResult<()> {
        if self.config.only_non_repos && !self.config.include_non_repos {
            return Err(RackError::invalid_arguments(
                "--only-non-repos requires --non-repos",
            ));
        }
        if self.config.only_non_repos && self.config.show_status {
            return Err(RackError::invalid_arguments(
                "Cannot show status of non-repositories",
            ));
        }
        Ok(())
    }

    /// 一覧を作成
    pub async fn execute(
        &self,
        repos: &[RepoEntry],
        enumerator: &RepositoryEnumerator,
        queries: &mut RepoQueryService,
    ) -> RackResult<ListResult> {
        self.validate()?;

        let mut entries: Vec<RepoEntry> = if self.config.only_non_repos {
            Vec::new()
        } else {
            repos.to_vec()
        };
        if self.config.include_non_repos {
            entries.extend(enumerator.non_repositories()?);
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut rows = Vec::with_capacity(entries.len());
        for entry in entries {
            rows.push(self.build_row(entry, queries).await?);
        }

        Ok(ListResult { rows })
    }

    async fn build_row(
        &self,
        entry: RepoEntry,
        queries: &mut RepoQueryService,
    ) -> RackResult<ListRow> {
        if !entry.is_repository {
            return Ok(ListRow {
                name: entry.name,
                changes: None,
                remotes: None,
                is_repository: false,
            });
        }

        let changes = if self.config.show_status {
            Some(queries.status_files(&entry, self.config.show_untracked).await?.len())
        } else {
            None
        };
        let remotes = if self.config.show_remotes {
            Some(queries.remotes(&entry).await?)
        } else {
            None
        };

        Ok(ListRow {
            name: entry.name,
            changes,
            remotes,
            is_repository: true,
        })
    }
}
