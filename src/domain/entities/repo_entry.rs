use std::path::{Path, PathBuf};

/// 作業ディレクトリ直下のディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    /// 作業ディレクトリからの名前
    pub name: String,

    /// 絶対パス
    pub path: PathBuf,

    /// バージョン管理メタデータを持つか
    pub is_repository: bool,
}

impl RepoEntry {
    /// 新しいRepoEntryインスタンスを作成
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, is_repository: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_repository,
        }
    }

    /// 作業ディレクトリと名前からエントリを作成（`-r` や設定ファイルで指定された場合）
    pub fn named(working_dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = working_dir.join(&name);
        Self {
            name,
            path,
            is_repository: true,
        }
    }
}
