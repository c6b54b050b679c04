use serde::{Deserialize, Serialize};

/// `.rack.yaml` 設定ファイルの構造
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackConfig {
    /// 操作対象のリポジトリ（作業ディレクトリからの相対名）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repos: Option<Vec<String>>,
}

impl RackConfig {
    /// 空の設定を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定ファイルで明示されたリポジトリ
    pub fn configured_repos(&self) -> Option<&[String]> {
        self.repos.as_deref()
    }
}
