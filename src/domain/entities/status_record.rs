use serde::Serialize;

use crate::domain::value_objects::{LineDelta, StatusCode};

/// 未コミットの変更を持つファイル1件分のステータス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    /// ステータスコード（M, A, D, R, U, ...）
    pub code: StatusCode,

    /// リポジトリルートからの相対パス（リネームの場合は新しいパス）
    pub path: String,

    /// リネーム・コピー元のパス
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed_from: Option<String>,

    /// diff-statから得た変更量
    pub line_delta: LineDelta,
}

impl StatusRecord {
    /// 新しいStatusRecordを作成（変更量は0）
    pub fn new(code: StatusCode, path: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            renamed_from: None,
            line_delta: LineDelta::zero(),
        }
    }

    /// リネーム元を設定
    pub fn with_renamed_from(mut self, from: impl Into<String>) -> Self {
        self.renamed_from = Some(from.into());
        self
    }

    /// 変更量を設定
    pub fn with_line_delta(mut self, delta: LineDelta) -> Self {
        self.line_delta = delta;
        self
    }
}
