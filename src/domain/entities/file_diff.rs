use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// 差分行の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMarker {
    /// 追加行
    Added,
    /// 削除行
    Removed,
    /// ハンクヘッダ
    Hunk,
}

impl DiffMarker {
    pub fn symbol(&self) -> char {
        match self {
            DiffMarker::Added => '+',
            DiffMarker::Removed => '-',
            DiffMarker::Hunk => '@',
        }
    }
}

impl fmt::Display for DiffMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for DiffMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 差分の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    pub marker: DiffMarker,
    pub text: String,
}

impl DiffEntry {
    pub fn new(marker: DiffMarker, text: impl Into<String>) -> Self {
        Self {
            marker,
            text: text.into(),
        }
    }
}

/// 1ファイル分の差分（入力順を保持）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub path: String,
    pub entries: Vec<DiffEntry>,
}

impl FileDiff {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }
}

/// リポジトリ全体の差分。ファイルは差分に現れた順に並ぶ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepoDiff {
    files: Vec<FileDiff>,
    /// パスから `files` の位置への索引
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl RepoDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルセクションを開始する。同じパスが再度現れた場合は既存のセクションに追記する
    pub fn start_file(&mut self, path: &str) -> &mut FileDiff {
        let index = match self.index.get(path) {
            Some(&index) => index,
            None => {
                self.files.push(FileDiff::new(path));
                let index = self.files.len() - 1;
                self.index.insert(path.to_string(), index);
                index
            }
        };
        &mut self.files[index]
    }

    pub fn get(&self, path: &str) -> Option<&FileDiff> {
        self.index.get(path).map(|&index| &self.files[index])
    }

    pub fn files(&self) -> &[FileDiff] {
        &self.files
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_file_preserves_order() {
        let mut diff = RepoDiff::new();
        diff.start_file("b.rs");
        diff.start_file("a.rs");

        assert_eq!(diff.paths().collect::<Vec<_>>(), vec!["b.rs", "a.rs"]);
        assert_eq!(diff.len(), 2);
    }

    #[test]
    fn test_start_file_reuses_existing_section() {
        let mut diff = RepoDiff::new();
        diff.start_file("a.rs")
            .entries
            .push(DiffEntry::new(DiffMarker::Added, "one"));
        diff.start_file("b.rs");
        diff.start_file("a.rs")
            .entries
            .push(DiffEntry::new(DiffMarker::Removed, "two"));

        assert_eq!(diff.len(), 2);
        assert_eq!(diff.get("a.rs").unwrap().entries.len(), 2);
        assert_eq!(diff.paths().collect::<Vec<_>>(), vec!["a.rs", "b.rs"]);
    }

    #[test]
    fn test_many_sections_keep_order_and_lookup() {
        let mut diff = RepoDiff::new();
        for i in (0..500).rev() {
            diff.start_file(&format!("file{i}.rs"))
                .entries
                .push(DiffEntry::new(DiffMarker::Added, format!("line {i}")));
        }
        diff.start_file("file250.rs")
            .entries
            .push(DiffEntry::new(DiffMarker::Removed, "again"));

        assert_eq!(diff.len(), 500);
        assert_eq!(diff.files()[0].path, "file499.rs");
        assert_eq!(diff.files()[499].path, "file0.rs");
        assert_eq!(diff.get("file250.rs").unwrap().entries.len(), 2);
        assert!(diff.get("file500.rs").is_none());
    }

    #[test]
    fn test_serializes_as_file_list() {
        let mut diff = RepoDiff::new();
        diff.start_file("a.rs")
            .entries
            .push(DiffEntry::new(DiffMarker::Added, "x"));

        assert_eq!(
            serde_json::to_string(&diff).unwrap(),
            r#"[{"path":"a.rs","entries":[{"marker":"+","text":"x"}]}]"#
        );
    }

    #[test]
    fn test_marker_symbols() {
        assert_eq!(DiffMarker::Added.to_string(), "+");
        assert_eq!(DiffMarker::Removed.to_string(), "-");
        assert_eq!(DiffMarker::Hunk.to_string(), "@");
    }
}
