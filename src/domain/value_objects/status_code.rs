use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Change status of a single path, as reported by `git status --porcelain`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
    /// Merge conflict (`UU`, `AA`, `DD`, ...)
    Unmerged,
    /// Porcelain `??`
    Untracked,
    /// Porcelain `!!`
    Ignored,
}

impl StatusCode {
    /// Single-letter code used in listings. Untracked files share `U` with
    /// unmerged ones.
    pub fn letter(&self) -> char {
        match self {
            StatusCode::Modified => 'M',
            StatusCode::Added => 'A',
            StatusCode::Deleted => 'D',
            StatusCode::Renamed => 'R',
            StatusCode::Copied => 'C',
            StatusCode::TypeChanged => 'T',
            StatusCode::Unmerged => 'U',
            StatusCode::Untracked => 'U',
            StatusCode::Ignored => '!',
        }
    }

    pub fn is_untracked(&self) -> bool {
        matches!(self, StatusCode::Untracked)
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(StatusCode::Modified),
            'A' => Some(StatusCode::Added),
            'D' => Some(StatusCode::Deleted),
            'R' => Some(StatusCode::Renamed),
            'C' => Some(StatusCode::Copied),
            'T' => Some(StatusCode::TypeChanged),
            'U' => Some(StatusCode::Unmerged),
            _ => None,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusCodeError {
    #[error("Unknown status code: {0:?}")]
    Unknown(String),
}

/// Parses the XY field of a porcelain line, with surrounding blanks already
/// stripped (`" M"` arrives as `"M"`).
impl FromStr for StatusCode {
    type Err = StatusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "??" => return Ok(StatusCode::Untracked),
            "!!" => return Ok(StatusCode::Ignored),
            "AA" | "DD" => return Ok(StatusCode::Unmerged),
            _ => {}
        }

        if s.is_empty() || s.chars().count() > 2 {
            return Err(StatusCodeError::Unknown(s.to_string()));
        }
        if s.contains('U') {
            return Ok(StatusCode::Unmerged);
        }

        let mut letters = s.chars().filter(|c| *c != ' ');
        letters
            .next()
            .and_then(StatusCode::from_letter)
            .ok_or_else(|| StatusCodeError::Unknown(s.to_string()))
    }
}
