use serde::{Serialize, Serializer};
use std::fmt;

/// Per-file change size taken from `git diff --stat`.
///
/// Text files report the number of changed lines, binary files the size
/// difference in bytes. `Unknown` marks a stat line that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDelta {
    Changed(i64),
    Unknown,
}

impl LineDelta {
    pub fn zero() -> Self {
        LineDelta::Changed(0)
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            LineDelta::Changed(n) => Some(*n),
            LineDelta::Unknown => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, LineDelta::Changed(0))
    }
}

impl fmt::Display for LineDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineDelta::Changed(n) => write!(f, "{}", n),
            LineDelta::Unknown => write!(f, "?"),
        }
    }
}

/// Serialized as a number, or `null` when unknown.
impl Serialize for LineDelta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_delta_accessors() {
        assert_eq!(LineDelta::Changed(12).value(), Some(12));
        assert_eq!(LineDelta::Unknown.value(), None);
        assert!(LineDelta::zero().is_zero());
        assert!(!LineDelta::Unknown.is_zero());
    }

    #[test]
    fn test_line_delta_serialization() {
        assert_eq!(serde_json::to_string(&LineDelta::Changed(-3)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&LineDelta::Unknown).unwrap(), "null");
    }
}
