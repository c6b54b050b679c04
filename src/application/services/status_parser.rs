//! Parsing of `git status --porcelain` and `git diff --stat` output.

use std::collections::HashMap;

use crate::common::error::RackError;
use crate::common::recovery::ErrorRecovery;
use crate::common::result::RackResult;
use crate::domain::entities::status_record::StatusRecord;
use crate::domain::value_objects::{LineDelta, StatusCode, StatusCodeError};

/// Per-path deltas taken from a diff-stat listing
pub type DiffStat = HashMap<String, LineDelta>;

/// Turns status and diff-stat text into [`StatusRecord`]s.
///
/// A line that cannot be parsed is handed to the [`ErrorRecovery`] policy:
/// by default it is logged and skipped (status) or given
/// [`LineDelta::Unknown`] (diff-stat), and the remaining lines still parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusParser {
    recovery: ErrorRecovery,
}

impl StatusParser {
    pub fn new(recovery: ErrorRecovery) -> Self {
        Self { recovery }
    }

    /// Parse both listings and attach each path's delta to its record.
    /// Paths missing from the diff-stat get a delta of zero.
    pub fn parse(
        &self,
        porcelain: &str,
        diff_stat: &str,
        show_untracked: bool,
    ) -> RackResult<Vec<StatusRecord>> {
        let deltas = self.parse_diff_stat(diff_stat)?;
        let records = self
            .parse_porcelain(porcelain, show_untracked)?
            .into_iter()
            .map(|record| {
                let delta = deltas
                    .get(&record.path)
                    .copied()
                    .unwrap_or_else(LineDelta::zero);
                record.with_line_delta(delta)
            })
            .collect();
        Ok(records)
    }

    /// Parse `git status --porcelain` output.
    ///
    /// Untracked entries (`??`) are dropped unless `show_untracked` is set.
    pub fn parse_porcelain(
        &self,
        output: &str,
        show_untracked: bool,
    ) -> RackResult<Vec<StatusRecord>> {
        let mut records = Vec::new();

        for line in output.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_porcelain_line(line) {
                Ok(record) => {
                    if show_untracked || !record.code.is_untracked() {
                        records.push(record);
                    }
                }
                Err(e) => self.recovery.recover(e)?,
            }
        }

        Ok(records)
    }

    /// Parse `git diff --stat` output into per-path deltas.
    ///
    /// Lines without a `|` separator (such as the trailing summary) are
    /// skipped. Binary entries (`Bin <old> -> <new> bytes`) report the size
    /// difference in bytes.
    pub fn parse_diff_stat(&self, output: &str) -> RackResult<DiffStat> {
        let mut deltas = DiffStat::new();

        for line in output.lines() {
            let Some((path, changes)) = line.rsplit_once('|') else {
                continue;
            };
            let path = resolve_stat_path(&unquote_path(path.trim()));

            let delta = match parse_stat_changes(changes) {
                Ok(n) => LineDelta::Changed(n),
                Err(message) => {
                    let error = RackError::parse_error("diff-stat", line, message);
                    if self.recovery.is_debug() {
                        tracing::error!(
                            "Failing diff status output:\n{}\nEND OF DIFF STATUS OUTPUT",
                            output
                        );
                    }
                    self.recovery.recover(error)?;
                    LineDelta::Unknown
                }
            };
            deltas.insert(path, delta);
        }

        Ok(deltas)
    }
}

fn parse_porcelain_line(line: &str) -> RackResult<StatusRecord> {
    let trimmed = line.trim();
    let (code, rest) = trimmed
        .split_once(char::is_whitespace)
        .ok_or_else(|| RackError::parse_error("status", line, "missing path"))?;

    let code: StatusCode = code
        .parse()
        .map_err(|e: StatusCodeError| RackError::parse_error("status", line, e.to_string()))?;

    let path = rest.trim();
    if path.is_empty() {
        return Err(RackError::parse_error("status", line, "missing path"));
    }

    if matches!(code, StatusCode::Renamed | StatusCode::Copied) {
        if let Some((from, to)) = path.split_once(" -> ") {
            return Ok(StatusRecord::new(code, unquote_path(to.trim()))
                .with_renamed_from(unquote_path(from.trim())));
        }
    }

    Ok(StatusRecord::new(code, unquote_path(path)))
}

/// Undo git's C-style quoting of paths with special or non-ASCII bytes,
/// e.g. `"caf\303\251.txt"`. Unquoted paths are returned as is.
fn unquote_path(path: &str) -> String {
    let Some(inner) = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
    else {
        return path.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some('a') => bytes.push(0x07),
            Some('b') => bytes.push(0x08),
            Some('t') => bytes.push(b'\t'),
            Some('n') => bytes.push(b'\n'),
            Some('v') => bytes.push(0x0b),
            Some('f') => bytes.push(0x0c),
            Some('r') => bytes.push(b'\r'),
            Some(d @ '0'..='7') => {
                let mut value = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|n| n.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                bytes.push((value & 0xff) as u8);
            }
            Some(other) => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
            None => bytes.push(b'\\'),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

/// Change count from the part of a stat line after the `|`
fn parse_stat_changes(changes: &str) -> Result<i64, String> {
    let changes = changes.trim();
    let first = changes
        .split_whitespace()
        .next()
        .ok_or_else(|| "missing change count".to_string())?;

    if first.to_lowercase().starts_with("bin") {
        let fields: Vec<&str> = changes.split_whitespace().collect();
        return match fields.as_slice() {
            [_, old, "->", new, _] => {
                let old: i64 = old.parse().map_err(|e| format!("bad old size {old:?}: {e}"))?;
                let new: i64 = new.parse().map_err(|e| format!("bad new size {new:?}: {e}"))?;
                new.checked_sub(old)
                    .ok_or_else(|| format!("size difference overflows: {old} -> {new}"))
            }
            _ => Err(format!("unexpected binary stat {changes:?}")),
        };
    }

    first
        .parse()
        .map_err(|e| format!("bad change count {first:?}: {e}"))
}

/// Rename entries read `old => new` or `dir/{old => new}/file`; keep the
/// destination so it matches the porcelain path.
fn resolve_stat_path(path: &str) -> String {
    if !path.contains(" => ") {
        return path.to_string();
    }

    if let (Some(open), Some(close)) = (path.find('{'), path.rfind('}')) {
        if open < close {
            let inner = &path[open + 1..close];
            if let Some((_, to)) = inner.split_once(" => ") {
                let joined = format!("{}{}{}", &path[..open], to, &path[close + 1..]);
                // "{old => }/f" leaves a doubled separator
                return joined.replace("//", "/");
            }
        }
    }

    path.split_once(" => ")
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| path.to_string())
}
