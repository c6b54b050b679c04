pub mod file_diff;
pub mod rack_config;
pub mod repo_entry;
pub mod status_record;

pub use file_diff::{DiffEntry, DiffMarker, FileDiff, RepoDiff};
pub use rack_config::RackConfig;
pub use repo_entry::RepoEntry;
pub use status_record::StatusRecord;
