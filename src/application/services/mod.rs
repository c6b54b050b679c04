pub mod diff_parser;
pub mod repo_queries;
pub mod status_parser;

pub use diff_parser::DiffParser;
pub use repo_queries::RepoQueryService;
pub use status_parser::{DiffStat, StatusParser};
