pub mod line_delta;
pub mod repo_action;
pub mod status_code;
pub mod verbosity;

pub use line_delta::LineDelta;
pub use repo_action::RepoAction;
pub use status_code::{StatusCode, StatusCodeError};
pub use verbosity::Verbosity;
