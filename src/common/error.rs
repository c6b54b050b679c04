use std::path::PathBuf;
use thiserror::Error;

use crate::infrastructure::scm::ScmError;

#[derive(Error, Debug)]
pub enum RackError {
    #[error("SCM operation failed: {message}")]
    ScmError {
        message: String,
        repository: Option<String>,
        #[source]
        source: Option<ScmError>,
    },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to parse {what} line {line:?}: {message}")]
    ParseError {
        what: String,
        line: String,
        message: String,
    },

    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    #[error("Action {action:?} not implemented")]
    NotImplemented { action: String },

    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RackError {
    pub fn scm_error(message: impl Into<String>, repository: Option<String>) -> Self {
        Self::ScmError {
            message: message.into(),
            repository,
            source: None,
        }
    }

    pub fn scm_error_with_source(
        message: impl Into<String>,
        repository: Option<String>,
        source: ScmError,
    ) -> Self {
        Self::ScmError {
            message: message.into(),
            repository,
            source: Some(source),
        }
    }

    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn config_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::ConfigError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            path,
            source: Some(Box::new(source)),
        }
    }

    pub fn parse_error(
        what: impl Into<String>,
        line: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ParseError {
            what: what.into(),
            line: line.into(),
            message: message.into(),
        }
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    pub fn not_implemented(action: impl Into<String>) -> Self {
        Self::NotImplemented {
            action: action.into(),
        }
    }

    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            source: None,
        }
    }
}

impl From<ScmError> for RackError {
    fn from(error: ScmError) -> Self {
        Self::scm_error_with_source("SCM command failed", None, error)
    }
}

impl From<std::io::Error> for RackError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<serde_yaml::Error> for RackError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization_error_with_source("YAML serialization failed", error)
    }
}

impl From<serde_json::Error> for RackError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let error = RackError::parse_error("diff-stat", "a | x", "invalid digit");
        assert_eq!(
            error.to_string(),
            "Failed to parse diff-stat line \"a | x\": invalid digit"
        );
    }

    #[test]
    fn test_invalid_arguments_message() {
        let error = RackError::invalid_arguments("Cannot specify both --next and --repo");
        assert_eq!(
            error.to_string(),
            "Invalid arguments: Cannot specify both --next and --repo"
        );
    }

    #[test]
    fn test_not_implemented() {
        let error = RackError::not_implemented("branch");
        assert_eq!(error.to_string(), "Action \"branch\" not implemented");
    }

    #[test]
    fn test_config_error_with_path() {
        let path = PathBuf::from("/work/.rack.yaml");
        let error = RackError::config_error("bad config", Some(path.clone()));
        if let RackError::ConfigError { path: Some(p), .. } = error {
            assert_eq!(p, path);
        } else {
            panic!("Expected ConfigError with path");
        }
    }

    #[test]
    fn test_error_conversion_from_scm_error() {
        let scm_error = ScmError::command_failed("git status --porcelain", 128, "not a repo");
        let rack_error: RackError = scm_error.into();
        assert!(matches!(rack_error, RackError::ScmError { .. }));
    }

    #[test]
    fn test_error_conversion_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let rack_error: RackError = io_error.into();
        assert!(matches!(rack_error, RackError::FileSystemError { .. }));
    }
}
