use crate::common::error::RackError;

/// Result alias used across the crate.
///
/// # Examples
///
/// ```
/// use rack::common::result::RackResult;
/// use rack::common::error::RackError;
///
/// fn example_function() -> RackResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> RackResult<()> {
///     Err(RackError::internal_error("Something went wrong"))
/// }
/// ```
pub type RackResult<T> = Result<T, RackError>;

/// Helpers for turning foreign results into [`RackResult`].
pub trait ResultExt<T, E> {
    /// Wrap an I/O error as a filesystem error carrying the offending path.
    ///
    /// ```
    /// use rack::common::result::{RackResult, ResultExt};
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let rack_result: RackResult<String> = result.with_filesystem_error("read failed", None);
    /// assert!(rack_result.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> RackResult<T>
    where
        E: Into<std::io::Error>;

    /// Wrap any error as a configuration error.
    fn with_config_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> RackResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> RackResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| {
            let io_error = e.into();
            RackError::filesystem_error_with_source(message, path, io_error)
        })
    }

    fn with_config_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> RackResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| RackError::config_error_with_source(message, path, e))
    }
}
