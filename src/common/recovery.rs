//! Policy for recoverable failures.
//!
//! Subprocess failures and single-line parse failures are logged and the
//! caller substitutes an empty result or sentinel. In debug mode the first
//! such failure is returned instead, which ends the run with exit code 1.

use crate::common::error::RackError;
use crate::common::result::RackResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorRecovery {
    debug: bool,
}

impl ErrorRecovery {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Log `error`, or hand it back when running in debug mode.
    pub fn recover(&self, error: RackError) -> RackResult<()> {
        if self.debug {
            tracing::debug!("halting on first recoverable error");
            return Err(error);
        }
        tracing::error!("{}", error);
        Ok(())
    }

    /// Unwrap `result`, substituting `fallback` for a recovered error.
    pub fn recover_or<T>(&self, result: RackResult<T>, fallback: T) -> RackResult<T> {
        match result {
            Ok(value) => Ok(value),
            Err(e) => {
                self.recover(e)?;
                Ok(fallback)
            }
        }
    }
}
