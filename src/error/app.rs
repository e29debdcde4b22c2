use std::process::ExitCode;

use thiserror::Error;

use super::{HttpError, PoolError, UsageError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),
    #[error("{0}")]
    Http(#[from] HttpError),
    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether the usage text follows the error report.
    #[must_use]
    pub const fn shows_usage(&self) -> bool {
        matches!(self, AppError::Usage(_) | AppError::Http(_))
    }

    /// Every failure is fatal to the run and exits with status 1.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}
