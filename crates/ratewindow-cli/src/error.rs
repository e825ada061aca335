//! CLI error categories and their process exit codes.
//!
//! | Code | Cause |
//! |------|-------|
//! | 0 | Success |
//! | 2 | Invalid configuration (clap also uses 2 for malformed arguments) |
//! | 3 | HTTP client could not be built |
//! | 4 | Run aborted: malformed payload, or a missing day in legacy mode |
//! | 5 | Result could not be serialized |
//! | 10 | Writing to stdout failed |
//!
//! The distinct non-zero codes are an extension: the command is only required to
//! exit 0 on success and non-zero on failure, so scripts should test for non-zero
//! rather than rely on the specific value.

use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ratewindow_core::ValidationError),

    #[error(transparent)]
    Transport(#[from] ratewindow_core::HttpError),

    #[error(transparent)]
    Pipeline(#[from] ratewindow_core::PipelineError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Transport(_) => 3,
            Self::Pipeline(_) => 4,
            Self::Serialization(_) => 5,
            Self::Io(_) => 10,
        }
    }
}
