//! Error types for prompt-hub-push.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Per-prompt failures live in [`crate::hub::HubError`]; this type covers the
//! run as a whole.

use crate::exit_codes;
use crate::hub::HubError;
use thiserror::Error;

/// Top-level error for a publishing run.
#[derive(Error, Debug)]
pub enum PushError {
    /// The required credential is not set.
    #[error("{0} environment variable not set")]
    MissingCredential(String),

    /// The hub client could not be constructed.
    #[error("failed to initialize LangSmith client: {0}")]
    Client(#[source] HubError),

    /// One or more prompts failed to upload; holds their published names.
    #[error("{} prompt(s) failed to upload: {}", .0.len(), .0.join(", "))]
    UploadFailed(Vec<String>),

    /// Writing progress output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl PushError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PushError::MissingCredential(_) => exit_codes::FAILURE,
            PushError::Client(_) => exit_codes::FAILURE,
            PushError::UploadFailed(_) => exit_codes::FAILURE,
            PushError::Io(_) => exit_codes::FAILURE,
        }
    }

    /// Follow-up guidance to show the operator, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            PushError::MissingCredential(var) => {
                Some(format!("Export it with: export {}='lsv2_sk_...'", var))
            }
            _ => None,
        }
    }
}

/// Result type alias for run-level operations.
pub type Result<T> = std::result::Result<T, PushError>;
