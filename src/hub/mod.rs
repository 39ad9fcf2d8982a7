//! Prompt hub client.
//!
//! The uploader talks to the hub only through the [`PromptHub`] trait, so the
//! publishing loop can run against a stub in tests. [`LangSmithClient`] is the
//! real implementation over the LangSmith REST API.

mod client;
mod types;

#[cfg(test)]
mod tests;

pub use client::LangSmithClient;

use crate::template::{PromptTemplate, TemplateError};
use std::fmt;
use thiserror::Error;

/// Errors raised while publishing a single prompt.
#[derive(Error, Debug)]
pub enum HubError {
    /// Network failure, timeout, or an unusable endpoint URL.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The hub answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The hub answered with a body we could not interpret.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The template failed local validation.
    #[error("invalid template: {0}")]
    InvalidTemplate(#[from] TemplateError),

    /// The published name is not a valid hub handle.
    #[error("invalid prompt name '{0}': use lowercase letters, digits, '-' or '_'")]
    InvalidName(String),
}

/// Settings applied when a prompt is created or updated.
///
/// Prompts are always created private, with no readme or tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOptions {
    pub description: Option<String>,
}

/// Whether a push produced a new commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushStatus {
    Committed,
    /// The manifest matched the latest commit; nothing new was written.
    Unchanged,
}

impl fmt::Display for PushStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushStatus::Committed => write!(f, "committed"),
            PushStatus::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Result of a successful push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReceipt {
    /// Locator for the pushed commit in the hub UI.
    pub url: String,
    pub commit_hash: Option<String>,
    pub status: PushStatus,
}

/// A hosted prompt registry that accepts named templates.
pub trait PromptHub {
    /// Publish `prompt` under `name`, creating the prompt if it does not exist
    /// and adding a commit on top of the latest one if it does.
    fn push_prompt(
        &self,
        name: &str,
        prompt: &PromptTemplate,
        options: &PushOptions,
    ) -> Result<PushReceipt, HubError>;
}
