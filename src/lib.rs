//! prompt-hub-push: publish the agent-bio-summary-v2 prompt templates to the
//! LangSmith prompt hub.
//!
//! The run is a single sequential pass: read configuration from the
//! environment, push each record of [`registry::PROMPTS`] through a
//! [`hub::PromptHub`], and summarize the outcome.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod hub;
pub mod registry;
pub mod run;
pub mod template;
pub mod upload;
