//! CLI argument parsing for prompt-hub-push.
//!
//! The tool takes no arguments; clap supplies `--help` and `--version`, and
//! the help text documents the environment it reads.

use clap::Parser;

/// Publish the agent-bio-summary-v2 prompt templates to the LangSmith prompt hub.
///
/// Pushes each prompt as `agent-bio-summary-v2-<name>`, creating it if needed
/// and committing the current template on top of the latest version.
#[derive(Parser, Debug)]
#[command(name = "prompt-hub-push")]
#[command(author, version, about)]
#[command(after_long_help = ENVIRONMENT_HELP)]
pub struct Cli {}

const ENVIRONMENT_HELP: &str = "\
Environment:
  LANGCHAIN_API_KEY       API key (required), e.g. lsv2_sk_...
  LANGCHAIN_WORKSPACE_ID  Workspace to publish into (optional)
  LANGCHAIN_ORG_ID        Organization id, shown for reference (optional)
  LANGCHAIN_ENDPOINT      API base URL (default https://api.smith.langchain.com)
  RUST_LOG                Diagnostic log filter on stderr (default warn)";

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
