//! One publishing run: configuration, banner, uploads, summary.

use crate::config::HubConfig;
use crate::error::{PushError, Result};
use crate::hub::{LangSmithClient, PromptHub};
use crate::registry::PROMPTS;
use crate::upload::{UploadReport, print_banner, print_summary, upload_all};
use log::info;
use std::io::Write;

/// Run against the real hub using the process environment.
///
/// The credential check happens before the client is built, so a missing key
/// never reaches the network.
pub fn run<W: Write>(out: &mut W) -> Result<UploadReport> {
    let config = HubConfig::from_env()?;
    let client = LangSmithClient::new(&config).map_err(PushError::Client)?;
    info!("publishing {} prompts to {}", PROMPTS.len(), config.endpoint);
    run_with(&config, &client, out)
}

/// Publish the registry through `hub` and print the summary.
///
/// Returns the report when everything succeeded, and
/// [`PushError::UploadFailed`] with the failed names otherwise.
pub fn run_with<H, W>(config: &HubConfig, hub: &H, out: &mut W) -> Result<UploadReport>
where
    H: PromptHub + ?Sized,
    W: Write,
{
    print_banner(out, config.workspace_id.as_deref(), config.org_id.as_deref())?;
    let report = upload_all(hub, &PROMPTS, out)?;
    print_summary(out, &report)?;
    out.flush()?;

    if report.is_success() {
        Ok(report)
    } else {
        Err(PushError::UploadFailed(report.failed_names()))
    }
}
