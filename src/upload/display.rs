//! Operator-facing progress and summary output.

use super::UploadReport;
use crate::hub::{HubError, PushReceipt, PushStatus};
use crate::registry::{PROJECT_PREFIX, PromptRecord, VERSION_TAG};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Print the run header.
pub fn print_banner<W: Write>(
    out: &mut W,
    workspace_id: Option<&str>,
    org_id: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "🚀 Uploading prompts to LangSmith Hub...")?;
    writeln!(out, "   Project: {}", PROJECT_PREFIX)?;
    writeln!(out, "   Version: {}", VERSION_TAG)?;
    writeln!(out)?;
    writeln!(out, "✅ LangSmith client initialized")?;
    writeln!(out, "   Workspace ID: {}", workspace_id.unwrap_or("None"))?;
    writeln!(out, "   Org ID (for paths): {}", org_id.unwrap_or("None"))?;
    writeln!(out)
}

pub(super) fn print_success<W: Write>(
    out: &mut W,
    name: &str,
    record: &PromptRecord,
    receipt: &PushReceipt,
) -> io::Result<()> {
    match receipt.status {
        PushStatus::Committed => writeln!(out, "   ✅ Successfully uploaded: {}", name)?,
        PushStatus::Unchanged => {
            writeln!(out, "   ✅ Already up to date: {} (no changes to commit)", name)?
        }
    }
    writeln!(out, "   📝 Description: {}", record.description)?;
    writeln!(out, "   🔒 Visibility: Private")?;
    writeln!(out, "   🔗 URL: {}", receipt.url)?;
    writeln!(out)
}

pub(super) fn print_failure<W: Write>(out: &mut W, name: &str, err: &HubError) -> io::Result<()> {
    writeln!(out, "   ❌ Failed to upload {}: {}", name, err)?;
    writeln!(out)
}

/// Print the tally, then either the failed names or the next steps.
pub fn print_summary<W: Write>(out: &mut W, report: &UploadReport) -> io::Result<()> {
    let total = report.total();
    let failed = report.failed_names();

    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "📊 Upload Summary:")?;
    writeln!(out, "   ✅ Successful: {}/{}", report.succeeded(), total)?;
    writeln!(out, "   ❌ Failed: {}/{}", failed.len(), total)?;

    if !failed.is_empty() {
        writeln!(out)?;
        writeln!(out, "   Failed prompts:")?;
        for name in &failed {
            writeln!(out, "   - {}", name)?;
        }
        return writeln!(out);
    }

    writeln!(out)?;
    writeln!(out, "🎉 All prompts uploaded successfully!")?;
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "1. View your prompts:")?;
    writeln!(out, "   https://smith.langchain.com/hub")?;
    writeln!(out)?;
    writeln!(out, "2. Update your .env.local:")?;
    writeln!(out, "   PROMPT_SOURCE=hub")?;
    writeln!(out, "   PROMPT_VERSION={}", VERSION_TAG)?;
    writeln!(out)?;
    writeln!(out, "3. Test the integration:")?;
    writeln!(out, "   npm run dev")?;
    writeln!(out)?;
    writeln!(out, "4. Check logs for:")?;
    writeln!(out, "   📥 Fetching prompts from LangSmith Hub...")?;
    writeln!(out, "   ✅ All prompts loaded from Hub successfully")
}
