//! The publishing pass.
//!
//! Records are pushed strictly in registry order, one at a time. A failure on
//! one record is printed and recorded, and the pass moves on; only the final
//! [`UploadReport`] decides whether the run as a whole failed.

mod display;


pub use display::{print_banner, print_summary};

use crate::hub::{HubError, PromptHub, PushOptions, PushReceipt};
use crate::registry::{PromptRecord, is_valid_handle};
use crate::template::PromptTemplate;
use log::{debug, warn};
use std::io::{self, Write};

/// Outcome of publishing one record.
#[derive(Debug)]
pub struct UploadOutcome {
    /// Externally visible name the record was published under.
    pub name: String,
    pub result: Result<PushReceipt, HubError>,
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-record outcomes of a run, in registry order.
#[derive(Debug, Default)]
pub struct UploadReport {
    pub outcomes: Vec<UploadOutcome>,
}

impl UploadReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed_names(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| o.name.clone())
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(UploadOutcome::is_success)
    }
}

/// Build the template for a record and push it under its full name.
pub fn upload_record<H>(hub: &H, record: &PromptRecord) -> Result<PushReceipt, HubError>
where
    H: PromptHub + ?Sized,
{
    let name = record.full_name();
    if !is_valid_handle(&name) {
        return Err(HubError::InvalidName(name));
    }

    let prompt = PromptTemplate::new(record.template, record.input_variables.iter().copied())?;
    let options = PushOptions {
        description: Some(record.description.to_string()),
    };
    hub.push_prompt(&name, &prompt, &options)
}

/// Publish every record in order, printing progress to `out`.
pub fn upload_all<H, W>(hub: &H, records: &[PromptRecord], out: &mut W) -> io::Result<UploadReport>
where
    H: PromptHub + ?Sized,
    W: Write,
{
    let mut report = UploadReport::default();

    for record in records {
        let name = record.full_name();
        writeln!(out, "📤 Uploading: {}", name)?;

        let result = upload_record(hub, record);
        match &result {
            Ok(receipt) => {
                debug!("{} {} at {}", name, receipt.status, receipt.url);
                display::print_success(out, &name, record, receipt)?;
            }
            Err(err) => {
                warn!("upload of {} failed: {}", name, err);
                display::print_failure(out, &name, err)?;
            }
        }

        report.outcomes.push(UploadOutcome { name, result });
    }

    Ok(report)
}
