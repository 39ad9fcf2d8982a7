//! Entry point for the `prompt-hub-push` CLI.
//!
//! Sets up logging, parses arguments, runs the publishing pass, and maps the
//! outcome to an exit code.

use prompt_hub_push::cli::Cli;
use prompt_hub_push::error::PushError;
use prompt_hub_push::{exit_codes, run};
use std::io;
use std::process::ExitCode;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> ExitCode {
    setup_logging();
    let _cli = Cli::parse_args();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run::run(&mut out) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            match &err {
                // The summary has already listed the failed prompts.
                PushError::UploadFailed(_) => log::debug!("{}", err),
                PushError::MissingCredential(_) => {
                    println!("❌ ERROR: {}", err);
                    if let Some(hint) = err.hint() {
                        println!("   {}", hint);
                    }
                }
                _ => eprintln!("Error: {}", err),
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
