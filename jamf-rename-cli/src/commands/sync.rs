//! The rename run: select devices, sync, report.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use jamf_rename_client::JamfClient;
use jamf_rename_core::{JamfConfig, SyncRequest};
use jamf_rename_sync::{pipeline, DeviceOutcome, SkipReason, SyncReport};

/// Which devices to rename and how.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Show what would be renamed without changing anything on the server.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Space-separated serial numbers to process.
    #[arg(
        short = 's',
        long,
        num_args = 1..,
        value_name = "SERIAL",
        conflicts_with = "update_all"
    )]
    pub serial_numbers: Option<Vec<String>>,

    /// Process every mobile device registered on the server.
    #[arg(long)]
    pub update_all: bool,

    /// Print the run report as JSON on stdout (logs go to stderr).
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
    pub fn request(&self) -> SyncRequest {
        if self.update_all {
            return SyncRequest::all(self.dry_run);
        }
        match &self.serial_numbers {
            Some(serials) => SyncRequest::serials(serials.iter().map(String::as_str), self.dry_run),
            None => SyncRequest {
                serials: None,
                dry_run: self.dry_run,
            },
        }
    }

    pub fn run(self, config: JamfConfig) -> Result<()> {
        let server = config.base_url().to_string();
        let client = JamfClient::new(config)
            .with_context(|| format!("failed to set up client for {server}"))?;

        // Run-level failures are already logged by the runner; exit cleanly.
        let Ok(report) = pipeline::run(&client, &self.request()) else {
            return Ok(());
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("failed to encode report")?
            );
        } else {
            print_report(&report);
        }
        Ok(())
    }
}

fn print_report(report: &SyncReport) {
    let prefix = if report.dry_run { "[dry-run] " } else { "" };

    if report.outcomes.is_empty() {
        println!("{prefix}✓ no matching devices — nothing to do");
    } else {
        println!(
            "{prefix}✓ {} devices processed ({} renamed, {} would rename, {} skipped, {} failed)",
            report.outcomes.len(),
            report.renamed(),
            report.would_rename(),
            report.skipped(),
            report.failed(),
        );
    }

    for outcome in &report.outcomes {
        let device = outcome.device();
        let label = format!("{} (id {})", device.serial_number, device.id);
        match outcome {
            DeviceOutcome::Renamed { name, .. } => {
                println!("  {}  {label} → {name}", "✎".green())
            }
            DeviceOutcome::WouldRename { name, .. } => {
                println!("  {}  {label} → {name}", "~".cyan())
            }
            DeviceOutcome::Skipped { reason, .. } => {
                let why = match reason {
                    SkipReason::MissingShortname => "no GivenIOSShortname attribute",
                    SkipReason::EmptyShortname => "empty GivenIOSShortname",
                };
                println!("  {}  {label}: {why}", "·".dimmed())
            }
            DeviceOutcome::Failed { failures, .. } => {
                for failure in failures {
                    println!("  {}  {label}: {}", "✗".red(), failure.message);
                }
            }
        }
    }

    for serial in &report.unmatched_serials {
        println!("  {}  {serial}: not found on server", "?".yellow());
    }
}
