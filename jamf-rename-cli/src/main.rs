//! jamf-rename — name Jamf mobile devices after their GivenIOSShortname attribute.
//!
//! # Usage
//!
//! ```text
//! jamf-rename --serial-numbers <SERIAL>... [--dry-run]
//! jamf-rename --update-all [--dry-run]
//! jamf-rename ... [--json] [--log-format default|simple|json]
//! ```
//!
//! Server settings come from `--server-url`, `--api-user`, `--api-password`,
//! `--cert-file`, `--timeout` or the matching `JAMF_*` environment variables.

mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use commands::{server::ServerArgs, sync::SyncArgs};
use logging::LogFormat;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "jamf-rename",
    version,
    about = "Rename Jamf mobile devices after their GivenIOSShortname extension attribute",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    server: ServerArgs,

    #[command(flatten)]
    sync: SyncArgs,

    /// Log line layout: default (time, level, message), simple (message only), json.
    #[arg(long, value_enum, default_value_t = LogFormat::Default)]
    log_format: LogFormat,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Keep stdout clean for the JSON report.
    if let Err(err) = logging::init(cli.log_format, cli.sync.json) {
        eprintln!("warning: logging unavailable: {err}");
    }

    let config = cli.server.into_config()?;
    cli.sync.run(config)
}
