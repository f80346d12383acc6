//! Subscriber setup for the binary.

use std::error::Error;
use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Default,
    Simple,
    Json,
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
///
/// Fails if a global subscriber is already installed.
pub fn init(format: LogFormat, to_stderr: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (writer, ansi) = if to_stderr {
        (
            BoxMakeWriter::new(std::io::stderr),
            std::io::stderr().is_terminal(),
        )
    } else {
        (
            BoxMakeWriter::new(std::io::stdout),
            std::io::stdout().is_terminal(),
        )
    };

    let builder = fmt().with_env_filter(filter).with_writer(writer);
    match format {
        LogFormat::Default => builder.with_ansi(ansi).with_target(false).try_init(),
        LogFormat::Simple => builder
            .with_ansi(false)
            .without_time()
            .with_level(false)
            .with_target(false)
            .try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
}
