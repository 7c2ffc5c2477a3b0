//! Ratchet CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use ratchet::backend::PipBackend;
use ratchet::cli::{failure_line, run, Cli};
use ratchet::config::load_config;
use ratchet::log::{ConsoleLog, StatusLog};
use ratchet::ExitStatus;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for diagnostics.
///
/// Log level comes from `RUST_LOG`, defaulting to warnings only so the
/// status line stays the only normal output. Diagnostics go to stderr.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ratchet=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Print a clap error or help page, keeping the exit code within ratchet's set.
fn clap_exit(e: clap::Error) -> ExitCode {
    let _ = e.print();
    if e.use_stderr() {
        ExitStatus::Unexpected.into()
    } else {
        ExitStatus::Success.into()
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return clap_exit(e),
    };
    init_tracing();

    tracing::debug!("Ratchet starting with args: {:?}", cli);

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            ConsoleLog::new(false).status(&failure_line(&e, &cli.requests));
            return e.exit_status().into();
        }
    };

    let mut log = ConsoleLog::new(config.verbose);
    let backend = PipBackend::new(config);

    run(&cli.requests, &backend, &mut log).into()
}
