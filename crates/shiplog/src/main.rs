//! shiplog - categorized changelogs and schema diffs from git history

mod cli;
mod driver;

use std::path::PathBuf;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::Cli;

/// Console verbosity when RUST_LOG is unset
const CONSOLE_FILTER: &str = "warn";

/// Run log keeps shiplog's own crates at debug
const RUN_LOG_FILTER: &str =
    "shiplog=debug,shiplog_core=debug,shiplog_git=debug,shiplog_changelog=debug,shiplog_schema=debug";

fn main() -> anyhow::Result<()> {
    let _guard = init_tracing();

    let cli = Cli::parse();
    cli.execute()
}

/// Console events go to stderr so stdout carries only the run summary.
/// A JSON run log is kept next to it when the log directory is usable.
fn init_tracing() -> Option<WorkerGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(CONSOLE_FILTER)),
        );

    let (run_log, guard) = match log_directory() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "shiplog.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new(RUN_LOG_FILTER));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(run_log)
        .init();

    guard
}

/// `~/.shiplog/logs`, created on demand
fn log_directory() -> Option<PathBuf> {
    let dir = dirs::home_dir()?.join(".shiplog").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
