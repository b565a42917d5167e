//! Brokerbook CLI
//!
//! Computes totals for seller transactions and moves them to and from the
//! bookkeeping backend.

mod commands;
mod report;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use brokerbook_shared::config::LogConfig;
use brokerbook_shared::{AppConfig, AppError};

use commands::Command;

/// Brokerbook seller-transaction tool.
#[derive(Parser, Debug)]
#[command(name = "brokerbook", version, about, long_about = None)]
struct Cli {
    /// Log at debug level (overrides the configured filter, not `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load().map_err(AppError::from);
    let log = config.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_tracing(&log, cli.verbose);

    match commands::dispatch(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, |app| {
                tracing::debug!(code = app.error_code(), recoverable = app.is_user_recoverable());
                app.exit_code()
            });
            eprintln!("error: {err:#}");
            ExitCode::from(code)
        }
    }
}

fn init_tracing(log: &LogConfig, verbose: bool) {
    let fallback = if verbose { "brokerbook=debug" } else { log.filter.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(log.json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!log.json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}
