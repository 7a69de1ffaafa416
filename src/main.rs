use anyhow::{Context, Result};
use database::DbRepository;
use reporter::fetch_and_report;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Rollcall reporting tool.
///
/// Invoked with no arguments: the connection parameters come entirely from
/// the environment. Exit code 0 means every record was reported and the
/// connection released; any failure exits 1.
#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from the .env file, when one is present.
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr; stdout carries only the record lines. INFO
    // is the floor so failures stay visible when RUST_LOG is unset.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install the tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(count) => {
            tracing::info!(count, "Report complete.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Report failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the single fetch-and-report operation against the configured store.
async fn run() -> Result<usize> {
    let settings = configuration::load_settings()
        .context("Failed to load database settings from the environment")?;

    let repository = DbRepository::new(&settings.database)
        .context("Failed to build the database connection options")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let count = fetch_and_report(&repository, &mut out).await?;
    out.flush().context("Failed to flush the report output")?;

    Ok(count)
}
