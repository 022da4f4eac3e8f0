use anyhow::Result;
use clap::Parser;
use colored::*;
use log::{error, info, warn};

use ssm_secure_migrate::cli::{Cli, handle_migrate};

const LOG_FILE: &str = "ssm-secure-migrate.log";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Migration failed: {:#}", e);
        eprintln!("{} {:#}", "❌ Migration failed:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Cli::parse();
    dotenvy::dotenv().ok();

    init_logging();

    info!("Starting ssm-secure-migrate (dry_run: {})", args.dry_run);

    let summary = handle_migrate(args).await?;
    info!("Processed {} parameters", summary.processed);
    Ok(())
}

/// Log to a file (truncated each run) so progress output stays clean. Falls
/// back to stderr when the working directory can't hold the log file.
fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE);

    match log_file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file))).init();
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr).init();
            warn!("Cannot open {}: {}; logging to stderr", LOG_FILE, e);
        }
    }
}
