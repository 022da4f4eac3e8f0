//! Migrate command handler

use anyhow::{Context, Result};
use colored::*;
use std::io::Write;

use super::Cli;
use crate::api::SsmStore;
use crate::config::Config;
use crate::migration::{MigrationOptions, MigrationSummary, Migrator};

/// Load configuration, connect to SSM and run the migration against stdout
pub async fn handle_migrate(args: Cli) -> Result<MigrationSummary> {
    let config = Config::load().context("Failed to load configuration")?;
    let path_prefix = config.path_prefix()?.to_string();

    let mut stdout = std::io::stdout();
    if args.dry_run {
        writeln!(stdout, "🧪 {}", "Dry run: no parameters will be modified".yellow())?;
    }
    if let Some(region) = &config.region {
        writeln!(stdout, "🌍 Using region: {}", region.bright_green().bold())?;
    }

    let store = SsmStore::connect(&config).await;
    let options = MigrationOptions::new(path_prefix, args.dry_run).with_page_size(config.page_size);
    let migrator = Migrator::new(&store, options);

    let summary = migrator
        .run(&mut stdout)
        .await
        .with_context(|| format!("Migration of {} aborted", migrator.options().path_prefix))?;

    writeln!(stdout, "{}", summary)?;
    Ok(summary)
}
