//! SecureString migration driver
//!
//! Walks every page under a path prefix and, for each parameter, either reports
//! it (dry run) or rewrites it in place as `SecureString`. Strictly sequential:
//! one store call in flight at a time, entries handled in the order returned.

use crate::api::{FetchRequest, ParameterStore, WriteRequest};
use crate::error::MigrateError;
use colored::*;
use log::{debug, info, warn};
use std::fmt;
use std::io::Write;

/// Settings for a single migration run
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    pub path_prefix: String,
    pub dry_run: bool,
    pub page_size: Option<i32>,
}

impl MigrationOptions {
    pub fn new(path_prefix: impl Into<String>, dry_run: bool) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            dry_run,
            page_size: None,
        }
    }

    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Parameters visited, in either mode
    pub processed: usize,
    /// Fetch calls made
    pub pages: usize,
    pub dry_run: bool,
}

impl fmt::Display for MigrationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(
                f,
                "🟡 Dry-run complete. Total parameters scanned: {}",
                self.processed
            )
        } else {
            write!(
                f,
                "🎉 Migration complete! Total parameters converted: {}",
                self.processed
            )
        }
    }
}

pub struct Migrator<'a, S: ParameterStore + ?Sized> {
    store: &'a S,
    options: MigrationOptions,
}

impl<'a, S: ParameterStore + ?Sized> Migrator<'a, S> {
    pub fn new(store: &'a S, options: MigrationOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &MigrationOptions {
        &self.options
    }

    /// Run the migration, streaming progress lines to `out`.
    ///
    /// Any store failure or a parameter without a decrypted value aborts the
    /// run at that entry; nothing after it is visited.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<MigrationSummary, MigrateError> {
        let path = self.options.path_prefix.as_str();
        let dry_run = self.options.dry_run;

        info!("Starting migration of {} (dry_run: {})", path, dry_run);
        writeln!(out, "🔎 Fetching parameters from {}", path.cyan())?;

        let mut next_token = None;
        let mut processed = 0usize;
        let mut pages = 0usize;

        loop {
            let request = FetchRequest::under(path)
                .page_size(self.options.page_size)
                .after(next_token.as_ref());
            let page = self.store.fetch_page(&request).await?;
            pages += 1;

            debug!(
                "Page {} under {}: {} parameters (has_more: {})",
                pages,
                path,
                page.len(),
                page.has_more()
            );

            // An empty page ends the walk even if the store sent a token with it.
            if page.is_empty() {
                if page.has_more() {
                    warn!(
                        "Store returned an empty page with a continuation token \
                         after {} pages; stopping",
                        pages
                    );
                }
                writeln!(out, "⚠️  No parameters found in this batch.")?;
                break;
            }

            for param in &page.parameters {
                // Live runs refuse an entry without a decrypted value before counting it
                let value = if dry_run {
                    None
                } else {
                    Some(param.decrypted_value()?)
                };

                processed += 1;
                if param.parameter_type.is_encrypted() {
                    debug!("{} is already {}; rewriting anyway", param.name, param.parameter_type);
                }
                writeln!(
                    out,
                    "➡️  Found {} (Type: {})",
                    param.name.bold(),
                    param.parameter_type
                )?;

                match value {
                    None => {
                        writeln!(out, "   🟡 Would convert {} to SecureString", param.name)?;
                    }
                    Some(value) => {
                        self.store
                            .write_parameter(&WriteRequest::secure_overwrite(&param.name, value))
                            .await?;
                        writeln!(
                            out,
                            "   ✅ Converted {} to {}",
                            param.name,
                            "SecureString".green()
                        )?;
                    }
                }
            }

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        let summary = MigrationSummary {
            processed,
            pages,
            dry_run,
        };
        info!(
            "Finished migration of {}: {} parameters over {} pages",
            path, summary.processed, summary.pages
        );
        Ok(summary)
    }
}
