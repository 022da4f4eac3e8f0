pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod migration;

pub use error::{MigrateError, StoreError};
pub use migration::{MigrationOptions, MigrationSummary, Migrator};
