pub mod app;
pub mod migrate;

pub use app::Cli;
pub use migrate::handle_migrate;
