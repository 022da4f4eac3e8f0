use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ssm-secure-migrate")]
#[command(about = "Convert every SSM parameter under a path to SecureString, in place")]
#[command(after_help = "Region and path prefix come from the config file or the \
    SSM_MIGRATE_REGION / SSM_MIGRATE_PATH_PREFIX environment variables.")]
pub struct Cli {
    /// Report what would be converted without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
