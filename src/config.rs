use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "SSM_MIGRATE_CONFIG";
pub const REGION_ENV: &str = "SSM_MIGRATE_REGION";
pub const PATH_PREFIX_ENV: &str = "SSM_MIGRATE_PATH_PREFIX";
pub const ENDPOINT_URL_ENV: &str = "SSM_MIGRATE_ENDPOINT_URL";
pub const PAGE_SIZE_ENV: &str = "SSM_MIGRATE_PAGE_SIZE";

/// Largest page `GetParametersByPath` will return
pub const MAX_PAGE_SIZE: i32 = 10;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// AWS region; the SDK default chain decides when unset
    #[serde(default)]
    pub region: Option<String>,
    /// Namespace root to migrate, e.g. `/myapp/prod/`
    #[serde(default)]
    pub path_prefix: Option<String>,
    /// Endpoint override for local stand-ins of the service
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub page_size: Option<i32>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("ssm-secure-migrate");

        Ok(config_dir.join("config.toml"))
    }

    /// Read the config file (if any), then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from_path(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override fields from `lookup` (normally the process environment).
    /// Unset or empty variables leave the current value alone.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(region) = get(REGION_ENV) {
            debug!("{} overrides region", REGION_ENV);
            self.region = Some(region);
        }
        if let Some(path_prefix) = get(PATH_PREFIX_ENV) {
            debug!("{} overrides path prefix", PATH_PREFIX_ENV);
            self.path_prefix = Some(path_prefix);
        }
        if let Some(endpoint_url) = get(ENDPOINT_URL_ENV) {
            debug!("{} overrides endpoint", ENDPOINT_URL_ENV);
            self.endpoint_url = Some(endpoint_url);
        }
        if let Some(page_size) = get(PAGE_SIZE_ENV) {
            let page_size = page_size.trim().parse::<i32>().with_context(|| {
                format!("{} must be a number, got '{}'", PAGE_SIZE_ENV, page_size)
            })?;
            self.page_size = Some(page_size);
        }

        Ok(())
    }

    /// Check the settings a run cannot do without
    pub fn validate(&self) -> Result<()> {
        let path_prefix = self.path_prefix.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No path prefix configured. Set {} or add path_prefix to the config file.",
                PATH_PREFIX_ENV
            )
        })?;

        if !path_prefix.starts_with('/') {
            anyhow::bail!("Path prefix must start with '/': {}", path_prefix);
        }

        if let Some(page_size) = self.page_size {
            if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
                anyhow::bail!(
                    "Page size must be between 1 and {}, got {}",
                    MAX_PAGE_SIZE,
                    page_size
                );
            }
        }

        Ok(())
    }

    /// Validated path prefix
    pub fn path_prefix(&self) -> Result<&str> {
        self.validate()?;
        Ok(self.path_prefix.as_deref().unwrap_or_default())
    }
}
