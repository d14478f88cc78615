use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{ConfigLoadError, OriginError};
use crate::origin::AssetOrigin;

/// Asset configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AssetConfig {
    /// API base URL. A trailing `/api` segment is stripped to form the
    /// asset origin. Required.
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub assets: AssetConfig,
}

impl AppConfig {
    /// Load from the file named by `GALLERY_CONFIG` (default `config/config`),
    /// then the environment (e.g. `GALLERY__ASSETS__API_URL`).
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("GALLERY_CONFIG").unwrap_or_else(|_| "config/config".to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("GALLERY").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Build the process-wide asset origin. Call once at startup.
    pub fn asset_origin(&self) -> Result<AssetOrigin, OriginError> {
        AssetOrigin::new(self.assets.api_url.as_deref().unwrap_or_default())
    }
}

/// Load configuration and build the asset origin in one step.
pub fn load_asset_origin() -> Result<AssetOrigin, ConfigLoadError> {
    Ok(AppConfig::load()?.asset_origin()?)
}

/// [`load_asset_origin`] with an explicit config file path.
pub fn load_asset_origin_from(config_path: &str) -> Result<AssetOrigin, ConfigLoadError> {
    Ok(AppConfig::load_from(config_path)?.asset_origin()?)
}
