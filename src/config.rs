use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Workspace configuration, read once at startup
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PantryConfig {
    /// Collection resource the recipes are listed from and posted to
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:4000/recipes".to_string()
}

impl PantryConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY__ prefix
    /// 2. pantry.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY__API_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config("pantry")
    }
}

/// Load configuration from `<name>.toml` (optional) and `PANTRY__*` environment variables
pub fn load_config(name: &str) -> Result<PantryConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(name).required(false))
        .add_source(
            Environment::with_prefix("PANTRY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
