use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options of the storefront server.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Directory holding the Tera templates.
    pub templates_dir: String,
    /// Lifetime of the cached category snapshot; `0` disables caching.
    pub category_cache_ttl_secs: u64,
}

impl ServerConfig {
    /// Loads `config/default.yaml`, then `config/{APP_ENV}.yaml` when present,
    /// then `APP_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("templates_dir", "templates")?
            .set_default("category_cache_ttl_secs", 60)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
