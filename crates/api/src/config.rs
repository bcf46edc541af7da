//! Runtime configuration for the API server.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Server settings, layered from defaults, an optional `depot.toml`
/// next to the binary, and `DEPOT_*` environment variables
/// (e.g. `DEPOT_SERVER__PORT=9000`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// tokio-postgres connection string. When unset the server runs on
    /// the in-memory store.
    pub url: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Settings {
    pub fn load() -> eyre::Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("depot").required(false))
            .add_source(Environment::with_prefix("DEPOT").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
