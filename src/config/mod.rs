mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

/// Loads `CONFIG_PATH` (default `config.yaml`) and applies environment overrides.
/// A missing file is not an error; every field has a default.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config = load_from_path(&config_path).await?;
    config.with_overrides(|key| env::var(key).ok())
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    match tokio::fs::read_to_string(path.as_ref()).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(
                "No configuration file at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

impl Config {
    /// Applies `GEMINI_API_KEY`, `HOST` and `PORT` from `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.llm.api_key = Some(key);
        }
        // An empty key behaves exactly like a missing one.
        if !self.llm.has_api_key() {
            self.llm.api_key = None;
        }

        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{port}'")))?;
        }

        Ok(self)
    }
}
