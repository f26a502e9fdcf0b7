use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pg_dsn: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub storage: StorageBackend,
}

const fn default_port() -> u16 {
    8000
}

impl Config {
    fn validated(self) -> Result<Self, Box<dyn std::error::Error>> {
        if self.storage == StorageBackend::Postgres && self.pg_dsn.is_none() {
            return Err("pg_dsn must be set when the postgres storage backend is selected".into());
        }
        Ok(self)
    }
}

fn load_from_file(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str::<Config>(&contents)?.validated()
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path =
        env::var("NOTES_SERVER_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        return load_from_file(&config_path);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return load_from_file("config.yaml");
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'\
             \n This file should not be used and should be replaced with actual data",
            config_path
        );
        return load_from_file("config.example.yaml");
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    envy::from_env::<Config>()
        .map_err(|e| -> Box<dyn std::error::Error> {
            format!(
                "Config file not found and environment variables are incomplete. \
                 Tried: '{config_path}', 'config.yaml', 'config.example.yaml', and environment variables. \
                 Error: {e}"
            )
            .into()
        })
        .and_then(Config::validated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_yaml() {
        let config: Config = serde_yaml::from_str(
            "pg_dsn: \"host=db user=notes\"\nport: 9000\nstorage: postgres\n",
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                pg_dsn: Some("host=db user=notes".to_string()),
                port: 9000,
                storage: StorageBackend::Postgres,
            }
        );
    }

    #[test]
    fn memory_backend_needs_no_dsn() {
        let config: Config = serde_yaml::from_str("storage: memory\n").unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.validated().is_ok());
    }

    #[test]
    fn postgres_backend_requires_dsn() {
        let config: Config = serde_yaml::from_str("port: 8080\n").unwrap();

        assert!(config.validated().is_err());
    }
}
