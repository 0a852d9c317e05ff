use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;
const DEFAULT_DB_NAME: &str = "hubspot_integration";

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
}

/// On-disk TOML layout; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    server: FileServer,
    #[serde(default)]
    database: FileDatabase,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileServer {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileDatabase {
    url: Option<String>,
    name: Option<String>,
}

impl AppConfig {
    /// Load from `.env`, the optional TOML file and the process environment.
    ///
    /// Environment variables win over the file. `CONFIG_PATH` selects the
    /// file; when set it must exist.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let explicit = std::env::var("CONFIG_PATH").ok().map(PathBuf::from);
        let path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let contents = if path.exists() {
            Some(
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {:?}", path))?,
            )
        } else if explicit.is_some() {
            bail!("Config file {:?} does not exist", path);
        } else {
            None
        };

        Self::from_sources(contents.as_deref(), |key| std::env::var(key).ok())
    }

    /// Merge TOML contents with an environment lookup
    pub fn from_sources(
        file: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file: FileConfig = match file {
            Some(raw) => toml::from_str(raw).context("Invalid config file")?,
            None => FileConfig::default(),
        };

        let port = match env("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => file.server.port.unwrap_or(DEFAULT_PORT),
        };

        let host = env("HOST")
            .or(file.server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let url = env("MONGO_URL")
            .or(file.database.url)
            .filter(|u| !u.trim().is_empty())
            .context("MONGO_URL must be set (or database.url in the config file)")?;

        let name = env("DB_NAME")
            .or(file.database.name)
            .unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig { url, name },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_only_uses_defaults() {
        let config =
            AppConfig::from_sources(None, env_of(&[("MONGO_URL", "mongodb://localhost:27017")]))
                .unwrap();
        assert_eq!(config.database.name, "hubspot_integration");
        assert_eq!(config.bind_addr(), "0.0.0.0:8001");
    }

    #[test]
    fn missing_url_is_fatal() {
        let err = AppConfig::from_sources(None, env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("MONGO_URL"));
    }

    #[test]
    fn env_overrides_file() {
        let file = r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [database]
            url = "mongodb://file:27017"
            name = "from_file"
        "#;
        let config = AppConfig::from_sources(
            Some(file),
            env_of(&[("DB_NAME", "from_env"), ("PORT", "9100")]),
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.database.url, "mongodb://file:27017");
        assert_eq!(config.database.name, "from_env");
    }

    #[test]
    fn bad_port_is_rejected() {
        let result = AppConfig::from_sources(
            None,
            env_of(&[("MONGO_URL", "mongodb://x"), ("PORT", "eighty")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = AppConfig::from_sources(
            Some("[server]\nthreads = 4\n"),
            env_of(&[("MONGO_URL", "mongodb://x")]),
        );
        assert!(result.is_err());
    }
}
