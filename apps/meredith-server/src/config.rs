//! Layered server configuration: defaults, optional YAML file, `MEREDITH__*` env

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub shop: ShopConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SeaORM connection URL (`postgres://...` or `sqlite:...`)
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 10,
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Mirrors `shop_service::Config`, including its rejection of unknown keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopConfig {
    pub max_name_length: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            max_name_length: shop_service::Config::default().max_name_length,
        }
    }
}

impl From<ShopConfig> for shop_service::Config {
    fn from(cfg: ShopConfig) -> Self {
        Self {
            max_name_length: cfg.max_name_length,
        }
    }
}

impl AppConfig {
    /// Load configuration. A missing `path` means defaults plus environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if let Some(path) = path {
            if !path.exists() {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed("MEREDITH__").split("__"))
            .extract()
            .context("invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        figment::Jail::expect_with(|_jail| {
            let cfg = AppConfig::load(None).map_err(|e| e.to_string())?;

            assert_eq!(cfg.server.bind_addr, "0.0.0.0:8080");
            assert_eq!(cfg.database.url, "sqlite::memory:");
            assert_eq!(cfg.database.max_connections, 10);
            assert!(cfg.database.run_migrations);
            assert_eq!(cfg.logging.format, LogFormat::Text);
            assert_eq!(cfg.shop.max_name_length, 256);
            Ok(())
        });
    }

    #[test]
    fn test_yaml_then_env_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  bind_addr: 127.0.0.1:9000\nlogging:\n  format: json\nshop:\n  max_name_length: 40"
        )
        .unwrap();
        let path = file.path().to_path_buf();

        figment::Jail::expect_with(move |jail| {
            jail.set_env("MEREDITH__SERVER__BIND_ADDR", "127.0.0.1:9100");

            let cfg = AppConfig::load(Some(&path)).map_err(|e| e.to_string())?;

            assert_eq!(cfg.server.bind_addr, "127.0.0.1:9100");
            assert_eq!(cfg.logging.format, LogFormat::Json);
            assert_eq!(cfg.shop.max_name_length, 40);
            assert_eq!(cfg.database.max_connections, 10);
            Ok(())
        });
    }

    #[test]
    fn test_unknown_shop_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "shop:\n  max_name_lenght: 5").unwrap();

        let err = AppConfig::load(Some(file.path())).unwrap_err();

        assert!(format!("{err:#}").contains("max_name_lenght"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/meredith.yaml")));
        assert!(result.is_err());
    }
}
