//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use store_commerce::Currency;
use store_observability::{LogFormat, LogLevel};

/// Contents of `gamestore.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storefront settings.
    #[serde(default)]
    pub store: StoreSection,

    /// Catalog location.
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Cart persistence.
    #[serde(default)]
    pub carts: CartsSection,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: StoreConfig = if path.extension().map_or(false, |e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if path.extension().map_or(false, |e| e == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Reject settings the storefront cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.store.page_size < 1 {
            bail!("store.page_size must be at least 1 (got {})", self.store.page_size);
        }
        if self.catalog.path.as_os_str().is_empty() {
            bail!("catalog.path must not be empty");
        }
        Ok(())
    }
}

/// Storefront settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    /// Display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Currency all prices are in.
    #[serde(default)]
    pub currency: Currency,

    /// Products per catalog page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_store_name() -> String {
    "GameStore".to_string()
}

fn default_page_size() -> i64 {
    store_commerce::search::DEFAULT_PAGE_SIZE
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: Currency::default(),
            page_size: default_page_size(),
        }
    }
}

/// Catalog location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Path of the JSON catalog, relative to the config file.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Cart persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartsSection {
    /// Directory holding one JSON file per session.
    #[serde(default = "default_carts_dir")]
    pub dir: PathBuf,
}

fn default_carts_dir() -> PathBuf {
    PathBuf::from(".gamestore").join("carts")
}

impl Default for CartsSection {
    fn default() -> Self {
        Self {
            dir: default_carts_dir(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Minimum level written to stderr.
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Entry format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default gamestore.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# GameStore configuration

[store]
name = "{name}"
currency = "UAH"
page_size = 5

[catalog]
path = "catalog.json"

[carts]
dir = ".gamestore/carts"

[logging]
level = "warn"
format = "human"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let config: StoreConfig = toml::from_str(&generate_default_config("Shop")).unwrap();
        assert_eq!(config.store.name, "Shop");
        assert_eq!(config.store.currency, Currency::UAH);
        assert_eq!(config.store.page_size, 5);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: StoreConfig = toml::from_str("[store]\npage_size = 12\n").unwrap();
        assert_eq!(config.store.page_size, 12);
        assert_eq!(config.catalog.path, PathBuf::from("catalog.json"));
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let config: StoreConfig = toml::from_str("[store]\npage_size = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("gamestore.toml");
        std::fs::write(&toml_path, generate_default_config("A")).unwrap();
        assert_eq!(StoreConfig::load(&toml_path).unwrap().store.name, "A");

        let json_path = dir.path().join("gamestore.json");
        std::fs::write(&json_path, r#"{"store": {"name": "B", "currency": "EUR"}}"#).unwrap();
        let config = StoreConfig::load(&json_path).unwrap();
        assert_eq!(config.store.currency, Currency::EUR);
        assert_eq!(config.store.page_size, 5);
    }
}
