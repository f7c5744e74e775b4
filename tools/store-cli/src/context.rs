//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store_commerce::prelude::*;
use store_observability::{LogLevel, RequestId, StructuredLogger};

use crate::config::StoreConfig;
use crate::output::Output;

/// Names searched for when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["gamestore.toml", ".gamestore.toml", "gamestore.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// Output handler.
    pub output: Output,
    /// Logger for this invocation.
    pub logger: StructuredLogger,
    /// Directory relative paths in the config resolve against.
    pub root: PathBuf,
    /// Config file in use, if one was found.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, root, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, Path::new(path));
                let root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                (StoreConfig::load(&path)?, root, Some(path))
            }
            None => match Self::find_config(&cwd)? {
                Some((config, path)) => {
                    let root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                    (config, root, Some(path))
                }
                None => (StoreConfig::default(), cwd.clone(), None),
            },
        };

        let level = if output.is_verbose() {
            LogLevel::Debug
        } else {
            config.logging.level
        };
        let logger = StructuredLogger::new(RequestId::generate())
            .with_min_level(level)
            .with_format(config.logging.format);

        Ok(Self {
            config,
            output,
            logger,
            root,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Result<Option<(StoreConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = StoreConfig::load(&config_path)?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Location of the catalog file.
    pub fn catalog_path(&self) -> PathBuf {
        resolve(&self.root, &self.config.catalog.path)
    }

    /// Location of a session's cart file.
    pub fn cart_path(&self, session: &SessionId) -> Result<PathBuf> {
        validate_session(session)?;
        Ok(resolve(&self.root, &self.config.carts.dir).join(format!("{}.json", session)))
    }

    /// Open the catalog file as a repository.
    pub async fn open_catalog(&self) -> Result<JsonFileRepository> {
        let path = self.catalog_path();
        self.output.debug(&format!("Catalog: {}", path.display()));

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(JsonFileRepository::open(&path)?);
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        JsonFileRepository::from_contents(&path, &content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))
    }

    /// Storefront over the catalog file, configured from the store settings.
    pub async fn storefront(&self) -> Result<Storefront<JsonFileRepository>> {
        Ok(Storefront::new(self.open_catalog().await?)
            .with_page_size(self.config.store.page_size)?
            .with_logger(self.logger.clone()))
    }

    /// Admin service over the catalog file.
    pub async fn admin(&self) -> Result<Admin<JsonFileRepository>> {
        Ok(Admin::new(self.open_catalog().await?, self.config.store.currency)
            .with_logger(self.logger.clone()))
    }

    /// Read a session's saved cart into `sessions`.
    pub async fn load_cart(&self, sessions: &CartSessions, session: &SessionId) -> Result<()> {
        let path = self.cart_path(session)?;
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read cart: {}", path.display()))?;
        let saved: SavedCart = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse cart: {}", path.display()))?;
        if saved.cart.currency() != self.config.store.currency {
            bail!(
                "Cart {} is priced in {}, but the store uses {}",
                path.display(),
                saved.cart.currency(),
                self.config.store.currency
            );
        }
        sessions.restore(session.clone(), saved.cart)?;
        Ok(())
    }

    /// Write a session's cart back to disk.
    pub async fn save_cart(&self, sessions: &CartSessions, session: &SessionId) -> Result<()> {
        let path = self.cart_path(session)?;
        let Some(cart) = sessions.get(session)? else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let saved = SavedCart {
            session: session.clone(),
            updated_at: Utc::now(),
            cart,
        };
        tokio::fs::write(&path, serde_json::to_string_pretty(&saved)?)
            .await
            .with_context(|| format!("Failed to write cart: {}", path.display()))
    }
}

/// A cart as persisted between invocations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedCart {
    /// Owning session.
    pub session: SessionId,
    /// When the cart was last written.
    pub updated_at: DateTime<Utc>,
    /// Cart contents.
    pub cart: Cart,
}

/// Session ids become file names, so only a safe alphabet is accepted.
fn validate_session(session: &SessionId) -> Result<()> {
    let id = session.as_str();
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        bail!("Invalid session id '{}': use letters, digits, '-' or '_'", id);
    }
    Ok(())
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_alphabet() {
        assert!(validate_session(&SessionId::new("alice-01_x")).is_ok());
        assert!(validate_session(&SessionId::new("../etc")).is_err());
        assert!(validate_session(&SessionId::new("")).is_err());
    }

    #[test]
    fn test_saved_cart_with_invalid_line_is_rejected() {
        let saved = r#"{
            "session": "alice",
            "updated_at": "2026-10-19T12:00:00Z",
            "cart": {
                "currency": "UAH",
                "lines": [{
                    "product": {
                        "id": 1,
                        "name": "Doom",
                        "price": {"amount_cents": 100, "currency": "UAH"}
                    },
                    "quantity": 0
                }]
            }
        }"#;
        assert!(serde_json::from_str::<SavedCart>(saved).is_err());

        let fixed = saved.replace("\"quantity\": 0", "\"quantity\": 2");
        let cart = serde_json::from_str::<SavedCart>(&fixed).unwrap().cart;
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_resolve() {
        let base = Path::new("/srv/store");
        assert_eq!(resolve(base, Path::new("catalog.json")), base.join("catalog.json"));
        assert_eq!(resolve(base, Path::new("/tmp/c.json")), PathBuf::from("/tmp/c.json"));
    }
}
