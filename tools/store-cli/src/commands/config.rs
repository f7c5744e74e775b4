//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context as _, Result};
use store_commerce::Currency;
use store_observability::{LogFormat, LogLevel};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StoreConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { name, force } => init_config(&name, force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("name", &ctx.config.store.name);
    ctx.output.kv("currency", ctx.config.store.currency.code());
    ctx.output.kv("page_size", &ctx.config.store.page_size.to_string());

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.catalog_path().display().to_string());

    ctx.output.info("");
    ctx.output.info("[carts]");
    ctx.output.kv("dir", &ctx.config.carts.dir.display().to_string());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level.to_string());
    ctx.output.kv("format", &ctx.config.logging.format.to_string());

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(path) = ctx.config_path.as_ref() else {
        bail!("No config file found. Run `gamestore config init` to create one.");
    };

    let mut config = StoreConfig::load(path)?;
    set_config_value(&mut config, key, value)?;
    config.validate()?;
    config.save(path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));
    Ok(())
}

async fn init_config(name: &str, force: bool, ctx: &Context) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(name))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    ctx.config.validate()?;

    let mut warnings: Vec<String> = Vec::new();
    if ctx.config.store.name.trim().is_empty() {
        warnings.push("store.name is empty".to_string());
    }
    let catalog = ctx.catalog_path();
    if !catalog.exists() {
        warnings.push(format!(
            "catalog {} does not exist yet; it will be created on first save",
            catalog.display()
        ));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }
    Ok(())
}

fn set_config_value(config: &mut StoreConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["store", "name"] => config.store.name = value.to_string(),
        ["store", "currency"] => {
            config.store.currency = Currency::from_code(value)
                .ok_or_else(|| anyhow!("Unknown currency: {}", value))?
        }
        ["store", "page_size"] => config.store.page_size = value.parse()?,
        ["catalog", "path"] => config.catalog.path = PathBuf::from(value),
        ["carts", "dir"] => config.carts.dir = PathBuf::from(value),
        ["logging", "level"] => {
            config.logging.level = value.parse::<LogLevel>().map_err(|e| anyhow!(e))?
        }
        ["logging", "format"] => {
            config.logging.format = value.parse::<LogFormat>().map_err(|e| anyhow!(e))?
        }
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}
