//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use shophub_commerce::catalog::ALL_CATEGORIES;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ShopConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[session]");
    ctx.output.kv(
        "allow_empty_checkout",
        &ctx.config.session.allow_empty_checkout.to_string(),
    );

    ctx.output.info("[catalog]");
    ctx.output.kv("currency", &ctx.config.catalog.currency);
    match ctx.config.catalog.path {
        Some(ref path) => ctx.output.kv("path", &path.display().to_string()),
        None if ctx.config.catalog.products.is_empty() => ctx.output.kv("source", "built-in"),
        None => ctx.output.kv(
            "products",
            &format!("{} inline", ctx.config.catalog.products.len()),
        ),
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(ref config_path) = ctx.config_path else {
        bail!("No config file found. Run `shophub config init` to create one.");
    };

    let mut config = ShopConfig::load(config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config, &ctx.config_dir());

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect config errors and warnings without stopping at the first one.
fn check_config(config: &ShopConfig, base_dir: &std::path::Path) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let catalog = &config.catalog;

    if let Err(e) = catalog.currency() {
        errors.push(format!("{e:#}"));
    }

    if catalog.path.is_some() && !catalog.products.is_empty() {
        warnings.push("catalog.path is set, so inline catalog.products are ignored".to_string());
    }

    match catalog.build(base_dir) {
        Ok(built) => {
            if built.is_empty() {
                warnings.push("catalog has no products".to_string());
            }
            if built.list_products().iter().any(|p| p.category == ALL_CATEGORIES) {
                warnings.push(format!(
                    "a product uses the reserved category \"{ALL_CATEGORIES}\""
                ));
            }
        }
        Err(e) if errors.is_empty() => errors.push(format!("{e:#}")),
        Err(_) => {}
    }

    (errors, warnings)
}

fn get_config_value(config: &ShopConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["session", "allow_empty_checkout"] => Ok(config.session.allow_empty_checkout.to_string()),
        ["catalog", "currency"] => Ok(format!("\"{}\"", config.catalog.currency)),
        ["catalog", "path"] => Ok(config
            .catalog
            .path
            .as_ref()
            .map(|p| format!("\"{}\"", p.display()))
            .unwrap_or_else(|| "null".to_string())),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut ShopConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["session", "allow_empty_checkout"] => config.session.allow_empty_checkout = value.parse()?,
        ["catalog", "currency"] => {
            config.catalog.currency = value.to_uppercase();
            config.catalog.currency()?;
        }
        ["catalog", "path"] => config.catalog.path = Some(PathBuf::from(value)),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_values() {
        let mut config = ShopConfig::default();
        assert_eq!(get_config_value(&config, "catalog.currency").unwrap(), "\"USD\"");
        assert_eq!(get_config_value(&config, "catalog.path").unwrap(), "null");

        set_config_value(&mut config, "session.allow_empty_checkout", "false").unwrap();
        set_config_value(&mut config, "catalog.currency", "gbp").unwrap();
        assert!(!config.session.allow_empty_checkout);
        assert_eq!(config.catalog.currency, "GBP");

        assert!(set_config_value(&mut config, "catalog.currency", "XYZ").is_err());
        assert!(set_config_value(&mut config, "session.allow_empty_checkout", "maybe").is_err());
        assert!(get_config_value(&config, "display.theme").is_err());
    }

    #[test]
    fn test_check_defaults_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let (errors, warnings) = check_config(&ShopConfig::default(), dir.path());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_check_reports_broken_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("catalog.toml"),
            "[[products]]\nid = 1\nname = \"A\"\nprice = 1\ncategory = \"X\"\n\
             [[products]]\nid = 1\nname = \"B\"\nprice = 2\ncategory = \"Y\"\n",
        )
        .unwrap();

        let mut config = ShopConfig::default();
        config.catalog.path = Some(PathBuf::from("catalog.toml"));
        let (errors, _) = check_config(&config, dir.path());

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Duplicate product id: 1"), "{}", errors[0]);
    }
}
