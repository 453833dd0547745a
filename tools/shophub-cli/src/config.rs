//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shophub_commerce::catalog::{Catalog, ProductRecord};
use shophub_commerce::money::Currency;
use shophub_commerce::session::SessionConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["shophub.toml", ".shophub.toml", "shophub.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Session behaviour.
    #[serde(default)]
    pub session: SessionConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// Where the catalog comes from.
///
/// `path` wins over inline `products`; with neither, the built-in demo
/// catalog is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog TOML file, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Currency code for prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Inline product list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<ProductRecord>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            currency: default_currency(),
            products: Vec::new(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

impl CatalogConfig {
    /// Parsed currency code.
    pub fn currency(&self) -> Result<Currency> {
        self.currency
            .parse()
            .with_context(|| format!("Invalid catalog.currency: {}", self.currency))
    }

    /// Build the catalog, resolving `path` against `base_dir`.
    pub fn build(&self, base_dir: &Path) -> Result<Catalog> {
        let currency = self.currency()?;

        if let Some(ref path) = self.path {
            let full = base_dir.join(path);
            let source = std::fs::read_to_string(&full)
                .with_context(|| format!("Failed to read catalog: {}", full.display()))?;
            return Catalog::from_toml_str(&source, currency)
                .with_context(|| format!("Invalid catalog: {}", full.display()));
        }

        if !self.products.is_empty() {
            return Catalog::from_records(self.products.clone(), currency)
                .context("Invalid inline catalog");
        }

        if currency != Currency::USD {
            tracing::warn!(%currency, "built-in catalog is priced in USD; ignoring catalog.currency");
        }
        Ok(Catalog::builtin())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Generate a commented default config file.
pub fn generate_default_config() -> String {
    r#"# ShopHub storefront configuration

[session]
# Let shoppers open checkout with an empty cart.
allow_empty_checkout = true

[catalog]
currency = "USD"
# Load products from a separate file instead of the built-in demo catalog:
# path = "catalog.toml"

# Or list them inline:
# [[catalog.products]]
# id = 1
# name = "Wireless Headphones"
# price = 79.99
# image = "https://example.com/headphones.jpg"
# description = "Premium wireless headphones"
# category = "Electronics"
"#
    .to_string()
}
