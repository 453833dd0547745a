//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shophub_commerce::catalog::Catalog;
use shophub_commerce::session::Session;

use crate::config::{ShopConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// File the config was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or by searching upward.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (ShopConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            },
        };

        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(ShopConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if !config_path.exists() {
                    continue;
                }
                match ShopConfig::load(&config_path) {
                    Ok(config) => return Some((config, config_path)),
                    Err(e) => tracing::warn!("Skipping {}: {e:#}", config_path.display()),
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory relative catalog paths are resolved against.
    pub fn config_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Build the configured catalog.
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        let catalog = self.config.catalog.build(&self.config_dir())?;
        tracing::debug!(products = catalog.len(), currency = %catalog.currency(), "catalog ready");
        Ok(Arc::new(catalog))
    }

    /// Start a fresh session on the login page.
    pub fn new_session(&self) -> Result<Session> {
        Ok(Session::with_config(
            self.catalog()?,
            self.config.session.clone(),
        ))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
