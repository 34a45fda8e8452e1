//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use shop_commerce::{catalog::Catalog, Currency};

use crate::config::{ShopConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (ShopConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
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
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = ShopConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        let currency = self.config.currency()?;

        let Some(path) = &self.config.catalog.path else {
            if currency != Currency::USD {
                bail!(
                    "The built-in catalog is priced in USD; set catalog.path to use {}",
                    currency
                );
            }
            return Ok(Catalog::builtin());
        };

        let path = self.resolve_config_relative(path);
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Catalog::from_json(&json, currency)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;

        self.output.debug(&format!(
            "Loaded {} products from {}",
            catalog.len(),
            path.display()
        ));
        Ok(catalog)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Resolve a path relative to the config file's directory.
    fn resolve_config_relative(&self, path: &str) -> PathBuf {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty());

        match base {
            Some(dir) if !Path::new(path).is_absolute() => {
                self.resolve_path(&dir.join(path).to_string_lossy())
            }
            _ => self.resolve_path(path),
        }
    }
}
