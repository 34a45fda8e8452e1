//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Catalog section
    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in)"),
    );
    ctx.output.kv("currency", &ctx.config.catalog.currency);

    // Filters section
    ctx.output.info("");
    ctx.output.info("[filters]");
    ctx.output.kv("min_price", &ctx.config.filters.min_price.to_string());
    ctx.output.kv("max_price", &ctx.config.filters.max_price.to_string());

    // Logging section
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("format", &ctx.config.logging.format.to_string());
    ctx.output
        .kv("level", &ctx.config.logging.level.to_string().to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    // Check currency
    let currency = match ctx.config.currency() {
        Ok(currency) => Some(currency),
        Err(e) => {
            errors.push(format!("{:#}", e));
            None
        }
    };

    // Check price range
    if let Some(currency) = currency {
        if let Err(e) = ctx.config.price_range(currency) {
            errors.push(format!("filters: {:#}", e));
        }
    }
    if ctx.config.filters.min_price < 0.0 {
        warnings.push("filters.min_price is negative; no product costs less than 0".to_string());
    }

    // Check catalog
    if currency.is_some() {
        match ctx.catalog() {
            Ok(catalog) if catalog.is_empty() => {
                warnings.push("catalog has no products".to_string());
            }
            Ok(catalog) => {
                ctx.output
                    .debug(&format!("Catalog: {} products", catalog.len()));
            }
            Err(e) => errors.push(format!("{:#}", e)),
        }
    }

    // Print results
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
