//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let config = &ctx.config;
    ctx.output.header("Current Configuration");

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &config.api.base_url);
    ctx.output.kv(
        "timeout_ms",
        &config
            .api
            .timeout_ms
            .map(|t| t.to_string())
            .unwrap_or_else(|| "none".to_string()),
    );
    ctx.output.kv("currency", config.api.currency.code());

    ctx.output.info("[storage]");
    ctx.output.kv("path", &config.storage.path);
    ctx.output.kv("key", &config.storage.key);

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "fixture",
        config.catalog.fixture.as_deref().unwrap_or("none (using api)"),
    );

    ctx.output.info("[messages]");
    ctx.output.kv("stock_exceeded", &config.messages.stock_exceeded);
    ctx.output.kv("add_failed", &config.messages.add_failed);
    ctx.output.kv("remove_failed", &config.messages.remove_failed);
    ctx.output.kv("update_failed", &config.messages.update_failed);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    // --json writes storecart.json instead of the commented TOML template
    let name = if ctx.output.is_json() {
        CONFIG_NAMES[2]
    } else {
        CONFIG_NAMES[0]
    };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if ctx.output.is_json() {
        let path = ctx.resolve_path(name);
        CliConfig::default().save(&path.to_string_lossy())?;
        ctx.output
            .json(&serde_json::json!({ "created": path.display().to_string() }));
    } else {
        fs::write(&config_path, generate_default_config())?;
        ctx.output
            .success(&format!("Created: {}", config_path.display()));
    }

    Ok(())
}
