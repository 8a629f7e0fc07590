//! CLI command handlers

use anyhow::{Context, Result};
use clap::Args;
use pushrelay_core::delivery::pretty::pretty_markup;
use pushrelay_core::models::{RelayConfig, UserTarget};
use pushrelay_core::providers::{ApplicationRegistry, StaticApplicationRegistry};
use pushrelay_core::services::logging::{init_logging, OPERATIONAL_TARGET};
use pushrelay_core::{DeliveryOutcome, Dispatcher};
use std::path::PathBuf;

/// Recipient mailbox given on the command line
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// End-user id
    #[arg(long)]
    pub user: String,

    /// Service id the user is reached through
    #[arg(long)]
    pub service: String,

    /// Transport protocol of the user's messenger
    #[arg(long)]
    pub protocol: String,

    /// Domain of the application (must be listed in the configuration)
    #[arg(long)]
    pub domain: String,

    /// Page language
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Return URL embedded in the page
    #[arg(long, default_value = "")]
    pub back_url: String,
}

fn resolve_config_path(config_file: Option<PathBuf>) -> Result<PathBuf> {
    match config_file {
        Some(path) => Ok(path),
        None => RelayConfig::default_config_path().context("Failed to get default config path"),
    }
}

fn load_config(config_file: Option<PathBuf>) -> Result<RelayConfig> {
    let path = resolve_config_path(config_file)?;
    let config = RelayConfig::load_from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn resolve_target(config: &RelayConfig, args: TargetArgs) -> Result<UserTarget> {
    let registry = StaticApplicationRegistry::from_config(config);
    let application = registry
        .get_application(&args.domain)
        .context("Unknown application domain")?;

    Ok(UserTarget {
        user_id: args.user,
        service_id: args.service,
        protocol: args.protocol,
        language: args.language,
        back_page_url: args.back_url,
        application,
    })
}

/// Handle the 'push' command
pub async fn handle_push(
    config_file: Option<PathBuf>,
    message: String,
    target: TargetArgs,
) -> Result<()> {
    let config = load_config(config_file)?;
    init_logging(config.log_level)
        .map_err(|e| anyhow::anyhow!("Failed to init logging: {}", e))?;

    let target = resolve_target(&config, target)?;
    if !target.is_addressable() {
        anyhow::bail!("Push target needs a non-empty --user and --service");
    }
    let dispatcher = Dispatcher::with_http(config).context("Failed to create HTTP transport")?;

    match dispatcher.push(&target, &message).await {
        DeliveryOutcome::Delivered => {
            println!("✅ Delivered to user {} via {}", target.user_id, target.service_id);
            Ok(())
        }
        DeliveryOutcome::Rejected { status } => {
            tracing::error!(
                target: OPERATIONAL_TARGET,
                user_id = %target.user_id,
                service_id = %target.service_id,
                protocol = %target.protocol,
                status,
                "push rejected"
            );
            anyhow::bail!("Push rejected with status {}", status)
        }
        DeliveryOutcome::TransportFailure(e) => {
            Err(anyhow::Error::new(e).context("Push request failed"))
        }
    }
}

/// Handle the 'render' command
pub fn handle_render(
    config_file: Option<PathBuf>,
    message: String,
    target: TargetArgs,
) -> Result<()> {
    let config = load_config(config_file)?;
    let target = resolve_target(&config, target)?;
    let dispatcher = Dispatcher::with_http(config).context("Failed to create HTTP transport")?;

    let document = dispatcher.build_document(&target, &message);
    println!("{}", pretty_markup(&document));
    println!();
    println!("{}", dispatcher.build_push_url(&target, &message));
    Ok(())
}

/// Handle the 'config --init' command
pub fn handle_config_init(config_file: Option<PathBuf>) -> Result<()> {
    let path = resolve_config_path(config_file)?;
    if path.exists() {
        anyhow::bail!("Configuration file already exists: {}", path.display());
    }

    RelayConfig::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("📄 Wrote default configuration to {}", path.display());
    Ok(())
}
