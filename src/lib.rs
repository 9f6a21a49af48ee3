pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::overlay::OverlayService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_watch(
    profile_id: Option<u64>,
    interval: Option<u64>,
    theme: Option<String>,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = build_config(interval, theme);
        let service = OverlayService::new(config, profile_id);
        service.run().await
    })
}

pub fn handle_fetch(profile_id: u64) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = OverlayService::new(AppConfig::new(), Some(profile_id));
        service.fetch_once().await
    })
}

fn build_config(interval: Option<u64>, theme: Option<String>) -> AppConfig {
    let mut config = AppConfig::new();
    if let Some(secs) = interval {
        config.overlay.sync_interval_secs = secs;
    }
    config.overlay.theme = theme;
    config
}
