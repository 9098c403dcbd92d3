use crate::core::view_model::SettingsSyncViewModel;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use std::time::Instant;

pub async fn handle_toggle_enabled_cli(
    view_model: &SettingsSyncViewModel,
    _args: &ArgMatches,
) -> Result<()> {
    let op_start_time = Instant::now();
    info!("🔁 Toggling the Mattacloud integration...");

    let enabled = view_model
        .toggle_enabled()
        .await
        .context("set_enabled command failed")?;

    let emoji = if enabled { "💡" } else { "🔌" };
    info!(
        "{} Mattacloud is now {} (took {:?}).",
        emoji,
        if enabled { "enabled" } else { "disabled" },
        op_start_time.elapsed()
    );
    info!("Navbar label: {}", view_model.enabled_label());
    info!("Status: {}", view_model.status_label());
    Ok(())
}

pub async fn handle_toggle_config_print_cli(
    view_model: &SettingsSyncViewModel,
    _args: &ArgMatches,
) -> Result<()> {
    let op_start_time = Instant::now();
    info!("🔁 Toggling the configuration print schedule...");

    let config_print = view_model
        .toggle_config_print()
        .await
        .context("set_config_print command failed")?;

    info!(
        "🖨️ Configuration print is now {} (took {:?}).",
        if config_print { "scheduled" } else { "not scheduled" },
        op_start_time.elapsed()
    );
    info!("Status: {}", view_model.status_label());
    Ok(())
}
