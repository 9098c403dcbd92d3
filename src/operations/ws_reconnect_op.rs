use crate::core::view_model::SettingsSyncViewModel;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{error, info, warn};
use std::time::Instant;

pub async fn handle_ws_reconnect_cli(
    view_model: &SettingsSyncViewModel,
    _args: &ArgMatches,
) -> Result<()> {
    let op_start_time = Instant::now();
    info!("🔌 Requesting a websocket reconnect from the plugin...");

    match view_model.reconnect_websocket().await {
        Ok(outcome) => {
            if outcome.success {
                info!(
                    "✅ Websocket reconnect completed in {:?}: {}",
                    op_start_time.elapsed(),
                    outcome.text
                );
            } else {
                warn!(
                    "⚠️ Websocket reconnect rejected in {:?}: {}",
                    op_start_time.elapsed(),
                    outcome.text
                );
            }
            info!("Websocket status: {}", view_model.ws_status.get());
            Ok(())
        }
        Err(e) => {
            error!(
                "❌ Websocket reconnect got no response after {:?}: {:#}. The reconnect spinner stays visible until a response arrives.",
                op_start_time.elapsed(),
                e
            );
            Err(e).context("ws_reconnect command failed")
        }
    }
}
