use crate::core::view_model::SettingsSyncViewModel;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{error, info, warn};
use std::time::Instant;

pub async fn handle_test_connection_cli(
    view_model: &SettingsSyncViewModel,
    args: &ArgMatches,
) -> Result<()> {
    let op_start_time = Instant::now();

    // CLI overrides mirror the form inputs; absent flags fall back to the
    // shadow values populated from the shared settings.
    let auth_token = args
        .get_one::<String>("token")
        .cloned()
        .unwrap_or_else(|| view_model.auth_token.get());
    let url = args
        .get_one::<String>("url")
        .cloned()
        .unwrap_or_else(|| view_model.server_address.get());

    info!("🔑 Testing connection to '{}'...", url);
    match view_model.test_connection(&auth_token, &url).await {
        Ok(outcome) if outcome.success => {
            info!(
                "✅ Connection test passed in {:?}: {}",
                op_start_time.elapsed(),
                outcome.text
            );
            Ok(())
        }
        Ok(outcome) => {
            warn!(
                "⚠️ Connection test rejected by the backend in {:?}: {}",
                op_start_time.elapsed(),
                outcome.text
            );
            Ok(())
        }
        Err(e) => {
            error!(
                "❌ Connection test got no response after {:?}: {:#}. The test spinner stays visible until a response arrives.",
                op_start_time.elapsed(),
                e
            );
            Err(e).context("test_auth_token command failed")
        }
    }
}
