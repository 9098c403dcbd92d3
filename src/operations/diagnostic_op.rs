use crate::core::view_model::SettingsSyncViewModel;
use anyhow::{bail, Result};
use clap::ArgMatches;
use futures::future::join_all;
use futures::FutureExt;
use log::{error, info};
use std::time::Instant;

struct DiagnosticResult {
    test_name: String,
    success: bool,
    details: String,
}

/// Drives the two backend checks the panel offers. Both run concurrently
/// through the same client, the way two quick button presses would.
pub async fn handle_diagnostic_cli(
    view_model: &SettingsSyncViewModel,
    _args: &ArgMatches,
) -> Result<()> {
    let overall_diag_start_time = Instant::now();
    info!("🩺 Starting panel diagnostic suite...");

    let auth_token = view_model.auth_token.get();
    let url = view_model.server_address.get();
    info!("  DIAGNOSTIC: Testing auth token and websocket against '{}'...", url);

    let checks = vec![
        view_model.test_connection(&auth_token, &url).boxed(),
        view_model.reconnect_websocket().boxed(),
    ];
    let test_names = ["Auth Token / Connectivity", "Websocket Reconnect"];

    let outcomes = join_all(checks).await;

    let mut results: Vec<DiagnosticResult> = Vec::new();
    for (test_name, outcome) in test_names.iter().zip(outcomes) {
        match outcome {
            Ok(outcome) => results.push(DiagnosticResult {
                test_name: test_name.to_string(),
                success: outcome.success,
                details: if outcome.text.is_empty() {
                    "Completed.".to_string()
                } else {
                    outcome.text
                },
            }),
            Err(e) => results.push(DiagnosticResult {
                test_name: test_name.to_string(),
                success: false,
                details: format!("Failed: {:#}", e),
            }),
        }
    }

    info!("Websocket status: {}", view_model.ws_status.get());

    info!(
        "📋 ----- Diagnostic Summary (Total Suite Time: {:?}) -----",
        overall_diag_start_time.elapsed()
    );
    let mut overall_success = true;
    for result in &results {
        let status_emoji = if result.success { "✅ PASS" } else { "❌ FAIL" };
        info!(
            "Test: {:<28} | Status: {:<8} | Details: {}",
            result.test_name, status_emoji, result.details
        );
        if !result.success {
            overall_success = false;
        }
    }
    info!("------------------------------------------------------------");

    if overall_success {
        info!("🎉 All diagnostic tests passed.");
        Ok(())
    } else {
        error!("🔥 One or more diagnostic tests failed. Please review logs above.");
        bail!("Diagnostic suite reported failures.")
    }
}
