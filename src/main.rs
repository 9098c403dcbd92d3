use anyhow::{bail, Context, Result};
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Instant;

use mattactl::cli;
use mattactl::common::logging_setup;
use mattactl::config_loader;
use mattactl::connector::api_client::{ConnectorApi, HttpConnectorApi};
use mattactl::connector_settings::SharedSettings;
use mattactl::core::panel_surface::{LogNotifier, Notifier, PanelSurface};
use mattactl::core::view_model::{LoginState, SettingsSyncViewModel};
use mattactl::operations;

#[tokio::main]
async fn main() -> Result<()> {
    let main_start_time = Instant::now();
    // Parse CLI arguments early for potential use in logging or config path
    let matches = cli::build_cli().get_matches();

    // Determine the configuration file path
    let config_path = matches
        .get_one::<String>("config")
        .map(|s| s.as_str())
        .unwrap_or("config/mattactl.yaml");

    debug!("Attempting to load configuration from: {}", config_path);
    let config_load_start_time = Instant::now();
    let master_config = match config_loader::load_config(config_path) {
        Ok(cfg) => {
            logging_setup::initialize_logging(Some(&cfg), &matches)
                .context("Failed to initialize logging with full config")?;
            info!(
                "✅ Full configuration loaded successfully from: {} in {:?}",
                config_path,
                config_load_start_time.elapsed()
            );
            cfg
        }
        Err(e) => {
            // Try to initialize logging with CLI args only, or defaults
            logging_setup::initialize_logging(None, &matches)
                .context("Failed to initialize logging with basic settings after config load failure")?;
            error!(
                "❌ Failed to load master configuration from '{}': {:#}. Exiting.",
                config_path, e
            );
            return Err(e.context(format!(
                "Failed to load master configuration from '{}'",
                config_path
            )));
        }
    };

    let endpoint = master_config.app_settings.plugin_endpoint();
    info!("🚀 mattactl starting against plugin endpoint {}.", endpoint);

    debug!("Initializing settings panel view-model...");
    let vm_init_start_time = Instant::now();
    let login_state = LoginState::new(master_config.app_settings.is_admin());
    let shared_settings = SharedSettings::new(master_config.connector.clone());
    let api: Arc<dyn ConnectorApi> = Arc::new(HttpConnectorApi::new(
        endpoint,
        master_config.app_settings.api_key.clone(),
    ));
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
    let surface = PanelSurface::new();
    let view_model =
        SettingsSyncViewModel::new(&login_state, shared_settings, api, notifier, surface);
    view_model.on_before_binding();
    debug!(
        "✅ View-model initialized in {:?}.",
        vm_init_start_time.elapsed()
    );

    // Dispatch based on subcommand
    if let Some(subcommand_matches) = matches.subcommand() {
        let operation_name = subcommand_matches.0;
        debug!("🎬 Dispatching to subcommand: {}", operation_name);
        let op_start_time = Instant::now();

        let op_result: Result<()> = match subcommand_matches.0 {
            "test-connection" => {
                operations::test_connection_op::handle_test_connection_cli(
                    &view_model,
                    subcommand_matches.1,
                )
                .await
            }
            "ws-reconnect" => {
                operations::ws_reconnect_op::handle_ws_reconnect_cli(
                    &view_model,
                    subcommand_matches.1,
                )
                .await
            }
            "toggle" => {
                operations::toggle_op::handle_toggle_enabled_cli(&view_model, subcommand_matches.1)
                    .await
            }
            "config-print" => {
                operations::toggle_op::handle_toggle_config_print_cli(
                    &view_model,
                    subcommand_matches.1,
                )
                .await
            }
            "status" => {
                operations::status_op::handle_status_cli(&view_model, subcommand_matches.1).await
            }
            "diag" => {
                operations::diagnostic_op::handle_diagnostic_cli(&view_model, subcommand_matches.1)
                    .await
            }
            _ => {
                let sub_cmd_name = subcommand_matches.0;
                bail!("Subcommand '{}' not implemented.", sub_cmd_name)
            }
        };

        if let Err(e) = op_result {
            error!(
                "❌ Operation '{}' failed after {:?}: {:#}",
                subcommand_matches.0,
                op_start_time.elapsed(),
                e
            );
            return Err(e);
        } else {
            info!(
                "✅ Operation '{}' completed successfully in {:?}.",
                operation_name,
                op_start_time.elapsed()
            );
        }
    } else {
        info!("🤔 No subcommand provided. Reporting panel status.");
        operations::status_op::handle_status_cli(&view_model, &matches).await?;
    }

    info!("🏁 mattactl finished in {:?}.", main_start_time.elapsed());
    Ok(())
}
