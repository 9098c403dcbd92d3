use crate::common::timestamp_utils;
use crate::core::view_model::SettingsSyncViewModel;
use anyhow::Result;
use clap::ArgMatches;
use log::info;

/// Reports the derived panel state. Touches no network.
pub async fn handle_status_cli(
    view_model: &SettingsSyncViewModel,
    _args: &ArgMatches,
) -> Result<()> {
    let timestamp = timestamp_utils::current_local_timestamp_str("%Y-%m-%d %H:%M:%S");
    info!("📋 Panel status as of {}:", timestamp);
    info!("  Navbar:     {}", view_model.enabled_label());
    info!("  Status tab: {}", view_model.status_label());
    info!("  Websocket:  {}", view_model.ws_status.get());
    info!(
        "  User:       {}",
        if view_model.is_admin.get() {
            "administrator"
        } else {
            "not an administrator"
        }
    );

    let (camera_1, camera_2) = view_model.surface().camera_panels_visible();
    info!(
        "  Cameras:    {} configured (intervals {}s / {}s)",
        view_model.num_cameras.get(),
        view_model.camera_interval_1.get(),
        view_model.camera_interval_2.get()
    );
    info!(
        "  Sub-panels: camera 1 {}, camera 2 {}",
        if camera_1 { "shown" } else { "hidden" },
        if camera_2 { "shown" } else { "hidden" }
    );
    Ok(())
}
