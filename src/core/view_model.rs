use crate::connector::api_client::ConnectorApi;
use crate::connector::commands::CommandOutcome;
use crate::connector_settings::SharedSettings;
use crate::core::observable::Observable;
use crate::core::panel_surface::{Notifier, PanelSurface};
use crate::errors::AppError;
use log::{debug, info};
use std::sync::Arc;

pub const WS_STATUS_CONNECTED: &str = "Connected to the mattacloud.";
pub const WS_STATUS_DISCONNECTED: &str = "Disconnected.";

const NOTIFY_TITLE: &str = "Connection";

/// Login/session context. Only answers whether the current user is an
/// administrator; the panel reads it once at construction.
#[derive(Debug, Clone, Copy)]
pub struct LoginState {
    admin: bool,
}

impl LoginState {
    pub fn new(admin: bool) -> Self {
        LoginState { admin }
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }
}

/// Bridges the host-owned `ConnectorSettings` record and the panel controls.
///
/// Each record field has a shadow observable. The shadows are populated once
/// by `on_before_binding` and from then on every write to a shadow lands in
/// the shared record immediately, with no validation and no rollback. The
/// `num_cameras` shadow additionally drives camera sub-panel visibility.
pub struct SettingsSyncViewModel {
    settings: SharedSettings,
    api: Arc<dyn ConnectorApi>,
    notifier: Arc<dyn Notifier>,
    surface: PanelSurface,

    pub auth_token: Observable<String>,
    pub server_address: Observable<String>,
    pub upload_dir: Observable<String>,
    pub enabled: Observable<bool>,
    pub config_print: Observable<bool>,
    pub ws_connected: Observable<bool>,
    pub num_cameras: Observable<u32>,
    pub snapshot_url_1: Observable<String>,
    pub snapshot_url_2: Observable<String>,
    pub camera_interval_1: Observable<u32>,
    pub camera_interval_2: Observable<u32>,

    pub is_admin: Observable<bool>,
    pub ws_status: Observable<String>,
}

impl SettingsSyncViewModel {
    /// Collaborators are injected in the order the host hands them over:
    /// login context first, then the settings context, then the backend
    /// client, toast surface and panel surface.
    pub fn new(
        login: &LoginState,
        settings: SharedSettings,
        api: Arc<dyn ConnectorApi>,
        notifier: Arc<dyn Notifier>,
        surface: PanelSurface,
    ) -> Self {
        let view_model = SettingsSyncViewModel {
            settings,
            api,
            notifier,
            surface,
            auth_token: Observable::new(String::new()),
            server_address: Observable::new(String::new()),
            upload_dir: Observable::new(String::new()),
            enabled: Observable::new(false),
            config_print: Observable::new(false),
            ws_connected: Observable::new(false),
            num_cameras: Observable::new(0),
            snapshot_url_1: Observable::new(String::new()),
            snapshot_url_2: Observable::new(String::new()),
            camera_interval_1: Observable::new(0),
            camera_interval_2: Observable::new(0),
            is_admin: Observable::new(login.is_admin()),
            ws_status: Observable::new(String::new()),
        };
        view_model.wire_subscriptions();
        view_model
    }

    /// Registers the write-through listeners. Every shadow except
    /// `ws_status` and `is_admin` copies its new value straight into the
    /// shared record on change.
    fn wire_subscriptions(&self) {
        let settings = self.settings.clone();
        self.auth_token
            .subscribe(move |token| settings.set_authorization_token(token.clone()));

        let settings = self.settings.clone();
        self.server_address
            .subscribe(move |url| settings.set_base_url(url.clone()));

        let settings = self.settings.clone();
        self.upload_dir
            .subscribe(move |dir| settings.set_upload_dir(dir.clone()));

        let settings = self.settings.clone();
        self.enabled
            .subscribe(move |enabled| settings.set_enabled(*enabled));

        let settings = self.settings.clone();
        self.config_print
            .subscribe(move |config_print| settings.set_config_print(*config_print));

        let settings = self.settings.clone();
        self.ws_connected
            .subscribe(move |connected| settings.set_ws_connected(*connected));

        let settings = self.settings.clone();
        let surface = self.surface.clone();
        self.num_cameras.subscribe(move |num_cams| {
            settings.set_num_cameras(*num_cams);
            match num_cams {
                0 => surface.set_camera_panels(false, false),
                1 => surface.set_camera_panels(true, false),
                2 => surface.set_camera_panels(true, true),
                _ => {}
            }
        });

        let settings = self.settings.clone();
        self.snapshot_url_1
            .subscribe(move |url| settings.set_snapshot_url_1(url.clone()));

        let settings = self.settings.clone();
        self.snapshot_url_2
            .subscribe(move |url| settings.set_snapshot_url_2(url.clone()));

        let settings = self.settings.clone();
        self.camera_interval_1
            .subscribe(move |interval| settings.set_camera_interval_1(*interval));

        let settings = self.settings.clone();
        self.camera_interval_2
            .subscribe(move |interval| settings.set_camera_interval_2(*interval));
    }

    /// Host-invoked once, after the panel exists and before bindings go
    /// live. Copies the current record into the shadows and derives the
    /// initial websocket status line.
    pub fn on_before_binding(&self) {
        debug!("Populating shadow observables from the shared settings record.");
        let snapshot = self.settings.snapshot();
        self.auth_token.set(snapshot.authorization_token);
        self.server_address.set(snapshot.base_url);
        self.upload_dir.set(snapshot.upload_dir);
        self.config_print.set(snapshot.config_print);
        self.enabled.set(snapshot.enabled);
        self.ws_connected.set(snapshot.ws_connected);
        self.num_cameras.set(snapshot.num_cameras);
        self.camera_interval_1.set(snapshot.camera_interval_1);
        self.camera_interval_2.set(snapshot.camera_interval_2);
        self.snapshot_url_1.set(snapshot.snapshot_url_1);
        self.snapshot_url_2.set(snapshot.snapshot_url_2);
        self.update_status_text();
    }

    fn update_status_text(&self) {
        let status_text = if self.ws_connected.get() {
            WS_STATUS_CONNECTED
        } else {
            WS_STATUS_DISCONNECTED
        };
        self.ws_status.set(status_text.to_string());
    }

    pub fn surface(&self) -> &PanelSurface {
        &self.surface
    }

    /// Navbar label derived from the enabled/config-print shadows.
    pub fn enabled_label(&self) -> String {
        if self.enabled.get() {
            if self.config_print.get() {
                return "Mattacloud - Running (Config Print)".to_string();
            }
            return "Mattacloud - Running".to_string();
        }
        "Mattacloud - Disabled".to_string()
    }

    /// Status-tab line derived from the same pair of shadows.
    pub fn status_label(&self) -> String {
        if self.enabled.get() {
            if self.config_print.get() {
                return "Mattacloud is enabled, idle and set to run a configuration print."
                    .to_string();
            }
            return "Mattacloud is enabled and idle.".to_string();
        }
        "Mattacloud is disabled.".to_string()
    }

    /// Sends `test_auth_token` with the given credentials and surfaces the
    /// backend verdict as a toast. The spinner is hidden once a response
    /// arrives; a transport failure propagates and leaves it visible.
    pub async fn test_connection(
        &self,
        auth_token: &str,
        url: &str,
    ) -> Result<CommandOutcome, AppError> {
        self.surface.show_test_spinner();
        let outcome = self.api.test_auth_token(auth_token, url).await?;
        if outcome.success {
            self.notifier.success(NOTIFY_TITLE, &outcome.text);
        } else {
            self.notifier.error(NOTIFY_TITLE, &outcome.text);
        }
        self.surface.hide_test_spinner();
        Ok(outcome)
    }

    /// Sends `ws_reconnect`, toasts the verdict and records the resulting
    /// status line in `ws_status`.
    pub async fn reconnect_websocket(&self) -> Result<CommandOutcome, AppError> {
        self.surface.show_reconnect_spinner();
        let outcome = self.api.ws_reconnect().await?;
        let status = if outcome.success {
            self.notifier.success(NOTIFY_TITLE, &outcome.text);
            WS_STATUS_CONNECTED
        } else {
            self.notifier.error(NOTIFY_TITLE, &outcome.text);
            WS_STATUS_DISCONNECTED
        };
        self.surface.hide_reconnect_spinner();
        self.ws_status.set(status.to_string());
        Ok(outcome)
    }

    /// Sends `set_enabled` and adopts whatever enabled state the backend
    /// reports back.
    pub async fn toggle_enabled(&self) -> Result<bool, AppError> {
        debug!("Toggling mattacloud.");
        let state = self.api.set_enabled().await?;
        info!("Enabled {}", state.enabled);
        self.enabled.set(state.enabled);
        Ok(state.enabled)
    }

    /// Sends `set_config_print` and adopts the reported scheduling state.
    pub async fn toggle_config_print(&self) -> Result<bool, AppError> {
        debug!("Config Print");
        let state = self.api.set_config_print().await?;
        info!("Config {}", state.config_print_enabled);
        self.config_print.set(state.config_print_enabled);
        Ok(state.config_print_enabled)
    }
}
