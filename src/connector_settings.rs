use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// The plugin configuration record owned by the host application. The panel
/// never persists it; every field is written back individually as the
/// matching shadow observable changes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConnectorSettings {
    pub authorization_token: String,
    pub base_url: String,
    pub upload_dir: String,
    pub enabled: bool,
    pub config_print: bool,
    pub ws_connected: bool,
    pub num_cameras: u32,
    pub snapshot_url_1: String,
    pub snapshot_url_2: String,
    pub camera_interval_1: u32,
    pub camera_interval_2: u32,
}

impl Default for ConnectorSettings {
    fn default() -> Self {
        ConnectorSettings {
            authorization_token: "e.g. w1il4li2am2ca1xt4on91".to_string(),
            base_url: "https://cloud.mattalabs.com/".to_string(),
            upload_dir: "/home/pi/.octoprint/uploads/".to_string(),
            enabled: true,
            config_print: false,
            ws_connected: false,
            num_cameras: 1,
            snapshot_url_1: "http://localhost:8080/?action=snapshot".to_string(),
            snapshot_url_2: "http://localhost:8081/?action=snapshot".to_string(),
            camera_interval_1: 3,
            camera_interval_2: 10,
        }
    }
}

/// Shared handle over the host-owned record. Clones refer to the same
/// underlying settings.
#[derive(Debug, Clone)]
pub struct SharedSettings {
    inner: Arc<Mutex<ConnectorSettings>>,
}

impl SharedSettings {
    pub fn new(settings: ConnectorSettings) -> Self {
        SharedSettings {
            inner: Arc::new(Mutex::new(settings)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ConnectorSettings> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ConnectorSettings {
        self.lock().clone()
    }

    pub fn set_authorization_token(&self, token: String) {
        self.lock().authorization_token = token;
    }

    pub fn set_base_url(&self, url: String) {
        self.lock().base_url = url;
    }

    pub fn set_upload_dir(&self, dir: String) {
        self.lock().upload_dir = dir;
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.lock().enabled = enabled;
    }

    pub fn set_config_print(&self, config_print: bool) {
        self.lock().config_print = config_print;
    }

    pub fn set_ws_connected(&self, connected: bool) {
        self.lock().ws_connected = connected;
    }

    pub fn set_num_cameras(&self, num: u32) {
        self.lock().num_cameras = num;
    }

    pub fn set_snapshot_url_1(&self, url: String) {
        self.lock().snapshot_url_1 = url;
    }

    pub fn set_snapshot_url_2(&self, url: String) {
        self.lock().snapshot_url_2 = url;
    }

    pub fn set_camera_interval_1(&self, interval: u32) {
        self.lock().camera_interval_1 = interval;
    }

    pub fn set_camera_interval_2(&self, interval: u32) {
        self.lock().camera_interval_2 = interval;
    }
}

impl Default for SharedSettings {
    fn default() -> Self {
        SharedSettings::new(ConnectorSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plugin_settings() {
        let settings = ConnectorSettings::default();
        assert!(settings.enabled);
        assert!(!settings.config_print);
        assert!(!settings.ws_connected);
        assert_eq!(settings.base_url, "https://cloud.mattalabs.com/");
        assert_eq!(settings.upload_dir, "/home/pi/.octoprint/uploads/");
        assert_eq!(settings.num_cameras, 1);
        assert_eq!(settings.camera_interval_1, 3);
        assert_eq!(settings.camera_interval_2, 10);
        assert_eq!(settings.snapshot_url_1, "http://localhost:8080/?action=snapshot");
        assert_eq!(settings.snapshot_url_2, "http://localhost:8081/?action=snapshot");
    }

    #[test]
    fn shared_handle_writes_are_visible_to_clones() {
        let shared = SharedSettings::default();
        let other = shared.clone();

        shared.set_authorization_token("tok-123".to_string());
        shared.set_num_cameras(2);
        shared.set_enabled(false);

        let snapshot = other.snapshot();
        assert_eq!(snapshot.authorization_token, "tok-123");
        assert_eq!(snapshot.num_cameras, 2);
        assert!(!snapshot.enabled);
    }

    #[test]
    fn partial_yaml_fills_remaining_fields_from_defaults() {
        let settings: ConnectorSettings =
            serde_yaml::from_str("authorization_token: \"abc\"\nnum_cameras: 0\n")
                .expect("partial connector settings should parse");
        assert_eq!(settings.authorization_token, "abc");
        assert_eq!(settings.num_cameras, 0);
        assert_eq!(settings.base_url, "https://cloud.mattalabs.com/");
        assert!(settings.enabled);
    }
}
