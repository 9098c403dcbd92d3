use log::{error, info};
use std::sync::{Arc, Mutex, PoisonError};

/// Visibility state of the panel controls the view-model drives: the two
/// operation spinners and the two camera sub-panels. This is the panel's DOM
/// surface rendered as data; a UI layer subscribes to it or polls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub test_spinner_visible: bool,
    pub reconnect_spinner_visible: bool,
    pub camera_panel_1_visible: bool,
    pub camera_panel_2_visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        // Markup default: spinners hidden, both camera sub-panels present
        // until the first num_cameras change says otherwise.
        PanelState {
            test_spinner_visible: false,
            reconnect_spinner_visible: false,
            camera_panel_1_visible: true,
            camera_panel_2_visible: true,
        }
    }
}

/// Cloneable handle over the panel-control state.
#[derive(Debug, Clone, Default)]
pub struct PanelSurface {
    inner: Arc<Mutex<PanelState>>,
}

impl PanelSurface {
    pub fn new() -> Self {
        PanelSurface::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PanelState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> PanelState {
        *self.lock()
    }

    pub fn show_test_spinner(&self) {
        self.lock().test_spinner_visible = true;
    }

    pub fn hide_test_spinner(&self) {
        self.lock().test_spinner_visible = false;
    }

    pub fn test_spinner_visible(&self) -> bool {
        self.lock().test_spinner_visible
    }

    pub fn show_reconnect_spinner(&self) {
        self.lock().reconnect_spinner_visible = true;
    }

    pub fn hide_reconnect_spinner(&self) {
        self.lock().reconnect_spinner_visible = false;
    }

    pub fn reconnect_spinner_visible(&self) -> bool {
        self.lock().reconnect_spinner_visible
    }

    pub fn set_camera_panels(&self, first: bool, second: bool) {
        let mut state = self.lock();
        state.camera_panel_1_visible = first;
        state.camera_panel_2_visible = second;
    }

    pub fn camera_panels_visible(&self) -> (bool, bool) {
        let state = self.lock();
        (state.camera_panel_1_visible, state.camera_panel_2_visible)
    }
}

/// Toast surface. The original panel raised PNotify toasts with a title,
/// message and severity; a headless host raises them through the log.
pub trait Notifier: Send + Sync {
    fn success(&self, title: &str, text: &str);
    fn error(&self, title: &str, text: &str);
}

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, title: &str, text: &str) {
        info!("🔔 [{}] {}", title, text);
    }

    fn error(&self, title: &str, text: &str) {
        error!("🔔 [{}] {}", title, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_hides_spinners_and_shows_camera_panels() {
        let surface = PanelSurface::new();
        let state = surface.state();
        assert!(!state.test_spinner_visible);
        assert!(!state.reconnect_spinner_visible);
        assert!(state.camera_panel_1_visible);
        assert!(state.camera_panel_2_visible);
    }

    #[test]
    fn spinner_toggles_round_trip() {
        let surface = PanelSurface::new();
        surface.show_test_spinner();
        surface.show_reconnect_spinner();
        assert!(surface.test_spinner_visible());
        assert!(surface.reconnect_spinner_visible());

        surface.hide_test_spinner();
        surface.hide_reconnect_spinner();
        assert!(!surface.test_spinner_visible());
        assert!(!surface.reconnect_spinner_visible());
    }

    #[test]
    fn camera_panel_state_is_shared_across_clones() {
        let surface = PanelSurface::new();
        let handle = surface.clone();
        handle.set_camera_panels(true, false);
        assert_eq!(surface.camera_panels_visible(), (true, false));
    }
}
