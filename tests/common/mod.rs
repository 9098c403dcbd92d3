// Shared helpers for the integration tests.

use mattactl::core::panel_surface::Notifier;
use std::sync::Mutex;

/// Toast double that records (severity, title, text) triples.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<(String, String, String)>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<(String, String, String)> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, title: &str, text: &str) {
        self.toasts.lock().unwrap().push((
            "success".to_string(),
            title.to_string(),
            text.to_string(),
        ));
    }

    fn error(&self, title: &str, text: &str) {
        self.toasts.lock().unwrap().push((
            "error".to_string(),
            title.to_string(),
            text.to_string(),
        ));
    }
}

/// Plugin route joined onto a wiremock server URI.
pub fn plugin_endpoint(server_uri: &str) -> String {
    format!("{}/api/plugin/mattacloud", server_uri)
}
