use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationConfig {
    pub octoprint_url: String, // base URL of the OctoPrint host serving the plugin API
    pub api_key: Option<String>, // X-Api-Key header value; None rides an open local install
    pub admin: Option<bool>, // login context: is the current user an administrator
    pub log_level: Option<String>, // Making it optional to potentially use CLI flag as primary
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            octoprint_url: "http://localhost:5000".to_string(),
            api_key: None,
            admin: Some(true),
            log_level: Some("info".to_string()),
        }
    }
}

impl ApplicationConfig {
    /// Joins the host base URL with the fixed plugin-scoped API route.
    pub fn plugin_endpoint(&self) -> String {
        format!(
            "{}/api/plugin/mattacloud",
            self.octoprint_url.trim_end_matches('/')
        )
    }

    pub fn is_admin(&self) -> bool {
        self.admin.unwrap_or(true)
    }
}
