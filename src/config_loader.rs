use crate::app_config::ApplicationConfig;
use crate::connector_settings::ConnectorSettings;
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::time::Instant;

#[derive(Debug, Deserialize, Clone)]
pub struct MasterConfig {
    #[serde(rename = "application")]
    pub app_settings: ApplicationConfig,
    #[serde(default)]
    pub connector: ConnectorSettings,
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'. 📖", path))?;
    debug!("Read config file in {:?}", start_time.elapsed());

    let config = parse_config(&config_str)
        .with_context(|| format!("Failed to parse configuration from '{}'", path))?;

    info!(
        "✅ Successfully loaded and validated configuration from '{}' in {:?}",
        path,
        start_time.elapsed()
    );
    Ok(config)
}

pub fn parse_config(config_str: &str) -> Result<MasterConfig> {
    let parse_start_time = Instant::now();
    let config: MasterConfig = serde_yaml::from_str(config_str)
        .context("Failed to parse YAML configuration. 💔")?;
    debug!("Parsed YAML in {:?}", parse_start_time.elapsed());

    let validate_start_time = Instant::now();
    validate_master_config(&config).context("Master configuration validation failed 👎")?;
    debug!("Validated master config in {:?}", validate_start_time.elapsed());

    Ok(config)
}

fn validate_master_config(config: &MasterConfig) -> Result<()> {
    debug!("🕵️ Validating master configuration...");
    let validation_start_time = Instant::now();

    if config.app_settings.octoprint_url.is_empty() {
        bail!("❌ Application octoprint_url cannot be empty.");
    }
    if reqwest::Url::parse(&config.app_settings.octoprint_url).is_err() {
        bail!(
            "❌ Invalid octoprint_url '{}'. Expected an absolute URL such as http://localhost:5000.",
            config.app_settings.octoprint_url
        );
    }

    // The panel itself sends fields to the backend unvalidated, so connector
    // values only ever warn here.
    if config.connector.authorization_token.is_empty()
        || config.connector.authorization_token.starts_with("e.g.")
    {
        warn!(
            "⚠️ Authorization token looks unset ('{}'). The connectivity test will likely fail.",
            config.connector.authorization_token
        );
    }
    if config.connector.num_cameras > 2 {
        warn!(
            "⚠️ num_cameras is {} but the panel only has sub-panels for cameras 1 and 2. \
             Panel visibility will be left unchanged.",
            config.connector.num_cameras
        );
    }

    info!(
        "👍 Master configuration validated successfully in {:?}.",
        validation_start_time.elapsed()
    );
    Ok(())
}
