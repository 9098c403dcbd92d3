use crate::connector::commands::{
    CommandOutcome, ConfigPrintState, EnabledState, PanelCommand,
};
use crate::errors::AppError;
use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// The seam the view-model talks to the backend through. One method per
/// recognized `command`.
#[async_trait]
pub trait ConnectorApi: Send + Sync {
    async fn test_auth_token(
        &self,
        auth_token: &str,
        url: &str,
    ) -> Result<CommandOutcome, AppError>;

    async fn ws_reconnect(&self) -> Result<CommandOutcome, AppError>;

    async fn set_enabled(&self) -> Result<EnabledState, AppError>;

    async fn set_config_print(&self) -> Result<ConfigPrintState, AppError>;
}

/// HTTP implementation posting JSON command bodies to the fixed
/// plugin-scoped route. The client is deliberately built without a request
/// timeout: panel calls carry no timeout, no retry and no cancellation, and
/// a request that never resolves leaves its spinner visible.
pub struct HttpConnectorApi {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpConnectorApi {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        HttpConnectorApi {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn dispatch<R: DeserializeOwned>(&self, command: &PanelCommand) -> Result<R, AppError> {
        debug!("📡 Dispatching {:?} to {}", command, self.endpoint);
        let mut request = self.client.post(&self.endpoint).json(command);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await.map_err(|e| {
            error!("❌ Request to {} failed to send: {}", self.endpoint, e);
            AppError::Network(format!("request to {} failed: {}", self.endpoint, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Plugin API answered {} with status {}", self.endpoint, status);
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Plugin API answered with status {}. Decoding body...", status);
        response.json::<R>().await.map_err(|e| {
            AppError::Response(format!("could not decode plugin API response: {}", e))
        })
    }
}

#[async_trait]
impl ConnectorApi for HttpConnectorApi {
    async fn test_auth_token(
        &self,
        auth_token: &str,
        url: &str,
    ) -> Result<CommandOutcome, AppError> {
        info!("🔑 Testing auth token against {}", url);
        self.dispatch(&PanelCommand::TestAuthToken {
            auth_token: auth_token.to_string(),
            url: url.to_string(),
        })
        .await
    }

    async fn ws_reconnect(&self) -> Result<CommandOutcome, AppError> {
        info!("🔌 Requesting websocket reconnect");
        self.dispatch(&PanelCommand::WsReconnect).await
    }

    async fn set_enabled(&self) -> Result<EnabledState, AppError> {
        self.dispatch(&PanelCommand::SetEnabled).await
    }

    async fn set_config_print(&self) -> Result<ConfigPrintState, AppError> {
        self.dispatch(&PanelCommand::SetConfigPrint).await
    }
}
