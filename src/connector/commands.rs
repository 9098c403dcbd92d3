use serde::{Deserialize, Serialize};

/// Request bodies accepted by the plugin API route. The `command` field
/// selects the behavior on the backend.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PanelCommand {
    TestAuthToken { auth_token: String, url: String },
    WsReconnect,
    SetEnabled,
    SetConfigPrint,
}

/// Response to `test_auth_token` and `ws_reconnect`. Fields the backend
/// omits fall back to their defaults rather than failing the decode.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommandOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub text: String,
}

/// Response to `set_enabled`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct EnabledState {
    #[serde(default)]
    pub enabled: bool,
}

/// Response to `set_config_print`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct ConfigPrintState {
    #[serde(default)]
    pub config_print_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_token_serializes_with_command_tag() {
        let command = PanelCommand::TestAuthToken {
            auth_token: "tok".to_string(),
            url: "https://cloud.mattalabs.com/".to_string(),
        };
        let value = serde_json::to_value(&command).expect("command should serialize");
        assert_eq!(
            value,
            json!({
                "command": "test_auth_token",
                "auth_token": "tok",
                "url": "https://cloud.mattalabs.com/",
            })
        );
    }

    #[test]
    fn bare_commands_serialize_to_command_only_bodies() {
        for (command, name) in [
            (PanelCommand::WsReconnect, "ws_reconnect"),
            (PanelCommand::SetEnabled, "set_enabled"),
            (PanelCommand::SetConfigPrint, "set_config_print"),
        ] {
            let value = serde_json::to_value(&command).expect("command should serialize");
            assert_eq!(value, json!({ "command": name }));
        }
    }

    #[test]
    fn outcome_defaults_absent_fields() {
        let outcome: CommandOutcome = serde_json::from_value(json!({})).expect("empty object");
        assert!(!outcome.success);
        assert_eq!(outcome.text, "");

        let outcome: CommandOutcome =
            serde_json::from_value(json!({ "success": true, "text": "OK" })).expect("full object");
        assert!(outcome.success);
        assert_eq!(outcome.text, "OK");
    }

    #[test]
    fn toggle_responses_decode() {
        let enabled: EnabledState =
            serde_json::from_value(json!({ "success": true, "enabled": false }))
                .expect("enabled response");
        assert!(!enabled.enabled);

        let config: ConfigPrintState =
            serde_json::from_value(json!({ "success": true, "config_print_enabled": true }))
                .expect("config print response");
        assert!(config.config_print_enabled);
    }
}
