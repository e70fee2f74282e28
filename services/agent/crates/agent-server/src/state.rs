//! Shared state handed to every handler.

use medic_cli::application::services::config_service::load_probe_settings;
use medic_cli::infra::config::YamlConfigStore;
use medic_cli::infra::platform::detect_platform;
use medic_cli::infra::{SystemAssistant, system_assistant};
use medic_common::ServerConfig;

pub struct AppState {
    pub assistant: SystemAssistant,
    /// Required `X-API-Key` value. `None` disables the check.
    pub api_key: Option<String>,
    pub version: String,
    /// Externally visible address, advertised in `/agent-info`.
    pub base_url: String,
}

impl AppState {
    pub fn new(assistant: SystemAssistant, api_key: Option<String>, base_url: String) -> Self {
        Self {
            assistant,
            api_key: api_key.filter(|key| !key.is_empty()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            base_url,
        }
    }

    /// Detect the platform and load probe settings from the configured file,
    /// or from the CLI's default location when none is set.
    pub fn from_config(config: &ServerConfig) -> Self {
        let store = config
            .config
            .as_ref()
            .map_or_else(YamlConfigStore::new, YamlConfigStore::at);
        let settings = load_probe_settings(&store);
        let assistant = system_assistant(detect_platform(), settings);
        Self::new(
            assistant,
            config.api_key.clone(),
            format!("http://{}", config.listen_addr),
        )
    }
}
