//! # Client Configuration
//!
//! Configuration management for the Agent Monitor client library and CLI.
//! Supports environment variables, config files, and command-line overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::error::{ClientError, ClientResult};

/// Host used when neither a base URL nor `AGENT_MONITOR_API_HOST` is given
pub const DEFAULT_HOST: &str = "localhost";
/// Port used when neither a base URL nor `AGENT_MONITOR_API_PORT` is given
pub const DEFAULT_PORT: u16 = 8000;

pub const ENV_API_URL: &str = "AGENT_MONITOR_API_URL";
pub const ENV_API_HOST: &str = "AGENT_MONITOR_API_HOST";
pub const ENV_API_PORT: &str = "AGENT_MONITOR_API_PORT";
pub const ENV_API_TIMEOUT_MS: &str = "AGENT_MONITOR_API_TIMEOUT_MS";
pub const ENV_TOKEN: &str = "AGENT_MONITOR_TOKEN";
pub const ENV_CLIENT_SECRET: &str = "AGENT_MONITOR_CLIENT_SECRET";
pub const ENV_CLIENT_ID: &str = "AGENT_MONITOR_CLIENT_ID";
pub const ENV_CLI_PRETTY: &str = "AGENT_MONITOR_CLI_PRETTY";

/// Client configuration for API connections and CLI behavior
///
/// # Examples
///
/// ```rust
/// use agent_monitor_client::config::ClientConfig;
///
/// // Default configuration
/// let config = ClientConfig::default();
/// assert_eq!(config.api.host, "localhost");
/// assert_eq!(config.api.port, 8000);
/// assert_eq!(config.resolved_base_url(), "http://localhost:8000");
/// ```
///
/// ```rust,no_run
/// use agent_monitor_client::config::ClientConfig;
///
/// // Load configuration from environment and config files
/// let config = ClientConfig::load().expect("Failed to load config");
/// println!("Agent Monitor URL: {}", config.resolved_base_url());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API connection settings
    pub api: ApiEndpointConfig,
    /// Credentials presented on every request
    pub auth: AuthSettings,
    /// CLI-specific settings
    pub cli: CliConfig,
}

/// API endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEndpointConfig {
    /// Full base URL; takes precedence over `host`/`port` when set
    pub base_url: Option<String>,
    /// Host used to build the base URL when `base_url` is unset
    pub host: String,
    /// Port used to build the base URL when `base_url` is unset
    pub port: u16,
    /// Request timeout in milliseconds; unset leaves the transport default
    pub timeout_ms: Option<u64>,
}

/// Stored credentials
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// JWT bearer token
    pub token: Option<String>,
    /// API-key secret
    pub client_secret: Option<String>,
    /// API client id
    pub client_id: Option<String>,
}

/// CLI-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for ApiEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_ms: None,
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.credentials(), f)
    }
}

impl AuthSettings {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            token: self.token.clone(),
            client_secret: self.client_secret.clone(),
            client_id: self.client_id.clone(),
        }
    }
}

impl ApiEndpointConfig {
    /// Base URL for requests: the explicit URL if set, otherwise `http://{host}:{port}`
    ///
    /// Trailing path separators are stripped.
    pub fn resolved_base_url(&self) -> String {
        let url = match &self.base_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => format!("http://{}:{}", self.host, self.port),
        };
        url.trim_end_matches('/').to_string()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (./agent-monitor.toml, ~/.agent-monitor/config.toml, ...)
    /// 3. Default values
    pub fn load() -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(config_path) = Self::find_config_file() {
            debug!("Loading config from: {}", config_path.display());
            match Self::load_from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => {
                    // Continue with defaults if config file fails
                    warn!("Failed to load config file: {}", e);
                }
            }
        }

        config.apply_env_overrides();

        debug!("Loaded client configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a specific file, then apply environment overrides
    pub fn load_with_file(path: &Path) -> ClientResult<Self> {
        let mut config = Self::load_from_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ClientError::config_error(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Find the config file in standard locations
    pub fn find_config_file() -> Option<PathBuf> {
        let mut possible_paths = vec![
            PathBuf::from("./agent-monitor.toml"),
            PathBuf::from("./config/agent-monitor.toml"),
        ];
        if let Some(home) = dirs::home_dir() {
            possible_paths.push(home.join(".agent-monitor").join("config.toml"));
        }
        if let Some(config_dir) = dirs::config_dir() {
            possible_paths.push(config_dir.join("agent-monitor").join("client.toml"));
        }

        possible_paths
            .into_iter()
            .find(|path| path.exists() && path.is_file())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = Some(url);
        }
        if let Some(host) = lookup(ENV_API_HOST) {
            self.api.host = host;
        }
        if let Some(port) = lookup(ENV_API_PORT) {
            match port.parse() {
                Ok(port) => self.api.port = port,
                Err(e) => warn!("Ignoring invalid {}='{}': {}", ENV_API_PORT, port, e),
            }
        }
        if let Some(timeout) = lookup(ENV_API_TIMEOUT_MS) {
            match timeout.parse() {
                Ok(timeout_ms) => self.api.timeout_ms = Some(timeout_ms),
                Err(e) => warn!("Ignoring invalid {}='{}': {}", ENV_API_TIMEOUT_MS, timeout, e),
            }
        }

        if let Some(token) = lookup(ENV_TOKEN) {
            self.auth.token = Some(token);
        }
        if let Some(secret) = lookup(ENV_CLIENT_SECRET) {
            self.auth.client_secret = Some(secret);
        }
        if let Some(client_id) = lookup(ENV_CLIENT_ID) {
            self.auth.client_id = Some(client_id);
        }

        if let Some(pretty) = lookup(ENV_CLI_PRETTY) {
            match pretty.parse() {
                Ok(pretty) => self.cli.pretty = pretty,
                Err(e) => warn!("Ignoring invalid {}='{}': {}", ENV_CLI_PRETTY, pretty, e),
            }
        }
    }

    /// Base URL the client should use
    pub fn resolved_base_url(&self) -> String {
        self.api.resolved_base_url()
    }

    /// Credentials from the `[auth]` section
    pub fn credentials(&self) -> Credentials {
        self.auth.credentials()
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> ClientResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ClientError::config_error(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            ClientError::config_error(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get default config file path
    pub fn default_config_path() -> ClientResult<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| ClientError::config_error("Could not determine home directory"))?;

        Ok(home_dir.join(".agent-monitor").join("config.toml"))
    }
}

/// Base URL derived from `AGENT_MONITOR_API_HOST` / `AGENT_MONITOR_API_PORT`
///
/// Used when a client is constructed without an explicit base URL. The port is taken
/// verbatim from the environment.
pub fn default_base_url() -> String {
    let host = std::env::var(ENV_API_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = std::env::var(ENV_API_PORT).unwrap_or_else(|_| DEFAULT_PORT.to_string());
    format!("http://{}:{}", host, port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.resolved_base_url(), "http://localhost:8000");
        assert!(config.api.timeout_ms.is_none());
        assert!(config.auth.token.is_none());
        assert!(config.cli.pretty);
    }

    #[test]
    fn test_explicit_base_url_wins_and_is_normalized() {
        let mut config = ClientConfig::default();
        config.api.base_url = Some("https://monitor.example.com/api//".to_string());
        config.api.host = "ignored".to_string();

        assert_eq!(config.resolved_base_url(), "https://monitor.example.com/api");
    }

    #[test]
    fn test_overrides_host_and_port() {
        let mut config = ClientConfig::default();
        config.apply_overrides(lookup_from(&[
            (ENV_API_HOST, "monitor.internal"),
            (ENV_API_PORT, "9001"),
        ]));

        assert_eq!(config.resolved_base_url(), "http://monitor.internal:9001");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = ClientConfig::default();
        config.apply_overrides(lookup_from(&[(ENV_API_PORT, "not-a-port")]));

        assert_eq!(config.api.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_timeout_and_pretty_overrides_are_ignored() {
        let mut config = ClientConfig::default();
        config.api.timeout_ms = Some(2000);
        config.cli.pretty = false;
        config.apply_overrides(lookup_from(&[
            (ENV_API_TIMEOUT_MS, "soon"),
            (ENV_CLI_PRETTY, "maybe"),
        ]));

        assert_eq!(config.api.timeout_ms, Some(2000));
        assert!(!config.cli.pretty);
    }

    #[test]
    fn test_credential_overrides() {
        let mut config = ClientConfig::default();
        config.apply_overrides(lookup_from(&[
            (ENV_TOKEN, "jwt"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_CLIENT_ID, "client-1"),
            (ENV_API_TIMEOUT_MS, "1500"),
            (ENV_CLI_PRETTY, "false"),
        ]));

        let credentials = config.credentials();
        assert_eq!(credentials.token.as_deref(), Some("jwt"));
        assert_eq!(credentials.client_secret.as_deref(), Some("secret"));
        assert_eq!(credentials.client_id.as_deref(), Some("client-1"));
        assert_eq!(config.api.timeout_ms, Some(1500));
        assert!(!config.cli.pretty);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
[auth]
client_secret = "secret"
"#,
        )
        .unwrap();

        assert_eq!(config.api.port, DEFAULT_PORT);
        assert_eq!(config.auth.client_secret.as_deref(), Some("secret"));
        assert!(config.cli.pretty);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("agent-monitor.toml");

        let mut original_config = ClientConfig::default();
        original_config.api.base_url = Some("http://127.0.0.1:8000".to_string());
        original_config.auth.client_id = Some("client-1".to_string());
        original_config.save_to_file(&config_path).unwrap();

        let loaded_config = ClientConfig::load_from_file(&config_path).unwrap();
        assert_eq!(loaded_config.resolved_base_url(), "http://127.0.0.1:8000");
        assert_eq!(loaded_config.auth.client_id.as_deref(), Some("client-1"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = ClientConfig::load_from_file(&temp_dir.path().join("missing.toml")).unwrap_err();

        assert!(matches!(err, ClientError::ConfigError(_)));
    }

    #[test]
    fn test_debug_output_redacts_auth() {
        let mut config = ClientConfig::default();
        config.auth.token = Some("super-secret-token".to_string());

        assert!(!format!("{:?}", config).contains("super-secret-token"));
    }
}
