use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full base URL; when absent the page host with `port` is used
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_version")]
    pub version: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u32,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_login_url")]
    pub login_url: String,
}

fn default_port() -> u16 {
    3000
}

fn default_version() -> String {
    "v1".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_ttl_ms() -> u32 {
    4000
}

fn default_max_visible() -> usize {
    5
}

fn default_login_url() -> String {
    "/login".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
            version: default_version(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
            max_visible: default_max_visible(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            list: ListConfig::default(),
            notifications: NotificationsConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
version = "v1"

[list]
page_size = 10

[notifications]
ttl_ms = 4000
max_visible = 5

[session]
login_url = "/login"
"#;

/// Parse configuration text
///
/// Missing sections and keys take their defaults. A zero page size is
/// rejected since no list could be paged with it.
pub fn load_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    if config.list.page_size == 0 {
        anyhow::bail!("list.page_size must be at least 1");
    }
    info!(
        "config loaded: api {} port {}, page size {}",
        config.api.version,
        config.api.port,
        config.list.page_size
    );
    Ok(config)
}

/// Parse `contents`, falling back to the embedded default on error
pub fn load_config_or_default(contents: &str) -> AppConfig {
    match load_config(contents) {
        Ok(config) => config,
        Err(e) => {
            warn!("invalid config, using embedded defaults: {}", e);
            load_config(DEFAULT_CONFIG).unwrap_or_default()
        }
    }
}

impl ApiConfig {
    /// `{base}/{version}/{path}` with single slashes
    pub fn endpoint(&self, base: &str, path: &str) -> String {
        format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            self.version.trim_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.list.page_size, 10);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = load_config(
            r#"
[api]
base_url = "https://api.findmyspot.lk"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://api.findmyspot.lk"));
        assert_eq!(config.api.version, "v1");
        assert_eq!(config.notifications.ttl_ms, 4000);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(load_config("[list]\npage_size = 0").is_err());
        assert_eq!(load_config_or_default("[list]\npage_size = 0").list.page_size, 10);
    }

    #[test]
    fn endpoint_joins_cleanly() {
        let api = ApiConfig::default();
        assert_eq!(
            api.endpoint("http://localhost:3000/", "/province/65f0"),
            "http://localhost:3000/v1/province/65f0"
        );
    }
}
