//! Конфигурация фронтенда
//!
//! `crates/frontend/config.toml` is embedded at compile time. A file that
//! fails to parse falls back to the built-in defaults with a warning.

use contracts::shared::config::{load_config_or_default, AppConfig};
use once_cell::sync::Lazy;

const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: Lazy<AppConfig> = Lazy::new(|| load_config_or_default(EMBEDDED_CONFIG));

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::config::load_config;

    #[test]
    fn embedded_config_parses() {
        let parsed = load_config(EMBEDDED_CONFIG);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().list.page_size, config().list.page_size);
    }
}
