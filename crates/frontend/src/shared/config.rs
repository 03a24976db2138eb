//! Application configuration.
//!
//! The defaults are embedded from `config.default.toml`. Two values can be
//! overridden when the bundle is built:
//! - `SURVEY_CONSOLE_API_BASE` replaces `api.base_url`
//! - `SURVEY_CONSOLE_PASSCODE` replaces `auth.passcode`

use leptos::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.default.toml");

/// The API clamps `pageSize` to this value.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    pub session_key: String,
    #[serde(default)]
    pub passcode: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Fallback used when the embedded file fails validation
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "/api".to_string(),
                request_timeout_ms: 30_000,
            },
            table: TableConfig {
                default_page_size: 25,
                page_size_options: vec![10, 25, 50, 100],
            },
            auth: AuthConfig {
                session_key: "survey_console_authenticated".to_string(),
                passcode: None,
            },
        }
    }
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "api.request_timeout_ms",
                reason: "must be positive".to_string(),
            });
        }
        let options = &self.table.page_size_options;
        if options.is_empty() {
            return Err(ConfigError::Invalid {
                key: "table.page_size_options",
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(bad) = options.iter().find(|&&o| o == 0 || o > MAX_PAGE_SIZE) {
            return Err(ConfigError::Invalid {
                key: "table.page_size_options",
                reason: format!("{} is outside 1..={}", bad, MAX_PAGE_SIZE),
            });
        }
        if !options.contains(&self.table.default_page_size) {
            return Err(ConfigError::Invalid {
                key: "table.default_page_size",
                reason: format!(
                    "{} is not one of {:?}",
                    self.table.default_page_size, options
                ),
            });
        }
        if self.auth.session_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "auth.session_key",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Applies build-time overrides. Empty overrides are ignored.
    fn with_overrides(mut self, api_base: Option<&str>, passcode: Option<&str>) -> Self {
        if let Some(base) = api_base.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = base.trim().to_string();
        }
        if let Some(code) = passcode.filter(|v| !v.is_empty()) {
            self.auth.passcode = Some(code.to_string());
        }
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
        self
    }

    /// Passcode the gate checks against, `None` when the gate is disabled.
    pub fn passcode(&self) -> Option<&str> {
        self.auth.passcode.as_deref().filter(|p| !p.is_empty())
    }
}

/// Load the embedded configuration with build-time overrides applied.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::from_toml(DEFAULT_CONFIG)?;
    Ok(config.with_overrides(
        option_env!("SURVEY_CONSOLE_API_BASE"),
        option_env!("SURVEY_CONSOLE_PASSCODE"),
    ))
}

/// Config provided at the root of the component tree.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_matches_embedded_defaults() {
        let embedded = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        let fallback = AppConfig::default();
        assert_eq!(embedded.api, fallback.api);
        assert_eq!(embedded.table, fallback.table);
        assert_eq!(embedded.auth.session_key, fallback.auth.session_key);
        assert_eq!(embedded.passcode(), fallback.passcode());
    }

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.api.request_timeout_ms, 30_000);
        assert_eq!(config.table.default_page_size, 25);
        assert_eq!(config.table.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.passcode(), None);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG)
            .unwrap()
            .with_overrides(Some("https://survey.example.org/api/"), Some("letmein"));
        assert_eq!(config.api.base_url, "https://survey.example.org/api");
        assert_eq!(config.passcode(), Some("letmein"));
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG)
            .unwrap()
            .with_overrides(Some("  "), Some(""));
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.passcode(), None);
    }

    #[test]
    fn test_default_page_size_must_be_an_option() {
        let raw = DEFAULT_CONFIG.replace("default_page_size = 25", "default_page_size = 30");
        let err = AppConfig::from_toml(&raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "table.default_page_size",
                ..
            }
        ));
    }

    #[test]
    fn test_page_size_above_server_limit_rejected() {
        let raw = DEFAULT_CONFIG.replace("[10, 25, 50, 100]", "[25, 500]");
        assert!(AppConfig::from_toml(&raw).is_err());
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let err = AppConfig::from_toml("[api]\nbase_url = \"/api\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
