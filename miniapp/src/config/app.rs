use super::LoggingConfig;
use super::validation::ConfigValidationError;
use crate::theme::registry::{DEFAULT_THEME_ID, find_theme};
use serde::Deserialize;
use std::time::Duration;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    api_url: Option<String>,
    config_url: Option<String>,
    init_data: Option<String>,
    request_timeout_secs: Option<u64>,

    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

/// `[theme]` table
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ThemeConfig {
    default: Option<String>,
}

impl ThemeConfig {
    /// Theme applied before the saved one is known.
    pub fn default_theme(&self) -> &str {
        self.default.as_deref().unwrap_or(DEFAULT_THEME_ID)
    }
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Some(url) = self.api_url() {
            if !is_http_url(url) {
                errors.push(ConfigValidationError::ApiUrl {
                    configured: url.to_string(),
                });
            }
        }

        if let Some(url) = self.config_url() {
            if !is_http_url(url) {
                errors.push(ConfigValidationError::ConfigUrl {
                    configured: url.to_string(),
                });
            }
        }

        let timeout = self.request_timeout_secs();
        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::RequestTimeout {
                configured: timeout,
                min_limit: MIN_REQUEST_TIMEOUT_SECS,
                max_limit: MAX_REQUEST_TIMEOUT_SECS,
            });
        }

        let theme = self.theme.default_theme();
        if find_theme(theme).is_none() {
            errors.push(ConfigValidationError::DefaultTheme {
                configured: theme.to_string(),
            });
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn config_url(&self) -> Option<&str> {
        self.config_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Telegram init data used when the host does not provide one.
    pub fn init_data(&self) -> Option<&str> {
        self.init_data.as_deref().filter(|data| !data.is_empty())
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs())
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

fn is_http_url(url: &str) -> bool {
    reqwest::Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url(), None);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.theme().default_theme(), DEFAULT_THEME_ID);
        assert_eq!(config.logging().level(), "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        let config = parse("api_url = \"\"\ninit_data = \"\"");
        assert_eq!(config.api_url(), None);
        assert_eq!(config.init_data(), None);
    }

    #[test]
    fn test_validation_collects_every_error() {
        let config = parse(
            r#"
            api_url = "ftp://bot.example"
            request_timeout_secs = 0

            [theme]
            default = "neon"

            [logging]
            level = "loud"
            "#,
        );

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], ConfigValidationError::ApiUrl { .. }));
        assert!(errors[1].user_message().contains("Valid range: 1 - 300"));
    }

    #[test]
    fn test_valid_config() {
        let config = parse(
            r#"
            api_url = "https://bot.example:8443"
            request_timeout_secs = 10

            [theme]
            default = "cyber_teal"
            "#,
        );
        assert!(config.validate().is_ok());
        assert_eq!(config.api_url(), Some("https://bot.example:8443"));
    }
}
