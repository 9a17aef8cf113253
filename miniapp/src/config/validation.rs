use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid api_url: {configured}")]
    ApiUrl { configured: String },
    #[error("Invalid config_url: {configured}")]
    ConfigUrl { configured: String },
    #[error("Invalid request_timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    RequestTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Unknown default theme: {configured}")]
    DefaultTheme { configured: String },
    #[error("Invalid logging level: {configured}")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::ApiUrl { configured } => {
                format!(
                    "API URL is not a valid http(s) URL!\n\n\
                    Your configured value: {configured}\n\n\
                    Please update api_url in config.toml or ULTROID_API_URL."
                )
            }
            ConfigValidationError::ConfigUrl { configured } => {
                format!(
                    "Remote config URL is not a valid http(s) URL!\n\n\
                    Your configured value: {configured}\n\n\
                    Please update config_url in config.toml."
                )
            }
            ConfigValidationError::RequestTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Request timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update request_timeout_secs in config.toml."
                )
            }
            ConfigValidationError::DefaultTheme { configured } => {
                format!(
                    "Unknown theme '{configured}'!\n\n\
                    Run `ultroid-miniapp themes` to list the available themes \
                    and update theme.default in config.toml."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown logging level '{configured}'!\n\n\
                    Valid levels: trace, debug, info, warn, error\n\n\
                    Please update logging.level in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl ConfigLoadResult {
    pub fn config(&self) -> Option<&AppConfig> {
        match self {
            ConfigLoadResult::Success(config) => Some(config),
            _ => None,
        }
    }
}
